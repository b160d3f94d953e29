//! Automagic rules: magic properties automatically rolled onto items as they
//! spawn (the class-specific "autoprefix" mods).

use serde::{Deserialize, Serialize};

use super::Record;
use crate::cursor::Cursor;
use crate::models::{Hero, ModSlot};

/// One row of the automagic table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AutoMagicRecord {
    /// Free-form label; usually the equivalent affix name.
    pub name: String,

    /// 0 for classic-only rows, 100 for expansion rows.
    pub version: i64,

    /// Whether the row can roll at all.
    pub spawnable: bool,

    /// Whether the row can roll on rare items.
    pub spawn_on_rare: bool,

    /// Lowest treasure level the row spawns at.
    pub min_spawn_level: i64,

    /// Treasure level above which the row stops spawning.
    pub max_spawn_level: i64,

    /// Added to the item's level requirement.
    pub level_requirement: i64,

    /// Class restriction.
    pub class: Hero,

    /// Level requirement applied when the wearer is of [`Self::class`].
    pub class_level_requirement: i64,

    /// Relative weight against other rows of the same group.
    pub frequency: i64,

    /// Rows sharing a group are mutually exclusive.
    pub group: i64,

    pub mods: [ModSlot; 3],

    /// Colourise the item.
    pub transform: bool,

    /// Colour code used when [`Self::transform`] is set.
    pub palette_transform: i64,

    /// Item type codes that may receive this row.
    pub include_item_codes: [String; 7],

    /// Item type codes that never receive this row.
    pub exclude_item_codes: [String; 3],

    pub cost_divide: i64,
    pub cost_multiply: i64,
    pub cost_add: i64,
}

impl Record for AutoMagicRecord {
    const NAME: &'static str = "AutoMagic";

    const COLUMNS: &'static [&'static str] = &[
        "Name",
        "version",
        "spawnable",
        "rare",
        "level",
        "maxlevel",
        "levelreq",
        "class",
        "classlevelreq",
        "frequency",
        "group",
        "mod1code",
        "mod1param",
        "mod1min",
        "mod1max",
        "mod2code",
        "mod2param",
        "mod2min",
        "mod2max",
        "mod3code",
        "mod3param",
        "mod3min",
        "mod3max",
        "transform",
        "transformcolor",
        "itype1",
        "itype2",
        "itype3",
        "itype4",
        "itype5",
        "itype6",
        "itype7",
        "etype1",
        "etype2",
        "etype3",
        "divide",
        "multiply",
        "add",
    ];

    fn decode(row: &mut Cursor<'_>) -> Self {
        Self {
            name: row.read_string("Name").to_string(),
            version: row.read_integer("version"),
            spawnable: row.read_bool("spawnable"),
            spawn_on_rare: row.read_bool("rare"),
            min_spawn_level: row.read_integer("level"),
            max_spawn_level: row.read_integer("maxlevel"),
            level_requirement: row.read_integer("levelreq"),
            class: Hero::from_code(row.read_string("class")),
            class_level_requirement: row.read_integer("classlevelreq"),
            frequency: row.read_integer("frequency"),
            group: row.read_integer("group"),
            mods: [read_mod(row, 1), read_mod(row, 2), read_mod(row, 3)],
            transform: row.read_bool("transform"),
            palette_transform: row.read_integer("transformcolor"),
            include_item_codes: [
                row.read_string("itype1").to_string(),
                row.read_string("itype2").to_string(),
                row.read_string("itype3").to_string(),
                row.read_string("itype4").to_string(),
                row.read_string("itype5").to_string(),
                row.read_string("itype6").to_string(),
                row.read_string("itype7").to_string(),
            ],
            exclude_item_codes: [
                row.read_string("etype1").to_string(),
                row.read_string("etype2").to_string(),
                row.read_string("etype3").to_string(),
            ],
            cost_divide: row.read_integer("divide"),
            cost_multiply: row.read_integer("multiply"),
            cost_add: row.read_integer("add"),
        }
    }
}

fn read_mod(row: &mut Cursor<'_>, slot: usize) -> ModSlot {
    ModSlot {
        code: row.read_string(&format!("mod{slot}code")).to_string(),
        param: row.read_integer(&format!("mod{slot}param")),
        min: row.read_integer(&format!("mod{slot}min")),
        max: row.read_integer(&format!("mod{slot}max")),
    }
}

impl AutoMagicRecord {
    /// Modifier slots that carry a property code.
    pub fn active_mods(&self) -> impl Iterator<Item = &ModSlot> {
        self.mods.iter().filter(|m| !m.is_empty())
    }
}
