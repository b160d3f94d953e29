//! Datadict CLI - inspect tab-delimited game data tables
//!
//! ```bash
//! datadict automagic                     # Load automagic.txt from the data dir
//! datadict automagic rules.txt --json    # Dump records as JSON
//! datadict columns automagic.txt         # Show the header layout
//! ```
//!
//! Set `RUST_LOG=debug` for decoder diagnostics.

use clap::{Parser, Subcommand};
use datadict::{load_file, AutoMagicRecord, Config, GameData, Hero, Table};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "datadict")]
#[command(about = "Decode tab-delimited game data tables", long_about = None)]
struct Cli {
    /// Directory holding the extracted tables (overrides DATADICT_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the automagic table and print its rules
    Automagic {
        /// Table file (default: <data dir>/automagic.txt)
        input: Option<PathBuf>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the column layout of any table
    Columns {
        /// Table file
        input: PathBuf,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Automagic {
            input,
            json,
            output,
        } => cmd_automagic(input, cli.data_dir, json, output.as_deref()),

        Commands::Columns { input } => cmd_columns(&input),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_automagic(
    input: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    json: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::from_env()?;
    if let Some(dir) = data_dir {
        config = config.with_data_dir(dir);
    }
    let path = input.unwrap_or_else(|| config.automagic_path());

    eprintln!("📄 Loading: {}", path.display());
    let data = GameData::from_parts(load_file::<AutoMagicRecord>(&path)?);
    let rules = data.automagic();

    if json {
        let json = serde_json::to_string_pretty(rules.as_slice())?;
        return write_output(&json, output);
    }

    let mut by_class: BTreeMap<&str, usize> = BTreeMap::new();
    for rule in rules {
        *by_class.entry(class_label(rule.class)).or_default() += 1;
    }
    let spawnable = rules.iter().filter(|r| r.spawnable).count();

    eprintln!("   Spawnable: {}/{}", spawnable, rules.len());
    for (class, count) in &by_class {
        eprintln!("   {}: {}", class, count);
    }

    let mut listing = String::new();
    for (i, rule) in rules.iter().enumerate() {
        let mods: Vec<&str> = rule.active_mods().map(|m| m.code.as_str()).collect();
        listing.push_str(&format!(
            "{:>4}  {:<32} {:<6} group {:>4}  lvl {:>3}-{:<3} {}\n",
            i + 1,
            rule.name,
            class_label(rule.class),
            rule.group,
            rule.min_spawn_level,
            rule.max_spawn_level,
            mods.join(","),
        ));
    }
    write_output(listing.trim_end(), output)
}

fn cmd_columns(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Reading: {}", input.display());

    let bytes = fs::read(input)?;
    let table = Table::from_bytes(&bytes)?;

    eprintln!("   Columns: {}", table.headers().len());
    eprintln!("   Rows: {}", table.len());

    for (pos, name) in table.headers().iter().enumerate() {
        // Shadowed duplicates resolve elsewhere.
        let marker = match table.index().position(name) {
            Some(p) if p != pos => "  (shadowed)",
            _ => "",
        };
        println!("{:>4}  {}{}", pos, name, marker);
    }
    Ok(())
}

fn class_label(hero: Hero) -> &'static str {
    match hero {
        Hero::None => "any",
        other => other.to_code(),
    }
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
