//! Byte-to-text decoding for table files.
//!
//! Most tables are plain ASCII, but some were saved by legacy editors in a
//! Windows code page. Valid UTF-8 is taken as is. Anything else is decoded
//! with a single-byte Latin code page: the detected one if chardet names one,
//! Windows-1252 otherwise.

use encoding_rs::{Encoding, WINDOWS_1252};

use crate::error::{StructuralError, TableResult};

const UTF8_BOM: &str = "\u{feff}";

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" | "" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode table bytes to text.
///
/// Short non-ASCII cells give chardet little to go on, and its guess is often
/// a Cyrillic or Hebrew code page. Only Latin guesses are trusted.
pub fn decode_text(bytes: &[u8]) -> TableResult<String> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string());
    }

    let detected = detect_encoding(bytes);
    let label = match detected.as_str() {
        "iso-8859-1" | "iso-8859-15" | "windows-1252" => detected.as_str(),
        other => {
            tracing::debug!(detected = other, "ignoring non-Latin charset guess");
            "windows-1252"
        }
    };
    decode_content(bytes, label)
}

/// Decode bytes using the named encoding.
///
/// Unknown labels fall back to Windows-1252, the code page the legacy files use.
pub fn decode_content(bytes: &[u8], label: &str) -> TableResult<String> {
    let encoding = Encoding::for_label(label.as_bytes()).unwrap_or(WINDOWS_1252);
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(StructuralError::Encoding(format!(
            "invalid {} byte sequence",
            used.name()
        )));
    }

    tracing::debug!(encoding = used.name(), "decoded non-UTF-8 table");
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let text = decode_text(b"Name\tversion\nFoo\t0\n").unwrap();
        assert_eq!(text, "Name\tversion\nFoo\t0\n");
    }

    #[test]
    fn test_bom_stripped() {
        let text = decode_text("\u{feff}Name\n".as_bytes()).unwrap();
        assert_eq!(text, "Name\n");
    }

    #[test]
    fn test_windows_1252_decoding() {
        // "Épée" in Windows-1252
        let bytes: &[u8] = &[0xC9, b'p', 0xE9, b'e'];
        let text = decode_content(bytes, "windows-1252").unwrap();
        assert_eq!(text, "\u{c9}p\u{e9}e");
    }

    #[test]
    fn test_unknown_label_falls_back() {
        let text = decode_content(&[b'a', 0xE9], "no-such-charset").unwrap();
        assert_eq!(text, "a\u{e9}");
    }

    #[test]
    fn test_latin_bytes_never_take_a_foreign_code_page() {
        let cases: [(&[u8], &str); 3] = [
            (b"\xe9\xe8\xe0\xe7\t\xe4\xe9\xe8", "éèàç\täéè"),
            (b"\xc0\xc9\xc8\xc4\xc7\xc1\xd3\xcd\t1", "ÀÉÈÄÇÁÓÍ\t1"),
            (b"\xe9\xe8\xe0\xf9\t\xe4\xf6\xfc", "éèàù\täöü"),
        ];
        for (bytes, expected) in cases {
            assert_eq!(decode_text(bytes).unwrap(), expected);
        }
    }

    #[test]
    fn test_detect_ascii() {
        assert_eq!(detect_encoding(b"name\tversion"), "utf-8");
    }
}
