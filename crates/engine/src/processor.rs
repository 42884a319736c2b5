// crates/engine/src/processor.rs
use crate::error::{EngineError, Result};
use eolify::{CRLF, Normalize};
use std::path::Path;

const BOM: char = '\u{feff}';

/// What a single conversion did to a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOutcome {
    pub bom_removed: bool,
    /// `false` when the rewritten bytes equal the original ones.
    pub changed: bool,
}

/// Rewrite one file in place as UTF-8 without BOM and with CRLF line endings.
///
/// The file is read in full before it is truncated. Nothing is backed up, so
/// an I/O failure during the write can leave it partially written.
///
/// # Errors
/// Returns `FileRead`/`FileWrite` on I/O failure and `Decode` if the content
/// is not valid UTF-8. The file is untouched when reading or decoding fails.
pub fn convert_file(path: &Path) -> Result<ConvertOutcome> {
    let bytes = std::fs::read(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = String::from_utf8(bytes).map_err(|e| EngineError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    let body = strip_bom(&text);
    let bom_removed = body.len() != text.len();
    let normalized = CRLF::normalize_str(body);
    let changed = normalized.as_bytes() != text.as_bytes();

    std::fs::write(path, normalized.as_bytes()).map_err(|e| EngineError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    log::debug!(
        "converted {} (bom_removed={bom_removed}, changed={changed})",
        path.display()
    );
    Ok(ConvertOutcome {
        bom_removed,
        changed,
    })
}

/// Drop exactly one leading U+FEFF, if present.
#[must_use]
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every line break in the output is CRLF
        #[test]
        fn test_no_lone_cr_or_lf(content in "[a-z\r\n ]{0,200}") {
            let out = CRLF::normalize_str(&content);
            let bytes = out.as_bytes();
            for (i, b) in bytes.iter().enumerate() {
                if *b == b'\r' {
                    prop_assert_eq!(bytes.get(i + 1), Some(&b'\n'));
                }
                if *b == b'\n' {
                    prop_assert!(i > 0 && bytes[i - 1] == b'\r');
                }
            }
        }

        /// A second pass leaves BOM-stripped, normalized text as it is
        #[test]
        fn test_normalize_idempotent(content in "\u{feff}?\\PC{0,100}[\r\n]{0,5}\\PC{0,100}") {
            let once = CRLF::normalize_str(strip_bom(&content));
            let twice = CRLF::normalize_str(strip_bom(&once));
            prop_assert_eq!(twice, once);
        }

        /// Text without line breaks is never altered
        #[test]
        fn test_text_without_breaks_unchanged(content in "[^\r\n]{0,200}") {
            let out = CRLF::normalize_str(&content);
            prop_assert_eq!(out.as_str(), content.as_str());
        }
    }
}
