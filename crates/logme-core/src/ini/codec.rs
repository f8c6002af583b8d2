//! Text codec for `logme.ini` documents.
//!
//! File format:
//! ```text
//! [section]
//! key = value
//! nested =
//! 	sub: value
//! 	other: value
//!
//! [next]
//! ...
//! ```
//! Sections are separated by one blank line.  Nested entries are written with
//! a single leading tab; any leading whitespace is accepted on read.  Lines
//! whose first non-blank character is `#` or `;` are comments and are not
//! preserved.

use thiserror::Error;
use tracing::debug;

use crate::domain::document::{ConfigDocument, NestedValue, OptionValue, Section};

/// Errors that can occur while parsing a document.  `line` is 1-based.
#[derive(Debug, Error, PartialEq)]
pub enum IniError {
    /// A `[` line that is not a well-formed `[name]` header.
    #[error("line {line}: malformed section header {text:?}")]
    MalformedHeader { line: usize, text: String },

    /// The same section name appears twice.
    #[error("line {line}: duplicate section [{name}]")]
    DuplicateSection { line: usize, name: String },

    /// The same option appears twice in one section.
    #[error("line {line}: duplicate option {option:?} in section [{section}]")]
    DuplicateOption {
        line: usize,
        section: String,
        option: String,
    },

    /// An option appears before the first section header.
    #[error("line {line}: option outside of any section")]
    OptionOutsideSection { line: usize },

    /// An option line has no `=` delimiter or an empty key.
    #[error("line {line}: expected `key = value`, got {text:?}")]
    MalformedOption { line: usize, text: String },

    /// An indented line with no option to attach it to, or following an
    /// option that already has an inline value.
    #[error("line {line}: unexpected continuation line {text:?}")]
    UnexpectedContinuation { line: usize, text: String },

    /// A continuation line without a `key: value` shape.
    #[error("line {line}: expected `key: value` in nested block, got {text:?}")]
    MalformedNestedEntry { line: usize, text: String },

    /// The same key appears twice in one nested block.
    #[error("line {line}: duplicate key {key:?} in nested option {option:?}")]
    DuplicateNestedKey {
        line: usize,
        option: String,
        key: String,
    },
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parses `text` into a [`ConfigDocument`].
///
/// # Errors
///
/// Returns [`IniError`] describing the first malformed line.
///
/// # Examples
///
/// ```rust
/// use logme_core::ini::{parse_document, write_document};
///
/// let text = "[logme]\nlevel = DEBUG\n";
/// let doc = parse_document(text).unwrap();
/// assert_eq!(doc.section("logme").unwrap().get_plain("level"), Some("DEBUG"));
/// assert_eq!(write_document(&doc), text);
/// ```
pub fn parse_document(text: &str) -> Result<ConfigDocument, IniError> {
    let mut doc = ConfigDocument::new();
    let mut current: Option<Section> = None;
    // Option that the next continuation line attaches to.
    let mut open_option: Option<String> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end();
        let trimmed = line.trim_start();

        if trimmed.is_empty() {
            open_option = None;
            continue;
        }
        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        let indented = trimmed.len() != line.len();
        if indented {
            let section = current.as_mut();
            let option = open_option.as_deref();
            match (section, option) {
                (Some(section), Some(option)) => {
                    push_nested_entry(section, option, trimmed, line_no)?
                }
                _ => {
                    return Err(IniError::UnexpectedContinuation {
                        line: line_no,
                        text: trimmed.to_string(),
                    })
                }
            }
            continue;
        }

        if trimmed.starts_with('[') {
            let name = parse_header(trimmed, line_no)?;
            if doc.contains_section(&name)
                || current.as_ref().is_some_and(|s| s.name() == name)
            {
                return Err(IniError::DuplicateSection { line: line_no, name });
            }
            if let Some(done) = current.take() {
                doc.upsert_section(done);
            }
            current = Some(Section::new(name));
            open_option = None;
            continue;
        }

        let section = current
            .as_mut()
            .ok_or(IniError::OptionOutsideSection { line: line_no })?;
        let (key, value) = split_option(trimmed, line_no)?;
        if section.contains(&key) {
            return Err(IniError::DuplicateOption {
                line: line_no,
                section: section.name().to_string(),
                option: key,
            });
        }
        section.set(key.clone(), OptionValue::Plain(value));
        open_option = Some(key);
    }

    if let Some(done) = current {
        doc.upsert_section(done);
    }

    debug!(sections = doc.len(), "parsed ini document");
    Ok(doc)
}

/// Serializes `doc` into its canonical text form.
///
/// Writing is deterministic: the output of [`parse_document`] on text
/// produced here writes back byte-for-byte identical.
pub fn write_document(doc: &ConfigDocument) -> String {
    let mut out = String::new();
    for (idx, section) in doc.sections().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        write_section(&mut out, section);
    }
    out
}

// ── Parsing helpers ───────────────────────────────────────────────────────────

fn parse_header(line: &str, line_no: usize) -> Result<String, IniError> {
    let malformed = || IniError::MalformedHeader {
        line: line_no,
        text: line.to_string(),
    };
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(malformed)?;
    let name = inner.trim();
    if name.is_empty() || name.contains(['[', ']']) {
        return Err(malformed());
    }
    Ok(name.to_string())
}

fn split_option(line: &str, line_no: usize) -> Result<(String, String), IniError> {
    let (key, value) = line
        .split_once('=')
        .ok_or_else(|| IniError::MalformedOption {
            line: line_no,
            text: line.to_string(),
        })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(IniError::MalformedOption {
            line: line_no,
            text: line.to_string(),
        });
    }
    Ok((key.to_string(), value.trim().to_string()))
}

fn push_nested_entry(
    section: &mut Section,
    option: &str,
    entry: &str,
    line_no: usize,
) -> Result<(), IniError> {
    let (key, value) = entry
        .split_once(':')
        .map(|(k, v)| (k.trim(), v.trim()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| IniError::MalformedNestedEntry {
            line: line_no,
            text: entry.to_string(),
        })?;

    let unexpected = || IniError::UnexpectedContinuation {
        line: line_no,
        text: entry.to_string(),
    };
    let slot = section.get_mut(option).ok_or_else(unexpected)?;
    match slot {
        OptionValue::Plain(inline) if !inline.is_empty() => return Err(unexpected()),
        OptionValue::Plain(_) => {
            *slot = OptionValue::Nested(NestedValue::from_pairs([(key, value)]));
        }
        OptionValue::Nested(nested) => {
            if nested.contains(key) {
                return Err(IniError::DuplicateNestedKey {
                    line: line_no,
                    option: option.to_string(),
                    key: key.to_string(),
                });
            }
            nested.set(key, value);
        }
    }
    Ok(())
}

// ── Writing helpers ───────────────────────────────────────────────────────────

fn write_section(out: &mut String, section: &Section) {
    out.push('[');
    out.push_str(section.name());
    out.push_str("]\n");

    for (key, value) in section.options() {
        out.push_str(key);
        match value {
            OptionValue::Plain(v) if v.is_empty() => out.push_str(" =\n"),
            OptionValue::Plain(v) => {
                out.push_str(" = ");
                out.push_str(v);
                out.push('\n');
            }
            OptionValue::Nested(nested) => {
                out.push_str(" =\n");
                for (k, v) in nested.entries() {
                    out.push('\t');
                    out.push_str(k);
                    out.push(':');
                    if !v.is_empty() {
                        out.push(' ');
                        out.push_str(v);
                    }
                    out.push('\n');
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::templates::default_document;

    const DEFAULT_TEXT: &str = "\
[colors]
CRITICAL =
\tcolor: PURPLE
\tstyle: BOLD
ERROR = RED
WARNING = YELLOW
INFO = None
DEBUG = GREEN

[logme]
level = DEBUG
formatter = {asctime} - {name} - {levelname} - {module}::{funcName}::{message}
stream =
\ttype: StreamHandler
\tactive: True
\tlevel: DEBUG
file =
\ttype: FileHandler
\tactive: False
\tlevel: DEBUG
\tfilename: mylogpath/foo.log
null =
\ttype: NullHandler
\tactive: False
\tlevel: NOTSET
";

    #[test]
    fn test_default_document_writes_expected_text() {
        assert_eq!(write_document(&default_document()), DEFAULT_TEXT);
    }

    #[test]
    fn test_default_text_parses_to_default_document() {
        assert_eq!(parse_document(DEFAULT_TEXT).unwrap(), default_document());
    }

    #[test]
    fn test_first_line_is_colors_header() {
        let text = write_document(&default_document());
        assert_eq!(text.lines().next(), Some("[colors]"));
    }

    #[test]
    fn test_parse_accepts_spaces_crlf_and_comments() {
        // Arrange: hand-edited file with CRLF endings, comments and space indentation
        let text = "; top comment\r\n[logme]\r\nlevel=INFO\r\n# note\r\nfile =\r\n    active: True\r\n    filename: a.log\r\n";

        // Act
        let doc = parse_document(text).unwrap();

        // Assert
        let logme = doc.section("logme").unwrap();
        assert_eq!(logme.get_plain("level"), Some("INFO"));
        let file = logme.get_nested("file").unwrap();
        assert_eq!(file.get("active"), Some("True"));
        assert_eq!(file.get("filename"), Some("a.log"));
    }

    #[test]
    fn test_rewrite_of_hand_edited_file_is_stable() {
        let text = "[a]\nx=1\n\n\n[b]\ny =\n  k:v\n";
        let once = write_document(&parse_document(text).unwrap());
        let twice = write_document(&parse_document(&once).unwrap());
        assert_eq!(once, "[a]\nx = 1\n\n[b]\ny =\n\tk: v\n");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_plain_value_round_trips() {
        let text = "[a]\nempty =\nnext = 1\n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.section("a").unwrap().get_plain("empty"), Some(""));
        assert_eq!(write_document(&doc), text);
    }

    #[test]
    fn test_nested_value_keeps_colons_after_the_first() {
        let doc = parse_document("[a]\nformatter =\n\tfmt: {module}::{message}\n").unwrap();
        let nested = doc.section("a").unwrap().get_nested("formatter").unwrap();
        assert_eq!(nested.get("fmt"), Some("{module}::{message}"));
    }

    #[test]
    fn test_empty_text_is_empty_document() {
        assert!(parse_document("").unwrap().is_empty());
        assert_eq!(write_document(&ConfigDocument::new()), "");
    }

    #[test]
    fn test_duplicate_section_reports_line() {
        let err = parse_document("[a]\nx = 1\n[a]\n").unwrap_err();
        assert_eq!(
            err,
            IniError::DuplicateSection {
                line: 3,
                name: "a".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_option_is_rejected() {
        let err = parse_document("[a]\nx = 1\nx = 2\n").unwrap_err();
        assert!(matches!(err, IniError::DuplicateOption { line: 3, .. }));
    }

    #[test]
    fn test_option_before_header_is_rejected() {
        let err = parse_document("x = 1\n[a]\n").unwrap_err();
        assert_eq!(err, IniError::OptionOutsideSection { line: 1 });
    }

    #[test]
    fn test_malformed_header_is_rejected() {
        assert!(matches!(
            parse_document("[a\n").unwrap_err(),
            IniError::MalformedHeader { line: 1, .. }
        ));
        assert!(matches!(
            parse_document("[ ]\n").unwrap_err(),
            IniError::MalformedHeader { line: 1, .. }
        ));
    }

    #[test]
    fn test_option_without_delimiter_is_rejected() {
        let err = parse_document("[a]\njust words\n").unwrap_err();
        assert!(matches!(err, IniError::MalformedOption { line: 2, .. }));
    }

    #[test]
    fn test_continuation_after_inline_value_is_rejected() {
        let err = parse_document("[a]\nx = 1\n\tk: v\n").unwrap_err();
        assert!(matches!(err, IniError::UnexpectedContinuation { line: 3, .. }));
    }

    #[test]
    fn test_continuation_after_blank_line_is_rejected() {
        let err = parse_document("[a]\nx =\n\n\tk: v\n").unwrap_err();
        assert!(matches!(err, IniError::UnexpectedContinuation { line: 4, .. }));
    }

    #[test]
    fn test_nested_entry_without_colon_is_rejected() {
        let err = parse_document("[a]\nx =\n\tnot a pair\n").unwrap_err();
        assert!(matches!(err, IniError::MalformedNestedEntry { line: 3, .. }));
    }

    #[test]
    fn test_duplicate_nested_key_is_rejected() {
        let err = parse_document("[a]\nx =\n\tk: 1\n\tk: 2\n").unwrap_err();
        assert!(matches!(err, IniError::DuplicateNestedKey { line: 4, .. }));
    }
}
