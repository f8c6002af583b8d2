//! In-memory model of a `logme.ini` file.
//!
//! A [`ConfigDocument`] is an ordered list of [`Section`]s, and each section is
//! an ordered list of options.  Order is kept exactly as read so that writing
//! an unchanged document reproduces the same text.
//!
//! Sections are stored in a `Vec` rather than a map: documents hold a handful
//! of sections, lookups are linear, and insertion order is the whole point.

use crate::domain::error::DocumentError;
use crate::domain::reserved::{ReservedSection, MASTER_SECTION};
use crate::domain::templates::{default_master_section, LoggerOverrides};

/// The value of a single option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// `key = value` on one line.
    Plain(String),
    /// `key =` followed by indented `sub: value` lines.
    Nested(NestedValue),
}

impl OptionValue {
    /// Shorthand for `OptionValue::Plain(value.into())`.
    pub fn plain(value: impl Into<String>) -> Self {
        OptionValue::Plain(value.into())
    }

    pub fn as_plain(&self) -> Option<&str> {
        match self {
            OptionValue::Plain(v) => Some(v),
            OptionValue::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&NestedValue> {
        match self {
            OptionValue::Nested(n) => Some(n),
            OptionValue::Plain(_) => None,
        }
    }

    pub fn as_nested_mut(&mut self) -> Option<&mut NestedValue> {
        match self {
            OptionValue::Nested(n) => Some(n),
            OptionValue::Plain(_) => None,
        }
    }
}

/// An ordered block of `key: value` pairs stored under one option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestedValue {
    entries: Vec<(String, String)>,
}

impl NestedValue {
    /// Builds a nested value from `(key, value)` pairs, in order.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Replaces the value of `key` in place, or appends it.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Inserts `key` as the first entry.  Does nothing if `key` already exists.
    pub fn insert_first(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !self.contains(&key) {
            self.entries.insert(0, (key, value.into()));
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A `[name]` block and its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    options: Vec<(String, OptionValue)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of this section's options under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: self.options.clone(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.options.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut OptionValue> {
        self.options
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_plain(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_plain)
    }

    pub fn get_nested(&self, key: &str) -> Option<&NestedValue> {
        self.get(key).and_then(OptionValue::as_nested)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Replaces the value of `key` in place, or appends it.
    pub fn set(&mut self, key: impl Into<String>, value: OptionValue) {
        let key = key.into();
        match self.get_mut(&key) {
            Some(existing) => *existing = value,
            None => self.options.push((key, value)),
        }
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        let idx = self.options.iter().position(|(k, _)| k == key)?;
        Some(self.options.remove(idx).1)
    }

    /// Renames `from` to `to`, keeping its position.  Returns `false` when
    /// `from` is absent or `to` is already taken.
    pub fn rename(&mut self, from: &str, to: &str) -> bool {
        if self.contains(to) {
            return false;
        }
        match self.options.iter_mut().find(|(k, _)| k == from) {
            Some(entry) => {
                entry.0 = to.to_string();
                true
            }
            None => false,
        }
    }

    pub fn options(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn option_names(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|(k, _)| k.as_str())
    }
}

/// An ordered collection of uniquely named sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: Vec<Section>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn sections_mut(&mut self) -> impl Iterator<Item = &mut Section> {
        self.sections.iter_mut()
    }

    /// Section names in document order.
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(Section::name).collect()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Index of `name` in document order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.name == name)
    }

    /// Inserts `section`, replacing a same-named section in place or appending
    /// it.  Returns `true` when an existing section was replaced.
    pub fn upsert_section(&mut self, section: Section) -> bool {
        match self.position(&section.name) {
            Some(idx) => {
                self.sections[idx] = section;
                true
            }
            None => {
                self.sections.push(section);
                false
            }
        }
    }

    /// Inserts `section` at `index`, first removing any same-named section.
    /// `index` is clamped to the number of sections.
    pub fn insert_section_at(&mut self, index: usize, section: Section) {
        if let Some(existing) = self.position(&section.name) {
            self.sections.remove(existing);
        }
        let index = index.min(self.sections.len());
        self.sections.insert(index, section);
    }

    /// Removes the section named `name` without any reserved-name checks.
    pub fn take_section(&mut self, name: &str) -> Option<Section> {
        let idx = self.position(name)?;
        Some(self.sections.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Adds (or resets) the logger section `name` with the option values of
    /// the `[logme]` master section, then applies `overrides`.
    ///
    /// An existing section with the same name is overwritten with the
    /// defaults and keeps its position.  Returns `true` in that case.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::ReservedName`] when `name` is `logme` or `colors`.
    /// - [`DocumentError::InvalidSectionName`] when `name` cannot be written
    ///   as a section header.
    /// - [`DocumentError::InvalidValue`] when an override cannot be stored
    ///   on one line; the document is left unchanged.
    pub fn add_logger(
        &mut self,
        name: &str,
        overrides: &LoggerOverrides,
    ) -> Result<bool, DocumentError> {
        if let Some(reserved) = ReservedSection::from_name(name) {
            return Err(DocumentError::ReservedName(reserved));
        }
        validate_section_name(name)?;

        let mut section = match self.section(MASTER_SECTION) {
            Some(master) => master.renamed(name),
            None => default_master_section().renamed(name),
        };
        overrides.apply(&mut section)?;

        Ok(self.upsert_section(section))
    }

    /// Removes the logger section `name`.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::ProtectedSection`] for `logme` and `colors`,
    ///   whether or not they are present.
    /// - [`DocumentError::SectionNotFound`] when no such section exists.
    pub fn remove_logger(&mut self, name: &str) -> Result<Section, DocumentError> {
        if let Some(reserved) = ReservedSection::from_name(name) {
            return Err(DocumentError::ProtectedSection(reserved));
        }
        self.take_section(name)
            .ok_or_else(|| DocumentError::SectionNotFound(name.to_string()))
    }
}

/// Checks that `name` can round-trip through a `[name]` header.
pub fn validate_section_name(name: &str) -> Result<(), DocumentError> {
    let invalid = name.trim().is_empty()
        || name.trim() != name
        || name.contains(['[', ']', '\n', '\r']);
    if invalid {
        return Err(DocumentError::InvalidSectionName(name.to_string()));
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reserved::COLOR_SECTION;
    use crate::domain::templates::default_document;

    #[test]
    fn test_set_replaces_in_place_and_keeps_order() {
        // Arrange
        let mut section = Section::new("s");
        section.set("a", OptionValue::plain("1"));
        section.set("b", OptionValue::plain("2"));

        // Act
        section.set("a", OptionValue::plain("3"));

        // Assert
        let names: Vec<_> = section.option_names().collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(section.get_plain("a"), Some("3"));
    }

    #[test]
    fn test_rename_refuses_existing_target() {
        let mut section = Section::new("s");
        section.set("a", OptionValue::plain("1"));
        section.set("b", OptionValue::plain("2"));

        assert!(!section.rename("a", "b"));
        assert!(section.rename("a", "c"));
        let names: Vec<_> = section.option_names().collect();
        assert_eq!(names, ["c", "b"]);
    }

    #[test]
    fn test_nested_insert_first_is_noop_when_present() {
        let mut nested = NestedValue::from_pairs([("active", "True")]);
        nested.insert_first("type", "FileHandler");
        nested.insert_first("type", "StreamHandler");

        let keys: Vec<_> = nested.keys().collect();
        assert_eq!(keys, ["type", "active"]);
        assert_eq!(nested.get("type"), Some("FileHandler"));
    }

    #[test]
    fn test_add_logger_copies_master_section() {
        // Arrange
        let mut doc = default_document();

        // Act
        let replaced = doc.add_logger("blah", &LoggerOverrides::default()).unwrap();

        // Assert
        assert!(!replaced);
        assert_eq!(doc.section_names(), [COLOR_SECTION, MASTER_SECTION, "blah"]);
        let master = doc.section(MASTER_SECTION).unwrap();
        let added = doc.section("blah").unwrap();
        assert_eq!(added.options().collect::<Vec<_>>(), master.options().collect::<Vec<_>>());
    }

    #[test]
    fn test_add_logger_twice_resets_to_defaults_in_place() {
        // Arrange
        let mut doc = default_document();
        doc.add_logger("first", &LoggerOverrides::default()).unwrap();
        doc.add_logger("second", &LoggerOverrides::default()).unwrap();
        doc.section_mut("first")
            .unwrap()
            .set("level", OptionValue::plain("ERROR"));

        // Act
        let replaced = doc.add_logger("first", &LoggerOverrides::default()).unwrap();

        // Assert
        assert!(replaced);
        assert_eq!(doc.section_names(), ["colors", "logme", "first", "second"]);
        assert_eq!(doc.section("first").unwrap().get_plain("level"), Some("DEBUG"));
    }

    #[test]
    fn test_add_logger_rejects_reserved_names() {
        let mut doc = default_document();
        assert_eq!(
            doc.add_logger("colors", &LoggerOverrides::default()),
            Err(DocumentError::ReservedName(ReservedSection::Colors))
        );
        assert_eq!(
            doc.add_logger("logme", &LoggerOverrides::default()),
            Err(DocumentError::ReservedName(ReservedSection::Logme))
        );
    }

    #[test]
    fn test_add_logger_rejects_unwritable_names() {
        let mut doc = default_document();
        for bad in ["", "  ", "a]b", "new\nline", " padded"] {
            assert!(
                matches!(
                    doc.add_logger(bad, &LoggerOverrides::default()),
                    Err(DocumentError::InvalidSectionName(_))
                ),
                "{bad:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_add_logger_rejects_values_that_do_not_round_trip() {
        // Arrange
        let original = default_document();
        let mut doc = original.clone();
        let cases = [
            (Some("{name}\n{message}"), None),
            (Some("{message}\r"), None),
            (Some("{message}  "), None),
            (Some(" {message}"), None),
            (None, Some("logs/app\n.log")),
            (None, Some("logs/app.log ")),
        ];

        for (formatter, log_path) in cases {
            let overrides = LoggerOverrides {
                formatter: formatter.map(str::to_string),
                log_path: log_path.map(std::path::PathBuf::from),
                ..Default::default()
            };

            // Act
            let result = doc.add_logger("blah", &overrides);

            // Assert
            assert!(
                matches!(result, Err(DocumentError::InvalidValue { .. })),
                "{formatter:?} / {log_path:?} must be rejected"
            );
            assert_eq!(doc, original);
        }
    }

    #[test]
    fn test_remove_logger_undoes_add() {
        // Arrange
        let original = default_document();
        let mut doc = original.clone();
        doc.add_logger("blah", &LoggerOverrides::default()).unwrap();

        // Act
        let removed = doc.remove_logger("blah").unwrap();

        // Assert
        assert_eq!(removed.name(), "blah");
        assert_eq!(doc, original);
    }

    #[test]
    fn test_remove_reserved_sections_fails_even_when_absent() {
        let mut empty = ConfigDocument::new();
        assert_eq!(
            empty.remove_logger("logme").unwrap_err().to_string(),
            "'logme' master configuration cannot be removed!"
        );
        assert_eq!(
            empty.remove_logger("colors").unwrap_err().to_string(),
            "'colors' configuration cannot be removed! To remove color logging, set all color \
             values to 'None'"
        );
    }

    #[test]
    fn test_remove_missing_logger_is_an_error() {
        let mut doc = default_document();
        assert_eq!(
            doc.remove_logger("ghost"),
            Err(DocumentError::SectionNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_insert_section_at_moves_existing_section() {
        let mut doc = ConfigDocument::new();
        doc.upsert_section(Section::new("a"));
        doc.upsert_section(Section::new("b"));

        doc.insert_section_at(0, Section::new("b"));

        assert_eq!(doc.section_names(), ["b", "a"]);
    }
}
