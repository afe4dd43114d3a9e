//! Localization collaborator.

use std::collections::HashMap;

/// Key to display-string lookup provided by the host.
pub trait Localizer {
    /// Translate `key`, substituting each `%s` with the next argument.
    ///
    /// An unknown key comes back unchanged; callers detect a miss by comparing
    /// the result with the key.
    fn translate(&self, key: &str, args: &[&str]) -> String;
}

/// In-memory translation table.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=value` lines. Blank lines and lines starting with `#` are
    /// ignored, as are lines without `=`.
    pub fn from_lang_str(text: &str) -> Self {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_owned(), value.trim().to_owned()))
            .collect();

        Self { entries }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localizer for Translations {
    fn translate(&self, key: &str, args: &[&str]) -> String {
        let Some(template) = self.entries.get(key) else {
            return key.to_owned();
        };

        let mut result = String::with_capacity(template.len());
        let mut args = args.iter();
        let mut rest = template.as_str();

        while let Some(at) = rest.find("%s") {
            result.push_str(&rest[..at]);
            match args.next() {
                Some(arg) => result.push_str(arg),
                None => result.push_str("%s"),
            }
            rest = &rest[at + 2..];
        }
        result.push_str(rest);

        result
    }
}
