//! Root presentation attributes every view reads before rendering.

use crate::i18n::TextDirection;
use std::collections::BTreeSet;

pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    dir: TextDirection,
    lang: &'static str,
    classes: BTreeSet<&'static str>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            dir: TextDirection::Ltr,
            lang: "en",
            classes: BTreeSet::new(),
        }
    }

    pub fn dir(&self) -> TextDirection {
        self.dir
    }

    pub fn lang(&self) -> &'static str {
        self.lang
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn is_dark(&self) -> bool {
        self.has_class(DARK_CLASS)
    }

    // Mutation is restricted to the store.

    pub(super) fn set_dir(&mut self, dir: TextDirection) {
        self.dir = dir;
    }

    pub(super) fn set_lang(&mut self, lang: &'static str) {
        self.lang = lang;
    }

    pub(super) fn add_class(&mut self, class: &'static str) {
        self.classes.insert(class);
    }

    pub(super) fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english_light_ltr() {
        let doc = Document::default();
        assert_eq!(doc, Document::new());
        assert_eq!(doc.lang(), "en");
        assert_eq!(doc.dir(), TextDirection::Ltr);
        assert!(!doc.is_dark());
    }
}
