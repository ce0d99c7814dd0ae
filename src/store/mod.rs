//! Application state store: the single owner of the current color, the
//! favorites list, the language and the theme.
//!
//! Every mutator funnels through [`Store::commit`], which persists the changed
//! entity and applies its document side effect before returning. A reader that
//! calls an accessor after a mutator therefore sees state that is already on
//! disk and already reflected in [`Document`].

mod document;

pub use document::{DARK_CLASS, Document};

use crate::color::Formats;
use crate::i18n::{self, Key, Language};
use crate::storage::KeyValueStore;
use anyhow::Context;
use tracing::{debug, info, warn};

pub const DEFAULT_COLOR: &str = "#3B82F6";

pub const LANGUAGE_KEY: &str = "app_language";
pub const THEME_KEY: &str = "app_theme";
pub const FAVORITES_KEY: &str = "app_favorites";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn tag(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Which persisted entity a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Language,
    Theme,
    Favorites,
}

pub struct Store<K: KeyValueStore> {
    kv: K,
    language: Language,
    theme: Theme,
    current_color: String,
    favorites: Vec<String>,
    document: Document,
}

impl<K: KeyValueStore> Store<K> {
    /// Seed language, theme and favorites from `kv`, falling back to defaults
    /// for anything missing, unreadable or malformed. The current color always
    /// starts at [`DEFAULT_COLOR`].
    pub fn open(kv: K) -> Self {
        let language = restore(&kv, LANGUAGE_KEY, Language::from_tag);
        let theme = restore(&kv, THEME_KEY, Theme::from_tag);
        let favorites = restore(&kv, FAVORITES_KEY, |raw| {
            serde_json::from_str::<Vec<String>>(raw).ok()
        });

        let mut store = Self {
            kv,
            language: language.unwrap_or_default(),
            theme: theme.unwrap_or_default(),
            current_color: DEFAULT_COLOR.to_string(),
            favorites: favorites.unwrap_or_default(),
            document: Document::new(),
        };
        store.apply(Change::Language);
        store.apply(Change::Theme);

        info!(
            language = store.language.tag(),
            theme = store.theme.tag(),
            favorites = store.favorites.len(),
            "store opened"
        );
        store
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn current_color(&self) -> &str {
        &self.current_color
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn is_rtl(&self) -> bool {
        self.language == Language::Ar
    }

    pub fn translate(&self, key: Key) -> &'static str {
        i18n::translate(self.language, key)
    }

    /// Derived representations of the current color, recomputed on each call.
    pub fn formats(&self) -> Option<Formats> {
        Formats::of(&self.current_color)
    }

    /// The in-memory value and document always change; the error only
    /// reports that the new value could not be written to storage.
    pub fn set_language(&mut self, language: Language) -> anyhow::Result<()> {
        self.language = language;
        self.commit(Change::Language)
    }

    pub fn toggle_theme(&mut self) -> anyhow::Result<()> {
        self.theme = self.theme.toggled();
        self.commit(Change::Theme)
    }

    /// Stored verbatim; callers are responsible for passing a valid color.
    pub fn set_current_color(&mut self, color: impl Into<String>) {
        self.current_color = color.into();
    }

    /// Prepend `color` unless an identical string is already saved.
    pub fn add_favorite(&mut self, color: &str) -> anyhow::Result<()> {
        if self.favorites.iter().any(|c| c == color) {
            debug!(color, "favorite already saved");
            return Ok(());
        }
        self.favorites.insert(0, color.to_string());
        self.commit(Change::Favorites)
    }

    pub fn remove_favorite(&mut self, color: &str) -> anyhow::Result<()> {
        self.favorites.retain(|c| c != color);
        self.commit(Change::Favorites)
    }

    fn commit(&mut self, change: Change) -> anyhow::Result<()> {
        let persisted = self.persist(change);
        self.apply(change);
        if let Err(e) = &persisted {
            warn!(?change, "persist failed: {e:#}");
        }
        persisted
    }

    fn persist(&self, change: Change) -> anyhow::Result<()> {
        match change {
            Change::Language => self.kv.set(LANGUAGE_KEY, self.language.tag()),
            Change::Theme => self.kv.set(THEME_KEY, self.theme.tag()),
            Change::Favorites => {
                let raw = serde_json::to_string(&self.favorites).context("serialize favorites")?;
                self.kv.set(FAVORITES_KEY, &raw)
            }
        }
    }

    fn apply(&mut self, change: Change) {
        match change {
            Change::Language => {
                self.document.set_dir(self.language.direction());
                self.document.set_lang(self.language.tag());
            }
            Change::Theme => match self.theme {
                Theme::Dark => self.document.add_class(DARK_CLASS),
                Theme::Light => self.document.remove_class(DARK_CLASS),
            },
            Change::Favorites => {}
        }
    }
}

fn restore<K, T>(kv: &K, key: &str, decode: impl FnOnce(&str) -> Option<T>) -> Option<T>
where
    K: KeyValueStore,
{
    let raw = match kv.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, "read failed, using default: {e:#}");
            return None;
        }
    };
    let value = decode(&raw);
    if value.is_none() {
        warn!(key, value = %raw, "ignoring malformed stored value");
    }
    value
}
