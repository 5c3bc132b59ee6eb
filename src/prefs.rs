//!
//! Editor preferences that live for a session.
//!
//! The sync flag and the fold-out state of each category
//! panel are kept in a small key/value store, backed by an
//! ini-file.
//!

use crate::error::LoadSchemaErr;
use crate::palette::Category;
use configparser::ini::Ini;
use log::{debug, warn};
use std::fs::create_dir_all;
use std::io;
use std::path::{Path, PathBuf};

/// Section used in the ini-file.
const SECTION: &str = "session";

/// Key/value store for boolean session flags.
#[derive(Debug)]
pub struct SessionStore {
    path: Option<PathBuf>,
    ini: Ini,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            path: None,
            ini: Ini::new_cs(),
        }
    }
}

impl SessionStore {
    /// Store that is not backed by a file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from a file.
    ///
    /// A missing file gives an empty store, a broken one too,
    /// with a warning. [store](SessionStore::store) writes back
    /// to the same path.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut ini = Ini::new_cs();
        if path.exists() {
            if let Err(e) = ini.load(&path) {
                warn!("ignore session state {:?}: {}", path, e);
                ini = Ini::new_cs();
            }
        } else {
            debug!("no session state at {:?}", path);
        }
        Self {
            path: Some(path),
            ini,
        }
    }

    /// Parse the store from ini-text.
    pub fn parse(text: &str) -> Result<Self, io::Error> {
        let mut ini = Ini::new_cs();
        ini.read(text.to_string())
            .map_err(|e| io::Error::other(LoadSchemaErr(e)))?;
        Ok(Self { path: None, ini })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Value for the key, or the default if the key is missing
    /// or not a boolean.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.ini.getbool(SECTION, key) {
            Ok(Some(v)) => v,
            Ok(None) => default,
            Err(e) => {
                warn!("session state {}: {}", key, e);
                default
            }
        }
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.ini
            .setstr(SECTION, key, Some(if value { "true" } else { "false" }));
    }

    /// Contents as ini-text.
    pub fn to_text(&self) -> String {
        self.ini.writes()
    }

    /// Write to the path the store was loaded from.
    /// Does nothing for a store without a file.
    pub fn store(&self) -> Result<(), io::Error> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
        self.ini.write(path)
    }
}

/// Session flags of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorPreferences {
    /// Re-derive the palette whenever a parameter changes.
    pub sync_with_theme: bool,
    /// Expanded state of each category panel, indexed by [Category].
    pub foldout: [bool; Category::LEN],
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            sync_with_theme: true,
            foldout: [true; Category::LEN],
        }
    }
}

pub const SYNC_WITH_THEME_KEY: &str = "syncWithTheme";

/// Store key for the fold-out flag of a category.
pub const fn foldout_key(category: Category) -> &'static str {
    match category {
        Category::Button => "foldoutButtonColor",
        Category::Slider => "foldoutSliderColor",
        Category::Toggle => "foldoutToggleColor",
        Category::Dropdown => "foldoutDropdownColor",
        Category::InputField => "foldoutInputFieldColor",
        Category::Scrollbar => "foldoutScrollbarColor",
        Category::ScrollRect => "foldoutScrollRectColor",
    }
}

impl EditorPreferences {
    /// Read all flags, missing ones are true.
    pub fn load(store: &SessionStore) -> Self {
        let mut prefs = Self {
            sync_with_theme: store.get_bool(SYNC_WITH_THEME_KEY, true),
            ..Default::default()
        };
        for c in Category::array() {
            prefs.foldout[c as usize] = store.get_bool(foldout_key(c), true);
        }
        prefs
    }

    /// Write all flags.
    pub fn save(&self, store: &mut SessionStore) {
        store.set_bool(SYNC_WITH_THEME_KEY, self.sync_with_theme);
        for c in Category::array() {
            store.set_bool(foldout_key(c), self.foldout[c as usize]);
        }
    }

    pub fn is_expanded(&self, category: Category) -> bool {
        self.foldout[category as usize]
    }

    pub fn set_expanded(&mut self, category: Category, expanded: bool) {
        self.foldout[category as usize] = expanded;
    }
}
