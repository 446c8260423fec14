use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Persists the single theme flag as the contents of one small file, the
/// local-storage analogue of a `"theme"` key.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file or unrecognized contents fall back to light.
    pub fn load(&self) -> Theme {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => match contents.trim() {
                "dark" => Theme::Dark,
                "light" => Theme::Light,
                other => {
                    if !other.is_empty() {
                        log::warn!("ignoring unknown theme flag {other:?}");
                    }
                    Theme::Light
                }
            },
            Err(_) => Theme::Light,
        }
    }

    pub fn save(&self, theme: Theme) -> std::io::Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, theme.as_str())
    }
}
