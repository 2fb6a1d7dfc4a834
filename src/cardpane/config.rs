//! # Configuration
//!
//! Cardpane configuration is managed by [`confique`], layering environment
//! variables over a TOML file over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `CARDPANE_DEFAULT_SORT`, `CARDPANE_SEED`, ...
//! 2. **Config file**: `--config <path>`, or `cardpane.toml` in the OS config
//!    directory (via the `directories` crate).
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_sort` | `Oldest` | Sort mode a new session starts in |
//! | `seed_sample_card` | `true` | Preload the "sample card" |
//! | `log_filter` | `warn` | Tracing filter used when `RUST_LOG` is unset |
//! | `line_width` | `100` | Width of rendered list rows |

use crate::error::Result;
use crate::sort::SortMode;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "cardpane.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardpaneConfig {
    /// One of "Oldest", "Newest", "Alphabetical: A-Z", "Alphabetical: Z-A", "Custom".
    #[config(env = "CARDPANE_DEFAULT_SORT", default = "Oldest")]
    pub default_sort: String,

    #[config(env = "CARDPANE_SEED", default = true)]
    pub seed_sample_card: bool,

    #[config(env = "CARDPANE_LOG", default = "warn")]
    pub log_filter: String,

    #[config(env = "CARDPANE_LINE_WIDTH", default = 100)]
    pub line_width: usize,
}

impl Default for CardpaneConfig {
    fn default() -> Self {
        Self {
            default_sort: SortMode::Oldest.label().to_string(),
            seed_sample_card: true,
            log_filter: "warn".to_string(),
            line_width: 100,
        }
    }
}

impl CardpaneConfig {
    /// Loads env + file + defaults. A missing file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = explicit.map(Path::to_path_buf).or_else(default_config_path) {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// The configured starting sort mode, validated.
    pub fn default_sort(&self) -> Result<SortMode> {
        self.default_sort.parse()
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "cardpane", "cardpane")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
