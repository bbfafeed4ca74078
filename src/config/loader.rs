//! Configuration loading
//!
//! Config lives at `<config_dir>/quest/config.toml`. A missing file is the
//! normal case and yields defaults; a malformed file is logged and also
//! falls back to defaults, since a broken config must not keep the search
//! box from starting.

use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

pub fn load_config(override_path: Option<&Path>) -> Config {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => match default_path() {
            Some(path) => path,
            None => return Config::default(),
        },
    };

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(_) => return Config::default(),
    };

    match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring malformed config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quest").join("config.toml"))
}
