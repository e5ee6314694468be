use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GateError;
use crate::patterns::Locale;

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

/// User overlay location, relative to `$HOME`.
const USER_CONFIG: &str = ".config/hitl-gate/config.toml";

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub patterns: PatternsConfig,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Settings {
    /// Which built-in rule pack to load.
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct PatternsConfig {
    /// Rules appended after the built-in pack.
    #[serde(default)]
    pub extra: Vec<RuleConfig>,
}

/// A user-defined rule: unique name plus regex expression.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleConfig {
    pub name: String,
    pub expression: String,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    patterns: PatternsOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    locale: Option<Locale>,
}

#[derive(Debug, Deserialize, Default)]
struct PatternsOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    extra: Vec<RuleConfig>,
    #[serde(default)]
    remove_extra: Vec<String>,
}

// ── Merge logic ──

/// Merge user rules into the default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: drop removed names, then add rules; a rule whose name is
/// already present replaces that entry in place.
fn merge_rules(
    base: &mut Vec<RuleConfig>,
    add: Vec<RuleConfig>,
    remove: &[String],
    replace: bool,
) {
    if replace {
        *base = add;
        return;
    }
    base.retain(|rule| !remove.contains(&rule.name));
    for rule in add {
        match base.iter_mut().find(|r| r.name == rule.name) {
            Some(existing) => *existing = rule,
            None => base.push(rule),
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Embedded defaults merged with `~/.config/hitl-gate/config.toml`,
    /// if it exists. A malformed overlay is logged and ignored.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Embedded defaults merged with the overlay at `path`. Unlike
    /// [`Config::load`], a missing or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self, GateError> {
        let content = std::fs::read_to_string(path).map_err(|source| GateError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let overlay: ConfigOverlay =
            toml::from_str(&content).map_err(|source| GateError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        let mut config = Self::default_config();
        config.apply_overlay(overlay);
        Ok(config)
    }

    /// Path of the user overlay, if `$HOME` is set.
    pub fn user_config_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(Path::new(&home).join(USER_CONFIG))
    }

    fn load_overlay() -> Option<ConfigOverlay> {
        let path = Self::user_config_path()?;
        let content = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => {
                log::debug!("loaded config overlay from {}", path.display());
                Some(overlay)
            }
            Err(e) => {
                log::warn!("config parse error in {}: {e}", path.display());
                None
            }
        }
    }

    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        if let Some(locale) = overlay.settings.locale {
            self.settings.locale = locale;
        }

        let p = overlay.patterns;
        merge_rules(&mut self.patterns.extra, p.extra, &p.remove_extra, p.replace);
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}
