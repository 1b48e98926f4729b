use crate::registry::defaults::{DEFAULT_BREAKPOINTS, DEFAULT_COLORS};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    #[serde(default = "default_theme_name")]
    pub name: String,
    #[serde(default)]
    pub colors: BTreeMap<String, ColorValue>,
    #[serde(default)]
    pub screens: BTreeMap<String, String>,
    #[serde(default)]
    pub extend: ThemeExtension,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ThemeExtension {
    #[serde(default)]
    pub colors: BTreeMap<String, ColorValue>,
    #[serde(default)]
    pub screens: BTreeMap<String, String>,
}

/// A colour is either one value or a family of shades (`red` → `red-500`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(String),
    Shades(BTreeMap<String, String>),
}

/// The theme after defaults, replacements and extensions are applied. This
/// is what the registries are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub name: String,
    pub colors: BTreeMap<String, String>,
    pub screens: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub message: String,
}

pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|err| ConfigError {
        message: format!("failed to read config {}: {}", path.display(), err),
    })?;
    toml::from_str(&text).map_err(|err| ConfigError {
        message: format!("failed to parse config {}: {}", path.display(), err),
    })
}

/// Non-empty `colors`/`screens` replace the defaults; `extend` entries are
/// merged on top afterwards.
pub fn resolve_theme(config: &Config) -> ResolvedTheme {
    let theme = &config.theme;
    let mut resolved = ResolvedTheme {
        name: theme.name.clone(),
        ..ResolvedTheme::default()
    };

    if !theme.colors.is_empty() {
        resolved.colors = flatten_colors(&theme.colors);
    }
    if !theme.screens.is_empty() {
        resolved.screens = theme.screens.clone();
    }
    resolved.colors.extend(flatten_colors(&theme.extend.colors));
    resolved.screens.extend(
        theme
            .extend
            .screens
            .iter()
            .map(|(name, width)| (name.clone(), width.clone())),
    );
    resolved
}

fn flatten_colors(colors: &BTreeMap<String, ColorValue>) -> BTreeMap<String, String> {
    let mut flat = BTreeMap::new();
    for (name, value) in colors {
        match value {
            ColorValue::Single(color) => {
                flat.insert(name.clone(), color.clone());
            }
            ColorValue::Shades(shades) => {
                for (shade, color) in shades {
                    flat.insert(format!("{}-{}", name, shade), color.clone());
                }
            }
        }
    }
    flat
}

fn default_theme_name() -> String {
    "default".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: BTreeMap::new(),
            screens: BTreeMap::new(),
            extend: ThemeExtension::default(),
        }
    }
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: DEFAULT_COLORS
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            screens: DEFAULT_BREAKPOINTS
                .iter()
                .map(|(name, width)| (name.to_string(), width.to_string()))
                .collect(),
        }
    }
}
