//! Theme configuration file handling
//!
//! ```toml
//! scheme = "dark"
//!
//! [light]
//! "primary.main" = "#FF5500"
//!
//! [dark]
//! "grey.400" = "#3A3A48"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use plume_core::Color;
use serde::Deserialize;

use crate::error::{Result, ThemeError};
use crate::theme::{ColorScheme, ThemeBundle};
use crate::tokens::{ColorToken, ColorTokens};

/// Theme configuration (theme.toml)
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Initial color scheme, light when omitted
    #[serde(default)]
    pub scheme: Option<ColorScheme>,
    /// Token overrides for the light palette, keyed by dotted token name
    #[serde(default)]
    pub light: BTreeMap<String, String>,
    /// Token overrides for the dark palette
    #[serde(default)]
    pub dark: BTreeMap<String, String>,
}

impl ThemeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = toml::from_str(source)?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading theme config");
        Self::from_toml_str(&source)
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme.unwrap_or_default()
    }

    /// Built-in palettes with this config's overrides applied
    pub fn bundle(&self) -> Result<ThemeBundle> {
        let mut bundle = ThemeBundle::default();
        apply_overrides(&mut bundle.light, &self.light)?;
        apply_overrides(&mut bundle.dark, &self.dark)?;
        Ok(bundle)
    }

    /// Build the bundle and install it as the global theme
    pub fn init_global(&self) -> Result<()> {
        let bundle = self.bundle()?;
        crate::ThemeState::init(bundle, self.scheme());
        Ok(())
    }
}

fn apply_overrides(tokens: &mut ColorTokens, overrides: &BTreeMap<String, String>) -> Result<()> {
    for (name, value) in overrides {
        let token: ColorToken = name.parse()?;
        let color = Color::parse_hex(value).ok_or_else(|| ThemeError::InvalidColor {
            token: name.clone(),
            value: value.clone(),
        })?;
        tokens.set(token, color);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.scheme(), ColorScheme::Light);
        assert_eq!(config.bundle().unwrap(), ThemeBundle::default());
    }

    #[test]
    fn test_bad_hex_is_reported() {
        let config = ThemeConfig::from_toml_str("[light]\n\"grey.400\" = \"#zz\"\n").unwrap();
        match config.bundle() {
            Err(ThemeError::InvalidColor { token, value }) => {
                assert_eq!(token, "grey.400");
                assert_eq!(value, "#zz");
            }
            other => panic!("expected InvalidColor, got {other:?}"),
        }
    }
}
