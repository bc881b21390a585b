//! Color schemes and theme bundles

use serde::Deserialize;

use crate::tokens::ColorTokens;

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// Light/dark palette pair
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
    pub light: ColorTokens,
    pub dark: ColorTokens,
}

impl ThemeBundle {
    pub fn new(light: ColorTokens, dark: ColorTokens) -> Self {
        Self { light, dark }
    }

    /// Palette for the given scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &ColorTokens {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

impl Default for ThemeBundle {
    fn default() -> Self {
        Self::new(ColorTokens::light(), ColorTokens::dark())
    }
}
