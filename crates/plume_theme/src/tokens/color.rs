//! Color tokens for theming
//!
//! Tokens use the dotted names components and host apps refer to them by
//! (`"text.primary"`, `"grey.400"`, ...).

use std::fmt;
use std::str::FromStr;

use plume_core::Color;

use crate::error::ThemeError;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum ColorToken {
    // Brand colors
    PrimaryMain,
    PrimaryContrast,
    SecondaryMain,

    // Feedback colors
    ErrorMain,
    WarningMain,
    SuccessMain,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextDisabled,

    // Surfaces
    BackgroundDefault,
    BackgroundPaper,

    // Neutral scale
    Grey100,
    Grey200,
    Grey300,
    Grey400,
    Grey500,
    Grey600,
    Grey700,

    Transparent,
}

impl ColorToken {
    pub const ALL: [ColorToken; 19] = [
        ColorToken::PrimaryMain,
        ColorToken::PrimaryContrast,
        ColorToken::SecondaryMain,
        ColorToken::ErrorMain,
        ColorToken::WarningMain,
        ColorToken::SuccessMain,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::TextDisabled,
        ColorToken::BackgroundDefault,
        ColorToken::BackgroundPaper,
        ColorToken::Grey100,
        ColorToken::Grey200,
        ColorToken::Grey300,
        ColorToken::Grey400,
        ColorToken::Grey500,
        ColorToken::Grey600,
        ColorToken::Grey700,
        ColorToken::Transparent,
    ];

    /// Dotted token name
    pub fn name(&self) -> &'static str {
        match self {
            ColorToken::PrimaryMain => "primary.main",
            ColorToken::PrimaryContrast => "primary.contrastText",
            ColorToken::SecondaryMain => "secondary.main",
            ColorToken::ErrorMain => "error.main",
            ColorToken::WarningMain => "warning.main",
            ColorToken::SuccessMain => "success.main",
            ColorToken::TextPrimary => "text.primary",
            ColorToken::TextSecondary => "text.secondary",
            ColorToken::TextDisabled => "text.disabled",
            ColorToken::BackgroundDefault => "background.default",
            ColorToken::BackgroundPaper => "background.paper",
            ColorToken::Grey100 => "grey.100",
            ColorToken::Grey200 => "grey.200",
            ColorToken::Grey300 => "grey.300",
            ColorToken::Grey400 => "grey.400",
            ColorToken::Grey500 => "grey.500",
            ColorToken::Grey600 => "grey.600",
            ColorToken::Grey700 => "grey.700",
            ColorToken::Transparent => "transparent",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorToken {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ColorToken::ALL
            .iter()
            .copied()
            .find(|token| token.name() == name)
            .ok_or_else(|| ThemeError::UnknownToken(name.to_string()))
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub primary_main: Color,
    pub primary_contrast: Color,
    pub secondary_main: Color,

    pub error_main: Color,
    pub warning_main: Color,
    pub success_main: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,

    pub background_default: Color,
    pub background_paper: Color,

    pub grey_100: Color,
    pub grey_200: Color,
    pub grey_300: Color,
    pub grey_400: Color,
    pub grey_500: Color,
    pub grey_600: Color,
    pub grey_700: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::PrimaryMain => self.primary_main,
            ColorToken::PrimaryContrast => self.primary_contrast,
            ColorToken::SecondaryMain => self.secondary_main,
            ColorToken::ErrorMain => self.error_main,
            ColorToken::WarningMain => self.warning_main,
            ColorToken::SuccessMain => self.success_main,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextDisabled => self.text_disabled,
            ColorToken::BackgroundDefault => self.background_default,
            ColorToken::BackgroundPaper => self.background_paper,
            ColorToken::Grey100 => self.grey_100,
            ColorToken::Grey200 => self.grey_200,
            ColorToken::Grey300 => self.grey_300,
            ColorToken::Grey400 => self.grey_400,
            ColorToken::Grey500 => self.grey_500,
            ColorToken::Grey600 => self.grey_600,
            ColorToken::Grey700 => self.grey_700,
            ColorToken::Transparent => Color::TRANSPARENT,
        }
    }

    /// Replace the color behind a token. `Transparent` is fixed and ignored.
    pub fn set(&mut self, token: ColorToken, color: Color) {
        let slot = match token {
            ColorToken::PrimaryMain => &mut self.primary_main,
            ColorToken::PrimaryContrast => &mut self.primary_contrast,
            ColorToken::SecondaryMain => &mut self.secondary_main,
            ColorToken::ErrorMain => &mut self.error_main,
            ColorToken::WarningMain => &mut self.warning_main,
            ColorToken::SuccessMain => &mut self.success_main,
            ColorToken::TextPrimary => &mut self.text_primary,
            ColorToken::TextSecondary => &mut self.text_secondary,
            ColorToken::TextDisabled => &mut self.text_disabled,
            ColorToken::BackgroundDefault => &mut self.background_default,
            ColorToken::BackgroundPaper => &mut self.background_paper,
            ColorToken::Grey100 => &mut self.grey_100,
            ColorToken::Grey200 => &mut self.grey_200,
            ColorToken::Grey300 => &mut self.grey_300,
            ColorToken::Grey400 => &mut self.grey_400,
            ColorToken::Grey500 => &mut self.grey_500,
            ColorToken::Grey600 => &mut self.grey_600,
            ColorToken::Grey700 => &mut self.grey_700,
            ColorToken::Transparent => {
                tracing::warn!("ignoring override of the transparent color token");
                return;
            }
        };
        *slot = color;
    }

    /// Light palette
    pub fn light() -> Self {
        Self {
            primary_main: Color::from_hex(0x1E66F5),
            primary_contrast: Color::WHITE,
            secondary_main: Color::from_hex(0x8839EF),
            error_main: Color::from_hex(0xD20F39),
            warning_main: Color::from_hex(0xDF8E1D),
            success_main: Color::from_hex(0x40A02B),
            text_primary: Color::from_hex(0x1F2330),
            text_secondary: Color::from_hex(0x6C6F85),
            text_disabled: Color::from_hex(0x9CA0B0),
            background_default: Color::WHITE,
            background_paper: Color::from_hex(0xF7F8FA),
            grey_100: Color::from_hex(0xF2F3F5),
            grey_200: Color::from_hex(0xB8BCC6),
            grey_300: Color::from_hex(0xD5D8DE),
            grey_400: Color::from_hex(0xBFC3CC),
            grey_500: Color::from_hex(0x9CA0AB),
            grey_600: Color::from_hex(0x6B7080),
            grey_700: Color::from_hex(0x4C5060),
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        Self {
            primary_main: Color::from_hex(0x89B4FA),
            primary_contrast: Color::from_hex(0x11111B),
            secondary_main: Color::from_hex(0xCBA6F7),
            error_main: Color::from_hex(0xF38BA8),
            warning_main: Color::from_hex(0xF9E2AF),
            success_main: Color::from_hex(0xA6E3A1),
            text_primary: Color::from_hex(0xCDD6F4),
            text_secondary: Color::from_hex(0xA6ADC8),
            text_disabled: Color::from_hex(0x6C7086),
            background_default: Color::from_hex(0x1E1E2E),
            background_paper: Color::from_hex(0x181825),
            grey_100: Color::from_hex(0x313244),
            grey_200: Color::from_hex(0x6C7086),
            grey_300: Color::from_hex(0x45475A),
            grey_400: Color::from_hex(0x585B70),
            grey_500: Color::from_hex(0x7F849C),
            grey_600: Color::from_hex(0x9399B2),
            grey_700: Color::from_hex(0xBAC2DE),
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::light()
    }
}
