//! Plume Theme System
//!
//! Color tokens, light/dark palettes, and a global theme state read by the
//! input components at render time.
//!
//! # Quick Start
//!
//! ```rust
//! use plume_theme::{ColorToken, ThemeState};
//!
//! let theme = ThemeState::get_or_default();
//! let border = theme.color(ColorToken::Grey400);
//! assert_eq!(border, theme.colors().grey_400);
//! ```
//!
//! # Dynamic Overrides
//!
//! ```rust
//! use plume_core::Color;
//! use plume_theme::{ColorToken, ThemeState};
//!
//! let theme = ThemeState::default();
//! theme.set_color_override(ColorToken::PrimaryMain, Color::from_hex(0xFF5500));
//! assert_eq!(theme.color(ColorToken::PrimaryMain), Color::from_hex(0xFF5500));
//! theme.clear_overrides();
//! ```

pub mod config;
pub mod error;
pub mod state;
pub mod theme;
pub mod tokens;

pub use config::ThemeConfig;
pub use error::{Result, ThemeError};
pub use state::ThemeState;
pub use theme::{ColorScheme, ThemeBundle};
pub use tokens::*;
