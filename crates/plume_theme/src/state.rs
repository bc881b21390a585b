//! Global theme state singleton
//!
//! Components read colors through [`ThemeState::get_or_default`] at render
//! time, so scheme switches and overrides apply on the next render without any
//! component bookkeeping.

use std::sync::{OnceLock, PoisonError, RwLock};

use plume_core::Color;
use rustc_hash::FxHashMap;

use crate::theme::{ColorScheme, ThemeBundle};
use crate::tokens::{ColorToken, ColorTokens};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Theme state - accessed by components during render
pub struct ThemeState {
    /// The light/dark palette pair
    bundle: ThemeBundle,

    /// Current color scheme
    scheme: RwLock<ColorScheme>,

    /// Current palette, always `bundle.for_scheme(scheme)`
    colors: RwLock<ColorTokens>,

    /// Dynamic color overrides, checked before the palette
    color_overrides: RwLock<FxHashMap<ColorToken, Color>>,
}

impl ThemeState {
    /// Standalone state, not registered globally
    pub fn new(bundle: ThemeBundle, scheme: ColorScheme) -> Self {
        let colors = bundle.for_scheme(scheme).clone();
        Self {
            bundle,
            scheme: RwLock::new(scheme),
            colors: RwLock::new(colors),
            color_overrides: RwLock::new(FxHashMap::default()),
        }
    }

    /// Initialize the global theme state (call once at app startup)
    ///
    /// Later calls are ignored.
    pub fn init(bundle: ThemeBundle, scheme: ColorScheme) {
        if THEME_STATE.set(Self::new(bundle, scheme)).is_err() {
            tracing::warn!("ThemeState already initialized, ignoring init");
        } else {
            tracing::debug!(?scheme, "ThemeState initialized");
        }
    }

    /// Initialize with the built-in palettes in light mode
    pub fn init_default() {
        Self::init(ThemeBundle::default(), ColorScheme::Light);
    }

    /// Get the global theme state
    ///
    /// # Panics
    ///
    /// Panics if neither [`ThemeState::init`] nor [`ThemeState::get_or_default`]
    /// ran before.
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// Get the global theme state, installing the default theme if none was set
    pub fn get_or_default() -> &'static ThemeState {
        THEME_STATE.get_or_init(|| {
            tracing::debug!("ThemeState not initialized, using default theme");
            Self::new(ThemeBundle::default(), ColorScheme::Light)
        })
    }

    // ========== Color Scheme ==========

    /// Get the current color scheme
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Switch light/dark palette. Overrides survive the switch.
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut current = self.scheme.write().unwrap_or_else(PoisonError::into_inner);
        if *current == scheme {
            return;
        }
        tracing::debug!(from = ?*current, to = ?scheme, "ThemeState::set_scheme");
        *current = scheme;
        *self.colors.write().unwrap_or_else(PoisonError::into_inner) =
            self.bundle.for_scheme(scheme).clone();
    }

    pub fn toggle_scheme(&self) {
        self.set_scheme(self.scheme().toggle());
    }

    // ========== Colors ==========

    /// Get a color by token, overrides first
    pub fn color(&self, token: ColorToken) -> Color {
        if let Some(color) = self
            .color_overrides
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&token)
        {
            return *color;
        }
        let color = self
            .colors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token);
        color
    }

    /// Get all color tokens of the current palette, without overrides
    pub fn colors(&self) -> ColorTokens {
        self.colors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Set a color override
    pub fn set_color_override(&self, token: ColorToken, color: Color) {
        tracing::debug!(%token, ?color, "color override");
        self.color_overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token, color);
    }

    /// Remove a color override
    pub fn remove_color_override(&self, token: ColorToken) {
        self.color_overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&token);
    }

    /// Clear all overrides
    pub fn clear_overrides(&self) {
        tracing::debug!("clearing color overrides");
        self.color_overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeBundle::default(), ColorScheme::Light)
    }
}
