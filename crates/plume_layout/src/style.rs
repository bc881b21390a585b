//! Element styling
//!
//! All properties are optional. When merging styles, only set properties
//! override, so caller-supplied styles layer on top of component defaults.

use plume_core::Color;
use smallvec::SmallVec;

/// A single transform operation, applied in list order
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    TranslateX(f32),
    TranslateY(f32),
    Scale(f32),
}

/// Transform list; label transforms hold three ops
pub type Transforms = SmallVec<[Transform; 3]>;

/// Visual style properties for an element
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Style {
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub background: Option<Color>,
    pub border_color: Option<Color>,
    pub text_color: Option<Color>,
    /// Opacity (0.0 = transparent, 1.0 = opaque)
    pub opacity: Option<f32>,
    /// Empty means untransformed
    pub transform: Transforms,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn margin_top(mut self, margin: f32) -> Self {
        self.margin_top = Some(margin);
        self
    }

    pub fn margin_bottom(mut self, margin: f32) -> Self {
        self.margin_bottom = Some(margin);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn transform(mut self, transform: impl IntoIterator<Item = Transform>) -> Self {
        self.transform = transform.into_iter().collect();
        self
    }

    /// Overlay `other` on top of this style
    ///
    /// A non-empty transform list in `other` replaces ours wholesale.
    pub fn merge(&mut self, other: &Style) {
        if other.margin_top.is_some() {
            self.margin_top = other.margin_top;
        }
        if other.margin_bottom.is_some() {
            self.margin_bottom = other.margin_bottom;
        }
        if other.background.is_some() {
            self.background = other.background;
        }
        if other.border_color.is_some() {
            self.border_color = other.border_color;
        }
        if other.text_color.is_some() {
            self.text_color = other.text_color;
        }
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if !other.transform.is_empty() {
            self.transform = other.transform.clone();
        }
    }

    /// Merge an optional overlay, returning self for chaining
    pub fn merged(mut self, other: Option<&Style>) -> Self {
        if let Some(other) = other {
            self.merge(other);
        }
        self
    }

    /// Value of the first transform op of the given kind
    pub fn translate_x(&self) -> Option<f32> {
        self.transform.iter().find_map(|op| match op {
            Transform::TranslateX(x) => Some(*x),
            _ => None,
        })
    }

    pub fn translate_y(&self) -> Option<f32> {
        self.transform.iter().find_map(|op| match op {
            Transform::TranslateY(y) => Some(*y),
            _ => None,
        })
    }

    pub fn scale(&self) -> Option<f32> {
        self.transform.iter().find_map(|op| match op {
            Transform::Scale(s) => Some(*s),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_only_overrides_set_properties() {
        let mut base = Style::new()
            .border_color(Color::BLACK)
            .margin_bottom(16.0)
            .transform([Transform::Scale(1.0)]);
        base.merge(&Style::new().border_color(Color::WHITE));

        assert_eq!(base.border_color, Some(Color::WHITE));
        assert_eq!(base.margin_bottom, Some(16.0));
        assert_eq!(base.scale(), Some(1.0));
    }

    #[test]
    fn test_transform_accessors() {
        let style = Style::new().transform([
            Transform::TranslateY(12.0),
            Transform::TranslateX(-3.0),
            Transform::Scale(0.65),
        ]);
        assert_eq!(style.translate_y(), Some(12.0));
        assert_eq!(style.translate_x(), Some(-3.0));
        assert_eq!(style.scale(), Some(0.65));
        assert!(!style.transform.spilled());
    }
}
