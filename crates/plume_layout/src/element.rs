//! Element tree
//!
//! Components render into a tree of [`Element`]s that the host maps onto
//! native views. Elements carry the callbacks the host drives back into the
//! component (presses, layout measurements, text-entry events).

use std::fmt;
use std::sync::Arc;

use plume_core::{Color, Size};
use smallvec::SmallVec;

use crate::style::Style;
use crate::text_entry::TextEntryElement;

/// Tap handler
pub type PressHandler = Arc<dyn Fn() + Send + Sync>;

/// Layout measurement handler
pub type LayoutHandler = Arc<dyn Fn(Size) + Send + Sync>;

/// What an element renders as
#[derive(Clone, Debug)]
pub enum ElementKind {
    /// Plain container
    View,
    Text {
        content: String,
        /// Line limit, unlimited when `None`
        number_of_lines: Option<u32>,
    },
    /// Vector icon by name
    Icon { name: String, size: f32, color: Color },
    /// Activity indicator
    Spinner { size: f32, color: Color },
    TextEntry(Box<TextEntryElement>),
    /// Container with touch feedback
    Pressable,
}

/// A node in the rendered tree
#[derive(Clone)]
pub struct Element {
    pub kind: ElementKind,
    pub style: Style,
    /// Stylesheet entries applied by the host, in order
    pub roles: SmallVec<[&'static str; 4]>,
    /// Stable lookup key
    pub key: Option<&'static str>,
    pub on_press: Option<PressHandler>,
    pub on_layout: Option<LayoutHandler>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            style: Style::default(),
            roles: SmallVec::new(),
            key: None,
            on_press: None,
            on_layout: None,
            children: Vec::new(),
        }
    }

    pub fn view() -> Self {
        Self::new(ElementKind::View)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(ElementKind::Text {
            content: content.into(),
            number_of_lines: None,
        })
    }

    pub fn icon(name: impl Into<String>, size: f32, color: Color) -> Self {
        Self::new(ElementKind::Icon {
            name: name.into(),
            size,
            color,
        })
    }

    pub fn spinner(size: f32, color: Color) -> Self {
        Self::new(ElementKind::Spinner { size, color })
    }

    pub fn text_entry(entry: TextEntryElement) -> Self {
        Self::new(ElementKind::TextEntry(Box::new(entry)))
    }

    pub fn pressable() -> Self {
        Self::new(ElementKind::Pressable)
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn role(mut self, role: &'static str) -> Self {
        self.roles.push(role);
        self
    }

    /// Add a role only when `condition` holds
    pub fn role_if(self, condition: bool, role: &'static str) -> Self {
        if condition {
            self.role(role)
        } else {
            self
        }
    }

    pub fn key(mut self, key: &'static str) -> Self {
        self.key = Some(key);
        self
    }

    /// Limit a text element to `lines` lines. No-op on other kinds.
    pub fn number_of_lines(mut self, lines: u32) -> Self {
        if let ElementKind::Text {
            number_of_lines, ..
        } = &mut self.kind
        {
            *number_of_lines = Some(lines);
        }
        self
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_press = Some(Arc::new(handler));
        self
    }

    pub fn on_layout<F>(mut self, handler: F) -> Self
    where
        F: Fn(Size) + Send + Sync + 'static,
    {
        self.on_layout = Some(Arc::new(handler));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Add a child if present
    pub fn child_opt(mut self, child: Option<Element>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    // =========================================================================
    // Host callbacks
    // =========================================================================

    /// Fire the press handler. Returns false if the element is not tappable.
    pub fn press(&self) -> bool {
        match &self.on_press {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Report a measured size. Returns false if nobody listens.
    pub fn layout(&self, size: Size) -> bool {
        match &self.on_layout {
            Some(handler) => {
                handler(size);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| *r == role)
    }

    /// Depth-first search
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }

    pub fn find_by_key(&self, key: &str) -> Option<&Element> {
        self.find(&|element| element.key == Some(key))
    }

    pub fn find_by_role(&self, role: &str) -> Option<&Element> {
        self.find(&|element| element.has_role(role))
    }

    /// The first text-entry element in the tree
    pub fn find_text_entry(&self) -> Option<&TextEntryElement> {
        self.find(&|element| matches!(element.kind, ElementKind::TextEntry(_)))
            .and_then(Element::as_text_entry)
    }

    pub fn as_text_entry(&self) -> Option<&TextEntryElement> {
        match &self.kind {
            ElementKind::TextEntry(entry) => Some(entry.as_ref()),
            _ => None,
        }
    }

    /// Text content of a text element
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text { content, .. } => Some(content.as_str()),
            _ => None,
        }
    }

    /// Text content of the first text element in the tree
    pub fn find_text(&self) -> Option<&str> {
        self.find(&|element| matches!(element.kind, ElementKind::Text { .. }))
            .and_then(Element::text_content)
    }

    /// Total node count, self included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Element::node_count).sum::<usize>()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("kind", &self.kind)
            .field("key", &self.key)
            .field("roles", &self.roles)
            .field("style", &self.style)
            .field("on_press", &self.on_press.is_some())
            .field("on_layout", &self.on_layout.is_some())
            .field("children", &self.children)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_find_by_key_and_role() {
        let tree = Element::view().role("wrapper").child(
            Element::view()
                .child(Element::text("Name").key("label").role("label"))
                .child_opt(None),
        );

        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.find_by_key("label").and_then(Element::text_content), Some("Name"));
        assert!(tree.find_by_role("wrapper").is_some());
        assert!(tree.find_by_key("missing").is_none());
    }

    #[test]
    fn test_press_and_layout_callbacks() {
        let presses = Arc::new(AtomicUsize::new(0));
        let counter = presses.clone();
        let button = Element::pressable().on_press(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(button.press());
        assert_eq!(presses.load(Ordering::SeqCst), 1);
        assert!(!Element::view().press());
        assert!(!button.layout(Size::new(10.0, 10.0)));
    }

    #[test]
    fn test_number_of_lines_only_applies_to_text() {
        let label = Element::text("Email").number_of_lines(1);
        assert!(matches!(
            label.kind,
            ElementKind::Text {
                number_of_lines: Some(1),
                ..
            }
        ));
        let view = Element::view().number_of_lines(1);
        assert!(matches!(view.kind, ElementKind::View));
    }
}
