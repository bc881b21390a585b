//! Event types and payloads
//!
//! Events delivered by the host to field components. Ids are plain `u32`
//! constants so state transitions can match on them directly.

use crate::geometry::Size;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
    /// Text changed by the user (keystroke, paste, IME commit)
    pub const TEXT_CHANGE: EventType = 22;
    /// Return/submit key pressed on the soft keyboard
    pub const SUBMIT: EventType = 23;
    /// Element finished a layout pass
    pub const LAYOUT: EventType = 40;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;

    // Soft keyboard visibility
    pub const KEYBOARD_WILL_SHOW: EventType = 90;
    pub const KEYBOARD_DID_SHOW: EventType = 91;
    pub const KEYBOARD_WILL_HIDE: EventType = 92;
    pub const KEYBOARD_DID_HIDE: EventType = 93;
}

/// A UI event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    /// Native tag of the element that produced the event
    pub target: u64,
    pub data: EventData,
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Text { text: String },
    Layout { size: Size },
    None,
}

impl Event {
    pub fn new(event_type: EventType, target: u64) -> Self {
        Self {
            event_type,
            target,
            data: EventData::None,
            timestamp: 0,
        }
    }

    pub fn focus(target: u64) -> Self {
        Self::new(event_types::FOCUS, target)
    }

    pub fn blur(target: u64) -> Self {
        Self::new(event_types::BLUR, target)
    }

    pub fn text_change(target: u64, text: impl Into<String>) -> Self {
        Self {
            data: EventData::Text { text: text.into() },
            ..Self::new(event_types::TEXT_CHANGE, target)
        }
    }

    pub fn layout(target: u64, size: Size) -> Self {
        Self {
            data: EventData::Layout { size },
            ..Self::new(event_types::LAYOUT, target)
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Text payload, if this is a text event
    pub fn text(&self) -> Option<&str> {
        match &self.data {
            EventData::Text { text } => Some(text),
            _ => None,
        }
    }
}
