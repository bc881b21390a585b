//! Field interaction states
//!
//! Text fields track a tiny focus machine. Events are matched by id and a
//! transition either yields the next state or `None` when the event does not
//! apply to the current state.

use crate::events::EventType;

/// State types that react to events
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + std::hash::Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// Focus state of a text field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldState {
    #[default]
    Idle,
    Focused,
}

impl FieldState {
    /// Returns true if the text field holds keyboard focus
    pub fn is_focused(&self) -> bool {
        matches!(self, FieldState::Focused)
    }
}

impl StateTransitions for FieldState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use crate::events::event_types::*;
        match (self, event) {
            (FieldState::Idle, FOCUS) => Some(FieldState::Focused),
            (FieldState::Focused, BLUR) => Some(FieldState::Idle),
            // Dismissing the soft keyboard drops focus without a native blur
            (FieldState::Focused, KEYBOARD_DID_HIDE) => Some(FieldState::Idle),
            (FieldState::Focused, UNMOUNT) => Some(FieldState::Idle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event_types::*;

    #[test]
    fn test_focus_blur_cycle() {
        let state = FieldState::default();
        assert!(!state.is_focused());

        let focused = state.on_event(FOCUS).unwrap();
        assert!(focused.is_focused());

        let idle = focused.on_event(BLUR).unwrap();
        assert_eq!(idle, FieldState::Idle);
    }

    #[test]
    fn test_redundant_events_do_not_transition() {
        assert_eq!(FieldState::Idle.on_event(BLUR), None);
        assert_eq!(FieldState::Focused.on_event(FOCUS), None);
        assert_eq!(FieldState::Idle.on_event(KEYBOARD_DID_HIDE), None);
    }

    #[test]
    fn test_keyboard_hide_clears_focus() {
        assert_eq!(
            FieldState::Focused.on_event(KEYBOARD_DID_HIDE),
            Some(FieldState::Idle)
        );
    }
}
