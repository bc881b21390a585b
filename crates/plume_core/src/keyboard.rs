//! Keyboard visibility notifier
//!
//! The soft keyboard is process-wide state. Platforms report show/hide
//! transitions through [`KeyboardNotifier::emit`]; components subscribe with
//! [`KeyboardNotifier::add_listener`] and hold the returned
//! [`KeyboardSubscription`] for as long as they want notifications.
//!
//! A subscription is released by [`KeyboardSubscription::remove`] or when it
//! is dropped, whichever happens first.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, Weak};

use slotmap::{new_key_type, SlotMap};

use crate::events::{event_types, EventType};

new_key_type! {
    /// Identifier of a registered keyboard listener
    pub struct ListenerId;
}

/// Soft keyboard visibility transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyboardEvent {
    WillShow,
    DidShow,
    WillHide,
    DidHide,
}

impl KeyboardEvent {
    /// Event id used by state transitions
    pub fn event_type(&self) -> EventType {
        match self {
            KeyboardEvent::WillShow => event_types::KEYBOARD_WILL_SHOW,
            KeyboardEvent::DidShow => event_types::KEYBOARD_DID_SHOW,
            KeyboardEvent::WillHide => event_types::KEYBOARD_WILL_HIDE,
            KeyboardEvent::DidHide => event_types::KEYBOARD_DID_HIDE,
        }
    }
}

/// Keyboard listener callback
pub type KeyboardHandler = Arc<dyn Fn(KeyboardEvent) + Send + Sync>;

struct Listener {
    event: KeyboardEvent,
    handler: KeyboardHandler,
}

#[derive(Default)]
struct Registry {
    listeners: SlotMap<ListenerId, Listener>,
    visible: bool,
}

type SharedRegistry = Arc<Mutex<Registry>>;

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Broadcasts keyboard visibility changes to subscribed listeners
#[derive(Clone, Default)]
pub struct KeyboardNotifier {
    registry: SharedRegistry,
}

static GLOBAL_NOTIFIER: OnceLock<KeyboardNotifier> = OnceLock::new();

impl KeyboardNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide notifier platforms report into
    pub fn global() -> &'static KeyboardNotifier {
        GLOBAL_NOTIFIER.get_or_init(KeyboardNotifier::new)
    }

    /// Register `handler` for `event`
    ///
    /// The listener stays installed until the returned subscription is
    /// removed or dropped.
    #[must_use = "dropping the subscription removes the listener"]
    pub fn add_listener<F>(&self, event: KeyboardEvent, handler: F) -> KeyboardSubscription
    where
        F: Fn(KeyboardEvent) + Send + Sync + 'static,
    {
        let id = lock(&self.registry).listeners.insert(Listener {
            event,
            handler: Arc::new(handler),
        });
        tracing::trace!(?id, ?event, "keyboard listener added");

        KeyboardSubscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every listener registered for it
    ///
    /// Handlers run after the registry lock is released, so a handler may add
    /// or remove subscriptions. Returns the number of handlers invoked.
    pub fn emit(&self, event: KeyboardEvent) -> usize {
        let handlers: Vec<KeyboardHandler> = {
            let mut registry = lock(&self.registry);
            match event {
                KeyboardEvent::DidShow => registry.visible = true,
                KeyboardEvent::DidHide => registry.visible = false,
                _ => {}
            }
            registry
                .listeners
                .values()
                .filter(|listener| listener.event == event)
                .map(|listener| listener.handler.clone())
                .collect()
        };

        tracing::debug!(?event, listeners = handlers.len(), "keyboard event");
        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    /// Whether the last reported transition left the keyboard on screen
    pub fn is_visible(&self) -> bool {
        lock(&self.registry).visible
    }

    /// Number of installed listeners across all events
    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }

    /// Number of installed listeners for one event
    pub fn listener_count_for(&self, event: KeyboardEvent) -> usize {
        lock(&self.registry)
            .listeners
            .values()
            .filter(|listener| listener.event == event)
            .count()
    }
}

/// Handle to an installed keyboard listener
pub struct KeyboardSubscription {
    id: ListenerId,
    registry: Weak<Mutex<Registry>>,
}

impl KeyboardSubscription {
    /// Uninstall the listener. Safe to call more than once.
    pub fn remove(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if lock(&registry).listeners.remove(self.id).is_some() {
                tracing::trace!(id = ?self.id, "keyboard listener removed");
            }
        }
        self.registry = Weak::new();
    }

    /// Whether the listener is still installed
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| {
                let installed = lock(&registry).listeners.contains_key(self.id);
                installed
            })
            .unwrap_or(false)
    }
}

impl Drop for KeyboardSubscription {
    fn drop(&mut self) {
        self.remove();
    }
}

impl std::fmt::Debug for KeyboardSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyboardSubscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn(KeyboardEvent) + Send + Sync + 'static) {
        let hits = Arc::new(AtomicUsize::new(0));
        let clone = hits.clone();
        (hits, move |_| {
            clone.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_emit_reaches_matching_listeners_only() {
        let notifier = KeyboardNotifier::new();
        let (hide_hits, on_hide) = counter();
        let (show_hits, on_show) = counter();

        let _hide = notifier.add_listener(KeyboardEvent::DidHide, on_hide);
        let _show = notifier.add_listener(KeyboardEvent::DidShow, on_show);

        assert_eq!(notifier.emit(KeyboardEvent::DidHide), 1);
        assert_eq!(hide_hits.load(Ordering::SeqCst), 1);
        assert_eq!(show_hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_remove_stops_delivery() {
        let notifier = KeyboardNotifier::new();
        let (hits, handler) = counter();

        let mut subscription = notifier.add_listener(KeyboardEvent::DidHide, handler);
        assert!(subscription.is_active());

        subscription.remove();
        subscription.remove();
        assert!(!subscription.is_active());

        notifier.emit(KeyboardEvent::DidHide);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(notifier.listener_count(), 0);
    }

    #[test]
    fn test_drop_removes_listener() {
        let notifier = KeyboardNotifier::new();
        let (hits, handler) = counter();

        {
            let _subscription = notifier.add_listener(KeyboardEvent::DidHide, handler);
            assert_eq!(notifier.listener_count_for(KeyboardEvent::DidHide), 1);
        }

        assert_eq!(notifier.listener_count(), 0);
        notifier.emit(KeyboardEvent::DidHide);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_handler_may_unsubscribe_during_emit() {
        let notifier = KeyboardNotifier::new();
        let slot: Arc<Mutex<Option<KeyboardSubscription>>> = Arc::new(Mutex::new(None));
        let slot_clone = slot.clone();

        let subscription = notifier.add_listener(KeyboardEvent::DidHide, move |_| {
            slot_clone.lock().unwrap().take();
        });
        *slot.lock().unwrap() = Some(subscription);

        notifier.emit(KeyboardEvent::DidHide);
        assert_eq!(notifier.listener_count(), 0);
    }

    #[test]
    fn test_visibility_tracking() {
        let notifier = KeyboardNotifier::new();
        assert!(!notifier.is_visible());
        notifier.emit(KeyboardEvent::DidShow);
        assert!(notifier.is_visible());
        notifier.emit(KeyboardEvent::WillHide);
        assert!(notifier.is_visible());
        notifier.emit(KeyboardEvent::DidHide);
        assert!(!notifier.is_visible());
    }

    #[test]
    fn test_subscription_outliving_notifier_is_inert() {
        let notifier = KeyboardNotifier::new();
        let (_hits, handler) = counter();
        let mut subscription = notifier.add_listener(KeyboardEvent::DidHide, handler);
        drop(notifier);
        assert!(!subscription.is_active());
        subscription.remove();
    }
}
