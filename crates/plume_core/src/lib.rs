//! Plume Core
//!
//! Foundational primitives shared by the Plume component crates:
//!
//! - **Geometry**: colors, points and sizes used by styles and layout callbacks
//! - **Events**: event type ids and payloads delivered to field handlers
//! - **Field state**: focus transitions for text fields
//! - **Keyboard**: process-wide keyboard visibility notifier with scoped subscriptions
//!
//! # Example
//!
//! ```rust
//! use plume_core::{KeyboardEvent, KeyboardNotifier};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let notifier = KeyboardNotifier::new();
//! let hits = Arc::new(AtomicUsize::new(0));
//! let counter = hits.clone();
//!
//! let mut subscription = notifier.add_listener(KeyboardEvent::DidHide, move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! notifier.emit(KeyboardEvent::DidHide);
//! subscription.remove();
//! notifier.emit(KeyboardEvent::DidHide);
//!
//! assert_eq!(hits.load(Ordering::SeqCst), 1);
//! ```

pub mod events;
pub mod geometry;
pub mod keyboard;
pub mod state;

pub use events::{event_types, Event, EventData, EventType};
pub use geometry::{Color, Point, Size};
pub use keyboard::{KeyboardEvent, KeyboardNotifier, KeyboardSubscription};
pub use state::{FieldState, StateTransitions};
