//! Forwarded field reference
//!
//! A [`FieldRef`] is handed to an input through its builder and gets bound
//! once the host mounts the native text field. Masked fields resolve through
//! their wrapper's inner element, so callers always reach the native field.

use std::sync::{Arc, Mutex};

use plume_layout::{EntryBinding, NativeTextEntry};

use super::shared::lock;

/// Shared handle to a mounted text field
#[derive(Clone, Default)]
pub struct FieldRef {
    binding: Arc<Mutex<Option<EntryBinding>>>,
}

impl FieldRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn bind(&self, binding: EntryBinding) {
        tracing::trace!(masked = binding.is_masked(), "field ref bound");
        *lock(&self.binding) = Some(binding);
    }

    pub(crate) fn unbind(&self) {
        lock(&self.binding).take();
    }

    /// The raw binding, masked wrapper included
    pub fn binding(&self) -> Option<EntryBinding> {
        lock(&self.binding).clone()
    }

    /// The native field, resolved through a mask wrapper if needed
    pub fn resolve(&self) -> Option<Arc<dyn NativeTextEntry>> {
        self.binding().and_then(|binding| binding.resolve())
    }

    pub fn is_bound(&self) -> bool {
        self.resolve().is_some()
    }

    pub fn focus(&self) {
        if let Some(entry) = self.resolve() {
            entry.focus();
        }
    }

    pub fn blur(&self) {
        if let Some(entry) = self.resolve() {
            entry.blur();
        }
    }

    pub fn clear(&self) {
        if let Some(entry) = self.resolve() {
            entry.clear();
        }
    }

    pub fn value(&self) -> Option<String> {
        self.resolve().map(|entry| entry.value())
    }

    pub fn is_focused(&self) -> bool {
        self.resolve().is_some_and(|entry| entry.is_focused())
    }
}

impl std::fmt::Debug for FieldRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRef")
            .field("binding", &self.binding())
            .finish()
    }
}

/// Bind the component's own ref and the caller's forwarded one together
pub(crate) fn bind_refs(local: &FieldRef, forwarded: Option<&FieldRef>, binding: EntryBinding) {
    if let Some(forwarded) = forwarded {
        forwarded.bind(binding.clone());
    }
    local.bind(binding);
}
