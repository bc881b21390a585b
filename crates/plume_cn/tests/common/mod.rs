#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use plume_core::Event;
use plume_layout::{EntryBinding, MaskSpec, MaskedTextEntry, NativeTextEntry};

/// Native field double that records focus traffic
#[derive(Default)]
pub struct MockEntry {
    focused: AtomicBool,
    pub focus_calls: AtomicUsize,
    pub blur_calls: AtomicUsize,
    value: Mutex<String>,
}

impl MockEntry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_value(&self, value: &str) {
        *self.value.lock().unwrap() = value.to_string();
    }

    pub fn blurs(&self) -> usize {
        self.blur_calls.load(Ordering::SeqCst)
    }

    pub fn focuses(&self) -> usize {
        self.focus_calls.load(Ordering::SeqCst)
    }
}

impl NativeTextEntry for MockEntry {
    fn focus(&self) {
        self.focus_calls.fetch_add(1, Ordering::SeqCst);
        self.focused.store(true, Ordering::SeqCst);
    }

    fn blur(&self) {
        self.blur_calls.fetch_add(1, Ordering::SeqCst);
        self.focused.store(false, Ordering::SeqCst);
    }

    fn clear(&self) {
        self.value.lock().unwrap().clear();
    }

    fn value(&self) -> String {
        self.value.lock().unwrap().clone()
    }

    fn is_focused(&self) -> bool {
        self.focused.load(Ordering::SeqCst)
    }
}

/// Masked wrapper double holding a [`MockEntry`]
pub struct MockMasked {
    pub inner: Arc<MockEntry>,
    pub mask: MaskSpec,
}

impl MaskedTextEntry for MockMasked {
    fn element(&self) -> Option<Arc<dyn NativeTextEntry>> {
        Some(self.inner.clone())
    }

    fn raw_value(&self) -> String {
        self.mask.raw_value(&self.inner.value())
    }
}

pub fn plain(entry: &Arc<MockEntry>) -> EntryBinding {
    EntryBinding::Plain(entry.clone())
}

pub fn masked(entry: &Arc<MockEntry>, mask: MaskSpec) -> EntryBinding {
    EntryBinding::Masked(Arc::new(MockMasked {
        inner: entry.clone(),
        mask,
    }))
}

/// Counts handler invocations
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn handler(&self) -> impl Fn(&Event) + Send + Sync + 'static {
        let count = self.0.clone();
        move |_: &Event| {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Collects forwarded text
#[derive(Clone, Default)]
pub struct Texts(Arc<Mutex<Vec<String>>>);

impl Texts {
    pub fn handler(&self) -> impl Fn(&str) + Send + Sync + 'static {
        let texts = self.0.clone();
        move |text: &str| texts.lock().unwrap().push(text.to_string())
    }

    pub fn all(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Advance until every animation settles
pub fn settle(mut tick: impl FnMut(f32) -> bool) {
    for _ in 0..1000 {
        if !tick(16.0) {
            return;
        }
    }
    panic!("animation did not settle");
}
