//! Counter bookkeeping driven by style derivation.
//!
//! [§ 12.4 Automatic counters and numbering](https://www.w3.org/TR/CSS2/generate.html#counters)
//!
//! "Counters are 'reset' by the 'counter-reset' property and incremented by
//! the 'counter-increment' property."

use std::collections::HashMap;

use crate::style::Style;

/// Receives one reset and one increment per element, in document order.
///
/// [`StyleTree::derive_child`](crate::StyleTree::derive_child) calls
/// [`CounterTracker::reset`] and then [`CounterTracker::increment`] every time
/// it is asked for a child style, including when the style is shared with an
/// earlier element.
pub trait CounterTracker {
    /// Apply the style's `counter-reset` entries.
    fn reset(&mut self, style: Style<'_>);

    /// Apply the style's `counter-increment` entries.
    fn increment(&mut self, style: Style<'_>);
}

/// A flat, document-order counter table.
///
/// Every counter lives in one namespace for the whole document; nested
/// counter scopes are left to the layout layer.
#[derive(Debug, Clone, Default)]
pub struct DocumentCounters {
    values: HashMap<String, i32>,
}

impl DocumentCounters {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current value of counter `name`, if it was ever reset or
    /// incremented.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<i32> {
        self.values.get(name).copied()
    }
}

impl CounterTracker for DocumentCounters {
    fn reset(&mut self, style: Style<'_>) {
        for counter in style.counter_reset() {
            log::trace!("counter-reset {} = {}", counter.name, counter.value);
            let _ = self.values.insert(counter.name, counter.value);
        }
    }

    fn increment(&mut self, style: Style<'_>) {
        // "If 'counter-increment' refers to a counter that is not in the
        // scope of any 'counter-reset', the counter is assumed to have been
        // reset to 0 by the root element."
        for counter in style.counter_increment() {
            let value = self.values.entry(counter.name).or_insert(0);
            *value = value.saturating_add(counter.value);
        }
    }
}

/// A tracker that ignores every notification, for callers that do not
/// render generated content.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCounters;

impl CounterTracker for NoCounters {
    fn reset(&mut self, _style: Style<'_>) {}

    fn increment(&mut self, _style: Style<'_>) {}
}
