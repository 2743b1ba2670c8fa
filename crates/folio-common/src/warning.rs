//! Renderer warnings, emitted through the `log` facade.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the style engine to report degraded answers (values it could not
//! classify, list entries it had to replace with defaults).

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Log target shared by every Folio warning.
pub const LOG_TARGET: &str = "folio";

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a degraded result (logged once per unique message)
///
/// # Example
/// ```
/// folio_common::warning::warn_once("style", "can't tell whether 'width' has an absolute unit");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_log = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_log {
        log::warn!(target: LOG_TARGET, "[{component}] {message}");
    }
}

/// Whether `warn_once` has already been called with this component and message.
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call when starting a new document)
///
/// # Example
/// ```
/// use folio_common::warning::{clear_warnings, has_warned, warn_once};
///
/// warn_once("style", "first document");
/// clear_warnings();
/// assert!(!has_warned("style", "first document"));
/// ```
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
