//! Caller-supplied notification callbacks

use std::fmt;
use std::sync::Arc;

use crate::value::PickerValue;

/// A no-argument notification (open/close hooks, navigation arrows)
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Selection notification, called with the native value and its index in
/// the effective item sequence
pub type ValueChangeCallback = Arc<dyn Fn(&PickerValue, usize) + Send + Sync>;

/// Optional open/close lifecycle notifications
#[derive(Clone, Default)]
pub struct LifecycleHooks {
    /// Fired right before the overlay opens
    pub on_open: Option<Callback>,
    /// Fired right before the overlay closes
    pub on_close: Option<Callback>,
}

impl LifecycleHooks {
    /// Fire the hook matching the state the overlay is about to leave
    pub(crate) fn fire_before_toggle(&self, currently_open: bool) {
        let hook = if currently_open {
            &self.on_close
        } else {
            &self.on_open
        };
        if let Some(hook) = hook {
            hook();
        }
    }
}

impl fmt::Debug for LifecycleHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleHooks")
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}
