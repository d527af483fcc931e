// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Export results, configuration warnings and provider failures are reported
//! as short-lived toasts in the bottom-right corner.
//!
//! - [`notification`]: `Notification` with severity and i18n message key
//! - [`manager`]: queue and auto-dismiss lifecycle
//! - [`toast`]: rendering
//!
//! Success toasts last 3s, warnings 5s, errors stay until dismissed. At most
//! three are visible at once; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
