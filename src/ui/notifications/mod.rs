// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Used for the few things the visitor should hear about outside the
//! gallery itself: a settings file that could not be read, a content source
//! that fell back to the sample catalog, auto-advance being switched.
//!
//! - Success and info stay 3 s, warnings 5 s, errors until dismissed
//! - At most three toasts are visible; the rest queue
//! - Bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
