//! Navbar notification dropdown state store

use crate::display_types::NotificationItem;
use dioxus::prelude::*;

/// State for the navbar bell: unread notifications plus dropdown visibility.
/// Refreshed by the layout's polling loop while the app is mounted.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct NotificationsState {
    pub items: Vec<NotificationItem>,
    pub open: bool,
}
