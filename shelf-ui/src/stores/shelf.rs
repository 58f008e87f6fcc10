//! My Library view state store

use crate::display_types::{IssuedBook, NotificationItem};
use dioxus::prelude::*;

/// State for the My Library view: issued books and unread notifications.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ShelfState {
    pub issued: Vec<IssuedBook>,
    pub notifications: Vec<NotificationItem>,
}
