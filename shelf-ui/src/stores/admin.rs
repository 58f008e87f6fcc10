//! Admin panel state store

use crate::display_types::{BookRequestItem, PendingIssue};
use dioxus::prelude::*;

/// State for the admin panel: approvals and new-book requests.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AdminState {
    /// Issue requests awaiting approval.
    pub pending_issues: Vec<PendingIssue>,
    /// New-book requests from users.
    pub book_requests: Vec<BookRequestItem>,
}
