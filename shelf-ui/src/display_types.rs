//! Display types for UI components
//!
//! Lightweight shapes carrying only what the views render. The API client in
//! the app shell maps backend payloads into these, so components work the
//! same against real or demo data.

use chrono::{DateTime, Utc};

/// The logged-in user, as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct UserSession {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    /// `"user"` or `"admin"`.
    pub role: String,
}

impl UserSession {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Display name, falling back to the email's local part.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.email.split('@').next().unwrap_or(&self.email)
        } else {
            &self.name
        }
    }
}

/// A book currently issued to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct IssuedBook {
    pub issue_id: i64,
    pub book_title: String,
    pub book_author: String,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub is_overdue: bool,
    pub days_overdue: i64,
}

/// An unread backend notification (due-date reminders etc.).
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationItem {
    pub id: i64,
    pub message: String,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

/// A pending issue request awaiting admin approval.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingIssue {
    pub issue_id: i64,
    pub book_title: String,
    pub book_author: String,
    pub user_name: String,
    pub requested_date: DateTime<Utc>,
}

/// A user's request for a book the library does not carry yet.
#[derive(Clone, Debug, PartialEq)]
pub struct BookRequestItem {
    pub request_id: i64,
    pub book_title: String,
    pub author: String,
    pub user_name: String,
    pub requested_date: DateTime<Utc>,
}

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Assistant,
}

/// One bubble in the chat transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Reading-activity headline numbers for the home view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UserStats {
    pub books_this_month: i64,
    pub total_books_read: i64,
    pub currently_reading: i64,
    pub wishlist_count: i64,
}

/// Reading status attached to a rating/activity update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadingStatus {
    Read,
    Reading,
    Wishlist,
}

impl ReadingStatus {
    /// Wire string used by `POST /activity/update`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::Read => "read",
            ReadingStatus::Reading => "reading",
            ReadingStatus::Wishlist => "wishlist",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "read" => Some(ReadingStatus::Read),
            "reading" => Some(ReadingStatus::Reading),
            "wishlist" => Some(ReadingStatus::Wishlist),
            _ => None,
        }
    }
}

/// A user's recorded rating + status for one book.
#[derive(Clone, Debug, PartialEq)]
pub struct BookActivity {
    pub rating: f64,
    pub status: String,
}
