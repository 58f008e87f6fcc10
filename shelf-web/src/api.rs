//! JSON-over-HTTP client for the library backend
//!
//! Every function maps the backend payload into the display types the views
//! render, so nothing downstream sees wire shapes. Genre strings are cleaned
//! at ingestion; the rest of the app only ever handles cleaned genres.
//!
//! Errors are plain strings shown in a transient toast. No retries: a failed
//! call is terminal for that one user action.

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::json;
use shelf_common::{clean_genre, Book};
use shelf_ui::display_types::{
    BookActivity, BookRequestItem, ChatMessage, ChatSender, IssuedBook, NotificationItem,
    PendingIssue, UserSession, UserStats,
};
use std::collections::HashMap;

const API_BASE: &str = "http://127.0.0.1:8000";

fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn check(resp: reqwest::Response) -> Result<reqwest::Response, String> {
    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }
    Ok(resp)
}

async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let resp = reqwest::get(url(path))
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp)
        .await?
        .json()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}

// -- Wire types --

#[derive(Deserialize)]
struct ApiBook {
    id: i64,
    title: String,
    author: String,
    #[serde(default)]
    genre: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    cover_image: Option<String>,
}

impl From<ApiBook> for Book {
    fn from(b: ApiBook) -> Self {
        Book {
            id: b.id,
            title: b.title,
            author: b.author,
            genre: clean_genre(b.genre.as_deref().unwrap_or("")),
            rating: b.rating.unwrap_or(0.0),
            description: b.description.unwrap_or_default(),
            cover_image: b.cover_image.filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Deserialize)]
struct ApiSession {
    user_id: i64,
    #[serde(default)]
    name: String,
    email: String,
    #[serde(default)]
    role: Option<String>,
}

impl From<ApiSession> for UserSession {
    fn from(s: ApiSession) -> Self {
        UserSession {
            user_id: s.user_id,
            name: s.name,
            email: s.email,
            role: s.role.unwrap_or_else(|| "user".to_string()),
        }
    }
}

// FastAPI serializes datetimes without a timezone suffix.
fn to_utc(naive: NaiveDateTime) -> chrono::DateTime<chrono::Utc> {
    naive.and_utc()
}

#[derive(Deserialize)]
struct ApiIssuedBook {
    issue_id: i64,
    book_title: String,
    book_author: String,
    issue_date: NaiveDateTime,
    due_date: NaiveDateTime,
    is_overdue: bool,
    days_overdue: i64,
}

#[derive(Deserialize)]
struct ApiNotification {
    id: i64,
    message: String,
    #[serde(rename = "type")]
    kind: String,
    created_at: NaiveDateTime,
}

#[derive(Deserialize)]
struct ApiPendingIssue {
    issue_id: i64,
    book_title: String,
    book_author: String,
    user_name: String,
    requested_date: NaiveDateTime,
}

#[derive(Deserialize)]
struct ApiBookRequest {
    request_id: i64,
    book_title: String,
    author: String,
    user_name: String,
    requested_date: NaiveDateTime,
}

#[derive(Deserialize)]
struct ApiActivity {
    rating: f64,
    status: String,
}

#[derive(Deserialize)]
struct ApiStats {
    books_this_month: i64,
    total_books_read: i64,
    currently_reading: i64,
    wishlist_count: i64,
}

/// History rows come back newest-first as (message, response) pairs.
#[derive(Deserialize)]
struct ApiChatTurn {
    message: String,
    response: String,
    timestamp: NaiveDateTime,
}

#[derive(Deserialize)]
struct ChatReply {
    response: String,
}

// -- Auth --

/// Create an account. Admin accounts additionally require the admin PIN;
/// the backend answers 403 when it does not match.
pub async fn register(
    email: &str,
    password: &str,
    role: &str,
    admin_pin: Option<&str>,
) -> Result<(), String> {
    let mut body = json!({ "email": email, "password": password, "role": role });
    if let Some(pin) = admin_pin {
        body["admin_pin"] = json!(pin);
    }
    let resp = client()
        .post(url("/auth/register"))
        .json(&body)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if resp.status() == reqwest::StatusCode::FORBIDDEN {
        return Err("Invalid admin PIN.".to_string());
    }
    check(resp).await?;
    Ok(())
}

pub async fn login(email: &str, password: &str) -> Result<UserSession, String> {
    let resp = client()
        .post(url("/auth/login"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
        return Err("Invalid email or password.".to_string());
    }
    check(resp)
        .await?
        .json::<ApiSession>()
        .await
        .map(Into::into)
        .map_err(|e| format!("Parse error: {e}"))
}

// -- Books --

/// Fetch the full catalog snapshot.
pub async fn fetch_books() -> Result<Vec<Book>, String> {
    let books: Vec<ApiBook> = get_json("/books/").await?;
    Ok(books.into_iter().map(Into::into).collect())
}

/// Fetch the community trending subset.
pub async fn fetch_weekly_top() -> Result<Vec<Book>, String> {
    let books: Vec<ApiBook> = get_json("/books/weekly-top").await?;
    Ok(books.into_iter().map(Into::into).collect())
}

pub async fn add_book(
    title: &str,
    author: &str,
    genre: &str,
    description: &str,
    cover_image: &str,
) -> Result<(), String> {
    let resp = client()
        .post(url("/books/add"))
        .json(&json!({
            "title": title,
            "author": author,
            "genre": genre,
            "description": description,
            "cover_image": cover_image,
        }))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await.map(|_| ())
}

pub async fn delete_book(book_id: i64) -> Result<(), String> {
    let resp = client()
        .delete(url(&format!("/books/{book_id}")))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await.map(|_| ())
}

// -- Recommendations & activity --

pub async fn fetch_recommendations(user_id: i64) -> Result<Vec<Book>, String> {
    let books: Vec<ApiBook> = get_json(&format!("/recommend/{user_id}")).await?;
    Ok(books.into_iter().map(Into::into).collect())
}

pub async fn update_activity(
    user_id: i64,
    book_id: i64,
    rating: f64,
    status: &str,
) -> Result<(), String> {
    let resp = client()
        .post(url("/activity/update"))
        .json(&json!({
            "user_id": user_id,
            "book_id": book_id,
            "rating": rating,
            "status": status,
        }))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await.map(|_| ())
}

// -- User --

/// Ratings come back keyed by book id; JSON object keys are strings.
pub async fn fetch_user_ratings(user_id: i64) -> Result<HashMap<i64, BookActivity>, String> {
    let raw: HashMap<String, ApiActivity> = get_json(&format!("/user/{user_id}/ratings")).await?;
    Ok(raw
        .into_iter()
        .filter_map(|(k, v)| {
            k.parse::<i64>().ok().map(|id| {
                (
                    id,
                    BookActivity {
                        rating: v.rating,
                        status: v.status,
                    },
                )
            })
        })
        .collect())
}

pub async fn fetch_user_stats(user_id: i64) -> Result<UserStats, String> {
    let stats: ApiStats = get_json(&format!("/user/{user_id}/stats")).await?;
    Ok(UserStats {
        books_this_month: stats.books_this_month,
        total_books_read: stats.total_books_read,
        currently_reading: stats.currently_reading,
        wishlist_count: stats.wishlist_count,
    })
}

pub async fn fetch_wishlist(user_id: i64) -> Result<Vec<Book>, String> {
    let books: Vec<ApiBook> = get_json(&format!("/user/{user_id}/wishlist")).await?;
    Ok(books.into_iter().map(Into::into).collect())
}

pub async fn fetch_preferences(user_id: i64) -> Result<Vec<String>, String> {
    get_json(&format!("/user/{user_id}/preferences")).await
}

pub async fn save_preferences(user_id: i64, genres: &[String]) -> Result<(), String> {
    let resp = client()
        .post(url(&format!("/user/{user_id}/preferences")))
        .json(&json!({ "genres": genres }))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await.map(|_| ())
}

pub async fn rename_user(user_id: i64, name: &str) -> Result<(), String> {
    let resp = client()
        .put(url(&format!("/user/{user_id}/name")))
        .json(&json!({ "name": name }))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await.map(|_| ())
}

// -- Chat --

pub async fn send_chat_message(user_id: i64, message: &str) -> Result<String, String> {
    let resp = client()
        .post(url("/chat/"))
        .json(&json!({ "user_id": user_id, "message": message }))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp)
        .await?
        .json::<ChatReply>()
        .await
        .map(|r| r.response)
        .map_err(|e| format!("Parse error: {e}"))
}

/// Fetch the transcript, flattened into alternating user/assistant bubbles
/// in display order (oldest first).
pub async fn fetch_chat_history(user_id: i64) -> Result<Vec<ChatMessage>, String> {
    let turns: Vec<ApiChatTurn> = get_json(&format!("/chat/{user_id}/history")).await?;
    let mut messages = Vec::with_capacity(turns.len() * 2);
    for turn in turns.into_iter().rev() {
        let ts = to_utc(turn.timestamp);
        messages.push(ChatMessage {
            sender: ChatSender::User,
            content: turn.message,
            timestamp: ts,
        });
        messages.push(ChatMessage {
            sender: ChatSender::Assistant,
            content: turn.response,
            timestamp: ts,
        });
    }
    Ok(messages)
}

pub async fn clear_chat_history(user_id: i64) -> Result<(), String> {
    let resp = client()
        .delete(url(&format!("/chat/{user_id}/history")))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await.map(|_| ())
}

// -- Library --

pub async fn issue_book(user_id: i64, book_id: i64) -> Result<(), String> {
    let resp = client()
        .post(url("/library/issue"))
        .json(&json!({ "user_id": user_id, "book_id": book_id }))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if resp.status() == reqwest::StatusCode::BAD_REQUEST {
        return Err("Book already issued or pending approval.".to_string());
    }
    check(resp).await.map(|_| ())
}

pub async fn return_book(issue_id: i64) -> Result<(), String> {
    let resp = client()
        .post(url(&format!("/library/return/{issue_id}")))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await.map(|_| ())
}

pub async fn fetch_issued_books(user_id: i64) -> Result<Vec<IssuedBook>, String> {
    let issued: Vec<ApiIssuedBook> = get_json(&format!("/library/{user_id}/issued")).await?;
    Ok(issued
        .into_iter()
        .map(|b| IssuedBook {
            issue_id: b.issue_id,
            book_title: b.book_title,
            book_author: b.book_author,
            issue_date: to_utc(b.issue_date),
            due_date: to_utc(b.due_date),
            is_overdue: b.is_overdue,
            days_overdue: b.days_overdue,
        })
        .collect())
}

// -- Notifications --

pub async fn fetch_notifications(user_id: i64) -> Result<Vec<NotificationItem>, String> {
    let items: Vec<ApiNotification> =
        get_json(&format!("/library/{user_id}/notifications")).await?;
    Ok(items
        .into_iter()
        .map(|n| NotificationItem {
            id: n.id,
            message: n.message,
            kind: n.kind,
            created_at: to_utc(n.created_at),
        })
        .collect())
}

pub async fn mark_notification_read(notification_id: i64) -> Result<(), String> {
    let resp = client()
        .put(url(&format!("/library/notifications/{notification_id}/read")))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await.map(|_| ())
}

pub async fn mark_all_notifications_read(user_id: i64) -> Result<(), String> {
    let resp = client()
        .put(url(&format!("/library/{user_id}/notifications/mark-all-read")))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await.map(|_| ())
}

// -- Admin --

pub async fn fetch_pending_issues() -> Result<Vec<PendingIssue>, String> {
    let pending: Vec<ApiPendingIssue> = get_json("/library/pending-requests").await?;
    Ok(pending
        .into_iter()
        .map(|p| PendingIssue {
            issue_id: p.issue_id,
            book_title: p.book_title,
            book_author: p.book_author,
            user_name: p.user_name,
            requested_date: to_utc(p.requested_date),
        })
        .collect())
}

pub async fn approve_issue(issue_id: i64) -> Result<(), String> {
    let resp = client()
        .post(url(&format!("/library/approve/{issue_id}")))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await.map(|_| ())
}

pub async fn request_book(user_id: i64, title: &str, author: &str) -> Result<(), String> {
    let resp = client()
        .post(url("/library/request-book"))
        .json(&json!({
            "user_id": user_id,
            "book_title": title,
            "author": author,
        }))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await.map(|_| ())
}

pub async fn fetch_book_requests() -> Result<Vec<BookRequestItem>, String> {
    let requests: Vec<ApiBookRequest> = get_json("/library/book-requests").await?;
    Ok(requests
        .into_iter()
        .map(|r| BookRequestItem {
            request_id: r.request_id,
            book_title: r.book_title,
            author: r.author,
            user_name: r.user_name,
            requested_date: to_utc(r.requested_date),
        })
        .collect())
}

pub async fn fulfill_book_request(request_id: i64) -> Result<(), String> {
    let resp = client()
        .post(url(&format!("/library/book-requests/{request_id}/fulfill")))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await.map(|_| ())
}

pub async fn reject_book_request(request_id: i64) -> Result<(), String> {
    let resp = client()
        .post(url(&format!("/library/book-requests/{request_id}/reject")))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await.map(|_| ())
}
