//! Admin panel view component - pure rendering, no data fetching

use crate::components::helpers::PageContainer;
use crate::components::text_input::{TextArea, TextInput};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::{BookRequestItem, PendingIssue};
use crate::stores::admin::{AdminState, AdminStateStoreExt};
use dioxus::prelude::*;

/// Fields for adding a book to the catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewBookInput {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub cover_image: String,
}

impl NewBookInput {
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.author.trim().is_empty()
    }
}

/// Admin panel: add books, approve issue requests, handle book requests.
#[component]
pub fn AdminView(
    state: ReadStore<AdminState>,
    on_add_book: EventHandler<NewBookInput>,
    on_approve_issue: EventHandler<i64>,
    on_fulfill_request: EventHandler<i64>,
    on_reject_request: EventHandler<i64>,
) -> Element {
    let pending_issues = state.pending_issues().read().clone();
    let book_requests = state.book_requests().read().clone();

    rsx! {
        PageContainer {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Admin Panel" }

            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-8",
                div {
                    AddBookForm { on_add_book }
                }
                div {
                    PendingIssuesSection { pending_issues, on_approve_issue }
                    BookRequestsSection {
                        book_requests,
                        on_fulfill_request,
                        on_reject_request,
                    }
                }
            }
        }
    }
}

#[component]
fn AddBookForm(on_add_book: EventHandler<NewBookInput>) -> Element {
    let mut form = use_signal(NewBookInput::default);
    let is_valid = form.read().is_valid();

    rsx! {
        section { class: "bg-white border border-gray-200 rounded-lg p-6",
            h2 { class: "text-lg font-bold text-gray-900 mb-4", "Add Book" }
            div { class: "space-y-3",
                TextInput {
                    label: Some("Title".to_string()),
                    value: form.read().title.clone(),
                    oninput: move |v| form.write().title = v,
                }
                TextInput {
                    label: Some("Author".to_string()),
                    value: form.read().author.clone(),
                    oninput: move |v| form.write().author = v,
                }
                TextInput {
                    label: Some("Genre".to_string()),
                    value: form.read().genre.clone(),
                    oninput: move |v| form.write().genre = v,
                }
                TextArea {
                    label: Some("Description".to_string()),
                    value: form.read().description.clone(),
                    oninput: move |v| form.write().description = v,
                }
                TextInput {
                    label: Some("Cover image URL (optional)".to_string()),
                    value: form.read().cover_image.clone(),
                    oninput: move |v| form.write().cover_image = v,
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    disabled: !is_valid,
                    onclick: move |_| {
                        on_add_book.call(form.read().clone());
                        form.set(NewBookInput::default());
                    },
                    "Add to Catalog"
                }
            }
        }
    }
}

#[component]
fn PendingIssuesSection(
    pending_issues: Vec<PendingIssue>,
    on_approve_issue: EventHandler<i64>,
) -> Element {
    rsx! {
        section { class: "bg-white border border-gray-200 rounded-lg p-6 mb-8",
            h2 { class: "text-lg font-bold text-gray-900 mb-4", "Pending Issue Requests" }
            if pending_issues.is_empty() {
                p { class: "text-sm text-gray-500", "Nothing waiting for approval." }
            } else {
                div { class: "space-y-3",
                    for issue in pending_issues {
                        div {
                            key: "{issue.issue_id}",
                            class: "flex items-center justify-between gap-4 border-b border-gray-100 pb-3 last:border-0",
                            div { class: "min-w-0",
                                p { class: "font-medium text-gray-900 truncate",
                                    "{issue.book_title}"
                                }
                                p { class: "text-sm text-gray-500 truncate",
                                    "requested by {issue.user_name}"
                                }
                            }
                            Button {
                                variant: ButtonVariant::Success,
                                size: ButtonSize::Small,
                                onclick: {
                                    let id = issue.issue_id;
                                    move |_| on_approve_issue.call(id)
                                },
                                "Approve"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BookRequestsSection(
    book_requests: Vec<BookRequestItem>,
    on_fulfill_request: EventHandler<i64>,
    on_reject_request: EventHandler<i64>,
) -> Element {
    rsx! {
        section { class: "bg-white border border-gray-200 rounded-lg p-6",
            h2 { class: "text-lg font-bold text-gray-900 mb-4", "Book Requests" }
            if book_requests.is_empty() {
                p { class: "text-sm text-gray-500", "No open requests." }
            } else {
                div { class: "space-y-3",
                    for request in book_requests {
                        div {
                            key: "{request.request_id}",
                            class: "flex items-center justify-between gap-4 border-b border-gray-100 pb-3 last:border-0",
                            div { class: "min-w-0",
                                p { class: "font-medium text-gray-900 truncate",
                                    "{request.book_title}"
                                }
                                p { class: "text-sm text-gray-500 truncate",
                                    "by {request.author} · requested by {request.user_name}"
                                }
                            }
                            div { class: "flex gap-2",
                                Button {
                                    variant: ButtonVariant::Success,
                                    size: ButtonSize::Small,
                                    onclick: {
                                        let id = request.request_id;
                                        move |_| on_fulfill_request.call(id)
                                    },
                                    "Fulfill"
                                }
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    size: ButtonSize::Small,
                                    onclick: {
                                        let id = request.request_id;
                                        move |_| on_reject_request.call(id)
                                    },
                                    "Reject"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
