use crate::api;
use crate::toast::Toaster;
use crate::session;
use dioxus::prelude::*;
use shelf_common::top_genres;
use shelf_ui::display_types::{BookActivity, UserSession, UserStats};
use shelf_ui::ProfileView;

const GENRE_OPTION_LIMIT: usize = 20;
const ACTIVITY_LIMIT: usize = 5;

#[component]
pub fn Profile() -> Element {
    let mut session_signal: Signal<Option<UserSession>> = use_context();
    let Some(user) = session_signal() else {
        return rsx! {};
    };
    let user_id = user.user_id;

    let mut toaster: Toaster = use_context();
    let mut stats = use_signal(UserStats::default);
    let mut favorite_genres = use_signal(Vec::<String>::new);
    let mut all_genres = use_signal(Vec::<String>::new);
    let mut recent_activity = use_signal(Vec::<(String, BookActivity)>::new);

    use_future(move || async move {
        match api::fetch_user_stats(user_id).await {
            Ok(s) => stats.set(s),
            Err(e) => tracing::warn!("stats fetch failed: {e}"),
        }
        match api::fetch_preferences(user_id).await {
            Ok(prefs) => favorite_genres.set(prefs),
            Err(e) => tracing::warn!("preferences fetch failed: {e}"),
        }
        match api::fetch_books().await {
            Ok(catalog) => {
                all_genres.set(top_genres(&catalog, GENRE_OPTION_LIMIT));
                match api::fetch_user_ratings(user_id).await {
                    Ok(ratings) => {
                        let mut rows: Vec<(String, BookActivity)> = ratings
                            .into_iter()
                            .filter_map(|(book_id, activity)| {
                                catalog
                                    .iter()
                                    .find(|b| b.id == book_id)
                                    .map(|b| (b.title.clone(), activity))
                            })
                            .collect();
                        rows.sort_by(|a, b| {
                            b.1.rating.total_cmp(&a.1.rating).then_with(|| a.0.cmp(&b.0))
                        });
                        rows.truncate(ACTIVITY_LIMIT);
                        recent_activity.set(rows);
                    }
                    Err(e) => tracing::warn!("ratings fetch failed: {e}"),
                }
            }
            Err(e) => tracing::warn!("catalog fetch failed: {e}"),
        }
    });

    rsx! {
        ProfileView {
            user: user.clone(),
            stats: stats(),
            favorite_genres: favorite_genres(),
            all_genres: all_genres(),
            recent_activity: recent_activity(),
            on_rename: move |name: String| {
                spawn(async move {
                    match api::rename_user(user_id, &name).await {
                        Ok(()) => {
                            toaster.success("Name updated!");
                            let mut updated = session_signal.peek().clone();
                            if let Some(user) = updated.as_mut() {
                                user.name = name.clone();
                                session::save(user);
                            }
                            session_signal.set(updated);
                        }
                        Err(e) => toaster.error(e),
                    }
                });
            },
            on_save_genres: move |genres: Vec<String>| {
                favorite_genres.set(genres.clone());
                spawn(async move {
                    match api::save_preferences(user_id, &genres).await {
                        Ok(()) => toaster.success("Preferences saved!"),
                        Err(e) => toaster.error(e),
                    }
                });
            },
        }
    }
}
