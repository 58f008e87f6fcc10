//! Shared UI components

pub mod admin;
pub mod book_card;
pub mod book_modal;
pub mod book_shelf_row;
pub mod browse;
pub mod button;
pub mod chat;
pub mod genre_onboarding;
pub mod helpers;
pub mod home;
pub mod icons;
pub mod login;
pub mod modal;
pub mod my_library;
pub mod navbar;
pub mod profile;
pub mod request_book;
pub mod select;
pub mod star_rating;
pub mod text_input;
pub mod toast;

pub use admin::{AdminView, NewBookInput};
pub use book_card::BookCard;
pub use book_modal::{BookModalView, RatingSubmission};
pub use book_shelf_row::BookShelfRow;
pub use browse::BrowseView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use chat::ChatView;
pub use genre_onboarding::GenreOnboardingView;
pub use helpers::{ConfirmDialogView, ErrorDisplay, LoadingSpinner, PageContainer};
pub use home::HomeView;
pub use icons::{
    AlertTriangleIcon, BellIcon, BookOpenIcon, BookmarkIcon, CheckIcon, ChevronDownIcon,
    ImageIcon, LogOutIcon, PlusIcon, SearchIcon, SendIcon, SparklesIcon, StarIcon, TrashIcon,
    UserIcon, XIcon,
};
pub use login::{LoginSubmission, LoginView, RegisterSubmission};
pub use modal::Modal;
pub use my_library::MyLibraryView;
pub use navbar::{NavBarView, NavSection};
pub use profile::ProfileView;
pub use request_book::{BookRequestInput, RequestBookView};
pub use select::{Select, SelectOption};
pub use star_rating::{StarRating, StarRatingInput};
pub use text_input::{TextArea, TextInput};
pub use toast::{Toast, ToastKind};
