//! Store types for UI state management
//!
//! One store per view, each deriving `Store` for fine-grained reactivity via
//! lensing. The app shell owns the instances; views receive `ReadStore`s.

pub mod admin;
pub mod catalog;
pub mod chat;
pub mod home;
pub mod notifications;
pub mod shelf;

pub use admin::*;
pub use catalog::*;
pub use chat::*;
pub use home::*;
pub use notifications::*;
pub use shelf::*;
