mod admin;
mod browse;
mod chat;
mod home;
mod layout;
mod login;
mod my_library;
mod profile;
mod request_book;

pub use admin::Admin;
pub use browse::Browse;
pub use chat::Chat;
pub use home::Home;
pub use layout::AppLayout;
pub use login::Login;
pub use my_library::MyLibrary;
pub use profile::Profile;
pub use request_book::RequestBook;
