//! shelf-ui - Shared UI types and components for Shelf
//!
//! Contains display types, stores, and pure view components. Views never
//! fetch data or touch the router; everything arrives as props and leaves
//! through `EventHandler` callbacks, so the app shell owns all wiring.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
