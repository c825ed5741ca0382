//! Banner details popup.
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)
//!
//! The store itself plays the model role; it is reached through the
//! context-provided [`crate::domain::banner::store::BannerStoreService`].

mod view;
mod view_model;

pub use view::BannerDetails;
pub use view_model::BannerDetailsViewModel;
