//! View state of the storefront: a single record changed only by [`reduce`].

pub mod action;
pub mod controller;
pub mod debounce;
pub mod input;
pub mod reducer;
pub mod store;
pub mod view_state;

pub use action::Action;
pub use controller::{ControllerSettings, FavoriteOutcome, ViewController};
pub use debounce::{Debounce, DebounceTicket};
pub use reducer::reduce;
pub use store::ViewStore;
pub use view_state::{CalcResults, CatalogFilter, Page, Remote, SearchMode, ViewState};
