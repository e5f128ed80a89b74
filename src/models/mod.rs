//! Data models for the profile page
//!
//! Plain Rust state with no DOM access, so it can be tested natively.

pub mod address;
pub mod genre;
pub mod save_state;

// Re-export commonly used types
pub use address::AddressLookupResult;
pub use genre::{GenreId, GenreSelection, ToggleOutcome, MAX_SELECTED_GENRES};
pub use save_state::{SaveCoordinator, SaveState, SaveStep};
