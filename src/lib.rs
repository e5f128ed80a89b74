//! Member Profile Page WASM Module
//!
//! Controller for the "my info" page: edit mode, the capped genre tag
//! selection, the two-step save (genre POST, then native form submission)
//! and the postal address widget.

pub mod api;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod page;

// Re-export commonly used types
pub use config::PageConfig;
pub use error::MyInfoError;
pub use models::{AddressLookupResult, GenreId, GenreSelection, SaveState, ToggleOutcome};
pub use page::{MyInfoController, PageSurface};

use wasm_bindgen::prelude::*;

// Runs when the module is instantiated; binding waits for `mountMyInfo`.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
        }
    }

    log::info!("Profile page WASM module initialized");
}
