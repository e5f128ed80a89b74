//! Profile page WASM API
//!
//! JavaScript-facing entry points.
//!
//! - `helpers`: serialization and error conversion shared by the exports
//! - `handle`: `mountMyInfo` and the `MyInfoHandle` it returns

pub mod handle;
pub mod helpers;

pub use handle::{base_address_for, mount_my_info, mount_my_info_with_config, MyInfoHandle};
