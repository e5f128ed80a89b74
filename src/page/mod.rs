//! Profile page behaviour, independent of the browser
//!
//! - `surface`: the trait every DOM side effect goes through
//! - `controller`: edit mode, genre selection and the two-step save

pub mod controller;
pub mod surface;

pub use controller::MyInfoController;
pub use surface::PageSurface;
