//! The controller's view of the page
//!
//! Every DOM side effect goes through `PageSurface`. The browser
//! implementation lives in `crate::dom::surface`; tests use a recording mock.

use crate::error::Result;
use crate::models::GenreId;

pub trait PageSurface {
    /// Current values of the editable fields, in document order
    fn field_values(&self) -> Vec<String>;

    /// Write back values captured by `field_values`
    fn restore_field_values(&mut self, values: &[String]);

    /// Toggle `disabled` on every editable field
    fn set_fields_enabled(&mut self, enabled: bool);

    fn set_fields_background(&mut self, background: &str);

    fn set_address_trigger_enabled(&mut self, enabled: bool);

    /// `None` hides the save control, `Some(display)` shows it
    fn set_save_control_display(&mut self, display: Option<&str>);

    fn set_save_control_enabled(&mut self, enabled: bool);

    fn set_edit_label(&mut self, label: &str);

    /// Mark every genre tag editable or read-only
    fn set_genres_editable(&mut self, editable: bool);

    fn set_genre_active(&mut self, id: GenreId, active: bool);

    /// Blocking user-facing message
    fn alert(&mut self, message: &str);

    /// Native, full-page form submission
    fn submit_form(&mut self) -> Result<()>;
}
