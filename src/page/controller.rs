//! Profile page controller
//!
//! Owns edit mode, the genre selection and the save state machine, and
//! drives the page through a `PageSurface`. Nothing in here awaits: the
//! browser glue runs the genre request and hands the outcome back through
//! `finish_save`.

use crate::config::PageConfig;
use crate::error::{MyInfoError, Result};
use crate::models::{GenreId, GenreSelection, SaveCoordinator, SaveState, SaveStep, ToggleOutcome};
use crate::page::surface::PageSurface;

/// Values captured when edit mode is entered, restored on cancel
#[derive(Clone, Debug)]
struct EditSnapshot {
    field_values: Vec<String>,
    selection: GenreSelection,
}

pub struct MyInfoController<S: PageSurface> {
    surface: S,
    config: PageConfig,
    editing: bool,
    selection: GenreSelection,
    save: SaveCoordinator,
    snapshot: Option<EditSnapshot>,
}

impl<S: PageSurface> MyInfoController<S> {
    /// Bind to a page whose tags in `initially_active` carry the `active` class.
    ///
    /// The page is put in its read-only state. Active tags beyond the cap
    /// lose their `active` class.
    pub fn new<I>(surface: S, config: PageConfig, initially_active: I) -> Self
    where
        I: IntoIterator<Item = GenreId>,
    {
        let (selection, overflow) =
            GenreSelection::from_initial(initially_active, config.max_genres);

        let mut controller = Self {
            surface,
            config,
            editing: false,
            selection,
            save: SaveCoordinator::new(),
            snapshot: None,
        };

        if !overflow.is_empty() {
            log::warn!(
                "{} genre tags marked active beyond the limit of {}, clearing: {:?}",
                overflow.len(),
                controller.config.max_genres,
                overflow
            );
            for id in overflow {
                controller.surface.set_genre_active(id, false);
            }
        }

        controller.apply_edit_view();
        log::info!(
            "profile page bound with {} selected genres",
            controller.selection.len()
        );
        controller
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn selection(&self) -> &GenreSelection {
        &self.selection
    }

    pub fn save_state(&self) -> SaveState {
        self.save.state()
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Flip edit mode. Returns the new mode.
    ///
    /// Leaving edit mode is a cancel: field values and the genre selection
    /// go back to what they were when editing started.
    pub fn toggle_edit_mode(&mut self) -> Result<bool> {
        if self.save.state().is_busy() {
            log::warn!("edit toggle ignored while save is {}", self.save.state().as_str());
            return Err(MyInfoError::SaveInFlight);
        }

        if self.editing {
            self.restore_snapshot();
        } else {
            self.snapshot = Some(EditSnapshot {
                field_values: self.surface.field_values(),
                selection: self.selection.clone(),
            });
        }

        self.editing = !self.editing;
        self.apply_edit_view();
        log::debug!("edit mode {}", if self.editing { "on" } else { "off" });
        Ok(self.editing)
    }

    pub fn toggle_genre(&mut self, id: GenreId) -> ToggleOutcome {
        if !self.editing {
            log::debug!("genre {} click ignored outside edit mode", id);
            return ToggleOutcome::Ignored;
        }

        let outcome = self.selection.toggle(id);
        match outcome {
            ToggleOutcome::Selected => self.surface.set_genre_active(id, true),
            ToggleOutcome::Deselected => self.surface.set_genre_active(id, false),
            ToggleOutcome::LimitReached => {
                log::debug!("genre {} rejected, {} already selected", id, self.selection.len());
                let message = self.config.messages.genre_limit.clone();
                self.surface.alert(&message);
            }
            ToggleOutcome::Ignored => {}
        }
        outcome
    }

    /// Start a save. Returns the JSON body to POST.
    ///
    /// The save control stays disabled until the request settles.
    pub fn begin_save(&mut self) -> Result<String> {
        let body = self.selection.to_json()?;
        self.save.begin(self.editing)?;
        self.surface.set_save_control_enabled(false);
        log::info!("saving genres {}", body);
        Ok(body)
    }

    /// Settle the genre request: submit the form on success, report otherwise.
    pub fn finish_save(&mut self, outcome: Result<()>) -> Result<()> {
        match self.save.complete(outcome) {
            SaveStep::Submit => {
                self.release_for_submission();
                if let Err(e) = self.surface.submit_form() {
                    log::error!("{}", e);
                    self.save.submission_failed();
                    self.report_save_failure();
                    return Err(e);
                }
                // Stays usable when the submission does not navigate
                self.surface.set_save_control_enabled(true);
                log::info!("genres saved, profile form submitted");
                Ok(())
            }
            SaveStep::ReportFailure(e) => {
                log::error!("genre save failed: {}", e);
                self.report_save_failure();
                Err(e)
            }
        }
    }

    /// Enable every field that must travel with the form.
    ///
    /// Disabled controls are left out of submitted form data, so this runs
    /// before any submission, whichever path triggers it.
    pub fn release_for_submission(&mut self) {
        self.surface.set_fields_enabled(true);
        self.surface.set_address_trigger_enabled(true);
    }

    fn report_save_failure(&mut self) {
        let message = self.config.messages.save_failed.clone();
        self.surface.alert(&message);
        self.surface.set_save_control_enabled(true);
    }

    fn restore_snapshot(&mut self) {
        let Some(snapshot) = self.snapshot.take() else {
            return;
        };

        self.surface.restore_field_values(&snapshot.field_values);

        for &id in self.selection.ids() {
            if !snapshot.selection.contains(id) {
                self.surface.set_genre_active(id, false);
            }
        }
        for &id in snapshot.selection.ids() {
            if !self.selection.contains(id) {
                self.surface.set_genre_active(id, true);
            }
        }
        self.selection = snapshot.selection;
    }

    fn apply_edit_view(&mut self) {
        let editing = self.editing;
        let background = if editing {
            self.config.editable_background.clone()
        } else {
            self.config.readonly_background.clone()
        };
        let label = if editing {
            self.config.messages.cancel_label.clone()
        } else {
            self.config.messages.edit_label.clone()
        };

        self.surface.set_fields_enabled(editing);
        self.surface.set_fields_background(&background);
        self.surface.set_address_trigger_enabled(editing);
        if editing {
            let display = self.config.save_button_display.clone();
            self.surface.set_save_control_display(Some(&display));
            self.surface.set_save_control_enabled(true);
        } else {
            self.surface.set_save_control_display(None);
        }
        self.surface.set_genres_editable(editing);
        self.surface.set_edit_label(&label);
    }
}
