//! Browser implementation of `PageSurface`

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement, Window};

use crate::config::Selectors;
use crate::dom::elements::{query, query_all, FormControl, GenreCard};
use crate::error::{MyInfoError, Result};
use crate::models::GenreId;
use crate::page::PageSurface;

pub struct DomSurface {
    window: Window,
    pub(crate) form: HtmlFormElement,
    pub(crate) fields: Vec<FormControl>,
    pub(crate) edit_button: Option<HtmlElement>,
    pub(crate) save_button: Option<FormControl>,
    pub(crate) address_button: Option<FormControl>,
    pub(crate) genre_cards: Vec<GenreCard>,
}

impl DomSurface {
    /// Resolve every element of the profile page.
    ///
    /// Only the form is required; a missing control leaves its feature inert.
    pub fn locate(window: Window, document: &Document, selectors: &Selectors) -> Result<Self> {
        let form = query(document, &selectors.form)?
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
            .ok_or_else(|| MyInfoError::MissingElement(selectors.form.clone()))?;

        let fields: Vec<FormControl> = query_all(document, &selectors.editable_fields)?
            .into_iter()
            .filter_map(FormControl::from_element)
            .collect();

        let edit_button = query(document, &selectors.edit_button)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let save_button =
            query(document, &selectors.save_button)?.and_then(FormControl::from_element);
        let address_button =
            query(document, &selectors.address_button)?.and_then(FormControl::from_element);

        let genre_cards: Vec<GenreCard> = query_all(document, &selectors.genre_cards)?
            .into_iter()
            .filter_map(GenreCard::from_element)
            .collect();

        for (name, missing) in [
            (&selectors.edit_button, edit_button.is_none()),
            (&selectors.save_button, save_button.is_none()),
            (&selectors.address_button, address_button.is_none()),
        ] {
            if missing {
                log::warn!("{} not found, its control is inactive", name);
            }
        }

        log::debug!(
            "located {} editable fields and {} genre tags",
            fields.len(),
            genre_cards.len()
        );

        Ok(Self {
            window,
            form,
            fields,
            edit_button,
            save_button,
            address_button,
            genre_cards,
        })
    }

    /// Ids of the tags carrying the active class right now
    pub fn active_genres(&self) -> Vec<GenreId> {
        self.genre_cards
            .iter()
            .filter(|card| card.is_active())
            .map(|card| card.id)
            .collect()
    }
}

impl PageSurface for DomSurface {
    fn field_values(&self) -> Vec<String> {
        self.fields.iter().map(FormControl::value).collect()
    }

    fn restore_field_values(&mut self, values: &[String]) {
        for (field, value) in self.fields.iter().zip(values) {
            field.set_value(value);
        }
    }

    fn set_fields_enabled(&mut self, enabled: bool) {
        for field in &self.fields {
            field.set_disabled(!enabled);
        }
    }

    fn set_fields_background(&mut self, background: &str) {
        for field in &self.fields {
            if let Err(e) = field.style().set_property("background", background) {
                log::warn!("could not set field background: {:?}", e);
            }
        }
    }

    fn set_address_trigger_enabled(&mut self, enabled: bool) {
        if let Some(button) = &self.address_button {
            button.set_disabled(!enabled);
        }
    }

    fn set_save_control_display(&mut self, display: Option<&str>) {
        if let Some(button) = &self.save_button {
            if let Err(e) = button.style().set_property("display", display.unwrap_or("none")) {
                log::warn!("could not set save control display: {:?}", e);
            }
        }
    }

    fn set_save_control_enabled(&mut self, enabled: bool) {
        if let Some(button) = &self.save_button {
            button.set_disabled(!enabled);
        }
    }

    fn set_edit_label(&mut self, label: &str) {
        if let Some(button) = &self.edit_button {
            button.set_inner_text(label);
        }
    }

    fn set_genres_editable(&mut self, editable: bool) {
        for card in &self.genre_cards {
            card.set_editable(editable);
        }
    }

    fn set_genre_active(&mut self, id: GenreId, active: bool) {
        for card in self.genre_cards.iter().filter(|card| card.id == id) {
            card.set_active(active);
        }
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("alert failed: {:?}", e);
        }
    }

    fn submit_form(&mut self) -> Result<()> {
        self.form
            .submit()
            .map_err(|e| MyInfoError::Submission(format!("{:?}", e)))
    }
}
