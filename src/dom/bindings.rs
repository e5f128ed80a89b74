//! Event listeners for the profile page
//!
//! Listeners live as long as the page, so they are forgotten after binding.
//! The form gets exactly one `submit` listener; the save path calls the same
//! `release_for_submission` step directly because `form.submit()` does not
//! dispatch `submit`.

use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{HtmlElement, HtmlFormElement};

use crate::dom::elements::{FormControl, GenreCard};
use crate::dom::surface::DomSurface;
use crate::dom::MountedPage;

/// Element handles the listeners attach to
pub struct ListenerTargets {
    form: HtmlFormElement,
    edit_button: Option<HtmlElement>,
    save_button: Option<FormControl>,
    address_button: Option<FormControl>,
    genre_cards: Vec<GenreCard>,
}

impl ListenerTargets {
    pub fn from_surface(surface: &DomSurface) -> Self {
        Self {
            form: surface.form.clone(),
            edit_button: surface.edit_button.clone(),
            save_button: surface.save_button.clone(),
            address_button: surface.address_button.clone(),
            genre_cards: surface.genre_cards.clone(),
        }
    }
}

pub fn attach(page: &MountedPage, targets: ListenerTargets) {
    let prevent_default = EventListenerOptions::enable_prevent_default();

    {
        let page = page.clone();
        EventListener::new(&targets.form, "submit", move |_event| {
            page.controller.borrow_mut().release_for_submission();
        })
        .forget();
    }

    if let Some(edit_button) = &targets.edit_button {
        let page = page.clone();
        EventListener::new(edit_button, "click", move |_event| {
            if let Err(e) = page.controller.borrow_mut().toggle_edit_mode() {
                log::warn!("edit toggle refused: {}", e);
            }
        })
        .forget();
    }

    if let Some(save_button) = &targets.save_button {
        let page = page.clone();
        EventListener::new_with_options(
            save_button.html(),
            "click",
            prevent_default,
            move |event| {
                event.prevent_default();
                page.save();
            },
        )
        .forget();
    }

    if let Some(address_button) = &targets.address_button {
        let page = page.clone();
        EventListener::new_with_options(
            address_button.html(),
            "click",
            prevent_default,
            move |event| {
                event.prevent_default();
                // Failures are already shown to the user
                let _ = page.open_address_lookup();
            },
        )
        .forget();
    }

    for card in &targets.genre_cards {
        let page = page.clone();
        let id = card.id;
        EventListener::new(&card.element, "click", move |_event| {
            page.controller.borrow_mut().toggle_genre(id);
        })
        .forget();
    }

    log::debug!(
        "listeners attached to {} genre tags",
        targets.genre_cards.len()
    );
}
