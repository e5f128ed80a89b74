//! Browser glue
//!
//! Binds the profile page controller to the live DOM.
//!
//! - `elements`: selector lookup and form-control wrappers
//! - `surface`: `PageSurface` over web-sys elements
//! - `http`: the genre POST
//! - `postcode`: the Daum Postcode widget adapter
//! - `bindings`: event listeners

pub mod bindings;
pub mod elements;
pub mod http;
pub mod postcode;
pub mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::config::PageConfig;
use crate::error::{MyInfoError, Result};
use crate::page::{MyInfoController, PageSurface};
use postcode::AddressTargets;
use surface::DomSurface;

pub type SharedController = Rc<RefCell<MyInfoController<DomSurface>>>;

/// A profile page with its listeners attached
#[derive(Clone)]
pub struct MountedPage {
    pub controller: SharedController,
    address_targets: AddressTargets,
}

impl MountedPage {
    /// Locate the page elements, build the controller and attach listeners.
    pub fn mount(config: PageConfig) -> Result<Self> {
        config.validate()?;

        let window =
            web_sys::window().ok_or_else(|| MyInfoError::MissingElement("window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| MyInfoError::MissingElement("document".to_string()))?;

        let surface = DomSurface::locate(window.clone(), &document, &config.selectors)?;
        let address_targets =
            AddressTargets::locate(window, &document, &config.selectors, &config.messages)?;
        let targets = bindings::ListenerTargets::from_surface(&surface);
        let initially_active = surface.active_genres();

        let controller = Rc::new(RefCell::new(MyInfoController::new(
            surface,
            config,
            initially_active,
        )));

        let page = Self {
            controller,
            address_targets,
        };
        bindings::attach(&page, targets);
        Ok(page)
    }

    /// `mount`, telling the user when the page could not be bound.
    ///
    /// Used when binding is deferred to `DOMContentLoaded`, where no caller
    /// is left to receive the error.
    pub fn mount_or_alert(config: PageConfig) -> Result<Self> {
        let message = config.messages.mount_failed.clone();
        MountedPage::mount(config).map_err(|e| {
            log::error!("profile page mount failed: {}", e);
            match web_sys::window().map(|w| w.alert_with_message(&message)) {
                Some(Ok(())) => {}
                Some(Err(alert_err)) => log::error!("alert failed: {:?}", alert_err),
                None => log::error!("no window to report the mount failure"),
            }
            e
        })
    }

    /// Two-step save: POST the genres, then submit the form on success.
    pub fn save(&self) {
        let body = match self.controller.borrow_mut().begin_save() {
            Ok(body) => body,
            Err(e) => {
                log::warn!("save ignored: {}", e);
                return;
            }
        };
        let endpoint = self.controller.borrow().config().genre_endpoint.clone();
        let controller = self.controller.clone();

        spawn_local(async move {
            let outcome = http::post_genres(&endpoint, body).await;
            if let Err(e) = controller.borrow_mut().finish_save(outcome) {
                log::debug!("save attempt ended without submission: {}", e);
            }
        });
    }

    /// Open the address widget, telling the user if it is not loaded.
    pub fn open_address_lookup(&self) -> Result<()> {
        let result = postcode::open_address_lookup(&self.address_targets);
        if let Err(e) = &result {
            log::error!("address lookup unavailable: {}", e);
            let mut controller = self.controller.borrow_mut();
            let message = match e {
                MyInfoError::WidgetUnavailable => {
                    controller.config().messages.widget_unavailable.clone()
                }
                other => other.to_string(),
            };
            controller.surface_mut().alert(&message);
        }
        result
    }
}
