//! Mounting and the page handle
//!
//! `mountMyInfo` binds immediately when the document is parsed, otherwise on
//! `DOMContentLoaded`. The returned handle lets page scripts and browser
//! tests inspect and drive the controller.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize, to_js_error};
use crate::config::PageConfig;
use crate::dom::MountedPage;
use crate::error::MyInfoError;
use crate::models::{address, GenreId};

type PageSlot = Rc<RefCell<Option<MountedPage>>>;

#[wasm_bindgen]
pub struct MyInfoHandle {
    page: PageSlot,
}


fn mount_when_ready(config: PageConfig) -> Result<MyInfoHandle, JsValue> {
    config.validate().map_err(to_js_error)?;

    let slot: PageSlot = Rc::new(RefCell::new(None));
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| to_js_error(MyInfoError::MissingElement("document".to_string())))?;

    if document.ready_state() == "loading" {
        log::debug!("document still loading, binding on DOMContentLoaded");
        let pending = slot.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_event| {
            // Failures are logged and shown to the user by `mount_or_alert`
            if let Ok(page) = MountedPage::mount_or_alert(config) {
                *pending.borrow_mut() = Some(page);
            }
        })
        .forget();
    } else {
        let page = MountedPage::mount(config).map_err(to_js_error)?;
        *slot.borrow_mut() = Some(page);
    }

    Ok(MyInfoHandle { page: slot })
}

/// Bind the profile page with the default selectors and endpoint
#[wasm_bindgen(js_name = mountMyInfo)]
pub fn mount_my_info() -> Result<MyInfoHandle, JsValue> {
    mount_when_ready(PageConfig::default())
}

/// Bind the profile page with a (partial) configuration object
#[wasm_bindgen(js_name = mountMyInfoWithConfig)]
pub fn mount_my_info_with_config(config_js: JsValue) -> Result<MyInfoHandle, JsValue> {
    let config: PageConfig = if config_js.is_undefined() || config_js.is_null() {
        PageConfig::default()
    } else {
        deserialize(config_js, "Invalid page configuration")?
    };
    mount_when_ready(config)
}

/// Road address when present, parcel address otherwise
#[wasm_bindgen(js_name = baseAddressFor)]
pub fn base_address_for(road_address: &str, jibun_address: &str) -> String {
    address::base_address(road_address, jibun_address).to_string()
}

impl MyInfoHandle {
    fn with_page<T>(&self, f: impl FnOnce(&MountedPage) -> T) -> Result<T, JsValue> {
        let slot = self.page.borrow();
        let page = slot
            .as_ref()
            .ok_or_else(|| to_js_error(MyInfoError::NotMounted))?;
        Ok(f(page))
    }
}

#[wasm_bindgen]
impl MyInfoHandle {
    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.page.borrow().is_some()
    }

    #[wasm_bindgen(js_name = isEditing)]
    pub fn is_editing(&self) -> bool {
        self.with_page(|page| page.controller.borrow().is_editing())
            .unwrap_or(false)
    }

    /// Selected genre ids as a JS array, in selection order
    #[wasm_bindgen(js_name = selectedGenres)]
    pub fn selected_genres(&self) -> Result<JsValue, JsValue> {
        let ids: Vec<GenreId> =
            self.with_page(|page| page.controller.borrow().selection().ids().to_vec())?;
        serialize(&ids, "Failed to serialize genre selection")
    }

    /// `idle`, `saving`, `submitting` or `failed`
    #[wasm_bindgen(js_name = saveState)]
    pub fn save_state(&self) -> Result<String, JsValue> {
        self.with_page(|page| page.controller.borrow().save_state().as_str().to_string())
    }

    /// Flip edit mode; returns the new mode
    #[wasm_bindgen(js_name = toggleEditMode)]
    pub fn toggle_edit_mode(&self) -> Result<bool, JsValue> {
        self.with_page(|page| page.controller.borrow_mut().toggle_edit_mode())?
            .map_err(to_js_error)
    }

    /// Returns `selected`, `deselected`, `limitReached` or `ignored`
    #[wasm_bindgen(js_name = toggleGenre)]
    pub fn toggle_genre(&self, genre_id: u32) -> Result<String, JsValue> {
        self.with_page(|page| {
            page.controller
                .borrow_mut()
                .toggle_genre(GenreId(genre_id))
                .as_str()
                .to_string()
        })
    }

    /// Same as clicking the save control
    pub fn save(&self) -> Result<(), JsValue> {
        self.with_page(|page| page.save())
    }

    #[wasm_bindgen(js_name = openAddressLookup)]
    pub fn open_address_lookup(&self) -> Result<(), JsValue> {
        self.with_page(|page| page.open_address_lookup())?
            .map_err(JsValue::from)
    }
}
