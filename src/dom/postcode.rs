//! Daum Postcode address widget adapter
//!
//! The widget is a page-level script exposing `daum.Postcode`. It is
//! resolved at click time so a late-loading script still works.
//!
//! Only the callback of the most recently opened widget is kept alive. A
//! widget closed without a pick never calls back, so its callback is
//! released when the next one opens.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlInputElement, Window};

use crate::config::{Messages, Selectors};
use crate::dom::elements::query;
use crate::error::{MyInfoError, Result};
use crate::models::AddressLookupResult;

type CompletionCallback = Closure<dyn FnMut(JsValue)>;

/// Fields the widget result is copied into
#[derive(Clone, Debug)]
struct AddressFields {
    window: Window,
    zipcode: Option<HtmlInputElement>,
    address: Option<HtmlInputElement>,
    detail: Option<HtmlElement>,
    /// Alert text for a payload that cannot be read
    failure_message: String,
}

impl AddressFields {
    fn apply(&self, result: &AddressLookupResult) {
        if let Some(zipcode) = &self.zipcode {
            zipcode.set_value(&result.zonecode);
        }
        if let Some(address) = &self.address {
            address.set_value(result.base_address());
        }
        if let Some(detail) = &self.detail {
            if let Err(e) = detail.focus() {
                log::warn!("could not focus detail address: {:?}", e);
            }
        }
    }

    fn complete(&self, data: JsValue) {
        match serde_wasm_bindgen::from_value::<AddressLookupResult>(data) {
            Ok(result) => {
                log::debug!("address selected, zonecode {}", result.zonecode);
                self.apply(&result);
            }
            Err(e) => {
                log::error!("unreadable address widget payload: {}", e);
                if let Err(e) = self.window.alert_with_message(&self.failure_message) {
                    log::error!("alert failed: {:?}", e);
                }
            }
        }
    }
}

#[derive(Clone)]
pub struct AddressTargets {
    fields: AddressFields,
    pending: Rc<RefCell<Option<CompletionCallback>>>,
}

impl AddressTargets {
    pub fn locate(
        window: Window,
        document: &Document,
        selectors: &Selectors,
        messages: &Messages,
    ) -> Result<Self> {
        let fields = AddressFields {
            window,
            zipcode: query(document, &selectors.zipcode_field)?
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok()),
            address: query(document, &selectors.address_field)?
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok()),
            detail: query(document, &selectors.detail_address_field)?
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            failure_message: messages.address_failed.clone(),
        };
        Ok(Self {
            fields,
            pending: Rc::new(RefCell::new(None)),
        })
    }

    /// Callback for a new widget; drops the one from the previous widget
    fn next_callback(&self) -> JsValue {
        let fields = self.fields.clone();
        let callback: CompletionCallback = Closure::wrap(
            Box::new(move |data: JsValue| fields.complete(data)) as Box<dyn FnMut(JsValue)>
        );
        let js = callback.as_ref().clone();
        if self.pending.borrow_mut().replace(callback).is_some() {
            log::debug!("released callback of an abandoned address widget");
        }
        js
    }
}

fn postcode_constructor(window: &Window) -> Option<Function> {
    let daum = Reflect::get(window, &JsValue::from_str("daum")).ok()?;
    if daum.is_undefined() || daum.is_null() {
        return None;
    }
    Reflect::get(&daum, &JsValue::from_str("Postcode"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn js_fault(context: &str, e: JsValue) -> MyInfoError {
    MyInfoError::Transport(format!("{}: {:?}", context, e))
}

/// Open the widget; its completion fills the address fields.
pub fn open_address_lookup(targets: &AddressTargets) -> Result<()> {
    let constructor =
        postcode_constructor(&targets.fields.window).ok_or(MyInfoError::WidgetUnavailable)?;

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("oncomplete"), &targets.next_callback())
        .map_err(|e| js_fault("address widget options", e))?;

    let widget = Reflect::construct(&constructor, &Array::of1(&options))
        .map_err(|e| js_fault("address widget construction", e))?;

    let open = Reflect::get(&widget, &JsValue::from_str("open"))
        .map_err(|e| js_fault("address widget open", e))?
        .dyn_into::<Function>()
        .map_err(|e| js_fault("address widget open", e))?;

    open.call0(&widget)
        .map_err(|e| js_fault("address widget open", e))?;
    Ok(())
}
