//! Element lookup and form-control wrappers

use wasm_bindgen::JsCast;
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

use crate::error::{MyInfoError, Result};
use crate::models::GenreId;

pub const GENRE_ID_ATTR: &str = "data-genre-id";
pub const EDITABLE_ATTR: &str = "data-editable";
pub const ACTIVE_CLASS: &str = "active";
pub const DISABLED_CLASS: &str = "disabled";

/// First element matching `selector`, if any
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|e| MyInfoError::InvalidConfig(format!("bad selector {:?}: {:?}", selector, e)))
}

/// Every element matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| MyInfoError::InvalidConfig(format!("bad selector {:?}: {:?}", selector, e)))?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// A control whose `disabled` and `value` the controller manages
#[derive(Clone, Debug)]
pub enum FormControl {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
    Button(HtmlButtonElement),
    /// Anything else: disabled via the attribute, no value
    Other(HtmlElement),
}

impl FormControl {
    pub fn from_element(element: Element) -> Option<Self> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(FormControl::Input(input)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Some(FormControl::Select(select)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => return Some(FormControl::TextArea(area)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlButtonElement>() {
            Ok(button) => return Some(FormControl::Button(button)),
            Err(element) => element,
        };
        element.dyn_into::<HtmlElement>().ok().map(FormControl::Other)
    }

    pub fn html(&self) -> &HtmlElement {
        match self {
            FormControl::Input(el) => el.unchecked_ref(),
            FormControl::Select(el) => el.unchecked_ref(),
            FormControl::TextArea(el) => el.unchecked_ref(),
            FormControl::Button(el) => el.unchecked_ref(),
            FormControl::Other(el) => el,
        }
    }

    pub fn value(&self) -> String {
        match self {
            FormControl::Input(el) => el.value(),
            FormControl::Select(el) => el.value(),
            FormControl::TextArea(el) => el.value(),
            FormControl::Button(el) => el.value(),
            FormControl::Other(_) => String::new(),
        }
    }

    pub fn set_value(&self, value: &str) {
        match self {
            FormControl::Input(el) => el.set_value(value),
            FormControl::Select(el) => el.set_value(value),
            FormControl::TextArea(el) => el.set_value(value),
            FormControl::Button(el) => el.set_value(value),
            FormControl::Other(_) => {}
        }
    }

    pub fn set_disabled(&self, disabled: bool) {
        match self {
            FormControl::Input(el) => el.set_disabled(disabled),
            FormControl::Select(el) => el.set_disabled(disabled),
            FormControl::TextArea(el) => el.set_disabled(disabled),
            FormControl::Button(el) => el.set_disabled(disabled),
            FormControl::Other(el) => {
                let result = if disabled {
                    el.set_attribute("disabled", "")
                } else {
                    el.remove_attribute("disabled")
                };
                if let Err(e) = result {
                    log::warn!("could not toggle disabled attribute: {:?}", e);
                }
            }
        }
    }

    pub fn style(&self) -> CssStyleDeclaration {
        self.html().style()
    }
}

/// A clickable genre tag
#[derive(Clone, Debug)]
pub struct GenreCard {
    pub id: GenreId,
    pub element: Element,
}

impl GenreCard {
    /// `None` when the tag has no usable numeric id
    pub fn from_element(element: Element) -> Option<Self> {
        let raw = element.get_attribute(GENRE_ID_ATTR)?;
        match raw.parse::<GenreId>() {
            Ok(id) => Some(Self { id, element }),
            Err(e) => {
                log::warn!("skipping genre tag with {}={:?}: {}", GENRE_ID_ATTR, raw, e);
                None
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.element.class_list().contains(ACTIVE_CLASS)
    }

    pub fn set_active(&self, active: bool) {
        if let Err(e) = self.element.class_list().toggle_with_force(ACTIVE_CLASS, active) {
            log::warn!("could not toggle class on genre {}: {:?}", self.id, e);
        }
    }

    pub fn set_editable(&self, editable: bool) {
        if let Err(e) = self
            .element
            .class_list()
            .toggle_with_force(DISABLED_CLASS, !editable)
        {
            log::warn!("could not toggle class on genre {}: {:?}", self.id, e);
        }
        let flag = if editable { "true" } else { "false" };
        if let Err(e) = self.element.set_attribute(EDITABLE_ATTR, flag) {
            log::warn!("could not set {} on genre {}: {:?}", EDITABLE_ATTR, self.id, e);
        }
    }
}
