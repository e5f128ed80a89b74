//! Postal address lookup result
//!
//! Payload handed to the widget's `oncomplete` callback. Only the three
//! fields the profile form uses are read.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressLookupResult {
    /// Five-digit postal code
    pub zonecode: String,
    pub road_address: String,
    /// Parcel-style (lot number) address
    pub jibun_address: String,
}

impl AddressLookupResult {
    /// Road address when present, parcel address otherwise
    pub fn base_address(&self) -> &str {
        base_address(&self.road_address, &self.jibun_address)
    }
}

pub fn base_address<'a>(road: &'a str, jibun: &'a str) -> &'a str {
    if road.is_empty() {
        jibun
    } else {
        road
    }
}
