//! Results of the postal-code lookup widget.

use serde::{Deserialize, Serialize};

use crate::form::EntityFormBinder;
use crate::model::{ADDRESS_FIELD, ADDRESS_MORE_FIELD, ZIP_FIELD};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressType {
    /// Road-name address.
    #[serde(rename = "R", alias = "road")]
    Road,
    /// Lot-number address.
    #[serde(rename = "J", alias = "jibun")]
    Jibun,
}

/// Selection payload as the widget reports it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSelection {
    pub zonecode: String,

    #[serde(default)]
    pub road_address: String,

    #[serde(default)]
    pub jibun_address: String,

    #[serde(default)]
    pub bname: String,

    #[serde(default)]
    pub building_name: String,

    pub user_selected_type: AddressType,
}

impl AddressSelection {
    /// Road addresses get `(district, building)` appended from whichever parts are present.
    pub fn full_address(&self) -> String {
        match self.user_selected_type {
            AddressType::Jibun => self.jibun_address.clone(),
            AddressType::Road => {
                let extra = [self.bname.as_str(), self.building_name.as_str()]
                    .into_iter()
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ");
                if extra.is_empty() {
                    self.road_address.clone()
                } else {
                    format!("{} ({})", self.road_address, extra)
                }
            }
        }
    }

    /// Fills postal code and address, and clears the detail line for re-entry.
    pub fn apply_to(&self, binder: &mut EntityFormBinder) {
        binder.set_field(ZIP_FIELD, self.zonecode.clone());
        binder.set_field(ADDRESS_FIELD, self.full_address());
        binder.set_field(ADDRESS_MORE_FIELD, "");
    }
}

#[cfg(test)]
#[path = "tests/address_tests.rs"]
mod tests;
