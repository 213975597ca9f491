//! Domain mutation helpers.
//!
//! Each rule transforms one record in response to one event. Rules that may be repeated
//! without effect report [`Outcome::Unchanged`] instead of failing.

pub mod approval;
pub mod class_code;
pub mod economy;
pub mod registration;
pub mod tracking;

use serde::{Deserialize, Serialize};

/// Whether a rule changed the record it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Applied,
    Unchanged,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}
