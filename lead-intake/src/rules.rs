//! Conditional field rules
//!
//! Which optional fields are shown (and therefore required) depends only on
//! the representative type and whether the selected city is outside the
//! home country. Both the controller and the validator read this table.

use crate::types::{FormState, RepresentativeType};

/// Stored country value when the city is inside the home country
pub const HOME_COUNTRY: &str = "السعودية";

/// City selector value meaning "located outside the home country"
pub const OUTSIDE_HOME_COUNTRY: &str = "outside_ksa";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Not shown; any stale value is cleared and never submitted
    Hidden,
    /// Shown and must be non-empty after trimming
    Required,
}

impl Presence {
    pub fn is_required(self) -> bool {
        matches!(self, Presence::Required)
    }
}

/// Visibility of the conditional fields for one selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub medical_specialty: Presence,
    pub brand_field: Presence,
    pub country: Presence,
}

impl FieldRules {
    pub fn for_selection(representative_type: Option<RepresentativeType>, city: &str) -> Self {
        use Presence::*;

        let (medical_specialty, brand_field) = match representative_type {
            Some(RepresentativeType::Doctor | RepresentativeType::Clinic) => (Required, Hidden),
            Some(RepresentativeType::Other) => (Hidden, Required),
            Some(RepresentativeType::MedicalCenter) | None => (Hidden, Hidden),
        };

        let country = if is_outside_home_country(city) {
            Required
        } else {
            Hidden
        };

        Self {
            medical_specialty,
            brand_field,
            country,
        }
    }

    pub fn of(state: &FormState) -> Self {
        Self::for_selection(state.representative_type, &state.city)
    }

    /// Country to store: the typed value when abroad, else the home country
    pub fn resolve_country<'a>(&self, state: &'a FormState) -> &'a str {
        match self.country {
            Presence::Required => &state.country,
            Presence::Hidden => HOME_COUNTRY,
        }
    }
}

pub fn is_outside_home_country(city: &str) -> bool {
    city == OUTSIDE_HOME_COUNTRY
}
