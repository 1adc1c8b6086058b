//! Normalization of the form state into the store's row shape

use crate::error::RecordError;
use crate::rules::FieldRules;
use crate::types::{FormState, SubmissionRecord};

/// Build the row to insert.
///
/// Required columns are copied as entered. The phone number is the dial code
/// and local number concatenated with no separator. Optional columns are set
/// only when non-empty; conditional ones additionally only when the current
/// selection shows them.
pub fn build_record(state: &FormState) -> Result<SubmissionRecord, RecordError> {
    let representative_type = state
        .representative_type
        .ok_or(RecordError::MissingRepresentativeType)?;
    let rules = FieldRules::of(state);

    Ok(SubmissionRecord {
        first_name: state.first_name.clone(),
        last_name: state.last_name.clone(),
        whatsapp: format!("{}{}", state.country_code, state.whatsapp),
        email: state.email.clone(),
        brand_name: state.brand_name.clone(),
        representative_type,
        city: state.city.clone(),
        country: rules.resolve_country(state).to_string(),
        medical_specialty: rules
            .medical_specialty
            .is_required()
            .then(|| non_empty(&state.medical_specialty))
            .flatten(),
        brand_field: rules
            .brand_field
            .is_required()
            .then(|| non_empty(&state.brand_field))
            .flatten(),
        website: non_empty(&state.website),
        instagram: non_empty(&state.instagram),
        youtube: non_empty(&state.youtube),
        tiktok: non_empty(&state.tiktok),
        snapchat: non_empty(&state.snapchat),
        message_to_management: non_empty(&state.message_to_management),
        notes: non_empty(&state.notes),
    })
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{HOME_COUNTRY, OUTSIDE_HOME_COUNTRY};
    use crate::types::RepresentativeType;

    fn doctor_state() -> FormState {
        FormState {
            first_name: "Omar".to_string(),
            last_name: "Hassan".to_string(),
            country_code: "+20".to_string(),
            whatsapp: "1012345678".to_string(),
            email: "omar@clinic.eg".to_string(),
            brand_name: "Hassan Dental".to_string(),
            representative_type: Some(RepresentativeType::Doctor),
            medical_specialty: "Dentistry".to_string(),
            city: OUTSIDE_HOME_COUNTRY.to_string(),
            country: "Egypt".to_string(),
            ..FormState::default()
        }
    }

    #[test]
    fn phone_is_plain_concatenation() {
        let record = build_record(&doctor_state()).unwrap();
        assert_eq!(record.whatsapp, "+201012345678");
    }

    #[test]
    fn country_follows_city_selection() {
        let mut state = doctor_state();
        assert_eq!(build_record(&state).unwrap().country, "Egypt");

        state.city = "riyadh".to_string();
        assert_eq!(build_record(&state).unwrap().country, HOME_COUNTRY);
    }

    #[test]
    fn empty_optional_fields_are_absent_keys() {
        let record = build_record(&doctor_state()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();

        for key in [
            "brand_field",
            "website",
            "instagram",
            "youtube",
            "tiktok",
            "snapchat",
            "message_to_management",
            "notes",
        ] {
            assert!(!object.contains_key(key), "{} should be omitted", key);
        }
        assert_eq!(object["medical_specialty"], "Dentistry");
        assert_eq!(object["representative_type"], "doctor");
    }

    #[test]
    fn filled_optional_fields_are_sent_verbatim() {
        let mut state = doctor_state();
        state.website = "https://hassan.dental".to_string();
        state.instagram = "@hassan.dental".to_string();
        state.notes = "  call after 5pm ".to_string();

        let record = build_record(&state).unwrap();
        assert_eq!(record.website.as_deref(), Some("https://hassan.dental"));
        assert_eq!(record.instagram.as_deref(), Some("@hassan.dental"));
        assert_eq!(record.notes.as_deref(), Some("  call after 5pm "));
        assert_eq!(record.youtube, None);
    }

    #[test]
    fn hidden_conditional_values_are_not_sent() {
        let mut state = doctor_state();
        state.representative_type = Some(RepresentativeType::MedicalCenter);
        state.brand_field = "stale".to_string();

        let record = build_record(&state).unwrap();
        assert_eq!(record.medical_specialty, None);
        assert_eq!(record.brand_field, None);
    }

    #[test]
    fn unselected_representative_type_is_an_error() {
        let mut state = doctor_state();
        state.representative_type = None;
        assert_eq!(
            build_record(&state),
            Err(RecordError::MissingRepresentativeType)
        );
    }
}
