//! Submit-time validation of the form state

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::FieldRules;
use crate::types::{Field, FormState, ValidationErrors};

/// Basic `local@domain.tld` shape: no whitespace, one `@`, a dot in the domain
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub const MSG_FIRST_NAME_REQUIRED: &str = "الاسم الأول مطلوب";
pub const MSG_LAST_NAME_REQUIRED: &str = "الاسم الثاني مطلوب";
pub const MSG_COUNTRY_CODE_REQUIRED: &str = "رمز الدولة مطلوب";
pub const MSG_WHATSAPP_REQUIRED: &str = "رقم الواتساب مطلوب";
pub const MSG_EMAIL_REQUIRED: &str = "البريد الإلكتروني مطلوب";
pub const MSG_EMAIL_INVALID: &str = "البريد الإلكتروني غير صحيح";
pub const MSG_BRAND_NAME_REQUIRED: &str = "اسم البراند مطلوب";
pub const MSG_REPRESENTATIVE_TYPE_REQUIRED: &str = "يرجى الاختيار";
pub const MSG_CITY_REQUIRED: &str = "المدينة مطلوبة";
pub const MSG_MEDICAL_SPECIALTY_REQUIRED: &str = "التخصص الطبي مطلوب";
pub const MSG_BRAND_FIELD_REQUIRED: &str = "مجال عمل البراند مطلوب";
pub const MSG_COUNTRY_REQUIRED: &str = "اسم الدولة مطلوب";

/// Fields required regardless of other selections
const ALWAYS_REQUIRED: [(Field, &str); 7] = [
    (Field::FirstName, MSG_FIRST_NAME_REQUIRED),
    (Field::LastName, MSG_LAST_NAME_REQUIRED),
    (Field::CountryCode, MSG_COUNTRY_CODE_REQUIRED),
    (Field::Whatsapp, MSG_WHATSAPP_REQUIRED),
    (Field::Email, MSG_EMAIL_REQUIRED),
    (Field::BrandName, MSG_BRAND_NAME_REQUIRED),
    (Field::City, MSG_CITY_REQUIRED),
];

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Compute the full error set for the current state.
///
/// Pure: the caller decides whether to replace its previous errors.
pub fn validate(state: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for (field, message) in ALWAYS_REQUIRED {
        if is_blank(state.value(field)) {
            errors.insert(field, message);
        }
    }

    if state.representative_type.is_none() {
        errors.insert(Field::RepresentativeType, MSG_REPRESENTATIVE_TYPE_REQUIRED);
    }

    let rules = FieldRules::of(state);
    if rules.medical_specialty.is_required() && is_blank(&state.medical_specialty) {
        errors.insert(Field::MedicalSpecialty, MSG_MEDICAL_SPECIALTY_REQUIRED);
    }
    if rules.brand_field.is_required() && is_blank(&state.brand_field) {
        errors.insert(Field::BrandField, MSG_BRAND_FIELD_REQUIRED);
    }
    if rules.country.is_required() && is_blank(&state.country) {
        errors.insert(Field::Country, MSG_COUNTRY_REQUIRED);
    }

    // Checked on the raw value: whitespace-only input reads as malformed
    if !state.email.is_empty() && !is_valid_email(&state.email) {
        errors.insert(Field::Email, MSG_EMAIL_INVALID);
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::OUTSIDE_HOME_COUNTRY;
    use crate::types::RepresentativeType;

    fn complete_state() -> FormState {
        FormState {
            first_name: "Sara".to_string(),
            last_name: "Alharbi".to_string(),
            whatsapp: "501234567".to_string(),
            email: "sara@example.com".to_string(),
            brand_name: "Bright Smile".to_string(),
            representative_type: Some(RepresentativeType::MedicalCenter),
            city: "riyadh".to_string(),
            ..FormState::default()
        }
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("user@@bad"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("with space@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn complete_state_is_valid() {
        assert!(validate(&complete_state()).is_empty());
    }

    #[test]
    fn default_state_reports_every_unconditional_field() {
        let errors = validate(&FormState::default());
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                Field::FirstName,
                Field::LastName,
                Field::Whatsapp,
                Field::Email,
                Field::BrandName,
                Field::RepresentativeType,
                Field::City,
            ]
        );
    }

    #[test]
    fn each_missing_required_field_is_reported_alone() {
        for (field, message) in ALWAYS_REQUIRED {
            let mut state = complete_state();
            state.set(field, "   ".to_string());
            let errors = validate(&state);
            let expected = if field == Field::Email {
                MSG_EMAIL_INVALID
            } else {
                message
            };
            assert_eq!(errors.len(), 1, "{} should be the only error", field);
            assert_eq!(errors.get(field), Some(expected));
        }
    }

    #[test]
    fn empty_email_is_required_not_malformed() {
        let mut state = complete_state();
        state.email.clear();
        assert_eq!(validate(&state).get(Field::Email), Some(MSG_EMAIL_REQUIRED));

        state.email = "user@@bad".to_string();
        assert_eq!(validate(&state).get(Field::Email), Some(MSG_EMAIL_INVALID));
    }

    #[test]
    fn medical_specialty_required_for_doctor_and_clinic() {
        for rep in [RepresentativeType::Doctor, RepresentativeType::Clinic] {
            let mut state = complete_state();
            state.representative_type = Some(rep);
            let errors = validate(&state);
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get(Field::MedicalSpecialty),
                Some(MSG_MEDICAL_SPECIALTY_REQUIRED)
            );

            state.medical_specialty = "Cardiology".to_string();
            assert!(validate(&state).is_empty());
        }
    }

    #[test]
    fn brand_field_required_for_other() {
        let mut state = complete_state();
        state.representative_type = Some(RepresentativeType::Other);
        let errors = validate(&state);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::BrandField));

        state.brand_field = "E-commerce".to_string();
        assert!(validate(&state).is_empty());
    }

    #[test]
    fn hidden_fields_are_never_required() {
        let mut state = complete_state();
        state.representative_type = Some(RepresentativeType::MedicalCenter);
        state.medical_specialty.clear();
        state.brand_field.clear();
        state.country.clear();
        assert!(validate(&state).is_empty());
    }

    #[test]
    fn country_required_outside_home_country() {
        let mut state = complete_state();
        state.city = OUTSIDE_HOME_COUNTRY.to_string();
        state.country = " ".to_string();
        let errors = validate(&state);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Country), Some(MSG_COUNTRY_REQUIRED));

        state.country = "Egypt".to_string();
        assert!(validate(&state).is_empty());
    }
}
