//! Type definitions for the lead intake form
//!
//! `FormState` holds raw user input, `SubmissionRecord` is the row shape the
//! hosted `submissions` table expects. Field names on the record are an
//! external contract and must not be renamed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::options::{CityOption, DialCode};
use crate::rules::HOME_COUNTRY;

/// Dial code preselected for the phone number (home country)
pub const DEFAULT_COUNTRY_CODE: &str = "+966";

/// Maximum length of the message to management, in characters
pub const MESSAGE_TO_MANAGEMENT_MAX_CHARS: usize = 1000;

// ==================== Form Input ====================

/// Every editable field of the form, in the order it appears on the page.
///
/// The derived `Ord` follows declaration order, so iterating a
/// `BTreeMap<Field, _>` replays edits top to bottom: `representativeType`
/// before the fields it clears, `city` before `country`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    CountryCode,
    Whatsapp,
    Email,
    BrandName,
    RepresentativeType,
    MedicalSpecialty,
    BrandField,
    City,
    Country,
    Website,
    Instagram,
    Youtube,
    Tiktok,
    Snapchat,
    MessageToManagement,
    Notes,
}

impl Field {
    pub const ALL: [Field; 18] = [
        Field::FirstName,
        Field::LastName,
        Field::CountryCode,
        Field::Whatsapp,
        Field::Email,
        Field::BrandName,
        Field::RepresentativeType,
        Field::MedicalSpecialty,
        Field::BrandField,
        Field::City,
        Field::Country,
        Field::Website,
        Field::Instagram,
        Field::Youtube,
        Field::Tiktok,
        Field::Snapchat,
        Field::MessageToManagement,
        Field::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::CountryCode => "countryCode",
            Field::Whatsapp => "whatsapp",
            Field::Email => "email",
            Field::BrandName => "brandName",
            Field::RepresentativeType => "representativeType",
            Field::MedicalSpecialty => "medicalSpecialty",
            Field::BrandField => "brandField",
            Field::City => "city",
            Field::Country => "country",
            Field::Website => "website",
            Field::Instagram => "instagram",
            Field::Youtube => "youtube",
            Field::Tiktok => "tiktok",
            Field::Snapchat => "snapchat",
            Field::MessageToManagement => "messageToManagement",
            Field::Notes => "notes",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is submitting on behalf of the brand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepresentativeType {
    Doctor,
    Clinic,
    MedicalCenter,
    Other,
}

impl RepresentativeType {
    /// Parse the stored selector value; anything else means "not selected"
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "doctor" => Some(Self::Doctor),
            "clinic" => Some(Self::Clinic),
            "medical_center" => Some(Self::MedicalCenter),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doctor => "doctor",
            Self::Clinic => "clinic",
            Self::MedicalCenter => "medical_center",
            Self::Other => "other",
        }
    }
}

/// Raw values entered by the user during one form session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub country_code: String,
    pub whatsapp: String,
    pub email: String,
    pub brand_name: String,
    pub representative_type: Option<RepresentativeType>,
    pub medical_specialty: String,
    pub brand_field: String,
    pub city: String,
    pub country: String,
    pub website: String,
    pub instagram: String,
    pub youtube: String,
    pub tiktok: String,
    pub snapchat: String,
    pub message_to_management: String,
    pub notes: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            whatsapp: String::new(),
            email: String::new(),
            brand_name: String::new(),
            representative_type: None,
            medical_specialty: String::new(),
            brand_field: String::new(),
            city: String::new(),
            country: HOME_COUNTRY.to_string(),
            website: String::new(),
            instagram: String::new(),
            youtube: String::new(),
            tiktok: String::new(),
            snapchat: String::new(),
            message_to_management: String::new(),
            notes: String::new(),
        }
    }
}

impl FormState {
    /// Current value of a field as the user sees it
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::RepresentativeType => self
                .representative_type
                .map(|t| t.as_str())
                .unwrap_or_default(),
            _ => self.text(field),
        }
    }

    /// Overwrite a field without any derived rules.
    ///
    /// The message to management is capped at
    /// [`MESSAGE_TO_MANAGEMENT_MAX_CHARS`] characters.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::RepresentativeType => {
                self.representative_type = RepresentativeType::from_value(&value);
            }
            Field::MessageToManagement => {
                self.message_to_management = truncate_chars(value, MESSAGE_TO_MANAGEMENT_MAX_CHARS);
            }
            _ => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = value;
                }
            }
        }
    }

    fn text(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::CountryCode => &self.country_code,
            Field::Whatsapp => &self.whatsapp,
            Field::Email => &self.email,
            Field::BrandName => &self.brand_name,
            Field::MedicalSpecialty => &self.medical_specialty,
            Field::BrandField => &self.brand_field,
            Field::City => &self.city,
            Field::Country => &self.country,
            Field::Website => &self.website,
            Field::Instagram => &self.instagram,
            Field::Youtube => &self.youtube,
            Field::Tiktok => &self.tiktok,
            Field::Snapchat => &self.snapchat,
            Field::MessageToManagement => &self.message_to_management,
            Field::Notes => &self.notes,
            Field::RepresentativeType => "",
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::CountryCode => &mut self.country_code,
            Field::Whatsapp => &mut self.whatsapp,
            Field::Email => &mut self.email,
            Field::BrandName => &mut self.brand_name,
            Field::MedicalSpecialty => &mut self.medical_specialty,
            Field::BrandField => &mut self.brand_field,
            Field::City => &mut self.city,
            Field::Country => &mut self.country,
            Field::Website => &mut self.website,
            Field::Instagram => &mut self.instagram,
            Field::Youtube => &mut self.youtube,
            Field::Tiktok => &mut self.tiktok,
            Field::Snapchat => &mut self.snapchat,
            Field::MessageToManagement => &mut self.message_to_management,
            Field::Notes => &mut self.notes,
            Field::RepresentativeType => return None,
        };
        Some(slot)
    }
}

fn truncate_chars(value: String, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((end, _)) => value[..end].to_string(),
        None => value,
    }
}

/// Field name -> human-readable message. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Record an error, replacing any earlier message for the same field
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

// ==================== Store Contract ====================

/// Row sent to the hosted `submissions` table.
///
/// Optional columns are omitted from the JSON entirely when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub first_name: String,
    pub last_name: String,
    /// Dial code and local number concatenated, e.g. `+201012345678`
    pub whatsapp: String,
    pub email: String,
    pub brand_name: String,
    pub representative_type: RepresentativeType,
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapchat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_to_management: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Row as returned by the store after insert, including server-generated columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSubmission {
    pub id: Uuid,
    #[serde(default, deserialize_with = "null_as_false")]
    pub whatsapp_verified: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub record: SubmissionRecord,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

// ==================== Binary I/O ====================

/// Binary input - determines which action to perform
#[derive(Debug, Deserialize)]
#[serde(tag = "action")]
pub enum Input {
    /// Validate: Apply the fields and report validation errors
    Validate(FieldsInput),
    /// Preview: Build the record that would be sent, without sending it
    Preview(FieldsInput),
    /// Submit: Validate and insert into the submissions table
    Submit(FieldsInput),
    /// Options: List selectable cities and dial codes
    Options(OptionsInput),
}

/// Field values to replay into a fresh session, in form order
#[derive(Debug, Default, Deserialize)]
pub struct FieldsInput {
    #[serde(default)]
    pub fields: BTreeMap<Field, String>,
}

/// Input for Options action
#[derive(Debug, Deserialize)]
pub struct OptionsInput {}

/// Binary output - union of possible response types
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Output {
    Validate(ValidateOutput),
    Preview(PreviewOutput),
    Submit(SubmitOutput),
    Options(OptionsOutput),
}

#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub valid: bool,
    pub errors: ValidationErrors,
}

#[derive(Debug, Serialize)]
pub struct PreviewOutput {
    pub valid: bool,
    pub errors: ValidationErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<SubmissionRecord>,
}

#[derive(Debug, Serialize)]
pub struct SubmitOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "ValidationErrors::is_empty")]
    pub errors: ValidationErrors,
}

#[derive(Debug, Serialize)]
pub struct OptionsOutput {
    pub cities: &'static [CityOption],
    pub dial_codes: &'static [DialCode],
}

/// Error response from the binary
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
