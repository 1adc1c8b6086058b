//! Lead intake form session
//!
//! Holds the state of one lead-intake form, derives which conditional
//! fields apply, validates on submit, and inserts the normalized record into
//! the hosted `submissions` table.

pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod record;
pub mod rules;
pub mod session;
pub mod store;
pub mod timer;
pub mod types;
pub mod validation;

pub use error::{RecordError, StoreError};
pub use record::build_record;
pub use rules::{FieldRules, Presence, HOME_COUNTRY, OUTSIDE_HOME_COUNTRY};
pub use session::{FormSession, Phase, SubmitOutcome};
pub use store::{RestStore, SubmissionStore};
pub use types::{
    Field, FormState, RepresentativeType, StoredSubmission, SubmissionRecord, ValidationErrors,
};
