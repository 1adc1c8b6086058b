//! Headless host for the lead intake form
//!
//! Reads one JSON action from stdin and writes one JSON result to stdout:
//! 1. Validate: Report validation errors for the given fields
//! 2. Preview: Show the record that would be inserted
//! 3. Submit: Insert the record into the submissions table
//! 4. Options: List selectable cities and dial codes

use anyhow::{anyhow, Context, Result};
use std::collections::BTreeMap;
use std::io::Write;
use tokio::io::AsyncReadExt;
use tracing::error;

use lead_intake::config::{Environment, Settings};
use lead_intake::logging::init_logging;
use lead_intake::options;
use lead_intake::record::build_record;
use lead_intake::session::{FormSession, SubmitOutcome, SUCCESS_NOTICE};
use lead_intake::store::RestStore;
use lead_intake::types::*;

#[tokio::main]
async fn main() {
    // Load .env first so RUST_LOG and ENV are visible to logging
    dotenvy::dotenv().ok();
    init_logging(&Environment::from_env());

    match process().await {
        Ok(output) => write_json(&output),
        Err(e) => {
            error!(error = %e, "Action failed");
            write_json(&ErrorResponse {
                success: false,
                error: format!("{:#}", e),
            });
        }
    }
}

fn write_json<T: serde::Serialize>(value: &T) {
    if let Err(e) = write_json_line(std::io::stdout().lock(), value) {
        error!(error = %e, "Failed to write output");
    }
}

/// One JSON document followed by a newline, flushed
fn write_json_line<W: Write, T: serde::Serialize>(mut out: W, value: &T) -> std::io::Result<()> {
    serde_json::to_writer(&mut out, value)?;
    writeln!(out)?;
    out.flush()
}

async fn process() -> Result<Output> {
    let mut body = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut body)
        .await
        .context("Failed to read input")?;

    let input: Input =
        serde_json::from_slice(&body).map_err(|e| anyhow!("Invalid input JSON: {}", e))?;

    match input {
        Input::Validate(input) => Ok(handle_validate(input)),
        Input::Preview(input) => Ok(handle_preview(input)),
        Input::Submit(input) => handle_submit(input).await,
        Input::Options(_) => Ok(handle_options()),
    }
}

/// Replay the fields into a fresh session, top to bottom
fn session_from(fields: BTreeMap<Field, String>) -> FormSession {
    let mut session = FormSession::new();
    for (field, value) in fields {
        session.edit(field, value);
    }
    session
}

fn handle_validate(input: FieldsInput) -> Output {
    let mut session = session_from(input.fields);
    let valid = session.validate();
    Output::Validate(ValidateOutput {
        valid,
        errors: session.errors().clone(),
    })
}

fn handle_preview(input: FieldsInput) -> Output {
    let mut session = session_from(input.fields);
    let valid = session.validate();
    let record = if valid {
        build_record(session.state()).ok()
    } else {
        None
    };
    Output::Preview(PreviewOutput {
        valid,
        errors: session.errors().clone(),
        record,
    })
}

async fn handle_submit(input: FieldsInput) -> Result<Output> {
    let mut session = session_from(input.fields);

    // Validate before touching configuration so bad input never needs a store
    if !session.validate() {
        return Ok(Output::Submit(SubmitOutput {
            success: false,
            notice: None,
            id: None,
            errors: session.errors().clone(),
        }));
    }

    let settings = Settings::from_env()?;
    let store = RestStore::from_settings(&settings).context("Failed to create store client")?;

    let output = match session.submit(&store).await {
        SubmitOutcome::Submitted(row) => SubmitOutput {
            success: true,
            notice: Some(SUCCESS_NOTICE.to_string()),
            id: row.map(|r| r.id),
            errors: ValidationErrors::new(),
        },
        SubmitOutcome::Failed { notice } => SubmitOutput {
            success: false,
            notice: Some(notice.to_string()),
            id: None,
            errors: ValidationErrors::new(),
        },
        SubmitOutcome::Invalid | SubmitOutcome::InFlight => SubmitOutput {
            success: false,
            notice: None,
            id: None,
            errors: session.errors().clone(),
        },
    };

    Ok(Output::Submit(output))
}

fn handle_options() -> Output {
    Output::Options(OptionsOutput {
        cities: options::cities(),
        dial_codes: options::dial_codes(),
    })
}
