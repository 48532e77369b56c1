use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use tracing::{info, warn};

use enrol_common::{schema, Center, EnrolError, EnrolmentRecord, RawEnrolment};
use supabase_client::SupabaseError;

use crate::components::{render_form, render_success};
use crate::phase::FormPhase;
use crate::AppState;

/// Shown when the store fails without a usable message of its own.
const GENERIC_SUBMIT_ERROR: &str =
    "An error occurred while submitting your enrolment. Please try again.";

pub async fn cabra_page() -> Html<String> {
    blank_form(Center::Cabramatta)
}

pub async fn liverpool_page() -> Html<String> {
    blank_form(Center::Liverpool)
}

pub async fn cabra_submit(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<RawEnrolment>,
) -> Response {
    handle_submit(state, Center::Cabramatta, raw).await
}

pub async fn liverpool_submit(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<RawEnrolment>,
) -> Response {
    handle_submit(state, Center::Liverpool, raw).await
}

fn blank_form(center: Center) -> Html<String> {
    // A fresh GET is the reset event, whatever the previous interaction
    // ended in (the confirmation panel's link lands here too).
    let phase = FormPhase::default().reset();
    render_phase(center, &RawEnrolment::default(), &phase)
}

/// Map the current lifecycle phase to a page. Idle and submitting both
/// show the editable form; the machine never rests in submitting.
fn render_phase(center: Center, raw: &RawEnrolment, phase: &FormPhase) -> Html<String> {
    match phase {
        FormPhase::Idle | FormPhase::Submitting => Html(render_form(center, raw, &[], None)),
        FormPhase::Success => Html(render_success(center)),
        FormPhase::Error(message) => {
            Html(render_form(center, raw, &[], Some(message.clone())))
        }
    }
}

/// One enrolment submission: validate, normalize, insert.
///
/// Field failures re-render the form with inline messages and the raw
/// values preserved; the store is never called. A store failure
/// re-renders the editable form with a page-level banner so the user
/// can resubmit manually.
async fn handle_submit(state: Arc<AppState>, center: Center, raw: RawEnrolment) -> Response {
    let phase = FormPhase::Idle.submit_start();
    debug_assert!(phase.is_submitting());

    let phase = match run_submission(&state, center, &raw).await {
        Ok(record) => {
            info!(center = %center, grade = %record.current_grade, "Enrolment submitted");
            phase.store_success()
        }
        Err(EnrolError::Validation(errors)) => {
            // Log field names only, never the values (PII).
            info!(center = %center, fields = errors.len(), "Enrolment blocked by field validation");
            return Html(render_form(center, &raw, &errors, None)).into_response();
        }
        Err(EnrolError::Submission(message)) => phase.store_error(message),
    };

    render_phase(center, &raw, &phase).into_response()
}

/// Validate and normalize the raw submission, then insert it. A field
/// failure returns before the store is touched; an insert failure
/// carries the banner message for the page.
async fn run_submission(
    state: &AppState,
    center: Center,
    raw: &RawEnrolment,
) -> Result<EnrolmentRecord, EnrolError> {
    let record = schema::build_record(raw)?;
    state.store.insert_enrolment(&record).await.map_err(|e| {
        warn!(center = %center, error = %e, "Enrolment insert failed");
        EnrolError::Submission(banner_message(&e))
    })?;
    Ok(record)
}

/// Page-level banner for a failed insert: the store's own message when
/// it has one, otherwise the generic fallback.
fn banner_message(err: &SupabaseError) -> String {
    match err {
        SupabaseError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => GENERIC_SUBMIT_ERROR.to_string(),
    }
}
