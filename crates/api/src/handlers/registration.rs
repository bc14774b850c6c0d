//! Handler for student self-registration.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Form;
use enrollment_core::assignment::{assign_group, GROUP_CAPACITY};
use enrollment_core::error::CoreError;
use enrollment_core::flash::Flash;
use enrollment_core::registration::{validate_registration, RegistrationInput};
use enrollment_db::models::student::{CreateStudent, RegistrationOutcome};
use enrollment_db::repositories::{GroupRepo, StudentRepo};
use tera::Context;

use crate::error::{AppError, AppResult};
use crate::middleware::flash::{redirect_with_flash, IncomingFlash};
use crate::state::AppState;
use crate::views::{render_page, RESULT};

const FORM_PAGE: &str = "/aluno";

/// POST /inscrever
///
/// Validate the form, draw a group for the student and show the resulting
/// team. Expected failures bounce back to the form with a flash message.
pub async fn register(
    State(state): State<AppState>,
    form: Result<Form<RegistrationInput>, FormRejection>,
) -> AppResult<Response> {
    let secure = state.config.session.secure_cookies;

    let input = match form {
        Ok(Form(input)) => input,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable registration form");
            return Ok(redirect_with_flash(FORM_PAGE, Flash::InvalidForm, secure));
        }
    };

    if let Err(e) = validate_registration(&input) {
        tracing::warn!(error = %e, track_id = input.track_id, "Registration form rejected");
        return Ok(redirect_with_flash(FORM_PAGE, Flash::InvalidForm, secure));
    }

    let track_id = input.track_id;
    let new_student = CreateStudent::from(input);

    let outcome = match StudentRepo::register(&state.pool, track_id, &new_student, assign_group).await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, track_id, "Registration failed");
            return Ok(redirect_with_flash(FORM_PAGE, Flash::RegistrationFailed, secure));
        }
    };

    let student = match outcome {
        RegistrationOutcome::Registered(student) => student,
        RegistrationOutcome::Rejected(reason) => {
            tracing::warn!(track_id, reason = %reason, "Registration rejected by assignment policy");
            return Ok(redirect_with_flash(FORM_PAGE, Flash::from(reason), secure));
        }
    };

    tracing::info!(
        student_id = student.id,
        group_id = student.group_id,
        track_id,
        "Student registered",
    );

    let group = GroupRepo::find_by_id(&state.pool, student.group_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Group",
            id: student.group_id,
        }))?;
    let teammates = StudentRepo::list_by_group(&state.pool, group.id).await?;

    let mut context = Context::new();
    context.insert("student_name", &student.name);
    context.insert("group_name", &group.name);
    context.insert("teammates", &teammates);
    context.insert("capacity", &GROUP_CAPACITY);
    render_page(&state, RESULT, context, IncomingFlash::default())
}
