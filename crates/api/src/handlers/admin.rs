//! Handlers for the admin dashboard and its form actions.
//!
//! Every handler takes [`RequireAdmin`], so unauthenticated requests never
//! reach the database. Actions answer with a 303 back to `/admin` carrying a
//! flash message; only the dashboard page itself can produce an error page.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Form;
use enrollment_core::assignment::GROUP_CAPACITY;
use enrollment_core::flash::Flash;
use enrollment_core::naming::{group_names, MAX_GROUPS_PER_TRACK};
use enrollment_core::registration::{validate_new_track, NewTrackInput};
use enrollment_core::report::{TrackReport, EMPTY_GROUP, EMPTY_TRACK};
use enrollment_core::types::DbId;
use enrollment_db::models::student::MoveOutcome;
use enrollment_db::models::track::CreateTrack;
use enrollment_db::repositories::{GroupRepo, ReportRepo, StudentRepo, TrackRepo};
use serde::{Deserialize, Serialize};
use tera::Context;

use crate::error::AppResult;
use crate::middleware::admin::RequireAdmin;
use crate::middleware::flash::{redirect_with_flash, IncomingFlash};
use crate::state::AppState;
use crate::views::{render_page, ADMIN};

const DASHBOARD: &str = "/admin";

// ---------------------------------------------------------------------------
// Form bodies
// ---------------------------------------------------------------------------

/// Form body for `POST /admin/excluir_eixo`.
#[derive(Debug, Deserialize)]
pub struct TrackIdForm {
    #[serde(rename = "eixo_id")]
    pub track_id: DbId,
}

/// Form body for `POST /admin/excluir_aluno`.
#[derive(Debug, Deserialize)]
pub struct StudentIdForm {
    #[serde(rename = "aluno_id")]
    pub student_id: DbId,
}

/// Form body for `POST /admin/mover_aluno`.
#[derive(Debug, Deserialize)]
pub struct MoveStudentForm {
    #[serde(rename = "aluno_id")]
    pub student_id: DbId,
    #[serde(rename = "novo_grupo_id")]
    pub group_id: DbId,
}

/// A roster track as the dashboard shows it, with its head count.
#[derive(Debug, Serialize)]
struct TrackPanel<'a> {
    #[serde(flatten)]
    track: &'a TrackReport,
    student_count: usize,
}

fn back(state: &AppState, flash: Flash) -> Response {
    redirect_with_flash(DASHBOARD, flash, state.config.session.secure_cookies)
}

/// Unwrap a form body, or log and bounce with `InvalidForm`.
fn parse_form<T>(
    state: &AppState,
    form: Result<Form<T>, FormRejection>,
    action: &'static str,
) -> Result<T, Response> {
    form.map(|Form(input)| input).map_err(|rejection| {
        tracing::warn!(action, error = %rejection, "Unreadable admin form");
        back(state, Flash::InvalidForm)
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /admin
///
/// Every track with its groups and their students, plus the flat group list
/// used by the reassignment selector.
pub async fn dashboard(
    RequireAdmin(claims): RequireAdmin,
    State(state): State<AppState>,
    flash: IncomingFlash,
) -> AppResult<Response> {
    tracing::debug!(jti = %claims.jti, "Rendering admin dashboard");

    let report = ReportRepo::roster(&state.pool).await?;
    let all_groups = GroupRepo::list_with_track(&state.pool).await?;

    let panels: Vec<TrackPanel<'_>> = report
        .iter()
        .map(|track| TrackPanel {
            student_count: track.student_count(),
            track,
        })
        .collect();
    let student_total: usize = panels.iter().map(|panel| panel.student_count).sum();

    let mut context = Context::new();
    context.insert("report", &panels);
    context.insert("student_total", &student_total);
    context.insert("all_groups", &all_groups);
    context.insert("capacity", &GROUP_CAPACITY);
    context.insert("max_groups", &MAX_GROUPS_PER_TRACK);
    context.insert("empty_group", EMPTY_GROUP);
    context.insert("empty_track", EMPTY_TRACK);
    render_page(&state, ADMIN, context, flash)
}

/// POST /admin/criar_eixo
///
/// Create a track together with `qtd_grupos` sequentially named groups.
pub async fn create_track(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    form: Result<Form<NewTrackInput>, FormRejection>,
) -> Response {
    let input = match parse_form(&state, form, "criar_eixo") {
        Ok(input) => input,
        Err(response) => return response,
    };

    if let Err(e) = validate_new_track(&input) {
        tracing::warn!(error = %e, "Track creation rejected");
        return back(&state, Flash::InvalidForm);
    }

    let names = group_names(&input.name, input.group_count);
    let create = CreateTrack {
        name: input.name,
        description: input.description,
    };

    match TrackRepo::create_with_groups(&state.pool, &create, &names).await {
        Ok((track, groups)) => {
            tracing::info!(track_id = track.id, groups = groups.len(), "Track created");
            back(&state, Flash::TrackCreated)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create track");
            back(&state, Flash::ActionFailed)
        }
    }
}

/// POST /admin/excluir_eixo
///
/// Delete a track. Its groups and their students go with it.
pub async fn delete_track(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    form: Result<Form<TrackIdForm>, FormRejection>,
) -> Response {
    let input = match parse_form(&state, form, "excluir_eixo") {
        Ok(input) => input,
        Err(response) => return response,
    };

    match TrackRepo::delete(&state.pool, input.track_id).await {
        Ok(true) => {
            tracing::info!(track_id = input.track_id, "Track deleted");
            back(&state, Flash::TrackDeleted)
        }
        Ok(false) => {
            tracing::warn!(track_id = input.track_id, "Track to delete not found");
            back(&state, Flash::NotFound)
        }
        Err(e) => {
            tracing::error!(error = %e, track_id = input.track_id, "Failed to delete track");
            back(&state, Flash::ActionFailed)
        }
    }
}

/// POST /admin/excluir_aluno
pub async fn delete_student(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    form: Result<Form<StudentIdForm>, FormRejection>,
) -> Response {
    let input = match parse_form(&state, form, "excluir_aluno") {
        Ok(input) => input,
        Err(response) => return response,
    };

    match StudentRepo::delete(&state.pool, input.student_id).await {
        Ok(true) => {
            tracing::info!(student_id = input.student_id, "Student deleted");
            back(&state, Flash::StudentDeleted)
        }
        Ok(false) => {
            tracing::warn!(student_id = input.student_id, "Student to delete not found");
            back(&state, Flash::NotFound)
        }
        Err(e) => {
            tracing::error!(error = %e, student_id = input.student_id, "Failed to delete student");
            back(&state, Flash::ActionFailed)
        }
    }
}

/// POST /admin/mover_aluno
///
/// Move a student into another group, only if that group has a free seat.
pub async fn move_student(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    form: Result<Form<MoveStudentForm>, FormRejection>,
) -> Response {
    let input = match parse_form(&state, form, "mover_aluno") {
        Ok(input) => input,
        Err(response) => return response,
    };

    let outcome =
        StudentRepo::move_to_group(&state.pool, input.student_id, input.group_id, GROUP_CAPACITY)
            .await;

    let flash = match outcome {
        Ok(MoveOutcome::Moved) => {
            tracing::info!(
                student_id = input.student_id,
                group_id = input.group_id,
                "Student moved",
            );
            Flash::StudentMoved
        }
        Ok(MoveOutcome::Unchanged) => Flash::StudentMoved,
        Ok(MoveOutcome::GroupFull) => {
            tracing::warn!(group_id = input.group_id, "Move rejected: target group full");
            Flash::GroupFull
        }
        Ok(MoveOutcome::StudentNotFound | MoveOutcome::GroupNotFound) => {
            tracing::warn!(
                student_id = input.student_id,
                group_id = input.group_id,
                "Move rejected: unknown student or group",
            );
            Flash::NotFound
        }
        Err(e) => {
            tracing::error!(error = %e, student_id = input.student_id, "Failed to move student");
            Flash::ActionFailed
        }
    };

    back(&state, flash)
}
