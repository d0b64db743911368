use crate::domain::answers::AnswerError;
use crate::domain::assessment::{AssessmentDefinition, AssessmentKind, AssessmentReport};
use crate::domain::bank::QuestionId;
use crate::domain::likert::Likert;
use crate::domain::session::{Progress, SessionError, SessionState};
use crate::error::ApiError;
use crate::state::{LiveSession, SharedState};
use crate::web::assessments::{question_view, QuestionView};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/:id", get(show).delete(discard))
        .route("/:id/answers", put(answer))
        .route("/:id/next", post(next))
        .route("/:id/previous", post(previous))
        .route("/:id/restart", post(restart))
        .route("/:id/results", get(results))
        .with_state(state)
}

#[derive(Serialize)]
pub struct SessionView {
    session_id: Uuid,
    kind: AssessmentKind,
    status: &'static str,
    current_index: Option<usize>,
    total_questions: usize,
    question: Option<QuestionView>,
    selected: Option<Likert>,
    can_advance: bool,
    can_go_back: bool,
    progress: Progress,
    started_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct AnswerPayload {
    question_id: QuestionId,
    value: u8,
}

pub fn session_view(id: Uuid, session: &LiveSession, definition: &AssessmentDefinition) -> SessionView {
    let bank = &definition.bank;
    let state = &session.state;
    let current = state.current_index().and_then(|index| {
        bank.get(index).map(|question| (index, question))
    });

    SessionView {
        session_id: id,
        kind: session.kind,
        status: if state.is_completed() {
            "completed"
        } else {
            "in_progress"
        },
        current_index: state.current_index(),
        total_questions: bank.len(),
        question: current.map(|(index, question)| question_view(question, index)),
        selected: current.and_then(|(_, question)| state.answers().get(question.id)),
        can_advance: state.can_advance(bank),
        can_go_back: state.can_go_back(),
        progress: state.progress(bank),
        started_at: session.created_at,
        expires_at: session.expires_at,
    }
}

async fn transition<F>(state: &SharedState, id: Uuid, step: F) -> Result<Json<SessionView>, ApiError>
where
    F: FnOnce(&AssessmentDefinition, &SessionState) -> Result<SessionState, SessionError>,
{
    let session = state
        .update_session(id, step)
        .await
        .ok_or(ApiError::SessionNotFound(id))?
        .map_err(|err| {
            tracing::debug!("Rejected transition for session {}: {}", id, err);
            ApiError::from(err)
        })?;
    Ok(Json(session_view(id, &session, state.definition(session.kind))))
}

async fn show(
    Path(id): Path<Uuid>,
    State(state): State<SharedState>,
) -> Result<Json<SessionView>, ApiError> {
    let session = state.session(id).await.ok_or(ApiError::SessionNotFound(id))?;
    Ok(Json(session_view(id, &session, state.definition(session.kind))))
}

async fn answer(
    Path(id): Path<Uuid>,
    State(state): State<SharedState>,
    Json(payload): Json<AnswerPayload>,
) -> Result<Json<SessionView>, ApiError> {
    let value = Likert::try_from(payload.value).map_err(AnswerError::from)?;
    tracing::debug!(
        "Session {}: question {} answered {}",
        id,
        payload.question_id,
        value.value()
    );
    transition(&state, id, |def, s| {
        s.record_answer(&def.bank, payload.question_id, value)
    })
    .await
}

async fn next(
    Path(id): Path<Uuid>,
    State(state): State<SharedState>,
) -> Result<Json<SessionView>, ApiError> {
    let view = transition(&state, id, |def, s| s.next(&def.bank)).await?;
    if view.status == "completed" {
        tracing::info!("Assessment session {} completed", id);
    }
    Ok(view)
}

async fn previous(
    Path(id): Path<Uuid>,
    State(state): State<SharedState>,
) -> Result<Json<SessionView>, ApiError> {
    transition(&state, id, |_, s| s.previous()).await
}

async fn restart(
    Path(id): Path<Uuid>,
    State(state): State<SharedState>,
) -> Result<Json<SessionView>, ApiError> {
    transition(&state, id, |_, s| Ok(s.restart())).await
}

async fn results(
    Path(id): Path<Uuid>,
    State(state): State<SharedState>,
) -> Result<Json<AssessmentReport>, ApiError> {
    let session = state.session(id).await.ok_or(ApiError::SessionNotFound(id))?;
    let SessionState::Completed { answers } = &session.state else {
        return Err(ApiError::NotCompleted);
    };
    Ok(Json(state.definition(session.kind).evaluate(answers)))
}

async fn discard(
    Path(id): Path<Uuid>,
    State(state): State<SharedState>,
) -> Result<StatusCode, ApiError> {
    if !state.close_session(id).await {
        return Err(ApiError::SessionNotFound(id));
    }
    tracing::info!("Assessment session {} discarded", id);
    Ok(StatusCode::NO_CONTENT)
}
