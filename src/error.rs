use crate::domain::answers::AnswerError;
use crate::domain::session::SessionError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("session {0} not found or expired")]
    SessionNotFound(Uuid),

    #[error("{0}")]
    InvalidAnswer(#[from] AnswerError),

    #[error("{0}")]
    Transition(SessionError),

    #[error("assessment is not completed yet")]
    NotCompleted,

    #[error("too many new sessions, try again later")]
    RateLimited,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::SessionNotFound(_) => "session_not_found",
            ApiError::InvalidAnswer(AnswerError::UnknownQuestion(_)) => "unknown_question",
            ApiError::InvalidAnswer(AnswerError::InvalidValue(_)) => "invalid_value",
            ApiError::Transition(SessionError::Unanswered(_)) => "unanswered",
            ApiError::Transition(SessionError::AtFirstQuestion) => "at_first_question",
            ApiError::Transition(_) => "already_completed",
            ApiError::NotCompleted => "not_completed",
            ApiError::RateLimited => "rate_limited",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidAnswer(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Transition(_) | ApiError::NotCompleted => StatusCode::CONFLICT,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Answer(inner) => ApiError::InvalidAnswer(inner),
            other => ApiError::Transition(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
