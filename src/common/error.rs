use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug, Eq, PartialEq)]
pub enum AppError {
    Unexpected,
    Unauthorized,

    CommunitiesNotFound,

    ConversationsNotFound,
    ConversationsParticipantNotFound,

    MessagesBlank,
    MessagesTooLong,

    SessionsNotFound,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::Unauthorized => "unauthorized",

            AppError::CommunitiesNotFound => "communities.not_found",

            AppError::ConversationsNotFound => "conversations.not_found",
            AppError::ConversationsParticipantNotFound => "conversations.participant_not_found",

            AppError::MessagesBlank => "messages.blank",
            AppError::MessagesTooLong => "messages.too_long",

            AppError::SessionsNotFound => "sessions.not_found",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::Unauthorized => "You are not authorized to perform this action.",

            AppError::CommunitiesNotFound => "Community not found",

            AppError::ConversationsNotFound => "You are not authorized to view this content.",
            AppError::ConversationsParticipantNotFound => {
                "The conversation has no other participant."
            }

            AppError::MessagesBlank => "Message can't be blank.",
            AppError::MessagesTooLong => "Your message was too long. It has not been sent.",

            AppError::SessionsNotFound => "You must log in to view your inbox.",
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::MessagesBlank | AppError::MessagesTooLong => StatusCode::BAD_REQUEST,

            AppError::Unauthorized | AppError::SessionsNotFound => StatusCode::UNAUTHORIZED,

            AppError::CommunitiesNotFound | AppError::ConversationsNotFound => {
                StatusCode::NOT_FOUND
            }

            AppError::Unexpected | AppError::ConversationsParticipantNotFound => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}
