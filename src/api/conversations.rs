use crate::api::RequestContext;
use crate::api::auth::CurrentUser;
use crate::common::error::{AppError, ServiceResult};
use crate::common::flash::Flash;
use crate::common::i18n::{self, Locale};
use crate::common::paths;
use crate::models::conversations::ShowConversationResponse;
use crate::models::messages::ReplyArgs;
use crate::usecases::conversations;
use axum::Json;
use axum::extract::{Form, Path};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
pub struct ReplyPath {
    pub person_id: String,
    pub message_id: i64,
}

fn not_authorized(locale: Locale) -> Response {
    Flash::error(i18n::YOU_ARE_NOT_AUTHORIZED_TO_VIEW_THIS_CONTENT)
        .in_locale(locale)
        .redirect(paths::root_path())
}

pub async fn show(
    ctx: RequestContext,
    user: CurrentUser,
    Path(conversation_id): Path<i64>,
) -> Response {
    let result = conversations::show(&ctx, &user.session, conversation_id).await;
    if let Err(AppError::ConversationsNotFound) = result {
        debug!(
            conversation_id,
            person_id = user.session.person_id,
            community = %user.community.ident,
            "Conversation not visible to person"
        );
    }
    show_response(result, user.community.locale)
}

fn show_response(result: ServiceResult<ShowConversationResponse>, locale: Locale) -> Response {
    match result {
        Ok(response) => Json(response).into_response(),
        Err(AppError::ConversationsNotFound) => not_authorized(locale),
        Err(e) => e.into_response(),
    }
}

pub async fn reply(
    ctx: RequestContext,
    user: CurrentUser,
    Path(path): Path<ReplyPath>,
    Form(args): Form<ReplyArgs>,
) -> Response {
    let result = conversations::reply(
        &ctx,
        &user.session,
        &path.person_id,
        path.message_id,
        args.content,
    )
    .await;
    reply_response(result, path.message_id, user.community.locale)
}

fn reply_response(result: ServiceResult<()>, conversation_id: i64, locale: Locale) -> Response {
    let conversation_path = paths::conversation_path(conversation_id);
    match result {
        Ok(()) => Flash::notice(i18n::MESSAGE_SENT)
            .in_locale(locale)
            .redirect(&conversation_path),
        Err(AppError::Unauthorized | AppError::ConversationsNotFound) => not_authorized(locale),
        Err(AppError::MessagesBlank | AppError::MessagesTooLong) => {
            Flash::error(i18n::MESSAGE_NOT_SENT)
                .in_locale(locale)
                .redirect(&conversation_path)
        }
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};

    fn assert_flash_redirect(response: &Response, location: &str, flash: &str) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], location);
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(
            cookie.starts_with(&format!("_inbox_flash={flash};")),
            "unexpected cookie {cookie}"
        );
    }

    #[test]
    fn hidden_conversation_redirects_to_root() {
        let response = show_response(Err(AppError::ConversationsNotFound), Locale::En);
        assert_flash_redirect(
            &response,
            "/",
            "error:layouts.notifications.you_are_not_authorized_to_view_this_content:en",
        );
    }

    #[test]
    fn show_failures_keep_their_status() {
        let response = show_response(Err(AppError::Unexpected), Locale::En);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[test]
    fn reply_by_outsider_redirects_to_root() {
        for error in [AppError::Unauthorized, AppError::ConversationsNotFound] {
            let response = reply_response(Err(error), 7, Locale::Fi);
            assert_flash_redirect(
                &response,
                "/",
                "error:layouts.notifications.you_are_not_authorized_to_view_this_content:fi",
            );
        }
    }

    #[test]
    fn invalid_reply_redirects_back_to_conversation() {
        for error in [AppError::MessagesBlank, AppError::MessagesTooLong] {
            let response = reply_response(Err(error), 7, Locale::En);
            assert_flash_redirect(
                &response,
                "/conversations/7",
                "error:layouts.notifications.message_not_sent:en",
            );
        }
    }

    #[test]
    fn sent_reply_redirects_to_conversation() {
        let response = reply_response(Ok(()), 7, Locale::En);
        assert_flash_redirect(
            &response,
            "/conversations/7",
            "notice:layouts.notifications.message_sent:en",
        );
    }

    #[test]
    fn reply_failures_keep_their_status() {
        let error = AppError::ConversationsParticipantNotFound;
        let response = reply_response(Err(error), 7, Locale::En);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
