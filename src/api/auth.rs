use crate::api::RequestContext;
use crate::common::cookies;
use crate::common::error::AppError;
use crate::common::flash::Flash;
use crate::common::i18n;
use crate::common::paths;
use crate::common::state::AppState;
use crate::models::communities::Community;
use crate::models::sessions::Session;
use crate::usecases::{communities, sessions};
use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use std::str::FromStr;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "_inbox_session";

/// The logged-in person and the community they are browsing.
///
/// Rejects anonymous requests with a redirect to the login page.
pub struct CurrentUser {
    pub session: Session,
    pub community: Community,
}

fn session_token(headers: &HeaderMap) -> Option<Uuid> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    let token = cookies::find(headers, SESSION_COOKIE).or(bearer)?;
    Uuid::from_str(token.trim()).ok()
}

fn login_required() -> Response {
    Flash::warning(i18n::YOU_MUST_LOG_IN_TO_VIEW_YOUR_INBOX).redirect(paths::login_path())
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(session_id) = session_token(&parts.headers) else {
            return Err(login_required());
        };

        let ctx = RequestContext::from_state(state);
        let session = match sessions::fetch_one(&ctx, session_id).await {
            Ok(session) => session,
            Err(AppError::SessionsNotFound) => return Err(login_required()),
            Err(e) => return Err(e.into_response()),
        };
        let session = sessions::extend(&ctx, session)
            .await
            .map_err(IntoResponse::into_response)?;
        let community = communities::fetch_one(&ctx, session.community_id)
            .await
            .map_err(IntoResponse::into_response)?;
        Ok(Self { session, community })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use axum::http::header::COOKIE;

    const TOKEN: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

    #[test]
    fn reads_token_from_cookie() {
        let mut headers = HeaderMap::new();
        let cookie = HeaderValue::from_str(&format!("_inbox_session={TOKEN}")).unwrap();
        headers.insert(COOKIE, cookie);
        assert_eq!(session_token(&headers), Uuid::from_str(TOKEN).ok());
    }

    #[test]
    fn reads_token_from_bearer_header() {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {TOKEN}")).unwrap();
        headers.insert(AUTHORIZATION, bearer);
        assert_eq!(session_token(&headers), Uuid::from_str(TOKEN).ok());
    }

    #[test]
    fn malformed_tokens_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("_inbox_session=abc"));
        assert_eq!(session_token(&headers), None);
        assert_eq!(session_token(&HeaderMap::new()), None);
    }
}
