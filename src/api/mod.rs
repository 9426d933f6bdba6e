use crate::common::context::Context;
use crate::common::init;
use crate::common::redis_pool::{PoolResult, RedisPool};
use crate::common::state::AppState;
use crate::settings::AppSettings;
use async_trait::async_trait;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::routing::{get, post};
use sqlx::{MySql, Pool};
use std::convert::Infallible;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

pub mod auth;
pub mod conversations;
pub mod root;

pub struct RequestContext {
    pub db: Pool<MySql>,
    pub redis: RedisPool,
}

impl RequestContext {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
            redis: state.redis.clone(),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::index))
        .route("/conversations/{id}", get(conversations::show))
        .route(
            "/{person_id}/messages/{message_id}/messages",
            post(conversations::reply),
        )
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    let app = router().with_state(state);
    let addr = SocketAddr::new(settings.app_host, settings.app_port);
    let listener = TcpListener::bind(addr).await?;
    info!("Serving inbox-service on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_state(state))
    }
}

#[async_trait]
impl Context for RequestContext {
    fn db(&self) -> &Pool<MySql> {
        &self.db
    }

    async fn redis(&self) -> PoolResult {
        self.redis.get().await
    }
}
