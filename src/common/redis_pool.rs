use deadpool::managed::{Manager, Metrics, Object, Pool, PoolError, RecycleError, RecycleResult};
use redis::{AsyncConnectionConfig, RedisError, RedisResult};
use tracing::warn;

pub struct RedisPoolManager {
    client: redis::Client,
    config: AsyncConnectionConfig,
}

impl RedisPoolManager {
    pub fn new(client: redis::Client, config: AsyncConnectionConfig) -> Self {
        Self { client, config }
    }
}

impl Manager for RedisPoolManager {
    type Type = redis::aio::MultiplexedConnection;
    type Error = RedisError;

    async fn create(&self) -> RedisResult<Self::Type> {
        self.client
            .get_multiplexed_async_connection_with_config(&self.config)
            .await
    }

    async fn recycle(&self, conn: &mut Self::Type, metrics: &Metrics) -> RecycleResult<Self::Error> {
        let pong: RedisResult<String> = redis::cmd("PING").query_async(conn).await;
        match pong {
            Ok(_) => Ok(()),
            Err(e) => {
                warn!(
                    recycle_count = metrics.recycle_count,
                    "Dropping broken redis connection: {e}"
                );
                Err(RecycleError::Backend(e))
            }
        }
    }
}

pub type RedisPool = Pool<RedisPoolManager>;
pub type Connection = Object<RedisPoolManager>;
pub type Error = PoolError<RedisError>;
pub type PoolResult = Result<Connection, Error>;
