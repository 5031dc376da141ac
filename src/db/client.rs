//  src/db/client.rs

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::utils::errors::DbError;

/// The whole surface the probe needs from a database: one aggregate
/// and a way to hand the connection back.
#[async_trait]
pub trait DbClient: Send + Sync {
    async fn count(&self, table: &str) -> Result<i64, DbError>;
    async fn disconnect(&self);
}

/// Thin, cheap-to-clone handle around a Postgres pool.
#[derive(Clone)]
pub struct PgClient {
    pool: PgPool,
}

impl PgClient {
    /// Build once at start-up. Connection parameters come from
    /// `DATABASE_URL`, nothing else leaks in.
    pub async fn connect() -> Result<Self, DbError> {
        dotenv::dotenv().ok();

        let url = std::env::var("DATABASE_URL").map_err(|_| DbError::MissingUrl)?;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl DbClient for PgClient {
    async fn count(&self, table: &str) -> Result<i64, DbError> {
        // Identifier, not a bind parameter; quoted since `user` is
        // reserved in Postgres.
        let sql = format!("SELECT COUNT(*) FROM \"{}\"", table);

        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn disconnect(&self) {
        self.pool.close().await;
    }
}
