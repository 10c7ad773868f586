use crate::domain::{models::file::File, ports::FileRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresFileRepo {
    pool: PgPool,
}

impl PostgresFileRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for PostgresFileRepo {
    async fn create(&self, file: &File) -> Result<File, AppError> {
        sqlx::query_as::<_, File>(
            "INSERT INTO files (id, name, path, created_at) VALUES ($1, $2, $3, $4) RETURNING *"
        )
            .bind(&file.id).bind(&file.name).bind(&file.path).bind(file.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<File>, AppError> {
        sqlx::query_as::<_, File>("SELECT * FROM files WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
}
