use crate::domain::{models::file::File, ports::FileRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteFileRepo {
    pool: SqlitePool,
}

impl SqliteFileRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for SqliteFileRepo {
    async fn create(&self, file: &File) -> Result<File, AppError> {
        sqlx::query_as::<_, File>(
            "INSERT INTO files (id, name, path, created_at) VALUES (?, ?, ?, ?) RETURNING *"
        )
            .bind(&file.id).bind(&file.name).bind(&file.path).bind(file.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<File>, AppError> {
        sqlx::query_as::<_, File>("SELECT * FROM files WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
}
