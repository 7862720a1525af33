use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::model::Article;
use crate::types::{RepositoryError, RepositoryResult};

const ARTICLE_COLUMNS: &str =
    "id, feed_id, title, content, url, published_at, is_read, is_later, created_at";

/// 記事の永続化を定義するトレイト
///
/// `create` と `delete` はサービス層のどの業務ルールからも呼ばれない。
/// 外部の取り込みプロセスとテストのために残している。
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn get_all(&self) -> RepositoryResult<Vec<Article>>;
    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Article>;
    async fn create(&self, article: &Article) -> RepositoryResult<Article>;
    async fn update(&self, article: &Article) -> RepositoryResult<Article>;
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
    async fn get_later_articles(&self) -> RepositoryResult<Vec<Article>>;
}

/// PostgreSQLを使用した本番用の記事リポジトリ
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Article>> {
        sqlx::query_as::<_, Article>(&format!("SELECT {} FROM articles", ARTICLE_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::database("記事全件取得", e))
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Article> {
        sqlx::query_as::<_, Article>(&format!(
            "SELECT {} FROM articles WHERE id = $1",
            ARTICLE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("記事ID検索", e))?
        .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, article: &Article) -> RepositoryResult<Article> {
        sqlx::query_as::<_, Article>(&format!(
            r#"
            INSERT INTO articles
                (id, feed_id, title, content, url, published_at, is_read, is_later, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            ARTICLE_COLUMNS
        ))
        .bind(article.id)
        .bind(article.feed_id)
        .bind(&article.title)
        .bind(&article.content)
        .bind(&article.url)
        .bind(article.published_at)
        .bind(article.is_read)
        .bind(article.is_later)
        .bind(article.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("記事作成", e))
    }

    // idとfeed_id、created_atは書き換えない
    async fn update(&self, article: &Article) -> RepositoryResult<Article> {
        sqlx::query_as::<_, Article>(&format!(
            r#"
            UPDATE articles
            SET title = $1, content = $2, url = $3, published_at = $4,
                is_read = $5, is_later = $6
            WHERE id = $7
            RETURNING {}
            "#,
            ARTICLE_COLUMNS
        ))
        .bind(&article.title)
        .bind(&article.content)
        .bind(&article.url)
        .bind(article.published_at)
        .bind(article.is_read)
        .bind(article.is_later)
        .bind(article.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("記事更新", e))?
        .ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::database("記事削除", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn get_later_articles(&self) -> RepositoryResult<Vec<Article>> {
        sqlx::query_as::<_, Article>(&format!(
            "SELECT {} FROM articles WHERE is_later = TRUE",
            ARTICLE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("後で見る記事取得", e))
    }
}

/// テスト用のインメモリ記事リポジトリ
#[derive(Default)]
pub struct MockArticleRepository {
    rows: std::sync::Mutex<Vec<Article>>,
}

impl MockArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期データ入りのモックを作成
    pub fn with_rows(rows: Vec<Article>) -> Self {
        Self {
            rows: std::sync::Mutex::new(rows),
        }
    }
}

#[async_trait]
impl ArticleRepository for MockArticleRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Article>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Article> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, article: &Article) -> RepositoryResult<Article> {
        self.rows.lock().unwrap().push(article.clone());
        Ok(article.clone())
    }

    async fn update(&self, article: &Article) -> RepositoryResult<Article> {
        let mut rows = self.rows.lock().unwrap();
        let stored = rows
            .iter_mut()
            .find(|a| a.id == article.id)
            .ok_or(RepositoryError::NotFound)?;
        stored.title = article.title.clone();
        stored.content = article.content.clone();
        stored.url = article.url.clone();
        stored.published_at = article.published_at;
        stored.is_read = article.is_read;
        stored.is_later = article.is_later;
        Ok(stored.clone())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn get_later_articles(&self) -> RepositoryResult<Vec<Article>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.is_later)
            .cloned()
            .collect())
    }
}
