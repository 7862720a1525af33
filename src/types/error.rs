use thiserror::Error;

/// 永続化層のエラー型
///
/// 「行が見つからない」だけを区別し、それ以外のデータベース障害は
/// 操作名を付けてそのまま包む。回復はこの層では行わない。
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 指定されたIDに一致する行が存在しない
    #[error("対象の行が見つかりません")]
    NotFound,

    /// データベース関連のエラー
    #[error("データベースエラー: {operation} - {source}")]
    Database {
        operation: String,
        #[source]
        source: sqlx::Error,
    },
}

impl RepositoryError {
    /// データベースエラーを作成
    pub fn database<O: Into<String>>(operation: O, source: sqlx::Error) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }
}

/// 永続化層のResult型エイリアス
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// サービス層のエラー型
///
/// 永続化層の汎用的なNotFoundを、どのリソースが無かったのかが分かる
/// エンティティ別のエラーへ変換する。それ以外の障害は再分類せず
/// `Repository` としてそのまま通す。
#[derive(Error, Debug)]
pub enum ServiceError {
    /// フォルダが存在しない
    #[error("フォルダが見つかりません")]
    FolderNotFound,

    /// フィードが存在しない
    #[error("フィードが見つかりません")]
    FeedNotFound,

    /// 記事が存在しない
    #[error("記事が見つかりません")]
    ArticleNotFound,

    /// 永続化層の障害（NotFound以外）をそのまま伝搬する
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// NotFound系のエラーかどうかを判定
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FolderNotFound | Self::FeedNotFound | Self::ArticleNotFound
        )
    }
}

/// サービス層のResult型エイリアス
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
