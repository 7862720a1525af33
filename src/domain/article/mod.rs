pub mod model;
pub mod repository;
pub mod service;

// 公開APIの再エクスポート
pub use model::{Article, ArticleStatusUpdate};
pub use repository::{ArticleRepository, MockArticleRepository, PgArticleRepository};
pub use service::ArticleService;
