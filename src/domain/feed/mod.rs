pub mod model;
pub mod repository;
pub mod service;

// 公開APIの再エクスポート
pub use model::{Feed, NewFeed};
pub use repository::{FeedRepository, MockFeedRepository, PgFeedRepository};
pub use service::FeedService;
