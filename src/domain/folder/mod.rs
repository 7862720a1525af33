pub mod model;
pub mod repository;
pub mod service;

// 公開APIの再エクスポート
pub use model::{Folder, NewFolder};
pub use repository::{FolderRepository, MockFolderRepository, PgFolderRepository};
pub use service::FolderService;
