//! ドメインモジュール
//!
//! エンティティごとの縦割りスライス（model + repository + service）を
//! 管理します。ハンドラー → サービス → リポジトリ → データストアの
//! 順に呼び出され、各層は直下の層の契約だけを信頼します。

pub mod article;
pub mod feed;
pub mod folder;
