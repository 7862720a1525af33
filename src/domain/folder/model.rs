use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// フォルダエンティティ
///
/// フィードを分類するためのコンテナ。`user_id` は将来のマルチユーザー
/// 対応用で、現在は保存されるだけで参照されない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// フォルダの一意識別子（作成後は不変）
    pub id: Uuid,
    /// フォルダ名（必須）
    pub name: String,
    /// 所有者のユーザーID（省略可能）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// 作成日時
    pub created_at: DateTime<Utc>,
}

/// フォルダの作成・更新ペイロード
///
/// IDと作成日時はサービス層が採番するため、クライアントからは受け取らない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFolder {
    pub name: String,
    #[serde(default)]
    pub user_id: Option<String>,
}
