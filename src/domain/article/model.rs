use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// 記事エンティティ
///
/// フィードから取り込まれた個々のコンテンツ。取り込みは外部プロセスが
/// 行い、このサービスは閲覧と状態更新だけを担当する。記事は通常の
/// フローでは削除されない。
///
/// 状態管理は独立した2つのフラグで行う:
///   - 未読 + 通常
///   - 未読 + 後で見る
///   - 既読 + 通常
///   - 既読 + 後で見る
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Article {
    /// 記事の一意識別子（作成後は不変）
    pub id: Uuid,
    /// 所属フィードID
    pub feed_id: Uuid,
    /// 記事タイトル
    pub title: String,
    /// 記事本文（省略可能）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// 記事の元URL
    pub url: String,
    /// 公開日時（フィード側に無ければNone）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// 既読フラグ
    pub is_read: bool,
    /// 後で見るフラグ
    pub is_later: bool,
    /// 作成日時
    pub created_at: DateTime<Utc>,
}

/// 記事の状態更新ペイロード
///
/// 2つのブールフラグだけを運ぶ。他のフィールドは保存済みの行から
/// 引き継がれる。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArticleStatusUpdate {
    pub is_read: bool,
    pub is_later: bool,
}
