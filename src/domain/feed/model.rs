use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use url::Url;
use uuid::Uuid;

/// フィードエンティティ
///
/// RSSやカスタムスクレイピングによる購読元。`plugin_type` が取得方式を
/// 表すタグで、対応するプラグインは外部の取り込みプロセス側にある。
/// `folder_id` と `last_updated` は「未設定」と「空」を区別するため
/// Optionで持つ（フォルダ未分類のフィード、一度も更新されていない
/// フィードがありうる）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Feed {
    /// フィードの一意識別子（作成後は不変）
    pub id: Uuid,
    /// フィード名（必須）
    pub name: String,
    /// フィードURL（必須）
    pub url: String,
    /// プラグイン種別（例: "rss", "custom"）
    pub plugin_type: String,
    /// 所属フォルダID（省略可能）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Uuid>,
    /// 更新間隔（分）
    pub update_interval: i32,
    /// 最終更新日時（取り込みが一度も走っていなければNone）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    /// 作成日時
    pub created_at: DateTime<Utc>,
}

/// フィードの作成・更新ペイロード
///
/// `url` を `url::Url` で受けることで、構文的に不正なURLは
/// デシリアライズの時点で弾かれる。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFeed {
    pub name: String,
    pub url: Url,
    pub plugin_type: String,
    #[serde(default)]
    pub folder_id: Option<Uuid>,
    #[serde(default = "default_update_interval")]
    pub update_interval: i32,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

fn default_update_interval() -> i32 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_feed_rejects_invalid_url() {
        let result = serde_json::from_str::<NewFeed>(
            r#"{"name": "BBC", "url": "not a url", "plugin_type": "rss"}"#,
        );
        assert!(result.is_err(), "不正なURLはデシリアライズで弾かれるべき");
    }

    #[test]
    fn test_new_feed_defaults() {
        let payload: NewFeed = serde_json::from_str(
            r#"{"name": "BBC", "url": "https://feeds.bbci.co.uk/news/rss.xml", "plugin_type": "rss"}"#,
        )
        .unwrap();

        assert_eq!(payload.update_interval, 60);
        assert!(payload.folder_id.is_none());
        assert!(payload.last_updated.is_none());
    }

    #[test]
    fn test_feed_json_omits_absent_optionals() {
        let feed = Feed {
            id: Uuid::new_v4(),
            name: "BBC".to_string(),
            url: "https://feeds.bbci.co.uk/news/rss.xml".to_string(),
            plugin_type: "rss".to_string(),
            folder_id: None,
            update_interval: 60,
            last_updated: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&feed).unwrap();
        assert!(json.get("folder_id").is_none());
        assert!(json.get("last_updated").is_none());
    }
}
