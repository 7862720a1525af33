//! feedapp - フィードリーダーのバックエンド
//!
//! フォルダ・フィード・記事の3つの縦割りスライスをHTTP経由で公開する。
//! 記事の取り込み（フィードのポーリングや本文のパース）は外部プロセスの
//! 責務で、このクレートはエンティティのライフサイクルと状態遷移だけを
//! 扱う。

pub mod domain;
pub mod infra;
pub mod types;
pub mod web;
