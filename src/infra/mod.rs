//! インフラストラクチャモジュール
//!
//! データベース接続などの外部リソースとの接続処理を管理します。

pub mod db;
