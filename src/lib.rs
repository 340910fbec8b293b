//! keiretsu - Config-driven key sequence shortcut palette
//!
//! 設定ファイルに書いた短いキーシーケンスをホストのアクションへ
//! 対応付け、前方一致の候補表示と完全一致での即時ディスパッチを行う

// コアモジュール
pub mod error;

// データ層
pub mod config;
pub mod table;

// ロジック層
pub mod dispatch;
pub mod host;
pub mod input;
pub mod palette;
pub mod resolver;

// 表示層
pub mod app;
pub mod ui;

// 公開API
pub use app::App;
pub use config::{ConfigLoader, Settings};
pub use error::{KeiretsuError, Result};
pub use table::{MappingEntry, MappingTable, TableStore};
