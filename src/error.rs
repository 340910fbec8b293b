//! エラーハンドリングシステム
//!
//! keiretsu 全体で使用される統一されたエラー型を定義。
//! 個別行の解析失敗は診断として扱い、エラーにはしない（parser 参照）。

use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum KeiretsuError {
    /// 設定関連エラー
    #[error("Configuration error")]
    Config(#[from] ConfigError),

    /// ホスト操作エラー
    #[error("Host operation failed")]
    Host(#[from] HostError),

    /// UI操作エラー
    #[error("UI operation failed")]
    Ui(#[from] UiError),

    /// アプリケーション論理エラー
    #[error("Application error: {0}")]
    Application(String),
}

/// 設定固有のエラー
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid settings file {path}: {message}")]
    InvalidSettings { path: String, message: String },

    #[error("Failed to write settings file {path}: {message}")]
    SettingsWrite { path: String, message: String },
}

/// ホスト連携固有のエラー
#[derive(Error, Debug, Clone)]
pub enum HostError {
    #[error("Cursor position {position} is out of range (buffer length {length})")]
    InvalidCursorPosition { position: usize, length: usize },
}

/// UI操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum UiError {
    #[error("Terminal initialization failed")]
    TerminalInit,

    #[error("Rendering failed: {component}")]
    RenderingFailed { component: String },
}

// std::io::Error から KeiretsuError への変換
impl From<std::io::Error> for KeiretsuError {
    fn from(error: std::io::Error) -> Self {
        KeiretsuError::Application(error.to_string())
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, KeiretsuError>;
