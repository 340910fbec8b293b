//! 設定値の永続化
//!
//! 定義ファイルのパスと解析定数を JSON として保存・復元する。
//! 設定ファイルが無い場合は既定値で開始する（エラーにしない）。

use crate::config::parser::ParseOptions;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 既定の定義ファイルパス
const DEFAULT_CONFIG_PATH: &str = "~/.ksrc";

/// ユーザー設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// ショートカット定義ファイルのパス（~ と環境変数は読み込み時に展開）
    pub config_path: String,
    /// フィールド区切り文字
    pub field_separator: char,
    /// 行頭コメントマーカー
    pub comment_marker: char,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            field_separator: '\t',
            comment_marker: '"',
        }
    }
}

impl Settings {
    /// 解析オプションへ変換
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            field_separator: self.field_separator,
            comment_marker: self.comment_marker,
        }
    }

    /// 既定の設定ファイル置き場（`~/.config/keiretsu/settings.json`）
    pub fn default_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keiretsu").join("settings.json"))
    }

    /// ファイルから読み込む。存在しなければ既定値を返す
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let settings = serde_json::from_str(&raw).map_err(|err| ConfigError::InvalidSettings {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        Ok(settings)
    }

    /// ファイルへ保存する（親ディレクトリは必要なら作成）
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| ConfigError::SettingsWrite {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
        }

        let raw =
            serde_json::to_string_pretty(self).map_err(|err| ConfigError::SettingsWrite {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;

        fs::write(path, raw).map_err(|err| ConfigError::SettingsWrite {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_tab_separated_with_quote_comments() {
        let settings = Settings::default();
        assert_eq!(settings.config_path, "~/.ksrc");
        assert_eq!(settings.field_separator, '\t');
        assert_eq!(settings.comment_marker, '"');
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(dir.path().join("missing.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            config_path: "/tmp/shortcuts".to_string(),
            field_separator: ' ',
            comment_marker: '#',
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn partial_settings_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"config_path": "/tmp/custom"}"#).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.config_path, "/tmp/custom");
        assert_eq!(loaded.field_separator, '\t');
    }

    #[test]
    fn invalid_settings_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(Settings::load_from(&path).is_err());
    }
}
