//! 定義ファイルの読み込み
//!
//! ファイル読み込み→解析→テーブル差し替えの境界を担当する。
//! 読み込みに失敗した場合、ストア内の既存テーブルはそのまま残る。

use crate::config::parser::{parse, ParseOptions};
use crate::config::settings::Settings;
use crate::error::{ConfigError, Result};
use crate::table::TableStore;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// 読み込み結果の要約
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// 受理されたエントリ数
    pub entry_count: usize,
    /// 診断付きでスキップされた行数
    pub skipped_lines: usize,
}

/// 定義ファイルローダー
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: Settings,
}

impl ConfigLoader {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// 設定を差し替える（次回の読み込みから反映）
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// 定義ファイルの実パスを解決（~ と環境変数を展開）
    pub fn resolve_path(&self) -> PathBuf {
        match shellexpand::full(&self.settings.config_path) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(_) => PathBuf::from(&self.settings.config_path),
        }
    }

    /// ファイルを読み込み、テーブルを丸ごと差し替える
    ///
    /// 読み込みエラー時はストアに触れず Err を返すため、
    /// 直前のテーブル（空の場合もある）が有効であり続ける。
    pub fn load_into(&self, store: &mut TableStore) -> Result<LoadReport> {
        let path = self.resolve_path();
        let display_path = path.display().to_string();

        let raw = fs::read_to_string(&path).map_err(|err| {
            log::warn!("failed to read config file {}: {}", display_path, err);
            match err.kind() {
                ErrorKind::NotFound => ConfigError::NotFound { path: display_path.clone() },
                _ => ConfigError::Read {
                    path: display_path.clone(),
                    message: err.to_string(),
                },
            }
        })?;

        let report = self.load_text(&raw, store);
        log::info!(
            "loaded {} key sequences from {} ({} lines skipped)",
            report.entry_count,
            display_path,
            report.skipped_lines
        );
        Ok(report)
    }

    /// テキストを解析してテーブルを差し替える（ファイルI/Oなし）
    pub fn load_text(&self, raw: &str, store: &mut TableStore) -> LoadReport {
        let options: ParseOptions = self.settings.parse_options();
        let outcome = parse(raw, &options);

        for diagnostic in &outcome.diagnostics {
            log::warn!(
                "skip line {} {:?}: {} (expected sequence{:?}action-id{:?}description, description optional)",
                diagnostic.line_number,
                diagnostic.line,
                diagnostic.reason,
                options.field_separator,
                options.field_separator,
            );
        }

        let report = LoadReport {
            entry_count: outcome.table.len(),
            skipped_lines: outcome.diagnostics.len(),
        };
        store.replace(outcome.table);
        report
    }
}
