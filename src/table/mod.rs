//! マッピングテーブル
//!
//! キーシーケンス→アクションIDの対応表と、その単一所有者コンテナを定義。
//! テーブルは読み込みのたびに丸ごと差し替えられ、部分更新は行わない。

use std::sync::Arc;

/// 設定された1件のショートカット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// ユーザーが入力する短い文字列（空にならない）
    pub sequence: String,
    /// ホストのアクションレジストリが解釈する不透明ID（空にならない）
    pub action_id: String,
    /// 表示用ラベル。空文字列のときは action_id を表示に使う
    pub description: String,
}

impl MappingEntry {
    pub fn new(
        sequence: impl Into<String>,
        action_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            sequence: sequence.into(),
            action_id: action_id.into(),
            description: description.into(),
        }
    }

    /// 表示名を取得（description が空なら action_id）
    pub fn display_name(&self) -> &str {
        if self.description.is_empty() {
            &self.action_id
        } else {
            &self.description
        }
    }
}

/// 現在有効な対応表全体
///
/// ファイル内の定義順を保持する。重複した sequence も保持され、
/// 検索時には先勝ちで解決される（resolver 参照）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
}

impl MappingTable {
    /// 空のテーブルを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// エントリ列からテーブルを構築（順序保持）
    pub fn from_entries(entries: Vec<MappingEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 定義順のエントリ一覧
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingEntry> {
        self.entries.iter()
    }
}

/// テーブルの単一書き込み者コンテナ
///
/// 差し替えは参照の付け替え1回で完了するため、読み手が
/// 半端な状態のテーブルを観測することはない。読み手は
/// `snapshot()` で取得した参照を使い続けられる。
#[derive(Debug)]
pub struct TableStore {
    current: Arc<MappingTable>,
}

impl TableStore {
    /// 空のテーブルを持つストアを作成
    pub fn new() -> Self {
        Self {
            current: Arc::new(MappingTable::new()),
        }
    }

    /// 現在のテーブルのスナップショットを取得
    pub fn snapshot(&self) -> Arc<MappingTable> {
        Arc::clone(&self.current)
    }

    /// テーブルを丸ごと差し替える
    pub fn replace(&mut self, table: MappingTable) {
        self.current = Arc::new(table);
    }
}

impl Default for TableStore {
    fn default() -> Self {
        Self::new()
    }
}
