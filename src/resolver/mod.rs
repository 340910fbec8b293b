//! シーケンスリゾルバ
//!
//! 入力中のプレフィックスに対する候補列挙と完全一致検出を提供する。
//! 候補列はキーストロークごとにテーブルから再計算され、
//! 呼び出し間で増分状態を持たない。

use crate::table::{MappingEntry, MappingTable};

/// プレフィックスに前方一致するエントリを定義順で列挙する
///
/// 空のプレフィックスはテーブル全体を返す。
pub fn filter_by_prefix<'a>(
    table: &'a MappingTable,
    prefix: &'a str,
) -> impl Iterator<Item = &'a MappingEntry> + 'a {
    table
        .iter()
        .filter(move |entry| entry.sequence.starts_with(prefix))
}

/// プレフィックスと完全一致する最初のエントリを返す
///
/// 重複定義がある場合は定義順で先のものが勝つ。
pub fn find_exact<'a>(table: &'a MappingTable, prefix: &str) -> Option<&'a MappingEntry> {
    table.iter().find(|entry| entry.sequence == prefix)
}

/// 対話セッションの状態
///
/// `Dispatched` と `Cancelled` は終端状態。再入力には
/// 新しいセッションを開く必要がある。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Typing,
    Dispatched,
    Cancelled,
}

/// 1回の対話的検索のための一時状態
///
/// 入力中のプレフィックスは1文字ずつ伸縮するか、丸ごとリセットされる。
#[derive(Debug, Clone)]
pub struct QuerySession {
    prefix: String,
    state: SessionState,
}

impl QuerySession {
    /// セッションを開く（Idle → Typing）
    pub fn open() -> Self {
        Self {
            prefix: String::new(),
            state: SessionState::Typing,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// 入力を受け付け可能か
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Typing
    }

    /// 1文字追加
    pub fn push_char(&mut self, ch: char) {
        if self.is_active() {
            self.prefix.push(ch);
        }
    }

    /// 末尾の1文字を削除
    pub fn pop_char(&mut self) {
        if self.is_active() {
            self.prefix.pop();
        }
    }

    /// プレフィックスを空にリセット
    pub fn reset(&mut self) {
        if self.is_active() {
            self.prefix.clear();
        }
    }

    /// 現在のプレフィックスに対する候補一覧（定義順）
    pub fn candidates<'a>(&'a self, table: &'a MappingTable) -> Vec<&'a MappingEntry> {
        filter_by_prefix(table, &self.prefix).collect()
    }

    /// 現在のプレフィックスと完全一致するエントリ
    pub fn exact_match<'a>(&self, table: &'a MappingTable) -> Option<&'a MappingEntry> {
        if !self.is_active() {
            return None;
        }
        find_exact(table, &self.prefix)
    }

    /// ディスパッチ済みとして終端化（Typing → Dispatched）
    pub fn mark_dispatched(&mut self) {
        if self.is_active() {
            self.state = SessionState::Dispatched;
        }
    }

    /// キャンセルとして終端化（Typing → Cancelled）。副作用はない
    pub fn mark_cancelled(&mut self) {
        if self.is_active() {
            self.state = SessionState::Cancelled;
        }
    }
}
