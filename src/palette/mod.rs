//! パレットコントローラ
//!
//! 対話的な検索セッションをUI非依存のイベント処理として実装する。
//! 描画とキー変換はシェル側（ui / input）の責務で、ここは
//! イベント→状態遷移→結果のみを扱う。

pub mod insert;

pub use insert::{InsertOutcome, InsertPalette};

use crate::resolver::QuerySession;
use crate::table::{MappingEntry, MappingTable};

/// パレットへの入力イベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteEvent {
    /// 1文字入力
    Input(char),
    /// 末尾1文字削除
    Backspace,
    /// 候補選択を下へ
    SelectNext,
    /// 候補選択を上へ
    SelectPrevious,
    /// 選択中の候補で確定
    Accept,
    /// 明示的な中断
    Cancel,
}

/// キーシーケンスパレットの処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteOutcome {
    /// セッション継続
    Pending,
    /// このエントリをディスパッチしてセッションを閉じる
    Dispatch(MappingEntry),
    /// 副作用なしでセッションを閉じる
    Cancelled,
}

/// キーシーケンスパレット
///
/// 1キーストロークごとに候補を再計算し、入力がいずれかの
/// sequence と完全一致した瞬間に自動確定する。より長い
/// sequence が同じプレフィックスを持っていても待たない
/// （"m" と "mm" が定義されていれば "m" の入力で即発火し、
/// "mm" には到達できない）。
#[derive(Debug, Clone)]
pub struct SequencePalette {
    session: QuerySession,
    selected: usize,
}

impl SequencePalette {
    /// パレットを開く
    pub fn open() -> Self {
        Self {
            session: QuerySession::open(),
            selected: 0,
        }
    }

    /// 現在の入力文字列
    pub fn query(&self) -> &str {
        self.session.prefix()
    }

    /// 選択中の候補インデックス
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// 現在の候補一覧（定義順）
    pub fn candidates<'a>(&'a self, table: &'a MappingTable) -> Vec<&'a MappingEntry> {
        self.session.candidates(table)
    }

    /// イベントを処理する
    pub fn handle_event(&mut self, event: PaletteEvent, table: &MappingTable) -> PaletteOutcome {
        if !self.session.is_active() {
            return PaletteOutcome::Pending;
        }

        match event {
            PaletteEvent::Input(ch) => {
                self.session.push_char(ch);
                self.selected = 0;
                // 完全一致は候補閲覧より優先され、即座に確定する
                if let Some(entry) = self.session.exact_match(table).cloned() {
                    self.session.mark_dispatched();
                    return PaletteOutcome::Dispatch(entry);
                }
                PaletteOutcome::Pending
            }
            PaletteEvent::Backspace => {
                self.session.pop_char();
                self.selected = 0;
                PaletteOutcome::Pending
            }
            PaletteEvent::SelectNext => {
                let count = self.candidates(table).len();
                if count > 0 {
                    self.selected = (self.selected + 1) % count;
                }
                PaletteOutcome::Pending
            }
            PaletteEvent::SelectPrevious => {
                let count = self.candidates(table).len();
                if count > 0 {
                    self.selected = (self.selected + count - 1) % count;
                }
                PaletteOutcome::Pending
            }
            PaletteEvent::Accept => {
                let chosen = self.candidates(table).get(self.selected).cloned().cloned();
                match chosen {
                    Some(entry) => {
                        self.session.mark_dispatched();
                        PaletteOutcome::Dispatch(entry)
                    }
                    None => PaletteOutcome::Pending,
                }
            }
            PaletteEvent::Cancel => {
                self.session.mark_cancelled();
                PaletteOutcome::Cancelled
            }
        }
    }
}
