//! 識別子挿入パレット
//!
//! レジストリの登録アクション一覧から1件を選び、そのIDと
//! 表示名をテキストバッファへ挿入するための逆引きパレット。
//! 絞り込みはラベルの部分文字列一致（あいまい一致はしない）。

use super::PaletteEvent;
use crate::dispatch::render_action_label;
use crate::host::ActionInfo;

/// 挿入パレットの処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// セッション継続
    Pending,
    /// このアクションを挿入してセッションを閉じる
    Insert(ActionInfo),
    /// 副作用なしでセッションを閉じる
    Cancelled,
}

/// 識別子挿入パレット
///
/// 候補一覧はパレットを開いた時点のレジストリ列挙で固定される。
#[derive(Debug, Clone)]
pub struct InsertPalette {
    actions: Vec<ActionInfo>,
    query: String,
    selected: usize,
    closed: bool,
}

impl InsertPalette {
    /// レジストリ列挙からパレットを開く
    pub fn open(actions: Vec<ActionInfo>) -> Self {
        Self {
            actions,
            query: String::new(),
            selected: 0,
            closed: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// 現在の絞り込み結果（列挙順）
    pub fn candidates(&self) -> Vec<&ActionInfo> {
        self.actions
            .iter()
            .filter(|action| render_action_label(action).contains(&self.query))
            .collect()
    }

    /// イベントを処理する
    pub fn handle_event(&mut self, event: PaletteEvent) -> InsertOutcome {
        if self.closed {
            return InsertOutcome::Pending;
        }

        match event {
            PaletteEvent::Input(ch) => {
                self.query.push(ch);
                self.selected = 0;
                InsertOutcome::Pending
            }
            PaletteEvent::Backspace => {
                self.query.pop();
                self.selected = 0;
                InsertOutcome::Pending
            }
            PaletteEvent::SelectNext => {
                let count = self.candidates().len();
                if count > 0 {
                    self.selected = (self.selected + 1) % count;
                }
                InsertOutcome::Pending
            }
            PaletteEvent::SelectPrevious => {
                let count = self.candidates().len();
                if count > 0 {
                    self.selected = (self.selected + count - 1) % count;
                }
                InsertOutcome::Pending
            }
            PaletteEvent::Accept => {
                let chosen = self.candidates().get(self.selected).cloned().cloned();
                match chosen {
                    Some(action) => {
                        self.closed = true;
                        InsertOutcome::Insert(action)
                    }
                    None => InsertOutcome::Pending,
                }
            }
            PaletteEvent::Cancel => {
                self.closed = true;
                InsertOutcome::Cancelled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_actions() -> Vec<ActionInfo> {
        vec![
            ActionInfo::new("editor:toggle-bullet-list", "Toggle bullet list"),
            ActionInfo::new("editor:go-back", "Go back"),
            ActionInfo::new("workspace:close", "Close pane"),
        ]
    }

    #[test]
    fn open_lists_every_action() {
        let palette = InsertPalette::open(sample_actions());
        assert_eq!(palette.candidates().len(), 3);
    }

    #[test]
    fn query_filters_by_substring_of_label() {
        let mut palette = InsertPalette::open(sample_actions());
        for ch in "back".chars() {
            palette.handle_event(PaletteEvent::Input(ch));
        }
        let candidates = palette.candidates();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, "editor:go-back");
    }

    #[test]
    fn id_text_also_matches() {
        let mut palette = InsertPalette::open(sample_actions());
        for ch in "workspace:".chars() {
            palette.handle_event(PaletteEvent::Input(ch));
        }
        assert_eq!(palette.candidates().len(), 1);
    }

    #[test]
    fn accept_returns_selected_action() {
        let mut palette = InsertPalette::open(sample_actions());
        palette.handle_event(PaletteEvent::SelectNext);

        let outcome = palette.handle_event(PaletteEvent::Accept);
        match outcome {
            InsertOutcome::Insert(action) => assert_eq!(action.id, "editor:go-back"),
            other => panic!("Expected insert, got {:?}", other),
        }

        // 確定後のイベントは無視される
        assert_eq!(
            palette.handle_event(PaletteEvent::Accept),
            InsertOutcome::Pending
        );
    }

    #[test]
    fn accept_with_no_match_stays_open() {
        let mut palette = InsertPalette::open(sample_actions());
        palette.handle_event(PaletteEvent::Input('z'));
        palette.handle_event(PaletteEvent::Input('z'));
        assert!(palette.candidates().is_empty());
        assert_eq!(
            palette.handle_event(PaletteEvent::Accept),
            InsertOutcome::Pending
        );
    }

    #[test]
    fn cancel_closes_without_choice() {
        let mut palette = InsertPalette::open(sample_actions());
        assert_eq!(
            palette.handle_event(PaletteEvent::Cancel),
            InsertOutcome::Cancelled
        );
    }
}
