//! ホスト連携インターフェース
//!
//! パレット本体はホストアプリケーションの実装に依存しない。
//! アクション実行・列挙とテキスト編集はケーパビリティトレイトとして
//! 切り出し、スタンドアロンシェルとテストには参照実装を提供する。

pub mod editor;
pub mod registry;

pub use editor::BufferEditor;
pub use registry::StaticActionRegistry;

use crate::error::Result;

/// 登録済みアクションの情報（ID + 表示名）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInfo {
    pub id: String,
    pub name: String,
}

impl ActionInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// ホストのアクションレジストリ
///
/// 実行結果は解釈しない。未知のIDの扱い（無視・通知など）は
/// ホスト側の責務。設定読み込み時点でレジストリが完成している
/// 保証はないため、事前検証は行わない。
pub trait ActionRegistry {
    /// 不透明IDでアクションを実行する
    fn execute_action(&mut self, action_id: &str);

    /// 登録済みアクションを列挙する（挿入パレット用）
    fn list_actions(&self) -> Vec<ActionInfo>;
}

/// ホストのテキストエディタ
///
/// カーソル位置は文字単位。挿入系パレットのみが使用する。
pub trait TextEditor {
    /// 現在のカーソル位置（文字単位）
    fn cursor_position(&self) -> usize;

    /// 指定位置にテキストを挿入する
    fn insert_at(&mut self, position: usize, text: &str) -> Result<()>;

    /// カーソルを移動する
    fn set_cursor(&mut self, position: usize);
}
