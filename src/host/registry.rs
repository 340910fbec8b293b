//! アクションレジストリの参照実装

use super::{ActionInfo, ActionRegistry};

/// 固定リストのアクションレジストリ
///
/// スタンドアロンシェルとテストで使用する。実行されたIDを
/// 記録するだけで、IDが登録済みかどうかは検証しない
/// （未知IDの実行は黙って記録される）。
#[derive(Debug, Clone, Default)]
pub struct StaticActionRegistry {
    actions: Vec<ActionInfo>,
    executed: Vec<String>,
}

impl StaticActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actions(actions: Vec<ActionInfo>) -> Self {
        Self {
            actions,
            executed: Vec::new(),
        }
    }

    /// アクションを追加登録する
    ///
    /// ホストのレジストリは起動後に段階的に埋まることがあるため、
    /// 構築後の追加を許す。
    pub fn register(&mut self, action: ActionInfo) {
        self.actions.push(action);
    }

    /// 実行履歴（古い順）
    pub fn executed(&self) -> &[String] {
        &self.executed
    }

    /// 直近に実行されたID
    pub fn last_executed(&self) -> Option<&str> {
        self.executed.last().map(String::as_str)
    }
}

impl ActionRegistry for StaticActionRegistry {
    fn execute_action(&mut self, action_id: &str) {
        self.executed.push(action_id.to_string());
    }

    fn list_actions(&self) -> Vec<ActionInfo> {
        self.actions.clone()
    }
}
