//! ディスパッチャ
//!
//! 解決済みエントリをホスト側の副作用へ変換する。
//! 候補の表示用ラベル整形もここに置く。

use crate::error::Result;
use crate::host::{ActionInfo, ActionRegistry, TextEditor};
use crate::table::MappingEntry;

/// 候補1件の表示ラベルを整形する
///
/// 形式は `"{sequence}: {description または action_id}"`。
pub fn render_label(entry: &MappingEntry) -> String {
    format!("{}: {}", entry.sequence, entry.display_name())
}

/// 挿入パレットの候補ラベルを整形する（`"{name} -> {id}"`）
pub fn render_action_label(action: &ActionInfo) -> String {
    format!("{} -> {}", action.name, action.id)
}

/// エントリのアクションをホストで実行する
///
/// 戻り値は解釈しない。IDがレジストリに存在するかどうかの
/// 検証も行わない（ホスト側の責務）。
pub fn dispatch(registry: &mut dyn ActionRegistry, entry: &MappingEntry) {
    log::debug!("execute {}: {}", entry.sequence, entry.action_id);
    registry.execute_action(&entry.action_id);
}

/// アクションIDと表示名をカーソル位置へ挿入する
///
/// `"{id}\t{name}"` を書き込み、ID の直後（タブの手前）まで
/// カーソルを進めた新しい位置を返す。位置は文字単位。
pub fn insert_identifier(
    editor: &mut dyn TextEditor,
    action: &ActionInfo,
    position: usize,
) -> Result<usize> {
    let text = format!("{}\t{}", action.id, action.name);
    editor.insert_at(position, &text)?;
    Ok(position + action.id.chars().count())
}
