//! 入力変換
//!
//! crossterm のキーイベントをシェルコマンドとパレットイベントへ
//! 変換する。変換は純粋関数で、モードの保持はシェル側が行う。

use crate::palette::PaletteEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// ホストへ公開されるコマンド
///
/// いずれも引数なしでユーザーが起動できる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// キーシーケンスパレットを開く
    OpenSequencePalette,
    /// 識別子挿入パレットを開く
    OpenInsertPalette,
    /// 定義ファイルを再読み込みする
    ReloadConfig,
    /// シェルを終了する
    Quit,
}

/// 編集モードでのキー入力の解釈結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditInput {
    Command(ShellCommand),
    InsertChar(char),
    InsertNewline,
    DeleteBackward,
    Ignored,
}

/// 編集モードのキーを解釈する
pub fn translate_edit_key(event: KeyEvent) -> EditInput {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    if ctrl && !alt {
        return match event.code {
            KeyCode::Char('k') => EditInput::Command(ShellCommand::OpenSequencePalette),
            KeyCode::Char('o') => EditInput::Command(ShellCommand::OpenInsertPalette),
            KeyCode::Char('r') => EditInput::Command(ShellCommand::ReloadConfig),
            KeyCode::Char('q') | KeyCode::Char('c') => EditInput::Command(ShellCommand::Quit),
            _ => EditInput::Ignored,
        };
    }

    match event.code {
        KeyCode::Char(ch) if !alt => EditInput::InsertChar(ch),
        KeyCode::Enter => EditInput::InsertNewline,
        KeyCode::Backspace => EditInput::DeleteBackward,
        _ => EditInput::Ignored,
    }
}

/// パレット表示中のキーを解釈する
///
/// 解釈できないキーは None（無視）。
pub fn translate_palette_key(event: KeyEvent) -> Option<PaletteEvent> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    if ctrl && !alt {
        return match event.code {
            // C-g は Emacs 風キャンセル
            KeyCode::Char('g') => Some(PaletteEvent::Cancel),
            KeyCode::Char('n') => Some(PaletteEvent::SelectNext),
            KeyCode::Char('p') => Some(PaletteEvent::SelectPrevious),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Char(ch) if !alt => Some(PaletteEvent::Input(ch)),
        KeyCode::Backspace => Some(PaletteEvent::Backspace),
        KeyCode::Enter => Some(PaletteEvent::Accept),
        KeyCode::Esc => Some(PaletteEvent::Cancel),
        KeyCode::Down => Some(PaletteEvent::SelectNext),
        KeyCode::Up => Some(PaletteEvent::SelectPrevious),
        _ => None,
    }
}
