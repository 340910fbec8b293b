//! テキストエディタの参照実装
//!
//! 文字列1本のバッファと文字単位のカーソルを持つ最小実装。
//! スタンドアロンシェルの本文領域とテストで使用する。

use super::TextEditor;
use crate::error::{HostError, Result};

#[derive(Debug, Clone, Default)]
pub struct BufferEditor {
    text: String,
    cursor: usize,
}

impl BufferEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 文字数
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// 文字位置をバイトオフセットへ変換
    fn byte_offset(&self, position: usize) -> Option<usize> {
        if position == self.len_chars() {
            return Some(self.text.len());
        }
        self.text.char_indices().nth(position).map(|(idx, _)| idx)
    }

    /// カーソル位置に1文字挿入してカーソルを進める
    pub fn type_char(&mut self, ch: char) {
        let cursor = self.cursor;
        if self.insert_at(cursor, &ch.to_string()).is_ok() {
            self.cursor += 1;
        }
    }

    /// カーソル直前の1文字を削除
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        if let Some(offset) = self.byte_offset(self.cursor - 1) {
            self.text.remove(offset);
            self.cursor -= 1;
        }
    }
}

impl TextEditor for BufferEditor {
    fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn insert_at(&mut self, position: usize, text: &str) -> Result<()> {
        let offset = self
            .byte_offset(position)
            .ok_or_else(|| HostError::InvalidCursorPosition {
                position,
                length: self.len_chars(),
            })?;
        self.text.insert_str(offset, text);
        Ok(())
    }

    fn set_cursor(&mut self, position: usize) {
        self.cursor = position.min(self.len_chars());
    }
}
