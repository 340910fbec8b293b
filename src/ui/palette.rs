//! パレット描画
//!
//! 画面中央のオーバーレイとして入力行と候補一覧を描画する

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// パレットの表示内容
///
/// コントローラの状態から組み立てる描画専用のビュー。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteViewModel {
    /// 枠のタイトル
    pub title: String,
    /// 入力中の文字列
    pub query: String,
    /// 候補ラベル（表示順）
    pub rows: Vec<String>,
    /// 選択中の候補インデックス
    pub selected: usize,
}

/// パレット描画器
#[derive(Debug)]
pub struct PaletteRenderer {
    /// 一度に表示する候補数の上限
    max_rows: usize,
}

impl PaletteRenderer {
    pub fn new() -> Self {
        Self { max_rows: 8 }
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows.max(1);
        self
    }

    /// パレットをオーバーレイとして描画する
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, view: &PaletteViewModel) {
        let overlay = self.overlay_area(area, view);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(view.title.clone());
        let inner_width = overlay.width.saturating_sub(2) as usize;

        let mut lines = Vec::with_capacity(self.max_rows + 1);
        lines.push(
            Line::from(truncate_to_width(&format!("> {}", view.query), inner_width))
                .style(Style::default().fg(Color::Cyan)),
        );

        // 選択中の候補が常に見えるようにスクロールする
        let offset = self.scroll_offset(view);
        for (index, row) in view.rows.iter().enumerate().skip(offset).take(self.max_rows) {
            let mut line = Line::from(truncate_to_width(row, inner_width));
            if index == view.selected {
                line = line.style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                );
            }
            lines.push(line);
        }

        if view.rows.is_empty() {
            lines.push(Line::from("(no matches)").style(Style::default().fg(Color::DarkGray)));
        }

        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }

    fn scroll_offset(&self, view: &PaletteViewModel) -> usize {
        if view.selected < self.max_rows {
            0
        } else {
            view.selected + 1 - self.max_rows
        }
    }

    fn overlay_area(&self, area: Rect, view: &PaletteViewModel) -> Rect {
        let width = area.width.saturating_sub(4).min(60).max(20).min(area.width);
        let visible_rows = view.rows.len().clamp(1, self.max_rows) as u16;
        // 枠2行 + 入力行1行 + 候補行
        let height = (visible_rows + 3).min(area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 3;
        Rect::new(x, y, width, height)
    }
}

impl Default for PaletteRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// 表示幅が収まるように文字列を切り詰める
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut result = String::new();
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + char_width > max_width {
            break;
        }
        width += char_width;
        result.push(ch);
    }
    result
}
