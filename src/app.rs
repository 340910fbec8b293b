//! メインアプリケーション構造体
//!
//! スタンドアロンのTUIシェル。定義ファイルの読み込み、パレットの
//! 開閉、ホスト参照実装（レジストリ・テキストバッファ）への
//! ディスパッチを統合する。

use crate::config::{ConfigLoader, Settings};
use crate::dispatch::{dispatch, insert_identifier, render_action_label, render_label};
use crate::error::{KeiretsuError, Result, UiError};
use crate::host::{ActionInfo, ActionRegistry, BufferEditor, StaticActionRegistry, TextEditor};
use crate::input::{translate_edit_key, translate_palette_key, EditInput, ShellCommand};
use crate::palette::{InsertOutcome, InsertPalette, PaletteOutcome, SequencePalette};
use crate::table::TableStore;
use crate::ui::{PaletteRenderer, PaletteViewModel};
use crossterm::event::{self, Event, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

/// 表示中のパレット
#[derive(Debug)]
enum ActivePalette {
    None,
    Sequence(SequencePalette),
    Insert(InsertPalette),
}

/// メインアプリケーション構造体
pub struct App {
    /// 設定ファイルの保存先（None なら永続化しない）
    settings_path: Option<PathBuf>,
    loader: ConfigLoader,
    store: TableStore,
    registry: StaticActionRegistry,
    editor: BufferEditor,
    active: ActivePalette,
    renderer: PaletteRenderer,
    /// ステータス行のメッセージ
    message: Option<String>,
    running: bool,
}

impl App {
    /// 既定の設定置き場から設定を読み込んで起動する
    pub fn new() -> Result<Self> {
        let settings_path = Settings::default_settings_path();
        let settings = match &settings_path {
            Some(path) => Settings::load_from(path)?,
            None => Settings::default(),
        };

        let mut app = Self::with_settings(settings);
        app.settings_path = settings_path;
        app.reload();
        Ok(app)
    }

    /// 設定を直接与えて構築する（永続化なし・初回読み込みなし）
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings_path: None,
            loader: ConfigLoader::new(settings),
            store: TableStore::new(),
            registry: StaticActionRegistry::with_actions(sample_actions()),
            editor: BufferEditor::new(),
            active: ActivePalette::None,
            renderer: PaletteRenderer::new(),
            message: None,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn registry(&self) -> &StaticActionRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut StaticActionRegistry {
        &mut self.registry
    }

    pub fn editor(&self) -> &BufferEditor {
        &self.editor
    }

    pub fn store(&self) -> &TableStore {
        &self.store
    }

    /// パレットを表示中か
    pub fn palette_is_open(&self) -> bool {
        !matches!(self.active, ActivePalette::None)
    }

    /// 設定を差し替えて保存し、即座に再読み込みする
    pub fn apply_settings(&mut self, settings: Settings) -> Result<()> {
        if let Some(path) = &self.settings_path {
            settings.save_to(path)?;
        }
        self.loader.set_settings(settings);
        self.reload();
        Ok(())
    }

    /// 定義ファイルを再読み込みする
    ///
    /// 失敗時は直前のテーブルが有効なまま残る。
    fn reload(&mut self) {
        match self.loader.load_into(&mut self.store) {
            Ok(report) => {
                self.message = Some(format!(
                    "Loaded {} key sequences ({} lines skipped)",
                    report.entry_count, report.skipped_lines
                ));
            }
            Err(err) => {
                let detail = match &err {
                    KeiretsuError::Config(config_err) => config_err.to_string(),
                    other => other.to_string(),
                };
                self.message = Some(format!("Config load failed: {}", detail));
            }
        }
    }

    /// 公開コマンドを実行する
    pub fn execute_command(&mut self, command: ShellCommand) {
        match command {
            ShellCommand::OpenSequencePalette => {
                self.active = ActivePalette::Sequence(SequencePalette::open());
            }
            ShellCommand::OpenInsertPalette => {
                self.active = ActivePalette::Insert(InsertPalette::open(self.registry.list_actions()));
            }
            ShellCommand::ReloadConfig => self.reload(),
            ShellCommand::Quit => self.running = false,
        }
    }

    /// キーイベントを処理する
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        let active = std::mem::replace(&mut self.active, ActivePalette::None);
        match active {
            ActivePalette::Sequence(mut palette) => {
                let Some(event) = translate_palette_key(key) else {
                    self.active = ActivePalette::Sequence(palette);
                    return Ok(());
                };
                let table = self.store.snapshot();
                match palette.handle_event(event, &table) {
                    PaletteOutcome::Pending => self.active = ActivePalette::Sequence(palette),
                    PaletteOutcome::Dispatch(entry) => {
                        dispatch(&mut self.registry, &entry);
                        self.message = Some(format!("Executed {}", render_label(&entry)));
                    }
                    PaletteOutcome::Cancelled => {}
                }
            }
            ActivePalette::Insert(mut palette) => {
                let Some(event) = translate_palette_key(key) else {
                    self.active = ActivePalette::Insert(palette);
                    return Ok(());
                };
                match palette.handle_event(event) {
                    InsertOutcome::Pending => self.active = ActivePalette::Insert(palette),
                    InsertOutcome::Insert(action) => {
                        let position = self.editor.cursor_position();
                        let new_position =
                            insert_identifier(&mut self.editor, &action, position)?;
                        self.editor.set_cursor(new_position);
                        self.message = Some(format!("Inserted {}", action.id));
                    }
                    InsertOutcome::Cancelled => {}
                }
            }
            ActivePalette::None => match translate_edit_key(key) {
                EditInput::Command(command) => self.execute_command(command),
                EditInput::InsertChar(ch) => self.editor.type_char(ch),
                EditInput::InsertNewline => self.editor.type_char('\n'),
                EditInput::DeleteBackward => self.editor.delete_backward(),
                EditInput::Ignored => {}
            },
        }
        Ok(())
    }

    /// メインイベントループを実行
    pub fn run(&mut self) -> Result<()> {
        enter_terminal()?;

        let backend = CrosstermBackend::new(stdout());
        let mut terminal =
            Terminal::new(backend).map_err(|err| terminal_error("terminal init", err))?;
        terminal
            .hide_cursor()
            .map_err(|err| terminal_error("hide cursor", err))?;

        let loop_result = self.event_loop(&mut terminal);
        let show_cursor_result = terminal
            .show_cursor()
            .map_err(|err| terminal_error("show cursor", err));
        drop(terminal);
        let cleanup_result = leave_terminal();

        loop_result.and(show_cursor_result).and(cleanup_result)
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        while self.running {
            terminal
                .draw(|frame| self.render(frame))
                .map_err(|err| terminal_error("render", err))?;

            if event::poll(Duration::from_millis(16))
                .map_err(|err| terminal_error("event poll", err))?
            {
                match event::read().map_err(|err| terminal_error("event read", err))? {
                    Event::Key(key_event) => self.handle_key_event(key_event)?,
                    Event::Resize(_, _) => {}
                    Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
                }
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut ratatui::Frame<'_>) {
        let [body, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        let text = Paragraph::new(self.editor.text().to_string())
            .block(Block::default().borders(Borders::ALL).title("keiretsu"));
        frame.render_widget(text, body);

        let hint = "C-k palette  C-o insert id  C-r reload  C-q quit";
        let status_text = self.message.as_deref().unwrap_or(hint);
        frame.render_widget(
            Paragraph::new(Line::from(status_text.to_string()))
                .style(Style::default().fg(Color::DarkGray)),
            status,
        );

        if let Some(view) = self.palette_view() {
            let area = frame.area();
            self.renderer.render(frame, area, &view);
        }
    }

    /// 表示中パレットのビューを組み立てる
    fn palette_view(&self) -> Option<PaletteViewModel> {
        match &self.active {
            ActivePalette::None => None,
            ActivePalette::Sequence(palette) => {
                let table = self.store.snapshot();
                let rows = palette
                    .candidates(&table)
                    .into_iter()
                    .map(render_label)
                    .collect();
                Some(PaletteViewModel {
                    title: "Key Sequence".to_string(),
                    query: palette.query().to_string(),
                    rows,
                    selected: palette.selected_index(),
                })
            }
            ActivePalette::Insert(palette) => {
                let rows = palette
                    .candidates()
                    .into_iter()
                    .map(render_action_label)
                    .collect();
                Some(PaletteViewModel {
                    title: "Insert Action Id".to_string(),
                    query: palette.query().to_string(),
                    rows,
                    selected: palette.selected_index(),
                })
            }
        }
    }
}

/// シェル同梱のサンプルアクション
///
/// スタンドアロン実行時のデモ用。ホストに組み込む場合は
/// ホスト自身のレジストリ実装に置き換わる。
fn sample_actions() -> Vec<ActionInfo> {
    vec![
        ActionInfo::new("editor:toggle-bullet-list", "Toggle bullet list"),
        ActionInfo::new("editor:toggle-checklist", "Toggle checklist"),
        ActionInfo::new("editor:insert-date", "Insert date"),
        ActionInfo::new("workspace:split-vertical", "Split pane vertically"),
        ActionInfo::new("workspace:close", "Close pane"),
    ]
}

fn enter_terminal() -> Result<()> {
    enable_raw_mode().map_err(|_| KeiretsuError::Ui(UiError::TerminalInit))?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)
        .map_err(|err| terminal_error("enter alternate screen", err))?;
    Ok(())
}

fn leave_terminal() -> Result<()> {
    let mut out = stdout();
    execute!(out, LeaveAlternateScreen)
        .map_err(|err| terminal_error("leave alternate screen", err))?;
    disable_raw_mode().map_err(|err| terminal_error("disable raw mode", err))?;
    Ok(())
}

fn terminal_error(context: &str, err: impl std::fmt::Display) -> KeiretsuError {
    KeiretsuError::Ui(UiError::RenderingFailed {
        component: format!("{}: {}", context, err),
    })
}
