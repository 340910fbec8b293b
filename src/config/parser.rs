//! ショートカット定義ファイルの解析
//!
//! 行指向テキストを検証済みのマッピングテーブルへ変換する。
//! 解析は純粋関数で、不正な行はスキップして診断に記録するのみ。
//! 失敗しても全体の読み込みが中断されることはない。

use crate::table::{MappingEntry, MappingTable};

/// 解析の設定値
///
/// 区切り文字とコメントマーカーは運用によって異なる
/// （タブ区切りとスペース区切りの両方の実績がある）ため
/// 定数ではなく設定値として扱う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// フィールド区切り文字
    pub field_separator: char,
    /// 行頭コメントマーカー
    pub comment_marker: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            field_separator: '\t',
            comment_marker: '"',
        }
    }
}

/// 行をスキップした理由
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("expected 2 or 3 fields, found {0}")]
    FieldCount(usize),

    #[error("key sequence field is empty")]
    EmptySequence,

    #[error("action id field is empty")]
    EmptyActionId,
}

/// スキップされた行の診断情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// 1始まりの行番号
    pub line_number: usize,
    /// トリム後の行内容
    pub line: String,
    /// スキップ理由
    pub reason: SkipReason,
}

/// 解析結果（テーブル + 診断の列）
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub table: MappingTable,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// 定義テキストを解析してテーブルを構築する
///
/// * 空行と、先頭文字がコメントマーカーの行は黙ってスキップ
/// * 区切り文字で分割して 2 または 3 フィールドの行のみ受理
///   （3番目の description は省略可、省略時は空文字列）
/// * それ以外のフィールド数、および sequence / action_id が
///   空になる行は診断付きでスキップ
/// * 重複した sequence は両方保持される。検索は先勝ちなので
///   ファイル内で先に書かれた定義が優先される
pub fn parse(raw: &str, options: &ParseOptions) -> ParseOutcome {
    let mut entries = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, raw_line) in raw.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with(options.comment_marker) {
            continue;
        }

        let fields: Vec<&str> = line.split(options.field_separator).collect();
        if fields.len() != 2 && fields.len() != 3 {
            diagnostics.push(ParseDiagnostic {
                line_number: index + 1,
                line: line.to_string(),
                reason: SkipReason::FieldCount(fields.len()),
            });
            continue;
        }

        let sequence = fields[0];
        let action_id = fields[1];
        let description = fields.get(2).copied().unwrap_or("");

        if sequence.is_empty() {
            diagnostics.push(ParseDiagnostic {
                line_number: index + 1,
                line: line.to_string(),
                reason: SkipReason::EmptySequence,
            });
            continue;
        }
        if action_id.is_empty() {
            diagnostics.push(ParseDiagnostic {
                line_number: index + 1,
                line: line.to_string(),
                reason: SkipReason::EmptyActionId,
            });
            continue;
        }

        entries.push(MappingEntry::new(sequence, action_id, description));
    }

    ParseOutcome {
        table: MappingTable::from_entries(entries),
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(raw: &str) -> ParseOutcome {
        parse(raw, &ParseOptions::default())
    }

    #[test]
    fn two_field_line_produces_entry_with_empty_description() {
        let outcome = parse_default("tb\teditor:toggle-bullet-list\n");
        assert_eq!(outcome.table.len(), 1);
        assert!(outcome.diagnostics.is_empty());

        let entry = &outcome.table.entries()[0];
        assert_eq!(entry.sequence, "tb");
        assert_eq!(entry.action_id, "editor:toggle-bullet-list");
        assert_eq!(entry.description, "");
    }

    #[test]
    fn three_field_line_keeps_description() {
        let outcome = parse_default("x\ta\tb\n");
        assert_eq!(outcome.table.len(), 1);
        let entry = &outcome.table.entries()[0];
        assert_eq!(entry.sequence, "x");
        assert_eq!(entry.action_id, "a");
        assert_eq!(entry.description, "b");
    }

    #[test]
    fn comment_lines_contribute_nothing() {
        let outcome = parse_default("\" comment\nm\tdo-thing\n");
        assert_eq!(outcome.table.len(), 1);
        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.table.entries()[0].sequence, "m");
    }

    #[test]
    fn hash_line_under_quote_marker_is_malformed_not_comment() {
        // 既定のマーカーは '"' なので '#' 始まりの行はコメントではなく、
        // 区切り文字を含まない不正行として診断される
        let outcome = parse_default("# comment\nm\tdo-thing\n");
        assert_eq!(outcome.table.len(), 1);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].reason, SkipReason::FieldCount(1));
    }

    #[test]
    fn alternative_comment_marker_is_respected() {
        let options = ParseOptions {
            comment_marker: '#',
            ..ParseOptions::default()
        };
        let outcome = parse("# comment\nm\tdo-thing\n", &options);
        assert_eq!(outcome.table.len(), 1);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn malformed_line_is_skipped_with_diagnostic() {
        let outcome = parse_default("bad-line-one-field\n");
        assert!(outcome.table.is_empty());
        assert_eq!(outcome.diagnostics.len(), 1);

        let diagnostic = &outcome.diagnostics[0];
        assert_eq!(diagnostic.line_number, 1);
        assert_eq!(diagnostic.reason, SkipReason::FieldCount(1));
    }

    #[test]
    fn four_field_line_is_rejected() {
        let outcome = parse_default("a\tb\tc\td\n");
        assert!(outcome.table.is_empty());
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].reason, SkipReason::FieldCount(4));
    }

    #[test]
    fn empty_sequence_or_action_is_rejected() {
        let outcome = parse_default("\tcmd\nseq\t\n");
        assert!(outcome.table.is_empty());
        assert_eq!(outcome.diagnostics.len(), 2);
        assert_eq!(outcome.diagnostics[0].reason, SkipReason::EmptySequence);
        assert_eq!(outcome.diagnostics[1].reason, SkipReason::EmptyActionId);
    }

    #[test]
    fn space_separator_splits_fields() {
        let options = ParseOptions {
            field_separator: ' ',
            comment_marker: '#',
        };
        let outcome = parse("gb editor:go-back Back\n", &options);
        assert_eq!(outcome.table.len(), 1);
        let entry = &outcome.table.entries()[0];
        assert_eq!(entry.sequence, "gb");
        assert_eq!(entry.action_id, "editor:go-back");
        assert_eq!(entry.description, "Back");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let outcome = parse_default("  tb\tcmd  \n");
        assert_eq!(outcome.table.len(), 1);
        assert_eq!(outcome.table.entries()[0].sequence, "tb");
        assert_eq!(outcome.table.entries()[0].action_id, "cmd");
    }

    #[test]
    fn duplicate_sequences_are_both_kept_in_order() {
        let outcome = parse_default("m\tfirst\nm\tsecond\n");
        assert_eq!(outcome.table.len(), 2);
        assert_eq!(outcome.table.entries()[0].action_id, "first");
        assert_eq!(outcome.table.entries()[1].action_id, "second");
    }

    #[test]
    fn parsing_is_deterministic() {
        let raw = "tb\tcmd-a\nx\tcmd-b\tlabel\n\" note\nbad\n";
        let first = parse_default(raw);
        let second = parse_default(raw);
        assert_eq!(first.table, second.table);
        assert_eq!(first.diagnostics, second.diagnostics);
    }
}
