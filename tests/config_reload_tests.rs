// config_reload_tests.rs - 定義ファイル読み込み・再読み込みの統合テスト

use keiretsu::config::{ConfigLoader, Settings};
use keiretsu::table::TableStore;
use std::fs;
use tempfile::tempdir;

fn settings_for(path: &std::path::Path) -> Settings {
    Settings {
        config_path: path.display().to_string(),
        ..Settings::default()
    }
}

#[test]
fn reload_replaces_the_table_wholesale() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ksrc");
    fs::write(&path, "a\tcmd-a\nb\tcmd-b\n").unwrap();

    let loader = ConfigLoader::new(settings_for(&path));
    let mut store = TableStore::new();
    loader.load_into(&mut store).unwrap();
    assert_eq!(store.snapshot().len(), 2);

    // ファイルを書き換えて再読み込みすると、前の内容は残らない
    fs::write(&path, "c\tcmd-c\n").unwrap();
    loader.load_into(&mut store).unwrap();

    let table = store.snapshot();
    assert_eq!(table.len(), 1);
    assert_eq!(table.entries()[0].sequence, "c");
}

#[test]
fn failed_reload_keeps_serving_the_previous_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ksrc");
    fs::write(&path, "a\tcmd-a\n").unwrap();

    let loader = ConfigLoader::new(settings_for(&path));
    let mut store = TableStore::new();
    loader.load_into(&mut store).unwrap();

    // 読み手が持っているスナップショットも生き続ける
    let reader_view = store.snapshot();

    fs::remove_file(&path).unwrap();
    assert!(loader.load_into(&mut store).is_err());

    assert_eq!(store.snapshot().len(), 1);
    assert_eq!(reader_view.len(), 1);
}

#[test]
fn settings_change_switches_config_file() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first");
    let second = dir.path().join("second");
    fs::write(&first, "a\tcmd-a\n").unwrap();
    fs::write(&second, "b\tcmd-b\nc\tcmd-c\n").unwrap();

    let mut loader = ConfigLoader::new(settings_for(&first));
    let mut store = TableStore::new();
    loader.load_into(&mut store).unwrap();
    assert_eq!(store.snapshot().len(), 1);

    // 設定変更は即時リロードで反映される
    loader.set_settings(settings_for(&second));
    loader.load_into(&mut store).unwrap();

    let table = store.snapshot();
    assert_eq!(table.len(), 2);
    assert_eq!(table.entries()[0].sequence, "b");
}

#[test]
fn space_separated_config_with_hash_comments() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ksrc");
    fs::write(&path, "# comment\ngb editor:go-back\ntb editor:toggle-bullet-list Bullets\n").unwrap();

    let settings = Settings {
        config_path: path.display().to_string(),
        field_separator: ' ',
        comment_marker: '#',
    };
    let loader = ConfigLoader::new(settings);
    let mut store = TableStore::new();
    let report = loader.load_into(&mut store).unwrap();

    assert_eq!(report.entry_count, 2);
    assert_eq!(report.skipped_lines, 0);

    let table = store.snapshot();
    assert_eq!(table.entries()[1].description, "Bullets");
}

#[test]
fn persisted_settings_round_trip_drives_the_loader() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    let config_path = dir.path().join("shortcuts");
    fs::write(&config_path, "x\ta\tb\n").unwrap();

    let settings = settings_for(&config_path);
    settings.save_to(&settings_path).unwrap();

    let loaded = Settings::load_from(&settings_path).unwrap();
    let loader = ConfigLoader::new(loaded);
    let mut store = TableStore::new();
    loader.load_into(&mut store).unwrap();

    let table = store.snapshot();
    assert_eq!(table.len(), 1);
    assert_eq!(table.entries()[0].description, "b");
}
