//! Integration tests for JSON task file persistence
//!
//! These tests write real files into a temporary directory and read them
//! back through the public storage API.

mod common;

use common::{create_test_task, datetime, temp_task_file};
use daily_planner::{Error, Item, Storage, load_tasks_from_file, save_tasks_to_file};
use std::fs;

// 保存と読み込みの往復
// Title, description, completion and due date survive a round trip
#[test]
fn test_save_and_load_round_trip() {
    let (_dir, path) = temp_task_file();

    let mut done = Item::new("Zrobić zakupy", "mleko, chleb", Some(datetime(2025, 5, 10, 12, 0))).unwrap();
    done.mark_completed();
    let tasks = vec![
        done,
        Item::with_due_text("Nowe zadanie", "", "2030-07-20").unwrap(),
        create_test_task("Bez terminu"),
    ];

    save_tasks_to_file(&tasks, &path).unwrap();
    let loaded = load_tasks_from_file(&path).unwrap();

    assert_eq!(loaded.len(), tasks.len());
    for (original, restored) in tasks.iter().zip(&loaded) {
        assert_eq!(restored.title(), original.title());
        assert_eq!(restored.description(), original.description());
        assert_eq!(restored.is_completed(), original.is_completed());
        assert_eq!(
            restored.due_date().map(|d| d.date()),
            original.due_date().map(|d| d.date())
        );
    }
    // Creation time is preserved as well, so the tasks compare equal
    assert_eq!(loaded, tasks);
}

// 空リストの往復
#[test]
fn test_empty_list_round_trip() {
    let (_dir, path) = temp_task_file();

    save_tasks_to_file(&[], &path).unwrap();
    assert!(load_tasks_from_file(&path).unwrap().is_empty());
}

// 保存はファイルを上書きする
#[test]
fn test_save_overwrites_existing_file() {
    let (_dir, path) = temp_task_file();
    fs::write(&path, "not json at all").unwrap();

    save_tasks_to_file(&[create_test_task("Only")], &path).unwrap();
    let loaded = load_tasks_from_file(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title(), "Only");
}

// 手書きのファイル：descriptionなし・due_dateがnull
#[test]
fn test_load_handwritten_file() {
    let (_dir, path) = temp_task_file();
    fs::write(
        &path,
        r#"[
  {
    "title": "Buy milk",
    "due_date": null,
    "completed": false,
    "created_at": "2025-05-18T09:30:00.123456"
  },
  {
    "title": "Stare zadanie",
    "description": "  po terminie ",
    "due_date": "2025-05-13T00:00:00",
    "completed": true,
    "created_at": "2025-05-01T08:00:00"
  }
]"#,
    )
    .unwrap();

    let loaded = load_tasks_from_file(&path).unwrap();
    assert_eq!(loaded.len(), 2);

    assert_eq!(loaded[0].description(), "");
    assert_eq!(loaded[0].due_date(), None);
    assert!(!loaded[0].is_completed());
    assert_eq!(loaded[0].to_string(), "[✗] Buy milk (2025-05-18)");

    assert_eq!(loaded[1].description(), "po terminie");
    assert_eq!(loaded[1].due_date(), Some(datetime(2025, 5, 13, 0, 0)));
    assert!(loaded[1].is_completed());
    assert!(loaded[1].is_overdue());
}

// 書き込まれるJSONの形式
#[test]
fn test_written_file_layout() {
    let (_dir, path) = temp_task_file();
    let task = Item::new("Report", "", Some(datetime(2025, 7, 20, 18, 0))).unwrap();
    save_tasks_to_file(&[task], &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let record = &value.as_array().unwrap()[0];

    assert_eq!(record["title"], "Report");
    assert_eq!(record["description"], "");
    assert_eq!(record["due_date"], "2025-07-20T18:00:00");
    assert_eq!(record["completed"], false);
    assert!(record["created_at"].is_string());
    assert!(content.contains('\n'));
}

// 不正なレコードを含むファイルは全体がエラー
#[test]
fn test_invalid_record_fails_whole_load() {
    let (_dir, path) = temp_task_file();
    fs::write(
        &path,
        r#"[{"title": "Fine", "due_date": null, "completed": false},
            {"title": "   ", "due_date": null, "completed": false}]"#,
    )
    .unwrap();

    assert!(matches!(load_tasks_from_file(&path), Err(Error::Validation(_))));
}

// 存在しないファイル
#[test]
fn test_missing_file() {
    let (_dir, path) = temp_task_file();

    assert!(matches!(load_tasks_from_file(&path), Err(Error::Io(_))));
    assert!(Storage::new(&path).load().unwrap().is_empty());
}

// Storage経由の保存と読み込み
#[test]
fn test_storage_save_then_load() {
    let (_dir, path) = temp_task_file();
    let storage = Storage::new(&path);
    assert_eq!(storage.file_path(), path.as_path());

    let mut task = create_test_task("Via storage");
    task.mark_completed();
    storage.save(&[task.clone()]).unwrap();

    assert_eq!(storage.load().unwrap(), vec![task]);
}
