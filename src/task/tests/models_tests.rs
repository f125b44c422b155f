//! Tests for the task document mapping.

use super::id;
use crate::contact::domain::ContactId;
use crate::store::{Document, DocumentId, Fields, Query, StoreError};
use crate::task::adapters::document::{TaskDocument, decode_snapshot};
use crate::task::domain::{Category, DueDate, Priority, Subtask, TaskStatus};
use rstest::rstest;
use serde_json::{Value, json};

fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        _ => Fields::new(),
    }
}

fn document(doc_id: &str, value: Value) -> Document {
    Document::new(DocumentId::new(doc_id).expect("valid id"), fields(value))
}

#[rstest]
fn full_document_decodes_into_a_task() {
    let doc = document(
        "t1",
        json!({
            "status": "await-feedback",
            "order": 3,
            "title": "Review PR",
            "description": "Check the tests",
            "dueDate": "2025-06-30",
            "priority": "high",
            "assignees": ["c1", "  "],
            "category": "user-story",
            "subtasks": [{"title": "Read diff", "done": true}, {"title": "Comment"}],
        }),
    );

    let task = TaskDocument::decode(&doc).expect("valid document");

    assert_eq!(task.id(), &id("t1"));
    assert_eq!(task.status(), TaskStatus::AwaitFeedback);
    assert_eq!(task.order(), 3);
    let content = task.content();
    assert_eq!(content.title, "Review PR");
    assert_eq!(content.due_date, DueDate::parse("2025/06/30").ok());
    assert_eq!(content.priority, Priority::High);
    assert_eq!(
        content.assignees,
        vec![ContactId::new("c1").expect("valid contact id")]
    );
    assert_eq!(content.category, Category::UserStory);
    assert_eq!(
        content.subtasks,
        vec![
            Subtask {
                title: "Read diff".to_owned(),
                done: true,
            },
            Subtask::new("Comment"),
        ]
    );
}

#[rstest]
fn missing_optional_fields_fall_back_to_defaults() {
    let doc = document(
        "t2",
        json!({"status": "done", "category": "technical-task", "title": "Ship"}),
    );

    let task = TaskDocument::decode(&doc).expect("valid document");

    assert_eq!(task.order(), u32::MAX);
    assert_eq!(task.content().priority, Priority::Medium);
    assert_eq!(task.content().due_date, None);
    assert!(task.content().subtasks.is_empty());
}

#[rstest]
#[case(json!({"category": "user-story"}))]
#[case(json!({"status": "backlog", "category": "user-story"}))]
#[case(json!({"status": "to-do"}))]
#[case(json!({"status": "to-do", "category": "user-story", "dueDate": "2025-02-30"}))]
#[case(json!({"status": "to-do", "category": "user-story", "priority": "urgent"}))]
#[case(json!({"status": "to-do", "category": "user-story", "order": -1}))]
fn invalid_documents_are_rejected(#[case] value: Value) {
    assert!(matches!(
        TaskDocument::decode(&document("bad", value)),
        Err(StoreError::InvalidPayload(_))
    ));
}

#[rstest]
fn encoding_uses_camel_case_and_iso_dates() {
    let doc = document(
        "t3",
        json!({
            "status": "to-do",
            "order": 0,
            "title": "Plan",
            "dueDate": "2025/01/02",
            "category": "technical-task",
        }),
    );
    let task = TaskDocument::decode(&doc).expect("valid document");

    let encoded = TaskDocument::from(&task).to_fields().expect("encodes");

    assert_eq!(encoded.get("dueDate"), Some(&json!("2025-01-02")));
    assert_eq!(encoded.get("status"), Some(&json!("to-do")));
    assert_eq!(encoded.get("priority"), Some(&json!("medium")));
    assert_eq!(encoded.get("category"), Some(&json!("technical-task")));
    assert_eq!(encoded.get("order"), Some(&json!(0)));
    assert!(!encoded.contains_key("due_date"));
}

#[rstest]
fn snapshot_decoding_skips_malformed_documents() {
    let documents = vec![
        document("ok", json!({"status": "to-do", "category": "user-story", "order": 0})),
        document("broken", json!({"status": 7})),
    ];
    let snapshot = Query::all().apply(&documents);

    let tasks = decode_snapshot(&snapshot);

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks.first().map(|task| task.id().as_str()), Some("ok"));
}
