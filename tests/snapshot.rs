//! Tests for saving and loading whole templates.
mod common;
use bt_template::prelude::*;
use common::*;
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str, extension: &str) -> PathBuf {
    let file = format!("bt_template_{}_{}.{}", name, std::process::id(), extension);
    std::env::temp_dir().join(file)
}

fn create_edited_template() -> NodeTemplate {
    let mut template = NodeTemplate::with_builtins();
    template
        .add_class(create_sample_node("Custom", NodeType::Decorator))
        .unwrap();
    template.add_enum(create_sample_enum("Mood", 3)).unwrap();
    for (i, value) in create_sample_values().into_iter().enumerate() {
        template
            .global_variable_mut()
            .add(Field::new(format!("Var{}", i), value))
            .unwrap();
    }
    template
}

#[test]
fn test_bincode_snapshot_round_trip() {
    let template = create_edited_template();
    let bytes = template.to_bytes().expect("Failed to encode snapshot");
    let decoded = NodeTemplate::from_bytes(&bytes).expect("Failed to decode snapshot");
    assert_eq!(decoded, template);
}

#[test]
fn test_json_snapshot_round_trip() {
    let template = create_edited_template();
    let json = template.to_json().expect("Failed to export JSON");
    assert!(json.contains("\"SelectorProbability\""));

    let decoded = NodeTemplate::from_json(&json).expect("Failed to import JSON");
    assert_eq!(decoded, template);
}

#[test]
fn test_truncated_snapshot_fails() {
    let bytes = create_edited_template().to_bytes().unwrap();
    let result = NodeTemplate::from_bytes(&bytes[..bytes.len() / 2]);
    assert!(matches!(result, Err(SnapshotError::Decode(_))));
}

#[test]
fn test_snapshot_file_round_trip() {
    let path = temp_path("snapshot", "bin");
    let template = create_edited_template();

    template.save(&path).expect("Failed to save snapshot");
    let loaded = NodeTemplate::from_file(&path).expect("Failed to load snapshot");
    let _ = fs::remove_file(&path);

    assert_eq!(loaded, template);
    assert!(!loaded.verify_all().has_error());
}

#[test]
fn test_missing_file_reports_path() {
    let err = NodeTemplate::from_file("does/not/exist.bin").unwrap_err();
    assert!(matches!(err, SnapshotError::Io { .. }));
    assert!(err.to_string().contains("does/not/exist.bin"));
}

#[test]
fn test_trailing_bytes_are_rejected() {
    let mut bytes = create_edited_template().to_bytes().unwrap();
    bytes.extend_from_slice(&[0xde, 0xad]);

    let result = NodeTemplate::from_bytes(&bytes);
    assert!(matches!(result, Err(SnapshotError::TrailingBytes { trailing: 2 })));
}

#[test]
fn test_json_export_rejects_non_finite_default() {
    let mut template = NodeTemplate::new();
    template
        .add_class(
            NodeDefine::new("Move", NodeType::Action)
                .with_field(NodeField::with_value("Speed", FieldValue::Float(f32::INFINITY))),
        )
        .unwrap();

    match template.to_json() {
        Err(SnapshotError::NonFiniteFloat { owner, field }) => {
            assert_eq!(owner, "Move");
            assert_eq!(field, "Speed");
        }
        other => panic!("Expected NonFiniteFloat error, got {:?}", other),
    }

    // The binary snapshot keeps the value as is.
    let bytes = template.to_bytes().unwrap();
    assert_eq!(NodeTemplate::from_bytes(&bytes).unwrap(), template);
}

#[test]
fn test_json_export_rejects_non_finite_variable() {
    let mut template = NodeTemplate::with_builtins();
    template
        .global_variable_mut()
        .add(Field::new("Weights", FieldValue::RepeatFloat(vec![1.0, f32::NAN])))
        .unwrap();

    let path = temp_path("nan", "json");
    let err = template.save_json(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::NonFiniteFloat { .. }));
    assert!(err.to_string().contains("Weights"));
    assert!(!path.exists());
}
