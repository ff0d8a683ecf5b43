//! Common test utilities for building templates and encoded field streams.
use bt_template::prelude::*;

/// Creates a small custom node with one field of each commonly used kind.
#[allow(dead_code)]
pub fn create_sample_node(class_type: &str, node_type: NodeType) -> NodeDefine {
    NodeDefine::new(class_type, node_type)
        .with_label(class_type)
        .with_field(NodeField::with_value("Count", FieldValue::Int(3)).shown())
        .with_field(NodeField::new("Name", FieldType::String))
        .with_field(NodeField::enumeration("Mode", "CompareType", "Equal"))
}

/// Creates a custom enum with `count` items named `Item0..ItemN` valued `1..=count`.
#[allow(dead_code)]
pub fn create_sample_enum(enum_type: &str, count: i32) -> CustomEnum {
    (0..count).fold(CustomEnum::new(enum_type), |e, i| {
        e.with_item(&format!("Item{}", i), i + 1, "")
    })
}

/// One value per field kind, including empty strings and empty lists.
#[allow(dead_code)]
pub fn create_sample_values() -> Vec<FieldValue> {
    vec![
        FieldValue::Int(-42),
        FieldValue::Int(i32::MAX),
        FieldValue::Long(i64::MIN),
        FieldValue::Float(3.25),
        FieldValue::Double(-0.125),
        FieldValue::String(String::new()),
        FieldValue::String("hello, tree".to_string()),
        FieldValue::Boolean(true),
        FieldValue::enumeration("CompareType", "Equal"),
        FieldValue::enumeration("", ""),
        FieldValue::RepeatInt(vec![]),
        FieldValue::RepeatInt(vec![1, -2, 3]),
        FieldValue::RepeatLong(vec![1 << 40]),
        FieldValue::RepeatFloat(vec![0.5, 1.5]),
        FieldValue::RepeatString(vec!["a".to_string(), String::new()]),
    ]
}

/// Encodes a single named field.
#[allow(dead_code)]
pub fn encode_field(name: &str, value: &FieldValue) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    Field::new(name, value.clone())
        .write(&mut writer)
        .expect("Failed to encode field");
    writer.into_bytes()
}
