//! Tests for the validation pipelines.
mod common;
use bt_template::prelude::*;
use common::*;

#[test]
fn test_builtin_template_is_consistent() {
    let template = NodeTemplate::with_builtins();
    assert!(!template.verify_class_type().has_error());
    assert!(!template.verify_node_template().has_error());
    assert!(!template.verify_enum_type().has_error());
    assert!(!template.verify_enum().has_error());
    assert!(!template.verify_enum_references().has_error());
    assert_eq!(template.verify_all(), VerifyInfo::ok());
}

#[test]
fn test_empty_class_type_wins_over_duplicate() {
    let mut template = NodeTemplate::new();
    template.add_class(NodeDefine::new("A", NodeType::Action)).unwrap();
    template.add_class(NodeDefine::new("B", NodeType::Action)).unwrap();
    template.add_class(NodeDefine::new("C", NodeType::Action)).unwrap();
    template.add_class(NodeDefine::new("", NodeType::Action)).unwrap();

    // Introduce a duplicate that `add_class` would have rejected.
    template.find_node_mut("B").unwrap().class_type = "A".to_string();

    let info = template.verify_node_template();
    assert!(info.has_error());
    assert_eq!(info.error(), Some(&VerifyError::EmptyClassType));
    assert_eq!(info.msg(), "empty ClassType found");
}

#[test]
fn test_duplicate_class_type_names_the_value() {
    let mut template = NodeTemplate::new();
    for class_type in ["A", "B", "C", "D"] {
        template.add_class(NodeDefine::new(class_type, NodeType::Action)).unwrap();
    }
    template.find_node_mut("D").unwrap().class_type = "B".to_string();
    template.find_node_mut("C").unwrap().class_type = "A".to_string();

    let info = template.verify_class_type();
    assert_eq!(info.error(), Some(&VerifyError::DuplicateClassType("A".to_string())));
    assert!(info.msg().contains('A'));
}

#[test]
fn test_node_template_reports_first_invalid_node() {
    let mut template = NodeTemplate::new();
    let mut first = NodeDefine::new("First", NodeType::Composite);
    first.fields.push(NodeField::new("X", FieldType::Int));
    first.fields.push(NodeField::new("X", FieldType::Int));
    let second =
        NodeDefine::new("Second", NodeType::Action).with_field(NodeField::new("", FieldType::Int));
    template.add_class(second).unwrap();
    template.add_class(first).unwrap();

    let info = template.verify_node_template();
    match info.error() {
        Some(VerifyError::InNode { class_type, source }) => {
            assert_eq!(class_type, "First");
            assert_eq!(**source, VerifyError::DuplicateFieldName("X".to_string()));
        }
        other => panic!("Expected InNode error, got {:?}", other),
    }
}

#[test]
fn test_enum_field_without_enum_type_is_invalid() {
    let mut template = NodeTemplate::new();
    template
        .add_class(
            NodeDefine::new("N", NodeType::Action).with_field(NodeField::new("E", FieldType::Enum)),
        )
        .unwrap();

    let info = template.verify_node_template();
    assert!(info.has_error());
    assert!(info.msg().contains("'E'"));
}

#[test]
fn test_enum_pipeline_short_circuits_on_enum_type() {
    let mut template = NodeTemplate::new();
    template.add_enum(create_sample_enum("Good", 2)).unwrap();
    let bad = CustomEnum::new("Bad").with_item("X", 1, "").with_item("X", 2, "");
    template.add_enum(bad).unwrap();
    template.add_enum(create_sample_enum("Other", 1)).unwrap();

    let info = template.verify_enum();
    match info.error() {
        Some(VerifyError::InEnum { enum_type, source }) => {
            assert_eq!(enum_type, "Bad");
            assert_eq!(**source, VerifyError::DuplicateEnumStr("X".to_string()));
        }
        other => panic!("Expected InEnum error, got {:?}", other),
    }

    template.find_enum_mut("Other").unwrap().enum_type = "Good".to_string();
    assert_eq!(
        template.verify_enum().error(),
        Some(&VerifyError::DuplicateEnumType("Good".to_string()))
    );

    template.find_enum_mut("Bad").unwrap().enum_type = String::new();
    assert_eq!(template.verify_enum().error(), Some(&VerifyError::EmptyEnumType));
}

#[test]
fn test_duplicate_enum_value_is_invalid() {
    let custom = CustomEnum::new("E").with_item("A", 1, "").with_item("B", 1, "");
    assert_eq!(custom.verify(), Err(VerifyError::DuplicateEnumValue(1)));
}

#[test]
fn test_enum_references() {
    let mut template = NodeTemplate::with_builtins();
    template
        .add_class(NodeDefine::new("Bad", NodeType::Action).with_field(NodeField::enumeration(
            "Op",
            "CompareType",
            "Between",
        )))
        .unwrap();

    let info = template.verify_enum_references();
    match info.error() {
        Some(VerifyError::InNode { class_type, source }) => {
            assert_eq!(class_type, "Bad");
            assert!(matches!(**source, VerifyError::UnknownEnumSymbol { .. }));
        }
        other => panic!("Expected UnknownEnumSymbol error, got {:?}", other),
    }

    template.remove_class("Bad");
    template.remove_enum("ParameterType");
    let info = template.verify_enum_references();
    assert!(info.msg().contains("ParameterType"), "{}", info.msg());

    template.remove_undefined_enum_fields();
    assert!(!template.verify_enum_references().has_error());
}

#[test]
fn test_verify_all_includes_global_variables() {
    let mut template = NodeTemplate::with_builtins();
    template
        .global_variable_mut()
        .add(Field::new("Score", FieldValue::Int(0)))
        .unwrap();
    assert!(!template.verify_all().has_error());

    let mut bytes = ByteWriter::new();
    bytes.write_len(2).unwrap();
    Field::new("Dup", FieldValue::Int(1)).write_tagged(&mut bytes).unwrap();
    Field::new("Dup", FieldValue::Int(2)).write_tagged(&mut bytes).unwrap();
    let decoded = GlobalVariable::read(&mut ByteReader::new(bytes.as_bytes())).unwrap();
    assert_eq!(decoded.verify(), Err(VerifyError::DuplicateVariable("Dup".to_string())));
}

#[test]
fn test_validation_does_not_mutate() {
    let mut template = NodeTemplate::with_builtins();
    template.find_node_mut("Noop").unwrap().class_type = "Log".to_string();
    let before = template.clone();

    for _ in 0..2 {
        assert!(template.verify_all().has_error());
    }
    assert_eq!(template, before);
}
