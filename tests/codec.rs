//! Tests for the field value codec.
mod common;
use bt_template::prelude::*;
use common::*;

#[test]
fn test_every_variant_round_trips() {
    for value in create_sample_values() {
        let bytes = encode_field("Field", &value);
        let mut reader = ByteReader::new(&bytes);
        let decoded = Field::read(value.field_type(), &mut reader)
            .unwrap_or_else(|e| panic!("failed to decode {}: {}", value, e));

        assert_eq!(decoded.name, "Field");
        assert_eq!(decoded.value, value);
        assert!(reader.is_at_end(), "trailing bytes after {}", value);
    }
}

#[test]
fn test_non_finite_floats_round_trip_bitwise() {
    let values = [
        FieldValue::Float(f32::NAN),
        FieldValue::Double(f64::NEG_INFINITY),
        FieldValue::RepeatFloat(vec![f32::NAN, -0.0, f32::INFINITY]),
    ];
    for value in values {
        let bytes = encode_field("Field", &value);
        let decoded = Field::read(value.field_type(), &mut ByteReader::new(&bytes))
            .expect("Failed to decode float field");
        assert_eq!(decoded.value, value);
    }

    assert_ne!(FieldValue::Float(0.0), FieldValue::Float(-0.0));
    assert_ne!(FieldValue::Int(1), FieldValue::Long(1));
}

#[test]
fn test_enum_default_value_round_trip() {
    let value = FieldValue::enumeration("CompareType", "Equal");
    let bytes = encode_field("CompareType", &value);

    let mut reader = ByteReader::new(&bytes);
    let decoded = Field::read(FieldType::Enum, &mut reader).expect("Failed to decode enum field");
    assert_eq!(decoded, Field::new("CompareType", value));
}

#[test]
fn test_enum_payload_order() {
    let mut writer = ByteWriter::new();
    FieldValue::enumeration("E", "S").write(&mut writer).unwrap();
    assert_eq!(writer.as_bytes(), &[1, 0, 0, 0, b'E', 1, 0, 0, 0, b'S']);
}

#[test]
fn test_truncated_stream_fails_for_every_cut() {
    let value = FieldValue::enumeration("CompareType", "Equal");
    let bytes = encode_field("CompareType", &value);

    for cut in 0..bytes.len() {
        let mut reader = ByteReader::new(&bytes[..cut]);
        let result = Field::read(FieldType::Enum, &mut reader);
        assert!(
            matches!(result, Err(DecodeError::UnexpectedEof { .. })),
            "cut at {} decoded to {:?}",
            cut,
            result
        );
    }
}

#[test]
fn test_repeat_int_count_beyond_input_is_rejected() {
    let mut writer = ByteWriter::new();
    writer.write_u32(3).write_i32(1).write_i32(2);

    let mut reader = ByteReader::new(writer.as_bytes());
    let err = FieldValue::read(FieldType::RepeatInt, &mut reader).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnexpectedEof {
            needed: 12,
            remaining: 8
        }
    );
}

#[test]
fn test_string_length_beyond_input_is_rejected() {
    let mut writer = ByteWriter::new();
    writer.write_u32(10);
    let mut bytes = writer.into_bytes();
    bytes.extend_from_slice(b"short");

    let mut reader = ByteReader::new(&bytes);
    assert!(matches!(
        FieldValue::read(FieldType::String, &mut reader),
        Err(DecodeError::UnexpectedEof { needed: 10, remaining: 5 })
    ));
}

#[test]
fn test_invalid_utf8_is_rejected() {
    let mut writer = ByteWriter::new();
    writer.write_u32(2).write_u8(0xff).write_u8(0xfe);

    let mut reader = ByteReader::new(writer.as_bytes());
    assert_eq!(
        FieldValue::read(FieldType::String, &mut reader),
        Err(DecodeError::InvalidUtf8)
    );
}

#[test]
fn test_tagged_values_round_trip_in_one_stream() {
    let values = create_sample_values();
    let mut writer = ByteWriter::new();
    for value in &values {
        value.write_tagged(&mut writer).unwrap();
    }

    let mut reader = ByteReader::new(writer.as_bytes());
    for value in &values {
        assert_eq!(&FieldValue::read_tagged(&mut reader).unwrap(), value);
    }
    assert!(reader.is_at_end());
}

#[test]
fn test_unknown_tag_is_rejected() {
    let mut reader = ByteReader::new(&[0xee, 0, 0, 0, 0]);
    assert_eq!(
        FieldValue::read_tagged(&mut reader),
        Err(DecodeError::UnknownFieldType(0xee))
    );
}

#[test]
fn test_field_type_tags_are_unique() {
    for kind in FieldType::ALL {
        assert_eq!(FieldType::from_tag(kind.tag()), Some(kind));
    }
    assert_eq!(FieldType::from_tag(0), None);
}

#[test]
fn test_node_defaults_block_round_trip() {
    let node = create_sample_node("Sample", NodeType::Action);
    let mut writer = ByteWriter::new();
    node.write_defaults(&mut writer).expect("Failed to write defaults block");

    let mut reader = ByteReader::new(writer.as_bytes());
    let fields = node.read_fields(&mut reader).expect("Failed to read defaults block");

    let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Count", "Name", "Mode"]);
    assert_eq!(fields[0].value, FieldValue::Int(3));
    assert_eq!(fields[2].value, FieldValue::enumeration("CompareType", "Equal"));
}

#[test]
fn test_node_block_with_unknown_field_is_rejected() {
    let node = create_sample_node("Sample", NodeType::Action);
    let mut writer = ByteWriter::new();
    writer.write_len(1).unwrap();
    Field::new("Bogus", FieldValue::Int(1)).write(&mut writer).unwrap();

    let mut reader = ByteReader::new(writer.as_bytes());
    match node.read_fields(&mut reader) {
        Err(DecodeError::UnknownField { class_type, field }) => {
            assert_eq!(class_type, "Sample");
            assert_eq!(field, "Bogus");
        }
        other => panic!("Expected UnknownField error, got {:?}", other),
    }
}
