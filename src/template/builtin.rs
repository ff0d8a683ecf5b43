//! The built-in enums and node definitions.
//!
//! Class types, field names, enum types, enum values and numeric defaults are
//! consumed by downstream tooling and must not change.

use super::enum_def::CustomEnum;
use super::node_def::{NodeDefine, NodeType};
use super::registry::NodeTemplate;
use crate::field::{FieldType, FieldValue, NodeField};

pub const SUCCESS_POLICY: &str = "SUCCESS_POLICY";
pub const FAILURE_POLICY: &str = "FAILURE_POLICY";
pub const PARAMETER_TYPE: &str = "ParameterType";
pub const COMPARE_TYPE: &str = "CompareType";

impl NodeTemplate {
    /// Replaces all enum definitions with the built-in catalog.
    pub fn reset_enums(&mut self) {
        self.clear_enums();
        for custom_enum in builtin_enums() {
            if let Err(e) = self.add_enum(custom_enum) {
                tracing::error!(error = %e, "built-in enum rejected");
            }
        }
        tracing::debug!(count = self.enums().len(), "seeded built-in enums");
    }

    /// Replaces all node definitions with the built-in catalog.
    pub fn reset_nodes(&mut self) {
        self.clear_nodes();
        for node in builtin_nodes() {
            if let Err(e) = self.add_class(node) {
                tracing::error!(error = %e, "built-in node rejected");
            }
        }
        tracing::debug!(count = self.nodes().len(), "seeded built-in nodes");
    }
}

pub fn builtin_enums() -> Vec<CustomEnum> {
    vec![
        CustomEnum::new(SUCCESS_POLICY)
            .with_item("SUCCEED_ON_ONE", 1, "Exit as soon as one child succeeds")
            .with_item("SUCCEED_ON_ALL", 2, "Exit when all children have succeeded"),
        CustomEnum::new(FAILURE_POLICY)
            .with_item("FAIL_ON_ONE", 1, "Exit as soon as one child fails")
            .with_item("FAIL_ON_ALL", 2, "Exit when all children have failed"),
        CustomEnum::new(PARAMETER_TYPE)
            .with_item("Agent", 1, "Parameter defined on the agent")
            .with_item("Global", 2, "Parameter defined globally"),
        CustomEnum::new(COMPARE_TYPE)
            .with_item("Less", 1, "<")
            .with_item("Greater", 2, ">")
            .with_item("LEqual", 3, "<=")
            .with_item("GEqual", 4, ">=")
            .with_item("Equal", 5, "==")
            .with_item("NotEqual", 6, "!="),
    ]
}

pub fn builtin_nodes() -> Vec<NodeDefine> {
    let mut nodes = composite_nodes();
    nodes.extend(decorator_nodes());
    nodes.extend(condition_nodes());
    nodes.extend(action_nodes());
    nodes
}

fn composite_nodes() -> Vec<NodeDefine> {
    vec![
        NodeDefine::new("Parallel", NodeType::Composite)
            .with_label("Parallel")
            .with_describe("Runs its children in parallel")
            .with_field(
                NodeField::enumeration("SuccessType", SUCCESS_POLICY, "SUCCEED_ON_ALL")
                    .with_label("Success policy")
                    .with_describe("Success policy"),
            )
            .with_field(
                NodeField::enumeration("FailType", FAILURE_POLICY, "FAIL_ON_ONE")
                    .with_label("Failure policy")
                    .with_describe("Failure policy"),
            ),
        NodeDefine::new("Sequence", NodeType::Composite)
            .with_label("Sequence")
            .with_describe(
                "Runs its children in order until one fails; succeeds when all children succeed",
            ),
        NodeDefine::new("Selector", NodeType::Composite)
            .with_label("Selector")
            .with_describe("Selector"),
        NodeDefine::new("IfElse", NodeType::Composite).with_label("IfElse"),
        NodeDefine::new("Random", NodeType::Composite)
            .with_label("Random")
            .with_category("Random")
            .with_describe("Random"),
        NodeDefine::new("RandomSelector", NodeType::Composite)
            .with_label("Random selector")
            .with_category("Random")
            .with_describe("Random selector"),
        NodeDefine::new("RandomSequence", NodeType::Composite)
            .with_label("Random sequence")
            .with_category("Random")
            .with_describe("Random sequence"),
        NodeDefine::new("SelectorProbability", NodeType::Composite)
            .with_label("Probability selector")
            .with_describe("Probability selector")
            .with_field(
                NodeField::new("Priority", FieldType::RepeatInt)
                    .with_label("Priority")
                    .shown(),
            ),
    ]
}

fn decorator_nodes() -> Vec<NodeDefine> {
    vec![
        NodeDefine::new("Success", NodeType::Decorator)
            .with_label("Success")
            .with_describe("Always succeeds"),
        NodeDefine::new("Failure", NodeType::Decorator)
            .with_label("Failure")
            .with_describe("Always fails"),
        NodeDefine::new("Frames", NodeType::Decorator)
            .with_label("Frames")
            .with_show_content(true)
            .with_describe("Keeps ticking its child for the given number of frames")
            .with_field(
                NodeField::with_value("Frames", FieldValue::Int(1))
                    .with_label("Frames")
                    .with_describe("Number of frames")
                    .shown(),
            ),
        NodeDefine::new("Loop", NodeType::Decorator)
            .with_label("Loop")
            .with_describe("Repeats its child; -1 loops forever")
            .with_field(
                NodeField::new("LoopTimes", FieldType::Int)
                    .with_label("Loop count")
                    .with_describe("Loop count")
                    .shown(),
            ),
        NodeDefine::new("Not", NodeType::Decorator)
            .with_label("Not")
            .with_describe("Inverts the result of its child"),
        NodeDefine::new("Time", NodeType::Decorator)
            .with_label("Time")
            .with_describe("Runs its child for a fixed duration")
            .with_field(
                NodeField::with_value("Duration", FieldValue::Int(1000))
                    .with_label("Duration (ms)")
                    .with_describe("Duration (ms)")
                    .shown(),
            ),
        NodeDefine::new("SuccessUntil", NodeType::Decorator)
            .with_label("Until success")
            .with_describe("Blocks until its child succeeds"),
    ]
}

fn condition_nodes() -> Vec<NodeDefine> {
    ["CompareInt", "CompareFloat", "CompareString"]
        .into_iter()
        .map(compare_node)
        .collect()
}

/// The compare nodes share one field layout: left operand, operator, right operand.
fn compare_node(class_type: &str) -> NodeDefine {
    let kind = class_type.trim_start_matches("Compare");
    NodeDefine::new(class_type, NodeType::Condition)
        .with_label(format!("Compare {}", kind))
        .with_describe("Compares the left and right parameters")
        .with_field(
            NodeField::enumeration("LeftType", PARAMETER_TYPE, "")
                .with_label("Left parameter type"),
        )
        .with_field(
            NodeField::new("LeftParameter", FieldType::String)
                .with_label("Left parameter")
                .with_describe("Name of the left parameter"),
        )
        .with_field(
            NodeField::enumeration("CompareType", COMPARE_TYPE, "")
                .with_label("Operator")
                .with_describe("Comparison operator <, >, <=, >=, ==, !="),
        )
        .with_field(
            NodeField::enumeration("RightType", PARAMETER_TYPE, "")
                .with_label("Right parameter type"),
        )
        .with_field(
            NodeField::new("RightParameter", FieldType::String)
                .with_label("Right parameter")
                .with_describe("Name of the right parameter"),
        )
}

fn assignment_node(class_type: &str, kind: FieldType) -> NodeDefine {
    let suffix = class_type.trim_start_matches("Assignment");
    NodeDefine::new(class_type, NodeType::Action)
        .with_label(format!("Assign ({})", suffix))
        .with_describe(format!("Assigns a {} parameter", suffix))
        .with_field(
            NodeField::new("ParameterName", FieldType::String)
                .with_label("Parameter name")
                .with_describe("Name of the parameter")
                .shown(),
        )
        .with_field(
            NodeField::new("Parameter", kind)
                .with_label(format!("{} value", suffix))
                .with_describe("Value to assign")
                .shown(),
        )
}

fn action_nodes() -> Vec<NodeDefine> {
    vec![
        assignment_node("AssignmentInt", FieldType::Int),
        assignment_node("AssignmentFloat", FieldType::Float),
        assignment_node("AssignmentString", FieldType::String),
        NodeDefine::new("Wait", NodeType::Action)
            .with_label("Wait")
            .with_describe("Waits for a fixed duration")
            .with_field(
                NodeField::with_value("Millisecond", FieldValue::Int(1000))
                    .with_label("Wait time (ms)")
                    .with_describe("Wait time (ms)")
                    .shown(),
            ),
        NodeDefine::new("Noop", NodeType::Action)
            .with_label("Noop")
            .with_describe("Does nothing"),
        NodeDefine::new("Log", NodeType::Action)
            .with_label("Log")
            .with_describe("Writes a log line")
            .with_field(
                NodeField::new("Content", FieldType::String)
                    .with_label("Content")
                    .with_describe("Text to write")
                    .shown(),
            ),
    ]
}
