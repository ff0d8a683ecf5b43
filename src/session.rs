use crate::error::TemplateError;
use crate::template::{CustomEnum, NodeDefine, NodeTemplate, VariableField};

/// Title used for every warning raised by a rejected mutation.
pub const WARNING_TITLE: &str = "Warning";

/// A user-facing message channel, implemented by the editor surface.
///
/// Any `FnMut(&str, Option<&str>)` closure is a sink.
pub trait MessageSink {
    fn show_message(&mut self, text: &str, title: Option<&str>);
}

impl<F> MessageSink for F
where
    F: FnMut(&str, Option<&str>),
{
    fn show_message(&mut self, text: &str, title: Option<&str>) {
        self(text, title)
    }
}

/// A sink that drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl MessageSink for SilentSink {
    fn show_message(&mut self, _text: &str, _title: Option<&str>) {}
}

/// One editing session: a registry plus the sink its rejected mutations are reported to.
///
/// The registry itself only returns `Result`s; this wrapper turns them into
/// the `bool` + message behavior the editor expects.
pub struct TemplateSession<S: MessageSink> {
    template: NodeTemplate,
    sink: S,
}

impl<S: MessageSink> TemplateSession<S> {
    pub fn new(template: NodeTemplate, sink: S) -> Self {
        Self { template, sink }
    }

    pub fn template(&self) -> &NodeTemplate {
        &self.template
    }

    pub fn template_mut(&mut self) -> &mut NodeTemplate {
        &mut self.template
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (NodeTemplate, S) {
        (self.template, self.sink)
    }

    pub fn add_class(&mut self, node: NodeDefine) -> bool {
        let result = self.template.add_class(node);
        self.report(result)
    }

    pub fn add_enum(&mut self, custom_enum: CustomEnum) -> bool {
        let result = self.template.add_enum(custom_enum);
        self.report(result)
    }

    pub fn add_variable(&mut self, variable: VariableField) -> bool {
        let result = self.template.global_variable_mut().add(variable);
        self.report(result)
    }

    /// Removes an enum definition and immediately clears fields that referenced it.
    pub fn remove_enum(&mut self, enum_type: &str) -> bool {
        let removed = self.template.remove_enum(enum_type).is_some();
        if removed {
            self.template.remove_undefined_enum_fields();
        }
        removed
    }

    fn report(&mut self, result: Result<(), TemplateError>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                self.sink.show_message(&e.to_string(), Some(WARNING_TITLE));
                false
            }
        }
    }
}
