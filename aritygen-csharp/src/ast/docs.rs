//! XML documentation blocks.

use aritygen_core::CodeBuilder;

/// An XML doc comment: summary, type parameters, parameters, returns,
/// remarks, and an optional example block, rendered as `///` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlDoc {
    summary: Vec<String>,
    type_params: Vec<(String, String)>,
    params: Vec<(String, String)>,
    returns: Option<String>,
    remarks: Option<String>,
    example: Vec<String>,
}

impl XmlDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a doc block with a one-line summary.
    pub fn summary(text: impl Into<String>) -> Self {
        Self::new().summary_line(text)
    }

    /// Append a summary line.
    pub fn summary_line(mut self, text: impl Into<String>) -> Self {
        self.summary.push(text.into());
        self
    }

    pub fn type_param(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.type_params.push((name.into(), text.into()));
        self
    }

    pub fn param(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.params.push((name.into(), text.into()));
        self
    }

    pub fn returns(mut self, text: impl Into<String>) -> Self {
        self.returns = Some(text.into());
        self
    }

    pub fn remarks(mut self, text: impl Into<String>) -> Self {
        self.remarks = Some(text.into());
        self
    }

    /// Append a line to the `<example>` block.
    pub fn example_line(mut self, text: impl Into<String>) -> Self {
        self.example.push(text.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
            && self.type_params.is_empty()
            && self.params.is_empty()
            && self.returns.is_none()
            && self.remarks.is_none()
            && self.example.is_empty()
    }

    pub fn render(&self, out: &mut CodeBuilder) {
        if !self.summary.is_empty() {
            out.line("/// <summary>");
            for line in &self.summary {
                out.line(&format!("/// {line}"));
            }
            out.line("/// </summary>");
        }
        for (name, text) in &self.type_params {
            out.line(&format!("/// <typeparam name=\"{name}\">{text}</typeparam>"));
        }
        for (name, text) in &self.params {
            out.line(&format!("/// <param name=\"{name}\">{text}</param>"));
        }
        if let Some(text) = &self.returns {
            out.line(&format!("/// <returns>{text}</returns>"));
        }
        if let Some(text) = &self.remarks {
            out.line(&format!("/// <remarks>{text}</remarks>"));
        }
        if !self.example.is_empty() {
            out.line("/// <example>");
            for line in &self.example {
                out.line(&format!("/// {line}"));
            }
            out.line("/// </example>");
        }
    }
}
