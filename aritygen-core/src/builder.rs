//! Indentation-tracking text sink for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the C# convention.
    pub const CSHARP: Self = Self::Spaces(4);

    /// The string for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 spaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}

/// Text sink that tracks the current indentation depth.
///
/// Every renderer in the declaration model writes into a `CodeBuilder`.
/// The contract is that a renderer leaves the depth exactly where it
/// found it: each `indent()` is paired with a `dedent()` before the
/// renderer returns.
///
/// # Example
///
/// ```
/// use aritygen_core::CodeBuilder;
///
/// let mut out = CodeBuilder::csharp();
/// out.line("public class Foo");
/// out.line("{");
/// out.indent();
/// out.line("private readonly int _value;");
/// out.dedent();
/// out.line("}");
/// assert_eq!(
///     out.build(),
///     "public class Foo\n{\n    private readonly int _value;\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent: Indent,
    level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new builder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            level: 0,
            buffer: String::new(),
        }
    }

    /// Create a new builder with 4-space indentation.
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Write one line at the current depth.
    ///
    /// An empty string produces a bare newline with no trailing
    /// whitespace.
    pub fn line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Write a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Write opaque body text, splitting on line breaks and re-indenting
    /// each line at the current depth.
    pub fn lines(&mut self, body: &str) -> &mut Self {
        for line in body.lines() {
            self.line(line);
        }
        self
    }

    /// Increase the indentation depth.
    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Decrease the indentation depth.
    pub fn dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Current indentation depth.
    pub fn level(&self) -> usize {
        self.level
    }

    /// The buffer content so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}
