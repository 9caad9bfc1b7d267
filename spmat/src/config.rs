//! Run configuration

/// How the result matrix is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The `rows=`/`cols=` text document
    #[default]
    Text,
    /// JSON object with `dims` and `entries`
    #[cfg(feature = "serde")]
    Json,
}

/// Configuration for reading operands and rendering the result
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Reject entries outside the declared dimensions
    pub strict_bounds: bool,
    /// Prefix text output with a line naming the operation
    pub label: bool,
    /// Output rendering
    pub output: OutputFormat,
}

impl RunConfig {
    /// Enable or disable dimension checks on every entry
    pub fn with_strict_bounds(mut self, strict_bounds: bool) -> Self {
        self.strict_bounds = strict_bounds;
        self
    }

    /// Enable or disable the `Result of <operation>:` label line
    pub fn with_label(mut self, label: bool) -> Self {
        self.label = label;
        self
    }

    /// Set output rendering
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn strict_bounds(&self) -> bool {
        self.strict_bounds
    }

    pub fn label(&self) -> bool {
        self.label
    }

    pub fn output(&self) -> OutputFormat {
        self.output
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            strict_bounds: false,
            label: true,
            output: OutputFormat::Text,
        }
    }
}
