use pest::error::LineColLocation;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AssemblyError {
    #[error("Syntax Error: {0}")]
    Syntax(#[from] pest::error::Error<crate::parser::Rule>),

    #[error("Parse immediate: {reason}")]
    ParseImmediate { line: usize, reason: String },

    #[error("Parse string: {reason}")]
    ParseString { line: usize, reason: String },

    #[error("Parse register: {reason}")]
    ParseRegister { line: usize, reason: String },

    #[error("Invalid operands: {reason}")]
    InvalidOperands { line: usize, reason: String },

    #[error("Invalid directive: {reason}")]
    InvalidDirective { line: usize, reason: String },

    #[error("Duplicate label definition: {name}")]
    DuplicateLabel { line: usize, name: String },

    #[error("Undefined label: {name}")]
    UndefinedLabel { line: usize, name: String },

    #[error("Missing jmp to main: the first code line after the data segment must be a plain jmp")]
    MissingJmpMain { line: usize },

    #[error("Missing main function")]
    MissingMain { line: usize },
}

impl AssemblyError {
    /// 1-based source line for the diagnostic header.
    pub fn line(&self) -> usize {
        match self {
            AssemblyError::Syntax(err) => match err.line_col {
                LineColLocation::Pos((line, _)) => line,
                LineColLocation::Span((line, _), _) => line,
            },
            AssemblyError::ParseImmediate { line, .. }
            | AssemblyError::ParseString { line, .. }
            | AssemblyError::ParseRegister { line, .. }
            | AssemblyError::InvalidOperands { line, .. }
            | AssemblyError::InvalidDirective { line, .. }
            | AssemblyError::DuplicateLabel { line, .. }
            | AssemblyError::UndefinedLabel { line, .. }
            | AssemblyError::MissingJmpMain { line }
            | AssemblyError::MissingMain { line } => *line,
        }
    }
}
