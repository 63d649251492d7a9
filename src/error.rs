use serde::{Deserialize, Serialize};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════════
// ERROR CODES
// ═══════════════════════════════════════════════════════════════════════════════

pub const ERR_SYNTAX: &str = "EN-ERR-SYNTAX-001";

/// The only failure surface of the transform: the host handed us source that
/// the parser rejects. Every recognized-but-excluded export shape is a no-op,
/// never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformError {
    pub code: String,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl TransformError {
    pub fn new(code: &str, message: &str, file: &str, line: u32, column: u32) -> Self {
        TransformError {
            code: code.to_string(),
            message: message.to_string(),
            file: file.to_string(),
            line,
            column,
        }
    }

    pub fn syntax(message: &str, file: &str) -> Self {
        Self::new(ERR_SYNTAX, message, file, 1, 1)
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}:{}:{})",
            self.code, self.message, self.file, self.line, self.column
        )
    }
}

impl std::error::Error for TransformError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_location() {
        let error = TransformError::syntax("unexpected token", "foo.js");
        let rendered = error.to_string();
        assert!(rendered.contains("EN-ERR-SYNTAX-001"));
        assert!(rendered.contains("foo.js:1:1"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let error = TransformError::syntax("bad input", "a.js");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"EN-ERR-SYNTAX-001\""));
        assert!(json.contains("\"file\":\"a.js\""));
    }
}
