//! Canonical re-emission of a module through the oxc printer.
//!
//! The transform itself is span-preserving, so two sources that differ only
//! in whitespace produce outputs that differ only in whitespace. Hosts (and
//! the test suite) that want shape-insensitive comparison reparse and print
//! through `Codegen`.

use oxc_allocator::Allocator;
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::TransformError;

pub fn normalize(source: &str, file_path: Option<&str>) -> Result<String, TransformError> {
    let allocator = Allocator::default();
    let source_type = SourceType::default()
        .with_typescript(true)
        .with_module(true)
        .with_jsx(true);

    let ret = Parser::new(&allocator, source, source_type).parse();
    if let Some(error) = ret.errors.first() {
        let message = format!("Invalid module syntax: {:?}", error);
        return Err(TransformError::syntax(
            &message,
            file_path.unwrap_or("<memory>"),
        ));
    }

    Ok(Codegen::new().build(&ret.program).code)
}
