//! The export-naming pass.
//!
//! A single left-to-right sweep over the module body. Each
//! `export default <expr>` whose expression is an anonymous arrow function,
//! anonymous function, or anonymous class is rewritten into
//! `const <name> = <expr>; export default <name>;`, with `<name>` derived
//! from the file path and made collision-free against every binding in the
//! file. Any other default-export shape is left byte-for-byte untouched.
//!
//! The rewrite is span-based text surgery (collect `(start, end, text)`
//! replacements, apply in reverse offset order) so the wrapped expression
//! survives verbatim: `async` modifier, parameters, body, all of it.

#[cfg(feature = "napi")]
use napi_derive::napi;
use oxc_allocator::Allocator;
use oxc_ast::ast::{ExportDefaultDeclarationKind, Statement};
use oxc_parser::Parser;
use oxc_span::{SourceType, Span};
use serde::{Deserialize, Serialize};

use crate::error::TransformError;
use crate::name::derive_export_name;
use crate::scope::collect_module_bindings;

/// Result of one file transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOutput {
    /// The full module text, rewritten in place when a rename happened.
    pub code: String,
    /// The identifier the default export was bound to, when one was created.
    pub export_name: Option<String>,
    /// False means the source came back verbatim.
    pub changed: bool,
}

/// Rewrite an anonymous default export into a named declaration.
///
/// `file_path` is only used to derive the name; `None` (in-memory input)
/// derives from the fixed fallback base name. The transform is stateless and
/// deterministic: the same `(source, file_path)` pair always produces the
/// same output.
pub fn name_default_export(
    source: &str,
    file_path: Option<&str>,
) -> Result<TransformOutput, TransformError> {
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
    let program = ret.program;

    let mut bindings = collect_module_bindings(&program);
    let mut replacements: Vec<(u32, u32, String)> = Vec::new();
    let mut export_name = None;

    // Valid syntax allows at most one default export, but the sweep is still
    // sequential: each rewrite's binding is visible to later probes.
    for stmt in &program.body {
        let Statement::ExportDefaultDeclaration(export) = stmt else {
            continue;
        };
        let Some(expr_span) = anonymous_expr_span(&export.declaration) else {
            continue;
        };

        let final_name = derive_export_name(file_path, |candidate| bindings.has(candidate));
        let expr_src = &source[expr_span.start as usize..expr_span.end as usize];
        let end = statement_end(source, export.span);
        replacements.push((
            export.span.start,
            end,
            format!("const {final_name} = {expr_src}; export default {final_name};"),
        ));
        bindings.insert(final_name.clone());
        export_name = Some(final_name);
    }

    if replacements.is_empty() {
        return Ok(TransformOutput {
            code: source.to_string(),
            export_name: None,
            changed: false,
        });
    }

    // Sort reverse to apply safely.
    replacements.sort_by(|a, b| b.0.cmp(&a.0));
    let mut code = source.to_string();
    for (start, end, replacement) in replacements {
        code.replace_range(start as usize..end as usize, &replacement);
    }

    Ok(TransformOutput {
        code,
        export_name,
        changed: true,
    })
}

/// Span of the exported expression, but only when it is one of the anonymous
/// shapes this pass renames. Named functions and classes, literals, `new`
/// expressions, identifier references and everything else answer `None` and
/// stay untouched.
fn anonymous_expr_span(decl: &ExportDefaultDeclarationKind<'_>) -> Option<Span> {
    match decl {
        ExportDefaultDeclarationKind::FunctionDeclaration(func) if func.id.is_none() => {
            Some(func.span)
        }
        ExportDefaultDeclarationKind::ClassDeclaration(class) if class.id.is_none() => {
            Some(class.span)
        }
        ExportDefaultDeclarationKind::ArrowFunctionExpression(arrow) => Some(arrow.span),
        ExportDefaultDeclarationKind::FunctionExpression(func) if func.id.is_none() => {
            Some(func.span)
        }
        ExportDefaultDeclarationKind::ClassExpression(class) if class.id.is_none() => {
            Some(class.span)
        }
        _ => None,
    }
}

/// End offset of the statement including its terminating semicolon. When the
/// parser's span stops at the expression, swallow one immediately following
/// `;` so the rewrite does not leave an empty statement behind.
fn statement_end(source: &str, span: Span) -> u32 {
    let end = span.end as usize;
    if source[span.start as usize..end].trim_end().ends_with(';') {
        return span.end;
    }
    let rest = &source[end..];
    let ws = rest.len() - rest.trim_start_matches([' ', '\t']).len();
    if rest[ws..].starts_with(';') {
        (end + ws + 1) as u32
    } else {
        span.end
    }
}

#[cfg(feature = "napi")]
#[napi]
pub fn name_default_export_native(
    source: String,
    file_path: Option<String>,
) -> napi::Result<String> {
    let output = name_default_export(&source, file_path.as_deref())
        .map_err(|error| napi::Error::from_reason(error.to_string()))?;
    serde_json::to_string(&output).map_err(|error| napi::Error::from_reason(error.to_string()))
}
