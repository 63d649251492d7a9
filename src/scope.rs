//! Whole-file binding inventory.
//!
//! The collision probe needs one question answered: "is this identifier bound
//! anywhere in the file?" We answer it conservatively by collecting every
//! `BindingIdentifier` in the tree, regardless of the scope it lands in. A
//! nested binding can never be shadowed by the name we introduce at module
//! scope this way, which is exactly the invariant the rewrite promises.

use oxc_ast::ast::Program;
use oxc_ast_visit::Visit;
use std::collections::HashSet;

/// The set of identifier names bound anywhere in the current file, plus any
/// names this pass has introduced itself. Later collision checks in the same
/// traversal see earlier rewrites through [`ModuleBindings::insert`].
#[derive(Debug, Default)]
pub struct ModuleBindings {
    symbols: HashSet<String>,
}

impl ModuleBindings {
    pub fn has(&self, name: &str) -> bool {
        self.symbols.contains(name)
    }

    pub fn insert(&mut self, name: String) {
        self.symbols.insert(name);
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Collect every binding in the program: variable declarators, function and
/// class names, parameters, destructuring patterns, import locals, catch
/// params, TS declaration names. All of those surface as `BindingIdentifier`
/// nodes, so one visitor hook covers the lot.
pub fn collect_module_bindings(program: &Program) -> ModuleBindings {
    let mut collector = BindingCollector {
        bindings: ModuleBindings::default(),
    };
    collector.visit_program(program);
    collector.bindings
}

struct BindingCollector {
    bindings: ModuleBindings,
}

impl<'a> Visit<'a> for BindingCollector {
    fn visit_binding_identifier(&mut self, ident: &oxc_ast::ast::BindingIdentifier<'a>) {
        self.bindings.insert(ident.name.to_string());
    }
}
