//! # Export Namer
//!
//! Rewrites anonymous default-exported function and class expressions into
//! named declarations, deriving the name from the file the module lives in.
//!
//! ## Naming invariants
//!
//! 1. **Derivation**: the name comes from the file stem; `index` files use
//!    their directory name; pathless input uses the fixed base name `unset`.
//! 2. **Sanitization**: a stem that is already a valid identifier is kept
//!    as-is (`Foo.js` → `Foo`); anything else is camelCased from its
//!    alphanumeric segments, with a `_` prefix when the result would be
//!    empty or start with a digit (`1.js` → `_1`).
//! 3. **Collision probing**: if the name is bound anywhere in the file,
//!    suffixes `0`, `1`, `2`, … are appended to the FULL name until a free
//!    one is found. The suffix is textual: a taken `_1` becomes `_10`.
//! 4. **No shadowing**: the chosen name is absent from the file's binding
//!    set at the moment of rewrite, and rewrites earlier in the pass are
//!    visible to later probes.
//! 5. **Shape preservation**: the exported expression is carried into the
//!    `const` initializer byte-for-byte; only its wrapping changes. Every
//!    non-anonymous default-export shape is a no-op, never an error.
//!
//! Re-running the transform on its own output is a no-op: the output's
//! default export is a bare identifier, which is an excluded shape.

mod emit;
mod error;
mod name;
mod scope;
mod transform;

pub use emit::normalize;
pub use error::{TransformError, ERR_SYNTAX};
pub use name::{
    derive_base_name, derive_export_name, is_valid_identifier, resolve_collisions, sanitize,
    DEFAULT_BASE_NAME,
};
pub use scope::{collect_module_bindings, ModuleBindings};
pub use transform::{name_default_export, TransformOutput};

#[cfg(feature = "napi")]
pub use transform::name_default_export_native;

#[cfg(test)]
mod transform_tests;
