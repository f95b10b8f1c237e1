//! # Encapsulate JSX Native
//!
//! Native pass that injects a per-compilation-unit `className` into JSX
//! elements, so everything a file renders can be scoped by that file's
//! stylesheet.
//!
//! ## Injection Invariants
//!
//! 1. **At most one `className`**: after the pass, every non-ignored element
//!    carries exactly one `className` attribute. An existing attribute is
//!    merged in place; a missing one is appended at the end of the list.
//!
//! 2. **Superset value**: the resulting value is the prior value plus the
//!    file's class, joined by a single space. Constant operands merge into
//!    one string literal; dynamic operands become `EXPR + " class"`, with
//!    compound `EXPR` parenthesized.
//!
//! 3. **Spread preservation**: spread attributes are never rewritten,
//!    removed, or moved. `className` is located by name on either side of a
//!    spread.
//!
//! 4. **Ignore list**: `Fragment` and `React.Fragment` are ignored by
//!    default; configuration extends the list. Matching is an exact string
//!    match on the full dotted path or its leading identifier.
//!
//! 5. **Local contract**: each element is decided on its own. Ignoring an
//!    element does not prune traversal of its children or its attribute
//!    expressions.

#[cfg(feature = "napi")]
use napi_derive::napi;

mod cache;
mod compile;
mod discovery;
mod error;
mod injector;
mod options;
mod tag;

#[cfg(test)]
mod encapsulate_tests;

// Internal Rust-to-Rust API (for bundler plugins)
pub use compile::{encapsulate_source_internal, CompileResult};

pub use cache::IncrementalCache;
pub use discovery::{encapsulate_directory_internal, find_jsx_files, FileReport};
pub use error::CompilerError;
pub use injector::ClassNameInjector;
pub use options::{derive_class_from_path, EncapsulateOptions, IgnoreSet};
pub use tag::TagName;

#[cfg(feature = "napi")]
pub use compile::encapsulate_native;
#[cfg(feature = "napi")]
pub use discovery::encapsulate_directory_native;

#[cfg(feature = "napi")]
#[napi]
pub fn encapsulate_bridge() -> String {
    "Encapsulate Native Bridge Connected".to_string()
}
