//! Source-to-source pipeline: parse, inject, print.
//!
//! The host hands us a compilation unit and gets the same unit back with
//! every non-ignored JSX element carrying the file's class. Malformed input
//! is rejected at the parse step; the injector itself has no failure paths.

#[cfg(feature = "napi")]
use napi_derive::napi;
use oxc_allocator::Allocator;
use oxc_ast_visit::VisitMut;
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_span::SourceType;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CompilerError;
use crate::injector::ClassNameInjector;
use crate::options::EncapsulateOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileResult {
    pub code: String,
    pub class_name: String,
    pub elements_transformed: u32,
}

fn source_type_for(file_path: &str) -> SourceType {
    SourceType::from_path(Path::new(file_path))
        .unwrap_or_default()
        .with_module(true)
        .with_jsx(true)
}

pub fn encapsulate_source_internal(
    source: &str,
    file_path: &str,
    options: &EncapsulateOptions,
) -> Result<CompileResult, CompilerError> {
    let class_name = options.target_class(file_path)?;

    if options.is_excluded(file_path) {
        return Ok(CompileResult {
            code: source.to_string(),
            class_name,
            elements_transformed: 0,
        });
    }

    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type_for(file_path)).parse();
    if ret.panicked || !ret.errors.is_empty() {
        let message = ret
            .errors
            .first()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "Failed to parse source".to_string());
        return Err(CompilerError::new("PARSE_ERROR", &message, file_path, 0, 0));
    }

    let mut program = ret.program;
    let mut injector = ClassNameInjector::new(&allocator, &class_name, options.ignore_set());
    injector.visit_program(&mut program);

    Ok(CompileResult {
        code: Codegen::new().build(&program).code,
        class_name,
        elements_transformed: injector.elements_transformed,
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI EXPORTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
pub(crate) fn parse_options(
    value: Option<serde_json::Value>,
) -> Result<EncapsulateOptions, String> {
    match value {
        Some(v) => serde_json::from_value(v).map_err(|e| format!("Invalid options: {}", e)),
        None => Ok(EncapsulateOptions::default()),
    }
}

#[cfg(feature = "napi")]
#[napi]
pub fn encapsulate_native(
    source: String,
    file_path: String,
    options: Option<serde_json::Value>,
) -> napi::Result<serde_json::Value> {
    let options = parse_options(options).map_err(napi::Error::from_reason)?;
    let result = encapsulate_source_internal(&source, &file_path, &options)
        .map_err(|e| napi::Error::from_reason(e.to_string()))?;
    serde_json::to_value(result).map_err(|e| napi::Error::from_reason(e.to_string()))
}
