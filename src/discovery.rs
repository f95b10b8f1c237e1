//! Batch encapsulation over a directory tree.
//!
//! Recursively finds JSX-bearing source files and encapsulates each one
//! independently. One broken file yields an error entry in the report, it
//! never aborts the batch.

#[cfg(feature = "napi")]
use napi_derive::napi;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::cache::IncrementalCache;
use crate::compile::{encapsulate_source_internal, CompileResult};
use crate::error::CompilerError;
use crate::options::EncapsulateOptions;

const JSX_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: String,
    pub result: Option<CompileResult>,
    pub error: Option<String>,
}

/// Recursively find all JSX-bearing source files in a directory
pub fn find_jsx_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true) {
        if let Ok(entry) = entry {
            let path = entry.path();
            if path.is_file() {
                if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                    if JSX_EXTENSIONS.contains(&ext) {
                        files.push(path.to_path_buf());
                    }
                }
            }
        }
    }

    files
}

pub fn encapsulate_directory_internal(
    base_dir: &Path,
    options: &EncapsulateOptions,
    cache: Option<&IncrementalCache>,
) -> HashMap<String, FileReport> {
    if !base_dir.exists() {
        return HashMap::new();
    }

    find_jsx_files(base_dir)
        .par_iter()
        .map(|file_path| {
            let path_str = file_path.to_string_lossy().to_string();
            let report = encapsulate_file(&path_str, options, cache);
            (path_str, report)
        })
        .collect()
}

fn encapsulate_file(
    path_str: &str,
    options: &EncapsulateOptions,
    cache: Option<&IncrementalCache>,
) -> FileReport {
    let source = match fs::read_to_string(path_str) {
        Ok(s) => s,
        Err(e) => {
            let err = CompilerError::new(
                "READ_ERROR",
                &format!("Failed to read file: {}", e),
                path_str,
                0,
                0,
            );
            eprintln!("[EncapsulateNative] {}", err);
            return FileReport {
                path: path_str.to_string(),
                result: None,
                error: Some(err.to_string()),
            };
        }
    };

    if let Some(cache) = cache {
        if let Some(result) = cache.get(path_str, &source) {
            return FileReport {
                path: path_str.to_string(),
                result: Some(result),
                error: None,
            };
        }
    }

    match encapsulate_source_internal(&source, path_str, options) {
        Ok(result) => {
            if let Some(cache) = cache {
                cache.set(path_str, &source, result.clone());
            }
            FileReport {
                path: path_str.to_string(),
                result: Some(result),
                error: None,
            }
        }
        Err(e) => {
            eprintln!("[EncapsulateNative] Failed to encapsulate {}: {}", path_str, e);
            FileReport {
                path: path_str.to_string(),
                result: None,
                error: Some(e.to_string()),
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI EXPORTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
#[napi]
pub fn encapsulate_directory_native(
    base_dir: String,
    options: Option<serde_json::Value>,
) -> napi::Result<serde_json::Value> {
    let options = crate::compile::parse_options(options).map_err(napi::Error::from_reason)?;
    let cache = IncrementalCache::new();
    let reports = encapsulate_directory_internal(Path::new(&base_dir), &options, Some(&cache));
    serde_json::to_value(reports).map_err(|e| napi::Error::from_reason(e.to_string()))
}
