//! Import extraction - line-oriented scanning of Python sources.
//!
//! Deliberately simple: a line is an import line iff its trimmed form starts
//! with the literal token `import ` or `from `. No AST, no multi-line import
//! handling, no alias semantics beyond taking the dotted-path root. This
//! matches how the import set is consumed downstream, where only top-level
//! names matter (`django.db` and `django.urls` both count as `django`).
//!
//! Failure semantics are fail-loud: an unreadable or undecodable file aborts
//! the whole extraction. A silently incomplete import set would cause
//! packages to be flagged unused when they are not.

use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{UnrequireError, UnrequireResult};

/// Checks whether a (pre-trimmed) line is an import statement.
#[inline]
pub fn is_import_line(line: &str) -> bool {
    line.starts_with("import ") || line.starts_with("from ")
}

/// Reduces one whitespace/comma token to its top-level module name.
///
/// `django.db` -> `django`. Relative (`.`-prefixed) and internal
/// (`_`-prefixed) names are discarded, as are empty tokens from trailing
/// commas.
fn top_level_name(token: &str) -> Option<String> {
    let word = token.trim().split_whitespace().next()?;
    if word.starts_with('.') || word.starts_with('_') {
        return None;
    }
    let root = word.split('.').next().unwrap_or_default();
    if root.is_empty() {
        None
    } else {
        Some(root.to_string())
    }
}

/// Parses the top-level module names out of a single import line.
///
/// - `from django.db import Foo` -> `["django"]`
/// - `import os.path, requests as r` -> `["os", "requests"]`
pub fn parse_import_line(line: &str) -> Vec<String> {
    if let Some(rest) = line.strip_prefix("from ") {
        // Only the token between `from` and `import` matters
        return rest
            .split_whitespace()
            .next()
            .and_then(top_level_name)
            .into_iter()
            .collect();
    }

    match line.strip_prefix("import ") {
        // `import a, b as c` - split the comma list, alias words fall away
        // because only the first word of each token is kept
        Some(rest) => rest.split(',').filter_map(top_level_name).collect(),
        None => Vec::new(),
    }
}

/// Scans a single Python file for import lines.
///
/// Returns every top-level name found, duplicates included; deduplication
/// happens once at the aggregate level.
pub fn parse_file(path: &Path) -> UnrequireResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::InvalidData {
            UnrequireError::encoding(path, "file is not valid UTF-8 text")
        } else {
            UnrequireError::io(path, e)
        }
    })?;

    let mut imports = Vec::new();
    for line in content.lines() {
        let stripped = line.trim();
        if is_import_line(stripped) {
            imports.extend(parse_import_line(stripped));
        }
    }

    Ok(imports)
}

/// Extracts the deduplicated set of top-level imported names from a batch of files.
///
/// Files are parsed in parallel; the merged set is identical regardless of
/// read order. Any single file failure fails the whole extraction.
pub fn collect_imports(files: &[std::path::PathBuf]) -> UnrequireResult<HashSet<String>> {
    let per_file: Vec<Vec<String>> = files
        .par_iter()
        .map(|path| parse_file(path))
        .collect::<UnrequireResult<_>>()?;

    Ok(per_file.into_iter().flatten().collect())
}
