//! Installed-distribution enumeration from a site-packages directory.
//!
//! Produces the (package key, installed file path) pairs the module index is
//! built from. Two metadata layouts are recognized:
//!
//! - `*.dist-info/RECORD` (PEP 376 wheels): one CSV line per installed file,
//!   first field is the path relative to site-packages
//! - `*.egg-info/installed-files.txt` (legacy setuptools): one path per line
//!
//! Distribution names are normalized to graph keys: lowercased, `_` mapped
//! to `-`. Record paths are taken as written; entries that do not look like
//! a package `__init__.py` fall out of the module index naturally.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{IoResultExt, UnrequireError, UnrequireResult};

/// An installed file attributed to a package.
pub type InstalledFile = (String, String);

/// Normalizes a distribution name to a graph package key.
///
/// `Typing_Extensions` -> `typing-extensions`, matching the keys pipenv
/// writes into the graph document.
pub fn normalize_key(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}

/// Extracts the distribution name from a metadata directory name.
///
/// `requests-2.31.0.dist-info` -> `requests`;
/// `six-1.16.0-py3.8.egg-info` -> `six`. Wheel metadata escapes `-` in
/// names as `_`, so everything before the first `-` is the name.
fn distribution_name<'a>(dir_name: &'a str, suffix: &str) -> Option<&'a str> {
    let stem = dir_name.strip_suffix(suffix)?;
    Some(stem.split('-').next().unwrap_or(stem))
}

/// Enumerates every installed file of every distribution under a
/// site-packages path.
///
/// Returns (package key, installed file path) pairs; this is the sole input
/// to the module index. Metadata directories without a readable file list
/// are skipped with a debug log (some legacy installs lack one), but an
/// unreadable site-packages directory itself is fatal.
pub fn enumerate_installed(site_packages: &Path) -> UnrequireResult<Vec<InstalledFile>> {
    if !site_packages.is_dir() {
        return Err(UnrequireError::site(
            site_packages,
            "not a directory (is the package path correct?)",
        ));
    }

    let mut files = Vec::new();

    for entry in fs::read_dir(site_packages).with_path(site_packages)? {
        let entry = entry.with_path(site_packages)?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(dir_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if let Some(name) = distribution_name(dir_name, ".dist-info") {
            let key = normalize_key(name);
            let record = path.join("RECORD");
            if !record.exists() {
                debug!(dist = %dir_name, "dist-info without RECORD, skipping");
                continue;
            }
            let content = fs::read_to_string(&record).with_path(&record)?;
            for line in content.lines() {
                // RECORD is CSV: path,hash,size - only the path matters here
                if let Some(file_path) = line.split(',').next() {
                    if !file_path.is_empty() {
                        files.push((key.clone(), file_path.to_string()));
                    }
                }
            }
        } else if let Some(name) = distribution_name(dir_name, ".egg-info") {
            let key = normalize_key(name);
            let listing = path.join("installed-files.txt");
            if !listing.exists() {
                debug!(dist = %dir_name, "egg-info without installed-files.txt, skipping");
                continue;
            }
            let content = fs::read_to_string(&listing).with_path(&listing)?;
            for line in content.lines() {
                let file_path = line.trim();
                if !file_path.is_empty() {
                    files.push((key.clone(), file_path.to_string()));
                }
            }
        }
    }

    Ok(files)
}
