//! Module index - mapping installed packages to the module names they expose.
//!
//! A package key and the module it installs are often different strings
//! (`beautifulsoup4` installs `bs4`), so the unused check cannot compare
//! keys against the import set directly. This index is built from the
//! installed file lists: a package exposes module `foo` when it installs
//! `foo/__init__.py`.
//!
//! Known gap carried over from the reference behavior: flat single-file
//! distributions (a lone top-level `foo.py` with no package directory) are
//! never indexed, so they fall back downstream to the package key itself.

use std::collections::HashMap;

/// Mapping from package key to the top-level module names it installs.
pub type ModuleIndex = HashMap<String, Vec<String>>;

/// Splits an installed file path (extension already removed) into segments.
///
/// Splits on the platform separator first; if that yields a single segment
/// the path came from a distribution built on the other platform, so retry
/// with `/`.
fn path_segments(stem: &str) -> Vec<&str> {
    let parts: Vec<&str> = stem.split(std::path::MAIN_SEPARATOR).collect();
    if parts.len() == 1 {
        stem.split('/').collect()
    } else {
        parts
    }
}

/// Builds the module index from (package key, installed file path) pairs.
///
/// Only `__init__.py` entries register a module: the parent directory name
/// is the exposed module. `_`-prefixed (but not dunder) entries are internal
/// and skipped, as is anything under a `tests` directory. Duplicate module
/// names per key are preserved; downstream usage is membership-based.
pub fn build_module_index<I, K, P>(files: I) -> ModuleIndex
where
    I: IntoIterator<Item = (K, P)>,
    K: AsRef<str>,
    P: AsRef<str>,
{
    let mut index = ModuleIndex::new();

    for (key, path) in files {
        let path = path.as_ref();
        let Some(stem) = path.strip_suffix(".py") else {
            continue;
        };

        let parts = path_segments(stem);
        let Some(last) = parts.last() else {
            continue;
        };

        if last.starts_with('_') && !last.starts_with("__") {
            continue; // internal submodule
        }

        if *last == "__init__" {
            if let Some(parent) = parts.len().checked_sub(2).map(|i| parts[i]) {
                if parent != "tests" {
                    index
                        .entry(key.as_ref().to_string())
                        .or_default()
                        .push(parent.to_string());
                }
            }
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, p)| (k.to_string(), p.to_string()))
            .collect()
    }

    #[test]
    fn test_init_registers_parent_directory() {
        let index = build_module_index(pairs(&[("requests", "requests/__init__.py")]));
        assert_eq!(index["requests"], vec!["requests"]);
    }

    #[test]
    fn test_internal_and_tests_skipped() {
        let index = build_module_index(pairs(&[
            ("foo", "foo/__init__.py"),
            ("foo", "foo/_internal.py"),
            ("foo", "foo/tests/__init__.py"),
        ]));
        assert_eq!(index["foo"], vec!["foo"]);
    }

    #[test]
    fn test_dunder_files_are_not_internal() {
        // __main__.py is not `_`-internal, but it is not __init__ either,
        // so it registers nothing
        let index = build_module_index(pairs(&[("foo", "foo/__main__.py")]));
        assert!(index.is_empty());
    }

    #[test]
    fn test_module_name_differs_from_key() {
        let index = build_module_index(pairs(&[("beautifulsoup4", "bs4/__init__.py")]));
        assert_eq!(index["beautifulsoup4"], vec!["bs4"]);
    }

    #[test]
    fn test_meta_package_exposes_multiple_modules() {
        let index = build_module_index(pairs(&[
            ("meta", "alpha/__init__.py"),
            ("meta", "beta/__init__.py"),
        ]));
        assert_eq!(index["meta"], vec!["alpha", "beta"]);
    }

    #[test]
    fn test_forward_slash_fallback() {
        // Distribution metadata may carry `/`-separated paths regardless of
        // the build platform; the single-segment retry handles it
        let index = build_module_index(pairs(&[("six", "six/__init__.py")]));
        assert_eq!(index["six"], vec!["six"]);
    }

    #[test]
    fn test_non_py_files_ignored() {
        let index = build_module_index(pairs(&[
            ("foo", "foo/__init__.pyc"),
            ("foo", "foo-1.0.dist-info/RECORD"),
            ("foo", "foo/data.json"),
        ]));
        assert!(index.is_empty());
    }

    #[test]
    fn flat_module_not_indexed() {
        // Documented gap: a flat single-file distribution never registers a
        // module, even though `import six` would work at runtime. Downstream
        // the key itself is used as the fallback module name.
        let index = build_module_index(pairs(&[("six", "six.py")]));
        assert!(!index.contains_key("six"));
    }

    #[test]
    fn test_deep_submodule_init() {
        let index = build_module_index(pairs(&[("django", "django/db/models/__init__.py")]));
        // The immediate parent is registered, deep or not
        assert_eq!(index["django"], vec!["models"]);
    }
}
