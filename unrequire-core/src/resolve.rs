//! Unused package resolution.
//!
//! Correlates the three inputs: the module index tells us what each
//! installed package can be imported as, the import set tells us what the
//! codebase actually imports, and the dependency graph pulls in everything
//! an imported package needs transitively.
//!
//! The resolver owns a single used-set for the duration of one call. It is
//! seeded from the import set, grows monotonically, and never shrinks; the
//! final set difference at the end is authoritative, so a package marked
//! provisionally unused early in the pass can still be rescued by a later
//! package's dependency expansion.

use std::collections::HashSet;

use crate::graph::{build_graph, expand_dependencies, PackageRecord};
use crate::modules::ModuleIndex;

/// Classifies every package in the graph, returning the unused keys.
///
/// A package is used when one of its exposed module names appears in the
/// import set, or when it is reachable through dependency edges from a used
/// package. Everything else in the graph is unused.
///
/// Tie-break policy: module names are scanned in index order and the first
/// name found in the import set wins - the package is marked used, its
/// dependencies are expanded, and the remaining names are not checked.
///
/// Packages absent from the module index fall back to a single module name
/// equal to their own key. The result is an unordered set; the computation
/// is a pure function of its inputs and idempotent across calls.
pub fn resolve_unused(
    index: &ModuleIndex,
    imports: &HashSet<String>,
    records: &[PackageRecord],
) -> HashSet<String> {
    let g = build_graph(records);

    let mut used: HashSet<String> = imports.clone();
    let mut provisional: HashSet<String> = HashSet::new();

    for record in records {
        let key = record.key();
        let fallback = [key.to_string()];
        let module_names: &[String] = match index.get(key) {
            Some(names) => names,
            None => &fallback,
        };

        // An indexed key with no module names has nothing importable
        if module_names.is_empty() {
            provisional.insert(key.to_string());
            continue;
        }

        for name in module_names {
            if !imports.contains(name) {
                provisional.insert(key.to_string());
            } else {
                used.insert(key.to_string());
                let expanded = expand_dependencies(&g, record.dependency_keys());
                used.extend(expanded.into_iter().map(String::from));
                break; // first matching module wins
            }
        }
    }

    provisional
        .into_iter()
        .filter(|key| !used.contains(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DependencyRef, PackageInfo};
    use crate::modules::build_module_index;

    fn record(key: &str, deps: &[&str]) -> PackageRecord {
        PackageRecord {
            package: PackageInfo {
                key: key.to_string(),
                package_name: None,
                installed_version: None,
            },
            dependencies: deps
                .iter()
                .map(|d| DependencyRef { key: d.to_string() })
                .collect(),
        }
    }

    fn imports(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn index(entries: &[(&str, &[&str])]) -> ModuleIndex {
        entries
            .iter()
            .map(|(k, mods)| {
                (
                    k.to_string(),
                    mods.iter().map(|m| m.to_string()).collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    #[test]
    fn test_end_to_end_transitive_rescue() {
        // requests is imported directly, urllib3 only transitively, six not
        // at all: exactly six is unused
        let records = vec![
            record("requests", &["urllib3"]),
            record("six", &[]),
            record("urllib3", &[]),
        ];
        let idx = index(&[
            ("requests", &["requests"]),
            ("six", &["six"]),
            ("urllib3", &["urllib3"]),
        ]);

        let unused = resolve_unused(&idx, &imports(&["requests"]), &records);
        assert_eq!(unused, imports(&["six"]));
    }

    #[test]
    fn test_rescue_after_provisional_mark() {
        // Graph order puts the dependency first: it is marked provisionally
        // unused, then rescued by the dependent's expansion later in the pass
        let records = vec![record("urllib3", &[]), record("requests", &["urllib3"])];
        let idx = index(&[("requests", &["requests"]), ("urllib3", &["urllib3"])]);

        let unused = resolve_unused(&idx, &imports(&["requests"]), &records);
        assert!(unused.is_empty());
    }

    #[test]
    fn test_missing_index_falls_back_to_key() {
        let records = vec![record("flask", &[])];
        let idx = ModuleIndex::new();

        // Imported under its own key: used
        assert!(resolve_unused(&idx, &imports(&["flask"]), &records).is_empty());
        // Not imported: unused
        assert_eq!(
            resolve_unused(&idx, &imports(&[]), &records),
            imports(&["flask"])
        );
    }

    #[test]
    fn test_first_match_wins_short_circuit() {
        // The first module name misses, the second hits: used via the second
        // name, and the miss on the first name does not stick
        let records = vec![record("meta", &["dep"]), record("dep", &[])];
        let idx = index(&[("meta", &["never_imported", "alpha"]), ("dep", &["dep"])]);

        let unused = resolve_unused(&idx, &imports(&["alpha"]), &records);
        assert!(unused.is_empty());
    }

    #[test]
    fn test_empty_module_list_is_unused() {
        let records = vec![record("stub", &[])];
        let idx = index(&[("stub", &[])]);

        // Nothing importable: provisionally unused, and nothing rescues it
        let unused = resolve_unused(&idx, &imports(&["other"]), &records);
        assert_eq!(unused, imports(&["stub"]));
    }

    #[test]
    fn test_empty_module_list_rescued_by_matching_import() {
        // The used-accumulator is seeded from the import set, so an import
        // equal to the key rescues the provisional mark in the final filter
        let records = vec![record("stub", &[])];
        let idx = index(&[("stub", &[])]);

        let unused = resolve_unused(&idx, &imports(&["stub"]), &records);
        assert!(unused.is_empty());
    }

    #[test]
    fn test_module_name_differs_from_key() {
        let records = vec![record("beautifulsoup4", &[])];
        let idx = build_module_index(vec![(
            "beautifulsoup4".to_string(),
            "bs4/__init__.py".to_string(),
        )]);

        let unused = resolve_unused(&idx, &imports(&["bs4"]), &records);
        assert!(unused.is_empty());
    }

    #[test]
    fn test_deep_transitive_chain() {
        let records = vec![
            record("top", &["mid"]),
            record("mid", &["leaf"]),
            record("leaf", &[]),
            record("stray", &[]),
        ];
        let idx = index(&[
            ("top", &["top"]),
            ("mid", &["mid"]),
            ("leaf", &["leaf"]),
            ("stray", &["stray"]),
        ]);

        let unused = resolve_unused(&idx, &imports(&["top"]), &records);
        assert_eq!(unused, imports(&["stray"]));
    }

    #[test]
    fn test_cyclic_graph_terminates() {
        let records = vec![record("a", &["b"]), record("b", &["a"]), record("c", &[])];
        let idx = index(&[("a", &["a"]), ("b", &["b"]), ("c", &["c"])]);

        let unused = resolve_unused(&idx, &imports(&["a"]), &records);
        assert_eq!(unused, imports(&["c"]));
    }

    #[test]
    fn test_idempotent() {
        let records = vec![
            record("requests", &["urllib3"]),
            record("six", &[]),
            record("urllib3", &[]),
        ];
        let idx = index(&[
            ("requests", &["requests"]),
            ("six", &["six"]),
            ("urllib3", &["urllib3"]),
        ]);
        let imp = imports(&["requests"]);

        let first = resolve_unused(&idx, &imp, &records);
        let second = resolve_unused(&idx, &imp, &records);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_graph_yields_nothing() {
        let unused = resolve_unused(&ModuleIndex::new(), &imports(&["requests"]), &[]);
        assert!(unused.is_empty());
    }
}
