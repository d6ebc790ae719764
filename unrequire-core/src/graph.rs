//! Dependency graph loading, construction, and transitive expansion.
//!
//! The graph document is the JSON emitted by `pipenv graph --json`: an
//! ordered sequence of records, each carrying its own package key and the
//! keys of its direct dependencies. Keys are unique within the document, but
//! cycles are possible and must not hang the walker.
//!
//! Performance characteristics:
//! - Graph build: O(|V| + |E|) where V = packages, E = dependency edges
//! - Expansion: O(|V| + |E|) single BFS traversal, cycle-safe via the
//!   visited set (an explicit worklist, never recursion)

use petgraph::graphmap::DiGraphMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::Path;

use crate::error::{UnrequireError, UnrequireResult};

/// One record of the dependency graph document.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PackageRecord {
    /// The package this record describes.
    pub package: PackageInfo,
    /// Direct dependencies of this package.
    #[serde(default)]
    pub dependencies: Vec<DependencyRef>,
}

impl PackageRecord {
    /// Normalized key of this record's package.
    pub fn key(&self) -> &str {
        &self.package.key
    }

    /// Keys of this record's direct dependencies.
    pub fn dependency_keys(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(|d| d.key.as_str())
    }
}

/// Identity of an installed package within the graph.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PackageInfo {
    /// Normalized lowercase package name, unique within the graph.
    pub key: String,
    /// Display name as installed (optional in the document).
    #[serde(default)]
    pub package_name: Option<String>,
    /// Installed version string (optional in the document).
    #[serde(default)]
    pub installed_version: Option<String>,
}

/// Reference to a dependency by key.
///
/// The referenced key usually matches another record in the document, but
/// may point outside the graph; the walker treats such keys as leaves.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DependencyRef {
    pub key: String,
}

/// Parses a graph document from a JSON string.
///
/// `origin` is only used for error messages.
pub fn parse_graph(json: &str, origin: &Path) -> UnrequireResult<Vec<PackageRecord>> {
    serde_json::from_str(json).map_err(|e| UnrequireError::graph(origin, e.to_string()))
}

/// Loads and parses a graph document from disk.
///
/// A missing or malformed document is fatal; the resolver cannot run
/// without it.
pub fn load_graph(path: &Path) -> UnrequireResult<Vec<PackageRecord>> {
    let content = fs::read_to_string(path).map_err(|e| UnrequireError::io(path, e))?;
    parse_graph(&content, path)
}

/// Builds the dependency graph (DiGraphMap) from the parsed records.
///
/// Uses `DiGraphMap<&str, ()>` for memory efficiency: string slices avoid
/// cloning and the unit edge type minimizes footprint. Dependency keys with
/// no record of their own still become nodes; they simply have no outgoing
/// edges.
pub fn build_graph(records: &[PackageRecord]) -> DiGraphMap<&str, ()> {
    let mut g = DiGraphMap::new();

    for record in records {
        g.add_node(record.key());
        for dep in record.dependency_keys() {
            g.add_edge(record.key(), dep, ());
        }
    }

    g
}

/// Expands a seed set to the transitive closure of dependency keys.
///
/// Returns the seeds unioned with every key reachable by following
/// dependency edges, to unbounded depth. Implemented as an iterative
/// worklist BFS with a visited set, so cyclic graphs and repeated keys
/// terminate in O(|V| + |E|). Seeds absent from the graph are kept in the
/// result but expand to nothing.
pub fn expand_dependencies<'a>(
    g: &DiGraphMap<&'a str, ()>,
    seeds: impl IntoIterator<Item = &'a str>,
) -> HashSet<&'a str> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    for seed in seeds {
        if visited.insert(seed) && g.contains_node(seed) {
            queue.push_back(seed);
        }
    }

    while let Some(node) = queue.pop_front() {
        for dep in g.neighbors(node) {
            if visited.insert(dep) {
                queue.push_back(dep);
            }
        }
    }

    visited
}
