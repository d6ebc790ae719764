//! Builder pattern API for unrequire analysis.
//!
//! Provides a fluent interface for configuring and running the full
//! pipeline:
//!
//! ```rust,ignore
//! use unrequire_core::prelude::*;
//!
//! let result = Unrequire::new("/path/to/project")
//!     .graph("/path/to/graph.json")
//!     .site_packages("/path/to/venv/lib/python3.6/site-packages")
//!     .exclude_dirs(["migrations"])
//!     .analyze()?;
//!
//! for key in &result.unused {
//!     println!("Unused package: {}", key);
//! }
//! ```

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::graph::load_graph;
use crate::imports::collect_imports;
use crate::modules::build_module_index;
use crate::resolve::resolve_unused;
use crate::scan::gather_py_files_with_excludes;
use crate::site::enumerate_installed;

/// Default site-packages location relative to the scanned project.
const DEFAULT_SITE_PACKAGES: &str = "venv/lib/python3.6/site-packages";

/// Default graph document location relative to the scanned project.
const DEFAULT_GRAPH: &str = "graph.json";

/// Builder for configuring unused dependency analysis.
#[derive(Debug, Clone)]
pub struct Unrequire {
    /// Root path of the source tree to scan
    root: PathBuf,

    /// Path to the dependency graph document
    graph_path: Option<PathBuf>,

    /// Path to the site-packages directory
    site_packages: Option<PathBuf>,

    /// Custom excluded directory names (added to the defaults)
    excluded_dirs: Vec<String>,
}

impl Unrequire {
    /// Create a new analysis builder for the given source tree.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            graph_path: None,
            site_packages: None,
            excluded_dirs: Vec::new(),
        }
    }

    /// Set the dependency graph document path.
    ///
    /// Defaults to `graph.json` inside the source root.
    pub fn graph(mut self, path: impl Into<PathBuf>) -> Self {
        self.graph_path = Some(path.into());
        self
    }

    /// Set the site-packages directory to enumerate.
    ///
    /// Defaults to `venv/lib/python3.6/site-packages` inside the source root.
    pub fn site_packages(mut self, path: impl Into<PathBuf>) -> Self {
        self.site_packages = Some(path.into());
        self
    }

    /// Add directory names to exclude from the source scan.
    pub fn exclude_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excluded_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Run the analysis and return results.
    pub fn analyze(&self) -> Result<AnalysisResult> {
        let graph_path = self
            .graph_path
            .clone()
            .unwrap_or_else(|| self.root.join(DEFAULT_GRAPH));
        let site_packages = self
            .site_packages
            .clone()
            .unwrap_or_else(|| self.root.join(DEFAULT_SITE_PACKAGES));

        // 1. Scan the source tree
        let excludes: Vec<&str> = self.excluded_dirs.iter().map(String::as_str).collect();
        let files = gather_py_files_with_excludes(&self.root, &excludes)
            .context("Failed to gather .py files")?;

        // 2. Extract the import set
        let imports = collect_imports(&files).context("Failed to extract imports")?;

        // 3. Build the module index from installed distributions
        let installed = enumerate_installed(&site_packages)
            .context("Failed to enumerate installed distributions")?;
        let module_index = build_module_index(installed);

        // 4. Load the dependency graph
        let records = load_graph(&graph_path).context("Failed to load dependency graph")?;

        // 5. Resolve unused packages
        let unused_set = resolve_unused(&module_index, &imports, &records);
        let mut unused: Vec<String> = unused_set.into_iter().collect();
        unused.sort();

        Ok(AnalysisResult {
            root: self.root.clone(),
            scanned_files: files.len(),
            total_packages: records.len(),
            imports,
            unused,
        })
    }
}

/// Result of running unused dependency analysis.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Root path that was scanned
    pub root: PathBuf,

    /// Number of source files scanned
    pub scanned_files: usize,

    /// Number of packages in the dependency graph
    pub total_packages: usize,

    /// Top-level names imported by the codebase
    pub imports: HashSet<String>,

    /// Unused package keys, sorted for deterministic output
    pub unused: Vec<String>,
}

impl AnalysisResult {
    /// Check if any unused packages were found.
    pub fn has_unused(&self) -> bool {
        !self.unused.is_empty()
    }

    /// Get the percentage of graph packages that are unused.
    pub fn unused_percentage(&self) -> f64 {
        if self.total_packages == 0 {
            0.0
        } else {
            (self.unused.len() as f64 / self.total_packages as f64) * 100.0
        }
    }
}
