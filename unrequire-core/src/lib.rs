//! unrequire-core: unused Python dependency detection library.
//!
//! This library provides modular components for scanning a Python source
//! tree, mapping installed distributions to the modules they expose, and
//! walking a dependency graph to find installed packages that nothing
//! actually imports.
//!
//! # Pipeline
//!
//! - **Import extraction**: line-oriented scan of every `.py` file for the
//!   set of top-level imported names
//! - **Module index**: installed file lists -> package key to exposed
//!   module names (`beautifulsoup4` installs `bs4`)
//! - **Graph expansion**: BFS over the pipenv dependency graph so that
//!   transitively required packages are never flagged
//! - **Resolution**: everything in the graph that is neither imported nor
//!   pulled in transitively is unused
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use unrequire_core::prelude::*;
//!
//! let result = Unrequire::new("/path/to/project")
//!     .graph("graph.json")
//!     .analyze()?;
//!
//! for key in &result.unused {
//!     println!("Unused package: {}", key);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`scan`]: parallel `.py` file discovery with directory pruning
//! - [`imports`]: line-oriented import extraction
//! - [`site`]: installed-distribution enumeration (dist-info/egg-info)
//! - [`modules`]: module index construction
//! - [`graph`]: graph document parsing and BFS expansion
//! - [`resolve`]: unused package resolution
//! - [`builder`]: fluent builder API for the full pipeline
//! - [`error`]: typed error handling

pub mod builder;
pub mod config;
pub mod error;
pub mod graph;
pub mod imports;
pub mod logging;
pub mod modules;
pub mod prelude;
pub mod report;
pub mod resolve;
pub mod scan;
pub mod site;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{IoResultExt, UnrequireError, UnrequireResult};

// Builder API
pub use builder::{AnalysisResult, Unrequire};

// Configuration
pub use config::{load_config, OutputConfig, UnrequireConfig};

// Import extraction
pub use imports::{collect_imports, is_import_line, parse_file, parse_import_line};

// Logging
pub use logging::{init_structured_logging, log_error, log_info, log_warn};

// Module index
pub use modules::{build_module_index, ModuleIndex};

// Graph loading and expansion
pub use graph::{
    build_graph, expand_dependencies, load_graph, parse_graph, DependencyRef, PackageInfo,
    PackageRecord,
};

// Reporting
pub use report::{print_json, print_plain, uninstall_command};

// Unused resolution
pub use resolve::resolve_unused;

// File scanning
pub use scan::{gather_py_files, gather_py_files_with_excludes, EXCLUDED_DIRS};

// Installed distributions
pub use site::{enumerate_installed, normalize_key, InstalledFile};
