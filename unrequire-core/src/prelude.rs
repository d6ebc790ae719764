//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use unrequire_core::prelude::*;
//! ```

// Core analysis types
pub use crate::error::{UnrequireError, UnrequireResult};

// Import extraction
pub use crate::imports::{collect_imports, parse_import_line};

// Module index
pub use crate::modules::{build_module_index, ModuleIndex};

// Graph loading and expansion
pub use crate::graph::{build_graph, expand_dependencies, load_graph, PackageRecord};

// Unused resolution
pub use crate::resolve::resolve_unused;

// File scanning
pub use crate::scan::{gather_py_files, gather_py_files_with_excludes};

// Installed distributions
pub use crate::site::enumerate_installed;

// Configuration
pub use crate::config::{load_config, UnrequireConfig};

// Builder API
pub use crate::builder::{AnalysisResult, Unrequire};
