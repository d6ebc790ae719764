//! unrequire CLI - unused Python dependency detector.
//!
//! Features:
//! - Recursive source scanning with directory pruning
//! - dist-info/egg-info site-packages enumeration
//! - pipenv `graph --json` input
//! - Transitive dependency expansion (cycle-safe)
//! - Ready-made `pip uninstall` command output
//!
//! Exit codes (CI-friendly): 0 = no unused packages, 1 = unused packages
//! found, 2 = internal error (including panics).

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use unrequire_core::{
    build_module_index, collect_imports, enumerate_installed, gather_py_files_with_excludes,
    init_structured_logging, load_config, load_graph, log_error, log_info, log_warn, print_json,
    print_plain, resolve_unused, uninstall_command,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find installed Python packages nothing imports")]
pub struct Cli {
    /// The directory containing Python files to check (recursive)
    #[arg(long, default_value = ".")]
    path: String,

    /// The pipenv dependency graph (JSON, as from `pipenv graph --json`)
    #[arg(long, default_value = "graph.json")]
    graph: String,

    /// The site-packages directory; `[path]` is replaced by --path
    #[arg(long, default_value = "[path]/venv/lib/python3.6/site-packages")]
    package_path: String,

    /// A comma separated list of directories to exclude from checks
    #[arg(long, default_value = "")]
    exclude: String,

    /// Output the pip command to uninstall unused requirements
    #[arg(long)]
    uninstall: bool,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,
}

/// Decides the output format: the `--json` flag wins, otherwise the config
/// file's `output.format = "json"` applies.
fn use_json_output(json_flag: bool, config_format: Option<&str>) -> bool {
    json_flag || config_format == Some("json")
}

/// Runs the full pipeline and reports results.
///
/// Returns the sorted unused keys; any error here is an internal failure,
/// kept separate from the "unused packages found" outcome so main can map
/// them to distinct exit codes.
fn run(cli: &Cli) -> Result<Vec<String>> {
    let root = Path::new(&cli.path);
    let package_path = PathBuf::from(cli.package_path.replace("[path]", &cli.path));

    // 1. Merge excludes and output format from unrequire.toml (config errors
    //    warn, never fail)
    let mut excludes: Vec<String> = cli
        .exclude
        .split(',')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    let mut config_format: Option<String> = None;
    match load_config(root) {
        Ok(Some(cfg)) => {
            if let Some(list) = cfg.exclude {
                excludes.extend(list);
            }
            config_format = cfg.output.and_then(|o| o.format);
        }
        Ok(None) => {} // No config file - that's fine
        Err(e) => {
            log_warn(&format!("config load failed: {:#}", e));
        }
    }

    // 2. Scan for .py files and extract the import set
    let exclude_refs: Vec<&str> = excludes.iter().map(String::as_str).collect();
    let files = gather_py_files_with_excludes(root, &exclude_refs)
        .with_context(|| format!("Failed to gather Python files from: {}", cli.path))?;
    let imports = collect_imports(&files)
        .with_context(|| format!("Failed to extract imports from: {}", cli.path))?;

    // 3. Build the module index from installed distributions
    let installed = enumerate_installed(&package_path).with_context(|| {
        format!(
            "Failed to enumerate distributions in: {}",
            package_path.display()
        )
    })?;
    let module_index = build_module_index(installed);

    // 4. Load the dependency graph
    let records = load_graph(Path::new(&cli.graph))
        .with_context(|| format!("Failed to load dependency graph: {}", cli.graph))?;

    log_info(&format!(
        "scanned {} files, {} imports, {} packages in graph",
        files.len(),
        imports.len(),
        records.len()
    ));

    // 5. Resolve unused packages
    let mut unused: Vec<String> = resolve_unused(&module_index, &imports, &records)
        .into_iter()
        .collect();
    unused.sort();

    // 6. Report results
    if use_json_output(cli.json, config_format.as_deref()) {
        print_json(&unused);
    } else {
        print_plain(&unused);
        if cli.uninstall {
            if let Some(cmd) = uninstall_command(&unused) {
                println!("{}", cmd);
            }
        }
    }

    Ok(unused)
}

fn main() {
    // Global panic guard - panics are internal errors, exit code 2
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] unrequire internal error: {}", info);
        std::process::exit(2);
    }));

    // Initialize structured logging (JSON to stderr, respects RUST_LOG)
    init_structured_logging();

    let cli = Cli::parse();

    // Exit code contract: 0 = clean, 1 = unused found, 2 = internal error
    match run(&cli) {
        Ok(unused) => std::process::exit(if unused.is_empty() { 0 } else { 1 }),
        Err(e) => {
            log_error(&format!("{:#}", e));
            eprintln!("[ERROR] {:#}", e);
            std::process::exit(2);
        }
    }
}
