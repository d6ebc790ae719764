//! Output formatting - plaintext and JSON.

use serde_json::json;

/// Prints unused packages in plain text format.
pub fn print_plain(unused: &[String]) {
    if unused.is_empty() {
        println!("Good job! No unused requirements");
    } else {
        println!("UNUSED REQUIREMENTS ({}):", unused.len());
        for key in unused {
            println!("- {}", key);
        }
    }
}

/// Prints unused packages in JSON format.
///
/// Falls back to a simpler rendering if serialization fails (should never
/// happen with string arrays, but all cases are handled).
pub fn print_json(unused: &[String]) {
    match serde_json::to_string_pretty(&json!({ "unused": unused })) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{{\"unused\": {:?}}}", unused);
        }
    }
}

/// Formats a ready-made removal command for the unused packages.
///
/// Returns `None` when there is nothing to remove. The caller decides
/// whether to print it; this core never uninstalls anything itself.
pub fn uninstall_command(unused: &[String]) -> Option<String> {
    if unused.is_empty() {
        None
    } else {
        Some(format!("pip uninstall {}", unused.join(" ")))
    }
}
