use crate::error::AppError;

/// Print a status payload under a `before:`/`after:` marker.
pub fn print_status(label: &str, status: &serde_json::Value) {
    println!("{}:", label);
    println!(
        "{}",
        serde_json::to_string_pretty(status).unwrap_or_default()
    );
}

pub fn print_error(err: &AppError) {
    eprintln!(
        "{}",
        serde_json::to_string_pretty(&err.to_json()).unwrap_or_default()
    );
}
