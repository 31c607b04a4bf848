pub mod chapters;
pub mod chunks;
pub mod completions;
pub mod convert;
pub mod inspect;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_PROJECT_ERROR: u8 = 2;

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

/// Report accumulated resolution warnings on stderr, colorized when the
/// terminal supports it.
pub fn print_warnings(warnings: &[String]) {
    let style = console::Style::new().yellow();
    for warning in warnings {
        eprintln!("{}", style.apply_to(format!("warning: {warning}")));
    }
}
