use serde_json::Value;

/// Print a command result to stdout.
///
/// Objects and arrays are emitted as compact JSON; bare strings print
/// without quotes so lookups stay shell-friendly.
pub fn print_value(value: &Value) {
    match value {
        Value::String(s) => println!("{}", s),
        other => match serde_json::to_string(other) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("JSON serialization error: {}", e),
        },
    }
}
