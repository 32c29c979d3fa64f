//! Command-line words to values.

use kestrel_value::Value;

/// Read a word as an int, then a float, then `none`/`true`/`false`,
/// falling back to a string.
pub fn coerce(word: &str) -> Value {
    if let Ok(n) = word.parse::<i64>() {
        return Value::int(n);
    }
    if let Ok(x) = word.parse::<f64>() {
        if x.is_finite() {
            return Value::float(x);
        }
    }
    match word {
        "none" => Value::None,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::string(word),
    }
}
