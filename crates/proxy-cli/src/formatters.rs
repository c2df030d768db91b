//! Output formatters for CLI commands.
//!
//! Command results are plain serializable structs. They are printed as
//! indented JSON, as `key: value` lines for scripts, or as a colored
//! listing for humans.

use anyhow::Result;
use colored::Colorize;
use proxy_gen_core::cli::OutputFormat;
use serde::Serialize;
use serde_json::Value;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if the data cannot be serialized.
///
/// # Examples
///
/// ```
/// use proxy_gen_cli::formatters::format_output;
/// use proxy_gen_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Removed {
///     path: String,
///     removed: bool,
/// }
///
/// let data = Removed { path: "ClientProxies".to_string(), removed: true };
///
/// let output = format_output(&data, OutputFormat::Text)?;
/// assert_eq!(output, "path: ClientProxies\nremoved: true");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// Renders a scalar without quotes; anything else as compact JSON.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, Value, scalar};

    /// Format data as `key: value` lines.
    ///
    /// Array fields produce one line per element with the same key, which
    /// keeps the output friendly to `grep` and `cut`. Non-object data is
    /// printed as a single value.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;

        let Value::Object(fields) = value else {
            return Ok(scalar(&value));
        };

        let mut lines = Vec::new();
        for (key, field) in &fields {
            match field {
                Value::Array(items) => {
                    lines.extend(items.iter().map(|item| format!("{key}: {}", scalar(item))));
                }
                other => lines.push(format!("{key}: {}", scalar(other))),
            }
        }
        Ok(lines.join("\n"))
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize, Value, scalar};

    /// Format data as a colorized listing.
    ///
    /// Keys are bold, booleans and numbers highlighted; array fields become
    /// indented bullet lists, empty arrays are shown as `none`.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;

        let Value::Object(fields) = value else {
            return Ok(highlight(&value));
        };

        let width = fields.keys().map(String::len).max().unwrap_or(0);
        let mut out = Vec::new();
        for (key, field) in &fields {
            let label = format!("{key:<width$}").blue().bold();
            match field {
                Value::Array(items) if items.is_empty() => {
                    out.push(format!("{label}  {}", "none".dimmed()));
                }
                Value::Array(items) => {
                    out.push(format!("{label}  {}", items.len().to_string().cyan()));
                    for item in items {
                        out.push(format!("  {} {}", "•".dimmed(), highlight(item)));
                    }
                }
                other => out.push(format!("{label}  {}", highlight(other))),
            }
        }
        Ok(out.join("\n"))
    }

    fn highlight(value: &Value) -> String {
        match value {
            Value::Null => "-".dimmed().to_string(),
            Value::Bool(true) => "yes".green().to_string(),
            Value::Bool(false) => "no".yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            other => scalar(other),
        }
    }
}
