//! Tool registry and handlers for the mocked MCP backend
//!
//! The registry is a closed enum: adding or removing a tool is a
//! compile-time-checked change, and dispatch is an exhaustive match.
//! Handlers are pure functions of the parameter object; no I/O.

use chrono::Utc;
use serde_json::{json, Value};

use crate::domain::models::ToolOutcome;

/// The closed set of tools exposed by the mocked MCP backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    GetServerInfo,
    CalculateOperation,
    FormatText,
    GetSystemStatus,
}

impl ToolName {
    /// All registered tools, in listing order
    pub const ALL: [ToolName; 4] = [
        ToolName::GetServerInfo,
        ToolName::CalculateOperation,
        ToolName::FormatText,
        ToolName::GetSystemStatus,
    ];

    /// Resolve a tool by name; `None` is a lookup miss
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "get_server_info" => Some(ToolName::GetServerInfo),
            "calculate_operation" => Some(ToolName::CalculateOperation),
            "format_text" => Some(ToolName::FormatText),
            "get_system_status" => Some(ToolName::GetSystemStatus),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::GetServerInfo => "get_server_info",
            ToolName::CalculateOperation => "calculate_operation",
            ToolName::FormatText => "format_text",
            ToolName::GetSystemStatus => "get_system_status",
        }
    }

    /// Short description used in the tool manifest offered to the model
    pub fn description(self) -> &'static str {
        match self {
            ToolName::GetServerInfo => "Get name, version, and status of the MCP server",
            ToolName::CalculateOperation => {
                "Run an arithmetic operation (sum, average, max, min) over a list of numbers"
            }
            ToolName::FormatText => {
                "Format text with a style (uppercase, lowercase, title, reverse)"
            }
            ToolName::GetSystemStatus => "Get CPU, memory, and disk usage of the MCP host",
        }
    }

    /// JSON schema of the tool parameters, for the provider manifest
    pub fn parameters_schema(self) -> Value {
        match self {
            ToolName::GetServerInfo | ToolName::GetSystemStatus => json!({
                "type": "object",
                "properties": {}
            }),
            ToolName::CalculateOperation => json!({
                "type": "object",
                "properties": {
                    "operation": {
                        "type": "string",
                        "enum": ["sum", "average", "max", "min"]
                    },
                    "numbers": {
                        "type": "array",
                        "items": {"type": "number"}
                    }
                },
                "required": ["operation", "numbers"]
            }),
            ToolName::FormatText => json!({
                "type": "object",
                "properties": {
                    "text": {"type": "string"},
                    "style": {
                        "type": "string",
                        "enum": ["uppercase", "lowercase", "title", "reverse"]
                    }
                },
                "required": ["text", "style"]
            }),
        }
    }
}

/// Dispatch a resolved tool to its handler
///
/// Handler failures come back as error outcomes, never as panics or
/// propagated faults.
pub fn execute(tool: ToolName, params: &Value) -> ToolOutcome {
    match tool {
        ToolName::GetServerInfo => ToolOutcome::success(server_info()),
        ToolName::CalculateOperation => calculate(params),
        ToolName::FormatText => format_text(params),
        ToolName::GetSystemStatus => ToolOutcome::success(system_status()),
    }
}

/// Canned server identity payload; no real introspection
fn server_info() -> Value {
    json!({
        "server_name": "Toolbridge-Mock-MCP",
        "status": "online",
        "version": env!("CARGO_PKG_VERSION"),
        "location": "local",
        "timestamp": Utc::now().to_rfc3339(),
    })
}

/// Canned host metrics payload; no real introspection
fn system_status() -> Value {
    json!({
        "cpu_percent": 15.5,
        "memory_usage": 45.2,
        "disk_usage": 62.8,
        "timestamp": Utc::now().to_rfc3339(),
    })
}

fn calculate(params: &Value) -> ToolOutcome {
    let operation = params
        .get("operation")
        .and_then(Value::as_str)
        .unwrap_or("sum");

    let numbers = match parse_numbers(params.get("numbers")) {
        Ok(numbers) => numbers,
        Err(message) => return ToolOutcome::error(message),
    };

    let result = match operation {
        "sum" => numbers.iter().sum(),
        // Empty input yields 0 rather than a divide-by-zero failure
        "average" => {
            if numbers.is_empty() {
                0.0
            } else {
                numbers.iter().sum::<f64>() / numbers.len() as f64
            }
        }
        "max" => numbers.iter().copied().fold(f64::MIN, f64::max),
        "min" => numbers.iter().copied().fold(f64::MAX, f64::min),
        other => {
            return ToolOutcome::error(format!("Unsupported operation: {other}"));
        }
    };

    let result = if numbers.is_empty() { 0.0 } else { result };

    ToolOutcome::success(json!({
        "operation": operation,
        "numbers": numbers.iter().copied().map(number_value).collect::<Vec<_>>(),
        "result": number_value(result),
    }))
}

fn parse_numbers(value: Option<&Value>) -> Result<Vec<f64>, String> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    let Some(entries) = value.as_array() else {
        return Err("numbers must be an array of numbers".to_string());
    };

    entries
        .iter()
        .map(|entry| {
            entry
                .as_f64()
                .ok_or_else(|| "numbers must contain only numbers".to_string())
        })
        .collect()
}

/// Serialize integral values as JSON integers (`15`, not `15.0`)
fn number_value(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        json!(value as i64)
    } else {
        json!(value)
    }
}

fn format_text(params: &Value) -> ToolOutcome {
    let text = params.get("text").and_then(Value::as_str).unwrap_or("");
    let style = params
        .get("style")
        .and_then(Value::as_str)
        .unwrap_or("normal");

    // Unknown styles pass the text through unchanged; the requested style
    // is still echoed back to the caller.
    let formatted = match style {
        "uppercase" => text.to_uppercase(),
        "lowercase" => text.to_lowercase(),
        "title" => title_case(text),
        "reverse" => text.chars().rev().collect(),
        _ => text.to_string(),
    };

    ToolOutcome::success(json!({
        "original": text,
        "formatted": formatted,
        "style": style,
        "length": text.chars().count(),
    }))
}

/// Word-initial capitalization with the rest lowercased
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_of(outcome: ToolOutcome) -> Value {
        match outcome {
            ToolOutcome::Success { result } => result,
            ToolOutcome::Error { error } => panic!("expected success, got error: {error}"),
        }
    }

    #[test]
    fn test_registry_round_trip() {
        for tool in ToolName::ALL {
            assert_eq!(ToolName::from_name(tool.as_str()), Some(tool));
        }
        assert_eq!(ToolName::from_name("nonexistent_tool"), None);
    }

    #[test]
    fn test_sum_returns_arithmetic_sum() {
        let outcome = execute(
            ToolName::CalculateOperation,
            &json!({"operation": "sum", "numbers": [1, 2, 3, 4, 5]}),
        );
        let result = result_of(outcome);
        assert_eq!(result["result"], json!(15));
        assert_eq!(result["operation"], "sum");
        assert_eq!(result["numbers"], json!([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_average_of_empty_is_zero() {
        let outcome = execute(
            ToolName::CalculateOperation,
            &json!({"operation": "average", "numbers": []}),
        );
        assert_eq!(result_of(outcome)["result"], json!(0));
    }

    #[test]
    fn test_average_keeps_fractional_results() {
        let outcome = execute(
            ToolName::CalculateOperation,
            &json!({"operation": "average", "numbers": [1, 2]}),
        );
        assert_eq!(result_of(outcome)["result"], json!(1.5));
    }

    #[test]
    fn test_max_and_min() {
        let outcome = execute(
            ToolName::CalculateOperation,
            &json!({"operation": "max", "numbers": [3.5, -1, 2]}),
        );
        assert_eq!(result_of(outcome)["result"], json!(3.5));

        let outcome = execute(
            ToolName::CalculateOperation,
            &json!({"operation": "min", "numbers": [3.5, -1, 2]}),
        );
        assert_eq!(result_of(outcome)["result"], json!(-1));
    }

    #[test]
    fn test_max_of_empty_is_zero() {
        let outcome = execute(
            ToolName::CalculateOperation,
            &json!({"operation": "max", "numbers": []}),
        );
        assert_eq!(result_of(outcome)["result"], json!(0));
    }

    #[test]
    fn test_unknown_operation_is_handler_error() {
        let outcome = execute(
            ToolName::CalculateOperation,
            &json!({"operation": "median", "numbers": [1, 2, 3]}),
        );
        match outcome {
            ToolOutcome::Error { error } => assert!(error.contains("median")),
            ToolOutcome::Success { .. } => panic!("expected error outcome"),
        }
    }

    #[test]
    fn test_operation_defaults_to_sum() {
        let outcome = execute(ToolName::CalculateOperation, &json!({"numbers": [2, 3]}));
        assert_eq!(result_of(outcome)["result"], json!(5));
    }

    #[test]
    fn test_non_numeric_entry_is_handler_error() {
        let outcome = execute(
            ToolName::CalculateOperation,
            &json!({"operation": "sum", "numbers": [1, "two"]}),
        );
        assert!(outcome.is_error());
    }

    #[test]
    fn test_format_uppercase_example() {
        let outcome = execute(
            ToolName::FormatText,
            &json!({"text": "Hello MCP World!", "style": "uppercase"}),
        );
        let result = result_of(outcome);
        assert_eq!(
            result,
            json!({
                "original": "Hello MCP World!",
                "formatted": "HELLO MCP WORLD!",
                "style": "uppercase",
                "length": 16,
            })
        );
    }

    #[test]
    fn test_format_unknown_style_passes_through() {
        let outcome = execute(
            ToolName::FormatText,
            &json!({"text": "MiXeD Case", "style": "sparkly"}),
        );
        let result = result_of(outcome);
        assert_eq!(result["formatted"], "MiXeD Case");
        assert_eq!(result["style"], "sparkly");
    }

    #[test]
    fn test_format_title_and_reverse() {
        let outcome = execute(
            ToolName::FormatText,
            &json!({"text": "hello mcp WORLD", "style": "title"}),
        );
        assert_eq!(result_of(outcome)["formatted"], "Hello Mcp World");

        let outcome = execute(
            ToolName::FormatText,
            &json!({"text": "abc", "style": "reverse"}),
        );
        assert_eq!(result_of(outcome)["formatted"], "cba");
    }

    #[test]
    fn test_server_info_and_system_status_are_canned() {
        let info = result_of(execute(ToolName::GetServerInfo, &json!({})));
        assert_eq!(info["status"], "online");
        assert!(info["server_name"].is_string());

        let status = result_of(execute(ToolName::GetSystemStatus, &json!({})));
        assert!(status["cpu_percent"].is_number());
        assert!(status["timestamp"].is_string());
    }
}
