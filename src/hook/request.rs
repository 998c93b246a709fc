//! Incoming hook request.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::HookError;

/// Tool name the host uses for shell execution.
pub const SHELL_TOOL: &str = "Bash";

/// A `PreToolUse` request as sent by the host.
///
/// Fields are kept loosely typed: a request that names another tool, or
/// carries an odd `command`, is simply not ours to judge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookRequest {
    #[serde(default)]
    pub tool_name: Value,
    #[serde(default)]
    pub tool_input: Value,
}

impl HookRequest {
    /// Parse one JSON document. Anything but a JSON object is rejected.
    pub fn parse(input: &str) -> Result<Self, HookError> {
        let value: Value = serde_json::from_str(input).map_err(HookError::MalformedRequest)?;
        let Value::Object(fields) = value else {
            return Err(HookError::NotAnObject);
        };
        serde_json::from_value(Value::Object(fields)).map_err(HookError::MalformedRequest)
    }

    pub fn is_shell(&self) -> bool {
        self.tool_name.as_str() == Some(SHELL_TOOL)
    }

    /// The non-empty command string, if present.
    pub fn command(&self) -> Option<&str> {
        self.tool_input
            .as_object()
            .and_then(|input: &Map<String, Value>| input.get("command"))
            .and_then(Value::as_str)
            .filter(|cmd| !cmd.is_empty())
    }
}
