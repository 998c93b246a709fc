//! Process boundary for the `PreToolUse` hook.
//!
//! One JSON request comes in on stdin, at most one JSON response goes out on
//! stdout. Denial travels in the payload; the process still succeeds.

mod request;
mod response;

use std::io::{Read, Write};

use thiserror::Error;

pub use request::{HookRequest, SHELL_TOOL};
pub use response::{HOOK_EVENT, HookResponse, HookSpecificOutput};

use crate::security::{CommandValidator, Decision};

#[derive(Debug, Error)]
pub enum HookError {
    #[error("failed to read hook input: {0}")]
    Read(std::io::Error),
    #[error("Invalid JSON input: {0}")]
    MalformedRequest(serde_json::Error),
    #[error("Invalid JSON input: expected an object")]
    NotAnObject,
    #[error("failed to encode hook response: {0}")]
    Encode(serde_json::Error),
    #[error("failed to write hook response: {0}")]
    Write(std::io::Error),
}

/// Decide on a raw request. `None` means allow with nothing to say.
pub fn respond(
    input: &str,
    validator: &CommandValidator,
) -> Result<Option<HookResponse>, HookError> {
    let request = HookRequest::parse(input)?;

    if !request.is_shell() {
        tracing::debug!(tool = %request.tool_name, "not a shell call, passing through");
        return Ok(None);
    }

    let Some(command) = request.command() else {
        tracing::debug!("shell call without a command, passing through");
        return Ok(None);
    };

    let decision = validator.validate(command);
    match &decision {
        Decision::Deny { reason } => tracing::info!(command, reason = %reason, "denied"),
        Decision::Warn { message } => tracing::info!(command, warning = %message, "warned"),
        Decision::Allow => tracing::debug!(command, "allowed"),
    }

    Ok(HookResponse::from_decision(&decision))
}

/// Read a request from `reader`, write any response to `writer`.
pub fn run<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    validator: &CommandValidator,
) -> Result<(), HookError> {
    let mut input = String::new();
    reader.read_to_string(&mut input).map_err(HookError::Read)?;

    if let Some(response) = respond(&input, validator)? {
        let line = serde_json::to_string(&response).map_err(HookError::Encode)?;
        writeln!(writer, "{}", line).map_err(HookError::Write)?;
        writer.flush().map_err(HookError::Write)?;
    }
    Ok(())
}
