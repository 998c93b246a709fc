//! Outgoing hook response, in the shape the host expects on stdout.

use serde::Serialize;

use crate::security::Decision;

/// Hook event this binary answers.
pub const HOOK_EVENT: &str = "PreToolUse";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HookResponse {
    /// Block the tool call.
    Deny {
        #[serde(rename = "hookSpecificOutput")]
        hook_specific_output: HookSpecificOutput,
    },
    /// Let the call through but show the user a message.
    Warn {
        #[serde(rename = "systemMessage")]
        system_message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: &'static str,
    pub permission_decision: &'static str,
    pub permission_decision_reason: String,
}

impl HookResponse {
    /// Map a decision onto the host schema. A plain allow has no response.
    pub fn from_decision(decision: &Decision) -> Option<Self> {
        match decision {
            Decision::Allow => None,
            Decision::Warn { message } => Some(HookResponse::Warn {
                system_message: message.clone(),
            }),
            Decision::Deny { reason } => Some(HookResponse::Deny {
                hook_specific_output: HookSpecificOutput {
                    hook_event_name: HOOK_EVENT,
                    permission_decision: "deny",
                    permission_decision_reason: reason.clone(),
                },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_allow_has_no_response() {
        assert_eq!(HookResponse::from_decision(&Decision::Allow), None);
    }

    #[test]
    fn test_deny_shape() {
        let resp = HookResponse::from_decision(&Decision::Deny {
            reason: "nope".to_string(),
        })
        .unwrap();
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "hookSpecificOutput": {
                    "hookEventName": "PreToolUse",
                    "permissionDecision": "deny",
                    "permissionDecisionReason": "nope"
                }
            })
        );
    }

    #[test]
    fn test_warn_shape() {
        let resp = HookResponse::from_decision(&Decision::Warn {
            message: "careful\nnow".to_string(),
        })
        .unwrap();
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "systemMessage": "careful\nnow" })
        );
    }
}
