use serde_json::{Map, Value};

pub const CANDIDATE_REQUIRED: &str = "Candidate name is required.";
pub const TOKEN_NOT_FOUND: &str = "Authentication token not found.";
pub const BACKEND_REPORTED_ISSUE: &str = "Backend reported an issue with the vote submission.";
pub const SUBMISSION_FAILED: &str = "Failed to submit vote.";

/// Result of one vote submission, the only shape callers of the submitter ever see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    Success {
        message: String,
    },
    Failure {
        message: String,
        status_code: Option<u16>,
    },
}

impl VoteOutcome {
    pub fn success<S: Into<String>>(message: S) -> Self {
        VoteOutcome::Success {
            message: message.into(),
        }
    }

    pub fn failure<S: Into<String>>(message: S, status_code: Option<u16>) -> Self {
        VoteOutcome::Failure {
            message: message.into(),
            status_code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, VoteOutcome::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            VoteOutcome::Success { message } | VoteOutcome::Failure { message, .. } => message,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            VoteOutcome::Success { .. } => None,
            VoteOutcome::Failure { status_code, .. } => *status_code,
        }
    }
}

impl std::fmt::Display for VoteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoteOutcome::Success { message } => write!(f, "{}", message),
            VoteOutcome::Failure {
                message,
                status_code: Some(status),
            } => write!(f, "{} (HTTP {})", message, status),
            VoteOutcome::Failure { message, .. } => write!(f, "{}", message),
        }
    }
}

/// What the voting backend said about an accepted request, decided once from the raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteReply {
    Accepted(String),
    Rejected(String),
}

impl VoteReply {
    pub fn classify(candidate: &str, body: &str) -> Self {
        if body.trim().is_empty() {
            return VoteReply::Accepted(status_updated(candidate));
        }

        match serde_json::from_str::<Value>(body) {
            // Plain-text replies are taken as an acknowledgement
            Err(_) => VoteReply::Accepted(recorded(candidate)),
            Ok(Value::Null) => VoteReply::Accepted(status_updated(candidate)),
            Ok(Value::Object(fields)) => Self::classify_object(candidate, &fields),
            Ok(Value::Array(_)) => VoteReply::Rejected(BACKEND_REPORTED_ISSUE.to_string()),
            Ok(_) => VoteReply::Accepted(recorded(candidate)),
        }
    }

    fn classify_object(candidate: &str, fields: &Map<String, Value>) -> Self {
        let succeeded = fields.get("success") == Some(&Value::Bool(true));
        let message = truthy_text(fields.get("message"));

        if succeeded || message.is_some() {
            return VoteReply::Accepted(message.unwrap_or_else(|| recorded(candidate)));
        }

        VoteReply::Rejected(
            truthy_text(fields.get("error")).unwrap_or_else(|| BACKEND_REPORTED_ISSUE.to_string()),
        )
    }
}

impl From<VoteReply> for VoteOutcome {
    fn from(reply: VoteReply) -> Self {
        match reply {
            VoteReply::Accepted(message) => VoteOutcome::success(message),
            VoteReply::Rejected(message) => VoteOutcome::failure(message, None),
        }
    }
}

/// Most specific message an error body carries: its `message`, then its `error`.
pub fn error_body_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => {
            truthy_text(fields.get("message")).or_else(|| truthy_text(fields.get("error")))
        }
        _ => None,
    }
}

fn status_updated(candidate: &str) -> String {
    format!("Vote status updated for {}.", candidate)
}

fn recorded(candidate: &str) -> String {
    format!("Vote successfully recorded for {}.", candidate)
}

fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
