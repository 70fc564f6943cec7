//! Resolve the gate's two inputs: the pull-request event kind and the head
//! commit subject.

use std::io::{IsTerminal, Read};
use std::path::Path;
use std::process::Command;

use commitgate_core::types::{EventKind, GateError};
use commitgate_enforce::grammar::subject_line;
use serde::Deserialize;

/// The slice of a pull-request webhook payload the gate cares about.
#[derive(Debug, Deserialize)]
struct EventPayload {
    action: Option<String>,
}

/// Determine the event kind. `None` means no event context was supplied and
/// the check should always run.
pub(crate) fn resolve_event_kind(
    event: Option<&str>,
    event_path: Option<&Path>,
) -> Result<Option<EventKind>, GateError> {
    if let Some(kind) = event {
        return kind.parse().map(Some);
    }
    match event_path {
        Some(path) => read_event_payload(path).map(Some),
        None => Ok(None),
    }
}

pub(crate) fn read_event_payload(path: &Path) -> Result<EventKind, GateError> {
    let payload_error = |reason: String| GateError::EventPayload {
        path: path.display().to_string(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| payload_error(e.to_string()))?;
    let payload: EventPayload =
        serde_json::from_str(&content).map_err(|e| payload_error(e.to_string()))?;
    let action = payload
        .action
        .ok_or_else(|| payload_error("missing `action` field".to_string()))?;
    tracing::debug!(path = %path.display(), %action, "read event kind from payload");
    action.parse()
}

/// Determine the commit subject: explicit message, then git, then stdin.
pub(crate) fn resolve_subject(
    message: Option<&str>,
    from_git: Option<&str>,
) -> Result<String, GateError> {
    if let Some(message) = message {
        tracing::debug!("using subject from --message");
        return Ok(message.to_string());
    }
    if let Some(rev) = from_git {
        return git_subject(rev);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(GateError::InputUnavailable(
            "pass --message, --from-git, or pipe the message on stdin".to_string(),
        ));
    }
    tracing::debug!("reading subject from stdin");
    read_subject(stdin.lock())
}

/// Read a commit message stream and return its first line.
///
/// A stream that yields no bytes at all carries no message; an explicit empty
/// line is an empty subject.
pub(crate) fn read_subject<R: Read>(mut reader: R) -> Result<String, GateError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    if buf.is_empty() {
        return Err(GateError::InputUnavailable(
            "stdin closed without any commit message".to_string(),
        ));
    }
    let message = String::from_utf8(buf).map_err(|e| {
        GateError::InputUnavailable(format!("commit message on stdin is not valid UTF-8: {e}"))
    })?;
    Ok(subject_line(&message).to_string())
}

/// Subject line of `rev`: the first line of its full message, as for stdin.
pub(crate) fn git_subject(rev: &str) -> Result<String, GateError> {
    git_subject_in(Path::new("."), rev)
}

pub(crate) fn git_subject_in(repo: &Path, rev: &str) -> Result<String, GateError> {
    let git_error = |reason: String| GateError::Git {
        rev: rev.to_string(),
        reason,
    };
    let output = Command::new("git")
        .args(["log", "-1", "--format=%B", "--end-of-options", rev, "--"])
        .current_dir(repo)
        .output()
        .map_err(|e| git_error(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(git_error(stderr.trim().to_string()));
    }

    let message = String::from_utf8(output.stdout)
        .map_err(|e| git_error(format!("commit message is not valid UTF-8: {e}")))?;
    let subject = subject_line(&message).to_string();
    tracing::debug!(rev, subject = %subject, "read subject from git");
    Ok(subject)
}
