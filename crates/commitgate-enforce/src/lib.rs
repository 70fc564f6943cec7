//! Commit subject enforcement for commitgate.
//!
//! Validates the head commit subject of a pull request against the
//! conventional-commit layout `<type>(<scope>)!: <description>` and produces
//! violations:
//! - C001: empty subject
//! - C002: missing type
//! - C003: missing ':' separator
//! - C004: unknown type
//! - C005: malformed or disallowed scope
//! - C006: missing space after ':'
//! - C007: empty description
//! - C008: subject longer than the configured limit

pub mod types;
pub mod grammar;
pub mod gate;
