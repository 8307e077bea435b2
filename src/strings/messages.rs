//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Provider error text lives on `CiError` itself.

pub const STATUS_ONLY_SUCCESS_OR_FAILED: &str = "Status can only be failed or success.";
pub const CANCEL_NEEDS_BUILD_NUMBER: &str = "I can't cancel without a build number";
pub const RETRY_USAGE: &str =
    "Usage: `retry <project> <build_num|last>` or `retry all <success|failed>`";

pub fn current_status(summary: &str) -> String {
    format!("Current status: {summary}")
}

pub fn last_status(summary: &str) -> String {
    format!("Last status: {summary}")
}

pub fn status_unknown(project: &str, branch: &str) -> String {
    format!("Current status: {project} [{branch}]: unknown")
}

pub fn last_status_unknown(project: &str, branch: &str) -> String {
    format!("Last build status for {project} [{branch}]: unknown")
}

pub fn retrying_build(old_build: u64, project: &str, branch: &str, new_build: u64) -> String {
    format!("Retrying build {old_build} of {project} [{branch}] with build {new_build}")
}

pub fn no_builds_to_retry(project: &str, branch: &str) -> String {
    format!("There are no builds of {project} [{branch}] to retry")
}

pub fn canceled_build(build: u64, project: &str, branch: &str) -> String {
    format!("Canceled build {build} for {project} [{branch}]")
}

pub fn cleared_cache(project: &str) -> String {
    format!("Cleared build cache for {project}")
}

pub fn no_projects_match(status: &str) -> String {
    format!("No projects match status {status}")
}

pub fn projects_by_status_header(status: &str) -> String {
    format!("Projects where the last build's status is {status}:\n")
}

pub fn invalid_build_number(arg: &str) -> String {
    format!("`{arg}` is not a build number")
}
