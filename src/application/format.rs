//! # Build Formatting
//!
//! Turns decoded CircleCI payloads into the one-line summaries posted to chat.

use crate::domain::config::CircleCiConfig;
use crate::domain::types::{Build, ProjectSummary};

/// First 7 characters of a revision hash, or the whole string if shorter.
pub fn to_sha(revision: &str) -> &str {
    match revision.char_indices().nth(7) {
        Some((idx, _)) => &revision[..idx],
        None => revision,
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn to_display(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `<Status> in build <num> of <url> [<branch>/<sha>] <committer>: <subject> - <why>`
pub fn build_status(build: &Build) -> String {
    format!(
        "{} in build {} of {} [{}/{}] {}: {} - {}",
        to_display(build.status.as_str()),
        build.build_num,
        text(&build.vcs_url),
        text(&build.branch),
        to_sha(text(&build.vcs_revision)),
        text(&build.committer_name),
        text(&build.subject),
        text(&build.why),
    )
}

/// Summary of the prior build when the latest one is still running.
/// `None` when the provider did not report a prior build with a status.
pub fn previous_build_status(build: &Build) -> Option<String> {
    let previous = build.previous.as_ref()?;
    let status = previous.status?;
    Some(format!(
        "{} in build {} of {} [{}]",
        to_display(status.as_str()),
        previous.build_num,
        text(&build.vcs_url),
        text(&build.branch),
    ))
}

/// One line for the "list by status" report, linking to the build page.
pub fn project_line(config: &CircleCiConfig, project: &ProjectSummary) -> Option<String> {
    let last = project.last_build()?;
    let outcome = last.outcome.map(|o| o.as_str()).unwrap_or("unknown");
    Some(format!(
        "{} in build {} of {} [{}]",
        to_display(outcome),
        config.build_page(&project.username, &project.reponame, last.build_num),
        text(&project.vcs_url),
        project.default_branch,
    ))
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}
