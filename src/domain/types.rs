//! # Domain Types
//!
//! Data structures decoded from CircleCI API responses.
//! Everything here is read-only and fetched fresh for each command.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Lifecycle state of a build. Used for both `status` and `outcome`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BuildStatus {
    Retried,
    Canceled,
    InfrastructureFail,
    Timedout,
    NotRun,
    Running,
    Failed,
    Queued,
    Scheduled,
    NotRunning,
    NoTests,
    Fixed,
    Success,
    #[serde(other)]
    Unknown,
}

impl BuildStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildStatus::Retried => "retried",
            BuildStatus::Canceled => "canceled",
            BuildStatus::InfrastructureFail => "infrastructure_fail",
            BuildStatus::Timedout => "timedout",
            BuildStatus::NotRun => "not_run",
            BuildStatus::Running => "running",
            BuildStatus::Failed => "failed",
            BuildStatus::Queued => "queued",
            BuildStatus::Scheduled => "scheduled",
            BuildStatus::NotRunning => "not_running",
            BuildStatus::NoTests => "no_tests",
            BuildStatus::Fixed => "fixed",
            BuildStatus::Success => "success",
            BuildStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two outcomes users may filter projects by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Success,
    Failed,
}

impl StatusFilter {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "success" => Some(StatusFilter::Success),
            "failed" => Some(StatusFilter::Failed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Success => "success",
            StatusFilter::Failed => "failed",
        }
    }

    pub fn matches(&self, outcome: Option<BuildStatus>) -> bool {
        let wanted = match self {
            StatusFilter::Success => BuildStatus::Success,
            StatusFilter::Failed => BuildStatus::Failed,
        };
        outcome == Some(wanted)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A build as returned by the tree, retry and cancel endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Build {
    pub build_num: u64,
    pub status: BuildStatus,
    #[serde(default)]
    pub vcs_revision: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub committer_name: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub why: Option<String>,
    #[serde(default)]
    pub vcs_url: Option<String>,
    #[serde(default)]
    pub previous: Option<PreviousBuild>,
}

/// Summary of the build that ran before this one on the same branch.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviousBuild {
    pub build_num: u64,
    #[serde(default)]
    pub status: Option<BuildStatus>,
}

/// Entry from `GET /projects`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSummary {
    pub username: String,
    pub reponame: String,
    #[serde(default)]
    pub vcs_url: Option<String>,
    pub default_branch: String,
    #[serde(default)]
    pub branches: HashMap<String, BranchState>,
}

impl ProjectSummary {
    /// Most recent build on the default branch, if the provider reported one.
    pub fn last_build(&self) -> Option<&RecentBuild> {
        self.branches
            .get(&self.default_branch)
            .and_then(|branch| branch.recent_builds.first())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BranchState {
    /// Most recent first.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recent_builds: Vec<RecentBuild>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentBuild {
    pub build_num: u64,
    /// Terminal result; null while the build is still going.
    #[serde(default)]
    pub outcome: Option<BuildStatus>,
}

/// Body CircleCI sends alongside a 404.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderMessage {
    #[serde(default)]
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RecentBuild>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<RecentBuild>>::deserialize(deserializer)?.unwrap_or_default())
}
