//! # CI Service
//!
//! Sequences CircleCI client calls for each chat operation and formats the result.
//! Single-build operations return the reply text; bulk operations post one message
//! per project as each request completes and never send an aggregate summary.

use futures::future::join_all;

use crate::application::format;
use crate::domain::config::CircleCiConfig;
use crate::domain::error::CiError;
use crate::domain::project::{ProjectError, ProjectRef};
use crate::domain::traits::ChatProvider;
use crate::domain::types::{BuildStatus, ProjectSummary, StatusFilter};
use crate::infrastructure::circleci::CircleCiClient;
use crate::strings::messages;

/// Branch used by "retry last". The project's own default branch is not consulted.
pub const RETRY_LAST_BRANCH: &str = "master";

pub struct CiService {
    client: CircleCiClient,
    config: CircleCiConfig,
}

impl CiService {
    pub fn new(config: CircleCiConfig) -> Result<Self, CiError> {
        Ok(Self {
            client: CircleCiClient::new(&config)?,
            config,
        })
    }

    pub fn resolve_project(&self, name: &str) -> Result<ProjectRef, ProjectError> {
        ProjectRef::resolve(name, self.config.default_org.as_deref())
    }

    /// Status of the newest build on `branch`.
    pub async fn status(&self, project: &ProjectRef, branch: &str) -> Result<String, CiError> {
        let builds = self.client.latest_builds(project, branch).await?;
        Ok(match builds.first() {
            Some(build) => messages::current_status(&format::build_status(build)),
            None => messages::status_unknown(&project.to_string(), branch),
        })
    }

    /// Like `status`, but while the newest build is running report the one before it.
    pub async fn last_status(&self, project: &ProjectRef, branch: &str) -> Result<String, CiError> {
        let builds = self.client.latest_builds(project, branch).await?;
        let Some(latest) = builds.first() else {
            return Ok(messages::status_unknown(&project.to_string(), branch));
        };

        if latest.status != BuildStatus::Running {
            return Ok(messages::current_status(&format::build_status(latest)));
        }

        Ok(match format::previous_build_status(latest) {
            Some(summary) => messages::last_status(&summary),
            None => messages::last_status_unknown(&project.to_string(), branch),
        })
    }

    pub async fn retry_build(&self, project: &ProjectRef, build_num: u64) -> Result<String, CiError> {
        let retried = self.client.retry_build(project, build_num).await?;
        Ok(messages::retrying_build(
            build_num,
            &project.to_string(),
            retried.branch.as_deref().unwrap_or(""),
            retried.build_num,
        ))
    }

    /// Retry the newest build on `master`.
    pub async fn retry_last_build(&self, project: &ProjectRef) -> Result<String, CiError> {
        let builds = self.client.latest_builds(project, RETRY_LAST_BRANCH).await?;
        match builds.first() {
            Some(last) => self.retry_build(project, last.build_num).await,
            None => Ok(messages::no_builds_to_retry(
                &project.to_string(),
                RETRY_LAST_BRANCH,
            )),
        }
    }

    pub async fn cancel_build(&self, project: &ProjectRef, build_num: u64) -> Result<String, CiError> {
        let canceled = self.client.cancel_build(project, build_num).await?;
        Ok(messages::canceled_build(
            canceled.build_num,
            &project.to_string(),
            canceled.branch.as_deref().unwrap_or(""),
        ))
    }

    pub async fn clear_cache(&self, project: &ProjectRef) -> Result<String, CiError> {
        self.client.clear_cache(project).await?;
        Ok(messages::cleared_cache(&project.to_string()))
    }

    /// Projects whose newest default-branch build ended with `status`.
    pub async fn projects_by_status(
        &self,
        status: StatusFilter,
    ) -> Result<Vec<ProjectSummary>, CiError> {
        let projects = self.client.projects().await?;
        Ok(projects
            .into_iter()
            .filter(|project| {
                project
                    .last_build()
                    .is_some_and(|last| status.matches(last.outcome))
            })
            .collect())
    }

    pub async fn list_projects_by_status(&self, status: StatusFilter) -> Result<String, CiError> {
        let projects = self.projects_by_status(status).await?;
        if projects.is_empty() {
            return Ok(messages::no_projects_match(status.as_str()));
        }

        let mut message = messages::projects_by_status_header(status.as_str());
        for line in projects
            .iter()
            .filter_map(|project| format::project_line(&self.config, project))
        {
            message.push_str(&line);
            message.push('\n');
        }
        Ok(message)
    }

    /// Retry the newest build of every project matching `status`.
    /// Each retry reports its own result to `chat`.
    pub async fn retry_all_by_status(
        &self,
        status: StatusFilter,
        chat: &impl ChatProvider,
    ) -> Result<(), CiError> {
        let projects = self.projects_by_status(status).await?;
        tracing::info!(
            "Retrying {} project(s) whose last build is {}",
            projects.len(),
            status
        );

        let retries = projects.iter().filter_map(|project| {
            let last = project.last_build()?;
            let project = ProjectRef::from_parts(&project.username, &project.reponame);
            let build_num = last.build_num;
            Some(async move {
                let reply = self
                    .retry_build(&project, build_num)
                    .await
                    .unwrap_or_else(|e| e.to_string());
                send_item(chat, &reply).await;
            })
        });
        join_all(retries).await;
        Ok(())
    }

    /// Clear the build cache of every visible project, one message per project.
    pub async fn clear_all_caches(&self, chat: &impl ChatProvider) -> Result<(), CiError> {
        let projects = self.client.projects().await?;
        tracing::info!("Clearing build caches for {} project(s)", projects.len());

        let clears = projects.iter().map(|project| {
            let project = ProjectRef::from_parts(&project.username, &project.reponame);
            async move {
                let reply = self
                    .clear_cache(&project)
                    .await
                    .unwrap_or_else(|e| e.to_string());
                send_item(chat, &reply).await;
            }
        });
        join_all(clears).await;
        Ok(())
    }
}

async fn send_item(chat: &impl ChatProvider, reply: &str) {
    if let Err(e) = chat.send_message(reply).await {
        tracing::error!("Failed to send message to {}: {}", chat.room_id(), e);
    }
}
