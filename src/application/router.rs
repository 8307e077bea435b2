//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! Messages not addressed with the command prefix are ignored.

use anyhow::Result;
use std::sync::Arc;

use crate::application::ci::CiService;
use crate::application::parsing::{Command, CommandPatterns};
use crate::domain::config::AppConfig;
use crate::domain::traits::ChatProvider;
use crate::interface::commands;

pub struct CommandRouter {
    service: Arc<CiService>,
    patterns: CommandPatterns,
    prefix: String,
}

impl CommandRouter {
    pub fn new(config: &AppConfig, service: Arc<CiService>) -> Result<Self> {
        let prefix = config.commands.prefix.trim().to_string();
        let patterns = CommandPatterns::new(&prefix)?;
        Ok(Self {
            service,
            patterns,
            prefix,
        })
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider,
    {
        let Some(command) = self.patterns.parse(message) else {
            return Ok(());
        };
        tracing::info!(
            "Router dispatching {:?} sender='{}' room='{}'",
            command,
            sender,
            chat.room_id()
        );

        let service = self.service.as_ref();
        match command {
            Command::Status { project, branch } => {
                commands::status::handle_status(service, chat, &project, branch.as_deref()).await
            }
            Command::Last { project, branch } => {
                commands::status::handle_last(service, chat, &project, branch.as_deref()).await
            }
            Command::Retry { target, build } => {
                commands::retry::handle_retry(service, chat, &target, build.as_deref()).await
            }
            Command::List { status } => {
                commands::list::handle_list(service, chat, status.as_deref()).await
            }
            Command::Cancel { project, build } => {
                commands::cancel::handle_cancel(service, chat, &project, build.as_deref()).await
            }
            Command::Clear { target } => commands::clear::handle_clear(service, chat, &target).await,
            Command::Help | Command::Unknown => commands::help::handle_help(chat, &self.prefix).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{CommandsConfig, MatrixConfig, ServicesConfig};
    use crate::test_support::{RecordingChat, build_json, ci_config, project_json};
    use serde_json::json;
    use wiremock::matchers::{method, path, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn router(server: &MockServer) -> CommandRouter {
        let config = AppConfig {
            services: ServicesConfig {
                matrix: MatrixConfig {
                    username: "bot".into(),
                    password: "secret".into(),
                    homeserver: "https://matrix.example.org".into(),
                    display_name: None,
                },
            },
            circleci: ci_config(&server.uri()),
            commands: CommandsConfig::default(),
        };
        let service = Arc::new(CiService::new(config.circleci.clone()).unwrap());
        CommandRouter::new(&config, service).unwrap()
    }

    /// Fails the test on drop if anything reaches the mock server.
    async fn forbid_requests(server: &MockServer) {
        Mock::given(path_regex(".*"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_status_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/project/acme/widgets/tree/master"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([build_json(42, "success", "master")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let chat = RecordingChat::default();
        router(&server)
            .route(&chat, "ci status acme/widgets", "@jane:example.org")
            .await
            .unwrap();

        assert_eq!(
            chat.messages(),
            vec![
                "Current status: Success in build 42 of https://github.com/acme/widgets [master/abcdef1] Jane: Fix bug - push"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_bare_project_uses_default_org_and_branch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/project/acme/widgets/tree/develop"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let chat = RecordingChat::default();
        router(&server)
            .route(&chat, "ci last widgets develop", "@jane:example.org")
            .await
            .unwrap();
        assert_eq!(
            chat.messages(),
            vec!["Current status: acme/widgets [develop]: unknown".to_string()]
        );
    }

    #[tokio::test]
    async fn test_cancel_without_build_number() {
        let server = MockServer::start().await;
        forbid_requests(&server).await;

        let chat = RecordingChat::default();
        router(&server)
            .route(&chat, "ci cancel acme/widgets", "@jane:example.org")
            .await
            .unwrap();
        assert_eq!(
            chat.messages(),
            vec!["I can't cancel without a build number".to_string()]
        );
    }

    #[tokio::test]
    async fn test_cancel_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/project/acme/widgets/77/cancel"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(build_json(77, "canceled", "release")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let chat = RecordingChat::default();
        router(&server)
            .route(&chat, "ci cancel widgets 77", "@jane:example.org")
            .await
            .unwrap();
        assert_eq!(
            chat.messages(),
            vec!["Canceled build 77 for acme/widgets [release]".to_string()]
        );
    }

    #[tokio::test]
    async fn test_list_rejects_bad_status_without_requests() {
        let server = MockServer::start().await;
        forbid_requests(&server).await;

        let chat = RecordingChat::default();
        let router = router(&server);
        for message in ["ci list running", "ci list", "ci retry all running"] {
            router.route(&chat, message, "@jane:example.org").await.unwrap();
        }
        assert_eq!(
            chat.messages(),
            vec!["Status can only be failed or success.".to_string(); 3]
        );
    }

    #[tokio::test]
    async fn test_retry_all_failed_retries_only_matching_project() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                project_json("acme", "widgets", 12, "failed"),
                project_json("acme", "gadgets", 30, "success"),
            ])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/project/acme/widgets/12/retry"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(build_json(13, "queued", "master")),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/project/acme/gadgets/30/retry"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let chat = RecordingChat::default();
        router(&server)
            .route(&chat, "ci retry all failed", "@jane:example.org")
            .await
            .unwrap();
        assert_eq!(
            chat.messages(),
            vec!["Retrying build 12 of acme/widgets [master] with build 13".to_string()]
        );
    }

    #[tokio::test]
    async fn test_retry_rejects_non_numeric_build() {
        let server = MockServer::start().await;
        forbid_requests(&server).await;

        let chat = RecordingChat::default();
        let router = router(&server);
        router
            .route(&chat, "ci retry widgets latest", "@jane:example.org")
            .await
            .unwrap();
        router
            .route(&chat, "ci retry widgets", "@jane:example.org")
            .await
            .unwrap();
        assert_eq!(
            chat.messages(),
            vec![
                "`latest` is not a build number".to_string(),
                crate::strings::messages::RETRY_USAGE.to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_retry_last_uses_master_tree() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/project/acme/widgets/tree/master"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([
                    build_json(20, "failed", "master"),
                    build_json(19, "success", "master"),
                ])),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/project/acme/widgets/20/retry"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(build_json(21, "queued", "master")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let chat = RecordingChat::default();
        router(&server)
            .route(&chat, "ci retry widgets LAST", "@jane:example.org")
            .await
            .unwrap();
        assert_eq!(
            chat.messages(),
            vec!["Retrying build 20 of acme/widgets [master] with build 21".to_string()]
        );
    }

    #[tokio::test]
    async fn test_clear_single_project_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/project/other/thing/build-cache"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"message": "Project not found"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let chat = RecordingChat::default();
        router(&server)
            .route(&chat, "CI CLEAR other/thing", "@jane:example.org")
            .await
            .unwrap();
        assert_eq!(
            chat.messages(),
            vec!["I couldn't find what you were looking for: Project not found".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unrelated_messages_are_ignored() {
        let server = MockServer::start().await;
        forbid_requests(&server).await;

        let chat = RecordingChat::default();
        router(&server)
            .route(&chat, "has anyone seen the build?", "@jane:example.org")
            .await
            .unwrap();
        assert!(chat.messages().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_command_gets_help() {
        let server = MockServer::start().await;
        forbid_requests(&server).await;

        let chat = RecordingChat::default();
        router(&server)
            .route(&chat, "ci deploy prod", "@jane:example.org")
            .await
            .unwrap();
        let sent = chat.messages();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("`ci status <project> [branch]`"));
    }

    #[tokio::test]
    async fn test_malformed_project_is_reported() {
        let server = MockServer::start().await;
        forbid_requests(&server).await;

        let chat = RecordingChat::default();
        router(&server)
            .route(&chat, "ci status acme/widgets/extra", "@jane:example.org")
            .await
            .unwrap();
        assert_eq!(
            chat.messages(),
            vec!["`acme/widgets/extra` doesn't look like org/repo".to_string()]
        );
    }
}
