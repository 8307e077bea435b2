//! Shared fixtures for unit tests: a recording chat room and CircleCI payloads.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Mutex;

use crate::domain::config::CircleCiConfig;
use crate::domain::traits::ChatProvider;

/// Chat room that keeps everything sent to it.
#[derive(Default)]
pub struct RecordingChat {
    sent: Mutex<Vec<String>>,
}

impl RecordingChat {
    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for RecordingChat {
    async fn send_message(&self, content: &str) -> Result<String, String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(content.to_string());
        Ok(format!("$event{}", sent.len()))
    }

    async fn send_notification(&self, content: &str) -> Result<(), String> {
        self.send_message(content).await.map(|_| ())
    }

    fn room_id(&self) -> String {
        "!test:example.org".to_string()
    }
}

/// Config pointed at a mock server, default org `acme`.
pub fn ci_config(server_uri: &str) -> CircleCiConfig {
    CircleCiConfig {
        token: Some("secret".to_string()),
        default_org: Some("acme".to_string()),
        endpoint: Some(format!("{server_uri}/api/v1")),
        ..CircleCiConfig::default()
    }
}

pub fn build_json(build_num: u64, status: &str, branch: &str) -> Value {
    let outcome = match status {
        "running" | "queued" | "scheduled" | "not_running" => Value::Null,
        other => json!(other),
    };
    json!({
        "build_num": build_num,
        "status": status,
        "outcome": outcome,
        "vcs_revision": "abcdef1234567",
        "branch": branch,
        "committer_name": "Jane",
        "subject": "Fix bug",
        "why": "push",
        "vcs_url": "https://github.com/acme/widgets"
    })
}

/// A `/projects` entry whose default branch `master` last ended with `outcome`.
pub fn project_json(username: &str, reponame: &str, build_num: u64, outcome: &str) -> Value {
    json!({
        "username": username,
        "reponame": reponame,
        "vcs_url": format!("https://github.com/{username}/{reponame}"),
        "default_branch": "master",
        "branches": {
            "master": { "recent_builds": [
                { "build_num": build_num, "outcome": outcome, "status": outcome },
                { "build_num": build_num - 1, "outcome": "success", "status": "success" }
            ]}
        }
    })
}
