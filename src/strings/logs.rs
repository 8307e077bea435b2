//! # Log Messages
//!
//! Startup and chat-connection strings written to the tracing log.

pub const STARTING: &str = "Starting circlebot...";
pub const SYNC_LOOP_START: &str = "Starting sync loop...";
pub const MISSING_TOKEN: &str =
    "No CircleCI token configured; every request will be answered with 401";

pub fn config_loaded(user: &str, host: &str) -> String {
    format!("Loaded configuration for user {user} (CircleCI host {host})")
}

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("Received invite for room {room_id}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub fn route_failed(err: &str) -> String {
    format!("Failed to route message: {err}")
}

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}
