//! Types for GitLab's v4 API and webhooks
//! https://docs.gitlab.com/ee/api/rest/
//! https://docs.gitlab.com/ee/user/project/integrations/webhooks.html

pub mod client;
mod common;
mod config;
mod events;
mod group;
mod merge_request;
mod note;
mod pipeline;
mod project;
mod settings;
mod system_hooks;
mod user;
mod webhook;

pub use client::{Client, ClientBuilder, Error, Result};
pub use common::*;
pub use config::ClientConfig;
pub use events::*;
pub use group::*;
pub use merge_request::*;
pub use note::*;
pub use pipeline::*;
pub use project::*;
pub use settings::*;
pub use system_hooks::*;
pub use user::*;
pub use webhook::*;
