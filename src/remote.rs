//! HTTP transport for the notice and profile endpoints.

use anyhow::{Context, Result};

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::form::UpdatePayload;
use crate::model::{Entity, Notice};

mod http_client;
mod notices;
mod profile;

pub use self::notices::{NoticeFilter, NoticePages};

/// Single-notice lookup.
pub trait NoticeStore {
    fn notice(&self, notice_id: u64) -> Result<Notice, TransportError>;
}

/// Profile read and write.
pub trait ProfileStore {
    fn profile(&self, user_id: &str) -> Result<Entity, TransportError>;
    fn save_profile(&self, user_id: &str, payload: &UpdatePayload) -> Result<(), TransportError>;
}

pub struct RemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}
