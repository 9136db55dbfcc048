use crate::domain::toast::DEFAULT_TOAST_DURATION_MS;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "操作成功";
pub const DEFAULT_FAILURE_MESSAGE: &str = "操作失败";
pub const DEFAULT_CONTAINER_ID: &str = "toast-container";

/// Client settings. Every field has a default, so a partial object from
/// JavaScript only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub api_base: String,
    pub success_message: String,
    pub failure_message: String,
    /// Milliseconds a toast stays before its exit animation starts.
    pub toast_duration: u32,
    pub container_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            toast_duration: DEFAULT_TOAST_DURATION_MS,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

impl Config {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_messages(mut self, success: impl Into<String>, failure: impl Into<String>) -> Self {
        self.success_message = success.into();
        self.failure_message = failure.into();
        self
    }

    pub fn with_toast_duration(mut self, duration_ms: u32) -> Self {
        self.toast_duration = duration_ms;
        self
    }

    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    pub fn endpoint(&self, action: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), action)
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);
