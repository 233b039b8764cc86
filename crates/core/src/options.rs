// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Vendor SDK initialization options and option-adjacent enums.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::features::PrivacyFeatures;

/// Vendor SDK log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    /// Silences the vendor SDK entirely.
    None,
}

impl LogLevel {
    /// Parse a log level name, case-insensitively.
    ///
    /// Unknown names yield `None`; the caller decides the fallback policy.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            "error" => Some(Self::Error),
            "none" => Some(Self::None),
            _ => Option::None,
        }
    }
}

/// Notification channel display options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationOption {
    Lights,
    Badge,
    Vibration,
}

impl NotificationOption {
    /// Parse a single option name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Some(Self::Lights),
            "badge" => Some(Self::Badge),
            "vibrate" => Some(Self::Vibration),
            _ => None,
        }
    }

    /// Parse a list of option names, dropping unknown entries.
    pub fn parse_all<S: AsRef<str>>(names: &[S]) -> Vec<Self> {
        names
            .iter()
            .filter_map(|name| Self::parse(name.as_ref()))
            .collect()
    }
}

/// Immutable (post-build) vendor configuration, consumed exactly once by
/// the SDK's initialization entry point.
///
/// Every field is optional; absent fields keep the vendor defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkOptions {
    pub production_app_key: Option<String>,
    pub production_app_secret: Option<String>,
    pub development_app_key: Option<String>,
    pub development_app_secret: Option<String>,
    pub site: Option<String>,
    pub enabled_features: Option<PrivacyFeatures>,
    pub reset_enabled_features: Option<bool>,
    pub in_production: Option<bool>,
    pub initial_config_url: Option<String>,
    pub require_initial_remote_config: Option<bool>,
    pub log_level: Option<LogLevel>,
    pub development_log_level: Option<LogLevel>,
    pub production_log_level: Option<LogLevel>,
    pub analytics_enabled: Option<bool>,
    pub default_notification_channel: Option<String>,
    pub channel_creation_delay_enabled: Option<bool>,
    pub allowed_transports: Option<Vec<String>>,
    pub fcm_firebase_app_name: Option<String>,
    pub app_store_uri: Option<Url>,
    pub auto_pause_in_app_automation: Option<bool>,
    pub background_reporting_interval_ms: Option<i64>,
    pub channel_capture_enabled: Option<bool>,
    pub extended_broadcasts_enabled: Option<bool>,
    pub url_allow_list: Option<Vec<String>>,
    pub url_allow_list_scope_javascript_interface: Option<Vec<String>>,
    pub url_allow_list_scope_open_url: Option<Vec<String>>,
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
