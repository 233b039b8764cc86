// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op SDK adapter.

use async_trait::async_trait;
use indexmap::IndexMap;

use engage_core::{AttributeValue, NotificationOption, PropertyValue, SdkOptions, TagScope};

use super::{EngageAdapter, SdkError};

/// Adapter that silently discards every SDK call.
///
/// Used when the vendor SDK is disabled or not yet wired up.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpEngageAdapter;

impl NoOpEngageAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EngageAdapter for NoOpEngageAdapter {
    async fn initialize(&self, _options: SdkOptions) -> Result<(), SdkError> {
        Ok(())
    }

    async fn set_channel_tags(&self, _tags: Vec<String>) -> Result<(), SdkError> {
        Ok(())
    }

    async fn set_named_user_tags(&self, _group: &str, _tags: Vec<String>) -> Result<(), SdkError> {
        Ok(())
    }

    async fn add_tag(&self, _tag: &str) -> Result<(), SdkError> {
        Ok(())
    }

    async fn remove_tag(&self, _tag: &str) -> Result<(), SdkError> {
        Ok(())
    }

    async fn add_tag_group(
        &self,
        _group: &str,
        _tags: Vec<String>,
        _scope: TagScope,
    ) -> Result<(), SdkError> {
        Ok(())
    }

    async fn remove_tag_group(
        &self,
        _group: &str,
        _tags: Vec<String>,
        _scope: TagScope,
    ) -> Result<(), SdkError> {
        Ok(())
    }

    async fn set_attributes(
        &self,
        _attributes: IndexMap<String, AttributeValue>,
    ) -> Result<(), SdkError> {
        Ok(())
    }

    async fn identify_user(&self, _id: &str) -> Result<(), SdkError> {
        Ok(())
    }

    async fn set_user_push_enabled(&self, _enabled: bool) -> Result<(), SdkError> {
        Ok(())
    }

    async fn set_push_notification_options(
        &self,
        _options: Vec<NotificationOption>,
        _channel_id: Option<&str>,
    ) -> Result<(), SdkError> {
        Ok(())
    }

    async fn set_quiet_time_enabled(&self, _enabled: bool) -> Result<(), SdkError> {
        Ok(())
    }

    async fn set_quiet_time(
        &self,
        _start_hour: u32,
        _start_minute: u32,
        _end_hour: u32,
        _end_minute: u32,
    ) -> Result<(), SdkError> {
        Ok(())
    }

    async fn set_custom_identifiers(
        &self,
        _identifiers: IndexMap<String, String>,
    ) -> Result<(), SdkError> {
        Ok(())
    }

    async fn enable_advertising_ids(
        &self,
        _id: &str,
        _limit_ad_tracking: bool,
    ) -> Result<(), SdkError> {
        Ok(())
    }

    async fn track_screen_view(&self, _screen_name: &str) -> Result<(), SdkError> {
        Ok(())
    }

    async fn track_event(
        &self,
        _name: &str,
        _value: Option<f64>,
        _properties: Option<IndexMap<String, PropertyValue>>,
    ) -> Result<(), SdkError> {
        Ok(())
    }

    async fn set_analytics_enabled(&self, _enabled: bool) -> Result<(), SdkError> {
        Ok(())
    }

    async fn set_location_enabled(&self, _enabled: bool) -> Result<(), SdkError> {
        Ok(())
    }

    async fn set_background_location_enabled(&self, _enabled: bool) -> Result<(), SdkError> {
        Ok(())
    }

    async fn set_in_app_messaging_enabled(&self, _enabled: bool) -> Result<(), SdkError> {
        Ok(())
    }

    async fn set_in_app_messaging_paused(&self, _paused: bool) -> Result<(), SdkError> {
        Ok(())
    }

    async fn set_in_app_display_interval(&self, _seconds: i64) -> Result<(), SdkError> {
        Ok(())
    }

    async fn display_message_center(&self, _message_id: Option<&str>) -> Result<(), SdkError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
