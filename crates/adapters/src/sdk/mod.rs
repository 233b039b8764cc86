// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The engagement SDK facade.
//!
//! The vendor SDK (push delivery, tag storage, message center, in-app
//! automation, analytics transport) is an external collaborator; this trait
//! is the seam the dispatcher calls through, so production wiring and tests
//! can substitute implementations freely.

mod noop;

pub use noop::NoOpEngageAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{EngageCall, FakeEngageAdapter};

use async_trait::async_trait;
use indexmap::IndexMap;
use thiserror::Error;

use engage_core::{AttributeValue, NotificationOption, PropertyValue, SdkOptions, TagScope};

/// Errors from vendor SDK calls
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("sdk not initialized")]
    NotInitialized,

    #[error("sdk call failed: {0}")]
    CallFailed(String),
}

/// Adapter over the vendor engagement SDK.
///
/// Mutation arbitration, persistence, and delivery all belong to the vendor;
/// implementations only forward. Every call is awaited by the dispatcher, so
/// an implementation that completes asynchronously must not resolve before
/// the vendor has accepted the operation.
#[async_trait]
pub trait EngageAdapter: Clone + Send + Sync + 'static {
    /// Start the SDK with a built options object. Consumed exactly once;
    /// implementations decide their own scheduling (e.g. a main-thread hop).
    async fn initialize(&self, options: SdkOptions) -> Result<(), SdkError>;

    /// Replace the full set of channel tags.
    async fn set_channel_tags(&self, tags: Vec<String>) -> Result<(), SdkError>;

    /// Replace the tags of a named-user tag group.
    async fn set_named_user_tags(&self, group: &str, tags: Vec<String>) -> Result<(), SdkError>;

    /// Add a single channel tag, keeping existing tags.
    async fn add_tag(&self, tag: &str) -> Result<(), SdkError>;

    /// Remove a single channel tag, keeping the rest.
    async fn remove_tag(&self, tag: &str) -> Result<(), SdkError>;

    /// Add tags to a tag group owned by `scope`.
    async fn add_tag_group(
        &self,
        group: &str,
        tags: Vec<String>,
        scope: TagScope,
    ) -> Result<(), SdkError>;

    /// Remove tags from a tag group owned by `scope`.
    async fn remove_tag_group(
        &self,
        group: &str,
        tags: Vec<String>,
        scope: TagScope,
    ) -> Result<(), SdkError>;

    /// Set channel attributes.
    async fn set_attributes(
        &self,
        attributes: IndexMap<String, AttributeValue>,
    ) -> Result<(), SdkError>;

    /// Associate the cross-device named-user identity.
    async fn identify_user(&self, id: &str) -> Result<(), SdkError>;

    /// Opt the user in or out of push notifications.
    async fn set_user_push_enabled(&self, enabled: bool) -> Result<(), SdkError>;

    /// Apply display options to the notification channel, creating it when
    /// absent. `channel_id` falls back to the configured default channel.
    async fn set_push_notification_options(
        &self,
        options: Vec<NotificationOption>,
        channel_id: Option<&str>,
    ) -> Result<(), SdkError>;

    /// Toggle the quiet-time window.
    async fn set_quiet_time_enabled(&self, enabled: bool) -> Result<(), SdkError>;

    /// Configure the quiet-time window and enable it.
    async fn set_quiet_time(
        &self,
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> Result<(), SdkError>;

    /// Associate analytics identifiers with the current session.
    async fn set_custom_identifiers(
        &self,
        identifiers: IndexMap<String, String>,
    ) -> Result<(), SdkError>;

    /// Associate the advertising identifier and its limit-tracking flag.
    async fn enable_advertising_ids(
        &self,
        id: &str,
        limit_ad_tracking: bool,
    ) -> Result<(), SdkError>;

    /// Record a screen view.
    async fn track_screen_view(&self, screen_name: &str) -> Result<(), SdkError>;

    /// Record a custom event with an optional value and properties.
    async fn track_event(
        &self,
        name: &str,
        value: Option<f64>,
        properties: Option<IndexMap<String, PropertyValue>>,
    ) -> Result<(), SdkError>;

    async fn set_analytics_enabled(&self, enabled: bool) -> Result<(), SdkError>;

    async fn set_location_enabled(&self, enabled: bool) -> Result<(), SdkError>;

    async fn set_background_location_enabled(&self, enabled: bool) -> Result<(), SdkError>;

    async fn set_in_app_messaging_enabled(&self, enabled: bool) -> Result<(), SdkError>;

    async fn set_in_app_messaging_paused(&self, paused: bool) -> Result<(), SdkError>;

    /// Seconds between in-app message displays.
    async fn set_in_app_display_interval(&self, seconds: i64) -> Result<(), SdkError>;

    /// Open the message center, optionally on a specific message.
    async fn display_message_center(&self, message_id: Option<&str>) -> Result<(), SdkError>;
}
