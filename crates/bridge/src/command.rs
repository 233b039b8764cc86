// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The command table: token normalization and the fixed name mapping.

use engage_core::Payload;

/// Payload field names shared by the command handlers.
pub mod keys {
    pub const COMMAND_NAME: &str = "command_name";
    pub const EVENT_NAME: &str = "event_name";
    pub const EVENT_PROPERTIES: &str = "event";
    pub const EVENT_VALUE: &str = "event_value";
    pub const SCREEN_NAME: &str = "screen_name";
    pub const NAMED_USER_IDENTIFIER: &str = "named_user_identifier";
    pub const CUSTOM_IDENTIFIERS: &str = "custom";
    pub const IN_APP_MESSAGING_DISPLAY_INTERVAL: &str = "in_app_messaging_display_interval";
    pub const PUSH_NOTIFICATION_OPTIONS: &str = "push_notification_options";
    pub const QUIET: &str = "quiet";
    pub const START_HOUR: &str = "start_hour";
    pub const START_MINUTE: &str = "start_minute";
    pub const END_HOUR: &str = "end_hour";
    pub const END_MINUTE: &str = "end_minute";
    pub const NAMED_USER_TAGS: &str = "named_user_tags";
    pub const CHANNEL_TAGS: &str = "channel_tags";
    pub const TAG_GROUP: &str = "tag_group";
    pub const CHANNEL_TAG: &str = "channel_tag";
    pub const ATTRIBUTES: &str = "attributes";
    pub const CHANNEL_ID: &str = "channel_id";
    pub const MESSAGE_ID: &str = "message_id";
    pub const GOOGLE_ADID: &str = "google_adid";
    pub const GOOGLE_LIMIT_AD_TRACKING: &str = "google_limit_ad_tracking";
}

/// Separator between command tokens in the `command_name` field.
pub const SEPARATOR: char = ',';

/// One dispatchable operation.
///
/// The wire names are lowercase with no separators; tokens are normalized
/// before lookup, so inbound casing and whitespace never matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Initialize,
    TrackEvent,
    TrackScreenView,
    EnableAnalytics,
    DisableAnalytics,
    SetNamedUser,
    SetCustomIdentifiers,
    EnableAdvertisingIdentifiers,
    EnableInAppMessaging,
    DisableInAppMessaging,
    PauseInAppMessaging,
    UnpauseInAppMessaging,
    SetInAppMessagingDisplayInterval,
    EnableUserPushNotifications,
    DisableUserPushNotifications,
    SetPushNotificationOptions,
    EnableQuietTime,
    DisableQuietTime,
    SetQuietTimeStart,
    SetChannelTags,
    SetNamedUserTags,
    AddTag,
    RemoveTag,
    AddTagGroup,
    RemoveTagGroup,
    SetAttributes,
    DisplayMessageCenter,
    EnableLocation,
    DisableLocation,
    EnableBackgroundLocation,
    DisableBackgroundLocation,
}

impl Command {
    /// Look up a normalized token. Unknown tokens have no command.
    pub fn lookup(token: &str) -> Option<Self> {
        match token {
            "initialize" => Some(Self::Initialize),
            "trackevent" => Some(Self::TrackEvent),
            "trackscreenview" => Some(Self::TrackScreenView),
            "enableanalytics" => Some(Self::EnableAnalytics),
            "disableanalytics" => Some(Self::DisableAnalytics),
            "setnameduser" => Some(Self::SetNamedUser),
            "setcustomidentifiers" => Some(Self::SetCustomIdentifiers),
            "enableadvertisingidentifiers" => Some(Self::EnableAdvertisingIdentifiers),
            "enableinappmessaging" => Some(Self::EnableInAppMessaging),
            "disableinappmessaging" => Some(Self::DisableInAppMessaging),
            "pauseinappmessaging" => Some(Self::PauseInAppMessaging),
            "unpauseinappmessaging" => Some(Self::UnpauseInAppMessaging),
            "setinappmessagingdisplayinterval" => Some(Self::SetInAppMessagingDisplayInterval),
            "enableuserpushnotifications" => Some(Self::EnableUserPushNotifications),
            "disableuserpushnotifications" => Some(Self::DisableUserPushNotifications),
            "setpushnotificationoptions" => Some(Self::SetPushNotificationOptions),
            "enablequiettime" => Some(Self::EnableQuietTime),
            "disablequiettime" => Some(Self::DisableQuietTime),
            "setquiettimestart" => Some(Self::SetQuietTimeStart),
            "setchanneltags" => Some(Self::SetChannelTags),
            "setnamedusertags" => Some(Self::SetNamedUserTags),
            "addtag" => Some(Self::AddTag),
            "removetag" => Some(Self::RemoveTag),
            "addtaggroup" => Some(Self::AddTagGroup),
            "removetaggroup" => Some(Self::RemoveTagGroup),
            "setattributes" => Some(Self::SetAttributes),
            "displaymessagecenter" => Some(Self::DisplayMessageCenter),
            "enablelocation" => Some(Self::EnableLocation),
            "disablelocation" => Some(Self::DisableLocation),
            "enablebackgroundlocation" => Some(Self::EnableBackgroundLocation),
            "disablebackgroundlocation" => Some(Self::DisableBackgroundLocation),
            _ => None,
        }
    }

    /// The wire name of this command.
    pub fn name(self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::TrackEvent => "trackevent",
            Self::TrackScreenView => "trackscreenview",
            Self::EnableAnalytics => "enableanalytics",
            Self::DisableAnalytics => "disableanalytics",
            Self::SetNamedUser => "setnameduser",
            Self::SetCustomIdentifiers => "setcustomidentifiers",
            Self::EnableAdvertisingIdentifiers => "enableadvertisingidentifiers",
            Self::EnableInAppMessaging => "enableinappmessaging",
            Self::DisableInAppMessaging => "disableinappmessaging",
            Self::PauseInAppMessaging => "pauseinappmessaging",
            Self::UnpauseInAppMessaging => "unpauseinappmessaging",
            Self::SetInAppMessagingDisplayInterval => "setinappmessagingdisplayinterval",
            Self::EnableUserPushNotifications => "enableuserpushnotifications",
            Self::DisableUserPushNotifications => "disableuserpushnotifications",
            Self::SetPushNotificationOptions => "setpushnotificationoptions",
            Self::EnableQuietTime => "enablequiettime",
            Self::DisableQuietTime => "disablequiettime",
            Self::SetQuietTimeStart => "setquiettimestart",
            Self::SetChannelTags => "setchanneltags",
            Self::SetNamedUserTags => "setnamedusertags",
            Self::AddTag => "addtag",
            Self::RemoveTag => "removetag",
            Self::AddTagGroup => "addtaggroup",
            Self::RemoveTagGroup => "removetaggroup",
            Self::SetAttributes => "setattributes",
            Self::DisplayMessageCenter => "displaymessagecenter",
            Self::EnableLocation => "enablelocation",
            Self::DisableLocation => "disablelocation",
            Self::EnableBackgroundLocation => "enablebackgroundlocation",
            Self::DisableBackgroundLocation => "disablebackgroundlocation",
        }
    }
}

/// Split the `command_name` field into normalized tokens: trimmed,
/// lowercased, in input order, duplicates preserved.
///
/// A missing field behaves as an empty string, which yields one empty token
/// that no command matches.
pub fn split_commands(payload: &Payload) -> Vec<String> {
    let joined = payload.opt_string(keys::COMMAND_NAME).unwrap_or_default();
    joined
        .split(SEPARATOR)
        .map(|token| token.trim().to_lowercase())
        .collect()
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
