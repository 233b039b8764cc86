// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    in_app_automation   = { "IN_APP_AUTOMATION", PrivacyFeatures::IN_APP_AUTOMATION },
    message_center      = { "MESSAGE_CENTER", PrivacyFeatures::MESSAGE_CENTER },
    push                = { "PUSH", PrivacyFeatures::PUSH },
    chat                = { "CHAT", PrivacyFeatures::CHAT },
    analytics           = { "ANALYTICS", PrivacyFeatures::ANALYTICS },
    tags_and_attributes = { "TAGS_AND_ATTRIBUTES", PrivacyFeatures::TAGS_AND_ATTRIBUTES },
    contacts            = { "CONTACTS", PrivacyFeatures::CONTACTS },
    location            = { "LOCATION", PrivacyFeatures::LOCATION },
    lowercase           = { "analytics", PrivacyFeatures::ANALYTICS },
    mixed_case          = { "Push", PrivacyFeatures::PUSH },
)]
fn from_name_maps(name: &str, expected: PrivacyFeatures) {
    assert_eq!(PrivacyFeatures::from_name(name), Some(expected));
}

#[yare::parameterized(
    unknown = { "INVALID" },
    empty   = { "" },
    all     = { "ALL" },
    none    = { "NONE" },
)]
fn from_name_rejects(name: &str) {
    assert_eq!(PrivacyFeatures::from_name(name), None);
}

#[test]
fn from_names_collapses_all_literal() {
    assert_eq!(PrivacyFeatures::from_names(&["ALL"]), PrivacyFeatures::ALL);
}

#[test]
fn from_names_collapses_none_literal() {
    assert_eq!(
        PrivacyFeatures::from_names(&["NONE", "PUSH"]),
        PrivacyFeatures::NONE
    );
}

#[test]
fn from_names_all_wins_over_none() {
    assert_eq!(
        PrivacyFeatures::from_names(&["NONE", "ALL"]),
        PrivacyFeatures::ALL
    );
}

#[test]
fn from_names_drops_invalid_and_empty() {
    let set = PrivacyFeatures::from_names(&["ANALYTICS", "INVALID", "PUSH", ""]);
    assert_eq!(set, PrivacyFeatures::ANALYTICS | PrivacyFeatures::PUSH);
}

#[test]
fn from_names_empty_list_is_none() {
    let names: [&str; 0] = [];
    assert_eq!(PrivacyFeatures::from_names(&names), PrivacyFeatures::NONE);
}

#[test]
fn contains_and_union() {
    let set = PrivacyFeatures::ANALYTICS | PrivacyFeatures::PUSH;
    assert!(set.contains(PrivacyFeatures::PUSH));
    assert!(!set.contains(PrivacyFeatures::CHAT));
    assert!(PrivacyFeatures::ALL.contains(set));
    assert!(PrivacyFeatures::NONE.is_empty());
}
