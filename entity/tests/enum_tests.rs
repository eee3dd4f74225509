/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the role enum

use entity::role::Role;
use std::str::FromStr;

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("FREE").unwrap(), Role::Free);
    assert_eq!(Role::from_str("PREMIUM").unwrap(), Role::Premium);

    let err = Role::from_str("Gold").unwrap_err();
    assert_eq!(err, "invalid role `Gold`, must be FREE or PREMIUM");

    assert!(Role::from_str("free").is_err());
    assert!(Role::from_str("").is_err());
}

#[test]
fn test_role_serialization() {
    assert_eq!(serde_json::to_string(&Role::Free).unwrap(), "\"FREE\"");
    assert_eq!(serde_json::to_string(&Role::Premium).unwrap(), "\"PREMIUM\"");

    let role: Role = serde_json::from_str("\"PREMIUM\"").unwrap();
    assert_eq!(role, Role::Premium);
    assert!(serde_json::from_str::<Role>("\"ADMIN\"").is_err());
}

#[test]
fn test_role_display_matches_wire_format() {
    for role in Role::ALL {
        assert_eq!(role.to_string(), role.as_str());
        assert_eq!(Role::from_str(&role.to_string()).unwrap(), role);
    }
}
