/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use mongodb::bson::DateTime;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrazilianFriendly {
    pub is_friendly: bool,
    pub reason: String,
}

/// A job listing, keyed by `url`. Documents are purged by the TTL index once
/// `expires_at` has passed.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Model {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub updated_at: String,
    pub employment_type: String,
    pub published_date: String,
    pub application_deadline: String,
    pub compensation_tier_summary: String,
    pub workplace_type: String,
    pub office_location: String,
    pub is_brazilian_friendly: BrazilianFriendly,
    pub company: String,
    pub url: String,
    pub seniority_level: String,
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime>,
}

impl Model {
    /// Compares the listing content, ignoring the generated id and the expiry.
    pub fn same_listing(&self, other: &Model) -> bool {
        let strip = |m: &Model| Model {
            id: None,
            expires_at: None,
            ..m.clone()
        };

        strip(self) == strip(other)
    }
}
