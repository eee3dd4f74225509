/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One document per username; `skills` is kept set-like by the database
/// (`$addToSet` / `$pull`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Model {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    #[serde(default)]
    pub skills: Vec<String>,
}
