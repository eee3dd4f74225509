/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Validation and existence checks in front of the repositories.

pub mod jobs;
pub mod skills;
pub mod users;

pub use jobs::{JobService, UpsertOutcome, expiry_from};
pub use skills::SkillService;
pub use users::UserService;
