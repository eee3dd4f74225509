/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Lifetime of a job listing after its last write.
pub static JOB_TTL: LazyLock<TimeDelta> =
    LazyLock::new(|| TimeDelta::hours(12) + TimeDelta::minutes(1));

pub const JOB_URL_INDEX: &str = "uniq_url";
pub const JOB_EXPIRY_INDEX: &str = "ttl_expires_at";
pub const USER_USERNAME_INDEX: &str = "uniq_username";
pub const SKILL_USERNAME_INDEX: &str = "uniq_skill_username";

pub const DUPLICATE_KEY_CODE: i32 = 11000;

pub const APP_NAME: &str = "jobboard";
