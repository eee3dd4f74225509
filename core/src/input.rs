/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::*;
use super::types::MJob;
use entity::role::Role;
use mongodb::bson::oid::ObjectId;
use std::str::FromStr;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn load_secret(f: &str) -> std::io::Result<String> {
    let s = std::fs::read_to_string(f)?;
    Ok(s.trim().replace(char::from(25), ""))
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn require(value: &str, name: &str) -> Result<(), String> {
    if is_blank(value) {
        return Err(format!("{} cannot be empty", name));
    }

    Ok(())
}

/// Required listing fields; the remaining job fields are free text.
pub fn validate_job(job: &MJob) -> Result<(), String> {
    require(&job.title, "title")?;
    require(&job.company, "company")?;
    require(&job.url, "url")?;
    require(&job.seniority_level, "seniorityLevel")?;
    require(&job.field, "field")?;
    Ok(())
}

pub fn validate_role(role: &str) -> Result<Role, String> {
    Role::from_str(role)
}

pub fn validate_new_user(username: &str, password: &str, role: &str) -> Result<Role, String> {
    require(username, "username")?;
    require(password, "password")?;
    validate_role(role)
}

pub fn validate_skill_request(username: &str, skill: &str) -> Result<(), String> {
    require(username, "username")?;
    require(skill, "skill")?;
    Ok(())
}

pub fn parse_object_id(id: &str, name: &str) -> Result<ObjectId, String> {
    require(id, name)?;
    ObjectId::parse_str(id.trim()).map_err(|_| format!("invalid {}", name))
}
