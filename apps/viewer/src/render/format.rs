//! Display-only derived strings. None of these touch the profile data itself.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, TimeZone};
use reqwest::Url;

use crate::models::profile::{Education, Experience, Location};

/// Separator between the start and end of a date range.
pub const RANGE_SEP: &str = " — ";
const PRESENT: &str = "Present";

/// Comma-joins the non-empty parts of a location in city, region, country order.
pub fn location_line(location: &Location) -> String {
    [&location.city, &location.region, &location.country]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `start — end`, with "Present" standing in for the end of a current role.
pub fn experience_date_range(exp: &Experience) -> String {
    let end = if exp.is_current.unwrap_or(false) {
        PRESENT
    } else {
        exp.end_date.as_deref().unwrap_or("")
    };
    format!("{}{RANGE_SEP}{end}", exp.start_date.as_deref().unwrap_or(""))
}

/// `start — end`, where a missing end date reads as "Present".
pub fn education_date_range(edu: &Education) -> String {
    let end = edu
        .end_date
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(PRESENT);
    format!("{}{RANGE_SEP}{end}", edu.start_date.as_deref().unwrap_or(""))
}

/// Degree and program joined with a dash, or `None` when neither is set.
pub fn credential_line(edu: &Education) -> Option<String> {
    let parts: Vec<&str> = [&edu.degree, &edu.program]
        .into_iter()
        .filter_map(|p| p.as_deref())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(RANGE_SEP))
    }
}

/// Short label for a profile link: host and path, without scheme or a leading `www.`.
pub fn hostname_label(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return url.to_string();
    };
    let Some(host) = parsed.host_str() else {
        return url.to_string();
    };
    let host = host.strip_prefix("www.").unwrap_or(host);
    let path = parsed.path().trim_end_matches('/');
    format!("{host}{path}")
}

/// Formats `lastUpdated` as M/D/YYYY in the zone of `now`. Absent means today;
/// unparseable is shown as-is.
pub fn last_updated_label<Tz>(last_updated: Option<&str>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(raw) = last_updated.filter(|s| !s.trim().is_empty()) else {
        return now.format("%-m/%-d/%Y").to_string();
    };
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts
            .with_timezone(&now.timezone())
            .format("%-m/%-d/%Y")
            .to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%-m/%-d/%Y").to_string();
    }
    raw.to_string()
}
