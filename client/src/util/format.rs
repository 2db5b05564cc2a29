//! Display formatting for blog metadata.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::Date;
use time::macros::format_description;

/// Render an ISO `YYYY-MM-DD` date as e.g. `January 5, 2025`.
///
/// A trailing time part is ignored; values that still do not parse are shown
/// as authored.
pub fn format_post_date(raw: &str) -> String {
    let raw = raw.trim();
    let date_part = raw.split_once('T').map_or(raw, |(d, _)| d);
    Date::parse(date_part, format_description!("[year]-[month]-[day]"))
        .ok()
        .and_then(|d| d.format(format_description!("[month repr:long] [day padding:none], [year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}
