//! Display formatting for dashboard values.
//!
//! All helpers are pure. Dates are always rendered in Asia/Manila time,
//! whatever the host's zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use rust_decimal::{Decimal, RoundingStrategy};
use stocksense_types::constants::CURRENCY_SYMBOL;
use stocksense_types::{Result, StockSenseError};

/// Zone every rendered date is shown in, and the zone zone-less input is
/// read in.
pub const DISPLAY_TZ: Tz = chrono_tz::Asia::Manila;

/// Text returned for dates that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_PATTERN: &str = "%b %-d, %I:%M %p";

/// Zone-less layouts, read as Manila wall-clock time.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Peso amount with thousands separators and exactly two decimals,
/// e.g. `₱724,500.00`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{CURRENCY_SYMBOL}{sign}{}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short Manila-time rendering of an ISO timestamp, e.g. `Feb 28, 10:30 AM`.
///
/// Accepts RFC 3339 with any offset, a zone-less `YYYY-MM-DDTHH:MM[:SS[.f]]`
/// (taken as Manila local time) or a bare `YYYY-MM-DD` (taken as UTC
/// midnight). Anything else yields [`INVALID_DATE`].
#[must_use]
pub fn format_date(input: &str) -> String {
    match parse_timestamp(input) {
        Ok(instant) => format_datetime(instant),
        Err(e) => {
            tracing::debug!(error = %e, "unparseable date");
            INVALID_DATE.to_string()
        }
    }
}

/// Short Manila-time rendering of an instant.
#[must_use]
pub fn format_datetime(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&DISPLAY_TZ)
        .format(DATE_PATTERN)
        .to_string()
}

/// Parse a timestamp in any of the layouts [`format_date`] accepts.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    let instant = match NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
    {
        Some(local) => DISPLAY_TZ
            .from_local_datetime(&local)
            .single()
            .map(|dt| dt.with_timezone(&Utc)),
        None => NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|n| n.and_utc()),
    };
    instant.ok_or_else(|| StockSenseError::InvalidTimestamp(input.to_string()))
}

/// Pill markup for an order status. Unknown statuses get the neutral style.
///
/// The status text is HTML-escaped before it is embedded; the raw string
/// never reaches the markup.
#[must_use]
pub fn status_badge(status: &str) -> String {
    let classes = match status {
        "Completed" => "bg-emerald-100 text-emerald-700",
        "Pending" => "bg-amber-100 text-amber-700",
        "Processing" => "bg-blue-100 text-blue-700",
        _ => "bg-slate-100 text-slate-700",
    };
    format!(
        "<span class=\"{classes} px-3 py-1 rounded-full text-xs font-semibold\">{}</span>",
        escape_html(status)
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
