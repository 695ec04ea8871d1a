//! Humanized "time since" labels.

use chrono::{DateTime, Utc};
use platform_i18n::{MessageKey, Translator};

const DAYS_PER_MONTH: f64 = 30.4375;
const DAYS_PER_YEAR: f64 = 365.25;

/// Distance from `then` to `now`, bucketed the way people say it.
///
/// Instants in the future read as "a few seconds ago".
pub fn time_since(i18n: &dyn Translator, then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0) as f64;
    let minutes = (seconds / 60.0).round();
    let hours = (seconds / 3_600.0).round();
    let days = (seconds / 86_400.0).round();

    let (key, count) = if seconds < 45.0 {
        (MessageKey::TimeSeconds, None)
    } else if seconds < 90.0 {
        (MessageKey::TimeMinute, None)
    } else if minutes < 45.0 {
        (MessageKey::TimeMinutes, Some(minutes.max(2.0)))
    } else if minutes < 90.0 {
        (MessageKey::TimeHour, None)
    } else if hours < 22.0 {
        (MessageKey::TimeHours, Some(hours.max(2.0)))
    } else if hours < 36.0 {
        (MessageKey::TimeDay, None)
    } else if days < 26.0 {
        (MessageKey::TimeDays, Some(days.max(2.0)))
    } else if days < 45.0 {
        (MessageKey::TimeMonth, None)
    } else if days < 320.0 {
        let months = (days / DAYS_PER_MONTH).round();
        (MessageKey::TimeMonths, Some(months.max(2.0)))
    } else if days < 548.0 {
        (MessageKey::TimeYear, None)
    } else {
        let years = (days / DAYS_PER_YEAR).round();
        (MessageKey::TimeYears, Some(years.max(2.0)))
    };

    match count {
        Some(count) => i18n.translate(key, &[&format!("{count}")]),
        None => i18n.text(key),
    }
}
