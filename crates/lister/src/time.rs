//! Date cells for the long form.
//!
//! Recent files show a clock time, anything older than six months or dated
//! in the future shows the year instead.

use chrono::{DateTime, Datelike, Duration, Local, Months};

/// Start of the "recent" window: six calendar months before `now`.
pub fn recent_cutoff(now: &DateTime<Local>) -> DateTime<Local> {
    now.checked_sub_months(Months::new(6))
        .unwrap_or_else(|| *now - Duration::days(183))
}

/// Returns `true` if `t` should be shown with its year.
pub fn is_old(t: &DateTime<Local>, now: &DateTime<Local>) -> bool {
    t > now || *t < recent_cutoff(now)
}

/// `HH:MM` for recent times, the four-digit year otherwise.
pub fn time_or_year(t: &DateTime<Local>, now: &DateTime<Local>) -> String {
    if is_old(t, now) {
        t.format("%Y").to_string()
    } else {
        t.format("%H:%M").to_string()
    }
}

/// Three-letter English month name.
pub fn month_abbrev(t: &DateTime<Local>) -> String {
    t.format("%b").to_string()
}

/// Day of month without padding; the column supplies alignment.
pub fn day_of_month(t: &DateTime<Local>) -> String {
    t.day().to_string()
}
