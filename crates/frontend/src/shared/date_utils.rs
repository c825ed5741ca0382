//! Date helpers for the banner screens.

use chrono::Local;

const ISO_DATE: &str = "%Y-%m-%d";

/// Today's date in the `YYYY-MM-DD` form records are stamped with.
pub fn today_iso() -> String {
    Local::now().format(ISO_DATE).to_string()
}
