//! Daily streak arithmetic
//!
//! A streak counts consecutive UTC calendar days with at least one completed
//! session. Pure date math; the caller supplies both dates.

use chrono::NaiveDate;

/// Next streak value after a completion on `today`.
///
/// Same-day repeats leave the streak unchanged, a completion exactly one day
/// after the last extends it, and any other gap restarts at 1.
pub fn advance(current: u32, last_session_date: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(last) = last_session_date else {
        // First ever completion
        return 1;
    };

    match (today - last).num_days() {
        0 => current.max(1),
        1 => current + 1,
        _ => 1,
    }
}
