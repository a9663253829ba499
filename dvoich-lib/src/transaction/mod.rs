pub mod handlers;

use chrono::{Months, NaiveDateTime};

/// Relative reporting window selected by the wire's `srok` sentinel strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Period {
    Month,
    ThreeMonths,
    Year,
    AllTime,
}

impl Period {
    /// Unrecognized values mean "no date filter"; deployed clients depend on
    /// that fallback.
    pub fn parse(srok: &str) -> Period {
        match srok {
            "месяц" => Period::Month,
            "три месяца" => Period::ThreeMonths,
            "год" => Period::Year,
            _ => Period::AllTime,
        }
    }

    /// Cutoff the given number of calendar months back from `now`.
    /// Month-end dates clamp the way calendars do; this is never a fixed
    /// 30-day window.
    pub fn cutoff(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let months = match self {
            Period::Month => 1,
            Period::ThreeMonths => 3,
            Period::Year => 12,
            Period::AllTime => return None,
        };
        now.checked_sub_months(Months::new(months))
    }
}
