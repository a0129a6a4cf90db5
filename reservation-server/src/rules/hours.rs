//! Business hours and closed day

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::utils::time::{hhmm, weekday_name};

/// 营业时间 (可预订窗口, 两端包含)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    /// Earliest bookable time
    pub opens_at: NaiveTime,
    /// Latest bookable time
    pub last_seating: NaiveTime,
    /// Weekly closed day
    pub closed_on: Weekday,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            opens_at: NaiveTime::from_hms_opt(10, 30, 0).unwrap_or(NaiveTime::MIN),
            last_seating: NaiveTime::from_hms_opt(21, 30, 0).unwrap_or(NaiveTime::MIN),
            closed_on: Weekday::Tue,
        }
    }
}

impl BusinessHours {
    pub fn is_closed_on(&self, date: NaiveDate) -> bool {
        date.weekday() == self.closed_on
    }

    /// Compared at minute resolution: `21:30:45` is still inside a 21:30 last seating.
    pub fn accepts(&self, time: NaiveTime) -> bool {
        let t = hhmm(time);
        t >= hhmm(self.opens_at) && t <= hhmm(self.last_seating)
    }

    pub fn closed_day_message(&self) -> String {
        format!("Restaurant is closed on {}s", weekday_name(self.closed_on))
    }
}
