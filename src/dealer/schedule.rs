use crate::game::Street;
use crate::settings::Schedule;
use chrono::DateTime;
use chrono::Days;
use chrono::NaiveTime;
use chrono::TimeZone;

impl Schedule {
    pub fn at(&self, street: Street) -> NaiveTime {
        match street {
            Street::Flop => self.flop,
            Street::Turn => self.turn,
            Street::River => self.river,
        }
    }
    /// The first street to fire strictly after `now`, and when.
    pub fn next<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<(Street, DateTime<Tz>)> {
        Street::all()
            .iter()
            .filter_map(|street| after(now, self.at(*street)).map(|at| (*street, at)))
            .min_by(|(_, a), (_, b)| a.cmp(b))
    }
}

/// The next instant strictly after `now` whose wall-clock time is `at`.
///
/// Local times skipped by a DST jump resolve to the following day.
pub fn after<Tz: TimeZone>(now: &DateTime<Tz>, at: NaiveTime) -> Option<DateTime<Tz>> {
    let today = now.date_naive();
    (0..=2)
        .filter_map(|n| today.checked_add_days(Days::new(n)))
        .filter_map(|date| {
            now.timezone()
                .from_local_datetime(&date.and_time(at))
                .earliest()
        })
        .find(|t| t > now)
}
