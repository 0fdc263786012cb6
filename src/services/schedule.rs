use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

/// The refresher fires at 14:00 UTC (7AM MST) on weekdays.
const FIRE_HOUR_UTC: u32 = 14;

/// Next strictly-future fire time after `now`. Pure, so the schedule is
/// testable without waiting on a real clock.
pub fn next_fire(now: DateTime<Utc>) -> DateTime<Utc> {
    let mut candidate = now
        .date_naive()
        .and_hms_opt(FIRE_HOUR_UTC, 0, 0)
        .unwrap()
        .and_utc();

    if candidate <= now {
        candidate = candidate + Duration::days(1);
    }
    while is_weekend(candidate.weekday()) {
        candidate = candidate + Duration::days(1);
    }

    candidate
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}
