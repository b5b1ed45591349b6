use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use common::error::Res;
use sqlx::PgPool;
use uuid::Uuid;

/// Half-open interval `[startOfDay(date), startOfDay(date) + 24h)` used to
/// bucket stored session dates into a calendar day. Stored dates may carry a
/// time-of-day component, so exact timestamp equality would miss them.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    (start, start + Duration::days(1))
}

/// Session times already occupied for a tutor on a calendar day, in storage
/// order. Bookings of every status count, cancelled ones included; the
/// caller treats the result as a membership set.
pub async fn booked_times(pool: &PgPool, tutor_id: Uuid, date: NaiveDate) -> Res<Vec<String>> {
    let (from, to) = day_bounds(date);
    db::booking::booked_times(pool, tutor_id, from, to).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_bounds_cover_exactly_one_day() {
        let (from, to) = day_bounds(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(from.to_string(), "2024-06-01 00:00:00");
        assert_eq!(to.to_string(), "2024-06-02 00:00:00");
        assert_eq!(to - from, Duration::days(1));
    }

    #[test]
    fn day_bucket_is_half_open() {
        let (from, to) = day_bounds(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

        let afternoon = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        assert!(afternoon >= from && afternoon < to);

        let last_minute = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert!(last_minute >= from && last_minute < to);

        // Midnight of the following day belongs to the next bucket.
        let next_day = NaiveDate::from_ymd_opt(2024, 6, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(!(next_day < to));
    }

    #[test]
    fn month_boundary_rolls_over() {
        let (_, to) = day_bounds(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(to.to_string(), "2024-03-01 00:00:00");
    }
}
