// File: crates/scatter-core/src/time.rs
// Summary: Timestamp parsing, epoch mapping, and calendar-aware tick intervals.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::scale::tick_step;

/// Parse a timestamp string into a naive UTC datetime.
///
/// Accepted forms, tried in order: RFC 3339, `%Y-%m-%dT%H:%M:%S`,
/// `%Y-%m-%d %H:%M:%S` (both with optional fractional seconds),
/// minute-precision variants, bare `%Y-%m-%d` dates, and integer epoch
/// seconds or milliseconds.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN));
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms vs epoch sec heuristic
        let ms = if n.abs() > 10_i64.pow(12) { n } else { n.checked_mul(1000)? };
        return DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc());
    }
    None
}

/// Milliseconds since the Unix epoch, as the x scale's domain coordinate.
pub fn epoch_ms(t: NaiveDateTime) -> f64 {
    t.and_utc().timestamp_millis() as f64
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// A calendar interval with a field-based step: 15-minute intervals land on
/// :00/:15/:30/:45, 3-month intervals on Jan/Apr/Jul/Oct, weeks on Sunday.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeInterval {
    pub unit: TimeUnit,
    pub step: i64,
}

/// Candidate tick intervals, coarsest-last, with their span in seconds.
const LADDER: &[(TimeUnit, i64, f64)] = &[
    (TimeUnit::Second, 1, 1.0),
    (TimeUnit::Second, 5, 5.0),
    (TimeUnit::Second, 15, 15.0),
    (TimeUnit::Second, 30, 30.0),
    (TimeUnit::Minute, 1, 60.0),
    (TimeUnit::Minute, 5, 300.0),
    (TimeUnit::Minute, 15, 900.0),
    (TimeUnit::Minute, 30, 1_800.0),
    (TimeUnit::Hour, 1, 3_600.0),
    (TimeUnit::Hour, 3, 10_800.0),
    (TimeUnit::Hour, 6, 21_600.0),
    (TimeUnit::Hour, 12, 43_200.0),
    (TimeUnit::Day, 1, 86_400.0),
    (TimeUnit::Day, 2, 172_800.0),
    (TimeUnit::Week, 1, 604_800.0),
    (TimeUnit::Month, 1, 2_592_000.0),
    (TimeUnit::Month, 3, 7_776_000.0),
    (TimeUnit::Year, 1, 31_536_000.0),
];

const SECONDS_PER_YEAR: f64 = 31_536_000.0;

impl TimeInterval {
    pub const fn new(unit: TimeUnit, step: i64) -> Self {
        Self { unit, step: if step > 0 { step } else { 1 } }
    }

    /// Choose the interval whose tick spacing best matches `span / count`.
    ///
    /// Spans wider than the ladder fall back to multi-year steps chosen by
    /// the 1-2-5-10 progression; spans narrower than a second clamp to
    /// one-second ticks.
    pub fn for_span(start: NaiveDateTime, stop: NaiveDateTime, count: usize) -> TimeInterval {
        let span = (epoch_ms(stop) - epoch_ms(start)).abs() / 1000.0;
        let target = span / count.max(1) as f64;
        let i = LADDER
            .iter()
            .position(|&(_, _, dur)| dur > target)
            .unwrap_or(LADDER.len());
        if i == LADDER.len() {
            let step = tick_step(
                epoch_ms(start) / 1000.0 / SECONDS_PER_YEAR,
                epoch_ms(stop) / 1000.0 / SECONDS_PER_YEAR,
                count.max(1),
            );
            let step = if step.is_finite() { step.max(1.0) } else { 1.0 };
            return TimeInterval::new(TimeUnit::Year, step as i64);
        }
        if i == 0 {
            return TimeInterval::new(TimeUnit::Second, 1);
        }
        let (unit, step, _) = if target / LADDER[i - 1].2 < LADDER[i].2 / target {
            LADDER[i - 1]
        } else {
            LADDER[i]
        };
        TimeInterval::new(unit, step)
    }

    /// Latest interval boundary at or before `t`.
    pub fn floor(&self, t: NaiveDateTime) -> NaiveDateTime {
        let date = t.date();
        match self.unit {
            TimeUnit::Second => {
                let s = i64::from(t.second());
                at_hms(date, t.hour(), t.minute(), (s - s.rem_euclid(self.step)) as u32)
            }
            TimeUnit::Minute => {
                let m = i64::from(t.minute());
                at_hms(date, t.hour(), (m - m.rem_euclid(self.step)) as u32, 0)
            }
            TimeUnit::Hour => {
                let h = i64::from(t.hour());
                at_hms(date, (h - h.rem_euclid(self.step)) as u32, 0, 0)
            }
            TimeUnit::Day => {
                let back = i64::from(date.day0()).rem_euclid(self.step);
                midnight(date - Duration::days(back))
            }
            TimeUnit::Week => {
                let back = i64::from(date.weekday().num_days_from_sunday());
                midnight(date - Duration::days(back))
            }
            TimeUnit::Month => {
                let m0 = i64::from(date.month0());
                midnight(ymd_clamped(date.year(), (m0 - m0.rem_euclid(self.step)) as u32 + 1, 1))
            }
            TimeUnit::Year => {
                let y = i64::from(date.year());
                midnight(ymd_clamped((y - y.rem_euclid(self.step)) as i32, 1, 1))
            }
        }
    }

    /// Earliest interval boundary at or after `t`.
    pub fn ceil(&self, t: NaiveDateTime) -> NaiveDateTime {
        let floored = self.floor(t);
        if floored == t {
            t
        } else {
            self.offset(floored, 1)
        }
    }

    /// Shift `t` by `n` steps of this interval.
    pub fn offset(&self, t: NaiveDateTime, n: i64) -> NaiveDateTime {
        let amount = self.step * n;
        match self.unit {
            TimeUnit::Second => t + Duration::seconds(amount),
            TimeUnit::Minute => t + Duration::minutes(amount),
            TimeUnit::Hour => t + Duration::hours(amount),
            TimeUnit::Day => t + Duration::days(amount),
            TimeUnit::Week => t + Duration::weeks(amount),
            TimeUnit::Month => {
                let months = i64::from(t.year()) * 12 + i64::from(t.month0()) + amount;
                let (y, m) = (months.div_euclid(12) as i32, months.rem_euclid(12) as u32 + 1);
                ymd_clamped(y, m, t.day()).and_time(t.time())
            }
            TimeUnit::Year => {
                let y = (i64::from(t.year()) + amount) as i32;
                ymd_clamped(y, t.month(), t.day()).and_time(t.time())
            }
        }
    }

    /// Interval boundaries within `[start, stop]`, ascending.
    pub fn range(&self, start: NaiveDateTime, stop: NaiveDateTime) -> Vec<NaiveDateTime> {
        let mut out = Vec::new();
        let mut cur = self.ceil(start);
        while cur <= stop {
            out.push(cur);
            let next = self.offset(cur, 1);
            if next <= cur {
                break;
            }
            cur = next;
        }
        out
    }
}

/// Format a tick timestamp by the largest calendar boundary it lands on:
/// year starts print the year, month starts the month name, and so on down
/// to fractional seconds.
pub fn tick_label(t: NaiveDateTime) -> String {
    let on = |unit: TimeUnit| TimeInterval::new(unit, 1).floor(t) == t;
    let fmt = if !on(TimeUnit::Second) {
        "%.3f"
    } else if !on(TimeUnit::Minute) {
        ":%S"
    } else if !on(TimeUnit::Hour) {
        "%I:%M"
    } else if !on(TimeUnit::Day) {
        "%I %p"
    } else if !on(TimeUnit::Month) {
        if on(TimeUnit::Week) { "%b %d" } else { "%a %d" }
    } else if !on(TimeUnit::Year) {
        "%B"
    } else {
        "%Y"
    };
    t.format(fmt).to_string()
}

fn at_hms(date: NaiveDate, h: u32, m: u32, s: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(h, m, s).unwrap_or(NaiveTime::MIN))
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn ymd_clamped(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
        .or_else(|| NaiveDate::from_ymd_opt(y, m, d.min(28)))
        .unwrap_or(NaiveDate::MIN)
}
