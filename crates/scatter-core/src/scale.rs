// File: crates/scatter-core/src/scale.rs
// Summary: Immutable linear and time scales with domain nicing and tick generation.

use chrono::NaiveDateTime;

use crate::time::{epoch_ms, TimeInterval};

const E10: f64 = 7.071_067_811_865_475_5; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = 1.414_213_562_373_095_1; // sqrt(2)

/// Tick spacing for roughly `count` ticks over `[start, stop]`, following
/// the 1-2-5-10 progression. A negative return value `-n` encodes the
/// fractional step `1/n`, keeping sub-unit steps exact.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !(step > 0.0) || !step.is_finite() {
        return f64::NAN;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Always-positive variant of [`tick_increment`].
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let inc = tick_increment(start.min(stop), start.max(stop), count);
    if !inc.is_finite() {
        return f64::NAN;
    }
    if inc < 0.0 {
        -1.0 / inc
    } else {
        inc
    }
}

/// Round tick values covering `[start, stop]`, ascending unless the
/// interval is reversed.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    if !inc.is_finite() || inc == 0.0 {
        return Vec::new();
    }
    let mut out: Vec<f64> = if inc > 0.0 {
        let i0 = (lo / inc).ceil() as i64;
        let i1 = (hi / inc).floor() as i64;
        (i0..=i1).map(|i| i as f64 * inc).collect()
    } else {
        let inv = -inc;
        let i0 = (lo * inv).ceil() as i64;
        let i1 = (hi * inv).floor() as i64;
        (i0..=i1).map(|i| i as f64 / inv).collect()
    };
    if reverse {
        out.reverse();
    }
    out
}

/// Format a tick value with just enough decimals for its step.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if !(step.abs() < 1.0) || step == 0.0 {
        0
    } else {
        (-step.abs().log10().floor()) as usize
    };
    format!("{value:.decimals$}")
}

/// Linear y scale. The range is typically inverted (`[inner_height, 0]`)
/// so larger values plot higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Expand the domain to round boundaries for roughly `count` ticks.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        if !(stop > start) {
            return self;
        }
        let mut prestep = 0.0f64;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if step == prestep || !step.is_finite() {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            }
            prestep = step;
        }
        self.domain = (start, stop);
        self
    }

    /// Map a domain value to a pixel coordinate. A zero-span domain maps
    /// every value to the middle of the range.
    pub fn scale(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0 + 0.5 * (r1 - r0);
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// Time x scale over naive UTC datetimes, mapping to `[0, inner_width]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    domain: (NaiveDateTime, NaiveDateTime),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Domain from the min/max of parsed timestamps. `None` when the
    /// iterator is empty; an extent cannot be derived from nothing.
    pub fn from_observations<I>(times: I, range: (f64, f64)) -> Option<Self>
    where
        I: IntoIterator<Item = NaiveDateTime>,
    {
        let mut iter = times.into_iter();
        let first = iter.next()?;
        let (mut lo, mut hi) = (first, first);
        for t in iter {
            if t < lo {
                lo = t;
            }
            if t > hi {
                hi = t;
            }
        }
        Some(Self { domain: (lo, hi), range })
    }

    pub fn domain(&self) -> (NaiveDateTime, NaiveDateTime) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Expand the domain outward to the calendar-interval boundaries that
    /// would carry roughly `count` ticks.
    pub fn nice(mut self, count: usize) -> Self {
        let interval = TimeInterval::for_span(self.domain.0, self.domain.1, count);
        self.domain = (interval.floor(self.domain.0), interval.ceil(self.domain.1));
        self
    }

    /// Map a timestamp to a pixel coordinate. A zero-span domain maps
    /// every value to the middle of the range.
    pub fn scale(&self, t: NaiveDateTime) -> f64 {
        let (d0, d1) = (epoch_ms(self.domain.0), epoch_ms(self.domain.1));
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0 + 0.5 * (r1 - r0);
        }
        r0 + (epoch_ms(t) - d0) / span * (r1 - r0)
    }

    /// Calendar-boundary ticks inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDateTime> {
        TimeInterval::for_span(self.domain.0, self.domain.1, count)
            .range(self.domain.0, self.domain.1)
    }
}
