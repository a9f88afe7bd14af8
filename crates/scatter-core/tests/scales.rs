// File: crates/scatter-core/tests/scales.rs
// Purpose: Validate nicing, tick generation, and pixel mapping for both scales.

use chrono::NaiveDate;
use scatter_core::scale::{format_tick, ticks};
use scatter_core::time::tick_label;
use scatter_core::{parse_timestamp, LinearScale, TimeScale};

fn at(s: &str) -> chrono::NaiveDateTime {
    parse_timestamp(s).expect("test timestamp")
}

#[test]
fn nice_keeps_an_already_round_domain() {
    let scale = LinearScale::new((0.0, 4.0), (260.0, 0.0)).nice(10);
    assert_eq!(scale.domain(), (0.0, 4.0));
}

#[test]
fn nice_expands_an_irregular_domain() {
    let scale = LinearScale::new((0.13, 9.7), (260.0, 0.0)).nice(10);
    assert_eq!(scale.domain(), (0.0, 10.0));
}

#[test]
fn inverted_range_maps_endpoints_exactly() {
    let scale = LinearScale::new((0.0, 4.0), (260.0, 0.0)).nice(10);
    assert_eq!(scale.scale(0.0), 260.0);
    assert_eq!(scale.scale(4.0), 0.0);
}

#[test]
fn five_requested_ticks_over_zero_to_four() {
    let scale = LinearScale::new((0.0, 4.0), (260.0, 0.0)).nice(10);
    assert_eq!(scale.ticks(5), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn tick_values_follow_the_1_2_5_progression() {
    let t = ticks(0.0, 1.0, 10);
    assert_eq!(t.len(), 11);
    assert_eq!(t[0], 0.0);
    assert_eq!(t[1], 0.1);
    assert_eq!(*t.last().expect("non-empty"), 1.0);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let scale = LinearScale::new((2.0, 2.0), (0.0, 100.0));
    assert_eq!(scale.scale(7.0), 50.0);
}

#[test]
fn tick_labels_carry_step_precision() {
    assert_eq!(format_tick(2.0, 1.0), "2");
    assert_eq!(format_tick(0.5, 0.5), "0.5");
    assert_eq!(format_tick(0.25, 0.05), "0.25");
}

#[test]
fn time_domain_nices_to_calendar_boundaries() {
    let times = vec![at("2021-11-19T11:30:00"), at("2021-11-25T11:30:00")];
    let scale = TimeScale::from_observations(times.iter().copied(), (0.0, 450.0))
        .expect("non-empty")
        .nice(10);

    let (lo, hi) = scale.domain();
    assert_eq!(lo, at("2021-11-19T00:00:00"));
    assert_eq!(hi, at("2021-11-25T12:00:00"));

    // Niced endpoints pin the range; raw extrema stay inside it.
    assert_eq!(scale.scale(lo), 0.0);
    assert_eq!(scale.scale(hi), 450.0);
    assert!(scale.scale(times[0]) >= 0.0);
    assert!(scale.scale(times[1]) <= 450.0);
}

#[test]
fn multi_day_span_ticks_on_half_day_boundaries() {
    let scale = TimeScale::new((at("2021-11-19T00:00:00"), at("2021-11-25T12:00:00")), (0.0, 450.0));
    let ticks = scale.ticks(10);
    assert_eq!(ticks.len(), 14);
    for t in &ticks {
        assert_eq!(t.format("%M:%S").to_string(), "00:00");
        assert_eq!(t.format("%H").to_string().parse::<u32>().expect("hour") % 12, 0);
    }
}

#[test]
fn month_span_ticks_on_month_starts() {
    let scale = TimeScale::new((at("2020-01-15"), at("2020-12-20")), (0.0, 450.0));
    let ticks = scale.ticks(10);
    assert_eq!(ticks.len(), 11);
    for t in &ticks {
        assert_eq!(t.format("%d %H:%M").to_string(), "01 00:00");
    }
    assert_eq!(ticks[0], at("2020-02-01"));
}

#[test]
fn single_timestamp_maps_to_range_midpoint() {
    let scale = TimeScale::from_observations([at("2020-05-05")], (0.0, 450.0)).expect("non-empty");
    assert_eq!(scale.scale(at("2020-05-05")), 225.0);
}

#[test]
fn tick_labels_switch_format_at_calendar_boundaries() {
    assert_eq!(tick_label(at("2020-01-01")), "2020");
    assert_eq!(tick_label(at("2020-03-01")), "March");
    // 2020-03-15 is a Sunday (a week start); the 14th is not.
    assert_eq!(tick_label(at("2020-03-15")), "Mar 15");
    assert_eq!(tick_label(at("2020-03-14")), "Sat 14");
    assert_eq!(tick_label(at("2020-03-14T12:00:00")), "12 PM");
    assert_eq!(tick_label(at("2020-03-14T12:30:00")), "12:30");
    assert_eq!(tick_label(at("2020-03-14T12:30:45")), ":45");
}

#[test]
fn empty_observation_iterator_yields_no_scale() {
    let empty: Vec<chrono::NaiveDateTime> = Vec::new();
    assert!(TimeScale::from_observations(empty, (0.0, 450.0)).is_none());
}

#[test]
fn week_boundaries_floor_to_sunday() {
    use scatter_core::{TimeInterval, TimeUnit};
    let interval = TimeInterval::new(TimeUnit::Week, 1);
    // 2020-03-11 is a Wednesday.
    assert_eq!(interval.floor(at("2020-03-11T09:15:00")), at("2020-03-08"));
    assert_eq!(interval.ceil(at("2020-03-11T09:15:00")), at("2020-03-15"));
    let date = NaiveDate::from_ymd_opt(2020, 3, 8).expect("valid date");
    assert_eq!(date.format("%a").to_string(), "Sun");
}

#[test]
fn quarter_intervals_land_on_quarter_months() {
    use scatter_core::{TimeInterval, TimeUnit};
    let interval = TimeInterval::new(TimeUnit::Month, 3);
    assert_eq!(interval.floor(at("2020-11-20")), at("2020-10-01"));
    assert_eq!(interval.offset(at("2020-10-01"), 1), at("2021-01-01"));
}
