use crate::models::{Calculations, DailyMetrics};

impl Calculations {
    pub fn from_metrics(metrics: &DailyMetrics) -> Self {
        let visits = parse_metric(&metrics.visits);
        let profile_clicks = parse_metric(&metrics.profile_clicks);
        let link_clicks = parse_metric(&metrics.link_clicks);

        Self {
            visit_to_profile_conversion: conversion(profile_clicks, visits),
            profile_to_link_conversion: conversion(link_clicks, profile_clicks),
        }
    }
}

/// Percentage of `numerator` over `denominator`, or 0 unless the denominator is positive.
pub fn conversion(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

/// Reads the leading decimal number of a free-text field. Anything unparsable is 0.
pub fn parse_metric(raw: &str) -> f64 {
    let text = raw.trim();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match text[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
