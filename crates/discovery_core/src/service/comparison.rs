//! Side-by-side body comparison rows.
//!
//! # Invariants
//! - Diameter, gravity and moons rows are always present.
//! - Every other row appears only when both bodies carry the value.
//! - Row order is fixed.

use crate::model::body::CelestialBody;
use crate::model::flexible::format_number;

/// How the second value relates to the first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variance {
    /// `second / first`.
    Ratio(f64),
    /// `second - first`.
    Difference(f64),
}

impl Variance {
    /// `"2.5x"`-style ratios with precision shrinking as magnitude grows;
    /// signed differences otherwise.
    pub fn display(self) -> String {
        match self {
            Self::Ratio(ratio) if ratio >= 100.0 => format!("{}x", ratio.trunc() as i64),
            Self::Ratio(ratio) if ratio >= 10.0 => format!("{ratio:.0}x"),
            Self::Ratio(ratio) if ratio >= 1.0 => format!("{ratio:.1}x"),
            Self::Ratio(ratio) if ratio >= 0.1 => format!("{ratio:.2}x"),
            Self::Ratio(ratio) => format!("{ratio:.3}x"),
            Self::Difference(diff) if diff >= 0.0 => format!("+{}", format_number(diff)),
            Self::Difference(diff) => format_number(diff),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub first: f64,
    pub second: f64,
    pub unit: &'static str,
    as_ratio: bool,
}

impl ComparisonRow {
    fn new(
        label: &'static str,
        first: f64,
        second: f64,
        unit: &'static str,
        as_ratio: bool,
    ) -> Self {
        Self {
            label,
            first,
            second,
            unit,
            as_ratio,
        }
    }

    /// Ratio rows fall back to a difference when the first value is zero.
    pub fn variance(&self) -> Variance {
        if self.as_ratio && self.first != 0.0 {
            Variance::Ratio(self.second / self.first)
        } else {
            Variance::Difference(self.second - self.first)
        }
    }

    pub fn first_display(&self) -> String {
        with_unit(self.first, self.unit)
    }

    pub fn second_display(&self) -> String {
        with_unit(self.second, self.unit)
    }
}

fn with_unit(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format_number(value)
    } else {
        format!("{} {unit}", format_number(value))
    }
}

type Extract = fn(&CelestialBody) -> Option<f64>;

const OPTIONAL_ROWS: [(&str, &str, bool, Extract); 6] = [
    ("Density", "kg/m³", true, density),
    ("Temp", "°C", false, mean_temperature),
    ("Orbit Dist", "M km", true, semimajor_axis),
    ("Year", "days", true, orbital_period),
    ("Day", "hrs", true, rotation_period),
    ("Axial Tilt", "°", false, axial_tilt),
];

/// Builds comparison rows for `first` against `second`.
pub fn compare_bodies(first: &CelestialBody, second: &CelestialBody) -> Vec<ComparisonRow> {
    let mut rows = vec![
        ComparisonRow::new("Diameter", first.diameter(), second.diameter(), "km", true),
        ComparisonRow::new(
            "Gravity",
            first.surface_gravity(),
            second.surface_gravity(),
            "m/s²",
            true,
        ),
    ];
    for (label, unit, as_ratio, extract) in OPTIONAL_ROWS {
        if let (Some(a), Some(b)) = (extract(first), extract(second)) {
            rows.push(ComparisonRow::new(label, a, b, unit, as_ratio));
        }
    }
    rows.push(ComparisonRow::new(
        "Moons",
        f64::from(first.moon_count()),
        f64::from(second.moon_count()),
        "",
        false,
    ));
    rows
}

fn density(body: &CelestialBody) -> Option<f64> {
    body.physical_characteristics
        .as_ref()?
        .density
        .as_ref()?
        .value
}

fn mean_temperature(body: &CelestialBody) -> Option<f64> {
    body.physical_characteristics
        .as_ref()?
        .temperature
        .as_ref()?
        .mean
}

fn semimajor_axis(body: &CelestialBody) -> Option<f64> {
    body.orbital_characteristics
        .as_ref()?
        .distance_from_sun
        .as_ref()?
        .semimajor_axis
}

fn orbital_period(body: &CelestialBody) -> Option<f64> {
    body.orbital_characteristics
        .as_ref()?
        .orbital_period
        .as_ref()?
        .value
}

fn rotation_period(body: &CelestialBody) -> Option<f64> {
    body.orbital_characteristics
        .as_ref()?
        .rotation_period
        .as_ref()?
        .value
}

fn axial_tilt(body: &CelestialBody) -> Option<f64> {
    body.orbital_characteristics
        .as_ref()?
        .axial_tilt
        .as_ref()?
        .value
}
