//! Physical and orbital characteristics of a celestial body.
//!
//! Every field is optional: sources document different quantities for
//! stars, planets and moons, and sometimes under different nested paths.

use crate::decode::coerce;
use serde::{Deserialize, Serialize};

/// Generic `value + unit + Earth ratio` measurement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Measure {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub earth_comparison: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RadiusInfo {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub equatorial: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub polar: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub mean: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub earth_comparison: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DensityInfo {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
}

/// Newer gravity shape (`gravity.surface`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GravityInfo {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub surface: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub earth_comparison: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemperatureInfo {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub mean: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub kelvin: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub range: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicalCharacteristics {
    #[serde(deserialize_with = "coerce::lenient")]
    pub mass: Option<Measure>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub volume: Option<Measure>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub radius: Option<RadiusInfo>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub diameter: Option<Measure>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub density: Option<DensityInfo>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub gravity: Option<GravityInfo>,
    /// Legacy gravity shape (`surfaceGravity.value`).
    #[serde(deserialize_with = "coerce::lenient")]
    pub surface_gravity: Option<Measure>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub escape_velocity: Option<Measure>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub temperature: Option<TemperatureInfo>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub luminosity: Option<Measure>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistanceInfo {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub semimajor_axis: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub perihelion: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub aphelion: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistanceFromEarthInfo {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub mean: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub perigee: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub apogee: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrbitalPeriodInfo {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub sidereal: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub synodic: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub mars_years: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrbitalVelocityInfo {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub mean: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub max: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub min: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
}

/// Angle in degrees, used for inclination and axial tilt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AngleInfo {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RotationPeriodInfo {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub days: Option<f64>,
    /// `prograde` or `retrograde`.
    #[serde(deserialize_with = "coerce::opt_text")]
    pub direction: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LengthOfDayInfo {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub days: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub sol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TidalLockingInfo {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub consequence: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrbitalCharacteristics {
    #[serde(deserialize_with = "coerce::lenient")]
    pub distance_from_sun: Option<DistanceInfo>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub distance_from_earth: Option<DistanceFromEarthInfo>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub orbital_period: Option<OrbitalPeriodInfo>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub orbital_velocity: Option<OrbitalVelocityInfo>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub orbital_eccentricity: Option<f64>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub orbital_inclination: Option<AngleInfo>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub rotation_period: Option<RotationPeriodInfo>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub length_of_day: Option<LengthOfDayInfo>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub axial_tilt: Option<AngleInfo>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub tidal_locking: Option<TidalLockingInfo>,
}
