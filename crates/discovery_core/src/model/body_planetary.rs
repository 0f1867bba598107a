//! Sub-structures for planets and moons: atmosphere, surface, interior,
//! formation, phases, eclipses, moon roster and rings.

use crate::decode::coerce;
use crate::model::flexible::FlexibleNumber;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AtmosphereComponent {
    #[serde(deserialize_with = "coerce::text_or_default")]
    pub gas: String,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub percentage: Option<f64>,
}

/// Surface pressure. `value` is number-or-text in the sources
/// (`92`, `"> 1000"`); `value_text` is an explicit display override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurfacePressure {
    pub value: FlexibleNumber,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub value_text: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub earth_comparison: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
}

impl SurfacePressure {
    pub fn display(&self) -> Option<String> {
        self.value_text.clone().or_else(|| self.value.display())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Atmosphere {
    #[serde(deserialize_with = "coerce::lenient_list")]
    pub composition: Vec<AtmosphereComponent>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub surface_pressure: Option<SurfacePressure>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::text_list")]
    pub consequences: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurfaceFeature {
    #[serde(deserialize_with = "coerce::text_or_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "coerce::opt_text")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub significance: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Regolith {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub depth: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub characteristics: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Surface {
    #[serde(deserialize_with = "coerce::lenient_list")]
    pub features: Vec<SurfaceFeature>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub color: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub terrain: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub composition: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub tectonics: Option<String>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub regolith: Option<Regolith>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InternalLayer {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub thickness: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub radius: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub composition: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InternalStructure {
    #[serde(deserialize_with = "coerce::lenient")]
    pub crust: Option<InternalLayer>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub mantle: Option<InternalLayer>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub core: Option<InternalLayer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Formation {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub age: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub theory: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Phase {
    #[serde(deserialize_with = "coerce::text_or_default")]
    pub name: String,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Phases {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub cycle: Option<String>,
    #[serde(deserialize_with = "coerce::lenient_list")]
    pub phases: Vec<Phase>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EclipseInfo {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::text_list")]
    pub types: Vec<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub frequency: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub rarity: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LunarEclipseInfo {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::text_list")]
    pub types: Vec<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub blood_moon: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub frequency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Eclipses {
    #[serde(deserialize_with = "coerce::lenient")]
    pub solar_eclipse: Option<EclipseInfo>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub lunar_eclipse: Option<LunarEclipseInfo>,
}

/// One entry in a planet's moon roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoonInfo {
    #[serde(deserialize_with = "coerce::text_or_default")]
    pub name: String,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub radius: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub diameter: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub orbital_period: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub distance_from_planet: Option<f64>,
    /// Text even when the source is numeric (`"Ancient"` vs `1610`).
    #[serde(deserialize_with = "coerce::opt_text")]
    pub discovery_year: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub discovered_by: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub mythology: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub features: Option<String>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub mass: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub distance_unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoonsData {
    #[serde(deserialize_with = "coerce::opt_u32")]
    pub total: Option<u32>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub note: Option<String>,
    #[serde(deserialize_with = "coerce::lenient_list")]
    pub major_moons: Vec<MoonInfo>,
    #[serde(deserialize_with = "coerce::lenient_list")]
    pub minor_moons: Vec<MoonInfo>,
}

impl MoonsData {
    /// Major moons first, then minor, each in source order.
    pub fn all_moons(&self) -> impl Iterator<Item = &MoonInfo> {
        self.major_moons.iter().chain(self.minor_moons.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RingInfo {
    #[serde(deserialize_with = "coerce::text_or_default")]
    pub name: String,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub distance: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RingsData {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::lenient_list")]
    pub main_rings: Vec<RingInfo>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub thickness: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub origin: Option<String>,
}
