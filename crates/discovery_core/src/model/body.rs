//! Celestial-body record.
//!
//! # Responsibility
//! - Define one normalized shape for stars, planets, dwarf planets and moons.
//! - Resolve quantities documented under different nested paths through
//!   fixed fallback chains.
//!
//! # Invariants
//! - `id` is the unique catalog key (compared case-insensitively).
//! - Computed values are pure functions of stored fields and are never cached.
//! - Fallback chains are evaluated in the order documented on each accessor.

use crate::decode::coerce;
use crate::derivation::orbit::{has_rings, normalize_type, order_from_sun, EARTH_GRAVITY};
use crate::model::body_narrative::{
    ComparisonToEarth, Exploration, History, Mission, Mythology, ObservationFromEarth,
    SourceMetadata,
};
use crate::model::body_physical::{OrbitalCharacteristics, PhysicalCharacteristics};
use crate::model::body_planetary::{
    Atmosphere, Eclipses, Formation, InternalStructure, MoonInfo, MoonsData, Phases, RingsData,
    Surface,
};
use crate::model::body_stellar::{
    Lifespan, StellarActivity, StellarComposition, StellarRotation, StellarStructure,
    StellarTemperature,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Closed set of body kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CelestialBodyType {
    Star,
    Planet,
    DwarfPlanet,
    Moon,
    Asteroid,
    Comet,
}

impl CelestialBodyType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::Planet => "Planet",
            Self::DwarfPlanet => "Dwarf Planet",
            Self::Moon => "Moon",
            Self::Asteroid => "Asteroid",
            Self::Comet => "Comet",
        }
    }
}

impl Display for CelestialBodyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Descriptions {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub short: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub medium: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub long: Option<String>,
}

/// Normalized solar-system object.
///
/// Only `id` and `name` are required in the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "coerce::text_list")]
    pub alternative_names: Vec<String>,

    /// Legacy type field.
    #[serde(default, deserialize_with = "coerce::opt_text")]
    pub planet_type: Option<String>,
    /// Newer type field; wins over `planet_type`.
    #[serde(default, deserialize_with = "coerce::opt_text")]
    pub celestial_type: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_u32")]
    pub order: Option<u32>,
    #[serde(default, deserialize_with = "coerce::opt_text")]
    pub parent_planet: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_text")]
    pub spectral_class: Option<String>,

    #[serde(default, deserialize_with = "coerce::lenient")]
    pub descriptions: Option<Descriptions>,
    #[serde(default, deserialize_with = "coerce::text_list")]
    pub fun_facts: Vec<String>,

    #[serde(default, deserialize_with = "coerce::lenient")]
    pub physical_characteristics: Option<PhysicalCharacteristics>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub orbital_characteristics: Option<OrbitalCharacteristics>,

    #[serde(default, deserialize_with = "coerce::lenient")]
    pub temperature: Option<StellarTemperature>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub structure: Option<StellarStructure>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub composition: Option<StellarComposition>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub rotation: Option<StellarRotation>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub solar_activity: Option<StellarActivity>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub lifespan: Option<Lifespan>,

    #[serde(default, deserialize_with = "coerce::lenient")]
    pub atmosphere: Option<Atmosphere>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub surface: Option<Surface>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub internal_structure: Option<InternalStructure>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub formation: Option<Formation>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub phases: Option<Phases>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub eclipses: Option<Eclipses>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub moons: Option<MoonsData>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub rings: Option<RingsData>,

    #[serde(default, deserialize_with = "coerce::lenient")]
    pub mythology: Option<Mythology>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub history: Option<History>,
    #[serde(default, deserialize_with = "coerce::lenient_list")]
    pub missions: Vec<Mission>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub exploration: Option<Exploration>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub observation_from_earth: Option<ObservationFromEarth>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub comparison_to_earth: Option<ComparisonToEarth>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub interesting_facts: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub metadata: Option<SourceMetadata>,
}

impl CelestialBody {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Type from `celestial_type`, else `planet_type`, normalized.
    pub fn body_type(&self) -> CelestialBodyType {
        normalize_type(
            self.celestial_type
                .as_deref()
                .or(self.planet_type.as_deref()),
        )
    }

    /// Explicit `order`, else the fixed id table, else the last-place sentinel.
    pub fn order_from_sun(&self) -> u32 {
        self.order.unwrap_or_else(|| order_from_sun(&self.id))
    }

    /// Lowercased parent body id.
    pub fn parent_id(&self) -> Option<String> {
        self.parent_planet.as_deref().map(str::to_lowercase)
    }

    pub fn is_star(&self) -> bool {
        self.body_type() == CelestialBodyType::Star
    }

    pub fn is_planet(&self) -> bool {
        self.body_type() == CelestialBodyType::Planet
    }

    pub fn is_dwarf_planet(&self) -> bool {
        self.body_type() == CelestialBodyType::DwarfPlanet
    }

    pub fn is_moon(&self) -> bool {
        self.body_type() == CelestialBodyType::Moon
    }

    pub fn short_description(&self) -> &str {
        self.descriptions
            .as_ref()
            .and_then(|text| text.short.as_deref())
            .unwrap_or("")
    }

    /// Medium text, else short.
    pub fn medium_description(&self) -> &str {
        self.descriptions
            .as_ref()
            .and_then(|text| text.medium.as_deref())
            .unwrap_or_else(|| self.short_description())
    }

    /// Long text, else medium, else short.
    pub fn long_description(&self) -> &str {
        self.descriptions
            .as_ref()
            .and_then(|text| text.long.as_deref())
            .unwrap_or_else(|| self.medium_description())
    }

    /// m/s²: `gravity.surface`, else `surfaceGravity.value`, else `0.0`.
    pub fn surface_gravity(&self) -> f64 {
        let physical = self.physical_characteristics.as_ref();
        physical
            .and_then(|p| p.gravity.as_ref())
            .and_then(|gravity| gravity.surface)
            .or_else(|| {
                physical
                    .and_then(|p| p.surface_gravity.as_ref())
                    .and_then(|gravity| gravity.value)
            })
            .unwrap_or(0.0)
    }

    /// Surface gravity relative to the nominal Earth value.
    pub fn gravity_ratio(&self) -> f64 {
        self.surface_gravity() / EARTH_GRAVITY
    }

    /// `diameter.value`, else `radius.mean * 2`, else `0.0`.
    pub fn diameter(&self) -> f64 {
        let physical = self.physical_characteristics.as_ref();
        physical
            .and_then(|p| p.diameter.as_ref())
            .and_then(|diameter| diameter.value)
            .unwrap_or_else(|| {
                physical
                    .and_then(|p| p.radius.as_ref())
                    .and_then(|radius| radius.mean)
                    .unwrap_or(0.0)
                    * 2.0
            })
    }

    /// `temperature.mean`, else `temperature.kelvin`, else the stellar
    /// photosphere value, else `0.0`.
    pub fn mean_temperature(&self) -> f64 {
        let temperature = self
            .physical_characteristics
            .as_ref()
            .and_then(|p| p.temperature.as_ref());
        temperature
            .and_then(|t| t.mean)
            .or_else(|| temperature.and_then(|t| t.kelvin))
            .or_else(|| {
                self.temperature
                    .as_ref()
                    .and_then(|layers| layers.photosphere.as_ref())
                    .and_then(|photosphere| photosphere.value)
            })
            .unwrap_or(0.0)
    }

    /// `distanceFromSun.semimajorAxis`, else `distanceFromEarth.mean`, else `0.0`.
    pub fn distance_from_sun(&self) -> f64 {
        let orbital = self.orbital_characteristics.as_ref();
        orbital
            .and_then(|o| o.distance_from_sun.as_ref())
            .and_then(|distance| distance.semimajor_axis)
            .or_else(|| {
                orbital
                    .and_then(|o| o.distance_from_earth.as_ref())
                    .and_then(|distance| distance.mean)
            })
            .unwrap_or(0.0)
    }

    /// `moons.total`, else the roster size, else `0`.
    pub fn moon_count(&self) -> u32 {
        match &self.moons {
            Some(moons) => moons
                .total
                .unwrap_or((moons.major_moons.len() + moons.minor_moons.len()) as u32),
            None => 0,
        }
    }

    pub fn all_moons(&self) -> Vec<&MoonInfo> {
        self.moons
            .as_ref()
            .map(|moons| moons.all_moons().collect())
            .unwrap_or_default()
    }

    /// Membership in the fixed ringed-planet set; independent of `rings`.
    pub fn has_rings(&self) -> bool {
        has_rings(&self.id)
    }

    /// Case-insensitive key comparison.
    pub fn same_key(&self, other: &CelestialBody) -> bool {
        self.id.eq_ignore_ascii_case(&other.id)
    }
}
