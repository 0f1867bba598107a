//! Star-only sub-structures: layered temperature and structure,
//! composition, rotation, activity and lifespan.

use crate::decode::coerce;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TempValue {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
}

/// Temperature per stellar layer, core outward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StellarTemperature {
    #[serde(deserialize_with = "coerce::lenient")]
    pub core: Option<TempValue>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub radiative_zone: Option<TempValue>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub convective_zone: Option<TempValue>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub photosphere: Option<TempValue>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub chromosphere: Option<TempValue>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub corona: Option<TempValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructureLayer {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub radius: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub thickness: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub extent: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub temperature: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub pressure: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub features: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StellarStructure {
    #[serde(deserialize_with = "coerce::lenient")]
    pub core: Option<StructureLayer>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub radiative_zone: Option<StructureLayer>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub convective_zone: Option<StructureLayer>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub photosphere: Option<StructureLayer>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub chromosphere: Option<StructureLayer>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub corona: Option<StructureLayer>,
}

/// Mass fractions by element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StellarComposition {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub hydrogen: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub helium: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub oxygen: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub carbon: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub iron: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub neon: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub nitrogen: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub silicon: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub magnesium: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub sulfur: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
}

impl StellarComposition {
    /// Present components as `(name, fraction)`, in declaration order.
    pub fn components(&self) -> Vec<(&'static str, f64)> {
        [
            ("hydrogen", self.hydrogen),
            ("helium", self.helium),
            ("oxygen", self.oxygen),
            ("carbon", self.carbon),
            ("iron", self.iron),
            ("neon", self.neon),
            ("nitrogen", self.nitrogen),
            ("silicon", self.silicon),
            ("magnesium", self.magnesium),
            ("sulfur", self.sulfur),
        ]
        .into_iter()
        .filter_map(|(name, fraction)| fraction.map(|value| (name, value)))
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RotationValue {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StellarRotation {
    #[serde(deserialize_with = "coerce::lenient")]
    pub equatorial: Option<RotationValue>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub polar: Option<RotationValue>,
    /// e.g. `differential`.
    #[serde(rename = "type", deserialize_with = "coerce::opt_text")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolarCycle {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub period: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sunspots {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub cause: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub size: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub cycle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolarFlares {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub cause: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub impact: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoronalMassEjections {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub impact: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolarWind {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub speed: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub extent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StellarActivity {
    #[serde(deserialize_with = "coerce::lenient")]
    pub solar_cycle: Option<SolarCycle>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub sunspots: Option<Sunspots>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub solar_flares: Option<SolarFlares>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub coronal_mass_ejections: Option<CoronalMassEjections>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub solar_wind: Option<SolarWind>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvolutionStage {
    #[serde(deserialize_with = "coerce::text_or_default")]
    pub stage: String,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub timeframe: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FutureEvolution {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::lenient_list")]
    pub stages: Vec<EvolutionStage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lifespan {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub current_age: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub main_sequence_lifetime: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub remaining_life: Option<String>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub future_evolution: Option<FutureEvolution>,
}
