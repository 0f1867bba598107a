//! Periodic-table element record.
//!
//! # Responsibility
//! - Define the normalized element shape decoded from the combined source.
//! - Expose derived attributes as pure functions of stored fields.
//!
//! # Invariants
//! - `atomic_number` is the unique catalog key.
//! - `symbol` is unique case-insensitively.
//! - Derived values (neutrons, valence, grid position) are never stored.
//! - `electron_shells`, `oxidation_states`, `isotopes` keep source order.

use crate::decode::coerce;
use crate::derivation::layout::{grid_position, GridPosition};
use crate::derivation::matter::state_at_temperature;
use crate::model::flexible::FlexibleNumber;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Chemical classification of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ElementCategory {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
    #[default]
    Unknown,
}

impl ElementCategory {
    pub const ALL: [ElementCategory; 11] = [
        Self::AlkaliMetal,
        Self::AlkalineEarthMetal,
        Self::TransitionMetal,
        Self::PostTransitionMetal,
        Self::Metalloid,
        Self::Nonmetal,
        Self::Halogen,
        Self::NobleGas,
        Self::Lanthanide,
        Self::Actinide,
        Self::Unknown,
    ];

    /// Maps raw source text to a category. Never fails.
    ///
    /// Accepts the enum form (`ALKALI_METAL`) and descriptive forms
    /// (`alkali metal`, `diatomic nonmetal`,
    /// `unknown, probably transition metal`).
    pub fn from_raw(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "alkali metal" => Self::AlkaliMetal,
            "alkaline earth metal" => Self::AlkalineEarthMetal,
            "transition metal" | "unknown, probably transition metal" => Self::TransitionMetal,
            "post transition metal" | "unknown, probably post transition metal" => {
                Self::PostTransitionMetal
            }
            "metalloid" | "unknown, probably metalloid" => Self::Metalloid,
            "nonmetal" | "diatomic nonmetal" | "polyatomic nonmetal" | "reactive nonmetal" => {
                Self::Nonmetal
            }
            "halogen" => Self::Halogen,
            "noble gas" | "unknown, predicted to be noble gas" => Self::NobleGas,
            "lanthanide" | "lanthanoid" => Self::Lanthanide,
            "actinide" | "actinoid" => Self::Actinide,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AlkaliMetal => "Alkali Metal",
            Self::AlkalineEarthMetal => "Alkaline Earth Metal",
            Self::TransitionMetal => "Transition Metal",
            Self::PostTransitionMetal => "Post-Transition Metal",
            Self::Metalloid => "Metalloid",
            Self::Nonmetal => "Nonmetal",
            Self::Halogen => "Halogen",
            Self::NobleGas => "Noble Gas",
            Self::Lanthanide => "Lanthanide",
            Self::Actinide => "Actinide",
            Self::Unknown => "Unknown",
        }
    }

    /// Wire form used by the combined elements source.
    pub fn source_name(self) -> &'static str {
        match self {
            Self::AlkaliMetal => "ALKALI_METAL",
            Self::AlkalineEarthMetal => "ALKALINE_EARTH_METAL",
            Self::TransitionMetal => "TRANSITION_METAL",
            Self::PostTransitionMetal => "POST_TRANSITION_METAL",
            Self::Metalloid => "METALLOID",
            Self::Nonmetal => "NONMETAL",
            Self::Halogen => "HALOGEN",
            Self::NobleGas => "NOBLE_GAS",
            Self::Lanthanide => "LANTHANIDE",
            Self::Actinide => "ACTINIDE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Physical state of matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StateOfMatter {
    Solid,
    Liquid,
    Gas,
    #[default]
    Unknown,
}

impl StateOfMatter {
    pub fn from_raw(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "solid" => Self::Solid,
            "liquid" => Self::Liquid,
            "gas" => Self::Gas,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Liquid => "Liquid",
            Self::Gas => "Gas",
            Self::Unknown => "Unknown",
        }
    }

    pub fn source_name(self) -> &'static str {
        match self {
            Self::Solid => "SOLID",
            Self::Liquid => "LIQUID",
            Self::Gas => "GAS",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Electron block (s/p/d/f).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Block {
    /// Sources omit the block for some s-block entries; a missing value
    /// decodes as `S`.
    #[default]
    S,
    P,
    D,
    F,
    Unknown,
}

impl Block {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "s" => Self::S,
            "p" => Self::P,
            "d" => Self::D,
            "f" => Self::F,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::S => "s",
            Self::P => "p",
            Self::D => "d",
            Self::F => "f",
            Self::Unknown => "unknown",
        }
    }
}

macro_rules! total_enum_serde {
    ($ty:ty, $to_wire:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = Value::deserialize(deserializer)?;
                Ok(match value {
                    Value::String(text) => <$ty>::from_raw(&text),
                    _ => <$ty>::default(),
                })
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.$to_wire())
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

total_enum_serde!(ElementCategory, source_name);
total_enum_serde!(StateOfMatter, source_name);
total_enum_serde!(Block, label);

/// Lowercases and folds `_`/`-` separators and runs of whitespace into one
/// space, so `ALKALINE_EARTH_METAL` and `Alkaline-Earth  Metal` compare equal.
pub(crate) fn normalize_label(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// One nuclide of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Isotope {
    #[serde(deserialize_with = "coerce::required_u32")]
    pub mass_number: u32,
    #[serde(deserialize_with = "coerce::required_u32")]
    pub neutrons: u32,
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub atomic_mass: Option<f64>,
    /// Natural abundance fraction; `0.0` when unspecified.
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    abundance: Option<f64>,
    #[serde(default)]
    pub half_life: FlexibleNumber,
    #[serde(default, deserialize_with = "coerce::opt_text")]
    pub half_life_unit: Option<String>,
    #[serde(default, deserialize_with = "coerce::text_list")]
    pub decay_modes: Vec<String>,
    #[serde(default, deserialize_with = "coerce::opt_text")]
    pub spin: Option<String>,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub stable: bool,
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub binding_energy: Option<f64>,
    #[serde(default, deserialize_with = "coerce::opt_f64")]
    pub magnetic_dipole: Option<f64>,
}

impl Isotope {
    pub fn new(mass_number: u32, neutrons: u32) -> Self {
        Self {
            mass_number,
            neutrons,
            atomic_mass: None,
            abundance: None,
            half_life: FlexibleNumber::default(),
            half_life_unit: None,
            decay_modes: Vec::new(),
            spin: None,
            stable: false,
            binding_energy: None,
            magnetic_dipole: None,
        }
    }

    pub fn abundance(&self) -> f64 {
        self.abundance.unwrap_or(0.0)
    }

    pub fn with_abundance(mut self, abundance: f64) -> Self {
        self.abundance = Some(abundance);
        self
    }

    /// Half-life as display text with its unit, e.g. `"12.32 y"` or `"?"`.
    pub fn half_life_display(&self) -> Option<String> {
        let base = self.half_life.display()?;
        Some(match (&self.half_life.value, &self.half_life_unit) {
            (Some(_), Some(unit)) if !unit.trim().is_empty() => format!("{base} {}", unit.trim()),
            _ => base,
        })
    }
}

/// Scalar physical/chemical properties. Every field is independently
/// optional because source coverage is incomplete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementProperties {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub electronegativity: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub electronegativity_pauling: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub electronegativity_sanderson: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub electronegativity_allred_rochow: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub electronegativity_mulliken: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub electronegativity_allen: Option<f64>,
    /// kJ/mol, first ionization first.
    #[serde(deserialize_with = "coerce::f64_list")]
    pub ionization_energies: Vec<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub electron_affinity: Option<f64>,

    // Radii in pm.
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub atomic_radius_empirical: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub atomic_radius_calculated: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub covalent_radius: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub van_der_waals_radius: Option<f64>,

    /// g/cm³
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub density: Option<f64>,
    /// Kelvin.
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub melting_point: Option<f64>,
    /// Kelvin.
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub boiling_point: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub heat_of_fusion: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub heat_of_vaporization: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub molar_heat_capacity: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub specific_heat_capacity: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub appearance: Option<String>,

    #[serde(deserialize_with = "coerce::opt_f64")]
    pub thermal_conductivity: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub thermal_expansion: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub electrical_conductivity: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub superconducting_point: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub magnetic_ordering: Option<String>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub magnetic_susceptibility: Option<f64>,

    #[serde(deserialize_with = "coerce::opt_f64")]
    pub mohs_hardness: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub youngs_modulus: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub shear_modulus: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub bulk_modulus: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub poisson_ratio: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub sound_speed: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub refractive_index: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub crystal_structure: Option<String>,

    #[serde(deserialize_with = "coerce::opt_f64")]
    pub standard_electrode_potential: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub basicity: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscoveryInfo {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub discovered_by: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub named_by: Option<String>,
    #[serde(deserialize_with = "coerce::opt_i32")]
    pub discovery_year: Option<i32>,
    /// Historical period, e.g. `antiquity`.
    #[serde(deserialize_with = "coerce::opt_text")]
    pub era: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub name_origin: Option<String>,
}

/// Abundance in ppb.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Abundance {
    #[serde(rename = "abundanceUniverse", deserialize_with = "coerce::opt_f64")]
    pub universe: Option<f64>,
    #[serde(rename = "abundanceSun", deserialize_with = "coerce::opt_f64")]
    pub sun: Option<f64>,
    #[serde(rename = "abundanceMeteor", deserialize_with = "coerce::opt_f64")]
    pub meteor: Option<f64>,
    #[serde(rename = "abundanceCrust", deserialize_with = "coerce::opt_f64")]
    pub crust: Option<f64>,
    #[serde(rename = "abundanceOcean", deserialize_with = "coerce::opt_f64")]
    pub ocean: Option<f64>,
    #[serde(rename = "abundanceHuman", deserialize_with = "coerce::opt_f64")]
    pub human: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HazardInfo {
    #[serde(deserialize_with = "coerce::text_list")]
    pub ghs_symbols: Vec<String>,
    #[serde(deserialize_with = "coerce::text_list")]
    pub h_statements: Vec<String>,
    #[serde(deserialize_with = "coerce::text_list")]
    pub p_statements: Vec<String>,
    #[serde(deserialize_with = "coerce::opt_u32")]
    pub nfpa_health: Option<u32>,
    #[serde(deserialize_with = "coerce::opt_u32")]
    pub nfpa_fire: Option<u32>,
    #[serde(deserialize_with = "coerce::opt_u32")]
    pub nfpa_reactivity: Option<u32>,
}

/// External identifiers, media references and reference text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceInfo {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub cas_number: Option<String>,
    #[serde(deserialize_with = "coerce::opt_u32")]
    pub pubchem_cid: Option<u32>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub rtecs_number: Option<String>,
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub price_per_kg: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub image_title: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub image_attribution: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub bohr_model_image: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub bohr_model3d: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub spectral_image: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub wikipedia_url: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub cpk_hex_color: Option<String>,
}

/// Normalized periodic-table element.
///
/// Required source fields: `atomicNumber`, `symbol`, `name`, `atomicMass`,
/// `period`. Everything else decodes to its declared default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    #[serde(deserialize_with = "coerce::required_u32")]
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    #[serde(default, deserialize_with = "coerce::opt_text")]
    pub latin_name: Option<String>,
    #[serde(deserialize_with = "coerce::required_f64")]
    pub atomic_mass: f64,
    #[serde(default, deserialize_with = "coerce::opt_text")]
    pub standard_atomic_weight: Option<String>,

    #[serde(default)]
    pub category: ElementCategory,
    /// `None` for lanthanides and actinides.
    #[serde(default, deserialize_with = "coerce::opt_u32")]
    pub group: Option<u32>,
    #[serde(deserialize_with = "coerce::required_u32")]
    pub period: u32,
    #[serde(default)]
    pub block: Block,
    #[serde(default)]
    pub natural_state: StateOfMatter,

    #[serde(default, deserialize_with = "coerce::text_or_default")]
    pub electron_configuration: String,
    #[serde(default, deserialize_with = "coerce::text_or_default")]
    pub electron_configuration_semantic: String,
    #[serde(default, deserialize_with = "coerce::u32_list")]
    pub electron_shells: Vec<u32>,
    #[serde(default, deserialize_with = "coerce::i32_list")]
    pub oxidation_states: Vec<i32>,
    #[serde(default, deserialize_with = "coerce::lenient_list")]
    pub isotopes: Vec<Isotope>,

    #[serde(flatten)]
    pub properties: ElementProperties,
    #[serde(flatten)]
    pub discovery: DiscoveryInfo,
    #[serde(flatten)]
    pub abundance: Abundance,
    #[serde(flatten)]
    pub hazards: HazardInfo,
    #[serde(flatten)]
    pub reference: ReferenceInfo,

    #[serde(default, deserialize_with = "coerce::text_list")]
    pub trivia: Vec<String>,
    #[serde(default, deserialize_with = "coerce::text_list")]
    pub real_world_uses: Vec<String>,
    #[serde(default, deserialize_with = "coerce::text_list")]
    pub where_found: Vec<String>,
}

impl Element {
    /// Creates an element with required fields only; every optional field
    /// holds its declared default.
    pub fn new(
        atomic_number: u32,
        symbol: impl Into<String>,
        name: impl Into<String>,
        atomic_mass: f64,
        category: ElementCategory,
        period: u32,
    ) -> Self {
        Self {
            atomic_number,
            symbol: symbol.into(),
            name: name.into(),
            latin_name: None,
            atomic_mass,
            standard_atomic_weight: None,
            category,
            group: None,
            period,
            block: Block::default(),
            natural_state: StateOfMatter::Unknown,
            electron_configuration: String::new(),
            electron_configuration_semantic: String::new(),
            electron_shells: Vec::new(),
            oxidation_states: Vec::new(),
            isotopes: Vec::new(),
            properties: ElementProperties::default(),
            discovery: DiscoveryInfo::default(),
            abundance: Abundance::default(),
            hazards: HazardInfo::default(),
            reference: ReferenceInfo::default(),
            trivia: Vec::new(),
            real_world_uses: Vec::new(),
            where_found: Vec::new(),
        }
    }

    pub fn protons(&self) -> u32 {
        self.atomic_number
    }

    /// Neutral-atom assumption.
    pub fn electrons(&self) -> u32 {
        self.atomic_number
    }

    /// `floor(atomic_mass) - atomic_number`, floored at zero and capped at
    /// `u32::MAX`.
    pub fn neutrons(&self) -> u32 {
        let mass_number = self.atomic_mass.floor() as i64;
        let neutrons = mass_number.saturating_sub(i64::from(self.atomic_number)).max(0);
        u32::try_from(neutrons).unwrap_or(u32::MAX)
    }

    /// Outermost shell occupancy; `0` when no shells are recorded.
    pub fn valence_electrons(&self) -> u32 {
        self.electron_shells.last().copied().unwrap_or(0)
    }

    pub fn grid_position(&self) -> GridPosition {
        grid_position(self.atomic_number)
    }

    /// State at `temp_kelvin`, or `Unknown` without both transition points.
    pub fn state_at_temperature(&self, temp_kelvin: f64) -> StateOfMatter {
        state_at_temperature(
            self.properties.melting_point,
            self.properties.boiling_point,
            temp_kelvin,
        )
    }

    pub fn stable_isotopes(&self) -> impl Iterator<Item = &Isotope> {
        self.isotopes.iter().filter(|isotope| isotope.stable)
    }

    /// Real-world uses, falling back to trivia when no uses are recorded.
    pub fn informational_notes(&self) -> &[String] {
        if self.real_world_uses.is_empty() {
            &self.trivia
        } else {
            &self.real_world_uses
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_label, Block, Element, ElementCategory, Isotope, StateOfMatter};
    use crate::model::flexible::FlexibleNumber;

    #[test]
    fn category_mapping_is_total() {
        assert_eq!(
            ElementCategory::from_raw("ALKALI_METAL"),
            ElementCategory::AlkaliMetal
        );
        assert_eq!(
            ElementCategory::from_raw("Alkaline-Earth Metal"),
            ElementCategory::AlkalineEarthMetal
        );
        assert_eq!(
            ElementCategory::from_raw("diatomic nonmetal"),
            ElementCategory::Nonmetal
        );
        assert_eq!(
            ElementCategory::from_raw("post-transition metal"),
            ElementCategory::PostTransitionMetal
        );
        assert_eq!(
            ElementCategory::from_raw("unknown, predicted to be noble gas"),
            ElementCategory::NobleGas
        );
        assert_eq!(
            ElementCategory::from_raw("superheavy"),
            ElementCategory::Unknown
        );
    }

    #[test]
    fn every_category_round_trips_through_its_source_name() {
        for category in ElementCategory::ALL {
            assert_eq!(ElementCategory::from_raw(category.source_name()), category);
            assert_eq!(ElementCategory::from_raw(category.label()), category);
        }
    }

    #[test]
    fn block_and_state_map_case_insensitively() {
        assert_eq!(Block::from_raw("D"), Block::D);
        assert_eq!(Block::from_raw("g"), Block::Unknown);
        assert_eq!(StateOfMatter::from_raw("GAS"), StateOfMatter::Gas);
        assert_eq!(StateOfMatter::from_raw("plasma"), StateOfMatter::Unknown);
    }

    #[test]
    fn normalize_label_folds_separators() {
        assert_eq!(normalize_label("  NOBLE_GAS "), "noble gas");
        assert_eq!(normalize_label("Post-Transition   Metal"), "post transition metal");
    }

    #[test]
    fn derived_counts_follow_stored_fields() {
        let mut iron = Element::new(26, "Fe", "Iron", 55.845, ElementCategory::TransitionMetal, 4);
        iron.electron_shells = vec![2, 8, 14, 2];
        assert_eq!(iron.protons(), 26);
        assert_eq!(iron.electrons(), 26);
        assert_eq!(iron.neutrons(), 29);
        assert_eq!(iron.valence_electrons(), 2);

        let light = Element::new(1, "H", "Hydrogen", 0.5, ElementCategory::Nonmetal, 1);
        assert_eq!(light.neutrons(), 0);
        assert_eq!(light.valence_electrons(), 0);

        let absurd = Element::new(1, "X", "Heavy", 1e12, ElementCategory::Unknown, 1);
        assert_eq!(absurd.neutrons(), u32::MAX);
    }

    #[test]
    fn informational_notes_fall_back_to_trivia() {
        let mut gold = Element::new(79, "Au", "Gold", 196.97, ElementCategory::TransitionMetal, 6);
        gold.trivia = vec!["Does not tarnish".to_string()];
        assert_eq!(gold.informational_notes(), ["Does not tarnish".to_string()]);

        gold.real_world_uses = vec!["Jewelry".to_string()];
        assert_eq!(gold.informational_notes(), ["Jewelry".to_string()]);
    }

    #[test]
    fn half_life_display_appends_unit_only_for_numbers() {
        let mut isotope = Isotope::new(3, 2);
        assert_eq!(isotope.abundance(), 0.0);
        assert_eq!(isotope.half_life_display(), None);

        isotope.half_life = FlexibleNumber::from_number(12.32);
        isotope.half_life_unit = Some("y".to_string());
        assert_eq!(isotope.half_life_display().as_deref(), Some("12.32 y"));

        isotope.half_life = FlexibleNumber::from_text("?");
        assert_eq!(isotope.half_life_display().as_deref(), Some("?"));
    }
}
