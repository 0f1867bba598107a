//! Narrative and reference sub-structures: mythology per culture, history,
//! missions, exploration milestones and source metadata.

use crate::decode::coerce;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CulturalMythology {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub named_after: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub origin: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub greek_equivalent: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub story: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub characteristics: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub cultural_significance: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub symbolism: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub connection: Option<String>,
    #[serde(deserialize_with = "coerce::text_list")]
    pub alternative_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndianMythology {
    #[serde(deserialize_with = "coerce::text_list")]
    pub names: Vec<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub meaning: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub origin: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub birth_story: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub characteristics: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub story: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub astrological_significance: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub cultural_significance: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub symbolism: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChineseMythology {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub meaning: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub origin: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub element: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub characteristics: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub mythology: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub cultural_significance: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub symbolism: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub philosophy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EgyptianDeity {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub characteristics: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub story: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub symbolism: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EgyptianMythology {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub alternative_name: Option<String>,
    #[serde(deserialize_with = "coerce::text_list")]
    pub alternative_names: Vec<String>,
    #[serde(deserialize_with = "coerce::text_list")]
    pub names: Vec<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub origin: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub characteristics: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub story: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub cultural_significance: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub symbolism: Option<String>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub thoth: Option<EgyptianDeity>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub khonsu: Option<EgyptianDeity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mythology {
    #[serde(deserialize_with = "coerce::lenient")]
    pub roman: Option<CulturalMythology>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub greek: Option<CulturalMythology>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub indian: Option<IndianMythology>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub chinese: Option<ChineseMythology>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub egyptian: Option<EgyptianMythology>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub norse: Option<CulturalMythology>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub aztec: Option<CulturalMythology>,
}

impl Mythology {
    /// Roman name, else Greek.
    pub fn primary_name(&self) -> Option<&str> {
        self.roman
            .as_ref()
            .and_then(|myth| myth.name.as_deref())
            .or_else(|| self.greek.as_ref().and_then(|myth| myth.name.as_deref()))
    }

    /// Roman story, else Greek, else Indian.
    pub fn primary_story(&self) -> Option<&str> {
        self.roman
            .as_ref()
            .and_then(|myth| myth.story.as_deref())
            .or_else(|| self.greek.as_ref().and_then(|myth| myth.story.as_deref()))
            .or_else(|| self.indian.as_ref().and_then(|myth| myth.story.as_deref()))
    }

    /// Cultures with any record, in a fixed display order.
    pub fn cultures(&self) -> Vec<&'static str> {
        [
            ("roman", self.roman.is_some()),
            ("greek", self.greek.is_some()),
            ("indian", self.indian.is_some()),
            ("chinese", self.chinese.is_some()),
            ("egyptian", self.egyptian.is_some()),
            ("norse", self.norse.is_some()),
            ("aztec", self.aztec.is_some()),
        ]
        .into_iter()
        .filter_map(|(culture, present)| present.then_some(culture))
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryFormation {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub age: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct History {
    #[serde(deserialize_with = "coerce::lenient")]
    pub formation: Option<HistoryFormation>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub geological_history: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mission {
    #[serde(deserialize_with = "coerce::text_or_default")]
    pub name: String,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub agency: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub country: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub launch_date: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub period: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub mission_type: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::text_list")]
    pub major_achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExplorationMilestone {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub mission: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub agency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirstHumans {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub mission: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "coerce::text_list")]
    pub astronauts: Vec<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub agency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EarthObservation {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::text_list")]
    pub major_programs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Exploration {
    #[serde(deserialize_with = "coerce::lenient")]
    pub first_flyby: Option<ExplorationMilestone>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub first_orbit: Option<ExplorationMilestone>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub first_landing: Option<ExplorationMilestone>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub first_impact: Option<ExplorationMilestone>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub first_humans: Option<FirstHumans>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub total_humans: Option<String>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub earth_observation: Option<EarthObservation>,
    #[serde(deserialize_with = "coerce::text_list")]
    pub current_active_missions: Vec<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub future_missions: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObservedDistance {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub mean: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub light_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObservationFromEarth {
    #[serde(deserialize_with = "coerce::opt_f64")]
    pub apparent_magnitude: Option<f64>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub angular_diameter: Option<String>,
    #[serde(deserialize_with = "coerce::lenient")]
    pub distance_from_earth: Option<ObservedDistance>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub safety_warning: Option<String>,
}

/// Free-text comparisons against Earth, one sentence per aspect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparisonToEarth {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub size: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub mass: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub gravity: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub day_length: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub year_length: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub temperature: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub atmosphere: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub moons: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub distance: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub composition: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub energy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceMetadata {
    #[serde(deserialize_with = "coerce::opt_text")]
    pub data_source: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub last_updated: Option<String>,
    #[serde(deserialize_with = "coerce::opt_text")]
    pub version: Option<String>,
    #[serde(deserialize_with = "coerce::text_list")]
    pub references: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::{CulturalMythology, IndianMythology, Mythology};

    fn culture(name: Option<&str>, story: Option<&str>) -> Option<CulturalMythology> {
        Some(CulturalMythology {
            name: name.map(str::to_string),
            story: story.map(str::to_string),
            ..CulturalMythology::default()
        })
    }

    #[test]
    fn primary_name_prefers_roman_then_greek() {
        let mythology = Mythology {
            roman: culture(None, None),
            greek: culture(Some("Ares"), None),
            ..Mythology::default()
        };
        assert_eq!(mythology.primary_name(), Some("Ares"));
    }

    #[test]
    fn primary_story_falls_through_to_indian() {
        let mythology = Mythology {
            indian: Some(IndianMythology {
                story: Some("Mangala".to_string()),
                ..IndianMythology::default()
            }),
            ..Mythology::default()
        };
        assert_eq!(mythology.primary_story(), Some("Mangala"));
        assert_eq!(mythology.cultures(), vec!["indian"]);
    }
}
