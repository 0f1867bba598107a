//! Body classification and ordering tables.
//!
//! # Invariants
//! - `normalize_type` is total; unrecognized text defaults to `Planet`.
//! - The Moon shares Earth's order so it sorts next to Earth.
//! - Unknown ids get [`UNKNOWN_ORDER`] and sort after every known body.

use crate::model::body::CelestialBodyType;

/// Nominal surface gravity of Earth in m/s².
pub const EARTH_GRAVITY: f64 = 9.8;

/// Last-place order for ids missing from [`KNOWN_ORDERS`].
pub const UNKNOWN_ORDER: u32 = 99;

pub const KNOWN_ORDERS: [(&str, u32); 10] = [
    ("sun", 0),
    ("mercury", 1),
    ("venus", 2),
    ("earth", 3),
    ("moon", 3),
    ("mars", 4),
    ("jupiter", 5),
    ("saturn", 6),
    ("uranus", 7),
    ("neptune", 8),
];

pub const RINGED_BODY_IDS: [&str; 4] = ["saturn", "jupiter", "uranus", "neptune"];

/// Maps a raw type string (case-insensitive) into the closed type set.
///
/// Missing and unrecognized values are `Planet`: permissive by policy.
pub fn normalize_type(raw: Option<&str>) -> CelestialBodyType {
    let Some(raw) = raw else {
        return CelestialBodyType::Planet;
    };
    match raw.trim().to_lowercase().as_str() {
        "star" => CelestialBodyType::Star,
        "terrestrial" | "gas-giant" | "ice-giant" | "planet" => CelestialBodyType::Planet,
        "dwarf-planet" => CelestialBodyType::DwarfPlanet,
        "natural-satellite" | "moon" => CelestialBodyType::Moon,
        "asteroid" => CelestialBodyType::Asteroid,
        "comet" => CelestialBodyType::Comet,
        _ => CelestialBodyType::Planet,
    }
}

/// Fixed order lookup by id (case-insensitive).
pub fn order_from_sun(id: &str) -> u32 {
    KNOWN_ORDERS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(id))
        .map(|(_, order)| *order)
        .unwrap_or(UNKNOWN_ORDER)
}

pub fn has_rings(id: &str) -> bool {
    RINGED_BODY_IDS
        .iter()
        .any(|ringed| ringed.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::{has_rings, normalize_type, order_from_sun, UNKNOWN_ORDER};
    use crate::model::body::CelestialBodyType;

    #[test]
    fn normalize_type_collapses_aliases() {
        assert_eq!(normalize_type(Some("gas-giant")), CelestialBodyType::Planet);
        assert_eq!(normalize_type(Some("Ice-Giant")), CelestialBodyType::Planet);
        assert_eq!(
            normalize_type(Some("Natural-Satellite")),
            CelestialBodyType::Moon
        );
        assert_eq!(
            normalize_type(Some("DWARF-PLANET")),
            CelestialBodyType::DwarfPlanet
        );
        assert_eq!(normalize_type(Some("star")), CelestialBodyType::Star);
        assert_eq!(normalize_type(Some("comet")), CelestialBodyType::Comet);
        assert_eq!(normalize_type(Some("asteroid")), CelestialBodyType::Asteroid);
    }

    #[test]
    fn normalize_type_defaults_to_planet() {
        assert_eq!(
            normalize_type(Some("unknown-string")),
            CelestialBodyType::Planet
        );
        assert_eq!(normalize_type(None), CelestialBodyType::Planet);
    }

    #[test]
    fn order_table_keeps_moon_next_to_earth() {
        assert_eq!(order_from_sun("sun"), 0);
        assert_eq!(order_from_sun("Earth"), 3);
        assert_eq!(order_from_sun("moon"), order_from_sun("earth"));
        assert_eq!(order_from_sun("neptune"), 8);
        assert_eq!(order_from_sun("pluto"), UNKNOWN_ORDER);
    }

    #[test]
    fn ringed_set_is_fixed() {
        assert!(has_rings("jupiter"));
        assert!(has_rings("NEPTUNE"));
        assert!(!has_rings("earth"));
    }
}
