//! State of matter at a query temperature.

use crate::model::element::StateOfMatter;

/// Solid below `melting`, liquid below `boiling`, gas otherwise.
///
/// Comparisons are strict: exactly at the melting point is liquid, exactly
/// at the boiling point is gas. Either point missing yields `Unknown`.
pub fn state_at_temperature(
    melting: Option<f64>,
    boiling: Option<f64>,
    temp_kelvin: f64,
) -> StateOfMatter {
    let (Some(melting), Some(boiling)) = (melting, boiling) else {
        return StateOfMatter::Unknown;
    };

    if temp_kelvin < melting {
        StateOfMatter::Solid
    } else if temp_kelvin < boiling {
        StateOfMatter::Liquid
    } else {
        StateOfMatter::Gas
    }
}

/// Standard ambient temperature used for "natural" state displays.
pub const ROOM_TEMPERATURE_KELVIN: f64 = 298.15;

#[cfg(test)]
mod tests {
    use super::state_at_temperature;
    use crate::model::element::StateOfMatter;

    #[test]
    fn water_like_transitions() {
        let at = |t| state_at_temperature(Some(273.0), Some(373.0), t);
        assert_eq!(at(200.0), StateOfMatter::Solid);
        assert_eq!(at(273.0), StateOfMatter::Liquid);
        assert_eq!(at(300.0), StateOfMatter::Liquid);
        assert_eq!(at(373.0), StateOfMatter::Gas);
        assert_eq!(at(400.0), StateOfMatter::Gas);
    }

    #[test]
    fn missing_point_is_unknown_at_any_temperature() {
        for t in [0.0, 273.0, 10_000.0] {
            assert_eq!(
                state_at_temperature(None, Some(373.0), t),
                StateOfMatter::Unknown
            );
            assert_eq!(
                state_at_temperature(Some(273.0), None, t),
                StateOfMatter::Unknown
            );
        }
    }
}
