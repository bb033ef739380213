//! Flight-condition input supplied to each analysis call.

use tc_core::Field;

/// Ambient atmosphere state at the flight condition.
///
/// Supplied per `perform_analysis` call and never owned or mutated by the
/// engine. Members may be scalar or same-shaped arrays; array shapes must
/// agree with each other and with the commanded flight speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Ambient {
    /// Static temperature [K]
    pub temperature: Field,
    /// Static pressure [Pa]
    pub pressure: Field,
    /// Speed of sound [m/s]
    pub speed_of_sound: Field,
    /// Density [kg/m^3]
    pub density: Field,
}

impl Ambient {
    pub fn new(
        temperature: impl Into<Field>,
        pressure: impl Into<Field>,
        speed_of_sound: impl Into<Field>,
        density: impl Into<Field>,
    ) -> Self {
        Self {
            temperature: temperature.into(),
            pressure: pressure.into(),
            speed_of_sound: speed_of_sound.into(),
            density: density.into(),
        }
    }

    /// The members in a fixed order, for shape validation.
    pub fn fields(&self) -> [&Field; 4] {
        [
            &self.temperature,
            &self.pressure,
            &self.speed_of_sound,
            &self.density,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_and_array_members() {
        let scalar = Ambient::new(216.65, 19_330.4, 295.07, 0.3108);
        assert_eq!(scalar.temperature.as_scalar(), Some(216.65));

        let column = Ambient::new(
            vec![288.15, 216.65],
            vec![101_325.0, 19_330.4],
            vec![340.29, 295.07],
            vec![1.225, 0.3108],
        );
        assert_eq!(column.pressure.shape(), Some(2));
    }
}
