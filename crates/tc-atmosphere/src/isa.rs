//! International Standard Atmosphere, sea level through 47 km.

use tc_core::{Field, constants::G0_MPS2};
use tc_cycle::Ambient;
use thiserror::Error;

const R_AIR: f64 = 287.052_87;
const GAMMA_AIR: f64 = 1.4;

/// Lowest altitude the model accepts [m].
pub const MIN_ALTITUDE_M: f64 = -2_000.0;
/// Highest altitude the model accepts [m].
pub const MAX_ALTITUDE_M: f64 = 47_000.0;

// ISA layer bases and temperature lapse rates [K/m] up to 47 km.
const LAYER_BASES_M: [f64; 4] = [0.0, 11_000.0, 20_000.0, 32_000.0];
const LAYER_LAPSES_K_PER_M: [f64; 4] = [-0.006_5, 0.0, 0.001_0, 0.002_8];
const LAYER_TOPS_M: [f64; 4] = [11_000.0, 20_000.0, 32_000.0, MAX_ALTITUDE_M];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AtmosphereError {
    #[error("Altitude out of range: {value} m (supported {min} to {max} m)")]
    AltitudeOutOfRange { value: f64, min: f64, max: f64 },
}

pub type AtmosphereResult<T> = Result<T, AtmosphereError>;

/// Ambient state at one altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereState {
    /// Static temperature [K]
    pub temperature: f64,
    /// Static pressure [Pa]
    pub pressure: f64,
    /// Density [kg/m^3]
    pub density: f64,
    /// Speed of sound [m/s]
    pub speed_of_sound: f64,
}

/// Layered ISA model with configurable sea-level conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsaAtmosphere {
    /// Sea-level static temperature [K]
    pub sea_level_temperature: f64,
    /// Sea-level static pressure [Pa]
    pub sea_level_pressure: f64,
}

impl Default for IsaAtmosphere {
    fn default() -> Self {
        Self {
            sea_level_temperature: 288.15,
            sea_level_pressure: 101_325.0,
        }
    }
}

impl IsaAtmosphere {
    /// Ambient state at a geopotential altitude [m].
    ///
    /// # Errors
    ///
    /// [`AtmosphereError::AltitudeOutOfRange`] outside
    /// [`MIN_ALTITUDE_M`]..=[`MAX_ALTITUDE_M`].
    pub fn sample(&self, altitude_m: f64) -> AtmosphereResult<AtmosphereState> {
        if !(MIN_ALTITUDE_M..=MAX_ALTITUDE_M).contains(&altitude_m) {
            return Err(AtmosphereError::AltitudeOutOfRange {
                value: altitude_m,
                min: MIN_ALTITUDE_M,
                max: MAX_ALTITUDE_M,
            });
        }

        let mut temperature = self.sea_level_temperature;
        let mut pressure = self.sea_level_pressure;

        // Walk the layers up to the requested altitude, carrying the base
        // temperature and pressure across each boundary.
        for i in 0..LAYER_BASES_M.len() {
            let segment_end = altitude_m.min(LAYER_TOPS_M[i]);
            let dz = segment_end - LAYER_BASES_M[i];
            let lapse = LAYER_LAPSES_K_PER_M[i];

            if lapse != 0.0 {
                let new_temperature = temperature + lapse * dz;
                pressure *= (new_temperature / temperature).powf(-G0_MPS2 / (lapse * R_AIR));
                temperature = new_temperature;
            } else {
                pressure *= (-G0_MPS2 * dz / (R_AIR * temperature)).exp();
            }

            if altitude_m <= LAYER_TOPS_M[i] {
                break;
            }
        }

        Ok(AtmosphereState {
            temperature,
            pressure,
            density: pressure / (R_AIR * temperature),
            speed_of_sound: (GAMMA_AIR * R_AIR * temperature).sqrt(),
        })
    }

    /// Ambient input for the cycle engine at one or many altitudes [m].
    ///
    /// A scalar altitude yields scalar members; an array yields same-shaped
    /// array members, one element per altitude.
    pub fn ambient(&self, altitudes: &Field) -> AtmosphereResult<Ambient> {
        match altitudes {
            Field::Scalar(altitude) => {
                let state = self.sample(*altitude)?;
                Ok(Ambient::new(
                    state.temperature,
                    state.pressure,
                    state.speed_of_sound,
                    state.density,
                ))
            }
            Field::Array(values) => {
                let mut temperature = Vec::with_capacity(values.len());
                let mut pressure = Vec::with_capacity(values.len());
                let mut speed_of_sound = Vec::with_capacity(values.len());
                let mut density = Vec::with_capacity(values.len());
                for &altitude in values {
                    let state = self.sample(altitude)?;
                    temperature.push(state.temperature);
                    pressure.push(state.pressure);
                    speed_of_sound.push(state.speed_of_sound);
                    density.push(state.density);
                }
                Ok(Ambient::new(temperature, pressure, speed_of_sound, density))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sea_level_state() {
        let isa = IsaAtmosphere::default();
        let state = isa.sample(0.0).unwrap();
        assert_relative_eq!(state.temperature, 288.15, epsilon = 1e-9);
        assert_relative_eq!(state.pressure, 101_325.0, epsilon = 1e-6);
        assert_relative_eq!(state.density, 1.225, epsilon = 1e-4);
        assert_relative_eq!(state.speed_of_sound, 340.294, epsilon = 1e-3);
    }

    #[test]
    fn troposphere_spot_values() {
        let isa = IsaAtmosphere::default();
        let state = isa.sample(5_000.0).unwrap();
        assert_relative_eq!(state.temperature, 255.65, epsilon = 1e-9);
        assert_relative_eq!(state.pressure, 54_019.9, epsilon = 1.0);

        let state = isa.sample(11_000.0).unwrap();
        assert_relative_eq!(state.temperature, 216.65, epsilon = 1e-9);
        assert_relative_eq!(state.pressure, 22_632.04, epsilon = 1.0);
    }

    #[test]
    fn tropopause_is_isothermal() {
        let isa = IsaAtmosphere::default();
        let at_12km = isa.sample(12_000.0).unwrap();
        let at_15km = isa.sample(15_000.0).unwrap();
        assert_relative_eq!(at_12km.temperature, 216.65, epsilon = 1e-9);
        assert_eq!(at_12km.temperature, at_15km.temperature);
        assert!(at_15km.pressure < at_12km.pressure);

        assert_relative_eq!(at_12km.pressure, 19_330.38, epsilon = 1.0);
        assert_relative_eq!(at_12km.speed_of_sound, 295.07, epsilon = 1e-2);
        assert_relative_eq!(at_12km.density, 0.310_83, epsilon = 1e-4);
    }

    #[test]
    fn stratosphere_spot_values() {
        let isa = IsaAtmosphere::default();
        let state = isa.sample(20_000.0).unwrap();
        assert_relative_eq!(state.pressure, 5_474.88, epsilon = 1.0);

        let state = isa.sample(32_000.0).unwrap();
        assert_relative_eq!(state.temperature, 228.65, epsilon = 1e-6);
        assert_relative_eq!(state.pressure, 868.02, epsilon = 0.5);

        let state = isa.sample(47_000.0).unwrap();
        assert_relative_eq!(state.temperature, 270.65, epsilon = 1e-6);
    }

    #[test]
    fn altitude_out_of_range_is_rejected() {
        let isa = IsaAtmosphere::default();
        assert!(matches!(
            isa.sample(60_000.0),
            Err(AtmosphereError::AltitudeOutOfRange { .. })
        ));
        assert!(matches!(
            isa.sample(-3_000.0),
            Err(AtmosphereError::AltitudeOutOfRange { .. })
        ));
        assert!(isa.sample(-1_000.0).is_ok());
    }

    #[test]
    fn ambient_preserves_altitude_shape() {
        let isa = IsaAtmosphere::default();

        let scalar = isa.ambient(&Field::scalar(12_000.0)).unwrap();
        assert!(scalar.temperature.as_scalar().is_some());

        let column = isa
            .ambient(&Field::array(vec![0.0, 8_000.0, 12_000.0]))
            .unwrap();
        assert_eq!(column.pressure.shape(), Some(3));
        assert_relative_eq!(column.temperature.at(2), 216.65, epsilon = 1e-9);

        // Array elements agree with the scalar path.
        let spot = isa.sample(8_000.0).unwrap();
        assert_eq!(column.pressure.at(1), spot.pressure);
    }
}
