//! Perfect-gas parameter bundles.

use crate::relations::{gas_constant, heat_capacity};

/// Thermodynamic parameters of a perfect gas.
///
/// The three members are mutually consistent: `r = (gamma - 1) * cp / gamma`.
/// Construct through [`GasProperties::from_gamma_cp`] or
/// [`GasProperties::from_gamma_r`] so the third parameter is derived rather
/// than supplied independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    /// Ratio of specific heats
    pub gamma: f64,
    /// Specific heat at constant pressure [J/(kg K)]
    pub cp: f64,
    /// Specific gas constant [J/(kg K)]
    pub r: f64,
}

impl GasProperties {
    /// Dry air at standard-atmosphere conditions.
    pub const AIR: GasProperties = GasProperties {
        gamma: 1.4,
        r: 287.052_87,
        cp: 1.4 * 287.052_87 / (1.4 - 1.0),
    };

    pub fn from_gamma_cp(gamma: f64, cp: f64) -> Self {
        Self {
            gamma,
            cp,
            r: gas_constant(gamma, cp),
        }
    }

    pub fn from_gamma_r(gamma: f64, r: f64) -> Self {
        Self {
            gamma,
            cp: heat_capacity(gamma, r),
            r,
        }
    }

    /// Local speed of sound [m/s] at static temperature `t` [K].
    pub fn sonic_speed(&self, t: f64) -> f64 {
        crate::relations::sonic_speed(self.gamma, self.r, t)
    }
}
