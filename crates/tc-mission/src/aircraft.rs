//! Airframe mass and drag bookkeeping.

use tc_core::{Area, Mass, constants::G0_MPS2};

/// Flight segment kind, selecting the structural load factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightMode {
    Cruise,
    Takeoff,
    Landing,
}

/// Structural load factor per flight mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadFactors {
    pub cruise: f64,
    pub takeoff: f64,
    pub landing: f64,
}

impl Default for LoadFactors {
    fn default() -> Self {
        Self {
            cruise: 1.0,
            takeoff: 1.0,
            landing: 1.0,
        }
    }
}

/// Fixed-wing airframe with a quadratic drag polar.
///
/// Drag coefficient model: `C_D = C_D0 + k1 C_L^2 + k2 C_L`.
#[derive(Debug, Clone)]
pub struct Aircraft {
    /// Engine inlet capture area
    pub inlet_area: Area,
    /// Wing reference area
    pub wing_area: Area,
    pub mass_structure: Mass,
    pub mass_payload: Mass,
    /// Remaining fuel; decremented by mission steps
    pub mass_fuel: Mass,
    /// Zero-lift drag coefficient
    pub c_d0: f64,
    /// Quadratic drag-polar factor
    pub k1: f64,
    /// Linear drag-polar factor
    pub k2: f64,
    pub load_factors: LoadFactors,
}

impl Aircraft {
    pub fn total_mass(&self) -> Mass {
        self.mass_structure + self.mass_payload + self.mass_fuel
    }

    pub fn drag_coefficient(&self, c_l: f64) -> f64 {
        self.c_d0 + self.k1 * c_l * c_l + self.k2 * c_l
    }

    pub fn load_factor(&self, mode: FlightMode) -> f64 {
        match mode {
            FlightMode::Cruise => self.load_factors.cruise,
            FlightMode::Takeoff => self.load_factors.takeoff,
            FlightMode::Landing => self.load_factors.landing,
        }
    }

    /// Lift force [N] the wing must produce in the given mode.
    pub fn lift_required(&self, mode: FlightMode) -> f64 {
        self.load_factor(mode) * self.total_mass().value * G0_MPS2
    }
}
