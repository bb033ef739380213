//! Derived cycle state and result-group types.

use tc_core::Field;

/// Exit conditions of one exhaust stream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NozzleExit {
    /// Exit Mach number
    pub mach: Field,
    /// Exit static pressure [Pa]
    pub pressure: Field,
    /// Exit static temperature [K]
    pub temperature: Field,
    /// Exhaust velocity [m/s]
    pub velocity: Field,
}

/// Specific thrust per unit total mass flow [N s/kg].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpecificThrust {
    pub total: Field,
    pub core: Field,
    pub fan: Field,
}

/// Fuel consumption rates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FuelConsumption {
    /// Thrust-specific fuel consumption [kg/(N s)]
    pub tsfc: Field,
    /// Core fuel-air ratio normalized by total mass flow, f/(1 + alpha)
    pub fuel_air_ratio: Field,
}

/// Cycle efficiencies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Efficiencies {
    /// Overall efficiency, thermal x propulsive
    pub overall: Field,
    pub propulsive: Field,
    pub thermal: Field,
}

/// A (temperature ratio, pressure ratio) pair for one cycle station.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OperatingRatio {
    pub tau: Field,
    pub pi: Field,
}

/// Full derived state of one analysis run.
///
/// Recomputed and overwritten by every `perform_analysis`; no history is
/// retained.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleState {
    /// Flight Mach number
    pub mach: Field,
    /// Reference stagnation temperature ratio
    pub tau_r: Field,
    /// Reference stagnation pressure ratio
    pub pi_r: Field,
    /// Inlet recovery pressure ratio
    pub pi_d: Field,
    /// Burner enthalpy ratio
    pub tau_lambda: Field,
    /// Compressor total-temperature ratio
    pub tau_c: Field,
    /// Fan total-temperature ratio
    pub tau_f: Field,
    /// Core fuel-air ratio
    pub fuel_air_ratio: Field,
    /// Turbine total-temperature ratio
    pub tau_t: Field,
    /// Turbine total-pressure ratio
    pub pi_t: Field,
    /// Core nozzle exit conditions
    pub core_exit: NozzleExit,
    /// Fan nozzle exit conditions
    pub fan_exit: NozzleExit,
    /// Core-stream specific thrust [N s/kg]
    pub st_core: Field,
    /// Fan-stream specific thrust [N s/kg]
    pub st_fan: Field,
    /// Total specific thrust [N s/kg]
    pub st: Field,
    /// Thrust-specific fuel consumption [kg/(N s)]
    pub tsfc: Field,
    /// Exhaust kinetic-energy rise per unit total mass flow [J/kg]
    pub delta_ke: Field,
    /// Thermal efficiency
    pub eta_thermal: Field,
    /// Propulsive efficiency
    pub eta_propulsive: Field,
}
