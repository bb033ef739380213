//! Mission-segment time integration.

use tc_atmosphere::IsaAtmosphere;
use tc_core::{constants::G0_MPS2, ensure_finite, kg};
use tc_cycle::{Ambient, TurbofanAnalysis};
use tracing::debug;

use crate::aircraft::{Aircraft, FlightMode};
use crate::error::{MissionError, MissionResult};

/// Options for mission-segment integration.
#[derive(Debug, Clone, Copy)]
pub struct StepOptions {
    /// Fixed time step [s]
    pub dt: f64,
    /// Horizontal-to-vertical ratio of the climb/descent path
    pub path_slope: f64,
    /// Ground speed held during takeoff climb [m/s]
    pub takeoff_speed: f64,
    /// Ground speed held during landing descent [m/s]
    pub landing_speed: f64,
}

impl Default for StepOptions {
    fn default() -> Self {
        Self {
            dt: 1.0,
            path_slope: 3.0,
            takeoff_speed: 150.0,
            landing_speed: 150.0,
        }
    }
}

impl StepOptions {
    fn validate(&self) -> MissionResult<()> {
        if self.dt <= 0.0 {
            return Err(MissionError::InvalidArg {
                what: "dt must be positive",
            });
        }
        if self.path_slope <= 0.0 {
            return Err(MissionError::InvalidArg {
                what: "path_slope must be positive",
            });
        }
        if self.takeoff_speed <= 0.0 || self.landing_speed <= 0.0 {
            return Err(MissionError::InvalidArg {
                what: "segment speeds must be positive",
            });
        }
        Ok(())
    }
}

/// Outcome of a single integration step.
#[derive(Debug, Clone, Copy)]
pub struct StepOutcome {
    /// Fuel burned over the step [kg]
    pub fuel_burned: f64,
    /// Airframe drag [N]
    pub drag: f64,
    /// Thrust available from inlet mass flow [N]
    pub thrust_available: f64,
    /// Whether available thrust covered drag
    pub thrust_ok: bool,
}

/// Accumulating mission state across segments.
#[derive(Debug, Clone, Copy)]
pub struct Mission {
    /// Cruise altitude the climb and descent segments connect to [m]
    pub cruise_altitude: f64,
    /// Ground distance covered [m]
    pub distance: f64,
    /// Total flight time [s]
    pub time_flight: f64,
    /// Total fuel burned [kg]
    pub fuel_consumed: f64,
}

impl Mission {
    pub fn new(cruise_altitude: f64) -> Self {
        Self {
            cruise_altitude,
            distance: 0.0,
            time_flight: 0.0,
            fuel_consumed: 0.0,
        }
    }

    /// One quasi-steady flight step: run the engine at this flight condition,
    /// balance lift, and burn fuel against the drag the step must overcome.
    pub fn fly_step(
        &mut self,
        aircraft: &mut Aircraft,
        engine: &mut TurbofanAnalysis,
        atmosphere: &IsaAtmosphere,
        speed: f64,
        altitude: f64,
        dt: f64,
        mode: FlightMode,
    ) -> MissionResult<StepOutcome> {
        let state = atmosphere.sample(altitude)?;
        let ambient = Ambient::new(
            state.temperature,
            state.pressure,
            state.speed_of_sound,
            state.density,
        );
        engine.perform_analysis(speed, &ambient)?;

        let tsfc = scalar_result(&engine.fuel_consumption()?.tsfc)?;
        let specific_thrust = scalar_result(&engine.specific_thrust()?.total)?;

        let dynamic_pressure = 0.5 * state.density * speed * speed;
        let c_l = aircraft.lift_required(mode) / (dynamic_pressure * aircraft.wing_area.value);
        ensure_finite(c_l, "lift coefficient")?;
        let c_d = aircraft.drag_coefficient(c_l);
        let drag = c_d * dynamic_pressure * aircraft.wing_area.value;

        // Breguet fuel burn over the step at the current weight.
        let mass = aircraft.total_mass().value;
        let burn_exponent = G0_MPS2 * tsfc * (c_d / c_l) * dt;
        let fuel_burned = mass * (1.0 - (-burn_exponent).exp());
        ensure_finite(fuel_burned, "fuel burned")?;

        let remaining = aircraft.mass_fuel.value;
        if fuel_burned > remaining {
            return Err(MissionError::FuelExhausted {
                needed: fuel_burned,
                remaining,
            });
        }
        aircraft.mass_fuel -= kg(fuel_burned);

        // Thrust available from the captured stream tube.
        let inlet_mass_flow = state.density * speed * aircraft.inlet_area.value;
        let thrust_available = specific_thrust * inlet_mass_flow;
        let thrust_ok = drag <= thrust_available;

        self.time_flight += dt;
        self.fuel_consumed += fuel_burned;

        debug!(
            altitude_m = altitude,
            speed_mps = speed,
            drag_n = drag,
            thrust_n = thrust_available,
            fuel_kg = fuel_burned,
            "mission step"
        );

        Ok(StepOutcome {
            fuel_burned,
            drag,
            thrust_available,
            thrust_ok,
        })
    }

    /// Climb from the surface to the cruise altitude along a fixed-slope
    /// path. Returns whether thrust covered drag on every step.
    pub fn takeoff(
        &mut self,
        aircraft: &mut Aircraft,
        engine: &mut TurbofanAnalysis,
        atmosphere: &IsaAtmosphere,
        opts: &StepOptions,
    ) -> MissionResult<bool> {
        opts.validate()?;
        let slope_length = (opts.path_slope * opts.path_slope + 1.0).sqrt();
        let climb_rate = opts.takeoff_speed / slope_length;
        let ground_rate = opts.takeoff_speed * opts.path_slope / slope_length;

        let mut all_ok = true;
        let mut altitude = 0.0;
        while altitude < self.cruise_altitude {
            let outcome = self.fly_step(
                aircraft,
                engine,
                atmosphere,
                opts.takeoff_speed,
                altitude,
                opts.dt,
                FlightMode::Takeoff,
            )?;
            all_ok &= outcome.thrust_ok;
            altitude += climb_rate * opts.dt;
            self.distance += ground_rate * opts.dt;
        }
        Ok(all_ok)
    }

    /// Level flight at the cruise altitude for a fixed duration [s].
    pub fn cruise(
        &mut self,
        aircraft: &mut Aircraft,
        engine: &mut TurbofanAnalysis,
        atmosphere: &IsaAtmosphere,
        speed: f64,
        duration: f64,
        opts: &StepOptions,
    ) -> MissionResult<bool> {
        opts.validate()?;
        if duration <= 0.0 {
            return Err(MissionError::InvalidArg {
                what: "duration must be positive",
            });
        }

        let mut all_ok = true;
        let mut elapsed = 0.0;
        while elapsed < duration {
            let dt = opts.dt.min(duration - elapsed);
            let outcome = self.fly_step(
                aircraft,
                engine,
                atmosphere,
                speed,
                self.cruise_altitude,
                dt,
                FlightMode::Cruise,
            )?;
            all_ok &= outcome.thrust_ok;
            elapsed += dt;
            self.distance += speed * dt;
        }
        Ok(all_ok)
    }

    /// Descend from the cruise altitude to the surface along a fixed-slope
    /// path. Returns whether thrust covered drag on every step.
    pub fn landing(
        &mut self,
        aircraft: &mut Aircraft,
        engine: &mut TurbofanAnalysis,
        atmosphere: &IsaAtmosphere,
        opts: &StepOptions,
    ) -> MissionResult<bool> {
        opts.validate()?;
        let slope_length = (opts.path_slope * opts.path_slope + 1.0).sqrt();
        let sink_rate = opts.landing_speed / slope_length;
        let ground_rate = opts.landing_speed * opts.path_slope / slope_length;

        let mut all_ok = true;
        let mut altitude = self.cruise_altitude;
        while altitude > 0.0 {
            let outcome = self.fly_step(
                aircraft,
                engine,
                atmosphere,
                opts.landing_speed,
                altitude,
                opts.dt,
                FlightMode::Landing,
            )?;
            all_ok &= outcome.thrust_ok;
            altitude -= sink_rate * opts.dt;
            self.distance += ground_rate * opts.dt;
        }
        Ok(all_ok)
    }
}

fn scalar_result(field: &tc_core::Field) -> MissionResult<f64> {
    field.as_scalar().ok_or(MissionError::InvalidArg {
        what: "mission steps use scalar flight conditions",
    })
}
