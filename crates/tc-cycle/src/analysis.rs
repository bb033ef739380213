//! Engine configuration, lifecycle, and result accessors.

use tc_core::Field;
use tc_gas::GasProperties;
use tracing::debug;

use crate::error::{CycleError, CycleResult};
use crate::flight::Ambient;
use crate::solver::{self, ResolvedConfig};
use crate::state::{
    CycleState, Efficiencies, FuelConsumption, NozzleExit, OperatingRatio, SpecificThrust,
};

fn require_positive(name: &'static str, value: f64) -> CycleResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CycleError::InvalidParameter {
            name,
            value,
            constraint: "positive",
        })
    }
}

fn require_unit_interval(name: &'static str, value: f64) -> CycleResult<f64> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(CycleError::InvalidParameter {
            name,
            value,
            constraint: "in the interval (0, 1]",
        })
    }
}

fn require_at_least_one(name: &'static str, value: f64) -> CycleResult<f64> {
    if value >= 1.0 {
        Ok(value)
    } else {
        Err(CycleError::InvalidParameter {
            name,
            value,
            constraint: "at least 1",
        })
    }
}

fn require_non_negative(name: &'static str, value: f64) -> CycleResult<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(CycleError::InvalidParameter {
            name,
            value,
            constraint: "non-negative",
        })
    }
}

fn require_positive_field(name: &'static str, field: Field) -> CycleResult<Field> {
    if field.all(|v| v > 0.0) {
        return Ok(field);
    }
    let value = field
        .to_vec()
        .into_iter()
        .find(|v| !(*v > 0.0))
        .unwrap_or(f64::NAN);
    Err(CycleError::InvalidParameter {
        name,
        value,
        constraint: "positive",
    })
}

/// Steady-state cycle analysis of a two-stream turbofan engine.
///
/// Lifecycle: configure through the setters, then [`initialize_problem`],
/// then [`perform_analysis`] per flight condition, then read results through
/// the typed getters. Any setter call invalidates previous results until the
/// next analysis.
///
/// A single logical owner is expected to mutate and read the engine; the
/// type holds no interior locking.
///
/// [`initialize_problem`]: TurbofanAnalysis::initialize_problem
/// [`perform_analysis`]: TurbofanAnalysis::perform_analysis
#[derive(Debug, Clone)]
pub struct TurbofanAnalysis {
    working: GasProperties,

    // Required attributes, in completeness-check order.
    h_pr: Option<f64>,
    gamma_t: Option<f64>,
    c_pt: Option<f64>,
    t_t4: Option<Field>,
    e_t: Option<f64>,
    eta_m: Option<f64>,
    pi_c: Option<f64>,
    e_c: Option<f64>,
    pi_f: Option<f64>,
    e_f: Option<f64>,
    pi_dmax: Option<f64>,
    pi_fn: Option<f64>,
    pi_n: Option<f64>,
    pi_b: Option<f64>,
    eta_b: Option<f64>,
    alpha: Option<f64>,

    // Optional fixed exit pressure ratios.
    p0_by_p9: Option<f64>,
    p0_by_p19: Option<f64>,

    initialized: bool,
    analysis_complete: bool,
    state: Option<CycleState>,
}

impl TurbofanAnalysis {
    /// New engine with standard air as the working fluid.
    pub fn new() -> Self {
        Self::with_working_fluid(GasProperties::AIR)
    }

    /// New engine with an explicit working-fluid parameter bundle.
    pub fn with_working_fluid(working: GasProperties) -> Self {
        Self {
            working,
            h_pr: None,
            gamma_t: None,
            c_pt: None,
            t_t4: None,
            e_t: None,
            eta_m: None,
            pi_c: None,
            e_c: None,
            pi_f: None,
            e_f: None,
            pi_dmax: None,
            pi_fn: None,
            pi_n: None,
            pi_b: None,
            eta_b: None,
            alpha: None,
            p0_by_p9: None,
            p0_by_p19: None,
            initialized: false,
            analysis_complete: false,
            state: None,
        }
    }

    fn touch(&mut self) {
        self.analysis_complete = false;
        self.state = None;
    }

    /// Fuel heating value [J/kg] and combustion-product gas parameters.
    pub fn set_fuel_properties(&mut self, h_pr: f64, gamma_t: f64, c_pt: f64) -> CycleResult<()> {
        let h_pr = require_positive("h_PR", h_pr)?;
        let gamma_t = require_positive("gamma_t", gamma_t)?;
        let c_pt = require_positive("c_pt", c_pt)?;
        self.h_pr = Some(h_pr);
        self.gamma_t = Some(gamma_t);
        self.c_pt = Some(c_pt);
        self.touch();
        Ok(())
    }

    /// Turbine inlet total temperature [K] (scalar or array) and efficiencies.
    pub fn set_turbine_properties(
        &mut self,
        inlet_total_temperature: impl Into<Field>,
        polytropic_efficiency: f64,
        mechanical_efficiency: f64,
    ) -> CycleResult<()> {
        let t_t4 = require_positive_field("T_t4", inlet_total_temperature.into())?;
        let e_t = require_unit_interval("e_t", polytropic_efficiency)?;
        let eta_m = require_unit_interval("eta_m", mechanical_efficiency)?;
        self.t_t4 = Some(t_t4);
        self.e_t = Some(e_t);
        self.eta_m = Some(eta_m);
        self.touch();
        Ok(())
    }

    pub fn set_compressor_properties(
        &mut self,
        compression_ratio: f64,
        polytropic_efficiency: f64,
    ) -> CycleResult<()> {
        let pi_c = require_at_least_one("pi_c", compression_ratio)?;
        let e_c = require_unit_interval("e_c", polytropic_efficiency)?;
        self.pi_c = Some(pi_c);
        self.e_c = Some(e_c);
        self.touch();
        Ok(())
    }

    pub fn set_fan_properties(
        &mut self,
        compression_ratio: f64,
        polytropic_efficiency: f64,
    ) -> CycleResult<()> {
        let pi_f = require_at_least_one("pi_f", compression_ratio)?;
        let e_f = require_unit_interval("e_f", polytropic_efficiency)?;
        self.pi_f = Some(pi_f);
        self.e_f = Some(e_f);
        self.touch();
        Ok(())
    }

    /// Diffuser, fan-nozzle, and core-nozzle total-pressure ratios.
    pub fn set_inlet_outlet_properties(
        &mut self,
        diffuser_max_pressure_ratio: f64,
        fan_nozzle_pressure_ratio: f64,
        core_nozzle_pressure_ratio: f64,
    ) -> CycleResult<()> {
        let pi_dmax = require_unit_interval("pi_dmax", diffuser_max_pressure_ratio)?;
        let pi_fn = require_unit_interval("pi_fn", fan_nozzle_pressure_ratio)?;
        let pi_n = require_unit_interval("pi_n", core_nozzle_pressure_ratio)?;
        self.pi_dmax = Some(pi_dmax);
        self.pi_fn = Some(pi_fn);
        self.pi_n = Some(pi_n);
        self.touch();
        Ok(())
    }

    pub fn set_burner_properties(
        &mut self,
        total_pressure_ratio: f64,
        efficiency: f64,
    ) -> CycleResult<()> {
        let pi_b = require_unit_interval("pi_b", total_pressure_ratio)?;
        let eta_b = require_unit_interval("eta_b", efficiency)?;
        self.pi_b = Some(pi_b);
        self.eta_b = Some(eta_b);
        self.touch();
        Ok(())
    }

    /// Fan-to-core mass flow ratio.
    pub fn set_bypass_ratio(&mut self, alpha: f64) -> CycleResult<()> {
        let alpha = require_non_negative("alpha", alpha)?;
        self.alpha = Some(alpha);
        self.touch();
        Ok(())
    }

    /// Fix both exit static-to-total pressure ratios, overriding the default
    /// choked/unchoked exit logic.
    pub fn set_exit_pressure_ratios(&mut self, p0_by_p9: f64, p0_by_p19: f64) -> CycleResult<()> {
        let p0_by_p9 = require_positive("P0_by_P9", p0_by_p9)?;
        let p0_by_p19 = require_positive("P0_by_P19", p0_by_p19)?;
        self.p0_by_p9 = Some(p0_by_p9);
        self.p0_by_p19 = Some(p0_by_p19);
        self.touch();
        Ok(())
    }

    /// Restore the default choked/unchoked exit logic.
    pub fn clear_exit_pressure_ratios(&mut self) {
        self.p0_by_p9 = None;
        self.p0_by_p19 = None;
        self.touch();
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_analysis_complete(&self) -> bool {
        self.analysis_complete
    }

    fn resolve(&self) -> CycleResult<ResolvedConfig> {
        fn req<T: Clone>(slot: &Option<T>, name: &'static str) -> CycleResult<T> {
            slot.clone()
                .ok_or(CycleError::MissingConfiguration { name })
        }

        let h_pr = req(&self.h_pr, "h_PR")?;
        let gamma_t = req(&self.gamma_t, "gamma_t")?;
        let c_pt = req(&self.c_pt, "c_pt")?;
        let t_t4 = req(&self.t_t4, "T_t4")?;
        let e_t = req(&self.e_t, "e_t")?;
        let eta_m = req(&self.eta_m, "eta_m")?;
        let pi_c = req(&self.pi_c, "pi_c")?;
        let e_c = req(&self.e_c, "e_c")?;
        let pi_f = req(&self.pi_f, "pi_f")?;
        let e_f = req(&self.e_f, "e_f")?;
        let pi_dmax = req(&self.pi_dmax, "pi_dmax")?;
        let pi_fn = req(&self.pi_fn, "pi_fn")?;
        let pi_n = req(&self.pi_n, "pi_n")?;
        let pi_b = req(&self.pi_b, "pi_b")?;
        let eta_b = req(&self.eta_b, "eta_b")?;
        let alpha = req(&self.alpha, "alpha")?;

        Ok(ResolvedConfig {
            working: self.working,
            combustion: GasProperties::from_gamma_cp(gamma_t, c_pt),
            h_pr,
            t_t4,
            e_t,
            eta_m,
            pi_c,
            e_c,
            pi_f,
            e_f,
            pi_dmax,
            pi_fn,
            pi_n,
            pi_b,
            eta_b,
            alpha,
            p0_by_p9: self.p0_by_p9,
            p0_by_p19: self.p0_by_p19,
        })
    }

    /// Verify that every required attribute has been set.
    ///
    /// Attributes are checked in declaration order and the first missing one
    /// is reported. Performs no numeric computation; the only side effect is
    /// the `initialized` flag.
    ///
    /// # Errors
    ///
    /// [`CycleError::MissingConfiguration`] naming the first unset attribute.
    pub fn initialize_problem(&mut self) -> CycleResult<()> {
        self.resolve()?;
        self.initialized = true;
        Ok(())
    }

    /// Run the cycle pipeline for one flight condition.
    ///
    /// `flight_speed` [m/s] must be strictly positive element-wise, and all
    /// array-valued inputs (speed, ambient members, `T_t4`) must share one
    /// length. On success every result getter reflects this run; on failure
    /// previous results and flags are left untouched.
    ///
    /// # Errors
    ///
    /// [`CycleError::NotInitialized`] before a successful
    /// [`initialize_problem`](TurbofanAnalysis::initialize_problem),
    /// [`CycleError::InvalidFlightCondition`] for a non-positive speed, and
    /// [`CycleError::ShapeMismatch`] for disagreeing array lengths.
    pub fn perform_analysis(
        &mut self,
        flight_speed: impl Into<Field>,
        ambient: &Ambient,
    ) -> CycleResult<()> {
        if !self.initialized {
            return Err(CycleError::NotInitialized);
        }
        let cfg = self.resolve()?;
        let speed = flight_speed.into();

        let mut shaped: Vec<&Field> = vec![&speed, &cfg.t_t4];
        shaped.extend(ambient.fields());
        let shape = Field::broadcast_shape(shaped, "flight condition inputs")?;

        if !speed.all(|v| v > 0.0) {
            let value = speed
                .to_vec()
                .into_iter()
                .find(|v| !(*v > 0.0))
                .unwrap_or(f64::NAN);
            return Err(CycleError::InvalidFlightCondition {
                what: "flight_speed",
                value,
            });
        }

        debug!(
            elements = shape.unwrap_or(1),
            "running turbofan cycle analysis"
        );

        let state = solver::run(&cfg, &speed, ambient)?;
        self.state = Some(state);
        self.analysis_complete = true;
        Ok(())
    }

    fn completed(&self, what: &'static str) -> CycleResult<&CycleState> {
        if !self.analysis_complete {
            return Err(CycleError::ResultNotAvailable { what });
        }
        self.state
            .as_ref()
            .ok_or(CycleError::ResultNotAvailable { what })
    }

    /// Specific thrust per unit total mass flow: total, core, and fan shares.
    pub fn specific_thrust(&self) -> CycleResult<SpecificThrust> {
        let s = self.completed("specific_thrust")?;
        Ok(SpecificThrust {
            total: s.st.clone(),
            core: s.st_core.clone(),
            fan: s.st_fan.clone(),
        })
    }

    /// TSFC and the fuel-air ratio normalized by total mass flow.
    pub fn fuel_consumption(&self) -> CycleResult<FuelConsumption> {
        let s = self.completed("fuel_consumption")?;
        let alpha = self
            .alpha
            .ok_or(CycleError::MissingConfiguration { name: "alpha" })?;
        Ok(FuelConsumption {
            tsfc: s.tsfc.clone(),
            fuel_air_ratio: s.fuel_air_ratio.map(|f| f / (1.0 + alpha)),
        })
    }

    /// Overall, propulsive, and thermal efficiencies.
    pub fn efficiencies(&self) -> CycleResult<Efficiencies> {
        let s = self.completed("efficiencies")?;
        Ok(Efficiencies {
            overall: &s.eta_thermal * &s.eta_propulsive,
            propulsive: s.eta_propulsive.clone(),
            thermal: s.eta_thermal.clone(),
        })
    }

    /// Reference (freestream stagnation) temperature and pressure ratios.
    pub fn reference_ratios(&self) -> CycleResult<OperatingRatio> {
        let s = self.completed("reference_ratios")?;
        Ok(OperatingRatio {
            tau: s.tau_r.clone(),
            pi: s.pi_r.clone(),
        })
    }

    pub fn compressor_ratios(&self) -> CycleResult<OperatingRatio> {
        let s = self.completed("compressor_ratios")?;
        let pi_c = self
            .pi_c
            .ok_or(CycleError::MissingConfiguration { name: "pi_c" })?;
        Ok(OperatingRatio {
            tau: s.tau_c.clone(),
            pi: Field::scalar(pi_c),
        })
    }

    pub fn fan_ratios(&self) -> CycleResult<OperatingRatio> {
        let s = self.completed("fan_ratios")?;
        let pi_f = self
            .pi_f
            .ok_or(CycleError::MissingConfiguration { name: "pi_f" })?;
        Ok(OperatingRatio {
            tau: s.tau_f.clone(),
            pi: Field::scalar(pi_f),
        })
    }

    pub fn turbine_ratios(&self) -> CycleResult<OperatingRatio> {
        let s = self.completed("turbine_ratios")?;
        Ok(OperatingRatio {
            tau: s.tau_t.clone(),
            pi: s.pi_t.clone(),
        })
    }

    /// Core nozzle exit Mach, static pressure, static temperature, velocity.
    pub fn core_exit_state(&self) -> CycleResult<NozzleExit> {
        Ok(self.completed("core_exit_state")?.core_exit.clone())
    }

    /// Fan nozzle exit Mach, static pressure, static temperature, velocity.
    pub fn fan_exit_state(&self) -> CycleResult<NozzleExit> {
        Ok(self.completed("fan_exit_state")?.fan_exit.clone())
    }

    /// Burner enthalpy ratio tau_lambda.
    pub fn burner_enthalpy_ratio(&self) -> CycleResult<Field> {
        Ok(self.completed("burner_enthalpy_ratio")?.tau_lambda.clone())
    }
}

impl Default for TurbofanAnalysis {
    fn default() -> Self {
        Self::new()
    }
}
