//! The cycle-solver pipeline.
//!
//! A fixed sequence of element-wise stages consuming a resolved configuration
//! plus one flight condition and producing the full [`CycleState`]. Every
//! stage is a pure function of its inputs; branch-sensitive stages (inlet
//! recovery, nozzle choking) classify each array element independently via
//! `Field::select`.

use tc_core::{Field, TcResult};
use tc_gas::{
    GasProperties, ram_recovery, sonic_speed, stagnation_pressure_ratio,
    stagnation_temperature_ratio,
};

use crate::error::CycleResult;
use crate::flight::Ambient;
use crate::state::{CycleState, NozzleExit};

/// Complete configuration snapshot with every required attribute present.
pub(crate) struct ResolvedConfig {
    pub(crate) working: GasProperties,
    pub(crate) combustion: GasProperties,
    pub(crate) h_pr: f64,
    pub(crate) t_t4: Field,
    pub(crate) e_t: f64,
    pub(crate) eta_m: f64,
    pub(crate) pi_c: f64,
    pub(crate) e_c: f64,
    pub(crate) pi_f: f64,
    pub(crate) e_f: f64,
    pub(crate) pi_dmax: f64,
    pub(crate) pi_fn: f64,
    pub(crate) pi_n: f64,
    pub(crate) pi_b: f64,
    pub(crate) eta_b: f64,
    pub(crate) alpha: f64,
    pub(crate) p0_by_p9: Option<f64>,
    pub(crate) p0_by_p19: Option<f64>,
}

/// Exit Mach number from a total-to-static pressure ratio.
fn exit_mach(gamma: f64, total_to_static: f64) -> f64 {
    ((2.0 / (gamma - 1.0)) * (total_to_static.powf((gamma - 1.0) / gamma) - 1.0)).sqrt()
}

/// Exit Mach number and static pressure for one nozzle.
///
/// With a fixed ambient-to-exit pressure ratio the exit is pinned by it
/// (under-expanded exhaust, static pressure above ambient). Otherwise the
/// sonic-exit pressure from the full pressure-ratio chain decides each
/// element: below ambient clamps Mach to 1 with ambient exit pressure, at or
/// above ambient the flow expands isentropically all the way to ambient.
fn nozzle_exit(
    gamma: f64,
    product: &Field,
    ambient_pressure: &Field,
    fixed_ratio: Option<f64>,
) -> TcResult<(Field, Field)> {
    if let Some(p0_by_pe) = fixed_ratio {
        let mach = product.map(|pr| exit_mach(gamma, pr * p0_by_pe));
        let pressure = ambient_pressure / p0_by_pe;
        return Ok((mach, pressure));
    }

    let sonic_exit = (ambient_pressure * product) / stagnation_pressure_ratio(gamma, 1.0);
    let clamped = sonic_exit.lt(ambient_pressure)?;
    let expanded_mach = product.map(|pr| exit_mach(gamma, pr));
    let mach = Field::select(&clamped, &Field::scalar(1.0), &expanded_mach)?;
    Ok((mach, ambient_pressure.clone()))
}

/// Run the full pipeline. Inputs must already be shape-validated.
pub(crate) fn run(
    cfg: &ResolvedConfig,
    speed: &Field,
    ambient: &Ambient,
) -> CycleResult<CycleState> {
    let gc = cfg.working.gamma;
    let cpc = cfg.working.cp;
    let rc = cfg.working.r;
    let gt = cfg.combustion.gamma;
    let cpt = cfg.combustion.cp;
    let rt = cfg.combustion.r;

    // Stage 1: flight Mach number.
    let mach = speed / &ambient.speed_of_sound;

    // Stage 2: reference stagnation ratios and inlet recovery.
    let tau_r = mach.map(|m| stagnation_temperature_ratio(gc, m));
    let pi_r = mach.map(|m| stagnation_pressure_ratio(gc, m));
    let pi_d = mach.map(|m| cfg.pi_dmax * ram_recovery(m));

    // Stage 3: burner enthalpy ratio.
    let tau_lambda = cfg.t_t4.map(|t| cpt * t) / ambient.temperature.map(|t| cpc * t);

    // Stage 4: compressor and fan total-temperature ratios.
    let tau_c = cfg.pi_c.powf((gc - 1.0) / (gc * cfg.e_c));
    let tau_f = cfg.pi_f.powf((gc - 1.0) / (gc * cfg.e_f));

    // Stage 5: fuel-air ratio. The denominator is deliberately unguarded; a
    // configuration that drives it to zero produces non-finite results.
    let ram_compression = &tau_r * tau_c;
    let heat_release = ambient
        .temperature
        .map(|t| cfg.eta_b * cfg.h_pr / (cpc * t));
    let fuel_air_ratio = (&tau_lambda - &ram_compression) / (&heat_release - &tau_lambda);

    // Stage 6: turbine energy balance across the single spool.
    let spool_demand = tau_c - 1.0 + cfg.alpha * (tau_f - 1.0);
    let inv_supply = fuel_air_ratio.map(|f| 1.0 / (cfg.eta_m * (1.0 + f)));
    let tau_t = 1.0 - inv_supply * (&tau_r / &tau_lambda) * spool_demand;
    let pi_t = tau_t.powf(gt / ((gt - 1.0) * cfg.e_t));

    // Stage 7: core nozzle exit.
    let core_product = (&pi_r * &pi_d) * &pi_t * (cfg.pi_c * cfg.pi_b * cfg.pi_n);
    let (m9, p9) = nozzle_exit(gt, &core_product, &ambient.pressure, cfg.p0_by_p9)?;
    let stag9 = m9.map(|m| stagnation_temperature_ratio(gt, m));
    let t9 = (&ambient.temperature * &(&tau_lambda * &tau_t)) * (cpc / cpt) / &stag9;
    let v9 = &m9 * &t9.map(|t| sonic_speed(gt, rt, t));

    // Stage 8: fan nozzle exit, same logic with air properties.
    let fan_product = (&pi_r * &pi_d) * (cfg.pi_f * cfg.pi_fn);
    let (m19, p19) = nozzle_exit(gc, &fan_product, &ambient.pressure, cfg.p0_by_p19)?;
    let stag19 = m19.map(|m| stagnation_temperature_ratio(gc, m));
    let t19 = (&ambient.temperature * &(&tau_r * tau_f)) / &stag19;
    let v19 = (&m19 * &ambient.speed_of_sound) * (&t19 / &ambient.temperature).sqrt();

    // Stage 9: specific thrust, momentum plus pressure-thrust per stream.
    let total_flow = 1.0 + cfg.alpha;
    let mass_augment = 1.0 + &fuel_air_ratio;
    let core_momentum = &mass_augment * &v9 - speed;
    let core_pressure_term =
        &mass_augment * (rt * &t9) * &(1.0 - &ambient.pressure / &p9) / &v9;
    let st_core = (core_momentum + core_pressure_term) / total_flow;

    let fan_momentum = &v19 - speed;
    let fan_pressure_term = (rc * &t19) * &(1.0 - &ambient.pressure / &p19) / &v19;
    let st_fan = (fan_momentum + fan_pressure_term) * (cfg.alpha / total_flow);
    let st = &st_core + &st_fan;

    // Stage 10: energetics and performance, per unit total mass flow.
    let delta_ke = (&mass_augment * &(&v9 * &v9) + cfg.alpha * &(&v19 * &v19)
        - total_flow * &(speed * speed))
        * (0.5 / total_flow);
    let tsfc = &fuel_air_ratio / &(total_flow * &st);
    let thrust_power = &st * speed;
    let eta_propulsive = &thrust_power / &delta_ke;
    let heat_input = fuel_air_ratio.map(|f| f * cfg.h_pr / total_flow);
    let eta_thermal = &delta_ke / &heat_input;

    Ok(CycleState {
        mach,
        tau_r,
        pi_r,
        pi_d,
        tau_lambda,
        tau_c: Field::scalar(tau_c),
        tau_f: Field::scalar(tau_f),
        fuel_air_ratio,
        tau_t,
        pi_t,
        core_exit: NozzleExit {
            mach: m9,
            pressure: p9,
            temperature: t9,
            velocity: v9,
        },
        fan_exit: NozzleExit {
            mach: m19,
            pressure: p19,
            temperature: t19,
            velocity: v19,
        },
        st_core,
        st_fan,
        st,
        tsfc,
        delta_ke,
        eta_thermal,
        eta_propulsive,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_mach_is_unity_at_critical_ratio() {
        let gamma = 1.4;
        let critical = stagnation_pressure_ratio(gamma, 1.0);
        assert!((exit_mach(gamma, critical) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn exit_mach_supersonic_above_critical_ratio() {
        let gamma = 1.33;
        let critical = stagnation_pressure_ratio(gamma, 1.0);
        assert!(exit_mach(gamma, 2.0 * critical) > 1.0);
    }

    #[test]
    fn nozzle_clamps_low_pressure_ratio_elements() {
        let gamma = 1.4;
        let critical = stagnation_pressure_ratio(gamma, 1.0);
        let product = Field::array(vec![0.5 * critical, 2.0 * critical]);
        let p0 = Field::scalar(101_325.0);

        let (mach, pressure) = nozzle_exit(gamma, &product, &p0, None).unwrap();
        assert_eq!(mach.at(0), 1.0);
        assert!(mach.at(1) > 1.0);
        assert_eq!(pressure.at(0), 101_325.0);
        assert_eq!(pressure.at(1), 101_325.0);
    }

    #[test]
    fn fixed_ratio_pins_exit_above_ambient() {
        let gamma = 1.33;
        let product = Field::scalar(3.4);
        let p0 = Field::scalar(19_330.4);

        let (mach, pressure) = nozzle_exit(gamma, &product, &p0, Some(0.9)).unwrap();
        assert!(mach.as_scalar().unwrap() > 1.0);
        assert!(pressure.as_scalar().unwrap() > p0.as_scalar().unwrap());
    }
}
