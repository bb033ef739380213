//! Compressible-flow relations shared by the cycle stages.
//!
//! All functions here are stateless and element-wise safe: they take and
//! return plain `f64` values, and callers working over flight envelopes lift
//! them through `Field::map`.

/// Specific gas constant [J/(kg K)] from gamma and c_p.
pub fn gas_constant(gamma: f64, cp: f64) -> f64 {
    (gamma - 1.0) * cp / gamma
}

/// Specific heat at constant pressure [J/(kg K)] from gamma and R.
pub fn heat_capacity(gamma: f64, r: f64) -> f64 {
    gamma * r / (gamma - 1.0)
}

/// Local speed of sound [m/s].
pub fn sonic_speed(gamma: f64, r: f64, t: f64) -> f64 {
    (gamma * r * t).sqrt()
}

/// Total-to-static temperature ratio at Mach number `m`.
pub fn stagnation_temperature_ratio(gamma: f64, m: f64) -> f64 {
    1.0 + 0.5 * (gamma - 1.0) * m * m
}

/// Total-to-static pressure ratio at Mach number `m`.
pub fn stagnation_pressure_ratio(gamma: f64, m: f64) -> f64 {
    stagnation_temperature_ratio(gamma, m).powf(gamma / (gamma - 1.0))
}

/// Inlet total-pressure recovery as a function of flight Mach number.
///
/// Unity through Mach 1, the MIL-E-5008B shock-loss correlation
/// `1 - 0.075 (M - 1)^1.35` up to Mach 5, and `800 / (M^4 + 935)` beyond.
pub fn ram_recovery(m: f64) -> f64 {
    if m <= 1.0 {
        1.0
    } else if m <= 5.0 {
        1.0 - 0.075 * (m - 1.0).powf(1.35)
    } else {
        800.0 / (m.powi(4) + 935.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::{Field, Tolerances, nearly_equal};

    #[test]
    fn stagnation_ratios_at_rest_are_unity() {
        assert_eq!(stagnation_temperature_ratio(1.4, 0.0), 1.0);
        assert_eq!(stagnation_pressure_ratio(1.4, 0.0), 1.0);
    }

    #[test]
    fn stagnation_ratio_subsonic_spot_value() {
        // M = 0.8, gamma = 1.4: tau = 1.128, pi = tau^3.5
        let tau = stagnation_temperature_ratio(1.4, 0.8);
        assert!(nearly_equal(tau, 1.128, Tolerances::default()));
        let pi = stagnation_pressure_ratio(1.4, 0.8);
        assert!(nearly_equal(pi, 1.128_f64.powf(3.5), Tolerances::default()));
    }

    #[test]
    fn ram_recovery_is_unity_through_mach_one() {
        assert_eq!(ram_recovery(0.0), 1.0);
        assert_eq!(ram_recovery(0.5), 1.0);
        assert_eq!(ram_recovery(1.0), 1.0);
    }

    #[test]
    fn ram_recovery_continuous_at_branch_points() {
        let below = ram_recovery(1.0 - 1e-9);
        let above = ram_recovery(1.0 + 1e-9);
        assert!((below - above).abs() < 1e-6);

        // The correlation pieces meet near M = 5 within correlation accuracy.
        let below = ram_recovery(5.0);
        let above = ram_recovery(5.0 + 1e-9);
        assert!((below - above).abs() < 1e-3);
    }

    #[test]
    fn ram_recovery_decreases_supersonic() {
        assert!(ram_recovery(2.0) < 1.0);
        assert!(ram_recovery(6.0) < ram_recovery(4.0));
    }

    #[test]
    fn ram_recovery_lifts_over_fields_per_element() {
        let mach = Field::array(vec![0.8, 2.0, 6.0]);
        let eta = mach.map(ram_recovery);
        assert_eq!(eta.at(0), 1.0);
        assert_eq!(eta.at(1), ram_recovery(2.0));
        assert_eq!(eta.at(2), ram_recovery(6.0));
    }

    #[test]
    fn gas_constant_heat_capacity_inverse() {
        let r = gas_constant(1.33, 1155.5568);
        assert!(nearly_equal(
            heat_capacity(1.33, r),
            1155.5568,
            Tolerances::default()
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn stagnation_ratios_monotone_in_mach(m in 0.0_f64..8.0) {
                let gamma = 1.4;
                prop_assert!(stagnation_temperature_ratio(gamma, m + 0.1)
                    > stagnation_temperature_ratio(gamma, m));
                prop_assert!(stagnation_pressure_ratio(gamma, m + 0.1)
                    > stagnation_pressure_ratio(gamma, m));
            }

            #[test]
            fn ram_recovery_bounded(m in 0.0_f64..20.0) {
                let eta = ram_recovery(m);
                prop_assert!(eta > 0.0 && eta <= 1.0);
            }
        }
    }
}
