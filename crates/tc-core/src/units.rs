// tc-core/src/units.rs

use uom::si::f64::{Area as UomArea, Mass as UomMass};

// Public canonical unit types (SI, f64). The cycle pipeline itself works in
// raw SI f64; typed quantities appear at the airframe boundary.
pub type Area = UomArea;
pub type Mass = UomMass;

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

pub mod constants {
    pub const G0_MPS2: f64 = 9.806_65;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_store_si_base_values() {
        assert_eq!(kg(41_145.0).value, 41_145.0);
        assert_eq!(m2(102.0).value, 102.0);
    }
}
