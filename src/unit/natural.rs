// This file is part of Exact Unit.
//
// Exact Unit is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Exact Unit is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Exact Unit.  If not, see <http://www.gnu.org/licenses/>.

//! Particle-physics natural units: momentum in GeV/c and mass in GeV/c².
//! These stay ordinary momentum and mass units with exact SI ratios, so
//! mixed natural/SI expressions need no special handling anywhere else.
use crate::{
    dimensions::{Mass, Momentum},
    quantity::Quantity,
    ratio::Ratio,
    unit::{meters_per_second::MetersPerSecond, Unit},
};

pub const LIGHT_SPEED_M_PER_S: i128 = 299_792_458;

const GEV_IN_JOULES: Ratio = Ratio::int(1_602_176_634).mul(Ratio::pow10(-19));

pub fn speed_of_light() -> Quantity<MetersPerSecond, f64> {
    Quantity::new(LIGHT_SPEED_M_PER_S as f64)
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GigaElectronVoltsPerLightSpeed;

impl Unit for GigaElectronVoltsPerLightSpeed {
    type Dim = Momentum;

    const RATIO: Ratio = GEV_IN_JOULES.div(Ratio::int(LIGHT_SPEED_M_PER_S));
    const UNIT_NAME: &'static str = "gigaelectronvolts per light speed";
    const UNIT_SYMBOL: &'static str = "GeV/c";
}

#[macro_export]
macro_rules! gigaelectronvolts_per_light_speed {
    ($value:expr) => {
        $crate::Quantity::<$crate::GigaElectronVoltsPerLightSpeed, _>::from(&$value)
    };
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GigaElectronVoltsPerLightSpeedSquared;

impl Unit for GigaElectronVoltsPerLightSpeedSquared {
    type Dim = Mass;

    const RATIO: Ratio = GEV_IN_JOULES
        .div(Ratio::int(LIGHT_SPEED_M_PER_S))
        .div(Ratio::int(LIGHT_SPEED_M_PER_S));
    const UNIT_NAME: &'static str = "gigaelectronvolts per light speed squared";
    const UNIT_SYMBOL: &'static str = "GeV/c²";
}

#[macro_export]
macro_rules! gigaelectronvolts_per_light_speed_squared {
    ($value:expr) => {
        $crate::Quantity::<$crate::GigaElectronVoltsPerLightSpeedSquared, _>::from(&$value)
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        gigaelectronvolts_per_light_speed, gigaelectronvolts_per_light_speed_squared,
        kilogram_meters_per_second, kilograms, GigaElectronVolts, KilogramMetersPerSecond,
        Kilograms, UnitPow,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_natural_momentum_in_si() {
        let p = gigaelectronvolts_per_light_speed!(1.0)
            .cast::<KilogramMetersPerSecond, f64>();
        assert_abs_diff_eq!(p.value(), 1.602_176_634e-10 / 299_792_458.0, epsilon = 1e-30);
        let p = kilogram_meters_per_second!(1.0)
            .cast::<GigaElectronVoltsPerLightSpeed, f64>();
        assert_abs_diff_eq!(p.value(), 299_792_458.0 / 1.602_176_634e-10, epsilon = 1e6);
    }

    #[test]
    fn test_natural_mass_in_si() {
        let c = 299_792_458.0f64;
        let m = gigaelectronvolts_per_light_speed_squared!(1.0).cast::<Kilograms, f64>();
        assert_abs_diff_eq!(m.value(), 1.602_176_634e-10 / (c * c), epsilon = 1e-40);
    }

    #[test]
    fn test_total_energy_from_natural_units() {
        // E² = (pc)² + (mc²)² with a 3-4-5 triangle in GeV.
        let p = gigaelectronvolts_per_light_speed!(4.0);
        let m = gigaelectronvolts_per_light_speed_squared!(3.0);
        let c = speed_of_light();
        let pc2 = (p * c).pow::<2>().cast::<UnitPow<GigaElectronVolts, 2>, f64>();
        let mc2 = (m * c * c).pow::<2>().cast::<UnitPow<GigaElectronVolts, 2>, f64>();
        let total = (pc2 + mc2).sqrt().cast::<GigaElectronVolts, f64>();
        assert_abs_diff_eq!(total.value(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_total_energy_from_si_units() {
        // The same triangle stated in SI units lands on the same answer.
        let c = 299_792_458.0f64;
        let gev = 1.602_176_634e-10f64;
        let p = kilogram_meters_per_second!(4.0 * gev / c);
        let m = kilograms!(3.0 * gev / (c * c));
        let light = speed_of_light();
        let pc2 = (p * light).pow::<2>().cast::<UnitPow<GigaElectronVolts, 2>, f64>();
        let mc2 = (m * light * light)
            .pow::<2>()
            .cast::<UnitPow<GigaElectronVolts, 2>, f64>();
        let total = (pc2 + mc2).sqrt().cast::<GigaElectronVolts, f64>();
        assert_abs_diff_eq!(total.value(), 5.0, epsilon = 1e-6);
    }
}
