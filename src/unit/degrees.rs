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
use crate::{dimensions::Angle, ratio::Ratio, unit::Unit};

/// One degree is π/180 radians; the π factor is carried symbolically so the
/// degree↔radian round trip cancels exactly.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Degrees;

impl Unit for Degrees {
    type Dim = Angle;

    const RATIO: Ratio = Ratio::rational(1, 180).mul(Ratio::pi_power(1));
    const UNIT_NAME: &'static str = "degrees";
    const UNIT_SYMBOL: &'static str = "°";
}

#[macro_export]
macro_rules! degrees {
    ($value:expr) => {
        $crate::Quantity::<$crate::Degrees, _>::from(&$value)
    };
}

#[cfg(test)]
mod test {
    use crate::{degrees, radians, Degrees, Quantity, Radians};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_degrees_to_radians() {
        let r: Quantity<Radians, f64> = radians!(degrees!(180.0));
        assert_abs_diff_eq!(r.value(), PI, epsilon = 1e-12);
        let d: Quantity<Degrees, f64> = degrees!(radians!(PI / 2.0));
        assert_abs_diff_eq!(d.value(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_cancels_pi() {
        let d = degrees!(33.0);
        let back: Quantity<Degrees, f64> = degrees!(radians!(d));
        assert_abs_diff_eq!(back.value(), 33.0, epsilon = 1e-12);
    }
}
