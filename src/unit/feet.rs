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
use crate::{dimensions::Length, ratio::Ratio, unit::Unit};

/// International foot, 0.3048 m exactly.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Feet;

impl Unit for Feet {
    type Dim = Length;

    const RATIO: Ratio = Ratio::rational(3048, 10_000);
    const UNIT_NAME: &'static str = "feet";
    const UNIT_SYMBOL: &'static str = "ft";
}

#[macro_export]
macro_rules! feet {
    ($value:expr) => {
        $crate::Quantity::<$crate::Feet, _>::from(&$value)
    };
}

#[cfg(test)]
mod test {
    use crate::{meters, Feet, Meters, Quantity};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_feet_to_meters() {
        let d: Quantity<Meters, f64> = meters!(feet!(1.0));
        assert_abs_diff_eq!(d.value(), 0.3048);
        let d: Quantity<Feet, f64> = feet!(meters!(0.3048));
        assert_abs_diff_eq!(d.value(), 1.0, epsilon = 1e-12);
    }
}
