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
use crate::{dimensions::Speed, ratio::Ratio, unit::Unit};

/// 1000 m over 3600 s, kept as the exact fraction 5/18.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KilometersPerHour;

impl Unit for KilometersPerHour {
    type Dim = Speed;

    const RATIO: Ratio = Ratio::rational(1000, 3600);
    const UNIT_NAME: &'static str = "kilometers per hour";
    const UNIT_SYMBOL: &'static str = "km/h";
}

#[macro_export]
macro_rules! kilometers_per_hour {
    ($value:expr) => {
        $crate::Quantity::<$crate::KilometersPerHour, _>::from(&$value)
    };
}

#[cfg(test)]
mod test {
    use crate::{kilometers_per_hour, meters_per_second, MetersPerSecond, Quantity};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_kmh_to_mps() {
        let v: Quantity<MetersPerSecond, f64> = meters_per_second!(kilometers_per_hour!(36.0));
        assert_abs_diff_eq!(v.value(), 10.0);
    }
}
