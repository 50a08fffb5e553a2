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
use crate::{dimensions::MassRate, ratio::Ratio, unit::Unit};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KilogramsPerHour;

impl Unit for KilogramsPerHour {
    type Dim = MassRate;

    const RATIO: Ratio = Ratio::rational(1, 3600);
    const UNIT_NAME: &'static str = "kilograms per hour";
    const UNIT_SYMBOL: &'static str = "kg/h";
}

#[macro_export]
macro_rules! kilograms_per_hour {
    ($value:expr) => {
        $crate::Quantity::<$crate::KilogramsPerHour, _>::from(&$value)
    };
}

#[cfg(test)]
mod test {
    use crate::{hours, kilograms, kilograms_per_hour, KilogramsPerHour, Quantity};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mass_over_time() {
        let rate = (kilograms!(7.2) / hours!(2.0)).cast::<KilogramsPerHour, f64>();
        assert_abs_diff_eq!(rate.value(), 3.6);
        let rate: Quantity<KilogramsPerHour, f64> = kilograms_per_hour!(3.6);
        assert_abs_diff_eq!(rate.value(), 3.6);
    }
}
