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
use crate::{dimensions::Energy, ratio::Ratio, unit::Unit};

/// 10⁹ times the elementary charge in joules. The 2019 SI redefinition makes
/// the electronvolt exact, so this ratio is exact too.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GigaElectronVolts;

impl Unit for GigaElectronVolts {
    type Dim = Energy;

    const RATIO: Ratio = Ratio::int(1_602_176_634).mul(Ratio::pow10(-19));
    const UNIT_NAME: &'static str = "gigaelectronvolts";
    const UNIT_SYMBOL: &'static str = "GeV";
}

#[macro_export]
macro_rules! gigaelectronvolts {
    ($value:expr) => {
        $crate::Quantity::<$crate::GigaElectronVolts, _>::from(&$value)
    };
}

#[cfg(test)]
mod test {
    use crate::{gigaelectronvolts, joules, Joules, Quantity};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_gev_to_joules() {
        let e: Quantity<Joules, f64> = joules!(gigaelectronvolts!(1.0));
        assert_abs_diff_eq!(e.value(), 1.602_176_634e-10, epsilon = 1e-24);
    }
}
