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
use crate::{dimensions::Torque, ratio::Ratio, unit::Unit};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NewtonMeters;

impl Unit for NewtonMeters {
    type Dim = Torque;

    const RATIO: Ratio = Ratio::ONE;
    const UNIT_NAME: &'static str = "newton meters";
    const UNIT_SYMBOL: &'static str = "N·m";
}

#[macro_export]
macro_rules! newton_meters {
    ($value:expr) => {
        $crate::Quantity::<$crate::NewtonMeters, _>::from(&$value)
    };
}

#[cfg(test)]
mod test {
    use crate::{meters, newton_meters, newtons, NewtonMeters};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_torque_from_force_and_arm() {
        let t = (newtons!(12.0) * meters!(0.5)).cast::<NewtonMeters, f64>();
        assert_abs_diff_eq!(t.value(), 6.0);
        assert_eq!(format!("{}", newton_meters!(6.0)), "6 N·m");
    }
}
