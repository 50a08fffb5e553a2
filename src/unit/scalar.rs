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
use crate::{dimensions::Dimensionless, ratio::Ratio, unit::Unit};

/// The unit of bare numbers: fully cancelled quotients cast down to this.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct One;

impl Unit for One {
    type Dim = Dimensionless;

    const RATIO: Ratio = Ratio::ONE;
    const UNIT_NAME: &'static str = "one";
    const UNIT_SYMBOL: &'static str = "";
}

#[macro_export]
macro_rules! scalar {
    ($value:expr) => {
        $crate::Quantity::<$crate::One, _>::from(&$value)
    };
}
