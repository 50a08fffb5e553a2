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
use crate::{dimensions::Frequency, ratio::Ratio, unit::Unit};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Hertz;

impl Unit for Hertz {
    type Dim = Frequency;

    const RATIO: Ratio = Ratio::ONE;
    const UNIT_NAME: &'static str = "hertz";
    const UNIT_SYMBOL: &'static str = "Hz";
}

#[macro_export]
macro_rules! hertz {
    ($value:expr) => {
        $crate::Quantity::<$crate::Hertz, _>::from(&$value)
    };
}
