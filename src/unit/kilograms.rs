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
use crate::{dimensions::Mass, ratio::Ratio, unit::Unit};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Kilograms;

impl Unit for Kilograms {
    type Dim = Mass;

    const RATIO: Ratio = Ratio::ONE;
    const UNIT_NAME: &'static str = "kilograms";
    const UNIT_SYMBOL: &'static str = "kg";
}

#[macro_export]
macro_rules! kilograms {
    ($value:expr) => {
        $crate::Quantity::<$crate::Kilograms, _>::from(&$value)
    };
}
