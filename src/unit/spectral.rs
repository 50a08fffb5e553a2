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

//! Noise-density units. Their dimensions carry half-integer time exponents,
//! which the rational-exponent dimension algebra represents exactly.
use crate::{
    dimensions::{AmplitudeSpectralDensity, PowerSpectralDensity},
    ratio::Ratio,
    unit::Unit,
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SquareVoltsPerHertz;

impl Unit for SquareVoltsPerHertz {
    type Dim = PowerSpectralDensity;

    const RATIO: Ratio = Ratio::ONE;
    const UNIT_NAME: &'static str = "square volts per hertz";
    const UNIT_SYMBOL: &'static str = "V²/Hz";
}

#[macro_export]
macro_rules! square_volts_per_hertz {
    ($value:expr) => {
        $crate::Quantity::<$crate::SquareVoltsPerHertz, _>::from(&$value)
    };
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VoltsPerRootHertz;

impl Unit for VoltsPerRootHertz {
    type Dim = AmplitudeSpectralDensity;

    const RATIO: Ratio = Ratio::ONE;
    const UNIT_NAME: &'static str = "volts per root hertz";
    const UNIT_SYMBOL: &'static str = "V/√Hz";
}

#[macro_export]
macro_rules! volts_per_root_hertz {
    ($value:expr) => {
        $crate::Quantity::<$crate::VoltsPerRootHertz, _>::from(&$value)
    };
}

#[cfg(test)]
mod test {
    use crate::{hertz, square_volts_per_hertz, volts, VoltsPerRootHertz};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_asd_is_root_of_psd() {
        let asd = square_volts_per_hertz!(4.0)
            .sqrt()
            .cast::<VoltsPerRootHertz, f64>();
        assert_abs_diff_eq!(asd.value(), 2.0);
    }

    #[test]
    fn test_psd_from_parts() {
        let psd = (volts!(4.0) * volts!(1.0) / hertz!(2.0))
            .cast::<crate::SquareVoltsPerHertz, f64>();
        assert_abs_diff_eq!(psd.value(), 2.0);
    }
}
