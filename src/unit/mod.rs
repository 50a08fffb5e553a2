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
use crate::{
    dimension::{DimPow, DimRoot, Dimension, Prod, Quot},
    ratio::Ratio,
    represent::Representation,
};
use std::{fmt, fmt::Debug, marker::PhantomData};

// Unitless
pub(crate) mod scalar;

// Distance
pub(crate) mod centimeters;
pub(crate) mod feet;
pub(crate) mod kilometers;
pub(crate) mod meters;
pub(crate) mod millimeters;

// Time
pub(crate) mod hours;
pub(crate) mod seconds;

// Mass
pub(crate) mod kilograms;

// Angular
pub(crate) mod degrees;
pub(crate) mod radians;

// Frequency
pub(crate) mod hertz;

// Mechanics
pub(crate) mod joules;
pub(crate) mod kilogram_meters_per_second;
pub(crate) mod kilometers_per_hour;
pub(crate) mod meters_per_second;
pub(crate) mod newton_meters;
pub(crate) mod newtons;

// Particle physics
pub(crate) mod gigaelectronvolts;
pub(crate) mod natural;

// Signal analysis
pub(crate) mod spectral;
pub(crate) mod volts;

// Flow
pub(crate) mod kilograms_per_hour;

/// A concrete scale for measuring one dimension. A unit belongs to exactly
/// one `Dim` and stores its exact `Ratio` relative to that dimension's
/// coherent unit; two units are quantity-compatible iff their dimensions
/// agree. Derived scaled units are declared by composing ratios, e.g.
/// kilometre is 1000 times the metre's ratio.
pub trait Unit: Copy + Clone + Debug + Default + Eq + PartialEq + 'static {
    type Dim: Dimension;

    const RATIO: Ratio;
    const UNIT_NAME: &'static str;
    const UNIT_SYMBOL: &'static str;

    // Composed units override this to spell out their structure.
    fn fmt_symbol(f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(Self::UNIT_SYMBOL)
    }
}

/// The exact ratio taking a value in `Src` to a value in `Dst`. The shared
/// dimension is part of the signature, so a cross-dimension conversion does
/// not type-check.
pub const fn conversion_ratio<Src, Dst>() -> Ratio
where
    Src: Unit,
    Dst: Unit<Dim = Src::Dim>,
{
    Src::RATIO.div(Dst::RATIO)
}

pub fn conversion_factor<Src, Dst>() -> f64
where
    Src: Unit,
    Dst: Unit<Dim = Src::Dim>,
{
    conversion_ratio::<Src, Dst>().to_f64()
}

/// Const-evaluated witness that converting from `Src` into `Dst` cannot
/// truncate representation `R`: either `R` tolerates fractions or the factor
/// is a positive integer. Implicit conversions force `CHECK`; the explicit
/// cast path does not.
pub(crate) struct ConvertGuard<Src, Dst, R>(PhantomData<(Src, Dst, R)>);

impl<Src: Unit, Dst: Unit, R: Representation> ConvertGuard<Src, Dst, R> {
    pub(crate) const CHECK: () = assert!(
        !R::IS_INTEGRAL || Src::RATIO.div(Dst::RATIO).is_integer(),
        "implicit unit conversion would truncate; use an explicit cast"
    );
}

/// The unit of a product of two quantities.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UnitProd<Ua, Ub>(PhantomData<(Ua, Ub)>);

impl<Ua: Unit, Ub: Unit> Unit for UnitProd<Ua, Ub> {
    type Dim = Prod<Ua::Dim, Ub::Dim>;

    const RATIO: Ratio = Ua::RATIO.mul(Ub::RATIO);
    const UNIT_NAME: &'static str = "derived product";
    const UNIT_SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut fmt::Formatter) -> fmt::Result {
        Ua::fmt_symbol(f)?;
        f.write_str("·")?;
        Ub::fmt_symbol(f)
    }
}

/// The unit of a quotient of two quantities.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UnitQuot<Ua, Ub>(PhantomData<(Ua, Ub)>);

impl<Ua: Unit, Ub: Unit> Unit for UnitQuot<Ua, Ub> {
    type Dim = Quot<Ua::Dim, Ub::Dim>;

    const RATIO: Ratio = Ua::RATIO.div(Ub::RATIO);
    const UNIT_NAME: &'static str = "derived quotient";
    const UNIT_SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut fmt::Formatter) -> fmt::Result {
        Ua::fmt_symbol(f)?;
        f.write_str("/")?;
        Ub::fmt_symbol(f)
    }
}

/// The unit of an integral power of a quantity.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UnitPow<Ua, const N: i32>(PhantomData<Ua>);

impl<Ua: Unit, const N: i32> Unit for UnitPow<Ua, N> {
    type Dim = DimPow<Ua::Dim, N>;

    const RATIO: Ratio = Ua::RATIO.pow(N);
    const UNIT_NAME: &'static str = "derived power";
    const UNIT_SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut fmt::Formatter) -> fmt::Result {
        Ua::fmt_symbol(f)?;
        write!(f, "^{N}")
    }
}

/// The unit of an N-th root of a quantity. Taking the root of a unit whose
/// ratio is not an exact N-th power fails during const evaluation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UnitRoot<Ua, const N: u32>(PhantomData<Ua>);

impl<Ua: Unit, const N: u32> Unit for UnitRoot<Ua, N> {
    type Dim = DimRoot<Ua::Dim, N>;

    const RATIO: Ratio = Ua::RATIO.root(N);
    const UNIT_NAME: &'static str = "derived root";
    const UNIT_SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut fmt::Formatter) -> fmt::Result {
        if N == 2 {
            f.write_str("√")?;
        } else {
            write!(f, "{N}√")?;
        }
        Ua::fmt_symbol(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Degrees, Feet, Kilometers, Meters, Radians, Seconds};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_conversion_factors() {
        assert_abs_diff_eq!(conversion_factor::<Kilometers, Meters>(), 1000.0);
        assert_abs_diff_eq!(conversion_factor::<Meters, Kilometers>(), 0.001);
        assert_abs_diff_eq!(conversion_factor::<Feet, Meters>(), 0.3048);
        assert_abs_diff_eq!(
            conversion_factor::<Degrees, Radians>(),
            PI / 180.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_round_trip_is_exact() {
        let there = conversion_ratio::<Kilometers, Meters>();
        let back = conversion_ratio::<Meters, Kilometers>();
        assert!(there.mul(back).is_one());
        let there = conversion_ratio::<Degrees, Radians>();
        let back = conversion_ratio::<Radians, Degrees>();
        assert!(there.mul(back).is_one());
    }

    #[test]
    fn test_composed_ratios() {
        assert!(UnitProd::<Kilometers, Meters>::RATIO.eq_const(crate::Ratio::int(1000)));
        assert!(UnitQuot::<Meters, Seconds>::RATIO.is_one());
        assert!(UnitPow::<Kilometers, 2>::RATIO.eq_const(crate::Ratio::pow10(6)));
        assert!(UnitRoot::<UnitPow<Kilometers, 2>, 2>::RATIO.eq_const(crate::Ratio::int(1000)));
    }

    #[test]
    fn test_symbols() {
        use crate::Quantity;
        let v = Quantity::<UnitQuot<Meters, Seconds>, f64>::new(3.0);
        assert_eq!(format!("{v}"), "3 m/s");
        let a = Quantity::<UnitPow<Seconds, 2>, f64>::new(2.0);
        assert_eq!(format!("{a}"), "2 s^2");
        let r = Quantity::<UnitRoot<UnitPow<Meters, 2>, 2>, f64>::new(2.0);
        assert_eq!(format!("{r}"), "2 √m^2");
    }
}
