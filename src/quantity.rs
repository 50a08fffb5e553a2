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
    dimension::SameDimension,
    represent::{LosslessInto, Promote, RepCast, Representation},
    unit::{ConvertGuard, Unit, UnitPow, UnitProd, UnitQuot, UnitRoot},
};
use approx::AbsDiffEq;
use std::{
    cmp::Ordering,
    fmt,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A value of representation `R` tagged at compile time by the unit `U` (and
/// through it a dimension). The tags are phantom: at runtime a quantity is
/// exactly its representation, nothing more.
///
/// Arithmetic between quantities of one dimension converts the right operand
/// into the left operand's unit; a conversion that would truncate an
/// integral representation is rejected during const evaluation rather than
/// rounded. Mixed representations promote to the richer side.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quantity<U: Unit, R: Representation = f64> {
    v: R,
    phantom: PhantomData<U>,
}

impl<U: Unit, R: Representation> Quantity<U, R> {
    pub fn new(v: R) -> Self {
        Self {
            v,
            phantom: PhantomData,
        }
    }

    pub fn value(self) -> R {
        self.v
    }

    /// Implicit-style representation change, restricted to non-narrowing
    /// pairs. Narrowing needs `cast`.
    pub fn widen<R2>(self) -> Quantity<U, R2>
    where
        R: LosslessInto<R2>,
        R2: Representation,
    {
        Quantity::new(self.v.lossless_into())
    }

    /// Explicit, possibly lossy conversion to another unit of an equivalent
    /// dimension and/or another representation: the value is scaled by the
    /// exact conversion factor, then truncated if the target representation
    /// is integral. Non-equivalent dimensions fail at build time.
    pub fn cast<To, R2>(self) -> Quantity<To, R2>
    where
        To: Unit,
        R: RepCast<R2>,
        R2: Representation,
    {
        let _ = SameDimension::<U::Dim, To::Dim>::CHECK;
        let factor = U::RATIO.div(To::RATIO).to_f64();
        Quantity::new(self.v.scale(factor).rep_cast())
    }

    pub fn pow<const N: i32>(self) -> Quantity<UnitPow<U, N>, R> {
        Quantity::new(self.v.powi_rep(N))
    }

    /// Square root. The result dimension always exists (exponents are
    /// rational); a unit whose scale has no exact square root is rejected at
    /// build time.
    pub fn sqrt(self) -> Quantity<UnitRoot<U, 2>, R> {
        Quantity::new(self.v.sqrt_rep())
    }
}

/// Explicit conversion in free-function form.
pub fn quantity_cast<To, R2, U, R>(q: Quantity<U, R>) -> Quantity<To, R2>
where
    To: Unit,
    U: Unit,
    R: Representation + RepCast<R2>,
    R2: Representation,
{
    q.cast()
}

impl<U: Unit, R: Representation> fmt::Display for Quantity<U, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        struct Symbol<U>(PhantomData<U>);

        impl<U: Unit> fmt::Display for Symbol<U> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                U::fmt_symbol(f)
            }
        }

        // Dimensionless quantities render bare, without a dangling separator.
        let symbol = Symbol::<U>(PhantomData).to_string();
        if symbol.is_empty() {
            write!(f, "{}", self.v)
        } else {
            write!(f, "{} {}", self.v, symbol)
        }
    }
}

// Construction from a raw representation value; the entry point used by the
// catalog constructor macros.
impl<'a, U: Unit, R: Representation> From<&'a R> for Quantity<U, R> {
    fn from(v: &'a R) -> Self {
        Self::new(*v)
    }
}

// Same-dimension unit conversion, also reachable through the constructor
// macros: `meters!(km)`. Guarded against silent truncation.
impl<'a, Ua, Ub, R> From<&'a Quantity<Ua, R>> for Quantity<Ub, R>
where
    Ua: Unit,
    Ub: Unit<Dim = Ua::Dim>,
    R: Representation,
{
    fn from(other: &'a Quantity<Ua, R>) -> Self {
        let _ = ConvertGuard::<Ua, Ub, R>::CHECK;
        Self::new(other.v.scale(Ua::RATIO.div(Ub::RATIO).to_f64()))
    }
}

impl<Ua, Ub, Ra, Rb> Add<Quantity<Ub, Rb>> for Quantity<Ua, Ra>
where
    Ua: Unit,
    Ub: Unit<Dim = Ua::Dim>,
    Ra: Representation + Promote<Rb>,
    Rb: Representation,
{
    type Output = Quantity<Ua, <Ra as Promote<Rb>>::Output>;

    fn add(self, other: Quantity<Ub, Rb>) -> Self::Output {
        let _ = ConvertGuard::<Ub, Ua, <Ra as Promote<Rb>>::Output>::CHECK;
        let factor = Ub::RATIO.div(Ua::RATIO).to_f64();
        Quantity::new(self.v.promote() + Ra::promote_rhs(other.v).scale(factor))
    }
}

impl<Ua, Ub, Ra, Rb> Sub<Quantity<Ub, Rb>> for Quantity<Ua, Ra>
where
    Ua: Unit,
    Ub: Unit<Dim = Ua::Dim>,
    Ra: Representation + Promote<Rb>,
    Rb: Representation,
{
    type Output = Quantity<Ua, <Ra as Promote<Rb>>::Output>;

    fn sub(self, other: Quantity<Ub, Rb>) -> Self::Output {
        let _ = ConvertGuard::<Ub, Ua, <Ra as Promote<Rb>>::Output>::CHECK;
        let factor = Ub::RATIO.div(Ua::RATIO).to_f64();
        Quantity::new(self.v.promote() - Ra::promote_rhs(other.v).scale(factor))
    }
}

impl<Ua, Ub, R> AddAssign<Quantity<Ub, R>> for Quantity<Ua, R>
where
    Ua: Unit,
    Ub: Unit<Dim = Ua::Dim>,
    R: Representation,
{
    fn add_assign(&mut self, other: Quantity<Ub, R>) {
        let _ = ConvertGuard::<Ub, Ua, R>::CHECK;
        self.v = self.v + other.v.scale(Ub::RATIO.div(Ua::RATIO).to_f64());
    }
}

impl<Ua, Ub, R> SubAssign<Quantity<Ub, R>> for Quantity<Ua, R>
where
    Ua: Unit,
    Ub: Unit<Dim = Ua::Dim>,
    R: Representation,
{
    fn sub_assign(&mut self, other: Quantity<Ub, R>) {
        let _ = ConvertGuard::<Ub, Ua, R>::CHECK;
        self.v = self.v - other.v.scale(Ub::RATIO.div(Ua::RATIO).to_f64());
    }
}

impl<U: Unit, R: Representation> Neg for Quantity<U, R> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.v)
    }
}

// Quantity × quantity composes the dimension; the numeric product follows
// the representation's own semantics (elementwise for containers).
impl<Ua, Ub, Ra, Rb> Mul<Quantity<Ub, Rb>> for Quantity<Ua, Ra>
where
    Ua: Unit,
    Ub: Unit,
    Ra: Representation + Promote<Rb>,
    Rb: Representation,
{
    type Output = Quantity<UnitProd<Ua, Ub>, <Ra as Promote<Rb>>::Output>;

    fn mul(self, other: Quantity<Ub, Rb>) -> Self::Output {
        Quantity::new(self.v.promote().mul_rep(Ra::promote_rhs(other.v)))
    }
}

impl<Ua, Ub, Ra, Rb> Div<Quantity<Ub, Rb>> for Quantity<Ua, Ra>
where
    Ua: Unit,
    Ub: Unit,
    Ra: Representation + Promote<Rb>,
    Rb: Representation,
{
    type Output = Quantity<UnitQuot<Ua, Ub>, <Ra as Promote<Rb>>::Output>;

    fn div(self, other: Quantity<Ub, Rb>) -> Self::Output {
        Quantity::new(self.v.promote().div_rep(Ra::promote_rhs(other.v)))
    }
}

// Bare scalar factors promote the representation, so an integral quantity
// times a fractional factor yields a float instead of silently truncating.
// Truncation stays behind the explicit `cast`.
impl<U, R> Mul<f64> for Quantity<U, R>
where
    U: Unit,
    R: Representation + Promote<f64>,
{
    type Output = Quantity<U, <R as Promote<f64>>::Output>;

    fn mul(self, s: f64) -> Self::Output {
        Quantity::new(self.v.promote().mul_rep(R::promote_rhs(s)))
    }
}

impl<U, R> Mul<Quantity<U, R>> for f64
where
    U: Unit,
    R: Representation + Promote<f64>,
{
    type Output = Quantity<U, <R as Promote<f64>>::Output>;

    fn mul(self, q: Quantity<U, R>) -> Self::Output {
        Quantity::new(q.v.promote().mul_rep(R::promote_rhs(self)))
    }
}

impl<U, R> Div<f64> for Quantity<U, R>
where
    U: Unit,
    R: Representation + Promote<f64>,
{
    type Output = Quantity<U, <R as Promote<f64>>::Output>;

    fn div(self, s: f64) -> Self::Output {
        Quantity::new(self.v.promote().div_rep(R::promote_rhs(s)))
    }
}

// The assign forms cannot change the representation, so they exist only for
// representations the factor promotes to themselves.
impl<U, R> MulAssign<f64> for Quantity<U, R>
where
    U: Unit,
    R: Representation + Promote<f64, Output = R>,
{
    fn mul_assign(&mut self, s: f64) {
        self.v = self.v.mul_rep(R::promote_rhs(s));
    }
}

impl<U, R> DivAssign<f64> for Quantity<U, R>
where
    U: Unit,
    R: Representation + Promote<f64, Output = R>,
{
    fn div_assign(&mut self, s: f64) {
        self.v = self.v.div_rep(R::promote_rhs(s));
    }
}

// Comparisons cross-multiply both operands by the integer sides of the exact
// conversion ratio, so nothing is rounded away before comparing: feet against
// metres compares 3048ths of a metre against 10000ths of a foot.
fn on_common_grid<Ua, Ub, O>(a: O, b: O) -> (O, O)
where
    Ua: Unit,
    Ub: Unit<Dim = Ua::Dim>,
    O: Representation,
{
    let (for_lhs, for_rhs) = Ub::RATIO.div(Ua::RATIO).cross_factors();
    (a.scale(for_lhs), b.scale(for_rhs))
}

impl<Ua, Ub, Ra, Rb> PartialEq<Quantity<Ub, Rb>> for Quantity<Ua, Ra>
where
    Ua: Unit,
    Ub: Unit<Dim = Ua::Dim>,
    Ra: Representation + Promote<Rb>,
    Rb: Representation,
{
    fn eq(&self, other: &Quantity<Ub, Rb>) -> bool {
        let (a, b) = on_common_grid::<Ua, Ub, _>(self.v.promote(), Ra::promote_rhs(other.v));
        a == b
    }
}

impl<Ua, Ub, Ra, Rb> PartialOrd<Quantity<Ub, Rb>> for Quantity<Ua, Ra>
where
    Ua: Unit,
    Ub: Unit<Dim = Ua::Dim>,
    Ra: Representation + Promote<Rb>,
    Rb: Representation,
    <Ra as Promote<Rb>>::Output: PartialOrd,
{
    fn partial_cmp(&self, other: &Quantity<Ub, Rb>) -> Option<Ordering> {
        let (a, b) = on_common_grid::<Ua, Ub, _>(self.v.promote(), Ra::promote_rhs(other.v));
        a.partial_cmp(&b)
    }
}

impl<U, R> AbsDiffEq for Quantity<U, R>
where
    U: Unit,
    R: Representation + AbsDiffEq<Epsilon = f64>,
{
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.v.abs_diff_eq(&other.v, epsilon)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        feet, kilometers, meters, meters_per_second, scalar, seconds, Feet, Kilograms, Kilometers,
        Meters, MetersPerSecond, One, Representation, Seconds,
    };
    use approx::assert_abs_diff_eq;
    use nalgebra::{Matrix3, Vector3};
    use static_assertions::assert_not_impl_any;

    // Cross-dimension arithmetic and comparison must not exist at all.
    assert_not_impl_any!(Quantity<Meters, f64>: Add<Quantity<Seconds, f64>>);
    assert_not_impl_any!(Quantity<Meters, f64>: Sub<Quantity<Seconds, f64>>);
    assert_not_impl_any!(Quantity<Meters, i32>: PartialEq<Quantity<Seconds, i32>>);
    assert_not_impl_any!(Quantity<Kilograms, f64>: PartialOrd<Quantity<Meters, f64>>);
    // A quantity is not a representation, so it cannot nest as its own rep.
    assert_not_impl_any!(Quantity<Meters, f64>: Representation);
    // Scaling an integral quantity in place by f64 would have to truncate.
    assert_not_impl_any!(Quantity<Meters, i32>: MulAssign<f64>, DivAssign<f64>);

    #[test]
    fn test_mixed_unit_equality() {
        assert_eq!(
            Quantity::<Meters, i32>::new(1000),
            Quantity::<Kilometers, i32>::new(1)
        );
        assert_ne!(
            Quantity::<Meters, i32>::new(1001),
            Quantity::<Kilometers, i32>::new(1)
        );
        assert_eq!(kilometers!(1.0), meters!(1000.0));
    }

    #[test]
    fn test_inexact_factor_comparison() {
        // 1 ft = 0.3048 m exactly, so 1250 ft is 381 m and 3 ft is short of
        // 1 m. Integer operands must not round through the conversion.
        assert_eq!(
            Quantity::<Feet, i32>::new(1250),
            Quantity::<Meters, i32>::new(381)
        );
        assert_ne!(
            Quantity::<Feet, i32>::new(3),
            Quantity::<Meters, i32>::new(1)
        );
        assert!(Quantity::<Feet, i32>::new(3) < Quantity::<Meters, i32>::new(1));
        assert!(Quantity::<Meters, i32>::new(1) > Quantity::<Feet, i32>::new(3));
        assert!(feet!(1.0) < meters!(0.3049));
    }

    #[test]
    fn test_mixed_unit_ordering() {
        assert!(Quantity::<Meters, i32>::new(1001) > Quantity::<Kilometers, i32>::new(1));
        assert!(Quantity::<Meters, i32>::new(999) < Quantity::<Kilometers, i32>::new(1));
        assert!(kilometers!(1.0) <= meters!(1000.0));
        assert!(meters!(1) < meters!(1.5));
    }

    #[test]
    fn test_addition_in_lhs_unit() {
        // Scaling into the finer left unit keeps whole-metre values exact.
        let d = meters!(1.0) + kilometers!(1.0);
        assert_eq!(d, meters!(1001.0));
        let d = kilometers!(1.0) + meters!(1.0);
        assert_abs_diff_eq!(d.value(), 1.001);
        let d = meters!(1) + kilometers!(1);
        assert_eq!(d.value(), 1001);
        let d = meters!(1) + meters!(0.5);
        assert_abs_diff_eq!(d.value(), 1.5);
    }

    #[test]
    fn test_compound_assignment() {
        let mut d = meters!(1);
        d += meters!(1);
        assert_eq!(d.value(), 2);
        d -= meters!(1);
        d += kilometers!(1);
        assert_eq!(d.value(), 1001);
    }

    #[test]
    fn test_unit_conversion_round_trip() {
        let d = meters!(1234.5f64);
        let back = meters!(feet!(d));
        assert_abs_diff_eq!(back.value(), 1234.5, epsilon = 1e-9);
    }

    #[test]
    fn test_cast_truncates() {
        assert_eq!(meters!(1.23f64).cast::<Meters, i32>().value(), 1);
        assert_eq!(meters!(2000).cast::<Kilometers, i32>().value(), 2);
        assert_eq!(kilometers!(2).cast::<Meters, i32>().value(), 2000);
        let q: Quantity<Feet, f64> = quantity_cast(meters!(1.0f64));
        assert_abs_diff_eq!(q.value(), 1.0 / 0.3048, epsilon = 1e-9);
    }

    #[test]
    fn test_widening_is_lossless() {
        let d: Quantity<Meters, f64> = meters!(7).widen();
        assert_abs_diff_eq!(d.value(), 7.0);
        let d: Quantity<Meters, i64> = meters!(7i32).widen();
        assert_eq!(d.value(), 7);
    }

    #[test]
    fn test_dimension_composition() {
        let area = meters!(2.0) * meters!(3.0);
        assert_abs_diff_eq!(area.value(), 6.0);
        let speed = (meters!(6.0) / seconds!(3.0)).cast::<MetersPerSecond, f64>();
        assert_eq!(speed, meters_per_second!(2.0));
        let ratio = (meters!(6.0) / meters!(3.0)).cast::<One, f64>();
        assert_eq!(ratio, scalar!(2.0));
    }

    #[test]
    fn test_scalar_ops() {
        assert_eq!(meters!(4.0) * 2.0, meters!(8.0));
        assert_eq!(2.0 * meters!(4.0), meters!(8.0));
        assert_eq!(meters!(4.0) / 2.0, meters!(2.0));
        let mut d = meters!(4.0);
        d *= 3.0;
        d /= 2.0;
        assert_eq!(d, meters!(6.0));
    }

    #[test]
    fn test_scalar_factor_promotes_integers() {
        let d = meters!(7) * 0.5;
        assert_abs_diff_eq!(d.value(), 3.5);
        assert_abs_diff_eq!((0.5 * meters!(7)).value(), 3.5);
        assert_abs_diff_eq!((meters!(7) / 2.0).value(), 3.5);
        // Rounding back down takes an explicit cast.
        assert_eq!(d.cast::<Meters, i32>().value(), 3);
    }

    #[test]
    fn test_pow_sqrt_round_trip() {
        let e = meters_per_second!(3.0).pow::<2>().sqrt();
        assert_abs_diff_eq!(e.cast::<MetersPerSecond, f64>(), meters_per_second!(3.0));
    }

    #[test]
    fn test_vector_quantities() {
        let v = meters!(Vector3::new(4.0, 8.0, 12.0));
        assert_eq!(v / 2.0, meters!(Vector3::new(2.0, 4.0, 6.0)));
        let u = meters!(Vector3::new(3.0, 2.0, 1.0));
        assert_eq!(v + u, meters!(Vector3::new(7.0, 10.0, 13.0)));
        let t = kilometers!(Vector3::new(3.0, 2.0, 1.0));
        assert_eq!(v + t, meters!(Vector3::new(3004.0, 2008.0, 1012.0)));
    }

    #[test]
    fn test_matrix_quantities_convert_elementwise() {
        let m = meters!(Matrix3::from_element(2.0));
        let mm = m.cast::<crate::Millimeters, Matrix3<f64>>();
        assert_eq!(mm.value(), Matrix3::from_element(2000.0));
        assert_eq!(m / 2.0, meters!(Matrix3::from_element(1.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", meters!(1001.0)), "1001 m");
        assert_eq!(format!("{}", meters_per_second!(3.5)), "3.5 m/s");
        assert_eq!(format!("{}", scalar!(2.5)), "2.5");
    }
}
