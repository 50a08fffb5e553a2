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
use nalgebra::{Matrix3, Vector3};
use num_traits::Bounded;
use ordered_float::OrderedFloat;
use std::{
    fmt::{Debug, Display},
    ops::{Add, Neg, Sub},
};

/// The numeric (or numeric-container) type holding a quantity's magnitude.
///
/// A representation only has to behave like a value: add, subtract, negate,
/// scale by a conversion factor, and combine elementwise with another value
/// of the same shape. Unit conversion of containers is elementwise,
/// consistent with the scalar case.
pub trait Representation:
    Copy
    + Clone
    + Debug
    + Display
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// True when scaling by a non-integral factor loses information; drives
    /// the compile-time rejection of truncating implicit conversions.
    const IS_INTEGRAL: bool;

    /// One unit step, used by point increment and decrement.
    fn one() -> Self;
    fn min_finite() -> Self;
    fn max_finite() -> Self;

    /// Apply a unit-conversion factor. Truncates toward zero for integral
    /// representations; elementwise for containers.
    fn scale(self, factor: f64) -> Self;

    /// The representation's own product (elementwise for containers).
    fn mul_rep(self, rhs: Self) -> Self;
    fn div_rep(self, rhs: Self) -> Self;
    fn powi_rep(self, n: i32) -> Self;
    fn sqrt_rep(self) -> Self;
}

macro_rules! impl_float_representation {
    ($Num:ty) => {
        impl Representation for $Num {
            const IS_INTEGRAL: bool = false;

            fn one() -> Self {
                1.0
            }

            fn min_finite() -> Self {
                <$Num as Bounded>::min_value()
            }

            fn max_finite() -> Self {
                <$Num as Bounded>::max_value()
            }

            fn scale(self, factor: f64) -> Self {
                (self as f64 * factor) as $Num
            }

            fn mul_rep(self, rhs: Self) -> Self {
                self * rhs
            }

            fn div_rep(self, rhs: Self) -> Self {
                self / rhs
            }

            fn powi_rep(self, n: i32) -> Self {
                self.powi(n)
            }

            fn sqrt_rep(self) -> Self {
                self.sqrt()
            }
        }
    };
}
impl_float_representation!(f64);
impl_float_representation!(f32);

macro_rules! impl_int_representation {
    ($Num:ty) => {
        impl Representation for $Num {
            const IS_INTEGRAL: bool = true;

            fn one() -> Self {
                1
            }

            fn min_finite() -> Self {
                <$Num as Bounded>::min_value()
            }

            fn max_finite() -> Self {
                <$Num as Bounded>::max_value()
            }

            fn scale(self, factor: f64) -> Self {
                (self as f64 * factor) as $Num
            }

            fn mul_rep(self, rhs: Self) -> Self {
                self * rhs
            }

            fn div_rep(self, rhs: Self) -> Self {
                self / rhs
            }

            fn powi_rep(self, n: i32) -> Self {
                if n >= 0 {
                    self.pow(n as u32)
                } else {
                    (self as f64).powi(n) as $Num
                }
            }

            fn sqrt_rep(self) -> Self {
                (self as f64).sqrt() as $Num
            }
        }
    };
}
impl_int_representation!(i64);
impl_int_representation!(i32);

impl Representation for OrderedFloat<f64> {
    const IS_INTEGRAL: bool = false;

    fn one() -> Self {
        OrderedFloat(1.0)
    }

    fn min_finite() -> Self {
        OrderedFloat(f64::MIN)
    }

    fn max_finite() -> Self {
        OrderedFloat(f64::MAX)
    }

    fn scale(self, factor: f64) -> Self {
        OrderedFloat(self.0 * factor)
    }

    fn mul_rep(self, rhs: Self) -> Self {
        OrderedFloat(self.0 * rhs.0)
    }

    fn div_rep(self, rhs: Self) -> Self {
        OrderedFloat(self.0 / rhs.0)
    }

    fn powi_rep(self, n: i32) -> Self {
        OrderedFloat(self.0.powi(n))
    }

    fn sqrt_rep(self) -> Self {
        OrderedFloat(self.0.sqrt())
    }
}

impl Representation for Vector3<f64> {
    const IS_INTEGRAL: bool = false;

    fn one() -> Self {
        Vector3::from_element(1.0)
    }

    fn min_finite() -> Self {
        Vector3::from_element(f64::MIN)
    }

    fn max_finite() -> Self {
        Vector3::from_element(f64::MAX)
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn mul_rep(self, rhs: Self) -> Self {
        self.component_mul(&rhs)
    }

    fn div_rep(self, rhs: Self) -> Self {
        self.component_div(&rhs)
    }

    fn powi_rep(self, n: i32) -> Self {
        self.map(|v| v.powi(n))
    }

    fn sqrt_rep(self) -> Self {
        self.map(f64::sqrt)
    }
}

impl Representation for Matrix3<f64> {
    const IS_INTEGRAL: bool = false;

    fn one() -> Self {
        Matrix3::from_element(1.0)
    }

    fn min_finite() -> Self {
        Matrix3::from_element(f64::MIN)
    }

    fn max_finite() -> Self {
        Matrix3::from_element(f64::MAX)
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn mul_rep(self, rhs: Self) -> Self {
        self.component_mul(&rhs)
    }

    fn div_rep(self, rhs: Self) -> Self {
        self.component_div(&rhs)
    }

    fn powi_rep(self, n: i32) -> Self {
        self.map(|v| v.powi(n))
    }

    fn sqrt_rep(self) -> Self {
        self.map(f64::sqrt)
    }
}

/// Static promotion table for mixed-representation arithmetic: the result of
/// combining two representations is the richer of the two, mirroring how the
/// underlying numeric types combine.
pub trait Promote<Rhs: Representation>: Representation {
    type Output: Representation;

    // Spelled out because `Representation`'s operator supertraits also
    // carry an `Output`.
    fn promote(self) -> <Self as Promote<Rhs>>::Output;
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

impl<R: Representation> Promote<R> for R {
    type Output = R;

    fn promote(self) -> R {
        self
    }

    fn promote_rhs(rhs: R) -> R {
        rhs
    }
}

macro_rules! impl_promotion {
    ($A:ty, $B:ty => $Out:ty) => {
        impl Promote<$B> for $A {
            type Output = $Out;

            fn promote(self) -> $Out {
                self as $Out
            }

            fn promote_rhs(rhs: $B) -> $Out {
                rhs as $Out
            }
        }

        impl Promote<$A> for $B {
            type Output = $Out;

            fn promote(self) -> $Out {
                self as $Out
            }

            fn promote_rhs(rhs: $A) -> $Out {
                rhs as $Out
            }
        }
    };
}
impl_promotion!(i32, i64 => i64);
impl_promotion!(i32, f64 => f64);
impl_promotion!(i64, f64 => f64);
impl_promotion!(i32, f32 => f32);
impl_promotion!(f32, f64 => f64);

// Bare scalar factors broadcast over non-f64 float and container
// representations, so quantity × f64 promotes instead of truncating.
impl Promote<f64> for OrderedFloat<f64> {
    type Output = OrderedFloat<f64>;

    fn promote(self) -> OrderedFloat<f64> {
        self
    }

    fn promote_rhs(rhs: f64) -> OrderedFloat<f64> {
        OrderedFloat(rhs)
    }
}

impl Promote<f64> for Vector3<f64> {
    type Output = Vector3<f64>;

    fn promote(self) -> Vector3<f64> {
        self
    }

    fn promote_rhs(rhs: f64) -> Vector3<f64> {
        Vector3::from_element(rhs)
    }
}

impl Promote<f64> for Matrix3<f64> {
    type Output = Matrix3<f64>;

    fn promote(self) -> Matrix3<f64> {
        self
    }

    fn promote_rhs(rhs: f64) -> Matrix3<f64> {
        Matrix3::from_element(rhs)
    }
}

/// Static non-narrowing compatibility table. Narrowing pairs have no impl,
/// so an implicit representation change that could lose information fails to
/// compile; `RepCast` is the explicit path.
pub trait LosslessInto<Target: Representation>: Representation {
    fn lossless_into(self) -> Target;
}

impl<R: Representation> LosslessInto<R> for R {
    fn lossless_into(self) -> R {
        self
    }
}

macro_rules! impl_lossless {
    ($From:ty => $To:ty) => {
        impl LosslessInto<$To> for $From {
            fn lossless_into(self) -> $To {
                self as $To
            }
        }
    };
}
impl_lossless!(i32 => i64);
impl_lossless!(i32 => f64);
impl_lossless!(i64 => f64);
impl_lossless!(f32 => f64);

impl LosslessInto<OrderedFloat<f64>> for f64 {
    fn lossless_into(self) -> OrderedFloat<f64> {
        OrderedFloat(self)
    }
}

impl LosslessInto<f64> for OrderedFloat<f64> {
    fn lossless_into(self) -> f64 {
        self.0
    }
}

/// Explicit, possibly lossy representation conversion, always available.
pub trait RepCast<Target: Representation>: Representation {
    fn rep_cast(self) -> Target;
}

impl<R: Representation> RepCast<R> for R {
    fn rep_cast(self) -> R {
        self
    }
}

macro_rules! impl_rep_cast {
    ($A:ty, $B:ty) => {
        impl RepCast<$B> for $A {
            fn rep_cast(self) -> $B {
                self as $B
            }
        }

        impl RepCast<$A> for $B {
            fn rep_cast(self) -> $A {
                self as $A
            }
        }
    };
}
impl_rep_cast!(i32, i64);
impl_rep_cast!(i32, f32);
impl_rep_cast!(i32, f64);
impl_rep_cast!(i64, f32);
impl_rep_cast!(i64, f64);
impl_rep_cast!(f32, f64);

impl RepCast<f64> for OrderedFloat<f64> {
    fn rep_cast(self) -> f64 {
        self.0
    }
}

impl RepCast<OrderedFloat<f64>> for f64 {
    fn rep_cast(self) -> OrderedFloat<f64> {
        OrderedFloat(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use static_assertions::assert_not_impl_any;

    // Narrowing must stay explicit.
    assert_not_impl_any!(f64: LosslessInto<i32>);
    assert_not_impl_any!(f64: LosslessInto<f32>);
    assert_not_impl_any!(i64: LosslessInto<i32>);

    #[test]
    fn test_scale_truncates_integers() {
        assert_eq!(1234i32.scale(0.001), 1);
        assert_eq!((-1234i32).scale(0.001), -1);
        assert_eq!(2i64.scale(1000.0), 2000);
    }

    #[test]
    fn test_promotion() {
        let v = <i32 as Promote<f64>>::promote(2);
        assert_eq!(v, 2.0);
        let v = <f64 as Promote<i32>>::promote_rhs(3);
        assert_eq!(v, 3.0);
        let v = <i64 as Promote<i32>>::promote_rhs(3);
        assert_eq!(v, 3);
    }

    #[test]
    fn test_container_elementwise() {
        let v = Vector3::new(4.0, 8.0, 12.0);
        assert_eq!(v.scale(0.5), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(
            v.mul_rep(Vector3::new(2.0, 2.0, 2.0)),
            Vector3::new(8.0, 16.0, 24.0)
        );
        assert_eq!(v.sqrt_rep(), Vector3::new(2.0, 8f64.sqrt(), 12f64.sqrt()));
        assert_eq!(
            <Vector3<f64> as Promote<f64>>::promote_rhs(2.0),
            Vector3::from_element(2.0)
        );
    }
}
