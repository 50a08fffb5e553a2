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
    dimensions::{Length, Time},
    quantity::Quantity,
    represent::{LosslessInto, Promote, RepCast, Representation},
    unit::{seconds::Seconds, Unit},
    Dimension,
};
use chrono::{DateTime, Utc};
use std::{
    cmp::Ordering,
    fmt,
    fmt::Debug,
    marker::PhantomData,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// A fixed reference location on one dimension's axis. Points anchored to
/// different origins are unrelated values: the type system offers no
/// operation between them, not even comparison.
pub trait Origin: Copy + Clone + Debug + Default + Eq + PartialEq + 'static {
    type Dim: Dimension;

    const ORIGIN_NAME: &'static str;
}

/// The anonymous per-dimension origin a bare quantity is lifted against when
/// no named origin applies.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DynamicOrigin<D>(PhantomData<D>);

impl<D: Dimension> Origin for DynamicOrigin<D> {
    type Dim = D;

    const ORIGIN_NAME: &'static str = "arbitrary origin";
}

/// Zero altitude for absolute elevations.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MeanSeaLevel;

impl Origin for MeanSeaLevel {
    type Dim = Length;

    const ORIGIN_NAME: &'static str = "mean sea level";
}

/// 1970-01-01T00:00:00Z, the anchor for absolute timestamps.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UnixEpoch;

impl Origin for UnixEpoch {
    type Dim = Time;

    const ORIGIN_NAME: &'static str = "unix epoch";
}

/// An absolute position on the axis anchored at `O`, stored as the offset
/// from that origin. Points add and subtract quantities and difference into
/// quantities; point + point does not exist. The unit and representation
/// follow the same conversion, promotion, and truncation rules as
/// `Quantity`.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuantityPoint<O, U, R = f64>
where
    O: Origin,
    U: Unit<Dim = O::Dim>,
    R: Representation,
{
    offset: Quantity<U, R>,
    phantom: PhantomData<O>,
}

impl<O, U, R> QuantityPoint<O, U, R>
where
    O: Origin,
    U: Unit<Dim = O::Dim>,
    R: Representation,
{
    pub fn new(offset: Quantity<U, R>) -> Self {
        Self {
            offset,
            phantom: PhantomData,
        }
    }

    pub fn relative(self) -> Quantity<U, R> {
        self.offset
    }

    pub fn widen<R2>(self) -> QuantityPoint<O, U, R2>
    where
        R: LosslessInto<R2>,
        R2: Representation,
    {
        QuantityPoint::new(self.offset.widen())
    }

    /// Explicit, possibly lossy change of unit and/or representation. The
    /// origin stays fixed; there is no cast between origins.
    pub fn cast<To, R2>(self) -> QuantityPoint<O, To, R2>
    where
        To: Unit<Dim = O::Dim>,
        R: RepCast<R2>,
        R2: Representation,
    {
        QuantityPoint::new(self.offset.cast())
    }

    /// Step forward by one unit and return the updated point.
    pub fn pre_inc(&mut self) -> Self {
        self.offset += Quantity::<U, R>::new(R::one());
        *self
    }

    /// Return the current point, then step forward by one unit.
    pub fn post_inc(&mut self) -> Self {
        let prior = *self;
        self.offset += Quantity::<U, R>::new(R::one());
        prior
    }

    pub fn pre_dec(&mut self) -> Self {
        self.offset -= Quantity::<U, R>::new(R::one());
        *self
    }

    pub fn post_dec(&mut self) -> Self {
        let prior = *self;
        self.offset -= Quantity::<U, R>::new(R::one());
        prior
    }

    pub fn min(self, other: Self) -> Self
    where
        Quantity<U, R>: PartialOrd,
    {
        if other.offset < self.offset {
            other
        } else {
            self
        }
    }

    pub fn max(self, other: Self) -> Self
    where
        Quantity<U, R>: PartialOrd,
    {
        if other.offset > self.offset {
            other
        } else {
            self
        }
    }

    /// The farthest point below the origin the representation can hold.
    pub fn min_value() -> Self {
        Self::new(Quantity::new(R::min_finite()))
    }

    /// The farthest point above the origin the representation can hold.
    pub fn max_value() -> Self {
        Self::new(Quantity::new(R::max_finite()))
    }
}

/// Lift a quantity to a point against the anonymous origin of its dimension.
pub fn quantity_point<U, R>(q: Quantity<U, R>) -> QuantityPoint<DynamicOrigin<U::Dim>, U, R>
where
    U: Unit,
    R: Representation,
{
    QuantityPoint::new(q)
}

/// Explicit conversion in free-function form; the origin never changes.
pub fn quantity_point_cast<To, R2, O, U, R>(p: QuantityPoint<O, U, R>) -> QuantityPoint<O, To, R2>
where
    To: Unit<Dim = O::Dim>,
    O: Origin,
    U: Unit<Dim = O::Dim>,
    R: Representation + RepCast<R2>,
    R2: Representation,
{
    p.cast()
}

impl<O, U, R> fmt::Display for QuantityPoint<O, U, R>
where
    O: Origin,
    U: Unit<Dim = O::Dim>,
    R: Representation,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} from {}", self.offset, O::ORIGIN_NAME)
    }
}

// Absolute timestamps interoperate with wall-clock time.
impl From<DateTime<Utc>> for QuantityPoint<UnixEpoch, Seconds, i64> {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::new(Quantity::new(dt.timestamp()))
    }
}

impl QuantityPoint<UnixEpoch, Seconds, i64> {
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.offset.value(), 0)
    }
}

impl<O, Ua, Ub, Ra, Rb> Add<Quantity<Ub, Rb>> for QuantityPoint<O, Ua, Ra>
where
    O: Origin,
    Ua: Unit<Dim = O::Dim>,
    Ub: Unit<Dim = Ua::Dim>,
    Ra: Representation + Promote<Rb>,
    Rb: Representation,
    <Ra as Promote<Rb>>::Output: Representation,
{
    type Output = QuantityPoint<O, Ua, <Ra as Promote<Rb>>::Output>;

    fn add(self, rhs: Quantity<Ub, Rb>) -> Self::Output {
        QuantityPoint::new(self.offset + rhs)
    }
}

impl<O, Ua, Ub, Ra, Rb> Sub<Quantity<Ub, Rb>> for QuantityPoint<O, Ua, Ra>
where
    O: Origin,
    Ua: Unit<Dim = O::Dim>,
    Ub: Unit<Dim = Ua::Dim>,
    Ra: Representation + Promote<Rb>,
    Rb: Representation,
    <Ra as Promote<Rb>>::Output: Representation,
{
    type Output = QuantityPoint<O, Ua, <Ra as Promote<Rb>>::Output>;

    fn sub(self, rhs: Quantity<Ub, Rb>) -> Self::Output {
        QuantityPoint::new(self.offset - rhs)
    }
}

// Quantity + point keeps the point's origin and unit.
impl<O, Ua, Ub, Ra, Rb> Add<QuantityPoint<O, Ub, Rb>> for Quantity<Ua, Ra>
where
    O: Origin,
    Ua: Unit<Dim = O::Dim>,
    Ub: Unit<Dim = O::Dim>,
    Ra: Representation,
    Rb: Representation + Promote<Ra>,
{
    type Output = QuantityPoint<O, Ub, <Rb as Promote<Ra>>::Output>;

    fn add(self, rhs: QuantityPoint<O, Ub, Rb>) -> Self::Output {
        QuantityPoint::new(rhs.offset + self)
    }
}

// Point − point gives the displacement between them, in the left unit.
impl<O, Ua, Ub, Ra, Rb> Sub<QuantityPoint<O, Ub, Rb>> for QuantityPoint<O, Ua, Ra>
where
    O: Origin,
    Ua: Unit<Dim = O::Dim>,
    Ub: Unit<Dim = Ua::Dim>,
    Ra: Representation + Promote<Rb>,
    Rb: Representation,
    <Ra as Promote<Rb>>::Output: Representation,
{
    type Output = Quantity<Ua, <Ra as Promote<Rb>>::Output>;

    fn sub(self, rhs: QuantityPoint<O, Ub, Rb>) -> Self::Output {
        self.offset - rhs.offset
    }
}

impl<O, Ua, Ub, R> AddAssign<Quantity<Ub, R>> for QuantityPoint<O, Ua, R>
where
    O: Origin,
    Ua: Unit<Dim = O::Dim>,
    Ub: Unit<Dim = Ua::Dim>,
    R: Representation,
{
    fn add_assign(&mut self, rhs: Quantity<Ub, R>) {
        self.offset += rhs;
    }
}

impl<O, Ua, Ub, R> SubAssign<Quantity<Ub, R>> for QuantityPoint<O, Ua, R>
where
    O: Origin,
    Ua: Unit<Dim = O::Dim>,
    Ub: Unit<Dim = Ua::Dim>,
    R: Representation,
{
    fn sub_assign(&mut self, rhs: Quantity<Ub, R>) {
        self.offset -= rhs;
    }
}

impl<O, Ua, Ub, Ra, Rb> PartialEq<QuantityPoint<O, Ub, Rb>> for QuantityPoint<O, Ua, Ra>
where
    O: Origin,
    Ua: Unit<Dim = O::Dim>,
    Ub: Unit<Dim = Ua::Dim>,
    Ra: Representation + Promote<Rb>,
    Rb: Representation,
{
    fn eq(&self, other: &QuantityPoint<O, Ub, Rb>) -> bool {
        self.offset == other.offset
    }
}

impl<O, Ua, Ub, Ra, Rb> PartialOrd<QuantityPoint<O, Ub, Rb>> for QuantityPoint<O, Ua, Ra>
where
    O: Origin,
    Ua: Unit<Dim = O::Dim>,
    Ub: Unit<Dim = Ua::Dim>,
    Ra: Representation + Promote<Rb>,
    Rb: Representation,
    <Ra as Promote<Rb>>::Output: PartialOrd,
{
    fn partial_cmp(&self, other: &QuantityPoint<O, Ub, Rb>) -> Option<Ordering> {
        self.offset.partial_cmp(&other.offset)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{kilometers, meters, seconds, Meters};
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;
    use static_assertions::assert_not_impl_any;

    type Altitude<U, R = f64> = QuantityPoint<MeanSeaLevel, U, R>;
    type Timestamp<R = i64> = QuantityPoint<UnixEpoch, Seconds, R>;

    // Points never add to points, and origins never mix.
    assert_not_impl_any!(Altitude<Meters>: Add<Altitude<Meters>>);
    assert_not_impl_any!(
        Altitude<Meters>: Sub<QuantityPoint<DynamicOrigin<crate::Length>, Meters>>
    );
    assert_not_impl_any!(
        Altitude<Meters>: PartialEq<QuantityPoint<DynamicOrigin<crate::Length>, Meters>>
    );
    // A time point is not a length point.
    assert_not_impl_any!(Timestamp: Sub<Altitude<Meters, i64>>);

    #[test]
    fn test_point_offset_arithmetic() {
        let base = Altitude::<Meters>::new(meters!(1.0));
        let higher = base + kilometers!(1.0);
        assert_eq!(higher, Altitude::<Meters>::new(meters!(1001.0)));
        assert_eq!(higher - base, kilometers!(1.0));
        assert_eq!(higher - kilometers!(1.0), base);
        assert_eq!(kilometers!(1.0) + base, higher);
    }

    #[test]
    fn test_kilometre_point_plus_metre() {
        let p = quantity_point(kilometers!(1.0)) + meters!(1.0);
        let rel: Quantity<crate::Meters, f64> = meters!(p.relative());
        assert_abs_diff_eq!(rel.value(), 1001.0, epsilon = 1e-9);
    }

    #[test]
    fn test_point_difference_is_a_quantity() {
        let a = Altitude::<Meters, i32>::new(meters!(100));
        let b = Altitude::<Meters, i32>::new(meters!(250));
        assert_eq!(b - a, meters!(150));
        assert_eq!(a - b, meters!(-150));
    }

    #[test]
    fn test_round_trip_through_offset() {
        let p = quantity_point(meters!(42.0));
        let q = meters!(8.0);
        assert_eq!((p + q) - q, p);
        assert_eq!((p - q) + q, p);
        assert_eq!((p + q) - p, q);
    }

    #[test]
    fn test_extreme_points() {
        assert_eq!(
            Altitude::<Meters, i32>::min_value().relative().value(),
            i32::MIN
        );
        assert_eq!(
            Altitude::<Meters, i32>::max_value().relative().value(),
            i32::MAX
        );
        let top = Altitude::<Meters>::max_value();
        assert!(Altitude::<Meters>::new(meters!(8848.0)) < top);
    }

    #[test]
    fn test_increment_decrement() {
        let mut t = Timestamp::new(seconds!(10i64));
        assert_eq!(t.pre_inc().relative().value(), 11);
        assert_eq!(t.post_inc().relative().value(), 11);
        assert_eq!(t.relative().value(), 12);
        assert_eq!(t.pre_dec().relative().value(), 11);
        assert_eq!(t.post_dec().relative().value(), 11);
        assert_eq!(t.relative().value(), 10);
    }

    #[test]
    fn test_min_max() {
        let low = Altitude::<Meters>::new(meters!(10.0));
        let high = Altitude::<Meters>::new(meters!(20.0));
        assert_eq!(low.min(high), low);
        assert_eq!(low.max(high), high);
    }

    #[test]
    fn test_compound_assignment() {
        let mut p = Altitude::<Meters, i32>::new(meters!(5));
        p += kilometers!(1);
        assert_eq!(p.relative().value(), 1005);
        p -= meters!(5);
        assert_eq!(p.relative().value(), 1000);
    }

    #[test]
    fn test_chrono_interop() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let t = Timestamp::from(dt);
        assert_eq!(t.relative().value(), 946_684_800);
        assert_eq!(t.to_datetime(), Some(dt));
        let later = t + seconds!(60i64);
        assert_eq!(later - t, seconds!(60i64));
    }

    #[test]
    fn test_display() {
        let p = Altitude::<Meters>::new(meters!(1001.0));
        assert_eq!(format!("{p}"), "1001 m from mean sea level");
    }
}
