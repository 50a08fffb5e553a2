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
use crate::exponent::Exponent;
use std::{fmt::Debug, marker::PhantomData};

pub const BASE_DIMENSION_COUNT: usize = 8;

/// The canonical base-dimension axes. Angle is carried as a base dimension so
/// that angular units convert exactly instead of collapsing to dimensionless.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BaseDim {
    Length = 0,
    Mass,
    Time,
    Current,
    Temperature,
    Amount,
    Luminosity,
    Angle,
}

/// A physical dimension in canonical form: a dense map from each base
/// dimension to its rational exponent. Absent factors are zero entries, so
/// normalization and ordering hold by construction and equivalence is plain
/// element-wise equality.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DimExponents([Exponent; BASE_DIMENSION_COUNT]);

impl DimExponents {
    pub const DIMENSIONLESS: Self = Self([Exponent::ZERO; BASE_DIMENSION_COUNT]);

    pub const fn base(dim: BaseDim) -> Self {
        let mut exps = [Exponent::ZERO; BASE_DIMENSION_COUNT];
        exps[dim as usize] = Exponent::ONE;
        Self(exps)
    }

    pub const fn exponent(self, dim: BaseDim) -> Exponent {
        self.0[dim as usize]
    }

    pub const fn multiply(self, other: Self) -> Self {
        let mut exps = [Exponent::ZERO; BASE_DIMENSION_COUNT];
        let mut i = 0;
        while i < BASE_DIMENSION_COUNT {
            exps[i] = self.0[i].add(other.0[i]);
            i += 1;
        }
        Self(exps)
    }

    pub const fn recip(self) -> Self {
        let mut exps = [Exponent::ZERO; BASE_DIMENSION_COUNT];
        let mut i = 0;
        while i < BASE_DIMENSION_COUNT {
            exps[i] = self.0[i].neg();
            i += 1;
        }
        Self(exps)
    }

    pub const fn divide(self, other: Self) -> Self {
        self.multiply(other.recip())
    }

    pub const fn pow(self, n: i32) -> Self {
        let mut exps = [Exponent::ZERO; BASE_DIMENSION_COUNT];
        let mut i = 0;
        while i < BASE_DIMENSION_COUNT {
            exps[i] = self.0[i].scale(n);
            i += 1;
        }
        Self(exps)
    }

    /// Exponents are rational, so roots are always exact: the square root of
    /// frequency^-1 is frequency^(-1/2), as in amplitude spectral density.
    pub const fn root(self, n: u32) -> Self {
        assert!(n > 0, "root degree must be positive");
        let mut exps = [Exponent::ZERO; BASE_DIMENSION_COUNT];
        let mut i = 0;
        while i < BASE_DIMENSION_COUNT {
            exps[i] = self.0[i].div(n as i32);
            i += 1;
        }
        Self(exps)
    }

    pub const fn is_dimensionless(self) -> bool {
        let mut i = 0;
        while i < BASE_DIMENSION_COUNT {
            if !self.0[i].is_zero() {
                return false;
            }
            i += 1;
        }
        true
    }

    pub const fn equivalent(self, other: Self) -> bool {
        let mut i = 0;
        while i < BASE_DIMENSION_COUNT {
            if !self.0[i].eq_const(other.0[i]) {
                return false;
            }
            i += 1;
        }
        true
    }
}

/// A physical dimension known at compile time. Implementors are zero-sized
/// markers; all structure lives in the `EXPONENTS` constant, which the
/// compositor types below combine by exact const arithmetic.
pub trait Dimension: Copy + Clone + Debug + Default + Eq + PartialEq + 'static {
    const EXPONENTS: DimExponents;
    const DIM_NAME: &'static str;
}

/// The dimension of `Da · Db`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Prod<Da, Db>(PhantomData<(Da, Db)>);

impl<Da: Dimension, Db: Dimension> Dimension for Prod<Da, Db> {
    const EXPONENTS: DimExponents = Da::EXPONENTS.multiply(Db::EXPONENTS);
    const DIM_NAME: &'static str = "derived product";
}

/// The dimension of `Da / Db`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Quot<Da, Db>(PhantomData<(Da, Db)>);

impl<Da: Dimension, Db: Dimension> Dimension for Quot<Da, Db> {
    const EXPONENTS: DimExponents = Da::EXPONENTS.divide(Db::EXPONENTS);
    const DIM_NAME: &'static str = "derived quotient";
}

/// The dimension of `D^N`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DimPow<D, const N: i32>(PhantomData<D>);

impl<D: Dimension, const N: i32> Dimension for DimPow<D, N> {
    const EXPONENTS: DimExponents = D::EXPONENTS.pow(N);
    const DIM_NAME: &'static str = "derived power";
}

/// The dimension of the N-th root of `D`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DimRoot<D, const N: u32>(PhantomData<D>);

impl<D: Dimension, const N: u32> Dimension for DimRoot<D, N> {
    const EXPONENTS: DimExponents = D::EXPONENTS.root(N);
    const DIM_NAME: &'static str = "derived root";
}

/// Const-evaluated witness that two dimension types are equivalent. Casting
/// between structurally different compositions of the same dimension (for
/// example momentum·speed and energy) forces `CHECK`, so a mismatch is a
/// build-time diagnostic with no runtime fallback.
pub struct SameDimension<A, B>(PhantomData<(A, B)>);

impl<A: Dimension, B: Dimension> SameDimension<A, B> {
    pub const CHECK: () = assert!(
        A::EXPONENTS.equivalent(B::EXPONENTS),
        "quantities have non-equivalent dimensions"
    );
}
