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

/// A rational exponent over a base dimension.
///
/// Always stored in lowest terms with a positive denominator, so two equal
/// exponents are also structurally equal and the derived `PartialEq` is the
/// mathematical one. All arithmetic is exact and usable in const context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Exponent {
    num: i32,
    den: i32,
}

const fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Exponent {
    pub const ZERO: Self = Self { num: 0, den: 1 };
    pub const ONE: Self = Self { num: 1, den: 1 };

    pub const fn new(num: i32, den: i32) -> Self {
        assert!(den != 0, "exponent denominator must be nonzero");
        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        let mag = if num < 0 { -num } else { num };
        let g = gcd(mag, den);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    pub const fn integer(num: i32) -> Self {
        Self { num, den: 1 }
    }

    pub const fn numerator(self) -> i32 {
        self.num
    }

    pub const fn denominator(self) -> i32 {
        self.den
    }

    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    pub const fn add(self, other: Self) -> Self {
        Self::new(
            self.num * other.den + other.num * self.den,
            self.den * other.den,
        )
    }

    pub const fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }

    /// Multiply by an integer (dimension `pow`).
    pub const fn scale(self, n: i32) -> Self {
        Self::new(self.num * n, self.den)
    }

    /// Divide by a nonzero integer (dimension `root`). Always exact on
    /// rationals: length^1 rooted twice is length^(1/2).
    pub const fn div(self, n: i32) -> Self {
        assert!(n != 0, "exponent root degree must be nonzero");
        Self::new(self.num, self.den * n)
    }

    // PartialEq is not const-callable; dimension equivalence needs this.
    pub const fn eq_const(self, other: Self) -> bool {
        self.num == other.num && self.den == other.den
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reduction() {
        assert_eq!(Exponent::new(2, 4), Exponent::new(1, 2));
        assert_eq!(Exponent::new(-2, -4), Exponent::new(1, 2));
        assert_eq!(Exponent::new(2, -4), Exponent::new(-1, 2));
        assert_eq!(Exponent::new(0, 7), Exponent::ZERO);
    }

    #[test]
    fn test_arithmetic() {
        let half = Exponent::new(1, 2);
        assert_eq!(half.add(half), Exponent::ONE);
        assert_eq!(Exponent::ONE.add(Exponent::ONE.neg()), Exponent::ZERO);
        assert_eq!(Exponent::new(-1, 2).scale(2), Exponent::integer(-1));
        assert_eq!(Exponent::integer(-1).div(2), Exponent::new(-1, 2));
    }

    #[test]
    #[should_panic]
    fn test_zero_denominator() {
        let _ = Exponent::new(1, 0);
    }
}
