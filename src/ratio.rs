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
use std::f64::consts::PI;

/// The exact scale factor between a unit and its dimension's coherent unit:
///
/// ```text
/// value = num / den · 10^exp10 · π^pi
/// ```
///
/// `num/den` is kept reduced with a positive denominator and with powers of
/// ten normalized into `exp10`, which keeps products of very small and very
/// large unit scales (GeV², natural-unit momenta) inside `i128`. The π power
/// carries irrational angle conversions symbolically; `to_f64` is the only
/// place a ratio ever becomes floating point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ratio {
    num: i128,
    den: i128,
    exp10: i32,
    pi: i32,
}

const fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

const fn checked_pow(base: i128, n: u32) -> Option<i128> {
    let mut r: i128 = 1;
    let mut i = 0;
    while i < n {
        match r.checked_mul(base) {
            Some(x) => r = x,
            None => return None,
        }
        i += 1;
    }
    Some(r)
}

/// Exact integer n-th root, or `None` when `v` is not a perfect n-th power.
const fn exact_root(v: i128, n: u32) -> Option<i128> {
    if v < 0 {
        if n % 2 == 0 {
            return None;
        }
        return match exact_root(-v, n) {
            Some(r) => Some(-r),
            None => None,
        };
    }
    let mut hi: i128 = 1;
    loop {
        match checked_pow(hi, n) {
            Some(p) if p >= v => break,
            Some(_) => hi *= 2,
            None => break,
        }
    }
    let mut lo: i128 = 0;
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        match checked_pow(mid, n) {
            Some(p) if p <= v => lo = mid,
            _ => hi = mid - 1,
        }
    }
    match checked_pow(lo, n) {
        Some(p) if p == v => Some(lo),
        _ => None,
    }
}

impl Ratio {
    pub const ONE: Self = Self {
        num: 1,
        den: 1,
        exp10: 0,
        pi: 0,
    };

    const fn normalize(num: i128, den: i128, exp10: i32, pi: i32) -> Self {
        assert!(num != 0, "unit scale factor must be nonzero");
        assert!(den != 0, "unit scale denominator must be nonzero");
        let (mut num, mut den) = if den < 0 { (-num, -den) } else { (num, den) };
        let mag = if num < 0 { -num } else { num };
        let g = gcd(mag, den);
        num /= g;
        den /= g;
        let mut exp10 = exp10;
        while num % 10 == 0 {
            num /= 10;
            exp10 += 1;
        }
        while den % 10 == 0 {
            den /= 10;
            exp10 -= 1;
        }
        Self {
            num,
            den,
            exp10,
            pi,
        }
    }

    pub const fn int(n: i128) -> Self {
        Self::normalize(n, 1, 0, 0)
    }

    pub const fn rational(num: i128, den: i128) -> Self {
        Self::normalize(num, den, 0, 0)
    }

    pub const fn pow10(exp10: i32) -> Self {
        Self {
            num: 1,
            den: 1,
            exp10,
            pi: 0,
        }
    }

    pub const fn pi_power(pi: i32) -> Self {
        Self {
            num: 1,
            den: 1,
            exp10: 0,
            pi,
        }
    }

    pub const fn mul(self, other: Self) -> Self {
        // Cross-reduce before multiplying so intermediate products stay small.
        let sm = if self.num < 0 { -self.num } else { self.num };
        let om = if other.num < 0 { -other.num } else { other.num };
        let g1 = gcd(sm, other.den);
        let g2 = gcd(om, self.den);
        Self::normalize(
            (self.num / g1) * (other.num / g2),
            (self.den / g2) * (other.den / g1),
            self.exp10 + other.exp10,
            self.pi + other.pi,
        )
    }

    pub const fn inverse(self) -> Self {
        Self::normalize(self.den, self.num, -self.exp10, -self.pi)
    }

    pub const fn div(self, other: Self) -> Self {
        self.mul(other.inverse())
    }

    pub const fn pow(self, n: i32) -> Self {
        if n < 0 {
            return self.inverse().pow(-n);
        }
        let mut r = Self::ONE;
        let mut i = 0;
        while i < n {
            r = r.mul(self);
            i += 1;
        }
        r
    }

    /// Exact n-th root. Ill-formed roots (a scale that is not a perfect n-th
    /// power, or a π or ten power not divisible by n) fail during const
    /// evaluation, so misuse is a build-time diagnostic.
    pub const fn root(self, n: u32) -> Self {
        assert!(n > 0, "root degree must be positive");
        if n == 1 {
            return self;
        }
        assert!(
            self.pi % n as i32 == 0,
            "unit scale factor has no exact root: π power not divisible"
        );
        // Fold the remainder of the ten's exponent back into the fraction.
        let rem = self.exp10.rem_euclid(n as i32);
        let num = match checked_pow(10, rem as u32) {
            Some(p) => self.num * p,
            None => panic!("unit scale factor overflow"),
        };
        let exp10 = self.exp10 - rem;
        let num_root = match exact_root(num, n) {
            Some(r) => r,
            None => panic!("unit scale factor has no exact root"),
        };
        let den_root = match exact_root(self.den, n) {
            Some(r) => r,
            None => panic!("unit scale factor has no exact root"),
        };
        Self::normalize(num_root, den_root, exp10 / n as i32, self.pi / n as i32)
    }

    pub const fn is_one(self) -> bool {
        self.num == 1 && self.den == 1 && self.exp10 == 0 && self.pi == 0
    }

    /// True when multiplying by this ratio cannot lose integer precision.
    pub const fn is_integer(self) -> bool {
        self.den == 1 && self.exp10 >= 0 && self.pi == 0
    }

    pub const fn eq_const(self, other: Self) -> bool {
        self.num == other.num
            && self.den == other.den
            && self.exp10 == other.exp10
            && self.pi == other.pi
    }

    /// The single exit into floating point, used for final numeric scaling.
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64 * 10f64.powi(self.exp10) * PI.powi(self.pi)
    }

    /// Split into the factor pair `(for_lhs, for_rhs)` such that comparing
    /// `lhs · for_lhs` against `rhs · for_rhs` is equivalent to comparing
    /// `lhs` against `rhs · self`. Each side is an integer (times π for
    /// angular ratios), so integral representations scale without
    /// truncation.
    pub fn cross_factors(self) -> (f64, f64) {
        let mut for_lhs = self.den as f64;
        let mut for_rhs = self.num as f64;
        if self.exp10 >= 0 {
            for_rhs *= 10f64.powi(self.exp10);
        } else {
            for_lhs *= 10f64.powi(-self.exp10);
        }
        if self.pi >= 0 {
            for_rhs *= PI.powi(self.pi);
        } else {
            for_lhs *= PI.powi(-self.pi);
        }
        (for_lhs, for_rhs)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalization() {
        assert!(Ratio::int(1000).eq_const(Ratio::pow10(3)));
        assert!(Ratio::rational(1, 20).eq_const(Ratio::rational(5, 100)));
        assert!(Ratio::rational(3048, 10_000).eq_const(Ratio::rational(381, 1250).mul(Ratio::ONE)));
    }

    #[test]
    fn test_exact_products() {
        let km = Ratio::int(1000);
        let mm = Ratio::pow10(-3);
        assert!(km.mul(mm).is_one());
        assert!(km.div(km).is_one());
        assert!(km.pow(2).eq_const(Ratio::pow10(6)));
        assert!(km.pow(-1).eq_const(mm));
    }

    #[test]
    fn test_exact_roots() {
        assert!(Ratio::int(1_000_000).root(2).eq_const(Ratio::int(1000)));
        assert!(Ratio::rational(9, 4).root(2).eq_const(Ratio::rational(3, 2)));
        assert!(Ratio::pi_power(2).root(2).eq_const(Ratio::pi_power(1)));
        let gev = Ratio::int(1_602_176_634).mul(Ratio::pow10(-19));
        assert!(gev.pow(2).root(2).eq_const(gev));
    }

    #[test]
    fn test_pi_factor() {
        let deg = Ratio::rational(1, 180).mul(Ratio::pi_power(1));
        assert_abs_diff_eq!(deg.to_f64() * 180.0, PI, epsilon = 1e-12);
        assert!(deg.div(deg).is_one());
    }

    #[test]
    fn test_cross_factors() {
        let metre_in_feet = Ratio::rational(10_000, 3048);
        let (for_lhs, for_rhs) = metre_in_feet.cross_factors();
        assert_abs_diff_eq!(for_lhs, 381.0);
        assert_abs_diff_eq!(for_rhs, 1250.0);
        let (for_lhs, for_rhs) = Ratio::pow10(-3).cross_factors();
        assert_abs_diff_eq!(for_lhs, 1000.0);
        assert_abs_diff_eq!(for_rhs, 1.0);
    }

    #[test]
    fn test_integer_predicate() {
        assert!(Ratio::int(1000).is_integer());
        assert!(!Ratio::rational(1, 1000).is_integer());
        assert!(!Ratio::rational(1, 180).mul(Ratio::pi_power(1)).is_integer());
    }

    #[test]
    #[should_panic]
    fn test_inexact_root_rejected() {
        let _ = Ratio::int(1000).root(2);
    }
}
