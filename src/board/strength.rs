//! Fixed-point push strength.
//!
//! Strength is counted in hundredths so that sums over two or three
//! mountains stay exact: one pusher is `100`, one mountain resists with
//! `67`. Two mountains (134) outweigh one pusher, three (201) outweigh two.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Neg};

/// Signed push contribution in hundredths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Strength(i32);

impl Strength {
    pub const ZERO: Strength = Strength(0);

    /// One piece facing along the push axis.
    pub const UNIT: Strength = Strength(100);

    /// Magnitude of a mountain's resistance.
    pub const MOUNTAIN: Strength = Strength(67);

    #[must_use]
    pub const fn from_hundredths(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn hundredths(self) -> i32 {
        self.0
    }

    /// `self` with the sign of `sign` applied (`sign` is +1 or -1).
    #[must_use]
    pub const fn signed(self, sign: i32) -> Self {
        Self(self.0 * sign)
    }

    /// -1, 0 or +1.
    #[must_use]
    pub const fn signum(self) -> i32 {
        self.0.signum()
    }
}

impl Add for Strength {
    type Output = Strength;

    fn add(self, rhs: Strength) -> Strength {
        Strength(self.0 + rhs.0)
    }
}

impl Neg for Strength {
    type Output = Strength;

    fn neg(self) -> Strength {
        Strength(-self.0)
    }
}

impl Sum for Strength {
    fn sum<I: Iterator<Item = Strength>>(iter: I) -> Strength {
        iter.fold(Strength::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Strength> for Strength {
    fn sum<I: Iterator<Item = &'a Strength>>(iter: I) -> Strength {
        iter.copied().sum()
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
