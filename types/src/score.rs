//! Exact score arithmetic.
//!
//! Blended scores are quotients (`votes / states * percent`). Floating point
//! can make two mathematically equal totals compare unequal depending on the
//! order terms were summed, which would leak into tie-breaking. Scores are
//! therefore kept as reduced non-negative rationals.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// A non-negative rational score, always stored in lowest terms.
///
/// Serialize-only: every value is built through a constructor that reduces it.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Score {
    numerator: u128,
    denominator: u128,
}

impl Score {
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// A whole-number score.
    pub fn from_points(points: u64) -> Self {
        Self {
            numerator: u128::from(points),
            denominator: 1,
        }
    }

    /// `numerator / denominator`. Returns `None` for a zero denominator.
    pub fn ratio(numerator: u128, denominator: u128) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Some(Self::reduced(numerator, denominator))
    }

    /// `self * factor / divisor`. Returns `None` for a zero divisor or on overflow.
    pub fn scaled(self, factor: u64, divisor: u64) -> Option<Self> {
        if divisor == 0 {
            return None;
        }
        let numerator = self.numerator.checked_mul(u128::from(factor))?;
        let denominator = self.denominator.checked_mul(u128::from(divisor))?;
        Some(Self::reduced(numerator, denominator))
    }

    pub fn numerator(&self) -> u128 {
        self.numerator
    }

    pub fn denominator(&self) -> u128 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Lossy conversion for display and JSON output only.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    fn reduced(numerator: u128, denominator: u128) -> Self {
        let g = gcd(numerator, denominator);
        Self {
            numerator: numerator / g,
            denominator: denominator / g,
        }
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    // gcd(0, d) = d, and d > 0 for every stored denominator.
    a.max(1)
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Score {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        if self.denominator == rhs.denominator {
            return Self::reduced(self.numerator + rhs.numerator, self.denominator);
        }
        Self::reduced(
            self.numerator * rhs.denominator + rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numerator * other.denominator).cmp(&(other.numerator * self.denominator))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{:.4}", self.to_f64())
        }
    }
}
