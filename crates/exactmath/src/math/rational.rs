//! Fixed-width rational numbers kept in lowest terms.
//!
//! Every arithmetic result is reduced. Intermediates are widened to `i128`
//! so the common denominator and cross products cannot overflow before the
//! gcd is divided out; only a reduced result that does not fit in
//! `Integer`/`Natural` is an overflow.
//!
//! Inverting zero follows a soft-failure policy: the value becomes
//! [`Rational::INFINITY`] and a warning is logged. An operator result that
//! does not fit saturates to [`Rational::INFINITY`] or
//! [`Rational::NEG_INFINITY`] by its sign, also with a warning. The `try_*`
//! and `checked_*` methods report the same conditions as [`MathError`]
//! instead.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::config::ZeroDivisionPolicy;
use crate::error::MathError;
use crate::math::scalar::{gcd, lcm};
use crate::math::{Integer, Natural, Real};

type Wide = i128;

/// A fraction `numerator / denominator` with the sign held by the numerator.
///
/// Equality is structural: `2/4` and `1/2` compare unequal until reduced.
/// Every operator reduces its result, so values produced by arithmetic are
/// always comparable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRational", into = "RawRational")]
pub struct Rational {
    numerator: Integer,
    denominator: Natural,
}

#[derive(Serialize, Deserialize)]
struct RawRational {
    numerator: Integer,
    denominator: Natural,
}

impl Rational {
    /// Result of inverting zero.
    pub const INFINITY: Rational = Rational {
        numerator: Integer::MAX,
        denominator: 1,
    };

    /// Saturated result of an operator that overflowed below `-Integer::MAX`.
    pub const NEG_INFINITY: Rational = Rational {
        numerator: -Integer::MAX,
        denominator: 1,
    };

    /// Builds `numerator / denominator` as given, without reducing.
    ///
    /// A zero denominator is logged and yields [`Rational::INFINITY`];
    /// use [`Rational::try_new`] to reject it instead.
    pub fn new(numerator: Integer, denominator: Natural) -> Self {
        if denominator == 0 {
            log::warn!(
                "Division by zero: {}/0 replaced with {}",
                numerator,
                Rational::INFINITY
            );
            return Rational::INFINITY;
        }
        Self {
            numerator,
            denominator,
        }
    }

    pub fn try_new(numerator: Integer, denominator: Natural) -> Result<Self, MathError> {
        if denominator == 0 {
            return Err(MathError::ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numer(&self) -> Integer {
        self.numerator
    }

    pub fn denom(&self) -> Natural {
        self.denominator
    }

    /// True for either saturated sentinel.
    pub fn is_infinite(&self) -> bool {
        *self == Rational::INFINITY || *self == Rational::NEG_INFINITY
    }

    /// Overwrites both fields from a raw pair without reducing.
    pub fn set(&mut self, numerator: Integer, denominator: Natural) {
        *self = Rational::new(numerator, denominator);
    }

    /// Divides numerator and denominator by their gcd.
    ///
    /// A zero numerator always ends up as `0/1`.
    pub fn reduce(&mut self) {
        // The gcd of two values in range can only shrink them.
        let g = gcd(Wide::from(self.numerator), Wide::from(self.denominator)).abs();
        self.numerator = (Wide::from(self.numerator) / g) as Integer;
        self.denominator = (Wide::from(self.denominator) / g) as Natural;
    }

    /// Replaces the value with its reciprocal, `-3/4` becoming `-4/3`.
    ///
    /// Inverting zero logs a division-by-zero warning and leaves
    /// [`Rational::INFINITY`] in place. The result is not reduced.
    pub fn invert(&mut self) {
        // Saturation already logged and replaced the value; nothing to propagate.
        let _ = self.invert_with(ZeroDivisionPolicy::Saturate);
    }

    /// Like [`Rational::invert`], but leaves the value untouched and returns
    /// `MathError::DivisionByZero` when it is zero.
    pub fn try_invert(&mut self) -> Result<(), MathError> {
        self.invert_with(ZeroDivisionPolicy::Reject)
    }

    /// Inverts in place, handling a zero value according to `policy`.
    ///
    /// The error is returned under both policies; with
    /// `ZeroDivisionPolicy::Saturate` the value has already been replaced by
    /// [`Rational::INFINITY`] when it comes back. A denominator above
    /// `Integer::MAX` cannot become a numerator and is reported as
    /// `MathError::Overflow` the same way.
    pub fn invert_with(&mut self, policy: ZeroDivisionPolicy) -> Result<(), MathError> {
        let err = if self.numerator == 0 {
            MathError::DivisionByZero
        } else {
            match Integer::try_from(self.denominator) {
                Ok(magnitude) => {
                    let numerator = if self.numerator < 0 {
                        -magnitude
                    } else {
                        magnitude
                    };
                    self.denominator = self.numerator.unsigned_abs();
                    self.numerator = numerator;
                    return Ok(());
                }
                Err(_) => MathError::Overflow,
            }
        };

        if policy == ZeroDivisionPolicy::Saturate {
            log::warn!("{} inverting {}", err, self);
            *self = Rational::INFINITY;
        }
        Err(err)
    }

    /// The reciprocal as a new value; see [`Rational::invert`].
    pub fn recip(&self) -> Rational {
        let mut inverse = *self;
        inverse.invert();
        inverse
    }

    /// Floating-point value, exact only up to `f64` precision.
    pub fn to_real(&self) -> Real {
        Real::from(self.numerator) / Real::from(self.denominator)
    }

    pub fn checked_add(self, rhs: Rational) -> Result<Rational, MathError> {
        let (numerator, denominator) = self.common_parts(rhs, false);
        Self::reduced(numerator, denominator)
    }

    pub fn checked_sub(self, rhs: Rational) -> Result<Rational, MathError> {
        let (numerator, denominator) = self.common_parts(rhs, true);
        Self::reduced(numerator, denominator)
    }

    pub fn checked_mul(self, rhs: Rational) -> Result<Rational, MathError> {
        let (numerator, denominator) = self.product_parts(rhs);
        Self::reduced(numerator, denominator)
    }

    /// `self * rhs⁻¹`, failing on a zero divisor instead of saturating.
    pub fn checked_div(self, rhs: Rational) -> Result<Rational, MathError> {
        let (numerator, denominator) = self
            .quotient_parts(rhs)
            .ok_or(MathError::DivisionByZero)?;
        Self::reduced(numerator, denominator)
    }

    /// Division that handles a zero divisor according to `policy`.
    pub fn div_with(self, rhs: Rational, policy: ZeroDivisionPolicy) -> Result<Rational, MathError> {
        match policy {
            ZeroDivisionPolicy::Saturate => Ok(self / rhs),
            ZeroDivisionPolicy::Reject => self.checked_div(rhs),
        }
    }

    /// Numerators rescaled to `lcm(d1, d2)` and combined.
    fn common_parts(self, rhs: Rational, subtract: bool) -> (Wide, Wide) {
        let lhs_denominator = Wide::from(self.denominator);
        let rhs_denominator = Wide::from(rhs.denominator);
        let common_denominator = lcm(lhs_denominator, rhs_denominator);
        let lhs_numerator = common_denominator / lhs_denominator * Wide::from(self.numerator);
        let rhs_numerator = common_denominator / rhs_denominator * Wide::from(rhs.numerator);
        let numerator = if subtract {
            lhs_numerator - rhs_numerator
        } else {
            lhs_numerator + rhs_numerator
        };
        (numerator, common_denominator)
    }

    fn product_parts(self, rhs: Rational) -> (Wide, Wide) {
        (
            Wide::from(self.numerator) * Wide::from(rhs.numerator),
            Wide::from(self.denominator) * Wide::from(rhs.denominator),
        )
    }

    /// `(n1 * d2 * sign(n2), d1 * |n2|)`, or `None` for a zero divisor.
    ///
    /// The divisor is never inverted in its own 32-bit fields, so a divisor
    /// whose denominator exceeds `Integer::MAX` still divides exactly.
    fn quotient_parts(self, rhs: Rational) -> Option<(Wide, Wide)> {
        if rhs.numerator == 0 {
            return None;
        }
        let numerator = Wide::from(self.numerator) * Wide::from(rhs.denominator);
        let numerator = if rhs.numerator < 0 { -numerator } else { numerator };
        let denominator = Wide::from(self.denominator) * Wide::from(rhs.numerator.unsigned_abs());
        Some((numerator, denominator))
    }

    /// Reduces a widened fraction (denominator > 0) and narrows it back.
    fn reduced(numerator: Wide, denominator: Wide) -> Result<Rational, MathError> {
        let g = gcd(numerator, denominator).abs();
        let numerator = Integer::try_from(numerator / g).map_err(|_| MathError::Overflow)?;
        let denominator = Natural::try_from(denominator / g).map_err(|_| MathError::Overflow)?;
        Ok(Rational {
            numerator,
            denominator,
        })
    }

    /// Operator path: reduces, saturating by sign when the result does not fit.
    fn settle((numerator, denominator): (Wide, Wide), op: &str) -> Rational {
        Self::reduced(numerator, denominator).unwrap_or_else(|err| {
            let saturated = if numerator < 0 {
                Rational::NEG_INFINITY
            } else {
                Rational::INFINITY
            };
            log::warn!("{} in rational {}, substituting {}", err, op, saturated);
            saturated
        })
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational {
            numerator: 0,
            denominator: 1,
        }
    }
}

impl From<(Integer, Natural)> for Rational {
    fn from((numerator, denominator): (Integer, Natural)) -> Self {
        Rational::new(numerator, denominator)
    }
}

impl From<Integer> for Rational {
    fn from(value: Integer) -> Self {
        Rational {
            numerator: value,
            denominator: 1,
        }
    }
}

impl TryFrom<RawRational> for Rational {
    type Error = MathError;

    fn try_from(raw: RawRational) -> Result<Self, Self::Error> {
        Rational::try_new(raw.numerator, raw.denominator)
    }
}

impl From<Rational> for RawRational {
    fn from(value: Rational) -> Self {
        RawRational {
            numerator: value.numerator,
            denominator: value.denominator,
        }
    }
}

impl<R: Into<Rational>> Add<R> for Rational {
    type Output = Rational;

    fn add(self, rhs: R) -> Rational {
        Rational::settle(self.common_parts(rhs.into(), false), "addition")
    }
}

impl<R: Into<Rational>> Sub<R> for Rational {
    type Output = Rational;

    fn sub(self, rhs: R) -> Rational {
        Rational::settle(self.common_parts(rhs.into(), true), "subtraction")
    }
}

impl<R: Into<Rational>> Mul<R> for Rational {
    type Output = Rational;

    fn mul(self, rhs: R) -> Rational {
        Rational::settle(self.product_parts(rhs.into()), "multiplication")
    }
}

impl<R: Into<Rational>> Div<R> for Rational {
    type Output = Rational;

    /// Multiplies by the inverse of `rhs`; a zero divisor goes through
    /// [`Rational::invert`] and becomes [`Rational::INFINITY`] first.
    fn div(self, rhs: R) -> Rational {
        let divisor: Rational = rhs.into();
        match self.quotient_parts(divisor) {
            Some(parts) => Rational::settle(parts, "division"),
            None => self * divisor.recip(),
        }
    }
}

impl<R: Into<Rational>> AddAssign<R> for Rational {
    fn add_assign(&mut self, rhs: R) {
        *self = *self + rhs;
    }
}

impl<R: Into<Rational>> SubAssign<R> for Rational {
    fn sub_assign(&mut self, rhs: R) {
        *self = *self - rhs;
    }
}

impl<R: Into<Rational>> MulAssign<R> for Rational {
    fn mul_assign(&mut self, rhs: R) {
        *self = *self * rhs;
    }
}

impl<R: Into<Rational>> DivAssign<R> for Rational {
    fn div_assign(&mut self, rhs: R) {
        *self = *self / rhs;
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational::settle(
            (-Wide::from(self.numerator), Wide::from(self.denominator)),
            "negation",
        )
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::default()
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::from(1)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Rational {
    type Err = MathError;

    /// Parses `"N/D"` or `"N"` as given, without reducing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let malformed = || MathError::Parse(s.to_string());
        match s.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator = numerator.trim().parse::<Integer>().map_err(|_| malformed())?;
                let denominator = denominator
                    .trim()
                    .parse::<Natural>()
                    .map_err(|_| malformed())?;
                Rational::try_new(numerator, denominator)
            }
            None => s.parse::<Integer>().map(Rational::from).map_err(|_| malformed()),
        }
    }
}
