use std::fmt;

use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::{ArithError, ArithResult};

type Ratio = num_rational::Ratio<i64>;

/// An exact fraction, always kept in lowest terms with a positive denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational(Ratio);

impl Rational {
    /// Reduces `numer / denom` by their greatest common divisor.
    pub fn new(numer: i64, denom: i64) -> ArithResult<Self> {
        if denom == 0 {
            return Err(ArithError::DivisionByZero)
        }
        // gcd would overflow on (0, MIN) and (MIN, MIN)
        if numer == 0 {
            return Ok(Self(Ratio::from_integer(0)))
        }
        if numer == denom {
            return Ok(Self(Ratio::from_integer(1)))
        }
        let g = numer.gcd(&denom);
        let (numer, denom) = (numer / g, denom / g);
        if denom > 0 {
            return Ok(Self(Ratio::new_raw(numer, denom)))
        }
        match (numer.checked_neg(), denom.checked_neg()) {
            (Some(n), Some(d)) => Ok(Self(Ratio::new_raw(n, d))),
            _ => Err(ArithError::Overflow),
        }
    }

    pub fn from_integer(n: i64) -> Self {
        Self(Ratio::from_integer(n))
    }

    pub fn numer(&self) -> i64 {
        *self.0.numer()
    }

    pub fn denom(&self) -> i64 {
        *self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn to_f64(&self) -> ArithResult<f64> {
        self.0.to_f64().ok_or(ArithError::RationalCast)
    }

    pub fn repr(&self) -> String {
        format!("Rational({}, {})", self.numer(), self.denom())
    }
}

macro_rules! rational_from {
    ($($kind:ty)*) => {
        $(
            impl From<$kind> for Rational {
                fn from(n: $kind) -> Self {
                    Self::from_integer(n.into())
                }
            }
        )*
    };
}

rational_from!(i8 i16 i32 i64 u8 u16 u32);

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer(), self.denom())
    }
}

fn mul(a: i64, b: i64) -> ArithResult<i64> {
    a.checked_mul(b).ok_or(ArithError::Overflow)
}

fn cross(x: &Rational, y: &Rational) -> ArithResult<(i64, i64, i64)> {
    Ok((mul(x.numer(), y.denom())?, mul(y.numer(), x.denom())?, mul(x.denom(), y.denom())?))
}

pub fn add_rational(x: &Rational, y: &Rational) -> ArithResult<Rational> {
    let (a, b, d) = cross(x, y)?;
    Rational::new(a.checked_add(b).ok_or(ArithError::Overflow)?, d)
}

pub fn sub_rational(x: &Rational, y: &Rational) -> ArithResult<Rational> {
    let (a, b, d) = cross(x, y)?;
    Rational::new(a.checked_sub(b).ok_or(ArithError::Overflow)?, d)
}

pub fn mul_rational(x: &Rational, y: &Rational) -> ArithResult<Rational> {
    Rational::new(mul(x.numer(), y.numer())?, mul(x.denom(), y.denom())?)
}

/// Fails with [`ArithError::DivisionByZero`] when `y` is zero.
pub fn div_rational(x: &Rational, y: &Rational) -> ArithResult<Rational> {
    Rational::new(mul(x.numer(), y.denom())?, mul(x.denom(), y.numer())?)
}
