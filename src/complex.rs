use std::fmt;

use crate::{rational::Rational, ArithError, ArithResult};

type Complex = num_complex::Complex64;

/// The attributes every complex representation can produce, natively or by
/// conversion.
pub trait ComplexParts {
    fn real(&self) -> f64;
    fn imag(&self) -> f64;
    fn magnitude(&self) -> f64;
    fn angle(&self) -> f64;

    fn to_complex64(&self) -> Complex {
        Complex::new(self.real(), self.imag())
    }

    /// Compares real and imaginary parts within `eps`.
    fn approx_eq(&self, other: &dyn ComplexParts, eps: f64) -> bool {
        (self.real() - other.real()).abs() <= eps && (self.imag() - other.imag()).abs() <= eps
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComplexRectangular {
    pub real: f64,
    pub imag: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComplexPolar {
    pub magnitude: f64,
    pub angle: f64,
}

impl ComplexRectangular {
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    pub fn to_polar(&self) -> ComplexPolar {
        let (magnitude, angle) = self.to_complex64().to_polar();
        ComplexPolar { magnitude, angle }
    }

    pub fn repr(&self) -> String {
        format!("ComplexRectangular({:?}, {:?})", self.real, self.imag)
    }
}

impl ComplexPolar {
    pub fn new(magnitude: f64, angle: f64) -> Self {
        Self { magnitude, angle }
    }

    pub fn to_rectangular(&self) -> ComplexRectangular {
        let z = Complex::from_polar(self.magnitude, self.angle);
        ComplexRectangular { real: z.re, imag: z.im }
    }

    pub fn repr(&self) -> String {
        format!("ComplexPolar({:?}, {:?})", self.magnitude, self.angle)
    }
}

impl ComplexParts for ComplexRectangular {
    fn real(&self) -> f64 { self.real }
    fn imag(&self) -> f64 { self.imag }
    fn magnitude(&self) -> f64 { self.to_complex64().norm() }
    fn angle(&self) -> f64 { self.imag.atan2(self.real) }
}

impl ComplexParts for ComplexPolar {
    fn real(&self) -> f64 { self.magnitude * self.angle.cos() }
    fn imag(&self) -> f64 { self.magnitude * self.angle.sin() }
    fn magnitude(&self) -> f64 { self.magnitude }
    fn angle(&self) -> f64 { self.angle }
}

impl From<ComplexPolar> for ComplexRectangular {
    fn from(z: ComplexPolar) -> Self {
        z.to_rectangular()
    }
}

impl From<ComplexRectangular> for ComplexPolar {
    fn from(z: ComplexRectangular) -> Self {
        z.to_polar()
    }
}

impl fmt::Display for ComplexRectangular {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_complex64())
    }
}

impl fmt::Display for ComplexPolar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}∠{}", self.magnitude, self.angle)
    }
}

//
// Same-family arithmetic. Sums and differences come back rectangular,
// products and quotients come back polar.
//

pub fn add_complex<A, B>(z1: &A, z2: &B) -> ComplexRectangular
where A: ComplexParts + ?Sized, B: ComplexParts + ?Sized {
    ComplexRectangular::new(z1.real() + z2.real(), z1.imag() + z2.imag())
}

pub fn sub_complex<A, B>(z1: &A, z2: &B) -> ComplexRectangular
where A: ComplexParts + ?Sized, B: ComplexParts + ?Sized {
    ComplexRectangular::new(z1.real() - z2.real(), z1.imag() - z2.imag())
}

pub fn mul_complex<A, B>(z1: &A, z2: &B) -> ComplexPolar
where A: ComplexParts + ?Sized, B: ComplexParts + ?Sized {
    ComplexPolar::new(z1.magnitude() * z2.magnitude(), z1.angle() + z2.angle())
}

pub fn div_complex<A, B>(z1: &A, z2: &B) -> ArithResult<ComplexPolar>
where A: ComplexParts + ?Sized, B: ComplexParts + ?Sized {
    let m = z2.magnitude();
    if m == 0.0 {
        return Err(ArithError::DivisionByZero)
    }
    Ok(ComplexPolar::new(z1.magnitude() / m, z1.angle() - z2.angle()))
}

//
// Cross-family arithmetic, used by the pairwise operation table
//

pub fn add_complex_and_rational<Z>(z: &Z, r: &Rational) -> ArithResult<ComplexRectangular>
where Z: ComplexParts + ?Sized {
    Ok(ComplexRectangular::new(z.real() + r.to_f64()?, z.imag()))
}

pub fn sub_complex_and_rational<Z>(z: &Z, r: &Rational) -> ArithResult<ComplexRectangular>
where Z: ComplexParts + ?Sized {
    Ok(ComplexRectangular::new(z.real() - r.to_f64()?, z.imag()))
}

pub fn mul_complex_and_rational<Z>(z: &Z, r: &Rational) -> ArithResult<ComplexPolar>
where Z: ComplexParts + ?Sized {
    Ok(ComplexPolar::new(z.magnitude() * r.to_f64()?, z.angle()))
}

pub fn add_rational_and_complex<Z>(r: &Rational, z: &Z) -> ArithResult<ComplexRectangular>
where Z: ComplexParts + ?Sized {
    add_complex_and_rational(z, r)
}

pub fn sub_rational_and_complex<Z>(r: &Rational, z: &Z) -> ArithResult<ComplexRectangular>
where Z: ComplexParts + ?Sized {
    Ok(ComplexRectangular::new(r.to_f64()? - z.real(), -z.imag()))
}

pub fn mul_rational_and_complex<Z>(r: &Rational, z: &Z) -> ArithResult<ComplexPolar>
where Z: ComplexParts + ?Sized {
    mul_complex_and_rational(z, r)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{PI, FRAC_PI_2};

    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn derived_attributes() {
        let z = ComplexRectangular::new(3.0, 4.0);
        assert_eq!(z.magnitude(), 5.0);
        assert_eq!(z.angle(), 4f64.atan2(3.0));

        let w = ComplexPolar::new(2.0, FRAC_PI_2);
        assert!(w.real().abs() < EPS);
        assert!((w.imag() - 2.0).abs() < EPS);
    }

    #[test]
    fn representation_round_trip() {
        for &(re, im) in &[(1.0, 2.0), (-3.5, 0.25), (0.0, -1.0), (-2.0, -7.0)] {
            let z = ComplexRectangular::new(re, im);
            let back = ComplexPolar::new(z.magnitude(), z.angle()).to_rectangular();
            assert!(back.approx_eq(&z, EPS), "{:?} -> {:?}", z, back);
        }
    }

    #[test]
    fn angle_is_in_half_open_range() {
        let z = ComplexRectangular::new(-1.0, 0.0);
        assert_eq!(z.angle(), PI);
    }

    #[test]
    fn add_mixed_representations() {
        let sum = add_complex(&ComplexRectangular::new(1.0, 2.0), &ComplexPolar::new(2.0, FRAC_PI_2));
        assert!(sum.approx_eq(&ComplexRectangular::new(1.0, 4.0), EPS));
    }

    #[test]
    fn sub_takes_difference_of_both_parts() {
        let diff = sub_complex(&ComplexRectangular::new(1.0, 2.0), &ComplexRectangular::new(4.0, 5.0));
        assert_eq!(diff, ComplexRectangular::new(-3.0, -3.0));
    }

    #[test]
    fn i_squared() {
        let i = ComplexRectangular::new(0.0, 1.0);
        let product = mul_complex(&i, &i);
        assert_eq!(product, ComplexPolar::new(1.0, PI));
        assert!(product.approx_eq(&ComplexRectangular::new(-1.0, 0.0), EPS));
    }

    #[test]
    fn division() {
        let q = div_complex(&ComplexPolar::new(6.0, 1.0), &ComplexPolar::new(2.0, 0.25)).unwrap();
        assert_eq!(q, ComplexPolar::new(3.0, 0.75));
        let zero = ComplexRectangular::new(0.0, 0.0);
        assert_eq!(div_complex(&q, &zero), Err(ArithError::DivisionByZero));
    }

    #[test]
    fn cross_family() {
        let z = ComplexRectangular::new(1.0, 2.0);
        let r = Rational::new(1, 2).unwrap();
        assert_eq!(add_complex_and_rational(&z, &r), Ok(ComplexRectangular::new(1.5, 2.0)));
        assert_eq!(sub_complex_and_rational(&z, &r), Ok(ComplexRectangular::new(0.5, 2.0)));
        assert_eq!(sub_rational_and_complex(&r, &z), Ok(ComplexRectangular::new(-0.5, -2.0)));
        assert_eq!(add_rational_and_complex(&r, &z), add_complex_and_rational(&z, &r));

        let p = mul_rational_and_complex(&r, &ComplexPolar::new(10.0, 1.0)).unwrap();
        assert_eq!(p, ComplexPolar::new(5.0, 1.0));
    }

    #[test]
    fn formatting() {
        assert_eq!(ComplexRectangular::new(1.0, 4.0).repr(), "ComplexRectangular(1.0, 4.0)");
        assert_eq!(ComplexPolar::new(1.0, 0.5).repr(), "ComplexPolar(1.0, 0.5)");
        assert_eq!(ComplexRectangular::new(1.0, -4.0).to_string(), "1-4i");
        assert_eq!(ComplexPolar::new(2.0, 0.5).to_string(), "2∠0.5");
    }
}
