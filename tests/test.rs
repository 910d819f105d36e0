#![cfg(test)]

use std::f64::consts::{PI, FRAC_PI_2};

use num_integer::Integer;

use tagnum::{
    ArithError, ArithResult, CoercionTable, ComplexParts, ComplexPolar, ComplexRectangular,
    Dispatcher, Kind, Op, OpTable, Rational, Value,
    add_complex, add_rational, apply, coerce_apply, declare_op, div_complex, mul_complex,
    mul_rational, type_tag,
};

const EPS: f64 = 1e-12;

fn rat(n: i64, d: i64) -> Value {
    Value::from(Rational::new(n, d).unwrap())
}

fn rect(re: f64, im: f64) -> Value {
    Value::from(ComplexRectangular::new(re, im))
}

fn polar(m: f64, a: f64) -> Value {
    Value::from(ComplexPolar::new(m, a))
}

#[test]
pub fn rationals_are_reduced() {
    for n in -12..=12i64 {
        for d in (-12..=12i64).filter(|d| *d != 0) {
            let r = Rational::new(n, d).unwrap();
            assert!(r.denom() > 0);
            assert_eq!(r.numer().gcd(&r.denom()), 1);
            assert_eq!(r.numer() * d, n * r.denom());
        }
    }
}

#[test]
pub fn family_functions() {
    let half = Rational::new(1, 2).unwrap();
    assert_eq!(add_rational(&Rational::new(3, 14).unwrap(), &Rational::new(2, 7).unwrap()), Ok(half));
    assert_eq!(
        mul_rational(&Rational::new(7, 10).unwrap(), &Rational::new(2, 7).unwrap()),
        Rational::new(1, 5)
    );

    let sum = add_complex(&ComplexRectangular::new(1.0, 2.0), &ComplexPolar::new(2.0, FRAC_PI_2));
    assert!(sum.approx_eq(&ComplexRectangular::new(1.0, 4.0), EPS));

    let i = ComplexRectangular::new(0.0, 1.0);
    assert_eq!(mul_complex(&i, &i), ComplexPolar::new(1.0, PI));
}

#[test]
pub fn operator_names_dispatch() {
    let op = Op::from_name("sub").unwrap();
    let diff = coerce_apply(op, &rect(1.0, 2.0), &rat(2, 3)).unwrap();
    assert!(diff.approx_eq(&rect(1.0 / 3.0, 2.0), EPS));
    assert_eq!(Op::from_name("mod"), Err(ArithError::UnknownOperator("mod".into())));
}

#[test]
pub fn result_representation_follows_operator() {
    let inputs = [rect(1.0, 2.0), polar(2.0, 0.5)];
    for x in &inputs {
        for y in &inputs {
            assert!(matches!(coerce_apply(Op::Add, x, y), Ok(Value::Rectangular(_))));
            assert!(matches!(coerce_apply(Op::Sub, x, y), Ok(Value::Rectangular(_))));
            assert!(matches!(coerce_apply(Op::Mul, x, y), Ok(Value::Polar(_))));
            assert!(matches!(coerce_apply(Op::Div, x, y), Ok(Value::Polar(_))));
        }
    }
}

#[test]
pub fn both_strategies_agree_where_defined() {
    let values = [rat(2, 3), rat(-5, 4), rect(1.0, 2.0), polar(3.0, -0.75)];
    for op in [Op::Add, Op::Sub, Op::Mul] {
        for x in &values {
            for y in &values {
                let a = apply(op, x, y).unwrap();
                let b = coerce_apply(op, x, y).unwrap();
                assert!(a.approx_eq(&b, 1e-9), "{} {} {}: {} vs {}", x, op, y, a.repr(), b.repr());
            }
        }
    }
}

#[test]
pub fn operators_use_coercion() {
    let z = rect(1.0, 2.0);
    let r = rat(2, 3);
    assert_eq!(&z - &r, coerce_apply(Op::Sub, &z, &r));
    assert_eq!(&r * &z, coerce_apply(Op::Mul, &r, &z));
    assert_eq!(&z / &r, coerce_apply(Op::Div, &z, &r));
    assert_eq!(rat(1, 3) + rat(1, 6), Ok(rat(1, 2)));
}

#[test]
pub fn tags() {
    assert_eq!(type_tag(&rat(1, 1)), Kind::Rational);
    assert_eq!(type_tag(&polar(1.0, 1.0)), Kind::Complex);
}

fn div_complex_by_rational(z: &dyn ComplexParts, r: &Rational) -> ArithResult<ComplexPolar> {
    div_complex(z, &ComplexRectangular::new(r.to_f64()?, 0.0))
}

#[test]
pub fn tables_are_extensible() {
    let mut ops = OpTable::standard();
    assert!(!ops.supports(Op::Div, Kind::Complex, Kind::Rational));
    declare_op!(ops, Div, complex, rational, div_complex_by_rational);
    assert!(ops.supports(Op::Div, Kind::Complex, Kind::Rational));

    let dispatcher = Dispatcher::new(ops, CoercionTable::standard());
    let q = dispatcher.apply(Op::Div, &polar(3.0, 1.0), &rat(3, 2)).unwrap();
    assert!(q.approx_eq(&polar(2.0, 1.0), EPS));
    assert_eq!(apply(Op::Div, &polar(3.0, 1.0), &rat(3, 2)), Err(ArithError::UnsupportedOperation {
        op: Op::Div, lhs: Kind::Complex, rhs: Kind::Rational
    }));
}

#[test]
pub fn no_coercion_is_reported_not_computed() {
    let dispatcher = Dispatcher::new(OpTable::standard(), CoercionTable::new());
    let err = dispatcher.coerce_apply(Op::Sub, &rect(1.0, 2.0), &rat(2, 3)).unwrap_err();
    assert_eq!(err, ArithError::NoCoercion { from: Kind::Complex, to: Kind::Rational });
    assert_eq!(err.to_string(), "No coercion possible between complex and rational");
}

#[test]
pub fn error_messages() {
    let err = apply(Op::Div, &rat(1, 2), &rect(0.0, 1.0)).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported operation 'div' between rational and complex");
    assert_eq!(Rational::new(1, 0).unwrap_err().to_string(), "Division by zero");
}
