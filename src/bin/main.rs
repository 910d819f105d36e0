use std::f64::consts::FRAC_PI_2;

use tagnum::{
    ComplexPolar, ComplexRectangular, Op, Rational, Value,
    add_complex, add_rational, apply, coerce_apply, mul_complex, mul_rational,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("{}", Rational::new(6, 4)?.repr());
    println!("{}", add_rational(&Rational::new(3, 14)?, &Rational::new(2, 7)?)?.repr());
    println!("{}", mul_rational(&Rational::new(7, 10)?, &Rational::new(2, 7)?)?.repr());

    let z = ComplexRectangular::new(1.0, 2.0);
    let w = ComplexPolar::new(2.0, FRAC_PI_2);
    let i = ComplexRectangular::new(0.0, 1.0);
    println!("{}", add_complex(&z, &w).repr());
    println!("{}", mul_complex(&i, &i).repr());

    let (z, w, i) = (Value::from(z), Value::from(w), Value::from(i));
    let two_thirds = Value::from(Rational::new(2, 3)?);
    println!("{}", apply(Op::from_name("add")?, &Value::from(Rational::new(3, 14)?), &Value::from(Rational::new(2, 7)?))?.repr());
    println!("{}", apply(Op::Add, &z, &w)?.repr());
    println!("{}", apply(Op::Sub, &z, &two_thirds)?.repr());

    println!("{}", (&z + &w)?.repr());
    println!("{}", (&i * &i)?.repr());
    println!("{}", (&z - &two_thirds)?.repr());

    println!("{}", coerce_apply(Op::Add, &z, &w)?.repr());
    println!("{}", coerce_apply(Op::Mul, &i, &i)?.repr());
    println!("{}", coerce_apply(Op::Sub, &z, &two_thirds)?.repr());

    if let Value::Polar(p) = coerce_apply(Op::Mul, &i, &i)? {
        println!("{} = {}", p, p.to_rectangular());
    }
    Ok(())
}
