use num_bigint::BigInt;
use num_integer::Integer;
use quotient::{error::RuntimeError, interpreter::value::rational::Rational};

fn frac(text: &str) -> Rational {
    text.parse().unwrap_or_else(|e| panic!("'{text}' should parse: {e}"))
}

fn assert_parts(value: &Rational, numerator: i64, denominator: i64) {
    assert_eq!(value.numerator(), &BigInt::from(numerator), "numerator of {value}");
    assert_eq!(value.denominator(), &BigInt::from(denominator), "denominator of {value}");
}

#[test]
fn construction_normalizes_sign_and_reduces() {
    for n in -12_i64..=12 {
        for d in (-12_i64..=12).filter(|d| *d != 0) {
            let value = Rational::new(n, d).unwrap();
            assert!(value.denominator() > &BigInt::from(0), "{n}/{d}");
            let gcd = value.numerator().gcd(value.denominator());
            assert_eq!(gcd, BigInt::from(1), "{n}/{d} was not reduced");
            assert_eq!(value.numerator() * BigInt::from(d), value.denominator() * BigInt::from(n));
        }
    }
}

#[test]
fn zero_is_canonical() {
    for d in [1, 5, -5, 1000] {
        assert_parts(&Rational::new(0, d).unwrap(), 0, 1);
    }
    assert_eq!(Rational::zero(), Rational::default());
}

#[test]
fn zero_denominator_is_rejected() {
    assert_eq!(Rational::new(1, 0), Err(RuntimeError::DivisionByZero));
    assert_eq!(Rational::new(0, 0), Err(RuntimeError::DivisionByZero));
    assert_eq!(Rational::new(BigInt::from(7), BigInt::from(0)), Err(RuntimeError::DivisionByZero));
}

#[test]
fn big_integers_are_exact() {
    let huge: BigInt = "123456789012345678901234567890".parse().unwrap();
    let value = Rational::new(huge.clone() * 2, huge * 4).unwrap();
    assert_parts(&value, 1, 2);

    let product = frac("99999999999999999999") * frac("99999999999999999999");
    assert_eq!(product.to_string(), "9999999999999999999800000000000000000001");

    let whole = Rational::from("-123456789012345678901234567890".parse::<BigInt>().unwrap());
    assert!(whole.is_integer());
    assert_eq!(whole, frac("-123456789012345678901234567890"));
}

#[test]
fn parsing() {
    assert_parts(&frac("42"), 42, 1);
    assert_parts(&frac("-3/6"), -1, 2);
    assert_parts(&frac("3/-6"), -1, 2);
    assert_parts(&frac("-3/-6"), 1, 2);
    assert_parts(&frac("0/9"), 0, 1);
    assert_parts(&frac("007"), 7, 1);
}

#[test]
fn malformed_text_is_rejected() {
    for text in ["abc", "", "-", "1/", "/2", "1/2/3", "+4", "1.5", " 1", "1 /2", "--1"] {
        assert_eq!(text.parse::<Rational>(),
                   Err(RuntimeError::InvalidFormat { text: text.to_string() }),
                   "'{text}' should be rejected");
    }
    assert_eq!("5/0".parse::<Rational>(), Err(RuntimeError::DivisionByZero));
}

#[test]
fn display_round_trips() {
    for text in ["0", "1", "-1", "5/6", "-7/3", "123456789123456789/2"] {
        let value = frac(text);
        assert_eq!(value.to_string(), text);
        assert_eq!(frac(&value.to_string()), value);
    }
    assert_eq!(frac("4/2").to_string(), "2");
}

#[test]
fn arithmetic() {
    assert_eq!((frac("1/2") + frac("1/3")).to_string(), "5/6");
    assert_eq!((frac("1/2") - frac("1/3")).to_string(), "1/6");
    assert_eq!((frac("1/3") - frac("1/2")).to_string(), "-1/6");
    assert_eq!((frac("2/4") * frac("3/6")).to_string(), "1/4");
    assert_eq!((frac("-2/3") * frac("3/2")).to_string(), "-1");
    assert_eq!(frac("3/4").checked_div(&frac("-1/2")).unwrap().to_string(), "-3/2");
    assert_eq!((&frac("1/6") + &frac("1/3")).to_string(), "1/2");
    assert_eq!((-frac("2/5")).to_string(), "-2/5");
}

#[test]
fn division_by_any_zero_fails() {
    for zero in ["0", "0/5", "-0", "0/-3"] {
        assert_eq!(frac("1/2").checked_div(&frac(zero)), Err(RuntimeError::DivisionByZero));
    }
}

#[test]
fn operands_are_not_mutated() {
    let a = frac("1/2");
    let b = frac("1/3");
    let _ = &a + &b;
    let _ = a.checked_div(&b);
    assert_eq!(a.to_string(), "1/2");
    assert_eq!(b.to_string(), "1/3");
}
