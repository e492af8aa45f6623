use quotient::{
    error::{EvalError, ParseError, RuntimeError},
    evaluate,
    interpreter::{evaluator::core::Context, value::rational::Rational},
};

fn assert_value(context: &mut Context, src: &str, expected: &str) {
    match context.eval_line(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "'{src}'"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_invalid(src: &str) {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => assert!(e.is_invalid_expression(), "'{src}' failed with {e:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    let mut context = Context::new();
    assert_value(&mut context, "1/2 + 1/3", "5/6");
    assert_value(&mut context, "4 / 2", "2");
    assert_value(&mut context, "7 - 10", "-3");
    assert_value(&mut context, "2/4 * 3/6", "1/4");
    assert_value(&mut context, "-3/4", "-3/4");
    assert_value(&mut context, "5 - -5", "10");
    assert_value(&mut context, "0/7", "0");
}

#[test]
fn no_operator_precedence() {
    let mut context = Context::new();
    assert_value(&mut context, "1 + 2 * 3", "9");
    assert_value(&mut context, "10 - 4 / 2", "3");
    assert_value(&mut context, "1 / 2 / 2 / 2", "1/8");
}

#[test]
fn unset_registers_read_as_zero() {
    let mut context = Context::new();
    assert_value(&mut context, "a + 1", "1");
    assert_value(&mut context, "z", "0");
}

#[test]
fn registers_hold_stored_values() {
    let mut context = Context::new();
    assert_value(&mut context, "1/2 + 1/3", "5/6");
    assert_eq!(context.store("STORE a"), Ok('a'));
    assert_value(&mut context, "a * 6", "5");
    assert_eq!(context.store("STORE b"), Ok('b'));
    assert_value(&mut context, "a + b", "35/6");
    assert_value(&mut context, "b / a", "6");
}

#[test]
fn store_rejects_bad_registers() {
    let mut context = Context::new();
    assert_value(&mut context, "3", "3");
    assert!(matches!(context.store("STORE A"),
                     Err(EvalError::Runtime(RuntimeError::InvalidRegister { register: 'A' }))));
    assert!(matches!(context.store("STORE 1"),
                     Err(EvalError::Runtime(RuntimeError::InvalidRegister { register: '1' }))));
    for line in ["STORE ab", "STORE a b", "STORE  a", "STORE "] {
        assert!(matches!(context.store(line), Err(EvalError::Parse(ParseError::MalformedStore { .. }))),
                "'{line}'");
    }
    assert_eq!(context.store("STORE a "), Ok('a'));
    assert_value(&mut context, "a", "3");
}

#[test]
fn structural_errors_are_invalid_expressions() {
    assert_invalid("");
    assert_invalid(" ");
    assert_invalid("1 +");
    assert_invalid("1 + 2 -");
    assert_invalid("1 % 2");
    assert_invalid("1 2");
    assert_invalid("1 + 2 3");
    assert_invalid("A + 1");
    assert_invalid("1 + B");
    assert_invalid("ab");
    assert_invalid("1.5 + 1");
    assert_invalid("3/-6");
    assert_invalid("1  + 2");
    assert_invalid(" 1 + 2");
    assert_invalid("+ 1");
    assert_invalid("1 + +");
    assert_invalid("1 ++ 2");
    assert_invalid("1+2");
}

fn parse_failure(err: ParseError) -> Result<Rational, EvalError> {
    Err(EvalError::Parse(err))
}

#[test]
fn structural_errors_are_specific() {
    assert_eq!(evaluate(""), parse_failure(ParseError::EmptyExpression));
    assert_eq!(evaluate("1 +"),
               parse_failure(ParseError::TrailingOperator { line: "1 +".to_string() }));
    assert_eq!(evaluate("1 % 2"),
               parse_failure(ParseError::UnknownOperator { token: "%".to_string() }));
    assert_eq!(evaluate("1 + 2 3"),
               parse_failure(ParseError::MissingOperand { operator: "3".to_string() }));
    assert_eq!(evaluate("Q"), parse_failure(ParseError::UppercaseRegister { register: 'Q' }));
    assert_eq!(evaluate("* 2"),
               parse_failure(ParseError::ExpectedOperand { token: "*".to_string() }));
    assert_eq!(evaluate("x1"),
               parse_failure(ParseError::UnrecognizedToken { token: "x1".to_string() }));
}

#[test]
fn division_by_zero_is_distinct() {
    for src in ["5 / 0", "5 / a", "1 / 0/3", "5/0", "1 + 5/0"] {
        let err = evaluate(src).expect_err(src);
        assert_eq!(err, EvalError::Runtime(RuntimeError::DivisionByZero), "'{src}'");
        assert!(!err.is_invalid_expression());
        assert_eq!(err.summary(), "Division by zero");
    }
    assert_eq!(evaluate("1 / 1 - 1").unwrap().to_string(), "0");
}

#[test]
fn failed_expression_leaves_partial_result() {
    let mut context = Context::new();
    assert!(context.eval_line("3 + 4 % 1").is_err());
    assert_eq!(context.accumulator.current().to_string(), "7");

    assert!(context.eval_line("2 / 0").is_err());
    assert_eq!(context.accumulator.current().to_string(), "2");

    assert!(context.eval_line("9 +").is_err());
    assert_eq!(context.accumulator.current().to_string(), "2");
}

#[test]
fn session_survives_failures() {
    let mut context = Context::new();
    assert_value(&mut context, "2", "2");
    context.store("STORE k").unwrap();
    assert!(context.eval_line("k / 0").is_err());
    assert!(context.eval_line("garbage").is_err());
    assert_value(&mut context, "k * k", "4");
}

#[test]
fn huge_values_stay_exact() {
    let mut context = Context::new();
    assert_value(&mut context,
                 "99999999999999999999 * 99999999999999999999",
                 "9999999999999999999800000000000000000001");
    assert_value(&mut context, "1/99999999999999999999 * 99999999999999999999", "1");
}
