use super::*;
use pretty_assertions::assert_eq;

#[test]
fn numbers_compare_across_kinds() {
    assert!(Literal::Int(1).test(&Value::Int(1)));
    assert!(Literal::Int(1).test(&Value::Float(1.0)));
    assert!(Literal::Float(2.0).test(&Value::Int(2)));
    assert!(!Literal::Float(2.5).test(&Value::Int(2)));
    assert!(!Literal::Int(1).test(&Value::string("1")));
}

#[test]
fn numbers_across_kinds_compare_without_rounding() {
    let above_2_53 = (1i64 << 53) + 1;
    let nearest = Value::Float(9_007_199_254_740_992.0);
    assert!(!Literal::Int(above_2_53).test(&nearest));
    assert!(Literal::Int(above_2_53 - 1).test(&nearest));
    assert!(!Literal::Float(9_007_199_254_740_992.0).test(&Value::Int(above_2_53)));
    assert!(!Literal::Int(i64::MAX).test(&Value::Float(9_223_372_036_854_775_808.0)));
    assert!(Literal::Int(i64::MIN).test(&Value::Float(-9_223_372_036_854_775_808.0)));
    assert!(!Literal::Int(0).test(&Value::Float(f64::NAN)));
    assert!(!Literal::Int(i64::MAX).test(&Value::Float(f64::INFINITY)));
    assert!(Literal::Int(0).test(&Value::Float(-0.0)));
}

#[test]
fn exact_kinds() {
    assert!(Literal::Symbol(Name::new("ok")).test(&Value::symbol("ok")));
    assert!(!Literal::Symbol(Name::new("ok")).test(&Value::string("ok")));
    assert!(Literal::Bool(false).test(&Value::Bool(false)));
    assert!(!Literal::Bool(false).test(&Value::Nil));
    assert!(Literal::Nil.test(&Value::Nil));
    assert!(!Literal::Nil.test(&Value::list(vec![])));
}

#[test]
fn inclusive_and_exclusive_ranges() {
    let inclusive = Literal::Range(RangeLiteral {
        start: 1,
        end: 5,
        exclusive: false,
    });
    let exclusive = Literal::Range(RangeLiteral {
        start: 1,
        end: 5,
        exclusive: true,
    });
    assert!(inclusive.test(&Value::Int(5)));
    assert!(!exclusive.test(&Value::Int(5)));
    assert!(exclusive.test(&Value::Int(1)));
    assert!(!exclusive.test(&Value::Int(0)));
    assert!(exclusive.test(&Value::Float(4.5)));
    assert!(!inclusive.test(&Value::string("3")));
}

#[test]
fn type_tests() {
    assert!(TypeTest::Object.test(&Value::Nil));
    assert!(TypeTest::Numeric.test(&Value::Float(0.5)));
    assert!(!TypeTest::Numeric.test(&Value::string("1")));
    assert!(TypeTest::Kind(ValueKind::Str).test(&Value::string("")));
    let point = TypeTest::Record(Name::new("Point"));
    assert!(point.test(&Value::record("Point", vec![])));
    assert!(!point.test(&Value::record("Pair", vec![])));
}

#[test]
fn display() {
    assert_eq!(Literal::Float(1.0).to_string(), "1.0");
    assert_eq!(Literal::Symbol(Name::new("a")).to_string(), ":a");
    assert_eq!(
        Literal::Range(RangeLiteral {
            start: -1,
            end: 3,
            exclusive: true
        })
        .to_string(),
        "-1...3"
    );
    assert_eq!(
        Literal::Type(TypeTest::Kind(ValueKind::Int)).to_string(),
        "Integer"
    );
}
