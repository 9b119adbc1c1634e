//! Integration tests for Rational arithmetic, reduction and inversion.

use exactmath::{Integer, MathError, Natural, Rational, ZeroDivisionPolicy};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn parts(r: Rational) -> (Integer, Natural) {
    (r.numer(), r.denom())
}

// ---------------------------------------------------------------------------
// Construction and reduction
// ---------------------------------------------------------------------------

#[test]
fn default_is_zero_over_one() {
    assert_eq!(parts(Rational::default()), (0, 1));
}

#[test]
fn new_keeps_fields_unreduced() {
    assert_eq!(parts(Rational::new(6, 8)), (6, 8));
}

#[test]
fn new_with_zero_denominator_saturates() {
    init_logging();
    assert!(Rational::new(3, 0).is_infinite());
}

#[test]
fn try_new_rejects_zero_denominator() {
    assert_eq!(Rational::try_new(3, 0), Err(MathError::ZeroDenominator));
    assert_eq!(parts(Rational::try_new(-3, 4).unwrap()), (-3, 4));
}

#[test]
fn reduce_six_eighths() {
    let mut r = Rational::new(6, 8);
    r.reduce();
    assert_eq!(parts(r), (3, 4));
}

#[test]
fn reduce_zero_numerator_collapses_denominator() {
    for d in [1, 5, 12, 1_000_000] {
        let mut r = Rational::new(0, d);
        r.reduce();
        assert_eq!(parts(r), (0, 1));
    }
}

#[test]
fn reduce_negative_keeps_sign_in_numerator() {
    let mut r = Rational::new(-9, 12);
    r.reduce();
    assert_eq!(parts(r), (-3, 4));
}

#[test]
fn set_overwrites_without_reducing() {
    let mut r = Rational::new(1, 2);
    r.set(10, 20);
    assert_eq!(parts(r), (10, 20));
}

#[test]
fn pair_and_integer_conversions() {
    let pair: (Integer, Natural) = (5, 7);
    assert_eq!(Rational::from(pair), Rational::new(5, 7));
    assert_eq!(parts(Rational::from(-4)), (-4, 1));
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn addition_reduces_to_one() {
    let sum = Rational::new(3, 4) + Rational::new(1, 4);
    assert_eq!(parts(sum), (1, 1));
}

#[test]
fn addition_uses_common_denominator() {
    let sum = Rational::new(1, 6) + Rational::new(1, 4);
    assert_eq!(parts(sum), (5, 12));
}

#[test]
fn subtraction_can_go_negative() {
    let diff = Rational::new(1, 3) - Rational::new(1, 2);
    assert_eq!(parts(diff), (-1, 6));
}

#[test]
fn multiplication_reduces() {
    let product = Rational::new(1, 2) * Rational::new(2, 3);
    assert_eq!(parts(product), (1, 3));
}

#[test]
fn division_multiplies_by_inverse() {
    let quotient = Rational::new(1, 2) / Rational::new(-3, 4);
    assert_eq!(parts(quotient), (-2, 3));
}

#[test]
fn division_leaves_divisor_untouched() {
    let divisor = Rational::new(2, 5);
    let mut value = Rational::new(4, 5);
    value /= divisor;
    assert_eq!(parts(value), (2, 1));
    assert_eq!(parts(divisor), (2, 5));
}

#[test]
fn compound_operators() {
    let mut r = Rational::new(1, 2);
    r += Rational::new(1, 3);
    assert_eq!(parts(r), (5, 6));
    r -= Rational::new(1, 6);
    assert_eq!(parts(r), (2, 3));
    r *= Rational::new(3, 4);
    assert_eq!(parts(r), (1, 2));
    r /= Rational::new(1, 4);
    assert_eq!(parts(r), (2, 1));
}

#[test]
fn compound_operators_accept_raw_pairs() {
    let quarter: (Integer, Natural) = (1, 4);
    let mut r = Rational::new(1, 2);
    r += quarter;
    assert_eq!(parts(r), (3, 4));
    r -= quarter;
    assert_eq!(parts(r), (1, 2));
    r *= quarter;
    assert_eq!(parts(r), (1, 8));
    r /= quarter;
    assert_eq!(parts(r), (1, 2));
}

#[test]
fn arithmetic_on_unreduced_operands_is_reduced() {
    let product = Rational::new(2, 4) * Rational::new(4, 8);
    assert_eq!(parts(product), (1, 4));
}

#[test]
fn negation_flips_numerator() {
    assert_eq!(parts(-Rational::new(3, 4)), (-3, 4));
    assert_eq!(parts(-Rational::new(-3, 4)), (3, 4));
}

#[test]
fn wide_intermediates_do_not_overflow() {
    // The common denominator and cross products exceed 32 bits before reduction.
    let tiny = Rational::new(1, 4_000_000_000);
    assert_eq!(parts(tiny + tiny), (1, 2_000_000_000));

    let a = Rational::new(Integer::MAX, 3);
    let b = Rational::new(3, Integer::MAX as Natural);
    assert_eq!(parts(a * b), (1, 1));

    let c = Rational::new(Integer::MAX, 2);
    assert_eq!(parts(c - c), (0, 1));
}

#[test]
fn to_real_divides() {
    assert_eq!(Rational::new(-3, 4).to_real(), -0.75);
    assert_eq!(Rational::new(1, 3).to_real(), 1.0 / 3.0);
}

// ---------------------------------------------------------------------------
// Inversion and division by zero
// ---------------------------------------------------------------------------

#[test]
fn invert_positive_and_negative() {
    let mut r = Rational::new(3, 4);
    r.invert();
    assert_eq!(parts(r), (4, 3));

    let mut r = Rational::new(-3, 4);
    r.invert();
    assert_eq!(parts(r), (-4, 3));
}

#[test]
fn invert_zero_yields_sentinel() {
    init_logging();
    let mut r = Rational::new(0, 5);
    r.invert();
    assert!(r.is_infinite());
    assert_eq!(parts(r), (Integer::MAX, 1));
}

#[test]
fn try_invert_zero_reports_and_keeps_value() {
    let mut r = Rational::new(0, 5);
    assert_eq!(r.try_invert(), Err(MathError::DivisionByZero));
    assert_eq!(parts(r), (0, 5));
}

#[test]
fn invert_with_saturate_reports_and_replaces() {
    init_logging();
    let mut r = Rational::default();
    assert_eq!(
        r.invert_with(ZeroDivisionPolicy::Saturate),
        Err(MathError::DivisionByZero)
    );
    assert_eq!(r, Rational::INFINITY);
}

#[test]
fn recip_does_not_mutate() {
    let r = Rational::new(2, 7);
    assert_eq!(parts(r.recip()), (7, 2));
    assert_eq!(parts(r), (2, 7));
}

#[test]
fn dividing_by_zero_operator_does_not_panic() {
    init_logging();
    let quotient = Rational::new(1, 1) / Rational::default();
    assert_eq!(quotient, Rational::INFINITY);
}

// ---------------------------------------------------------------------------
// Checked arithmetic
// ---------------------------------------------------------------------------

#[test]
fn checked_div_by_zero_errors() {
    let result = Rational::new(1, 2).checked_div(Rational::default());
    assert_eq!(result, Err(MathError::DivisionByZero));
}

#[test]
fn checked_ops_detect_overflow() {
    let big = Rational::from(Integer::MAX);
    assert_eq!(big.checked_add(Rational::from(1)), Err(MathError::Overflow));
    assert_eq!(big.checked_mul(Rational::from(2)), Err(MathError::Overflow));
    assert_eq!(
        Rational::from(Integer::MIN).checked_sub(Rational::from(1)),
        Err(MathError::Overflow)
    );
}

#[test]
fn checked_ops_match_operators() -> anyhow::Result<()> {
    let a = Rational::new(5, 6);
    let b = Rational::new(-7, 10);
    assert_eq!(a.checked_add(b)?, a + b);
    assert_eq!(a.checked_sub(b)?, a - b);
    assert_eq!(a.checked_mul(b)?, a * b);
    assert_eq!(a.checked_div(b)?, a / b);
    Ok(())
}

#[test]
fn overflowing_operator_saturates_by_sign() {
    init_logging();
    let big = Rational::from(Integer::MAX);
    assert_eq!(big * Rational::from(2), Rational::INFINITY);
    assert_eq!(big + Rational::from(1), Rational::INFINITY);

    let low = Rational::from(Integer::MIN);
    assert_eq!(low - Rational::from(1), Rational::NEG_INFINITY);
    assert_eq!(-big * Rational::from(2), Rational::NEG_INFINITY);
    assert!(Rational::NEG_INFINITY.is_infinite());
}

#[test]
fn negating_integer_min_saturates() {
    init_logging();
    assert_eq!(-Rational::from(Integer::MIN), Rational::INFINITY);
}

#[test]
fn division_by_large_denominator_is_exact() -> anyhow::Result<()> {
    // The divisor's denominator cannot become a 32-bit numerator on its own.
    let a = Rational::new(1, 4_000_000_000);
    assert_eq!(a.checked_div(a)?, Rational::from(1));
    assert_eq!(a / a, Rational::from(1));

    let b = Rational::new(-3, 4_000_000_000);
    assert_eq!(parts(a.checked_div(b)?), (-1, 3));
    assert_eq!(parts(b / a), (-3, 1));

    let half = Rational::new(1, 2);
    assert_eq!(parts(half / a), (2_000_000_000, 1));
    assert_eq!(parts(half.checked_div(a)?), (2_000_000_000, 1));
    Ok(())
}

#[test]
fn checked_div_overflow_only_when_result_does_not_fit() {
    let a = Rational::from(Integer::MAX);
    let b = Rational::new(1, 2);
    assert_eq!(a.checked_div(b), Err(MathError::Overflow));
    init_logging();
    assert_eq!(a / b, Rational::INFINITY);
    assert_eq!(-a / b, Rational::NEG_INFINITY);
}

#[test]
fn div_with_policy() {
    let one = Rational::from(1);
    let zero = Rational::default();
    assert_eq!(
        one.div_with(zero, ZeroDivisionPolicy::Reject),
        Err(MathError::DivisionByZero)
    );
    assert_eq!(
        one.div_with(Rational::new(1, 2), ZeroDivisionPolicy::Reject),
        Ok(Rational::from(2))
    );
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

#[test]
fn display_renders_n_over_d() {
    assert_eq!(Rational::new(-3, 4).to_string(), "-3/4");
    assert_eq!(Rational::default().to_string(), "0/1");
}

#[test]
fn parse_fraction_and_integer() {
    let r: Rational = " -6 / 8 ".parse().unwrap();
    assert_eq!(parts(r), (-6, 8));
    let r: Rational = "7".parse().unwrap();
    assert_eq!(parts(r), (7, 1));
}

#[test]
fn parse_errors() {
    assert_eq!("1/0".parse::<Rational>(), Err(MathError::ZeroDenominator));
    assert_eq!(
        "3/-4".parse::<Rational>(),
        Err(MathError::Parse("3/-4".to_string()))
    );
    assert!("abc".parse::<Rational>().is_err());
    assert!("".parse::<Rational>().is_err());
}
