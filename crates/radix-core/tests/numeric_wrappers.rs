use radix_core::{
    make_rational, Digit, RadixError, RadixFloat, RadixInteger, RadixNumber, RadixRational,
    ToRadix, BASE16,
};

fn hex_chars() -> Vec<char> {
    BASE16.chars().collect()
}

#[test]
fn integer_digit_arrays() {
    let digits = |ds: &[u32]| ds.iter().copied().map(Digit::Value).collect::<Vec<_>>();

    assert_eq!(RadixInteger::new(8, 2).unwrap().digits(), digits(&[1, 0, 0, 0]));
    assert_eq!(RadixInteger::new(10, 16).unwrap().digits(), digits(&[10]));
    for base in [2u32, 8, 10, 16, 36, 62] {
        assert_eq!(RadixInteger::new(0, base).unwrap().digits(), digits(&[0]));
    }

    let mut negative = vec![Digit::Minus];
    negative.extend(digits(&[15, 15]));
    assert_eq!(RadixInteger::new(-255, 16).unwrap().digits(), negative);
}

#[test]
fn integer_round_trips_across_bases() {
    for n in [0i128, 1, 42, 255, 123_456_789] {
        for b1 in 2u32..=62 {
            let a = RadixInteger::new(n, b1).unwrap();
            for b2 in [2u32, 7, 16, 36, 62] {
                assert_eq!(a.convert(b2).unwrap().to_i128(), n, "n={} b1={} b2={}", n, b1, b2);
            }
        }
    }
}

#[test]
fn integer_parses_strings_and_arrays() {
    assert_eq!(RadixInteger::new("FF", 16).unwrap().to_i128(), 255);
    assert_eq!(RadixInteger::new("-FF", 16).unwrap().to_i128(), -255);
    assert_eq!(RadixInteger::new("zz", 62).unwrap().to_i128(), 61 * 62 + 61);
    assert_eq!(RadixInteger::new(vec![1u32, 0, 0], 2).unwrap().to_i128(), 4);

    // digit arrays are validated against the base
    assert!(matches!(
        RadixInteger::new(vec![9u32, 2], 8),
        Err(RadixError::Parse(_))
    ));
    // characters outside the declared alphabet are rejected
    assert!(matches!(
        RadixInteger::new("G1", 16),
        Err(RadixError::Parse(_))
    ));
    assert!(matches!(
        RadixInteger::new(10, 1),
        Err(RadixError::InvalidBase(_))
    ));
}

#[test]
fn oversized_inputs_are_parse_errors_not_overflow() {
    // 140 binary digits exceed the 128-bit accumulator
    assert!(matches!(
        RadixInteger::new(vec![1u32; 140], 2),
        Err(RadixError::Parse(_))
    ));
    assert!(matches!(
        RadixInteger::new("1".repeat(140).as_str(), 2),
        Err(RadixError::Parse(_))
    ));
    assert!(matches!(
        RadixFloat::new(vec![1u32; 140], 2),
        Err(RadixError::Parse(_))
    ));
    // 127 binary digits still parse
    let max = RadixInteger::new(vec![1u32; 127], 2).unwrap();
    assert_eq!(max.to_i128(), i128::MAX);
}

#[test]
fn integer_reinterprets_other_wrappers() {
    let hex = RadixInteger::new(255, 16).unwrap();
    let dec = RadixInteger::new(&hex, 10).unwrap();
    assert_eq!(dec.to_i128(), 255);
    assert_eq!(dec.base(), 10);

    let f = RadixFloat::new(9.7, 10).unwrap();
    assert_eq!(RadixInteger::new(&f, 10).unwrap().to_i128(), 9);
}

#[test]
fn integer_rendering() {
    let n = RadixInteger::new(255, 16).unwrap();
    // no alphabet: digit values joined with a space above base 10
    assert_eq!(n.to_text(None), "15 15");
    assert_eq!(n.to_text(Some(":")), "15:15");
    assert_eq!(RadixInteger::new(255, 10).unwrap().to_text(None), "255");

    let hex = RadixInteger::new(255, hex_chars()).unwrap();
    assert_eq!(hex.to_text(None), "FF");
    assert_eq!(hex.to_text(Some(" ")), "F F");
    assert_eq!(RadixInteger::new(-255, hex_chars()).unwrap().to_text(None), "-FF");

    let dec = RadixInteger::new(255, 10).unwrap();
    assert_eq!(dec.to_string_in(hex_chars(), None).unwrap(), "FF");
    assert_eq!(
        dec.to_digits_in(2).unwrap(),
        vec![1u32, 1, 1, 1, 1, 1, 1, 1]
            .into_iter()
            .map(Digit::Value)
            .collect::<Vec<_>>()
    );
}

#[test]
fn integer_arithmetic_keeps_left_base() {
    let a = RadixInteger::new(255, 16).unwrap();
    let b = RadixInteger::new(10, 10).unwrap();
    let sum = a.clone() + b.clone();
    assert_eq!(sum.to_i128(), 265);
    assert_eq!(sum.base(), 16);
    assert_eq!((b.clone() + a.clone()).base(), 10);

    assert_eq!((a.clone() - b.clone()).to_i128(), 245);
    assert_eq!((a.clone() * b.clone()).to_i128(), 2550);
    assert_eq!((a.clone() / b.clone()).to_i128(), 25);
    assert_eq!((a.clone() % b.clone()).to_i128(), 5);
    assert_eq!(b.pow(3).to_i128(), 1000);
    assert_eq!((a.clone() << 4).to_i128(), 4080);
    assert_eq!((a.clone() & RadixInteger::new(0x0F, 10).unwrap()).to_i128(), 0x0F);
    assert_eq!(RadixInteger::new(-42, 10).unwrap().abs().to_i128(), 42);

    let zero = RadixInteger::new(0, 10).unwrap();
    assert_eq!(a.checked_div(&zero), Err(RadixError::DivisionByZero));
    assert_eq!(a.checked_rem(&zero), Err(RadixError::DivisionByZero));
}

#[test]
fn integer_equality_and_ordering() {
    let hex = RadixInteger::new(255, 16).unwrap();
    let dec = RadixInteger::new(255, 10).unwrap();
    assert_eq!(hex, dec);
    assert!(!hex.strict_eq(&dec));
    assert!(hex.strict_eq(&RadixInteger::new(255, 16).unwrap()));

    assert!(RadixInteger::new(9, 2).unwrap() < RadixInteger::new(10, 62).unwrap());
    assert_eq!(hex, RadixFloat::new(255.0, 10).unwrap());
}

#[test]
fn float_digit_expansion() {
    let f = RadixFloat::new(2.25, 2).unwrap();
    assert_eq!(f.to_text(None).unwrap(), "10.01");

    // fractional digits honored positionally: 1*8 + 2 + 6/8
    let arr = RadixFloat::new(
        vec![Digit::Value(1), Digit::Value(2), Digit::Point, Digit::Value(6)],
        8,
    )
    .unwrap();
    assert_eq!(arr.to_f64(), 10.75);

    assert_eq!(RadixFloat::new("10.01", 2).unwrap().to_f64(), 2.25);
    assert_eq!(RadixFloat::new("-10.01", 2).unwrap().to_f64(), -2.25);
}

#[test]
fn float_precision_bound() {
    let third = RadixFloat::new(1.0 / 3.0, 10).unwrap();
    let digits = third.digits().unwrap();
    let point = digits.iter().position(|d| *d == Digit::Point).unwrap();
    let fraction = &digits[point + 1..];
    assert_eq!(fraction.len(), 10);
    assert!(fraction.iter().all(|d| *d == Digit::Value(3)));

    // terminating expansions stop before the bound
    let quarter = RadixFloat::new(0.25, 10).unwrap();
    assert_eq!(quarter.to_text(None).unwrap(), "0.25");
    assert_eq!(quarter.digits_with_precision(3).unwrap().len(), 4); // 0 . 2 5

    let sixth = RadixFloat::new(1.0 / 6.0, 10).unwrap();
    let digits = sixth.digits_with_precision(4).unwrap();
    let point = digits.iter().position(|d| *d == Digit::Point).unwrap();
    assert_eq!(digits[point + 1..].len(), 4);
}

#[test]
fn float_rounding_is_half_away_from_zero() {
    let round = |v: f64| RadixFloat::new(v, 10).unwrap().round().to_f64();
    assert_eq!(round(123.5), 124.0);
    assert_eq!(round(-123.5), -124.0);
    assert_eq!(round(0.0), 0.0);
    assert_eq!(round(2.4), 2.0);
    assert_eq!(round(-2.4), -2.0);

    let f = RadixFloat::new(9.3, 10).unwrap();
    assert_eq!(f.ceil().to_f64(), 10.0);
    assert_eq!(f.floor().to_f64(), 9.0);
    assert_eq!(RadixFloat::new(-9.3, 10).unwrap().abs().to_f64(), 9.3);
}

#[test]
fn float_arithmetic_keeps_left_base() {
    let a = RadixFloat::new(2.5, 2).unwrap();
    let b = RadixFloat::new(0.25, 10).unwrap();
    let sum = a.clone() + b.clone();
    assert_eq!(sum.to_f64(), 2.75);
    assert_eq!(sum.base(), 2);
    assert_eq!((b.clone() * a.clone()).base(), 10);
    assert_eq!((a.clone() / b.clone()).to_f64(), 10.0);
    assert_eq!(a.pow(2.0).to_f64(), 6.25);
}

#[test]
fn rational_exact_arithmetic() {
    let third = RadixRational::new(1, 3, 10).unwrap();
    let sum = third.clone() + third.clone() + third.clone();
    // exact: thirds sum to one, no float rounding involved
    assert_eq!(sum, RadixRational::new(1, 1, 10).unwrap());
    // and the pair is NOT reduced along the way
    assert_eq!(sum.numerator().to_i128(), 27);
    assert_eq!(sum.denominator().to_i128(), 27);

    let reduced = sum.reduce();
    assert_eq!(reduced.numerator().to_i128(), 1);
    assert_eq!(reduced.denominator().to_i128(), 1);
    // reduce returns a new instance, the original is untouched
    assert_eq!(sum.numerator().to_i128(), 27);

    let half = RadixRational::new(1, 2, 10).unwrap();
    assert_eq!(
        (half.clone() - third.clone()).reduce(),
        RadixRational::new(1, 6, 10).unwrap()
    );
    assert_eq!(
        (half.clone() * third.clone()).reduce(),
        RadixRational::new(1, 6, 10).unwrap()
    );
    assert_eq!(
        (half.clone() / third.clone()).reduce(),
        RadixRational::new(3, 2, 10).unwrap()
    );
}

#[test]
fn rational_construction_and_rendering() {
    assert_eq!(
        RadixRational::new(1, 0, 10),
        Err(RadixError::DivisionByZero)
    );

    let r = RadixRational::new(255, 16, 16).unwrap();
    assert_eq!(r.to_text(None), "15 15 / 1 0");
    let hex = RadixRational::new(255, 16, hex_chars()).unwrap();
    assert_eq!(hex.to_text(None), "FF/10");
    assert_eq!(
        RadixRational::new(-1, 2, 10).unwrap().to_text(None),
        "-1/2"
    );

    let converted = hex.convert(10).unwrap();
    assert_eq!(converted.base(), 10);
    assert_eq!(converted.to_f64(), 255.0 / 16.0);

    let zero = RadixRational::new(0, 5, 10).unwrap();
    assert_eq!(
        zero.checked_div(&zero.clone()),
        Err(RadixError::DivisionByZero)
    );
}

#[test]
fn rational_equality_is_exact() {
    let a = RadixRational::new(1, 3, 10).unwrap();
    let b = RadixRational::new(2, 6, 16).unwrap();
    assert_eq!(a, b);
    assert!(!a.strict_eq(&b));
    // denominators too large for a float to tell apart still compare exactly
    let big = 1i128 << 100;
    let x = make_rational(1, big, 10).unwrap();
    let y = make_rational(1, big + 1, 10).unwrap();
    assert_ne!(x, y);
}

#[test]
fn to_radix_dispatches_on_fraction_point() {
    let n = 255i64.to_radix(16).unwrap();
    assert_eq!(n.to_i128(), 255);
    assert_eq!(n.base(), 16);
    assert_eq!(12.5f64.to_radix(2).unwrap().to_text(None).unwrap(), "1100.1");

    match "FF".to_radix(16).unwrap() {
        RadixNumber::Integer(n) => assert_eq!(n.to_i128(), 255),
        other => panic!("expected integer, got {:?}", other),
    }
    let f = "10.01".to_radix(2).unwrap();
    assert_eq!(f.as_float().unwrap().to_f64(), 2.25);
    assert_eq!(f.to_f64(), 2.25);
}

#[test]
fn wrappers_serialize_round_trip() {
    let n = RadixInteger::new(255, hex_chars()).unwrap();
    let json = serde_json::to_string(&n).unwrap();
    let back: RadixInteger = serde_json::from_str(&json).unwrap();
    assert!(n.strict_eq(&back));
    assert_eq!(back.to_text(None), "FF");

    let f = RadixFloat::new(2.25, 2).unwrap();
    let back: RadixFloat = serde_json::from_str(&serde_json::to_string(&f).unwrap()).unwrap();
    assert!(f.strict_eq(&back));

    let r = RadixRational::new(1, 3, 10).unwrap();
    let back: RadixRational = serde_json::from_str(&serde_json::to_string(&r).unwrap()).unwrap();
    assert_eq!(r, back);
}
