use numscan::{parse_f32, parse_i64, parse_int, parse_u64, FromAscii};

fn close(actual: f32, expected: f32) -> bool {
    if expected == 0.0 {
        actual == 0.0
    } else {
        ((actual - expected) / expected).abs() < 1e-5
    }
}

#[test]
fn int_matches_std_parse() {
    let cases = [
        "0",
        "1",
        "7",
        "42",
        "1000000",
        "2147483647",
        "-2147483648",
        "-1",
        "-999999",
        "+123",
    ];
    for s in cases {
        let expected: i32 = s.parse().unwrap();
        let (value, len) = parse_int::<i32>(s.as_bytes(), 10);
        assert_eq!(value, expected, "parsing {:?}", s);
        assert_eq!(len, s.len(), "consumed length of {:?}", s);
    }
}

#[test]
fn wide_int_matches_std_parse() {
    let signed = ["-9223372036854775808", "9223372036854775807", "-4611686018427387904"];
    for s in signed {
        assert_eq!(parse_i64(s.as_bytes()).0, s.parse::<i64>().unwrap());
    }
    let unsigned = ["18446744073709551615", "9999999999999999999", "0"];
    for s in unsigned {
        assert_eq!(parse_u64(s.as_bytes(), 10).0, s.parse::<u64>().unwrap());
    }
}

#[test]
fn float_matches_std_parse() {
    let cases = [
        "0.0",
        "1.0",
        "3.1415926",
        "-2.718281",
        "123456.789",
        "0.000001",
        "42",
        "-0.5",
        "1e10",
        "1.5e-7",
        "9.999e37",
        "2.5E+3",
        "1e-38",
    ];
    for s in cases {
        let expected: f32 = s.parse().unwrap();
        let (value, len) = parse_f32(s.as_bytes());
        assert!(close(value, expected), "parsing {:?}: got {}, want {}", s, value, expected);
        assert_eq!(len, s.len(), "consumed length of {:?}", s);
    }
}

#[test]
fn sign_handling() {
    assert_eq!(parse_i64(b"-5").0, -5);
    assert_eq!(parse_i64(b"+5").0, 5);
    assert_eq!(parse_i64(b"5").0, 5);
    assert_eq!(parse_f32(b"-5").0, -5.0);
    assert_eq!(parse_f32(b"+5").0, 5.0);
    assert_eq!(parse_f32(b"5").0, 5.0);
}

#[test]
fn digitless_input_yields_zero_and_consumes_nothing() {
    assert_eq!(parse_i64(b""), (0, 0));
    assert_eq!(parse_i64(b"abc"), (0, 0));
    assert_eq!(parse_f32(b""), (0.0, 0));
    assert_eq!(parse_f32(b"abc"), (0.0, 0));
}

#[test]
fn exponent_above_clamp_is_finite_and_deterministic() {
    let (a, _) = parse_f32(b"1e50");
    let (b, _) = parse_f32(b"1e50");
    assert!(a.is_finite());
    assert_eq!(a, b);
    assert_eq!(a, parse_f32(b"1e38").0);
}

#[test]
fn consumed_offset_enables_chained_parsing() {
    let line = b"10 -20 3.5rest";
    let (a, n) = parse_i64(&line[..]);
    assert_eq!((a, n), (10, 2));
    let (b, n2) = parse_i64(&line[n..]);
    assert_eq!((b, n2), (-20, 4));
    let (c, n3) = parse_f32(&line[n + n2..]);
    assert_eq!((c, n3), (3.5, 4));
    assert_eq!(&line[n + n2 + n3..], b"rest");
}

#[test]
fn leading_whitespace_is_consumed() {
    assert_eq!(parse_i64(b" \t42"), (42, 4));
    assert_eq!(parse_f32(b"\n\r1.5"), (1.5, 5));
}

#[test]
fn typed_parse_covers_all_five_types() {
    assert_eq!(i32::from_ascii(b"-3"), -3);
    assert_eq!(u32::from_ascii(b"3"), 3);
    assert_eq!(i64::from_ascii(b"-3000000000"), -3000000000);
    assert_eq!(u64::from_ascii(b"3000000000"), 3000000000);
    assert_eq!(f32::from_ascii(b"3.5"), 3.5);
}

#[test]
fn typed_parse_never_fails() {
    // The contract has no error channel: garbage degrades to zero.
    assert_eq!(i32::from_ascii(b""), 0);
    assert_eq!(u64::from_ascii(b"::"), 0);
    assert_eq!(f32::from_ascii(b"inf"), 0.0);
    assert_eq!(f32::from_ascii(b"NaN"), 0.0);
}
