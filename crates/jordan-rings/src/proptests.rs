//! Property-based tests for scalar parsing and formatting.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{NumericMode, Q, Value, F64};

    fn rational_value() -> impl Strategy<Value = Value> {
        (-10_000i64..10_000, prop_oneof![(-500i64..=-1), (1i64..=500)])
            .prop_map(|(n, d)| Value::Rational(Q::new(n, d)))
    }

    fn float_value() -> impl Strategy<Value = Value> {
        (prop::num::f64::NORMAL | prop::num::f64::ZERO).prop_map(|x| Value::Float(F64(x)))
    }

    proptest! {
        #[test]
        fn rational_format_idempotent(v in rational_value()) {
            let shown = v.format();
            let again = Value::parse(&shown, NumericMode::Rational).unwrap();
            prop_assert_eq!(again.format(), shown);
        }

        #[test]
        fn float_format_idempotent(v in float_value()) {
            let shown = v.format();
            let again = Value::parse(&shown, NumericMode::Float).unwrap();
            prop_assert_eq!(again.format(), shown);
        }

        #[test]
        fn surrounding_whitespace_ignored(n in -1000i64..1000, pad in "[ \t]{0,3}") {
            let token = format!("{pad}{n}{pad}");
            let parsed = Value::parse(&token, NumericMode::Rational).unwrap();
            prop_assert_eq!(parsed, Value::Rational(Q::from_integer(n)));
        }

        #[test]
        fn parse_errors_name_the_token(word in "[a-z]{1,8}") {
            let err = Value::parse(&word, NumericMode::Rational).unwrap_err();
            prop_assert_eq!(err.token(), word.as_str());
        }
    }
}
