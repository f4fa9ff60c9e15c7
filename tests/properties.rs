use proptest::prelude::*;
use subscripta::{
    evaluate_source,
    interpreter::{discovery::discover, evaluator::core::evaluate, loader::load_values_str},
};

const MAX_LITERAL: i64 = 1000;

proptest! {
    #[test]
    fn constant_expressions_follow_precedence(a in 0..MAX_LITERAL,
                                              b in 0..MAX_LITERAL,
                                              c in 0..MAX_LITERAL,
                                              d in 0..MAX_LITERAL) {
        let (fa, fb, fc, fd) = (a as f64, b as f64, c as f64, d as f64);

        prop_assert_eq!(evaluate_source(&format!("{a}+{b}*{c}-{d}"), "").unwrap(),
                        fa + fb * fc - fd);
        prop_assert_eq!(evaluate_source(&format!("({a}+{b})*({c}-{d})"), "").unwrap(),
                        (fa + fb) * (fc - fd));
        prop_assert_eq!(evaluate_source(&format!("{a}-{b}-{c}+{d}"), "").unwrap(),
                        ((fa - fb) - fc) + fd);
    }

    #[test]
    fn discovery_is_idempotent(source in "[a-dA-D0-9+*/()\\[\\] -]{0,40}") {
        prop_assert_eq!(discover(&source), discover(&source));
    }

    #[test]
    fn loaded_array_values_are_read_back(size in 1usize..20,
                                         index in 0usize..20,
                                         value in -1000i64..1000) {
        let index = index % size;
        let expression = format!("A[{index}]");
        let values = format!("A {size} ({index},{value})");
        prop_assert_eq!(evaluate_source(&expression, &values).unwrap(), value as f64);

        let other = (index + 1) % size;
        if other != index {
            let expression = format!("A[{other}]");
            prop_assert_eq!(evaluate_source(&expression, &values).unwrap(), 0.0);
        }
    }

    #[test]
    fn subscript_division_truncates_toward_zero(x in 0i64..200, y in 1i64..20) {
        let size = 201;
        let expected = x / y;
        let values = format!("A {size} ({expected},1)");
        prop_assert_eq!(evaluate_source(&format!("A[{x}/{y}]"), &values).unwrap(), 1.0);
    }

    #[test]
    fn negative_subscript_quotients_truncate_toward_zero(n in 1i64..200, y in 1i64..20) {
        // `(0-n)` is closed by `)` untruncated; the division is closed by `]`.
        let offset = 200;
        let expected = offset - n / y;
        let values = format!("A 201 ({expected},1)");
        let expression = format!("A[{offset}+(0-{n})/{y}]");
        prop_assert_eq!(evaluate_source(&expression, &values).unwrap(), 1.0);

        let result = evaluate_source(&format!("A[(0-{n})/{y}]"), "A 1 (0,1)");
        if n < y {
            prop_assert_eq!(result.unwrap(), 1.0);
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn evaluation_is_repeatable(x in -50i64..50, i in 0usize..4) {
        let expression = "x * A[i] + x / (A[i] + 1)";
        let mut table = discover(expression);
        load_values_str(&mut table, &format!("x {x}\ni {i}\nA 4 (0,1) (1,2) (2,3) (3,4)")).unwrap();
        let first = evaluate(expression, &table).unwrap();
        let second = evaluate(expression, &table).unwrap();
        prop_assert_eq!(first, second);
    }
}
