//! Property-based tests for the parser.
//!
//! 1. **Parser never panics** and always terminates on arbitrary input
//! 2. **Reconstruction round-trips**: printing a parsed statement and parsing
//!    the result gives back the same text and statement shape
//! 3. **Whole programs round-trip**: statement boundaries survive printing

use std::mem::discriminant;

use proptest::prelude::*;

use crate::parse_source;

fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(256),
        ..default
    }
}

fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "v_[a-z]{0,6}",
        "[0-9]{1,10}",
    ];

    leaf.prop_recursive(4, 16, 1, |inner| {
        prop_oneof![
            (prop::sample::select(vec!["!", "-"]), inner.clone())
                .prop_map(|(op, operand)| format!("{}{}", op, operand)),
            inner.prop_map(|expr| format!("({})", expr)),
        ]
    })
}

fn statement() -> impl Strategy<Value = String> {
    prop_oneof![
        ("v_[a-z]{0,6}", expression()).prop_map(|(name, value)| format!("let {} = {};", name, value)),
        expression().prop_map(|value| format!("return {};", value)),
        expression().prop_map(|value| format!("{};", value)),
    ]
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn parser_never_panics(input in "\\PC{0,200}") {
        let _ = parse_source(&input);
    }

    #[test]
    fn reconstruction_round_trips(source in statement()) {
        let (first, errors) = parse_source(&source);
        prop_assert!(errors.is_empty(), "{:?}", errors);
        prop_assert_eq!(first.statements.len(), 1);

        let printed = first.to_string();
        let (second, errors) = parse_source(&printed);
        prop_assert!(errors.is_empty(), "{:?}", errors);
        prop_assert_eq!(second.statements.len(), 1);
        prop_assert_eq!(second.to_string(), printed);
        prop_assert_eq!(
            discriminant(&first.statements[0]),
            discriminant(&second.statements[0])
        );
    }

    #[test]
    fn program_reconstruction_round_trips(statements in prop::collection::vec(statement(), 0..6)) {
        let source = statements.join(" ");
        let (first, errors) = parse_source(&source);
        prop_assert!(errors.is_empty(), "{:?}", errors);
        prop_assert_eq!(first.statements.len(), statements.len());

        let printed = first.to_string();
        let (second, errors) = parse_source(&printed);
        prop_assert!(errors.is_empty(), "{:?}", errors);
        prop_assert_eq!(second.to_string(), printed);
        prop_assert_eq!(first.statements.len(), second.statements.len());
        for (a, b) in first.statements.iter().zip(&second.statements) {
            prop_assert_eq!(discriminant(a), discriminant(b));
        }
    }
}
