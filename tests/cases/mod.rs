#![allow(dead_code)]

use est::{Engine, EngineOptions, parse};
use pretty_assertions::assert_eq;

/// Source name every test case is compiled under.
pub const SOURCE_NAME: &str = "test";

/// Declare a test over one source text.
///
/// - `printed`: `Ok(text)` is the pretty-printed parse tree, which must also
///   parse back to the same tree; `Err(text)` is a fragment of the parse
///   error message.
/// - `optimised`: the pretty-printed optimised tree.
/// - `value`: `Ok(text)` is the displayed result of running the expression
///   against the default prelude; `Err(text)` is the full error display.
macro_rules! test_case {
    (
        $name:ident,
        input: $input:expr
        $(, printed: $printed:expr)?
        $(, optimised: $optimised:expr)?
        $(, value: $value:expr)?
        $(,)?
    ) => {
        #[test]
        fn $name() {
            let input: &str = $input;
            $( crate::cases::check_printed(input, $printed); )?
            $( crate::cases::check_optimised(input, $optimised); )?
            $( crate::cases::check_value(input, $value); )?
        }
    };
}

pub fn check_printed(input: &str, expected: Result<&str, &str>) {
    match (parse(SOURCE_NAME, input), expected) {
        (Ok(expr), Ok(printed)) => {
            assert_eq!(expr.to_string(), printed);
            let reparsed = parse(SOURCE_NAME, printed)
                .unwrap_or_else(|e| panic!("printed form does not parse: {}\n{}", printed, e));
            assert_eq!(reparsed, expr);
        }
        (Err(err), Err(fragment)) => {
            let message = err.to_string();
            assert!(message.contains(fragment), "{:?} not in {:?}", fragment, message);
        }
        (Ok(expr), Err(_)) => panic!("expected a parse error, got {}", expr),
        (Err(err), Ok(_)) => panic!("unexpected parse error: {}", err),
    }
}

pub fn check_optimised(input: &str, expected: &str) {
    let expr = parse(SOURCE_NAME, input).unwrap_or_else(|e| panic!("parse failed: {}", e));
    assert_eq!(expr.optimise().to_string(), expected);
}

pub fn check_value(input: &str, expected: Result<&str, &str>) {
    let engine = Engine::new(EngineOptions::default(), |_| {});
    let result = engine.compile(SOURCE_NAME, input).and_then(|expr| expr.run());
    match (result, expected) {
        (Ok(value), Ok(text)) => assert_eq!(value.to_string(), text),
        (Err(err), Err(text)) => assert_eq!(err.to_string(), text),
        (Ok(value), Err(_)) => panic!("expected an error, got {}", value),
        (Err(err), Ok(_)) => panic!("unexpected error: {}", err),
    }
}
