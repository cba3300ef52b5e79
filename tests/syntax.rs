#[macro_use]
mod cases;

use indoc::indoc;

test_case!(
    simple_addition,
    input: "1 + 2",
    printed: Ok("op + 1 2"),
    value: Ok("3"),
);

test_case!(
    multiplication_binds_tighter,
    input: "1 + 2 * 3",
    printed: Ok("op + 1 (op * 2 3)"),
    value: Ok("7"),
);

test_case!(
    subtraction_is_left_associative,
    input: "10 - 4 - 3",
    printed: Ok("op - (op - 10 4) 3"),
    value: Ok("3"),
);

test_case!(
    power_is_left_associative,
    input: "2 ** 3 ** 2",
    printed: Ok("op ** (op ** 2 3) 2"),
    value: Ok("64"),
);

test_case!(
    prefix_binds_tighter_than_power,
    input: "-2 ** 2",
    printed: Ok("op ** (-2) 2"),
    value: Ok("4"),
);

test_case!(
    prefix_applies_to_whole_application,
    input: "-sqrt 16",
    printed: Ok("-(sqrt 16)"),
    value: Ok("-4"),
);

test_case!(
    juxtaposition_nests_to_the_left,
    input: "f x y",
    printed: Ok("f x y"),
);

test_case!(
    hex_and_octal_numerals,
    input: "0x10 + 0o10",
    printed: Ok("op + 16 8"),
    value: Ok("24"),
);

test_case!(
    exponent_notation,
    input: "1.5e3",
    printed: Ok("1500"),
);

test_case!(
    special_numbers,
    input: "[NaN, Infinity, -Infinity]",
    printed: Ok("[NaN, Infinity, -Infinity]"),
    value: Ok("[NaN, Infinity, -Infinity]"),
);

test_case!(
    operator_variable,
    input: "op + 1 2",
    printed: Ok("op + 1 2"),
    value: Ok("3"),
);

test_case!(
    let_binding,
    input: "let x = 3 in x * x",
    printed: Ok("let x = 3 in op * x x"),
    value: Ok("9"),
);

test_case!(
    let_in_function_position,
    input: "(let f = op * in f) 6 7",
    printed: Ok("(let f = op * in f) 6 7"),
    value: Ok("42"),
);

test_case!(
    identifier_characters,
    input: "let x' = 1 in let $y = 2 in x' + $y",
    value: Ok("3"),
);

test_case!(
    comments_and_newlines,
    input: indoc! {"
        # sum of squares
        let x = [1, 2, 3] # data
        in sum (x ** 2)
    "},
    printed: Ok("let x = [1, 2, 3] in sum (op ** x 2)"),
    value: Ok("14"),
);

test_case!(
    empty_input,
    input: "",
    printed: Err("Parse Error: test:1:1"),
);

test_case!(
    dangling_operator,
    input: "1 +",
    printed: Err("found end of input"),
);

test_case!(
    let_without_equals,
    input: "let x in x",
    printed: Err("expected `=`"),
);

test_case!(
    op_without_operator,
    input: "op x",
    printed: Err("expected operator"),
);

test_case!(
    reserved_equals,
    input: "x = 1",
    printed: Err("Parse Error"),
);

test_case!(
    digit_separators_are_not_numbers,
    input: "1_000",
    printed: Err("Parse Error"),
);

test_case!(
    trailing_comma,
    input: "[1, 2, 3,]",
    printed: Err("Parse Error"),
);

test_case!(
    glued_operators,
    input: "1 +- 2",
    printed: Err("Parse Error"),
);
