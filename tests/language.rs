use std::fs::{self};

use complexa::{
    Complex, Error, Scope, Value, evaluate,
    error::{ParseError, RuntimeError},
    interpreter::lexer::Token,
    parse, run_script, tokenize,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run_script(&code, &mut Scope::new()) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```complexa") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_displays(src: &str, expected: &str) {
    match evaluate(src, &Scope::new()) {
        Ok(value) => assert_eq!(value.to_string(), expected, "evaluating {src}"),
        Err(e) => panic!("Evaluating {src} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if evaluate(src, &Scope::new()).is_ok() {
        panic!("{src} evaluated but was expected to fail")
    }
}

fn scope_with_x(x: impl Into<Complex>) -> Scope {
    let mut scope = Scope::new();
    scope.bind('x', x.into());
    scope
}

#[test]
fn tokens_carry_byte_positions() {
    let tokens = tokenize("3.5x^2").unwrap();
    assert_eq!(tokens,
               vec![(Token::Number(3.5), 0),
                    (Token::Variable('x'), 3),
                    (Token::Caret, 4),
                    (Token::Number(2.0), 5)]);

    let tokens = tokenize("2π - e").unwrap();
    assert_eq!(tokens,
               vec![(Token::Number(2.0), 0), (Token::Pi, 1), (Token::Minus, 4), (Token::Euler, 6)]);
}

#[test]
fn brackets_of_every_kind_are_tokens() {
    let tokens: Vec<Token> = tokenize("([{}])").unwrap().into_iter().map(|(t, _)| t).collect();
    assert_eq!(tokens,
               vec![Token::LParen,
                    Token::LBracket,
                    Token::LBrace,
                    Token::RBrace,
                    Token::RBracket,
                    Token::RParen]);
}

#[test]
fn unknown_characters_are_invalid_tokens() {
    assert_eq!(tokenize("1 + #"),
               Err(ParseError::InvalidToken { token:    "#".to_string(),
                                              position: 4, }));
    assert_eq!(tokenize("1.2.3"),
               Err(ParseError::InvalidToken { token:    "1.2.3".to_string(),
                                              position: 0, }));
    assert!(tokenize("X").is_err());
}

#[test]
fn basic_arithmetic() {
    assert_displays("1 + 2 + 3", "6");
    assert_displays("1 - 2 - 3", "-4");
    assert_displays("8 / 2 / 2", "2");
    assert_displays("10 / 4", "2.5");
    assert_displays("2 + 3 * 4", "14");
    assert_displays("(2 + 3) * 4", "20");
}

#[test]
fn implicit_multiplication() {
    assert_displays("2 3", "6");
    assert_displays("2(3 + 4)5", "70");
    assert_displays("[1 + 1]{3}", "6");
    assert_displays("(1 + 2i)(3 - i)", "5+5i");
    assert_displays("2i", "2i");
}

#[test]
fn powers_are_right_associative() {
    assert_displays("2^3^2", "512");
    assert_displays("2^10", "1024");
}

#[test]
fn power_exponent_absorbs_implicit_product() {
    let value = scope_with_x(2).evaluate(&parse("2^3x").unwrap()).unwrap();
    assert_eq!(value, Value::Scalar(Complex::from(64)));
}

#[test]
fn unary_minus_binds_to_one_value() {
    let value = scope_with_x(3).evaluate(&parse("-x").unwrap()).unwrap();
    assert_eq!(value, Value::Scalar(Complex::from(-3)));

    assert_displays("-2 + 5", "3");
    assert_displays("4 - -1", "5");
}

#[test]
fn constants() {
    assert_displays("i", "i");
    assert_displays("1+i", "1+i");
    assert_displays("(-1)^(1/2)", "i");
    assert_displays("-i", "-i");
    assert_displays("e^(πi)", "-1");
    assert_displays("i^2", "-1");
    assert_displays("i * i", "-1");
}

#[test]
fn domain_problems_are_not_errors() {
    assert_displays("1 / 0", "NaN");
    assert_displays("0^0", "1");
    assert_displays("0^2", "0");
    assert_displays("0^-1", "Infinity");
}

#[test]
fn malformed_expressions() {
    assert_failure("");
    assert_failure("1 +");
    assert_failure("+1");
    assert_failure("(1 + 2");
    assert_failure("(1 + 2]");
    assert_failure("1 2 )");
    assert_failure("2 * * 3");
}

#[test]
fn parse_errors_report_positions() {
    assert_eq!(parse("1 +").unwrap_err().position(), 3);
    assert_eq!(parse("1 2 )").unwrap_err().position(), 4);
    assert_eq!(parse("(1 + 2]").unwrap_err().position(), 6);
}

#[test]
fn unbound_variables_are_reported() {
    assert_eq!(evaluate("x + 1", &Scope::new()),
               Err(Error::Runtime(RuntimeError::UnboundVariable { name: 'x' })));
}

#[test]
fn coefficients_scale_bound_values() {
    let scope = scope_with_x(Complex::new(1.0, 1.0));
    assert_eq!(scope.evaluate(&parse("3x").unwrap()).unwrap().to_string(), "3+3i");
    assert_eq!(scope.evaluate(&parse("x i").unwrap()).unwrap().to_string(), "-1+i");
}

#[test]
fn lists_broadcast_as_cross_products() {
    let mut scope = Scope::new();
    scope.bind('x', vec![Complex::from(2), Complex::from(-2)]);
    scope.bind('y', vec![Complex::from(1), Complex::from(10)]);

    assert_eq!(scope.evaluate(&parse("x + 1").unwrap()).unwrap().to_string(), "[3, -1]");
    assert_eq!(scope.evaluate(&parse("x + y").unwrap()).unwrap().to_string(),
               "[3, 12, -1, 8]");
    assert_eq!(scope.evaluate(&parse("x * x").unwrap()).unwrap().to_string(),
               "[4, -4, -4, 4]");
}

#[test]
fn scripts_skip_blank_lines_and_comments() {
    let mut scope = Scope::new();
    let script = "// setup\n\nx^2 = 4\n\n// derived\ny = x + 1\n";
    let results = run_script(script, &mut scope).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(scope.to_string(), "{x = [2, -2], y = [3, -1]}");
}

#[test]
fn script_errors_carry_line_numbers() {
    let err = run_script("x = 2\n\ny = z + 1", &mut Scope::new()).unwrap_err();
    match err {
        Error::Script { line, source } => {
            assert_eq!(line, 3);
            assert_eq!(*source,
                       Error::Runtime(RuntimeError::InvalidEquation {
                           details: "both sides contain a variable".to_string(),
                       }));
        },
        other => panic!("expected a script error, got {other:?}"),
    }
}
