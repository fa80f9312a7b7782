use std::{
    fs,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use polite::{
    Outcome,
    error::{Error, LexError, ParseError, RuntimeError, Stage, TimeoutReason},
    interpreter::{
        evaluator::limits::Limits,
        lexer::{Position, Token, tokenize},
        parser::utils::MAX_NESTING_DEPTH,
        value::core::Value,
    },
    run, run_with_limits,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "polite")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out")).unwrap_or_else(|e| {
                           panic!("Missing expected output for {path:?}: {e}")
                       });

        count += 1;
        match run(&source) {
            Ok(outputs) => {
                let rendered: Vec<String> = outputs.iter().map(ToString::to_string).collect();
                let expected: Vec<&str> = expected.lines().collect();
                assert_eq!(rendered, expected, "Program {path:?} printed the wrong output");
            },
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

fn assert_outputs(src: &str, expected: &[Value]) {
    match run(src) {
        Ok(outputs) => assert_eq!(outputs, expected, "Unexpected output for {src:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match run(src) {
        Ok(outputs) => panic!("Script succeeded with {outputs:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn empty_programs() {
    assert_outputs("hello goodbye", &[]);
    assert_outputs("hello please thankyou goodbye", &[]);
    assert_outputs("hello\n\tplease   thankyou\n  please thankyou\ngoodbye\n", &[]);
}

#[test]
fn say_statements() {
    assert_outputs("hello please say 1 thankyou goodbye", &[Value::Integer(1)]);
    assert_outputs("hello please say \"hi\" thankyou please say 2 thankyou goodbye",
                   &[Value::from("hi"), Value::Integer(2)]);
}

#[test]
fn arithmetic() {
    assert_outputs("hello please say 1+2 thankyou goodbye", &[Value::Integer(3)]);
    assert_outputs("hello please say 1*2 thankyou goodbye", &[Value::Integer(2)]);
    assert_outputs("hello please say 2-1 thankyou goodbye", &[Value::Integer(1)]);
    assert_outputs("hello please say 2-3-4 thankyou goodbye", &[Value::Integer(-5)]);
    assert_outputs("hello please say 1+2*3 thankyou goodbye", &[Value::Integer(7)]);
    assert_outputs("hello please say (1+2)*3 thankyou goodbye", &[Value::Integer(9)]);
}

#[test]
fn division_is_true_division() {
    assert_outputs("hello please say 6/3 thankyou goodbye", &[Value::Real(2.0)]);
    assert_outputs("hello please say 1/4 thankyou goodbye", &[Value::Real(0.25)]);
    assert_outputs("hello please say 8/2/2 thankyou goodbye", &[Value::Real(2.0)]);
    assert_outputs("hello please say 7 + 3 * (10 / (12 / (3 + 1) - 1)) thankyou goodbye",
                   &[Value::Real(22.0)]);
}

#[test]
fn unary_operations() {
    assert_outputs("hello please say 1+-1 thankyou goodbye", &[Value::Integer(0)]);
    assert_outputs("hello please say --2 thankyou goodbye", &[Value::Integer(2)]);
    assert_outputs("hello please say -+3 thankyou goodbye", &[Value::Integer(-3)]);
    assert_outputs("hello please say -(1/2) thankyou goodbye", &[Value::Real(-0.5)]);
}

#[test]
fn comparisons() {
    assert_outputs("hello please say 1+2 is 3 thankyou goodbye", &[Value::Bool(true)]);
    assert_outputs("hello please say 1+2 is 4 thankyou goodbye", &[Value::Bool(false)]);
    assert_outputs("hello please say 1+2 isnt 4 thankyou goodbye", &[Value::Bool(true)]);
    assert_outputs("hello please say 6/3 is 2 thankyou goodbye", &[Value::Bool(true)]);
    assert_outputs("hello please say \"a\" is \"a\" thankyou goodbye", &[Value::Bool(true)]);
    assert_outputs("hello please say \"1\" is 1 thankyou goodbye", &[Value::Bool(false)]);
}

#[test]
fn comparison_chains_fold_left() {
    // (1 is 1) is 1 compares a boolean with an integer.
    assert_outputs("hello please say 1 is 1 is 1 thankyou goodbye", &[Value::Bool(false)]);
    assert_outputs("hello please say 1 is 2 is (3 is 4) thankyou goodbye",
                   &[Value::Bool(true)]);
}

#[test]
fn conditionals() {
    assert_outputs("hello please perchance 1+2 is 3 naturally please say 3 thankyou thankyou goodbye",
                   &[Value::Integer(3)]);
    assert_outputs("hello please perchance 1+2 is 4 naturally please say 3 thankyou thankyou goodbye",
                   &[]);
    assert_outputs("hello please perchance 1 is 1 naturally thankyou please say 0 thankyou goodbye",
                   &[Value::Integer(0)]);
}

#[test]
fn skipped_bodies_have_no_effects() {
    assert_outputs("hello please call a 1 thankyou please perchance 1 is 2 naturally please call a \
                    2 thankyou please say undefined thankyou thankyou please say a thankyou goodbye",
                   &[Value::Integer(1)]);
}

#[test]
fn nested_conditionals() {
    assert_outputs("hello please perchance 1 is 1 naturally please perchance 2 is 2 naturally \
                    please say 1 thankyou thankyou please say 2 thankyou thankyou goodbye",
                   &[Value::Integer(1), Value::Integer(2)]);
}

#[test]
fn while_loops() {
    assert_outputs("hello please call a 1 thankyou please whilst a isnt 3 naturally please call a \
                    a+1 thankyou thankyou please say a thankyou goodbye",
                   &[Value::Integer(3)]);
    assert_outputs("hello please whilst 1 is 2 naturally please say 1 thankyou thankyou goodbye",
                   &[]);
}

#[test]
fn assignments_overwrite() {
    assert_outputs("hello please call a 1 thankyou please call a \"one\" thankyou please say a \
                    thankyou goodbye",
                   &[Value::from("one")]);
    assert_outputs("hello please call flag 1 is 1 thankyou please perchance flag naturally please \
                    say flag thankyou thankyou goodbye",
                   &[Value::Bool(true)]);
}

#[test]
fn bare_expressions_produce_no_output() {
    assert_outputs("hello please 1+2 thankyou goodbye", &[]);
    assert!(matches!(assert_failure("hello please missing thankyou goodbye"),
                     Error::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn runs_do_not_share_variables() {
    assert_outputs("hello please call a 5 thankyou please say a thankyou goodbye",
                   &[Value::Integer(5)]);
    let error = assert_failure("hello please say a thankyou goodbye");
    assert_eq!(error.kind(), "UndefinedVariable");
}

#[test]
fn repeated_runs_are_identical() {
    let source = "hello please call a 2 thankyou please say a * a thankyou please say a / 4 \
                  thankyou goodbye";
    let first = run(source).unwrap();
    assert_eq!(first, run(source).unwrap());
    assert_eq!(first, vec![Value::Integer(4), Value::Real(0.5)]);
}

#[test]
fn string_escapes() {
    assert_outputs(r#"hello please say "say \"please\"" thankyou goodbye"#,
                   &[Value::from("say \"please\"")]);
    assert_outputs(r#"hello please say "a\\b\tc\nd\q" thankyou goodbye"#,
                   &[Value::from("a\\b\tc\nd\\q")]);
}

#[test]
fn keywords_take_priority_over_identifiers() {
    let tokens: Vec<Token> = tokenize("is isnt isnta sayer say").unwrap()
                                                                .into_iter()
                                                                .map(|(token, _)| token)
                                                                .collect();
    assert_eq!(tokens,
               vec![Token::Is,
                    Token::Isnt,
                    Token::Identifier("isnta".to_string()),
                    Token::Identifier("sayer".to_string()),
                    Token::Say,
                    Token::Eof]);
}

#[test]
fn lexemes_round_trip() {
    let source = "hello please call total2 (1 + 20) * -3 / x thankyou please say \"hi there\" \
                  isnt total2 thankyou goodbye";
    let lexemes: Vec<String> = tokenize(source).unwrap()
                                               .into_iter()
                                               .filter(|(token, _)| *token != Token::Eof)
                                               .map(|(token, _)| token.to_string())
                                               .collect();
    let squeeze = |text: &str| text.chars().filter(|c| *c != ' ').collect::<String>();

    assert_eq!(squeeze(&lexemes.concat()), squeeze(source));
}

#[test]
fn token_positions() {
    let tokens = tokenize("hello\n  please \"a\nb\" thankyou").unwrap();
    let positions: Vec<Position> = tokens.iter().map(|(_, position)| *position).collect();

    assert_eq!(positions,
               vec![Position { line: 1, column: 1 },
                    Position { line: 2, column: 3 },
                    Position { line: 2, column: 10 },
                    Position { line: 3, column: 4 },
                    Position { line: 3, column: 12 }]);
}

#[test]
fn lexer_errors() {
    match assert_failure("<") {
        Error::Lex(LexError::UnexpectedCharacter { character, position }) => {
            assert_eq!(character, '<');
            assert_eq!(position, Position { line: 1, column: 1 });
        },
        other => panic!("Expected an unexpected character error, found {other:?}"),
    }

    assert!(matches!(assert_failure("hello please say \"never closed thankyou goodbye"),
                     Error::Lex(LexError::UnterminatedString { .. })));
    assert!(matches!(assert_failure("hello please say 99999999999999999999 thankyou goodbye"),
                     Error::Lex(LexError::IntegerOutOfRange { .. })));
    assert!(matches!(assert_failure("hello please say a_b thankyou goodbye"),
                     Error::Lex(LexError::UnexpectedCharacter { character: '_', .. })));
}

#[test]
fn identifiers_may_use_any_script() {
    assert_outputs("hello please call café 1 thankyou please call größe2 café + 1 thankyou please \
                    say größe2 thankyou goodbye",
                   &[Value::Integer(2)]);

    let tokens = tokenize("say café naïve").unwrap();
    assert_eq!(tokens[1], (Token::Identifier("café".to_string()), Position { line: 1, column: 5 }));
    assert_eq!(tokens[2].1, Position { line: 1, column: 10 });
}

#[test]
fn lexer_errors_win_over_parse_errors() {
    assert_eq!(assert_failure("goodbye hello ;").stage(), Stage::Lex);
}

#[test]
fn parse_errors() {
    assert!(matches!(assert_failure("hello 1+2"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert_eq!(assert_failure("please say 1 thankyou goodbye").stage(), Stage::Parse);
    assert_eq!(assert_failure("hello please say 1 goodbye").stage(), Stage::Parse);
    assert_eq!(assert_failure("hello please say 1 thankyou").stage(), Stage::Parse);
    assert_eq!(assert_failure("hello please say (1 thankyou goodbye").stage(), Stage::Parse);
    assert_eq!(assert_failure("hello please call 1 2 thankyou goodbye").stage(), Stage::Parse);
    assert_eq!(assert_failure("hello please perchance 1 is 1 please say 1 thankyou thankyou \
                               goodbye")
               .stage(),
               Stage::Parse);
    assert_eq!(assert_failure("hello goodbye goodbye").stage(), Stage::Parse);
}

#[test]
fn parse_error_details() {
    match assert_failure("hello\nplease say 1 goodbye") {
        Error::Parse(ParseError::UnexpectedToken { expected,
                                                   found,
                                                   position, }) => {
            assert_eq!(expected, "'thankyou'");
            assert_eq!(found, "'goodbye'");
            assert_eq!(position, Position { line: 2, column: 14 });
        },
        other => panic!("Expected a parse error, found {other:?}"),
    }
}

#[test]
fn runtime_errors() {
    match assert_failure("hello please say 1 thankyou please say nobody thankyou goodbye") {
        Error::Runtime(RuntimeError::UndefinedVariable { name, line }) => {
            assert_eq!(name, "nobody");
            assert_eq!(line, 1);
        },
        other => panic!("Expected an undefined variable error, found {other:?}"),
    }

    assert!(matches!(assert_failure("hello please say 1/0 thankyou goodbye"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("hello please say 1/(2-2) thankyou goodbye"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("hello please say 1 + \"one\" thankyou goodbye"),
                     Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(assert_failure("hello please say -\"one\" thankyou goodbye"),
                     Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(assert_failure("hello please perchance 1 naturally thankyou goodbye"),
                     Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(assert_failure("hello please whilst \"yes\" naturally thankyou goodbye"),
                     Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(assert_failure("hello please say 9223372036854775807 + 1 thankyou goodbye"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn division_by_zero_is_checked_first() {
    assert!(matches!(assert_failure("hello please say 9007199254740993 / 0 thankyou goodbye"),
                     Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));
    assert!(matches!(assert_failure("hello please say -9223372036854775807 / (1/2 - 1/2) thankyou \
                                     goodbye"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn large_integers_round_to_reals() {
    assert_outputs("hello please say 9007199254740993 / 1 thankyou goodbye",
                   &[Value::Real(9_007_199_254_740_992.0)]);
    assert_outputs("hello please say 9007199254740993 + 1/2 thankyou goodbye",
                   &[Value::Real(9_007_199_254_740_992.0)]);
    assert_outputs("hello please say 9223372036854775807 / 2 thankyou goodbye",
                   &[Value::Real(4_611_686_018_427_387_904.0)]);
    // Equality stays exact even though division rounds.
    assert_outputs("hello please say 9007199254740993 is 9007199254740993 / 1 thankyou goodbye",
                   &[Value::Bool(false)]);
}

#[test]
fn infinite_reals_overflow() {
    let error = assert_failure("hello please call x 2/1 thankyou please whilst 1 is 1 naturally \
                                please call x x * x thankyou thankyou goodbye");
    assert!(matches!(error, Error::Runtime(RuntimeError::Overflow { line: 1 })));
    assert_eq!(error.to_string(),
               "Error on line 1: Numeric overflow while trying to compute result.");
}

#[test]
fn real_display() {
    let rendered = |value: f64| Value::Real(value).to_string();

    assert_eq!(rendered(2.0), "2.0");
    assert_eq!(rendered(-0.5), "-0.5");
    assert_eq!(rendered(0.0001), "0.0001");
    assert_eq!(rendered(1e15), "1000000000000000.0");
    assert_eq!(rendered(1e16), "1e+16");
    assert_eq!(rendered(-1.5e20), "-1.5e+20");
    assert_eq!(rendered(1e-5), "1e-05");
    assert_eq!(rendered(2.5e-7), "2.5e-07");
    assert_eq!(rendered(1e100), "1e+100");

    let outputs = run("hello please say 10000000000000000 / 1 thankyou goodbye").unwrap();
    assert_eq!(outputs[0].to_string(), "1e+16");
}

#[test]
fn nesting_within_the_limit() {
    let parens = format!("hello please say {}1{} thankyou goodbye", "(".repeat(200), ")".repeat(200));
    assert_outputs(&parens, &[Value::Integer(1)]);

    let negations = format!("hello please say {}1 thankyou goodbye", "-".repeat(200));
    assert_outputs(&negations, &[Value::Integer(1)]);

    let sum = format!("hello please say 1{} thankyou goodbye", "+1".repeat(200));
    assert_outputs(&sum, &[Value::Integer(201)]);

    let bodies = format!("hello {}please say 1 thankyou {}goodbye",
                         "please perchance 1 is 1 naturally ".repeat(100),
                         "thankyou ".repeat(100));
    assert_outputs(&bodies, &[Value::Integer(1)]);
}

#[test]
fn deep_nesting_is_a_parse_error() {
    let parens = format!("hello please say {}1{} thankyou goodbye",
                         "(".repeat(10_001),
                         ")".repeat(10_001));
    match assert_failure(&parens) {
        Error::Parse(ParseError::NestingTooDeep { limit, position }) => {
            assert_eq!(limit, MAX_NESTING_DEPTH);
            assert_eq!(position, Position { line: 1, column: 18 + MAX_NESTING_DEPTH });
        },
        other => panic!("Expected a nesting error, found {other:?}"),
    }

    let negations = format!("hello please say {}1 thankyou goodbye", "-".repeat(100_000));
    assert_eq!(assert_failure(&negations).stage(), Stage::Parse);

    let sum = format!("hello please say 1{} thankyou goodbye", "+1".repeat(100_000));
    assert_eq!(assert_failure(&sum).kind(), "NestingTooDeep");

    let bodies = format!("hello {}goodbye",
                         "please perchance 1 is 1 naturally ".repeat(10_000)
                         + &"thankyou ".repeat(10_000));
    assert_eq!(assert_failure(&bodies).kind(), "NestingTooDeep");
}

#[test]
fn step_limit_stops_runaway_loops() {
    let source = "hello please whilst 1 is 1 naturally please thankyou thankyou goodbye";
    let error = run_with_limits(source, Limits::default().with_max_steps(100)).unwrap_err();

    assert!(matches!(error,
                     Error::Runtime(RuntimeError::Timeout { reason: TimeoutReason::StepLimit(100),
                                                            .. })));
}

#[test]
fn step_limit_allows_programs_within_budget() {
    let source = "hello please call a 0 thankyou please whilst a isnt 10 naturally please call a \
                  a + 1 thankyou thankyou please say a thankyou goodbye";

    assert_eq!(run_with_limits(source, Limits::default().with_max_steps(1_000)).unwrap(),
               vec![Value::Integer(10)]);
    assert!(run_with_limits(source, Limits::default().with_max_steps(10)).is_err());
}

#[test]
fn time_limit_stops_runaway_loops() {
    let source = "hello please whilst 1 is 1 naturally please thankyou thankyou goodbye";
    let limits = Limits::default().with_time_limit(Duration::from_millis(20));

    match run_with_limits(source, limits) {
        Err(Error::Runtime(RuntimeError::Timeout { reason: TimeoutReason::TimeLimit(limit),
                                                   .. })) => {
            assert_eq!(limit, Duration::from_millis(20));
        },
        other => panic!("Expected a time limit error, found {other:?}"),
    }
}

#[test]
fn cancellation_flag_stops_the_run() {
    let cancel = Arc::new(AtomicBool::new(false));
    cancel.store(true, Ordering::Relaxed);
    let limits = Limits::default().with_cancel_flag(Arc::clone(&cancel));

    let error = run_with_limits("hello please say 1 thankyou goodbye", limits).unwrap_err();
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::Timeout { reason: TimeoutReason::Cancelled,
                                                            .. })));
}

#[test]
fn outcome_json() {
    let outcome = Outcome::from(run("hello please say 1 thankyou please say 6/3 thankyou please \
                                     say \"x\" thankyou please say 1 is 1 thankyou goodbye"));
    assert_eq!(serde_json::to_string(&outcome).unwrap(),
               r#"{"outputs":[1,2.0,"x",true]}"#);

    let outcome = Outcome::from(run("hello please say 1/0 thankyou goodbye"));
    let json: serde_json::Value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["error"]["stage"], "Runtime");
    assert_eq!(json["error"]["kind"], "DivisionByZero");
    assert_eq!(json["error"]["detail"], "Error on line 1: Division by zero.");
}

#[test]
fn error_info() {
    let info = assert_failure("hello 1+2").info();
    assert_eq!(info.stage, Stage::Parse);
    assert_eq!(info.kind, "UnexpectedToken");
    assert_eq!(info.detail,
               "Error on line 1, column 7: Impolite syntax, expected 'please' but found integer 1.");
}
