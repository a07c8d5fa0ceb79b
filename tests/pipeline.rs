use lox_eval::{run_command, Command, Error, ErrorKind};

fn run(command: Command, source: &str) -> (String, Result<(), Error>) {
    let mut out = Vec::new();
    let result = run_command(command, source.as_bytes(), &mut out);
    (String::from_utf8(out).unwrap(), result)
}

#[test]
fn command_names() {
    assert_eq!("tokenize".parse::<Command>().unwrap(), Command::Tokenize);
    assert_eq!("parse".parse::<Command>().unwrap(), Command::Parse);
    assert_eq!("evaluate".parse::<Command>().unwrap(), Command::Evaluate);
    assert_eq!("run".parse::<Command>().unwrap(), Command::Run);

    let err = "compile".parse::<Command>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert_eq!(err.to_string(), "Unknown command: compile");
}

#[test]
fn tokenize_prints_one_line_per_token() {
    let (out, result) = run(Command::Tokenize, "var x = (45 + \"hi\");");
    assert!(result.is_ok());
    assert_eq!(
        out,
        "VAR var null\n\
         IDENTIFIER x null\n\
         EQUAL = null\n\
         LEFT_PAREN ( null\n\
         NUMBER 45 45.0\n\
         PLUS + null\n\
         STRING \"hi\" hi\n\
         RIGHT_PAREN ) null\n\
         SEMICOLON ; null\n\
         EOF  null\n"
    );
}

#[test]
fn tokenize_empty_file() {
    let (out, result) = run(Command::Tokenize, "");
    assert!(result.is_ok());
    assert_eq!(out, "EOF  null\n");
}

#[test]
fn tokenize_still_prints_tokens_on_lexical_errors() {
    let (out, result) = run(Command::Tokenize, "($\n\"open");
    assert_eq!(out, "LEFT_PAREN ( null\nEOF  null\n");

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lexical);
    assert_eq!(
        err.to_string(),
        "[line 1] Error: Unexpected character: $\n[line 2] Error: Unterminated string."
    );
}

#[test]
fn lexical_errors_stop_before_parsing() {
    for command in [Command::Parse, Command::Evaluate, Command::Run] {
        let (out, result) = run(command, "print 1 @;");
        assert_eq!(out, "", "{}", command);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Lexical);
    }
}

#[test]
fn parse_prints_ast() {
    let (out, result) = run(Command::Parse, "-123 * (45.67)");
    assert!(result.is_ok());
    assert_eq!(out, "(* (- 123.0) (group 45.67))\n");

    let (out, _) = run(Command::Parse, "\"foo\" != nil == !true");
    assert_eq!(out, "(== (!= foo nil) (! true))\n");
}

#[test]
fn parse_reports_syntax_errors() {
    let (out, result) = run(Command::Parse, "(1 + 2");
    assert_eq!(out, "");
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(
        err.to_string(),
        "[line 1] Error at end: Expect ')' after expression."
    );
}

#[test]
fn evaluate_prints_runtime_text() {
    let cases = [
        ("6 / 2", "3"),
        ("10 / 4", "2.5"),
        ("\"foo\" + \"bar\"", "foobar"),
        ("!nil", "true"),
        ("!0", "false"),
        ("nil == nil", "true"),
        ("nil == false", "false"),
        ("nil", "nil"),
        ("(1 + 2) * -3", "-9"),
        ("\"10\" == 10", "false"),
    ];
    for (source, expected) in cases {
        let (out, result) = run(Command::Evaluate, source);
        assert!(result.is_ok(), "{}", source);
        assert_eq!(out, format!("{}\n", expected), "{}", source);
    }
}

#[test]
fn evaluate_reports_runtime_errors() {
    let (out, result) = run(Command::Evaluate, "\"foo\" + 1");
    assert_eq!(out, "");
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Runtime);
    assert_eq!(
        err.to_string(),
        "Operands must be two numbers or two strings.\n[line 1]"
    );
}

#[test]
fn run_prints_each_statement() {
    let (out, result) = run(Command::Run, "print 1 + 1;\nprint \"ok\";\n");
    assert!(result.is_ok());
    assert_eq!(out, "2\nok\n");
}

#[test]
fn run_keeps_output_before_a_runtime_error() {
    let source = "print \"one\";\nprint 2 * 3;\nprint -true;\nprint \"never\";";
    let (out, result) = run(Command::Run, source);
    assert_eq!(out, "one\n6\n");
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Runtime);
    assert_eq!(err.to_string(), "Operand must be a number.\n[line 3]");
}

#[test]
fn run_reports_missing_semicolon() {
    let (out, result) = run(Command::Run, "print \"a\";\nprint \"b\"");
    assert_eq!(out, "");
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.to_string(), "[line 2] Error at end: Expect ';' after value.");
}

#[test]
fn run_with_comments_and_blank_lines() {
    let source = "// leading comment\n\nprint (5 - (3 - 1)) + -1; // trailing\n";
    let (out, result) = run(Command::Run, source);
    assert!(result.is_ok());
    assert_eq!(out, "2\n");
}
