//! Integration tests for the front end.
//!
//! These tests drive the public API end to end: source text through the
//! lexer and parser into a `Program` and its diagnostics.

use interpreter::{
    ast::ast::{Expression, Node, Statement},
    display_error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parse_source,
    parser::parser::{parse, Parser},
};

#[test]
fn test_parse_mixed_program() {
    let source = "let five = 5;\nlet neg = -five;\nreturn !neg;\nfive";
    let (program, errors) = parse_source(source);

    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(program.statements.len(), 4);
    assert!(matches!(program.statements[0], Statement::Let(_)));
    assert!(matches!(program.statements[1], Statement::Let(_)));
    assert!(matches!(program.statements[2], Statement::Return(_)));
    assert!(matches!(program.statements[3], Statement::Expression(_)));
    assert_eq!(program.token_literal(), "let");
    assert_eq!(program.to_string(), "let five = 5;\nlet neg = (-five);\nreturn (!neg);\nfive");
}

#[test]
fn test_parser_from_lexer() {
    let lexer = Lexer::new("-15;".to_string(), Some("main.lang".to_string()));
    let mut parser = Parser::new(lexer);
    let program = parser.parse();

    assert!(parser.errors().is_empty());
    let Statement::Expression(stmt) = &program.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::Prefix(prefix) = &stmt.expression else {
        panic!("expected a prefix expression");
    };
    assert_eq!(prefix.operator, "-");
    assert_eq!(prefix.token.kind, TokenKind::Minus);
    assert_eq!(*prefix.token.span.start.1, "main.lang");
}

#[test]
fn test_errors_do_not_stop_parsing() {
    let source = "let = 1;\nlet ok = 2;\n@;\nreturn ok;";
    let (parser, program) = parse(source.to_string(), None);

    assert_eq!(program.statements.len(), 2);
    assert_eq!(
        parser.error_messages(),
        vec![
            "expected next token to be IDENT, got ASSIGN",
            "no prefix parse function for ILLEGAL found",
        ]
    );
}

#[test]
fn test_display_error_on_later_line() {
    let source = "let a = 1;\n  let b 2;";
    let (program, errors) = parse_source(source);

    assert_eq!(program.statements.len(), 1);
    let rendered = display_error(&errors[0], source);
    assert_eq!(
        rendered,
        "Error: UnexpectedToken (expected ASSIGN, did you forget `=`?)\n\
         -> shell\n  \
         |\n\
         2 | let b 2;\n  \
         | ------^\n"
    );
}

#[test]
fn test_independent_parsers() {
    let sources = ["let a = 1;", "return 2;", "!3"];
    let handles: Vec<_> = sources
        .iter()
        .map(|source| {
            let source = source.to_string();
            std::thread::spawn(move || parse_source(&source).0.to_string())
        })
        .collect();

    let printed: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(printed, vec!["let a = 1;", "return 2;", "(!3)"]);
}

#[test]
fn test_deeply_nested_input_reports_instead_of_crashing() {
    // Small stack so an unbounded descent would abort the test run
    let handle = std::thread::Builder::new()
        .stack_size(1024 * 1024)
        .spawn(|| {
            let source = format!("{}5;", "!-".repeat(50_000));
            let (program, errors) = parse_source(&source);
            (program.statements.len(), errors.len())
        })
        .unwrap();

    assert_eq!(handle.join().unwrap(), (0, 1));
}
