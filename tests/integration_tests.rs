//! Integration tests for the end-to-end front end.
//!
//! These tests verify that the complete pipeline works correctly, from
//! source code through tokenization and parsing to the rendered tree and
//! caret diagnostics.

use sqeez::{
    ast::ast::{Expr, NodeKind, Stmt},
    errors::errors::Error,
    format_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

const PROGRAM: &str = r#"// inventory report
const TAX = 0.2
var items = @name: "apple", price: 3, tags: @1, 2

fn total(list, rate) {
    var sum = 0
    for (var item of list) {
        sum += item.price * (1 + rate)
    }
    return sum
}

var names = items |> keys |> map((key) => key |> len)

if (total([items], TAX) >= 10) {
    logw("expensive", total([items], TAX))
} elif (items.price == 0) {
    loge("free?")
} else {
    logc("cheap", #00FF00)
}

var i = 0
do {
    i++
} while (i < 3 && !done)

log(names[0] ? 'y' : "no", -1, null)
"#;

fn compile(source: &str) -> Result<sqeez::ast::ast::Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.sqz".to_string()), false)?;
    parse(tokens, false)
}

#[test]
fn test_parse_full_program() {
    let program = compile(PROGRAM).unwrap();

    let kinds: Vec<NodeKind> = program.body.iter().map(|stmt| stmt.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::VarDeclaration,
            NodeKind::VarDeclaration,
            NodeKind::FunctionDeclaration,
            NodeKind::VarDeclaration,
            NodeKind::ConditionalStatement,
            NodeKind::VarDeclaration,
            NodeKind::DoWhileStatement,
            NodeKind::LogStmt,
        ]
    );
}

#[test]
fn test_parse_full_program_function_body() {
    let program = compile(PROGRAM).unwrap();

    let Stmt::FunctionDeclaration(function) = &program.body[2] else {
        panic!("expected function declaration");
    };
    assert_eq!(function.name.value, "total");
    assert_eq!(function.parameters.len(), 2);

    let body_kinds: Vec<NodeKind> = function.body.iter().map(|stmt| stmt.kind()).collect();
    assert_eq!(
        body_kinds,
        vec![
            NodeKind::VarDeclaration,
            NodeKind::ForOfStatement,
            NodeKind::ReturnStmt,
        ]
    );
}

#[test]
fn test_parse_full_program_short_data() {
    let program = compile(PROGRAM).unwrap();

    let Stmt::VarDeclaration(items) = &program.body[1] else {
        panic!("expected variable declaration");
    };
    let Some(Expr::Object(object)) = &items.declarations[0].1 else {
        panic!("expected short data object");
    };

    let keys: Vec<&str> = object.properties.iter().map(|p| p.key.value.as_str()).collect();
    assert_eq!(keys, vec!["name", "price", "tags"]);
    assert!(matches!(
        &object.properties[2].value,
        Some(Expr::Array(array)) if array.elements.len() == 2
    ));
}

#[test]
fn test_parse_full_program_pipes() {
    let program = compile(PROGRAM).unwrap();

    let Stmt::VarDeclaration(names) = &program.body[3] else {
        panic!("expected variable declaration");
    };
    let Some(Expr::Call(map)) = &names.declarations[0].1 else {
        panic!("expected pipe call");
    };

    assert_eq!(map.method.to_string(), "Identifier: map");
    assert_eq!(map.caller.as_ref().unwrap().kind(), NodeKind::CallExpr);
    assert!(matches!(
        &map.args[0],
        Expr::ShortSingleExpression(single) if single.value.kind() == NodeKind::CallbackFunctionExpr
    ));
}

#[test]
fn test_parse_full_program_conditional() {
    let program = compile(PROGRAM).unwrap();

    let Stmt::Conditional(conditional) = &program.body[4] else {
        panic!("expected conditional");
    };
    assert_eq!(conditional.elif_clauses.len(), 1);

    let else_body = conditional.else_body.as_ref().unwrap();
    let Stmt::Log(log) = &else_body[0] else {
        panic!("expected colored log");
    };
    assert_eq!(log.log_type.plain_text, "logc");
    assert_eq!(log.color.as_ref().unwrap().value, "#00FF00");
}

#[test]
fn test_render_lines() {
    let program = compile("var a = 'x'\nlog(a, \"b\")").unwrap();

    assert_eq!(
        program.to_lines(),
        vec![
            "VarDeclaration: var a = CharLiteral: 'x'".to_string(),
            "log(Identifier: a, StringLiteral: \"b\")".to_string(),
        ]
    );
}

#[test]
fn test_render_is_deterministic() {
    let first = compile(PROGRAM).unwrap().to_string();
    let second = compile(PROGRAM).unwrap().to_string();

    assert_eq!(first, second);
    assert!(first.starts_with("Program:\n  VarDeclaration: const TAX = DoubleLiteral: 0.2\n"));
}

#[test]
fn test_lexer_error_diagnostic() {
    let source = "var a = 1;\nvar b = $;\n";
    let error = compile(source).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(
        format_error(&error, source, "test.sqz"),
        "Error: UnrecognisedToken\n-> test.sqz\n  |\n2 | var b = $;\n  | --------^"
    );
}

#[test]
fn test_parser_error_diagnostic() {
    let source = "if (a {\n}\n";
    let error = compile(source).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 6);
    assert!(format_error(&error, source, "test.sqz")
        .starts_with("Error: UnexpectedToken (expected `)` after `if` condition, got `{`)\n"));
}

#[test]
fn test_deep_nesting_diagnostic() {
    let source = format!("var a = {}1{};\n", "(".repeat(1000), ")".repeat(1000));
    let error = compile(&source).unwrap_err();

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert!(format_error(&error, &source, "test.sqz").starts_with(
        "Error: NestingTooDeep (Expressions and blocks can be nested at most 32 levels deep)\n"
    ));
}
