use super::api::{ModuleParser, Rule};
use super::ast::*;

use pest::consumes_to;
use pest::parses_to;

#[test]
fn test_integer_literal() {
    parses_to! {
        parser: ModuleParser,
        input: "-10",
        rule: Rule::integer_literal,
        tokens: [
            integer_literal(0, 3)
        ]
    };
}

#[test]
fn test_single_quoted_string_literal() {
    parses_to! {
        parser: ModuleParser,
        input: r"'a\n'",
        rule: Rule::string_literal,
        tokens: [
            string_literal(0, 5, [
                single_quoted(1, 4)
            ])
        ]
    };
}

#[test]
fn test_call_with_member_suffix() {
    parses_to! {
        parser: ModuleParser,
        input: "f(3).x",
        rule: Rule::expression,
        tokens: [
            expression(0, 6, [
                identifier(0, 1),
                call_suffix(1, 4, [
                    expression(2, 3, [
                        integer_literal(2, 3)
                    ])
                ]),
                member_suffix(4, 6, [
                    identifier(5, 6)
                ])
            ])
        ]
    };
}

#[test]
fn test_keyword_prefix_is_an_identifier() {
    parses_to! {
        parser: ModuleParser,
        input: "definition",
        rule: Rule::identifier,
        tokens: [
            identifier(0, 10)
        ]
    };
}

#[test]
fn test_parse_fixture_shaped_module() {
    let source = r#"
# version marker
__version__ = '1.2.3'
def f(x) = x
class Flork {
    def echo(self, x) = x
}
"#;
    let ast = ModuleParser::parse_to_ast_from_str(source).unwrap();
    assert_eq!(ast.body.len(), 3);

    match &ast.body[0] {
        Statement::Assignment(a) => {
            assert_eq!(a.target.name, "__version__");
            match &a.value {
                Expression::Literal(l) => {
                    assert_eq!(l.value, LiteralType::StringLiteral("1.2.3".to_string()))
                }
                other => panic!("Expected literal, got {:?}", other),
            }
        }
        other => panic!("Expected assignment, got {:?}", other),
    }

    match &ast.body[1] {
        Statement::FunctionDef(f) => {
            assert_eq!(f.id.name, "f");
            assert_eq!(f.params.len(), 1);
            assert_eq!(f.params[0].name, "x");
        }
        other => panic!("Expected function, got {:?}", other),
    }

    match &ast.body[2] {
        Statement::ClassDef(c) => {
            assert_eq!(c.id.name, "Flork");
            assert_eq!(c.members.len(), 1);
            match &c.members[0] {
                ClassMember::Method(m) => {
                    assert_eq!(m.id.name, "echo");
                    let params: Vec<&str> = m.params.iter().map(|p| p.name.as_str()).collect();
                    assert_eq!(params, vec!["self", "x"]);
                }
                other => panic!("Expected method, got {:?}", other),
            }
        }
        other => panic!("Expected class, got {:?}", other),
    }
}

#[test]
fn test_expression_statement_and_literals() {
    let ast = ModuleParser::parse_to_ast_from_str(
        "print(None, True, False, 2.5, \"tab\\there\")",
    )
    .unwrap();
    assert_eq!(ast.body.len(), 1);
    match &ast.body[0] {
        Statement::Expression(Expression::Call { callee, arguments, .. }) => {
            match &**callee {
                Expression::Identifier(id) => assert_eq!(id.name, "print"),
                other => panic!("Expected identifier, got {:?}", other),
            }
            let values: Vec<&LiteralType> = arguments
                .iter()
                .map(|a| match a {
                    Expression::Literal(l) => &l.value,
                    other => panic!("Expected literal, got {:?}", other),
                })
                .collect();
            assert_eq!(
                values,
                vec![
                    &LiteralType::NoneLiteral,
                    &LiteralType::BooleanLiteral(true),
                    &LiteralType::BooleanLiteral(false),
                    &LiteralType::FloatLiteral(2.5),
                    &LiteralType::StringLiteral("tab\there".to_string()),
                ]
            );
        }
        other => panic!("Expected call statement, got {:?}", other),
    }
}

#[test]
fn test_empty_module() {
    let ast = ModuleParser::parse_to_ast_from_str("  # nothing here\n").unwrap();
    assert!(ast.body.is_empty());
}

#[test]
fn test_syntax_errors() {
    assert!(ModuleParser::parse_to_ast_from_str("def = 3").is_err());
    assert!(ModuleParser::parse_to_ast_from_str("x = ").is_err());
    assert!(ModuleParser::parse_to_ast_from_str("class Foo { print(1) }").is_err());
    assert!(ModuleParser::parse_to_ast_from_str("'unterminated").is_err());
}

#[test]
fn test_duplicate_parameter_rejected() {
    let err = ModuleParser::parse_to_ast_from_str("def g(a, a) = a").unwrap_err();
    assert!(err.to_string().contains("Duplicate parameter 'a'"));
}

#[test]
fn test_suffix_on_next_line_starts_a_new_statement() {
    let ast = ModuleParser::parse_to_ast_from_str("a = b\n(c)\n").unwrap();
    assert_eq!(ast.body.len(), 2);
    match &ast.body[0] {
        Statement::Assignment(a) => match &a.value {
            Expression::Identifier(id) => assert_eq!(id.name, "b"),
            other => panic!("Expected identifier, got {:?}", other),
        },
        other => panic!("Expected assignment, got {:?}", other),
    }
    match &ast.body[1] {
        Statement::Expression(Expression::Identifier(id)) => assert_eq!(id.name, "c"),
        other => panic!("Expected expression statement, got {:?}", other),
    }

    let ast = ModuleParser::parse_to_ast_from_str("x = m\n.y\n");
    assert!(ast.is_err());
}

#[test]
fn test_newlines_allowed_inside_parentheses() {
    let source = "x = f(\n  1,  # first\n  2,\n)\ny = (\n  z\n)\nw = g (3).h\n";
    let ast = ModuleParser::parse_to_ast_from_str(source).unwrap();
    assert_eq!(ast.body.len(), 3);
    match &ast.body[0] {
        Statement::Assignment(a) => match &a.value {
            Expression::Call { arguments, .. } => assert_eq!(arguments.len(), 2),
            other => panic!("Expected call, got {:?}", other),
        },
        other => panic!("Expected assignment, got {:?}", other),
    }
    match &ast.body[1] {
        Statement::Assignment(a) => match &a.value {
            Expression::Identifier(id) => assert_eq!(id.name, "z"),
            other => panic!("Expected identifier, got {:?}", other),
        },
        other => panic!("Expected assignment, got {:?}", other),
    }
    match &ast.body[2] {
        Statement::Assignment(a) => match &a.value {
            Expression::Member { property, .. } => assert_eq!(property.name, "h"),
            other => panic!("Expected member access, got {:?}", other),
        },
        other => panic!("Expected assignment, got {:?}", other),
    }
}
