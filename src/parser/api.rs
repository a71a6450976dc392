use std::rc::Rc;

use pest::error::{Error, ErrorVariant};
use pest::iterators::{Pair, Pairs};
use pest::{Parser, Position, Span};
use pest_derive::Parser;

use super::ast::*;

#[derive(Parser)]
#[grammar = "parser/module_grammar.pest"] // relative to src
pub struct ModuleParser;

impl ModuleParser {
    /// Parse module source text into its statement list.
    pub fn parse_to_ast_from_str(source: &str) -> Result<ModuleData, Error<Rule>> {
        let mut pairs = ModuleParser::parse(Rule::module, source)?;
        match pairs.next() {
            Some(pair) => build_ast_from_module(pair),
            None => Err(Error::new_from_pos(
                ErrorVariant::CustomError {
                    message: "Empty parse result".to_string(),
                },
                Position::from_start(source),
            )),
        }
    }
}

fn get_meta(span: &Span) -> Meta {
    Meta {
        start_index: span.start(),
        end_index: span.end(),
    }
}

fn get_unexpected_error(id: i32, pair: &Pair<Rule>) -> Error<Rule> {
    let message = format!("Unexpected state reached [{:?}] - {}", pair.as_rule(), id);
    Error::new_from_span(ErrorVariant::CustomError { message }, pair.as_span())
}

fn next_inner<'i>(pairs: &mut Pairs<'i, Rule>, parent: Span<'i>) -> Result<Pair<'i, Rule>, Error<Rule>> {
    pairs.next().ok_or_else(|| {
        Error::new_from_span(
            ErrorVariant::CustomError {
                message: "Unexpected end of input".to_string(),
            },
            parent,
        )
    })
}

fn build_ast_from_module(pair: Pair<Rule>) -> Result<ModuleData, Error<Rule>> {
    let meta = get_meta(&pair.as_span());
    let mut body = vec![];
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::function_def => {
                body.push(Statement::FunctionDef(build_ast_from_function_def(inner_pair)?))
            }
            Rule::class_def => body.push(Statement::ClassDef(build_ast_from_class_def(inner_pair)?)),
            Rule::assignment => {
                body.push(Statement::Assignment(build_ast_from_assignment(inner_pair)?))
            }
            Rule::expression_statement => {
                let span = inner_pair.as_span();
                let expr_pair = next_inner(&mut inner_pair.into_inner(), span)?;
                body.push(Statement::Expression(build_ast_from_expression(expr_pair)?));
            }
            Rule::EOI => { /* Do nothing */ }
            _ => return Err(get_unexpected_error(1, &inner_pair)),
        }
    }
    Ok(ModuleData { body, meta })
}

fn build_ast_from_identifier(pair: Pair<Rule>) -> Result<IdentifierData, Error<Rule>> {
    if pair.as_rule() != Rule::identifier {
        return Err(get_unexpected_error(2, &pair));
    }
    Ok(IdentifierData {
        name: pair.as_str().to_string(),
        meta: get_meta(&pair.as_span()),
    })
}

fn build_ast_from_function_def(pair: Pair<Rule>) -> Result<FunctionData, Error<Rule>> {
    let span = pair.as_span();
    let mut inner = pair.into_inner();

    let keyword = next_inner(&mut inner, span.clone())?;
    if keyword.as_rule() != Rule::kw_def {
        return Err(get_unexpected_error(3, &keyword));
    }
    let id = build_ast_from_identifier(next_inner(&mut inner, span.clone())?)?;

    let mut params: Vec<IdentifierData> = vec![];
    let mut next = next_inner(&mut inner, span.clone())?;
    if next.as_rule() == Rule::parameters {
        for param in next.into_inner() {
            let param_span = param.as_span();
            let param = build_ast_from_identifier(param)?;
            if params.iter().any(|p| p.name == param.name) {
                return Err(Error::new_from_span(
                    ErrorVariant::CustomError {
                        message: format!(
                            "Duplicate parameter '{}' in function '{}'",
                            param.name, id.name
                        ),
                    },
                    param_span,
                ));
            }
            params.push(param);
        }
        next = next_inner(&mut inner, span.clone())?;
    }

    Ok(FunctionData {
        id,
        params,
        body: Rc::new(build_ast_from_expression(next)?),
        meta: get_meta(&span),
    })
}

fn build_ast_from_class_def(pair: Pair<Rule>) -> Result<ClassData, Error<Rule>> {
    let span = pair.as_span();
    let mut inner = pair.into_inner();

    let keyword = next_inner(&mut inner, span.clone())?;
    if keyword.as_rule() != Rule::kw_class {
        return Err(get_unexpected_error(4, &keyword));
    }
    let id = build_ast_from_identifier(next_inner(&mut inner, span.clone())?)?;

    let mut members = vec![];
    for member in inner {
        match member.as_rule() {
            Rule::function_def => {
                members.push(ClassMember::Method(build_ast_from_function_def(member)?))
            }
            Rule::assignment => {
                members.push(ClassMember::Attribute(build_ast_from_assignment(member)?))
            }
            _ => return Err(get_unexpected_error(5, &member)),
        }
    }

    Ok(ClassData {
        id,
        members,
        meta: get_meta(&span),
    })
}

fn build_ast_from_assignment(pair: Pair<Rule>) -> Result<AssignmentData, Error<Rule>> {
    let span = pair.as_span();
    let mut inner = pair.into_inner();
    let target = build_ast_from_identifier(next_inner(&mut inner, span.clone())?)?;
    let value = build_ast_from_expression(next_inner(&mut inner, span.clone())?)?;
    Ok(AssignmentData {
        target,
        value,
        meta: get_meta(&span),
    })
}

fn build_ast_from_expression(pair: Pair<Rule>) -> Result<Expression, Error<Rule>> {
    if pair.as_rule() != Rule::expression {
        return Err(get_unexpected_error(6, &pair));
    }
    let span = pair.as_span();
    let mut inner = pair.into_inner();
    let mut expr = build_ast_from_primary(next_inner(&mut inner, span.clone())?)?;

    for suffix in inner {
        let suffix_span = suffix.as_span();
        let meta = Meta {
            start_index: span.start(),
            end_index: suffix_span.end(),
        };
        expr = match suffix.as_rule() {
            Rule::call_suffix => {
                let mut arguments = vec![];
                for arg in suffix.into_inner() {
                    arguments.push(build_ast_from_expression(arg)?);
                }
                Expression::Call {
                    meta,
                    callee: Box::new(expr),
                    arguments,
                }
            }
            Rule::member_suffix => {
                let property =
                    build_ast_from_identifier(next_inner(&mut suffix.into_inner(), suffix_span)?)?;
                Expression::Member {
                    meta,
                    object: Box::new(expr),
                    property,
                }
            }
            _ => return Err(get_unexpected_error(7, &suffix)),
        };
    }
    Ok(expr)
}

fn build_ast_from_primary(pair: Pair<Rule>) -> Result<Expression, Error<Rule>> {
    let meta = get_meta(&pair.as_span());
    let value = match pair.as_rule() {
        Rule::expression => return build_ast_from_expression(pair),
        Rule::identifier => return Ok(Expression::Identifier(build_ast_from_identifier(pair)?)),
        Rule::none_literal => LiteralType::NoneLiteral,
        Rule::boolean_literal => LiteralType::BooleanLiteral(pair.as_str() == "True"),
        Rule::integer_literal => match pair.as_str().parse::<i64>() {
            Ok(i) => LiteralType::IntegerLiteral(i),
            Err(_) => {
                return Err(Error::new_from_span(
                    ErrorVariant::CustomError {
                        message: "Integer literal out of range".to_string(),
                    },
                    pair.as_span(),
                ))
            }
        },
        Rule::float_literal => match pair.as_str().parse::<f64>() {
            Ok(f) => LiteralType::FloatLiteral(f),
            Err(_) => return Err(get_unexpected_error(8, &pair)),
        },
        Rule::string_literal => {
            let span = pair.as_span();
            let content = next_inner(&mut pair.into_inner(), span)?;
            LiteralType::StringLiteral(unescape(content.as_str()))
        }
        _ => return Err(get_unexpected_error(9, &pair)),
    };
    Ok(Expression::Literal(LiteralData { value, meta }))
}

fn unescape(raw: &str) -> String {
    let mut s = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            s.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => s.push('\n'),
            Some('t') => s.push('\t'),
            Some(other) => s.push(other),
            None => s.push('\\'),
        }
    }
    s
}
