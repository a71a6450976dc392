use std::fmt::Debug;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct Meta {
    pub start_index: usize,
    pub end_index: usize,
}

pub trait HasMeta {
    fn get_meta(&self) -> &Meta;
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierData {
    pub name: String,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralType {
    NoneLiteral,
    BooleanLiteral(bool),
    IntegerLiteral(i64),
    FloatLiteral(f64),
    StringLiteral(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralData {
    pub value: LiteralType,
    pub meta: Meta,
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Literal(LiteralData),
    Identifier(IdentifierData),
    Call {
        meta: Meta,
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Member {
        meta: Meta,
        object: Box<Expression>,
        property: IdentifierData,
    },
}

impl HasMeta for Expression {
    fn get_meta(&self) -> &Meta {
        match self {
            Expression::Literal(data) => &data.meta,
            Expression::Identifier(data) => &data.meta,
            Expression::Call { meta, .. } => meta,
            Expression::Member { meta, .. } => meta,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct FunctionData {
    pub id: IdentifierData,
    pub params: Vec<IdentifierData>,
    pub body: Rc<Expression>,
    pub meta: Meta,
}

#[derive(Debug, PartialEq)]
pub struct AssignmentData {
    pub target: IdentifierData,
    pub value: Expression,
    pub meta: Meta,
}

#[derive(Debug, PartialEq)]
pub enum ClassMember {
    Method(FunctionData),
    Attribute(AssignmentData),
}

#[derive(Debug, PartialEq)]
pub struct ClassData {
    pub id: IdentifierData,
    pub members: Vec<ClassMember>,
    pub meta: Meta,
}

#[derive(Debug, PartialEq)]
pub enum Statement {
    Assignment(AssignmentData),
    FunctionDef(FunctionData),
    ClassDef(ClassData),
    Expression(Expression),
}

impl HasMeta for Statement {
    fn get_meta(&self) -> &Meta {
        match self {
            Statement::Assignment(data) => &data.meta,
            Statement::FunctionDef(data) => &data.meta,
            Statement::ClassDef(data) => &data.meta,
            Statement::Expression(expr) => expr.get_meta(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ModuleData {
    pub body: Vec<Statement>,
    pub meta: Meta,
}
