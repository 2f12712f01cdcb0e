//! Visitor pattern for AST nodes.
//!
//! [`visit_node`] dispatches a node to the [`Visitor`] method matching its variant.
//! Every method is required, so a backend that forgets a variant does not compile.

use crate::ast::{BinaryOp, Node, UnaryOp};
use quill_source::Error;

pub type VisitResult = Result<(), Error>;

pub trait Visitor<'ast>: Sized {
    fn visit_exp_list(&mut self, exps: &'ast [Node]) -> VisitResult;
    fn visit_int_lit(&mut self, val: i64) -> VisitResult;
    fn visit_bin_op(&mut self, op: BinaryOp, left: &'ast Node, right: &'ast Node) -> VisitResult;
    fn visit_un_op(&mut self, op: UnaryOp, exp: &'ast Node) -> VisitResult;
    fn visit_paren(&mut self, exp: &'ast Node) -> VisitResult;
    fn visit_var_decl(&mut self, ident: &'ast str, exp: &'ast Node) -> VisitResult;
    fn visit_var_id(&mut self, ident: &'ast str) -> VisitResult;
    fn visit_func_decl(&mut self, params: &'ast [String], exp: &'ast Node) -> VisitResult;
    fn visit_func_call(&mut self, func: &'ast Node, params: &'ast [Node]) -> VisitResult;
}

/// Calls the method of `visitor` that handles `node`.
/// Visiting a [`Node::Error`] fails with its message.
pub fn visit_node<'ast>(visitor: &mut impl Visitor<'ast>, node: &'ast Node) -> VisitResult {
    match node {
        Node::Error { msg } => Err(Error::Syntax(msg.clone())),
        Node::ExpList { exps } => visitor.visit_exp_list(exps),
        Node::IntLit { val } => visitor.visit_int_lit(*val),
        Node::BinOp { op, left, right } => visitor.visit_bin_op(*op, left, right),
        Node::UnOp { op, exp } => visitor.visit_un_op(*op, exp),
        Node::Paren { exp } => visitor.visit_paren(exp),
        Node::VarDecl { ident, exp } => visitor.visit_var_decl(ident, exp),
        Node::VarId { ident } => visitor.visit_var_id(ident),
        Node::FuncDecl { params, exp } => visitor.visit_func_decl(params, exp),
        Node::FuncCall { func, params } => visitor.visit_func_call(func, params),
    }
}
