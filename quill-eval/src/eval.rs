//! Tree-walking evaluator.

use crate::scope::{Frame, Scopes};
use crate::value::{Function, Value};
use quill_parser::ast::{BinaryOp, Node, UnaryOp};
use quill_parser::visitor::{visit_node, VisitResult, Visitor};
use quill_source::{Error, RuntimeError};

/// Evaluates an AST with a value stack and a stack of scope [`Frame`]s.
///
/// Functions do not capture the scope they are defined in. Free variables in a function
/// body are resolved against the frames that are live when the function is called.
pub struct Evaluator<'ast> {
    stack: Vec<Value<'ast>>,
    scopes: Scopes<'ast>,
}

impl<'ast> Evaluator<'ast> {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            scopes: Scopes::new(),
        }
    }

    /// Evaluates `node` and returns its value.
    pub fn eval(&mut self, node: &'ast Node) -> Result<Value<'ast>, Error> {
        visit_node(self, node)?;
        Ok(self.pop("Result")?)
    }

    /// Number of live scope frames, including the global frame.
    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    fn pop(&mut self, context: &'static str) -> Result<Value<'ast>, RuntimeError> {
        self.stack
            .pop()
            .ok_or(RuntimeError::StackUnderflow(context))
    }

    /// Evaluates `body` inside `frame`. The frame is popped even if evaluation fails.
    fn call(&mut self, frame: Frame<'ast>, body: &'ast Node) -> VisitResult {
        self.scopes.push_frame(frame);
        let result = visit_node(self, body);
        self.scopes.pop_frame();
        result
    }
}

impl Default for Evaluator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn binary_op<'ast>(op: BinaryOp, lhs: Value<'ast>, rhs: Value<'ast>) -> Result<Value<'ast>, RuntimeError> {
    let (a, b) = match (lhs.cast_to_number(), rhs.cast_to_number()) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            return Err(RuntimeError::BadBinaryOperand {
                lhs: lhs.to_string(),
                op: op.to_string(),
                rhs: rhs.to_string(),
            })
        }
    };
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Pow => a.powf(b),
    };
    Ok(Value::Num(result))
}

fn unary_op<'ast>(op: UnaryOp, operand: Value<'ast>) -> Result<Value<'ast>, RuntimeError> {
    match (op, operand.cast_to_number()) {
        (UnaryOp::Plus, Some(val)) => Ok(Value::Num(val)),
        (UnaryOp::Minus, Some(val)) => Ok(Value::Num(-val)),
        (op, None) => Err(RuntimeError::BadUnaryOperand {
            op: op.to_string(),
            operand: operand.to_string(),
        }),
    }
}

impl<'ast> Visitor<'ast> for Evaluator<'ast> {
    fn visit_exp_list(&mut self, exps: &'ast [Node]) -> VisitResult {
        for (i, exp) in exps.iter().enumerate() {
            visit_node(self, exp)?;
            if i + 1 < exps.len() {
                self.pop("ExpList")?; // only the last value is the result
            }
        }
        Ok(())
    }

    fn visit_int_lit(&mut self, val: i64) -> VisitResult {
        self.stack.push(Value::Num(val as f64));
        Ok(())
    }

    fn visit_bin_op(&mut self, op: BinaryOp, left: &'ast Node, right: &'ast Node) -> VisitResult {
        visit_node(self, left)?;
        visit_node(self, right)?;
        let rhs = self.pop("BinOp")?;
        let lhs = self.pop("BinOp")?;
        self.stack.push(binary_op(op, lhs, rhs)?);
        Ok(())
    }

    fn visit_un_op(&mut self, op: UnaryOp, exp: &'ast Node) -> VisitResult {
        visit_node(self, exp)?;
        let operand = self.pop("UnOp")?;
        self.stack.push(unary_op(op, operand)?);
        Ok(())
    }

    fn visit_paren(&mut self, exp: &'ast Node) -> VisitResult {
        visit_node(self, exp)
    }

    fn visit_var_decl(&mut self, ident: &'ast str, exp: &'ast Node) -> VisitResult {
        visit_node(self, exp)?;
        let value = self.pop("VarDecl")?;
        self.scopes.declare(ident, value);
        self.stack.push(value);
        Ok(())
    }

    fn visit_var_id(&mut self, ident: &'ast str) -> VisitResult {
        let value = self
            .scopes
            .resolve(ident)
            .ok_or_else(|| RuntimeError::UnknownVariable(ident.to_string()))?;
        self.stack.push(value);
        Ok(())
    }

    fn visit_func_decl(&mut self, params: &'ast [String], exp: &'ast Node) -> VisitResult {
        self.stack.push(Value::Func(Function { params, body: exp }));
        Ok(())
    }

    fn visit_func_call(&mut self, func: &'ast Node, params: &'ast [Node]) -> VisitResult {
        visit_node(self, func)?;
        let function = match self.pop("FuncCall")? {
            Value::Func(function) => function,
            value => return Err(RuntimeError::NotAFunction(value.to_string()).into()),
        };
        if function.params.len() != params.len() {
            return Err(RuntimeError::WrongArity {
                expected: function.params.len(),
                found: params.len(),
            }
            .into());
        }

        // arguments are evaluated in the caller's frame
        let mut frame = Frame::with_capacity(params.len());
        for (name, arg) in function.params.iter().zip(params) {
            visit_node(self, arg)?;
            frame.insert(name.as_str(), self.pop("FuncCall")?);
        }
        self.call(frame, function.body)
    }
}

/// Evaluates `node` and returns the text of its value.
pub fn eval(node: &Node) -> Result<String, Error> {
    let mut evaluator = Evaluator::new();
    let value = evaluator.eval(node)?;
    Ok(value.to_string())
}
