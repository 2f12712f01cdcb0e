//! Re-emits the AST as JavaScript.

use quill_parser::ast::{BinaryOp, Node, UnaryOp};
use quill_parser::visitor::{visit_node, VisitResult, Visitor};
use quill_source::Error;
use std::slice;

const INDENT: &str = "  ";

/// The kind of scope statements are emitted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// The program itself. No braces.
    TopLevel,
    /// A function body. Braced, indented, and the last statement is returned.
    Function,
}

pub struct Compiler {
    out: String,
    /// Current indentation level.
    level: usize,
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            level: 0,
        }
    }

    /// Consumes `self` and returns the emitted code without blank lines.
    #[must_use]
    pub fn into_output(self) -> String {
        self.out
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn indent(&mut self) {
        for _ in 0..self.level {
            self.out.push_str(INDENT);
        }
    }

    /// Emits each statement on its own line.
    fn statements<'ast>(&mut self, stmts: &'ast [Node], scope: Scope) -> VisitResult {
        for (i, stmt) in stmts.iter().enumerate() {
            self.indent();
            if scope == Scope::Function && i == stmts.len() - 1 {
                self.out.push_str("return ");
            }
            visit_node(self, stmt)?;
            self.out.push_str(";\n");
        }
        Ok(())
    }

    /// Emits `exp`. After a `-`, a leading `-` is separated by a space since `--` is a decrement.
    fn operand_after<'ast>(&mut self, after_minus: bool, exp: &'ast Node) -> VisitResult {
        let start = self.out.len();
        visit_node(self, exp)?;
        if after_minus && self.out[start..].starts_with('-') {
            self.out.insert(start, ' ');
        }
        Ok(())
    }

    /// Emits comma separated expressions.
    fn list<'ast>(&mut self, exps: &[&'ast Node]) -> VisitResult {
        for (i, exp) in exps.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            visit_node(self, *exp)?;
        }
        Ok(())
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Unwraps a [`Node::Paren`]. Only used for the operands of `Math.pow`.
fn strip_paren(node: &Node) -> &Node {
    match node {
        Node::Paren { exp } => &**exp,
        node => node,
    }
}

impl<'ast> Visitor<'ast> for Compiler {
    fn visit_exp_list(&mut self, exps: &'ast [Node]) -> VisitResult {
        self.statements(exps, Scope::TopLevel)
    }

    fn visit_int_lit(&mut self, val: i64) -> VisitResult {
        self.out.push_str(&val.to_string());
        Ok(())
    }

    fn visit_bin_op(&mut self, op: BinaryOp, left: &'ast Node, right: &'ast Node) -> VisitResult {
        if op == BinaryOp::Pow {
            self.out.push_str("Math.pow(");
            self.list(&[strip_paren(left), strip_paren(right)])?;
            self.out.push(')');
        } else {
            visit_node(self, left)?;
            self.out.push_str(op.symbol());
            self.operand_after(op == BinaryOp::Sub, right)?;
        }
        Ok(())
    }

    fn visit_un_op(&mut self, op: UnaryOp, exp: &'ast Node) -> VisitResult {
        if op == UnaryOp::Plus {
            return visit_node(self, exp);
        }

        self.out.push('-');
        self.operand_after(true, exp)
    }

    fn visit_paren(&mut self, exp: &'ast Node) -> VisitResult {
        self.out.push('(');
        visit_node(self, exp)?;
        self.out.push(')');
        Ok(())
    }

    fn visit_var_decl(&mut self, ident: &'ast str, exp: &'ast Node) -> VisitResult {
        self.out.push_str("let ");
        self.out.push_str(ident);
        self.out.push_str(" = ");
        visit_node(self, exp)
    }

    fn visit_var_id(&mut self, ident: &'ast str) -> VisitResult {
        self.out.push_str(ident);
        Ok(())
    }

    fn visit_func_decl(&mut self, params: &'ast [String], exp: &'ast Node) -> VisitResult {
        self.out.push('(');
        self.out.push_str(&params.join(", "));
        self.out.push_str(") => {\n");

        self.level += 1;
        let result = self.statements(slice::from_ref(exp), Scope::Function);
        self.level -= 1;
        result?;

        self.indent();
        self.out.push('}');
        Ok(())
    }

    fn visit_func_call(&mut self, func: &'ast Node, params: &'ast [Node]) -> VisitResult {
        visit_node(self, func)?;
        self.out.push('(');
        let params: Vec<&Node> = params.iter().collect();
        self.list(&params)?;
        self.out.push(')');
        Ok(())
    }
}

/// Returns the JavaScript equivalent of `node`.
pub fn compile(node: &Node) -> Result<String, Error> {
    let mut compiler = Compiler::new();
    visit_node(&mut compiler, node)?;
    Ok(compiler.into_output())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use quill_parser::parse;

    fn compile_source(source: &str) -> String {
        compile(&parse(source)).unwrap()
    }

    #[test]
    fn test_arithmetic() {
        assert_snapshot!(compile_source("1 + 2 * (3 - 4)\n\n+5 / -6"), @r###"
        1+2*(3-4);
        5/-6;
        "###);
    }

    #[test]
    fn test_power() {
        // parens are dropped around the operands of `Math.pow` only
        assert_snapshot!(compile_source("(1 + 2) ** (3)\n-2 ** 2\n2 ** 3 ** 2"), @r###"
        Math.pow(1+2, 3);
        -Math.pow(2, 2);
        Math.pow(2, Math.pow(3, 2));
        "###);
        assert_eq!(compile_source("((1)) ** 2"), "Math.pow((1), 2);");
    }

    #[test]
    fn test_negation() {
        assert_eq!(compile_source("- -2"), "- -2;");
        assert_eq!(compile_source("-+-2"), "- -2;");
        assert_eq!(compile_source("-(-2)"), "-(-2);");
        assert_snapshot!(compile_source("1 - -1\na - - -b\na + -b\n2 - -3 ** 2"), @r###"
        1- -1;
        a- - -b;
        a+-b;
        2- -Math.pow(3, 2);
        "###);
    }

    #[test]
    fn test_functions() {
        assert_snapshot!(compile_source("let f = (x) => x+x\nf(5)"), @r###"
        let f = (x) => {
          return x+x;
        };
        f(5);
        "###);
    }

    #[test]
    fn test_nested_functions() {
        assert_snapshot!(compile_source("let add = (x) => (y) => x + y\n(add(1))(2, () => 3)"), @r###"
        let add = (x) => {
          return (y) => {
            return x+y;
          };
        };
        (add(1))(2, () => {
          return 3;
        });
        "###);
    }

    #[test]
    fn test_error() {
        assert_eq!(
            compile(&parse("f(1,")),
            Err(Error::Syntax("Expected LParen, got EOF".to_string()))
        );
    }
}
