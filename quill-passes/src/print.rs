//! Indented AST dump.

use quill_parser::ast::{BinaryOp, Node, UnaryOp};
use quill_parser::visitor::{visit_node, VisitResult, Visitor};
use quill_source::Error;

/// Prints one line per node, children indented by one space.
pub struct Printer {
    lines: Vec<String>,
    level: usize,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            level: 0,
        }
    }

    /// Consumes `self` and returns the printed lines.
    #[must_use]
    pub fn into_output(self) -> String {
        self.lines.join("\n")
    }

    fn add(&mut self, line: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", " ".repeat(self.level), line.as_ref()));
    }

    /// Visits `children` one level deeper.
    fn children<'ast>(&mut self, children: &[&'ast Node]) -> VisitResult {
        self.level += 1;
        let result = children
            .iter()
            .try_for_each(|child| visit_node(self, *child));
        self.level -= 1;
        result
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'ast> Visitor<'ast> for Printer {
    fn visit_exp_list(&mut self, exps: &'ast [Node]) -> VisitResult {
        self.add("ExpList");
        let exps: Vec<&Node> = exps.iter().collect();
        self.children(&exps)
    }

    fn visit_int_lit(&mut self, val: i64) -> VisitResult {
        self.add(format!("IntLit {}", val));
        Ok(())
    }

    fn visit_bin_op(&mut self, op: BinaryOp, left: &'ast Node, right: &'ast Node) -> VisitResult {
        self.add(format!("BinOp {}", op));
        self.children(&[left, right])
    }

    fn visit_un_op(&mut self, op: UnaryOp, exp: &'ast Node) -> VisitResult {
        self.add(format!("UnOp {}", op));
        self.children(&[exp])
    }

    fn visit_paren(&mut self, exp: &'ast Node) -> VisitResult {
        self.add("Paren");
        self.children(&[exp])
    }

    fn visit_var_decl(&mut self, ident: &'ast str, exp: &'ast Node) -> VisitResult {
        self.add(format!("VarDecl {}", ident));
        self.children(&[exp])
    }

    fn visit_var_id(&mut self, ident: &'ast str) -> VisitResult {
        self.add(format!("VarId {}", ident));
        Ok(())
    }

    fn visit_func_decl(&mut self, params: &'ast [String], exp: &'ast Node) -> VisitResult {
        self.add(format!("FuncDecl ({})", params.join(", ")));
        self.children(&[exp])
    }

    fn visit_func_call(&mut self, func: &'ast Node, params: &'ast [Node]) -> VisitResult {
        self.add("FuncCall");
        let mut children = vec![func];
        children.extend(params.iter());
        self.children(&children)
    }
}

/// Returns the indented dump of `node`.
pub fn print(node: &Node) -> Result<String, Error> {
    let mut printer = Printer::new();
    visit_node(&mut printer, node)?;
    Ok(printer.into_output())
}
