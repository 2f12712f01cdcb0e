//! Scope frames.

use crate::value::Value;
use std::collections::HashMap;

/// Bindings of one scope level.
pub type Frame<'ast> = HashMap<&'ast str, Value<'ast>>;

/// A stack of [`Frame`]s. Frame `0` is the global frame and is never popped.
pub struct Scopes<'ast> {
    frames: Vec<Frame<'ast>>,
}

impl<'ast> Scopes<'ast> {
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new()],
        }
    }

    /// Number of frames, including the global frame.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push_frame(&mut self, frame: Frame<'ast>) {
        self.frames.push(frame);
    }

    pub fn pop_frame(&mut self) {
        debug_assert!(self.frames.len() > 1, "cannot pop the global frame");
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Binds `ident` in the innermost frame, replacing a binding of the same frame.
    pub fn declare(&mut self, ident: &'ast str, value: Value<'ast>) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(ident, value);
        }
    }

    /// Looks `ident` up from the innermost to the outermost frame.
    pub fn resolve(&self, ident: &str) -> Option<Value<'ast>> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(ident).copied())
    }
}

impl Default for Scopes<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadowing() {
        let mut scopes = Scopes::new();
        scopes.declare("x", Value::Num(1.0));
        scopes.declare("y", Value::Num(2.0));

        let mut frame = Frame::new();
        frame.insert("x", Value::Num(10.0));
        scopes.push_frame(frame);
        assert_eq!(scopes.depth(), 2);
        assert_eq!(scopes.resolve("x"), Some(Value::Num(10.0)));
        assert_eq!(scopes.resolve("y"), Some(Value::Num(2.0)));

        // declarations go to the innermost frame only
        scopes.declare("y", Value::Num(20.0));
        scopes.pop_frame();
        assert_eq!(scopes.resolve("x"), Some(Value::Num(1.0)));
        assert_eq!(scopes.resolve("y"), Some(Value::Num(2.0)));
        assert_eq!(scopes.resolve("z"), None);
    }

    #[test]
    fn test_redeclare() {
        let mut scopes = Scopes::new();
        scopes.declare("x", Value::Num(1.0));
        scopes.declare("x", Value::Num(2.0));
        assert_eq!(scopes.resolve("x"), Some(Value::Num(2.0)));
        assert_eq!(scopes.depth(), 1);
    }
}
