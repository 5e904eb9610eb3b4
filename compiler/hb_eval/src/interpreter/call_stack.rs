//! User-function call tracking.

use std::rc::Rc;

use crate::errors::recursion_limit_exceeded;
use crate::EvalResult;

/// Names of the user functions currently executing, innermost last.
///
/// Purely bookkeeping: pushing a frame does not create a variable scope.
#[derive(Clone, Debug, Default)]
pub(crate) struct CallStack {
    frames: Vec<Rc<str>>,
    /// `None` means unbounded.
    max_depth: Option<usize>,
}

impl CallStack {
    pub(crate) fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Enter a function. The frame is not pushed if the limit is hit.
    pub(crate) fn push(&mut self, name: Rc<str>) -> EvalResult<()> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(name);
        Ok(())
    }

    pub(crate) fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop() on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}
