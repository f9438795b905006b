use std::collections::HashMap;

use crate::interpreter::{evaluator::function::core::Builtin, value::core::Value};

/// A single activation record.
///
/// Frames are only ever reached through a [`CallStack`]; the parent is an
/// index into the same stack.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Nesting depth: 0 for the global frame, parent's level plus one
    /// otherwise.
    pub level:    usize,
    /// Names bound in this frame.
    pub bindings: HashMap<String, Value>,
    /// Index of the lexical parent, `None` only for the global frame.
    pub parent:   Option<usize>,
}

impl Frame {
    /// Creates an empty frame.
    #[must_use]
    pub fn new(level: usize, parent: Option<usize>) -> Self {
        Self { level,
               bindings: HashMap::new(),
               parent }
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "level: {}", self.level)?;

        let mut names = self.bindings.keys().collect::<Vec<_>>();
        names.sort();

        for name in names {
            write!(f, "\n{name} : {}", self.bindings[name])?;
        }

        Ok(())
    }
}

/// The stack of live frames.
///
/// Index 0 always holds the global frame with the built-ins bound. A frame's
/// parent always sits at a lower index than the frame itself, so popping the
/// top frame never leaves a dangling parent link.
///
/// # Example
/// ```
/// use amython::interpreter::{evaluator::frame::{CallStack, Frame}, value::core::Value};
///
/// let mut stack = CallStack::new();
/// stack.bind("x", Value::Int(1));
///
/// stack.push(Frame::new(1, Some(0)));
/// assert_eq!(stack.lookup("x"), Some(&Value::Int(1)));
///
/// stack.bind("x", Value::Int(2));
/// assert_eq!(stack.lookup("x"), Some(&Value::Int(2)));
///
/// stack.pop();
/// assert_eq!(stack.lookup("x"), Some(&Value::Int(1)));
/// ```
#[derive(Debug, Clone)]
pub struct CallStack {
    frames: Vec<Frame>,
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new()
    }
}

impl CallStack {
    /// Creates a stack holding only the global frame.
    #[must_use]
    pub fn new() -> Self {
        let mut global = Frame::new(0, None);

        for builtin in Builtin::ALL {
            global.bindings
                  .insert(builtin.name().to_string(), Value::Builtin(*builtin));
        }

        Self { frames: vec![global] }
    }

    /// Number of live frames, the global frame included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Index of the frame on top of the stack.
    #[must_use]
    pub fn top(&self) -> usize {
        self.frames.len() - 1
    }

    /// Returns the frame at `index`.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Pushes a new frame on top of the stack.
    pub fn push(&mut self, frame: Frame) {
        tracing::trace!(level = frame.level, parent = ?frame.parent, "push frame");
        self.frames.push(frame);
    }

    /// Pops the top frame. The global frame is never removed.
    pub fn pop(&mut self) {
        if self.frames.len() > 1
           && let Some(frame) = self.frames.pop()
        {
            tracing::trace!(%frame, "pop frame");
        }
    }

    /// Binds `name` in the top frame, replacing any previous binding there.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        let top = self.top();
        self.frames[top].bindings.insert(name.into(), value);
    }

    /// Resolves `name` by walking the parent chain from the top frame.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.find_binding_frame(name)
            .and_then(|index| self.frames.get(index))
            .and_then(|frame| frame.bindings.get(name))
    }

    /// Finds the nearest frame in the top frame's parent chain that binds
    /// `name`. A parent index outside the stack ends the walk.
    #[must_use]
    pub fn find_binding_frame(&self, name: &str) -> Option<usize> {
        let mut current = Some(self.top());

        while let Some(index) = current {
            let frame = self.frames.get(index)?;
            if frame.bindings.contains_key(name) {
                return Some(index);
            }
            current = frame.parent;
        }

        None
    }
}

