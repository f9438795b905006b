use std::io::Write;

use crate::{
    ast::{Block, Expr, FunctionCall, Identifier, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            frame::Frame,
            function::{abs, min_max, print, sum},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments, the interpreter's output sink
/// and the position of the call. It returns `None` when it produces no value.
type BuiltinFn = fn(&[Value], &mut dyn Write, Position) -> EvalResult<Option<Value>>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Any` accepts every argument count, including zero.
/// - `AtLeast(n)` requires `n` or more arguments.
/// - `Exact(n)` requires exactly `n` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Any,
    AtLeast(usize),
    Exact(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Any => true,
            Self::AtLeast(m) => n >= m,
            Self::Exact(m) => n == m,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (qualifier, n) = match self {
            Self::Any => return write!(f, "any number of arguments"),
            Self::AtLeast(n) => ("at least", n),
            Self::Exact(n) => ("exactly", n),
        };
        let noun = if *n == 1 { "argument" } else { "arguments" };

        write!(f, "{qualifier} {n} {noun}")
    }
}

/// Defines the builtin functions.
///
/// Each entry provides:
/// - the enum variant,
/// - the name it is bound to in the global frame,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces the [`Builtin`] enum together with its name, arity and
/// handler lookups, and `Builtin::ALL` for seeding the global frame.
macro_rules! builtin_functions {
    (
        $(
            $variant:ident => {
                name: $name:literal,
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A function provided by the interpreter and bound in the global
        /// frame before the program starts.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Builtin {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl Builtin {
            /// Every builtin, in binding order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// The name the builtin is bound to.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// The argument counts the builtin accepts.
            #[must_use]
            pub const fn arity(self) -> Arity {
                match self {
                    $(Self::$variant => $arity,)*
                }
            }

            fn handler(self) -> BuiltinFn {
                match self {
                    $(Self::$variant => $func,)*
                }
            }
        }
    };
}

builtin_functions! {
    Print => { name: "print", arity: Arity::Any,        func: print::print },
    Min   => { name: "min",   arity: Arity::AtLeast(1), func: min_max::min },
    Max   => { name: "max",   arity: Arity::AtLeast(1), func: min_max::max },
    Abs   => { name: "abs",   arity: Arity::Exact(1),   func: abs::abs },
    Sum   => { name: "sum",   arity: Arity::AtLeast(1), func: sum::sum },
}

impl<W: Write> Interpreter<W> {
    /// Evaluates a function call.
    ///
    /// The callee name is resolved through the active scope chain. Its
    /// binding decides how the call proceeds: builtins check their arity and
    /// run directly, functions and lambdas get a new frame. Arguments are
    /// evaluated left to right in the caller's frame, after the callee has
    /// been resolved.
    ///
    /// # Returns
    /// The callee's result: the value of the body's last statement for
    /// user-defined callees, `None` when it produced no value.
    ///
    /// # Errors
    /// - `UnknownName` if the callee is unbound.
    /// - `NotCallable` if the callee is bound to a number, a boolean or the
    ///   program name.
    /// - `BuiltinArity` / `ArgumentCountMismatch` for a wrong argument count.
    pub fn eval_call(&mut self, call: &FunctionCall) -> EvalResult<Option<Value>> {
        let callee = &call.callee;
        let position = callee.position;

        let target = self.stack()
                         .lookup(&callee.name)
                         .cloned()
                         .ok_or_else(|| RuntimeError::UnknownName { name: callee.name.clone(),
                                                                    position })?;

        match target {
            Value::Builtin(builtin) => {
                let args = self.eval_args(&call.args)?;
                self.call_builtin(builtin, &args, position)
            },
            Value::Function(decl) => {
                let args = self.eval_args(&call.args)?;
                self.call_user_defined(&decl.name, &decl.params, &decl.body, args, position)
            },
            Value::Lambda(lambda) => {
                let args = self.eval_args(&call.args)?;
                self.call_user_defined(&lambda.defining_name,
                                       &lambda.params,
                                       &lambda.body,
                                       args,
                                       position)
            },
            Value::Int(_) | Value::Float(_) | Value::Bool(_) | Value::Program(_) => {
                Err(RuntimeError::NotCallable { name: callee.name.clone(),
                                                position })
            },
        }
    }

    fn eval_args(&mut self, args: &[Expr]) -> EvalResult<Vec<Value>> {
        args.iter().map(|arg| self.eval_expr(arg)).collect()
    }

    fn call_builtin(&mut self,
                    builtin: Builtin,
                    args: &[Value],
                    position: Position)
                    -> EvalResult<Option<Value>> {
        let arity = builtin.arity();
        if !arity.check(args.len()) {
            return Err(RuntimeError::BuiltinArity { name: builtin.name(),
                                                    expected: arity.to_string(),
                                                    found: args.len(),
                                                    position });
        }

        tracing::debug!(builtin = builtin.name(), args = args.len(), "call");
        (builtin.handler())(args, self.output_mut(), position)
    }

    /// Executes a user-defined function or lambda.
    ///
    /// The new frame's parent is the nearest frame in the caller's chain that
    /// binds `declared`, the callee's own declared name. That makes scoping
    /// depend on the call site: a callee sees the locals of whichever frame
    /// currently holds its binding. The frame is popped again whether the body
    /// succeeds or fails.
    ///
    /// # Errors
    /// - `UnknownName` if no frame in the caller's chain binds `declared`,
    ///   e.g. a lambda called through a different name than it was assigned
    ///   to.
    /// - `ArgumentCountMismatch` if `args` and `params` differ in length.
    fn call_user_defined(&mut self,
                         declared: &Identifier,
                         params: &[Identifier],
                         body: &Block,
                         args: Vec<Value>,
                         position: Position)
                         -> EvalResult<Option<Value>> {
        let parent = self.stack()
                         .find_binding_frame(&declared.name)
                         .ok_or_else(|| RuntimeError::UnknownName { name: declared.name.clone(),
                                                                    position })?;

        if params.len() != args.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: declared.name.clone(),
                                                             required: params.len(),
                                                             found: args.len(),
                                                             position });
        }

        let level = self.stack().frame(parent).map_or(0, |frame| frame.level) + 1;
        let mut frame = Frame::new(level, Some(parent));
        for (param, arg) in params.iter().zip(args) {
            frame.bindings.insert(param.name.clone(), arg);
        }

        tracing::debug!(function = %declared.name, level, args = params.len(), "call");

        self.stack_mut().push(frame);
        let result = self.eval_block(body);
        self.stack_mut().pop();

        result
    }
}
