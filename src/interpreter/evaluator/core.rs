use std::{io, io::Write, rc::Rc};

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::frame::CallStack,
        lexer::Lexer,
        parser::core::Parser,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime state of one program run.
///
/// Holds the frame stack and the sink `print` writes to. The sink defaults to
/// standard output; tests pass a `Vec<u8>` and inspect it afterwards with
/// [`Interpreter::output`].
///
/// ## Example
/// ```
/// use amython::interpreter::evaluator::core::Interpreter;
///
/// let mut interpreter = Interpreter::new(Vec::new());
/// interpreter.interpret("PROGRAM demo { x = 2 print(x * 3, x // 4) }").unwrap();
///
/// assert_eq!(String::from_utf8_lossy(interpreter.output()), "6 0.5\n");
/// ```
pub struct Interpreter<W: Write = io::Stdout> {
    stack:  CallStack,
    output: W,
}

impl Default for Interpreter<io::Stdout> {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter whose global frame holds only the built-ins.
    #[must_use]
    pub fn new(output: W) -> Self {
        Self { stack: CallStack::new(),
               output }
    }

    /// Returns the output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the interpreter and returns the output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Returns the frame stack.
    #[must_use]
    pub const fn stack(&self) -> &CallStack {
        &self.stack
    }

    pub(crate) fn stack_mut(&mut self) -> &mut CallStack {
        &mut self.stack
    }

    pub(crate) fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Lexes, parses and runs a complete program.
    ///
    /// Nothing is evaluated unless the whole source parses.
    ///
    /// # Errors
    /// Returns the first syntax or runtime error encountered.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn interpret(&mut self, source: &str) -> Result<(), Error> {
        let program = Parser::new(Lexer::new(source)).parse()?;
        tracing::debug!(program = %program.name.name, "parsed");

        self.run(&program)?;
        Ok(())
    }

    /// Runs a parsed program in the global frame.
    ///
    /// The program's name is bound first, then the body is evaluated.
    ///
    /// # Errors
    /// Returns the first runtime error raised by the body. Frames pushed by
    /// calls are popped again before the error reaches the caller.
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        self.stack
            .bind(program.name.name.clone(), Value::Program(Rc::from(program.name.name.as_str())));

        self.eval_block(&program.body)?;
        tracing::debug!(frames = self.stack.depth(), "program finished");

        Ok(())
    }

    /// Evaluates the statements of a block in order.
    ///
    /// # Returns
    /// The value of the last statement, or `None` for an empty block or one
    /// whose last statement produced no value. A `return` only produces a
    /// value; it does not end the block early.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in &block.statements {
            result = self.eval_statement(statement)?;
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// Assignments and declarations bind in the top frame and yield nothing.
    /// Calls yield their callee's result, `if` yields the chosen branch's
    /// value, and `return` yields its expression's value.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Assign { target, value } => {
                let value = self.eval_expr(value)?;
                self.stack.bind(target.name.clone(), value);
                Ok(None)
            },
            Statement::FunctionDecl(decl) => {
                self.stack
                    .bind(decl.name.name.clone(), Value::Function(Rc::clone(decl)));
                Ok(None)
            },
            Statement::Call(call) => self.eval_call(call),
            Statement::If { predicate,
                            then_branch,
                            else_branch, } => {
                if self.eval_predicate(predicate)? {
                    self.eval_block(then_branch)
                } else {
                    self.eval_block(else_branch)
                }
            },
            Statement::While { predicate, body } => {
                while self.eval_predicate(predicate)? {
                    self.eval_block(body)?;
                }
                Ok(None)
            },
            Statement::Return { value, .. } => self.eval_expr(value).map(Some),
        }
    }

    /// Evaluates an expression to a value.
    ///
    /// # Errors
    /// - `UnknownName` for an unbound variable.
    /// - `MissingValue` for a call that produced no value.
    /// - Any error raised by an operator or a call.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Int { value, .. } => Ok(Value::Int(*value)),
            Expr::Float { value, .. } => Ok(Value::Float(*value)),
            Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
            Expr::Var(ident) => {
                self.stack
                    .lookup(&ident.name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownName { name:     ident.name.clone(),
                                                               position: ident.position, })
            },
            Expr::Unary { op,
                          operand,
                          position, } => {
                let value = self.eval_expr(operand)?;
                Self::eval_unary(*op, &value, *position)
            },
            Expr::Binary { op,
                           left,
                           right,
                           position, } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Self::eval_binary(*op, &left, &right, *position)
            },
            Expr::Call(call) => {
                self.eval_call(call)?
                    .ok_or_else(|| RuntimeError::MissingValue { name:     call.callee.name.clone(),
                                                                position: call.callee.position, })
            },
            Expr::Lambda(lambda) => Ok(Value::Lambda(Rc::clone(lambda))),
        }
    }

    fn eval_predicate(&mut self, predicate: &Expr) -> EvalResult<bool> {
        self.eval_expr(predicate)?.truthy(predicate.position())
    }
}
