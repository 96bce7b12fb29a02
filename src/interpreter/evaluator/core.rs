use std::collections::HashMap;

use crate::{
    ast::{Block, ElseArm, Expr, LiteralValue, Program, Stmt, TopLevel, VarType},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary, cast, collections,
            function::random::{self, Rng},
            io::{Console, Style},
        },
        value::{core::Value, dict::Dict},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Iterations a single loop may run before the interpreter gives up.
///
/// A denial-of-service guard: scripts are untrusted input, and a loop that
/// spins past this ceiling is aborted with a runtime error.
pub const ITERATION_LIMIT: usize = 1_000_000;

/// A variable binding: the declared type plus the current value.
///
/// The declared type is fixed at `create:` time; every later assignment
/// coerces the incoming value to it.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The type named in the declaration.
    pub declared: VarType,
    /// The value currently stored.
    pub value:    Value,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the stack of lexical scopes,
/// the deterministic random number generator, the console the program
/// talks through, and the active banner style.
///
/// ## Usage
///
/// A `Context` is created once per run and drives the whole program via
/// [`Context::execute`]. Scopes are pushed for every block and for every
/// `for` header, and popped again on every exit path.
pub struct Context<'io> {
    scopes:  Vec<HashMap<String, Binding>>,
    rng:     Rng,
    console: &'io mut dyn Console,
    style:   Style,
}

impl<'io> Context<'io> {
    /// Creates a context over a console with a fixed random seed.
    pub fn new(console: &'io mut dyn Console, seed: u64) -> Self {
        Self { scopes: vec![HashMap::new()],
               rng: Rng::seeded(seed),
               console,
               style: Style::default() }
    }

    /// Runs a whole program.
    ///
    /// Emits the banner header, executes every top-level form against the
    /// global scope, and emits the footer. A runtime error aborts before
    /// the footer is printed.
    ///
    /// # Errors
    /// Propagates the first `RuntimeError` raised by any statement.
    pub fn execute(&mut self, program: &Program) -> EvalResult<()> {
        self.style = Style::from_name(program.style.as_deref());

        let header = self.style.paint(&format!("═══ {} ═══", program.app_name));
        self.console.print_line(&header);

        for form in &program.body {
            let TopLevel::Main { body, .. } = form;
            self.eval_block(body)?;
        }

        let footer = self.style.paint("═══ Конец ═══");
        self.console.print_line(&footer);
        Ok(())
    }

    /// Evaluates a block in a fresh child scope.
    ///
    /// The scope is released on every exit path, error included.
    fn eval_block(&mut self, block: &Block) -> EvalResult<()> {
        self.push_scope();
        let result = self.run_statements(&block.statements);
        self.pop_scope();
        result
    }

    fn run_statements(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        for statement in statements {
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    /// Evaluates a single statement.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` the statement raises.
    pub fn eval_statement(&mut self, statement: &Stmt) -> EvalResult<()> {
        match statement {
            Stmt::Echo { args, .. } => {
                let mut rendered = Vec::with_capacity(args.len());
                for arg in args {
                    rendered.push(self.eval_expr(arg)?.to_string());
                }
                self.console.print_line(&rendered.join(" "));
                Ok(())
            },
            Stmt::CreateVar { declared, name, init, line } => {
                let value = self.eval_expr(init)?;
                let value = cast::coerce(*declared, value, *line)?;
                self.define(name,
                            Binding { declared: *declared,
                                      value },
                            *line)
            },
            Stmt::AssignVar { name, value, line } => {
                let value = self.eval_expr(value)?;
                self.assign(name, value, *line)
            },
            Stmt::IndexAssign { name, index, value, line } => {
                let index = self.eval_expr(index)?;
                let value = self.eval_expr(value)?;
                let target = self.lookup(name, *line)?.value.clone();
                collections::index_assign(&target, &index, value, *line)
            },
            Stmt::MethodCall { object, method, target, args, line } => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval_expr(arg)?);
                }
                let held = self.lookup(object, *line)?.value.clone();
                collections::method_call(object, &held, *method, *target, &values, *line)
            },
            Stmt::Call { name, args, line } => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval_expr(arg)?);
                }
                self.call_builtin(name, &values, *line)?;
                Ok(())
            },
            Stmt::If { condition, then_branch, else_branch, .. } => {
                if self.eval_expr(condition)?.truthy() {
                    self.eval_block(then_branch)
                } else {
                    match else_branch {
                        Some(ElseArm::Block(block)) => self.eval_block(block),
                        Some(ElseArm::If(chained)) => self.eval_statement(chained),
                        None => Ok(()),
                    }
                }
            },
            Stmt::While { condition, body, line } => {
                let mut iterations = 0usize;
                while self.eval_expr(condition)?.truthy() {
                    iterations += 1;
                    if iterations > ITERATION_LIMIT {
                        return Err(RuntimeError::IterationLimitExceeded { line: *line });
                    }
                    self.eval_block(body)?;
                }
                Ok(())
            },
            Stmt::For { init, condition, update, body, line } => {
                // The header gets its own scope holding the init binding,
                // parent of each iteration's body scope.
                self.push_scope();
                let result = self.run_for(init.as_deref(),
                                          condition.as_ref(),
                                          update.as_deref(),
                                          body,
                                          *line);
                self.pop_scope();
                result
            },
        }
    }

    fn run_for(&mut self,
               init: Option<&Stmt>,
               condition: Option<&Expr>,
               update: Option<&Stmt>,
               body: &Block,
               line: usize)
               -> EvalResult<()> {
        if let Some(init) = init {
            self.eval_statement(init)?;
        }

        let mut iterations = 0usize;
        loop {
            let keep_going = match condition {
                Some(condition) => self.eval_expr(condition)?.truthy(),
                None => true,
            };
            if !keep_going {
                break;
            }

            iterations += 1;
            if iterations > ITERATION_LIMIT {
                return Err(RuntimeError::IterationLimitExceeded { line });
            }

            self.eval_block(body)?;

            if let Some(update) = update {
                self.eval_statement(update)?;
            }
        }
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised while evaluating the
    /// expression or any subexpression.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(match value {
                LiteralValue::Int(n) => Value::Int(*n),
                LiteralValue::Float(n) => Value::Float(*n),
                LiteralValue::Str(s) => Value::Str(s.clone()),
                LiteralValue::Bool(b) => Value::Bool(*b),
            }),
            Expr::Variable { name, line } => Ok(self.lookup(name, *line)?.value.clone()),
            Expr::Unary { op, expr, line } => {
                let value = self.eval_expr(expr)?;
                binary::eval_unary(*op, &value, *line)
            },
            Expr::Binary { left, op, right, line } => {
                let lval = self.eval_expr(left)?;
                let rval = self.eval_expr(right)?;
                binary::eval_binary(*op, &lval, &rval, *line)
            },
            Expr::Call { name, args, line } => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval_expr(arg)?);
                }
                self.call_builtin(name, &values, *line)
            },
            Expr::Rand { min, max, line } => {
                let low = self.eval_expr(min)?;
                let high = self.eval_expr(max)?;
                random::rand_range(self, &low, &high, *line)
            },
            Expr::Write { prompt, .. } => {
                let text = self.eval_expr(prompt)?.to_string();
                Ok(Value::Str(self.console.prompt(&text)))
            },
            Expr::ListLiteral { elements, .. } => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval_expr(element)?);
                }
                Ok(Value::from(values))
            },
            Expr::DictLiteral { entries, .. } => {
                let mut pairs = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    pairs.push((self.eval_expr(key)?, self.eval_expr(value)?));
                }
                Ok(Value::from(Dict::from_pairs(pairs)))
            },
            Expr::Index { object, index, line } => {
                let object = self.eval_expr(object)?;
                let index = self.eval_expr(index)?;
                collections::index_access(&object, &index, *line)
            },
        }
    }

    fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Creates a binding in the current scope.
    ///
    /// Redefinition is rejected at the defining scope; a same-named
    /// binding in an outer scope is simply shadowed by the new one.
    fn define(&mut self, name: &str, binding: Binding, line: usize) -> EvalResult<()> {
        let scope = self.scopes.last_mut().expect("at least the global scope");
        if scope.contains_key(name) {
            return Err(RuntimeError::Redefinition { name: name.to_string(),
                                                    line });
        }
        scope.insert(name.to_string(), binding);
        Ok(())
    }

    /// Finds the nearest binding for a name, walking outward.
    fn lookup(&self, name: &str, line: usize) -> EvalResult<&Binding> {
        for scope in self.scopes.iter().rev() {
            if let Some(binding) = scope.get(name) {
                return Ok(binding);
            }
        }
        Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                            line })
    }

    /// Assigns to the nearest existing binding, coercing the value to the
    /// binding's declared type. Fails when no binding exists on the chain.
    fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let declared = self.lookup(name, line)?.declared;
        let value = cast::coerce(declared, value, line)?;

        for scope in self.scopes.iter_mut().rev() {
            if let Some(binding) = scope.get_mut(name) {
                binding.value = value;
                return Ok(());
            }
        }
        Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                            line })
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Rng {
        &mut self.rng
    }
}
