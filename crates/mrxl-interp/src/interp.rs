//! Core statement interpreter and expression evaluator.

use crate::env::Environment;
use crate::error::{InterpError, InterpResult};
use crate::value::{DataMap, Value};
use mrxl_types::ast::{Bind, BinOp, Expr, MapOp, Op, Prog};
use mrxl_types::Number;
use rayon::prelude::*;

/// The MrXL interpreter: walks a program and produces its outputs.
pub struct Interpreter {
    /// Evaluate map slices across a thread pool.
    parallel: bool,
}

impl Interpreter {
    /// Create a sequential interpreter.
    pub fn new() -> Self {
        Self { parallel: false }
    }

    /// Create an interpreter that fans map slices out across threads.
    ///
    /// Outputs and errors are identical to the sequential mode; only
    /// the evaluation order of slices differs.
    pub fn with_parallel_maps() -> Self {
        Self { parallel: true }
    }

    /// Run a program against its input data.
    ///
    /// Loads declared inputs in declaration order, executes the
    /// statements in sequence, then extracts the declared outputs.
    pub fn run(&self, prog: &Prog, data: &DataMap) -> InterpResult<DataMap> {
        let mut env = Environment::new();

        for decl in prog.decls.iter().filter(|d| d.input) {
            let value = data
                .get(&decl.name)
                .ok_or_else(|| InterpError::MissingInput(decl.name.clone()))?;
            env.bind(&decl.name, value.clone());
        }

        for stmt in &prog.stmts {
            let result = self.exec_op(&stmt.op, &env)?;
            env.bind(&stmt.dest, result);
        }

        let mut out = DataMap::new();
        for decl in prog.decls.iter().filter(|d| !d.input) {
            let value = env
                .get(&decl.name)
                .ok_or_else(|| InterpError::MissingOutput(decl.name.clone()))?;
            out.insert(decl.name.clone(), value.clone());
        }
        Ok(out)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Statement execution
    // ══════════════════════════════════════════════════════════════════════

    fn exec_op(&self, op: &Op, env: &Environment) -> InterpResult<Value> {
        match op {
            Op::Map(map) => self.exec_map(map, env),
            Op::Reduce(_) => Err(InterpError::UnsupportedOperation(
                "reduce unsupported".into(),
            )),
        }
    }

    /// Execute a map: zip the bound source arrays and evaluate the body
    /// once per index against an environment holding only the bound
    /// element names.
    fn exec_map(&self, map: &MapOp, env: &Environment) -> InterpResult<Value> {
        let bound = resolve_binds(&map.bind, env)?;

        // The first bind's source fixes the expected length.
        let len = bound.first().map(|(_, arr)| arr.len()).unwrap_or(0);
        for (bind, arr) in &bound {
            if arr.len() != len {
                return Err(InterpError::LengthMismatch {
                    source: bind.src.clone(),
                    expected: len,
                    actual: arr.len(),
                });
            }
        }

        let eval_slice = |i: usize| -> InterpResult<Number> {
            let mut slice_env = Environment::new();
            for (bind, arr) in &bound {
                slice_env.bind(&bind.dest[0], Value::Number(arr[i]));
            }
            match eval_expr(&map.body, &slice_env)? {
                Value::Number(n) => Ok(n),
                Value::Array(_) => Err(InterpError::TypeMismatch(
                    "map body produced an array".into(),
                )),
            }
        };

        let results = if self.parallel {
            // Evaluate every slice, then surface the lowest-index error
            // so failures match the sequential mode.
            (0..len)
                .into_par_iter()
                .map(eval_slice)
                .collect::<Vec<_>>()
                .into_iter()
                .collect::<InterpResult<Vec<_>>>()?
        } else {
            (0..len).map(eval_slice).collect::<InterpResult<Vec<_>>>()?
        };

        Ok(Value::Array(results))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a program with the default sequential interpreter.
pub fn interp(prog: &Prog, data: &DataMap) -> InterpResult<DataMap> {
    Interpreter::new().run(prog, data)
}

/// Resolve a map's binds to their source arrays.
///
/// Each bind must carry exactly one destination name and refer to an
/// array-valued source already in the environment.
fn resolve_binds<'a>(
    binds: &'a [Bind],
    env: &'a Environment,
) -> InterpResult<Vec<(&'a Bind, &'a [Number])>> {
    let mut bound = Vec::with_capacity(binds.len());
    for bind in binds {
        if bind.dest.len() != 1 {
            return Err(InterpError::MalformedBind);
        }
        let value = env
            .get(&bind.src)
            .ok_or_else(|| InterpError::UnresolvedSource(bind.src.clone()))?;
        match value {
            Value::Array(arr) => bound.push((bind, arr.as_slice())),
            Value::Number(_) => {
                return Err(InterpError::TypeMismatch(format!(
                    "source `{}` for map is not an array",
                    bind.src
                )))
            }
        }
    }
    Ok(bound)
}

// ══════════════════════════════════════════════════════════════════════
// Expression evaluation
// ══════════════════════════════════════════════════════════════════════

/// Evaluate an expression against an environment.
pub fn eval_expr(expr: &Expr, env: &Environment) -> InterpResult<Value> {
    match expr {
        Expr::Lit(n) => Ok(Value::Number(*n)),
        Expr::Var(name) => env
            .get(name)
            .cloned()
            .ok_or_else(|| InterpError::UnboundVariable(name.clone())),
        Expr::Bin { op, lhs, rhs } => {
            let lv = eval_expr(lhs, env)?;
            let rv = eval_expr(rhs, env)?;
            apply_binop(*op, &lv, &rv)
        }
    }
}

/// Apply a binary operator to two evaluated operands.
fn apply_binop(op: BinOp, lv: &Value, rv: &Value) -> InterpResult<Value> {
    let (a, b) = match (lv, rv) {
        (Value::Number(a), Value::Number(b)) => (*a, *b),
        _ => {
            return Err(InterpError::TypeMismatch(format!(
                "cannot apply `{}` to {} and {}",
                op.as_str(),
                lv.kind(),
                rv.kind()
            )))
        }
    };

    match op {
        BinOp::Div => {
            if b.is_zero() {
                return Err(InterpError::Arithmetic("division by zero".into()));
            }
            // Division is true division: the result is always a float.
            finite(a.as_f64() / b.as_f64(), "/").map(Value::Number)
        }
        BinOp::Add => arith(a, b, i64::checked_add, |x, y| x + y, "+"),
        BinOp::Sub => arith(a, b, i64::checked_sub, |x, y| x - y, "-"),
        BinOp::Mul => arith(a, b, i64::checked_mul, |x, y| x * y, "*"),
    }
}

/// Add, subtract, or multiply with exact integer arithmetic when both
/// operands are integers, promoting to float otherwise.
fn arith(
    a: Number,
    b: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
    symbol: &str,
) -> InterpResult<Value> {
    let result = match (a, b) {
        (Number::Int(x), Number::Int(y)) => int_op(x, y).map(Number::Int).ok_or_else(|| {
            InterpError::Arithmetic(format!("integer overflow in `{symbol}`"))
        })?,
        _ => finite(float_op(a.as_f64(), b.as_f64()), symbol)?,
    };
    Ok(Value::Number(result))
}

/// Trap non-finite float results so every value stays representable.
fn finite(x: f64, symbol: &str) -> InterpResult<Number> {
    if x.is_finite() {
        Ok(Number::Float(x))
    } else {
        Err(InterpError::Arithmetic(format!(
            "`{symbol}` produced a non-finite result"
        )))
    }
}
