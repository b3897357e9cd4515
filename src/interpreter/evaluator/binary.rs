use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, ops},
    },
};

impl Context {
    /// Evaluates an additive chain as a left fold over `+` and `-`.
    ///
    /// # Errors
    /// `UnsupportedOperator` if the chain stores any other operator, plus any
    /// error raised by the operands or by the unit rules.
    pub(crate) fn eval_additive(&mut self,
                                operands: &[Expr],
                                operators: &[BinaryOperator])
                                -> EvalResult<Value> {
        self.fold_left(operands, operators, |op, left, right| match op {
                BinaryOperator::Add => ops::add(left, right),
                BinaryOperator::Sub => ops::sub(left, right),
                other => Err(unsupported(other)),
            })
    }

    /// Evaluates a multiplicative chain as a left fold over `*`, `/` and `%`.
    pub(crate) fn eval_multiplicative(&mut self,
                                      operands: &[Expr],
                                      operators: &[BinaryOperator])
                                      -> EvalResult<Value> {
        self.fold_left(operands, operators, |op, left, right| match op {
                BinaryOperator::Mul => ops::mul(left, right),
                BinaryOperator::Div => ops::div(left, right),
                BinaryOperator::Mod => ops::rem(left, right),
                other => Err(unsupported(other)),
            })
    }

    /// Evaluates an exponential chain as a right fold, so `2 ^ 2 ^ 3` is
    /// `2 ^ (2 ^ 3)`.
    pub(crate) fn eval_exponential(&mut self, operands: &[Expr]) -> EvalResult<Value> {
        let mut values = operands.iter()
                                 .map(|operand| self.eval(operand))
                                 .collect::<EvalResult<Vec<_>>>()?;

        let Some(mut acc) = values.pop() else {
            return Ok(Value::Null);
        };
        while let Some(base) = values.pop() {
            acc = ops::pow(base, acc)?;
        }
        Ok(acc)
    }

    fn fold_left(&mut self,
                 operands: &[Expr],
                 operators: &[BinaryOperator],
                 apply: impl Fn(BinaryOperator, Value, Value) -> EvalResult<Value>)
                 -> EvalResult<Value> {
        let Some((first, rest)) = operands.split_first() else {
            return Ok(Value::Null);
        };

        let mut acc = self.eval(first)?;
        for (op, operand) in operators.iter().zip(rest) {
            let right = self.eval(operand)?;
            acc = apply(*op, acc, right)?;
        }
        Ok(acc)
    }
}

fn unsupported(op: BinaryOperator) -> RuntimeError {
    RuntimeError::UnsupportedOperator { operator: op.to_string() }
}
