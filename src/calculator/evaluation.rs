//! Applying the pending binary operation.

use thiserror::Error;

use super::token::Operator;

/// Errors the calculation surface can produce.
///
/// Every variant is terminal for the in-progress computation: the
/// engine resets all of its state before surfacing one, and the message
/// replaces the display contents.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// An operator was pressed with nothing typed yet.
    #[error("Erro: insira um número")]
    MissingOperand,
    /// Equals was pressed while an operand or the operator is missing.
    #[error("Erro: operação incompleta")]
    IncompleteOperation,
    /// An operand failed to parse as a decimal number.
    #[error("Erro: valor inválido")]
    InvalidValue,
    /// Division with a zero divisor.
    #[error("Erro: divisão por 0")]
    DivisionByZero,
}

/// Apply a binary operation and round the result to two decimal places.
pub fn evaluate(a: f64, b: f64, op: Operator) -> Result<f64, CalcError> {
    let result = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
        Operator::Percent => (a * b) / 100.0,
    };

    Ok(round_to_cents(result))
}

/// Round to two decimal places, nudging the value by `f64::EPSILON`
/// first to counter binary representation error (`0.1 + 0.2`).
pub fn round_to_cents(value: f64) -> f64 {
    ((value + f64::EPSILON) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition() {
        assert_eq!(evaluate(5.0, 3.0, Operator::Add), Ok(8.0));
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(evaluate(5.0, 8.0, Operator::Subtract), Ok(-3.0));
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(evaluate(2.5, 4.0, Operator::Multiply), Ok(10.0));
    }

    #[test]
    fn test_division() {
        assert_eq!(evaluate(10.0, 4.0, Operator::Divide), Ok(2.5));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            evaluate(10.0, 0.0, Operator::Divide),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_percent() {
        assert_eq!(evaluate(50.0, 10.0, Operator::Percent), Ok(5.0));
    }

    #[test]
    fn test_float_imprecision_corrected() {
        // 0.1 + 0.2 is 0.30000000000000004 before rounding.
        assert_eq!(evaluate(0.1, 0.2, Operator::Add), Ok(0.3));
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(2.344), 2.34);
        assert_eq!(round_to_cents(2.346), 2.35);
        assert_eq!(round_to_cents(10.0 / 3.0), 3.33);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Erro: divisão por 0"
        );
        assert_eq!(
            CalcError::MissingOperand.to_string(),
            "Erro: insira um número"
        );
        assert_eq!(
            CalcError::IncompleteOperation.to_string(),
            "Erro: operação incompleta"
        );
        assert_eq!(CalcError::InvalidValue.to_string(), "Erro: valor inválido");
    }
}
