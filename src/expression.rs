//! Бинарная операция над двумя числами и её вычисление.
//!
//! Поддерживаются `+`, `-`, `*`, `/` и `^`. Деление на ноль и результат
//! «не число» являются ошибками вычисления, а не значениями `NaN`.
//!
//! # Примеры
//!
//! ```
//! use calculette_rs::expression::{EvalError, Expression, Operator};
//!
//! let e = Expression::new(Operator::Add, 2.0, 3.0);
//! assert_eq!(e.evaluate(), Ok(5.0));
//!
//! let e = Expression::new(Operator::Div, 5.0, 0.0);
//! assert_eq!(e.evaluate(), Err(EvalError::DivisionByZero));
//! ```

use std::fmt;

use thiserror::Error;

/// Ошибки при вычислении выражения.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Деление на ноль.
    #[error("division by zero is impossible")]
    DivisionByZero,
    /// Результат не является числом (например, `(-8)^0,5`).
    #[error("the result is not a number")]
    NotANumber,
}

/// Бинарные операции.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Деление.
    Div,
    /// Возведение в степень.
    Pow,
}

impl Operator {
    /// Распознаёт оператор по символу.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// Символ оператора.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Применить операцию к операндам.
    ///
    /// # Ошибки
    ///
    /// - [`EvalError::DivisionByZero`] при делении на ноль.
    /// - [`EvalError::NotANumber`], если результат получился `NaN`.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, EvalError> {
        let value = match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                left / right
            }
            Self::Pow => left.powf(right),
        };

        if value.is_nan() {
            Err(EvalError::NotANumber)
        } else {
            Ok(value)
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Разобранная строка: оператор и два операнда.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    /// Оператор.
    pub op: Operator,
    /// Первый операнд.
    pub left: f64,
    /// Второй операнд.
    pub right: f64,
}

impl Expression {
    /// Создать выражение.
    #[must_use]
    pub const fn new(op: Operator, left: f64, right: f64) -> Self {
        Self { op, left, right }
    }

    /// Вычислить значение выражения.
    ///
    /// # Ошибки
    ///
    /// См. [`Operator::apply`].
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        self.op.apply(self.left, self.right)
    }
}
