//! Разбор строки `<число><оператор><число>` в [`Expression`].
//!
//! Порядок разбора:
//!
//! 1. Пустая строка отклоняется.
//! 2. [`scan_operator`] находит оператор.
//! 3. Текст слева и справа от оператора разбирается как два операнда.
//!
//! Операнд может оканчиваться надстрочным показателем: `2⁵` даёт `32`.
//! Учитывается только первый такой символ, всё после него отбрасывается.
//! Если текст операнда начинается с `-`, итоговое значение всегда
//! отрицательно: `-2²` даёт `-4`.
//!
//! # Примеры
//!
//! ```
//! use calculette_rs::config::Config;
//! use calculette_rs::expression::Operator;
//! use calculette_rs::parser::parse;
//!
//! let expr = parse("2⁵+3", &Config::default()).unwrap();
//! assert_eq!(expr.op, Operator::Add);
//! assert_eq!(expr.left, 32.0);
//! assert_eq!(expr.evaluate().unwrap(), 35.0);
//! ```

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::exponent::find_exponent_glyph;
use crate::expression::{Expression, Operator};
use crate::token::{scan_operator, SpannedOperator};

/// Какой из двух операндов не удалось разобрать.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSide {
    /// Операнд слева от оператора.
    First,
    /// Операнд справа от оператора.
    Second,
}

impl fmt::Display for OperandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Ошибки, возникающие при разборе строки.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Пустая строка или одни пробелы.
    #[error("please enter an expression (e.g. {examples})")]
    EmptyInput {
        /// Примеры корректного ввода.
        examples: &'static str,
    },

    /// Оператор не найден.
    #[error("invalid operation. Use {operators}")]
    NoOperator {
        /// Поддерживаемые операторы.
        operators: &'static str,
    },

    /// Операнд не является числом.
    #[error("the {side} number must be valid (use a comma or a period for decimals)")]
    InvalidOperand {
        /// Какой операнд.
        side: OperandSide,
        /// Текст операнда.
        text: String,
        /// Позиция первого непробельного символа операнда.
        pos: usize,
    },
}

impl ParseError {
    /// Возвращает позицию ошибки, если она известна.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyInput { .. } | Self::NoOperator { .. } => None,
            Self::InvalidOperand { pos, .. } => Some(*pos),
        }
    }
}

/// Разбирает строку в выражение.
///
/// # Ошибки
///
/// - [`ParseError::EmptyInput`] для пустой строки.
/// - [`ParseError::NoOperator`], если оператор не найден.
/// - [`ParseError::InvalidOperand`], если операнд не число.
pub fn parse(input: &str, config: &Config) -> Result<Expression, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyInput {
            examples: config.variant.examples(),
        });
    }

    let spanned = scan_operator(input, config).ok_or(ParseError::NoOperator {
        operators: config.variant.operator_hint(),
    })?;
    debug!(op = %spanned.op, pos = spanned.pos, "найден оператор");

    extract(input, spanned, config)
}

/// Делит строку по найденному оператору и разбирает оба операнда.
///
/// # Ошибки
///
/// Возвращает [`ParseError::InvalidOperand`] с указанием операнда, который
/// не удалось разобрать.
pub fn extract(
    input: &str,
    spanned: SpannedOperator,
    config: &Config,
) -> Result<Expression, ParseError> {
    let right_start = spanned.pos + spanned.op.symbol().len_utf8();
    let left_text = input.get(..spanned.pos).unwrap_or_default();
    let right_text = input.get(right_start..).unwrap_or_default();

    let left = read_operand(left_text, OperandSide::First, 0, config)?;
    let right = read_operand(right_text, OperandSide::Second, right_start, config)?;
    debug!(left, right, "операнды разобраны");

    Ok(Expression::new(spanned.op, left, right))
}

/// Разбирает один операнд, включая надстрочный показатель и знак.
fn read_operand(
    text: &str,
    side: OperandSide,
    pos: usize,
    config: &Config,
) -> Result<f64, ParseError> {
    let pos = pos + (text.len() - text.trim_start().len());
    let text = text.trim();
    let invalid = || ParseError::InvalidOperand {
        side,
        text: text.to_string(),
        pos,
    };

    let exponent = find_exponent_glyph(text).filter(|_| config.variant.supports_exponents());
    let value = match exponent {
        Some((glyph_pos, digit)) => {
            let base = config
                .number_format
                .parse(&text[..glyph_pos])
                .ok_or_else(invalid)?;
            debug!(%side, base, digit, "надстрочный показатель");
            Operator::Pow
                .apply(base, f64::from(digit))
                .map_err(|_| invalid())?
        }
        None => config.number_format.parse(text).ok_or_else(invalid)?,
    };

    // Знак литерала сохраняется и после возведения в степень
    if text.starts_with('-') {
        Ok(-value.abs())
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;

    fn extended(input: &str) -> Result<Expression, ParseError> {
        parse(input, &Config::default())
    }

    fn basic(input: &str) -> Result<Expression, ParseError> {
        parse(input, &Config::with_variant(Variant::Basic))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Параметризованные тесты разбора
    // ─────────────────────────────────────────────────────────────────────────

    macro_rules! parse_tests {
        ($($name:ident: $input:expr => ($op:ident, $left:expr, $right:expr)),* $(,)?) => {
            $(
                #[test]
                fn $name() {
                    let expr = extended($input).unwrap_or_else(|e| {
                        panic!("ошибка разбора для '{}': {:?}", $input, e)
                    });
                    assert_eq!(expr.op, Operator::$op, "ввод: '{}'", $input);
                    assert!((expr.left - $left).abs() < 1e-9, "ввод: '{}', left = {}", $input, expr.left);
                    assert!((expr.right - $right).abs() < 1e-9, "ввод: '{}', right = {}", $input, expr.right);
                }
            )*
        };
    }

    parse_tests! {
        parse_commas: "5,3+2,1" => (Add, 5.3, 2.1),
        parse_periods: "5.3+2.1" => (Add, 5.3, 2.1),
        parse_negative_first: "-5,3+2,1" => (Add, -5.3, 2.1),
        parse_negative_second: "5,3+-2,1" => (Add, 5.3, -2.1),
        parse_both_negative: "-5,3+-2,1" => (Add, -5.3, -2.1),
        parse_subtraction: "5-3" => (Sub, 5.0, 3.0),
        parse_subtract_negative: "5--3" => (Sub, 5.0, -3.0),
        parse_spaces: "  5- 3  " => (Sub, 5.0, 3.0),
        parse_spaces_around_plus: "5 + -3" => (Add, 5.0, -3.0),
        parse_power: "2^3" => (Pow, 2.0, 3.0),
        parse_superscript_first: "2⁵+3" => (Add, 32.0, 3.0),
        parse_superscript_second: "2+3⁴" => (Add, 2.0, 81.0),
        parse_superscript_both: "2⁵*3⁴" => (Mul, 32.0, 81.0),
        parse_superscript_decimal_base: "1,5²/2" => (Div, 2.25, 2.0),
        parse_superscript_zero: "7⁰-1" => (Sub, 1.0, 1.0),
        parse_negative_base_keeps_sign: "-2²+0" => (Add, -4.0, 0.0),
        parse_only_first_glyph: "2⁵³+0" => (Add, 32.0, 0.0),
        parse_division_by_zero_text: "5/0" => (Div, 5.0, 0.0),
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ошибки
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn error_empty_input() {
        assert!(matches!(extended(""), Err(ParseError::EmptyInput { .. })));
        assert!(matches!(extended("  \t "), Err(ParseError::EmptyInput { .. })));
    }

    #[test]
    fn error_no_operator() {
        assert!(matches!(extended("42"), Err(ParseError::NoOperator { .. })));
        assert!(matches!(extended("-42"), Err(ParseError::NoOperator { .. })));
        assert!(matches!(extended("48⁷"), Err(ParseError::NoOperator { .. })));
    }

    #[test]
    fn error_invalid_first_operand() {
        let err = extended("abc+2").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidOperand {
                side: OperandSide::First,
                text: "abc".to_string(),
                pos: 0,
            }
        );
        assert_eq!(err.position(), Some(0));
    }

    #[test]
    fn error_minus_after_space_is_not_an_operator() {
        assert!(matches!(extended("5 -3"), Err(ParseError::NoOperator { .. })));
        assert!(matches!(extended("5 - 3"), Err(ParseError::NoOperator { .. })));
    }

    #[test]
    fn error_position_skips_leading_blanks() {
        let err = extended("1+  x").unwrap_err();
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn error_missing_first_operand() {
        let err = extended("+5").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidOperand { side: OperandSide::First, .. }
        ));
    }

    #[test]
    fn error_invalid_second_operand() {
        let err = extended("12*x").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidOperand { side: OperandSide::Second, pos: 3, .. }
        ));
        assert!(err.to_string().contains("second"));
    }

    #[test]
    fn error_second_operand_with_two_operators() {
        // Второй оператор остаётся в тексте правого операнда
        assert!(matches!(
            extended("1+2+3"),
            Err(ParseError::InvalidOperand { side: OperandSide::Second, .. })
        ));
    }

    #[test]
    fn error_invalid_exponent_base() {
        assert!(matches!(
            extended("⁵+3"),
            Err(ParseError::InvalidOperand { side: OperandSide::First, .. })
        ));
        assert!(matches!(
            extended("3+x²"),
            Err(ParseError::InvalidOperand { side: OperandSide::Second, .. })
        ));
    }

    #[test]
    fn error_messages_name_the_operand() {
        let err = extended("a+1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "the first number must be valid (use a comma or a period for decimals)"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Базовый вариант
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn basic_parses_four_operations() {
        let expr = basic("-5,3*2").unwrap();
        assert_eq!(expr.op, Operator::Mul);
        assert_eq!(expr.left, -5.3);
        assert_eq!(expr.right, 2.0);
    }

    #[test]
    fn basic_rejects_power() {
        let err = basic("2^3").unwrap_err();
        assert_eq!(err, ParseError::NoOperator { operators: "+, -, *, /" });
    }

    #[test]
    fn basic_rejects_superscripts() {
        assert!(matches!(
            basic("2⁵+3"),
            Err(ParseError::InvalidOperand { side: OperandSide::First, .. })
        ));
    }

    #[test]
    fn extract_uses_given_operator() {
        let config = Config::default();
        let spanned = SpannedOperator::new(Operator::Mul, 1);
        let expr = extract("4*2,5", spanned, &config).unwrap();
        assert_eq!(expr, Expression::new(Operator::Mul, 4.0, 2.5));
    }
}
