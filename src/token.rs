//! Поиск оператора в строке вида `<число><оператор><число>`.
//!
//! В строке ровно один бинарный оператор. Сложность только в минусе: он может
//! быть знаком отрицательного числа (`-5,3+2,1`, `5,3+-2,1`) или вычитанием
//! (`5-3`). Минус считается вычитанием, только если непосредственно перед ним
//! стоит конец числа: цифра, десятичный разделитель или надстрочный
//! показатель. Пробел концом числа не считается: в `5 -3` оператора нет.
//!
//! # Пример
//!
//! ```
//! use calculette_rs::config::Config;
//! use calculette_rs::expression::Operator;
//! use calculette_rs::token::scan_operator;
//!
//! let found = scan_operator("-5,3+2,1", &Config::default()).unwrap();
//! assert_eq!(found.op, Operator::Add);
//! assert_eq!(found.pos, 4);
//! ```

use tracing::trace;

use crate::config::Config;
use crate::exponent::is_superscript;
use crate::expression::Operator;

/// Оператор с позицией в исходной строке.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SpannedOperator {
    /// Сам оператор.
    pub op: Operator,
    /// Позиция оператора (в байтах от начала строки).
    pub pos: usize,
}

impl SpannedOperator {
    /// Создаёт оператор с позицией.
    pub const fn new(op: Operator, pos: usize) -> Self {
        Self { op, pos }
    }
}

/// Может ли символ завершать число, стоящее слева от вычитания.
fn ends_operand(c: char, config: &Config) -> bool {
    c.is_ascii_digit()
        || config.number_format.is_separator(c)
        || (config.variant.supports_exponents() && is_superscript(c))
}

/// Находит оператор, разделяющий два операнда.
///
/// Просматривает строку слева направо, начиная с
/// [`Variant::scan_start`](crate::config::Variant::scan_start).
/// Любой допустимый оператор, кроме `-`, возвращается сразу. Минус
/// возвращается, только если ему предшествует конец числа; иначе это знак
/// числа, и поиск продолжается. `None` означает, что оператора нет.
#[must_use]
pub fn scan_operator(expression: &str, config: &Config) -> Option<SpannedOperator> {
    let variant = config.variant;
    let operators = variant.operators();
    let mut previous: Option<char> = None;

    for (index, (pos, c)) in expression.char_indices().enumerate() {
        let before = previous.replace(c);

        if index < variant.scan_start() || !operators.contains(&c) {
            continue;
        }

        if c == '-' && !before.is_some_and(|b| ends_operand(b, config)) {
            trace!(pos, "минус относится к числу");
            continue;
        }

        return Operator::from_symbol(c).map(|op| SpannedOperator::new(op, pos));
    }

    None
}
