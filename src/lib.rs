//! # calculette_rs
//!
//! Консольный калькулятор одной бинарной операции.
//!
//! Поддерживает:
//! - Числа с плавающей точкой, с запятой или точкой как десятичным разделителем
//! - Отрицательные операнды (`-5,3+-2,1`)
//! - Бинарные операции: `+`, `-`, `*`, `/`, `^`
//! - Надстрочные показатели у операндов (`2⁵+3`)
//!
//! Строка содержит ровно одну операцию: приоритетов и скобок нет.
//!
//! # Пример использования
//!
//! ```
//! use calculette_rs::{config::Config, evaluate};
//!
//! let config = Config::default();
//! assert_eq!(evaluate("2⁵+3", &config).unwrap().value, 35.0);
//! assert_eq!(
//!     evaluate("5,3+-2,1", &config).unwrap().render(&config),
//!     "Result: 5,3 + -2,1 = 3,2"
//! );
//! ```

pub mod config;
pub mod exponent;
pub mod expression;
pub mod number;
pub mod parser;
pub mod token;

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::config::{Config, Variant};
use crate::expression::Expression;

/// Общий тип ошибки калькулятора.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// Ошибка разбора строки.
    #[error("{0}")]
    Parse(#[from] parser::ParseError),

    /// Ошибка вычисления (деление на ноль, не число).
    #[error("{0}")]
    Eval(#[from] expression::EvalError),
}

impl CalcError {
    /// Возвращает позицию ошибки в исходной строке, если она известна.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(pe) => pe.position(),
            Self::Eval(_) => None,
        }
    }
}

/// Результат успешного вычисления одной строки.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Computation {
    /// Разобранное выражение.
    pub expression: Expression,
    /// Значение выражения.
    pub value: f64,
}

impl Computation {
    /// Строка результата: `Result: <a> <op> <b> = <r>`.
    #[must_use]
    pub fn render(&self, config: &Config) -> String {
        format!(
            "Result: {} {} {} = {}",
            config.format(self.expression.left),
            self.expression.op,
            config.format(self.expression.right),
            config.format(self.value)
        )
    }
}

/// Разбирает и вычисляет одну строку.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] при ошибках разбора или вычисления.
///
/// # Примеры
///
/// ```
/// use calculette_rs::{config::Config, evaluate};
///
/// let config = Config::default();
/// assert_eq!(evaluate("2^3", &config).unwrap().value, 8.0);
/// assert!(evaluate("5/0", &config).is_err());
/// ```
pub fn evaluate(input: &str, config: &Config) -> Result<Computation, CalcError> {
    let expression = parser::parse(input, config)?;
    let value = expression.evaluate()?;
    debug!(value, "выражение вычислено");
    Ok(Computation { expression, value })
}

/// Запускает интерактивный калькулятор на stdin/stdout.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(stdin.lock(), stdout.lock(), config)
}

/// Цикл REPL поверх произвольного ввода и вывода.
///
/// Ошибки разбора и вычисления печатаются, после чего цикл продолжается.
/// Работа завершается на конце ввода (Ctrl+D) или по команде `q`, `quit`,
/// `exit`.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run_with<R: BufRead, W: Write>(reader: R, mut writer: W, config: &Config) -> io::Result<()> {
    write_banner(&mut writer, config.variant)?;
    info!(variant = ?config.variant, digits = config.significant_digits, "сеанс начат");

    prompt(&mut writer)?;
    for line in reader.lines() {
        let line = line?;
        let input = line.trim();

        if is_quit_command(input) {
            break;
        }

        match evaluate(input, config) {
            Ok(computation) => writeln!(writer, "{}", computation.render(config))?,
            Err(e) => {
                debug!(input, position = ?e.position(), "{e}");
                write_error_with_context(&mut writer, input, &e)?;
            }
        }

        prompt(&mut writer)?;
    }

    writeln!(writer, "Goodbye!")?;
    info!("сеанс завершён");
    Ok(())
}

/// Выводит ошибку с указанием неверного операнда в исходной строке.
fn write_error_with_context<W: Write>(
    writer: &mut W,
    input: &str,
    error: &CalcError,
) -> io::Result<()> {
    if let Some(pos) = error.position() {
        // Позиция в байтах, а столбец считается в символах (`2⁵`)
        let column = input.get(..pos).map_or(0, |before| before.chars().count());
        writeln!(writer, "  {input}")?;
        writeln!(writer, "  {}^", " ".repeat(column))?;
    }
    writeln!(writer, "Error: {error}")
}

fn is_quit_command(input: &str) -> bool {
    ["q", "quit", "exit"]
        .iter()
        .any(|cmd| input.eq_ignore_ascii_case(cmd))
}

fn prompt<W: Write>(writer: &mut W) -> io::Result<()> {
    write!(writer, "> ")?;
    writer.flush()
}

fn write_banner<W: Write>(writer: &mut W, variant: Variant) -> io::Result<()> {
    let operations = match variant {
        Variant::Extended => "+, -, *, /, ^ (power)",
        Variant::Basic => "+, -, *, /",
    };

    writeln!(writer, "Calculette")?;
    writeln!(writer, "Enter a calculation as: <number1><operation><number2>")?;
    writeln!(writer, "Available operations: {operations}")?;
    writeln!(writer, "Examples: {}", variant.examples())?;
    writeln!(writer, "Type 'q' to quit.")
}
