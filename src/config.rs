//! Настройки сеанса калькулятора.

use crate::number::{NumberFormat, MAX_SIGNIFICANT_DIGITS};

/// Набор поддерживаемых возможностей.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Операции `+ - * / ^` и надстрочные показатели (`2⁵`).
    #[default]
    Extended,
    /// Только `+ - * /`. Первый символ никогда не считается оператором.
    Basic,
}

impl Variant {
    /// Символы операторов, которые распознаёт сканер.
    #[must_use]
    pub const fn operators(self) -> &'static [char] {
        match self {
            Self::Extended => &['+', '-', '*', '/', '^'],
            Self::Basic => &['+', '-', '*', '/'],
        }
    }

    /// С какого символа (по счёту) начинается поиск оператора.
    #[must_use]
    pub const fn scan_start(self) -> usize {
        match self {
            Self::Extended => 0,
            Self::Basic => 1,
        }
    }

    /// Список операторов для подсказок пользователю.
    #[must_use]
    pub const fn operator_hint(self) -> &'static str {
        match self {
            Self::Extended => "+, -, *, /, ^ or an exponent (⁰¹²³⁴⁵⁶⁷⁸⁹)",
            Self::Basic => "+, -, *, /",
        }
    }

    /// Примеры корректного ввода.
    #[must_use]
    pub const fn examples(self) -> &'static str {
        match self {
            Self::Extended => "5,3+2,1; -5,3+2,1; 5,3+-2,1; -5,3+-2,1; 2^3; 2⁵+3; 2+3⁴; 2⁵*3⁴",
            Self::Basic => "5,3+2,1; -5,3+2,1; 5,3+-2,1; -5,3+-2,1",
        }
    }

    /// Разрешены ли надстрочные показатели.
    #[must_use]
    pub const fn supports_exponents(self) -> bool {
        matches!(self, Self::Extended)
    }
}

/// Конфигурация REPL. Не меняется в течение сеанса.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Вариант калькулятора.
    pub variant: Variant,
    /// Число значащих цифр при выводе.
    pub significant_digits: usize,
    /// Разделители для ввода и вывода.
    pub number_format: NumberFormat,
}

impl Config {
    /// Значащих цифр по умолчанию.
    pub const DEFAULT_DIGITS: usize = 8;

    /// Конфигурация с заданным вариантом и остальными значениями по умолчанию.
    #[must_use]
    pub fn with_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Задаёт число значащих цифр, ограничивая его диапазоном `1..=17`.
    #[must_use]
    pub fn digits(mut self, digits: usize) -> Self {
        self.significant_digits = digits.clamp(1, MAX_SIGNIFICANT_DIGITS);
        self
    }

    /// Форматирует число по настройкам сеанса.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        self.number_format.format(value, self.significant_digits)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::Extended,
            significant_digits: Self::DEFAULT_DIGITS,
            number_format: NumberFormat::FRENCH,
        }
    }
}
