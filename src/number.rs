//! Чтение и вывод чисел во французской нотации.
//!
//! Десятичный разделитель по умолчанию запятая, разделитель групп точка.
//! При вводе оба символа принимаются как десятичный разделитель: точка
//! заменяется на запятую до разбора, поэтому `5,3` и `5.3` дают одно и то же
//! число.
//!
//! Вывод повторяет общий формат с ограниченным числом значащих цифр: лишние
//! нули в дробной части отбрасываются, очень большие и очень маленькие
//! значения печатаются в экспоненциальной записи (`1,2345679E+09`).
//!
//! # Пример
//!
//! ```
//! use calculette_rs::number::NumberFormat;
//!
//! let fr = NumberFormat::FRENCH;
//! assert_eq!(fr.parse("5,3"), fr.parse("5.3"));
//! assert_eq!(fr.format(2.5, 8), "2,5");
//! ```

/// Наибольшее число значащих цифр, которое имеет смысл для `f64`.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Соглашение о разделителях.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Десятичный разделитель (используется при выводе).
    pub decimal_separator: char,
    /// Разделитель групп. При вводе трактуется как десятичный.
    pub group_separator: char,
}

impl NumberFormat {
    /// Запятая для дробной части, точка для групп.
    pub const FRENCH: Self = Self {
        decimal_separator: ',',
        group_separator: '.',
    };

    /// Является ли символ одним из разделителей.
    #[must_use]
    pub fn is_separator(&self, c: char) -> bool {
        c == self.decimal_separator || c == self.group_separator
    }

    /// Приводит текст к единому десятичному разделителю.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        text.replace(self.group_separator, &self.decimal_separator.to_string())
    }

    /// Разбирает число со знаком.
    ///
    /// Допускаются пробелы по краям, знак, цифры, один десятичный разделитель
    /// (запятая или точка) и экспонента `e`/`E`. Пустая строка, `inf`, `NaN`
    /// и прочий мусор дают `None`.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<f64> {
        let normalized = self.normalize(text.trim());

        if !normalized.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        let accepted = |c: char| {
            c.is_ascii_digit() || c == self.decimal_separator || matches!(c, '+' | '-' | 'e' | 'E')
        };
        if !normalized.chars().all(accepted) {
            return None;
        }

        normalized
            .replace(self.decimal_separator, ".")
            .parse()
            .ok()
    }

    /// Форматирует число, оставляя не больше `digits` значащих цифр.
    ///
    /// Середина округляется от нуля: `12345678,5` даёт `12345679`.
    /// Экспоненциальная запись выбирается, когда десятичный порядок меньше
    /// -5 или не меньше `digits`. `digits` ограничивается диапазоном
    /// `1..=MAX_SIGNIFICANT_DIGITS`.
    #[must_use]
    pub fn format(&self, value: f64, digits: usize) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            let symbol = if value.is_sign_positive() { "∞" } else { "-∞" };
            return symbol.to_string();
        }
        if value == 0.0 {
            return "0".to_string();
        }

        let digits = digits.clamp(1, MAX_SIGNIFICANT_DIGITS);
        let (mut kept, exponent) = round_significant(value.abs(), digits);
        let sign = if value.is_sign_negative() { "-" } else { "" };
        let separator = self.decimal_separator;

        if exponent < -5 || exponent >= digits as i32 {
            let head = kept.remove(0);
            let tail = trim_zeros(&kept);
            let mantissa = if tail.is_empty() {
                head.to_string()
            } else {
                format!("{head}{separator}{tail}")
            };
            let exp_sign = if exponent < 0 { '-' } else { '+' };
            return format!("{sign}{mantissa}E{exp_sign}{:02}", exponent.unsigned_abs());
        }

        let (integer, fraction) = if exponent >= 0 {
            let split = exponent as usize + 1;
            (kept[..split].to_string(), trim_zeros(&kept[split..]))
        } else {
            let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
            ("0".to_string(), trim_zeros(&format!("{zeros}{kept}")))
        };

        if fraction.is_empty() {
            format!("{sign}{integer}")
        } else {
            format!("{sign}{integer}{separator}{fraction}")
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::FRENCH
    }
}

/// Знаков после запятой, которых хватает на точное десятичное
/// представление любого `f64`.
const EXACT_PRECISION: usize = 767;

/// Округляет положительное конечное число до `digits` значащих цифр.
///
/// Возвращает цифры (ровно `digits` штук) и десятичный порядок первой из них.
/// Цифры берутся из точного десятичного разложения, поэтому середина
/// округляется от нуля, а не к чётному.
fn round_significant(value: f64, digits: usize) -> (String, i32) {
    let exact = format!("{:.*e}", EXACT_PRECISION, value);
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or_default();

    let all: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let mut kept: Vec<u8> = all.iter().copied().take(digits).collect();
    kept.resize(digits, 0);

    if all.get(digits).is_some_and(|&next| next >= 5) {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        // 99,9… -> 100: одна значащая цифра уходит в порядок
        if carry {
            kept.insert(0, 1);
            kept.pop();
            exponent += 1;
        }
    }

    let text: String = kept.iter().map(|d| char::from(b'0' + d)).collect();
    (text, exponent)
}

/// Убирает незначащие нули в конце дробной части.
fn trim_zeros(fraction: &str) -> String {
    fraction.trim_end_matches('0').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FR: NumberFormat = NumberFormat::FRENCH;

    macro_rules! parse_tests {
        ($($name:ident: $input:expr => $expected:expr),* $(,)?) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(FR.parse($input), $expected, "ввод: '{}'", $input);
                }
            )*
        };
    }

    parse_tests! {
        parse_integer: "42" => Some(42.0),
        parse_comma: "5,3" => Some(5.3),
        parse_period: "5.3" => Some(5.3),
        parse_negative: "-2,1" => Some(-2.1),
        parse_plus_sign: "+7" => Some(7.0),
        parse_padded: "  12,5 " => Some(12.5),
        parse_leading_separator: ",5" => Some(0.5),
        parse_trailing_separator: "3," => Some(3.0),
        parse_exponent_notation: "1,5e3" => Some(1500.0),
        parse_empty: "" => None,
        parse_blank: "   " => None,
        parse_two_separators: "1,2.3" => None,
        parse_double_sign: "--3" => None,
        parse_letters: "abc" => None,
        parse_infinity_word: "inf" => None,
        parse_nan_word: "NaN" => None,
        parse_superscript: "2⁵" => None,
    }

    macro_rules! format_tests {
        ($($name:ident: $value:expr => $expected:expr),* $(,)?) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(FR.format($value, 8), $expected, "значение: {}", $value);
                }
            )*
        };
    }

    format_tests! {
        format_zero: 0.0 => "0",
        format_negative_zero: -0.0 => "0",
        format_integer: 35.0 => "35",
        format_fraction: 2.5 => "2,5",
        format_float_noise: 5.3 + -2.1 => "3,2",
        format_negative: -7.25 => "-7,25",
        format_eight_digits: 12_345_678.0 => "12345678",
        format_tie_rounds_away_from_zero: 12_345_678.5 => "12345679",
        format_negative_tie_rounds_away_from_zero: -12_345_678.5 => "-12345679",
        format_fraction_tie: 1_234_567.25 => "1234567,3",
        format_carry_to_next_power: 99_999_999.7 => "1E+08",
        format_rounds_to_eight_digits: 1.0 / 3.0 => "0,33333333",
        format_rounding_carries: 9.999_999_999 => "10",
        format_large_scientific: 1_234_567_891.0 => "1,2345679E+09",
        format_huge_scientific: 1e20 => "1E+20",
        format_small_fixed: 0.00001 => "0,00001",
        format_small_scientific: 0.000_001 => "1E-06",
        format_negative_scientific: -2.5e-7 => "-2,5E-07",
        format_infinity: f64::INFINITY => "∞",
        format_negative_infinity: f64::NEG_INFINITY => "-∞",
        format_nan: f64::NAN => "NaN",
    }

    #[test]
    fn digits_are_clamped() {
        assert_eq!(FR.format(1.0 / 3.0, 0), "0,3");
        assert_eq!(FR.format(1.0 / 3.0, 3), "0,333");
        assert_eq!(FR.format(0.5, 100), "0,5");
    }

    #[test]
    fn separators() {
        assert!(FR.is_separator(','));
        assert!(FR.is_separator('.'));
        assert!(!FR.is_separator(' '));
        assert_eq!(FR.normalize("1.5"), "1,5");
    }

    #[test]
    fn format_then_parse_keeps_value() {
        for value in [2.5, -0.125, 1234.5678, 3.0] {
            let text = FR.format(value, 8);
            let back = FR.parse(&text).unwrap();
            assert!((back - value).abs() < 1e-9, "{value} -> {text} -> {back}");
        }
    }
}
