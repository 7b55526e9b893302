//! Надстрочные показатели степени (`⁰¹²³⁴⁵⁶⁷⁸⁹`).
//!
//! Операнд может заканчиваться одним надстрочным символом: `2⁵` читается как
//! `2^5`. Таблица фиксирована и упорядочена: индекс символа равен цифре.
//!
//! # Пример
//!
//! ```
//! use calculette_rs::exponent::find_exponent_glyph;
//!
//! assert_eq!(find_exponent_glyph("2⁵"), Some((1, 5)));
//! assert_eq!(find_exponent_glyph("25"), None);
//! ```

/// Надстрочные цифры от 0 до 9.
pub const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Возвращает цифру, которую кодирует надстрочный символ.
#[must_use]
pub fn superscript_digit(c: char) -> Option<u8> {
    SUPERSCRIPT_DIGITS
        .iter()
        .position(|&glyph| glyph == c)
        .and_then(|digit| u8::try_from(digit).ok())
}

/// Является ли символ надстрочной цифрой.
#[must_use]
pub fn is_superscript(c: char) -> bool {
    superscript_digit(c).is_some()
}

/// Ищет первый надстрочный символ слева направо.
///
/// Возвращает позицию символа (в байтах) и закодированную цифру.
#[must_use]
pub fn find_exponent_glyph(text: &str) -> Option<(usize, u8)> {
    text.char_indices()
        .find_map(|(pos, c)| superscript_digit(c).map(|digit| (pos, digit)))
}
