//! Title ordering that follows dictionary order for the content language
//!
//! Plain code point order gets two things wrong for Russian titles: case
//! (uppercase letters sort before all lowercase ones) and `ё`, which sits
//! outside the `а..я` block. Titles are compared in three passes: letters
//! folded to lowercase with `ё` treated as `е`, then `е` before `ё`, then
//! lowercase before uppercase.

use std::cmp::Ordering;

fn primary(c: char) -> char {
    match c {
        'ё' | 'Ё' => 'е',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

fn secondary(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn tertiary(c: char) -> u8 {
    if c.is_uppercase() {
        1
    } else {
        0
    }
}

/// Compare two titles in dictionary order
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary)
        .cmp(b.chars().map(primary))
        .then_with(|| a.chars().map(secondary).cmp(b.chars().map(secondary)))
        .then_with(|| a.chars().map(tertiary).cmp(b.chars().map(tertiary)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_does_not_dominate() {
        assert_eq!(compare("беседа", "Символизм"), Ordering::Less);
        assert_eq!(compare("Беседа", "символизм"), Ordering::Less);
    }

    #[test]
    fn test_yo_sorts_with_ye() {
        // Code point order would put "ёлка" after every other word
        assert_eq!(compare("ёлка", "жизнь"), Ordering::Less);
        assert_eq!(compare("елка", "ёлка"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_first_on_tie() {
        assert_eq!(compare("роман", "Роман"), Ordering::Less);
        assert_eq!(compare("Роман", "Роман"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare("Основы", "Основы литературоведения"), Ordering::Less);
    }
}
