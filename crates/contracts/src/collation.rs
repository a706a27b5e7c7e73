//! Korean-locale string comparison for display ordering.
//!
//! Mirrors `localeCompare(_, 'ko')` semantics closely enough for board
//! ordering: characters compare by class first (symbols, then digits,
//! then Latin, then other scripts, then Hangul), Latin letters compare
//! case-insensitively, and within Hangul the syllable code-point order
//! already matches dictionary order. Byte-wise ordering would get mixed
//! Latin case wrong, hence the explicit comparator.

use std::cmp::Ordering;

fn char_class(c: char) -> u8 {
    if c.is_ascii_digit() {
        1
    } else if c.is_ascii_alphabetic() {
        2
    } else if is_hangul(c) {
        4
    } else if c.is_alphabetic() {
        3
    } else {
        0
    }
}

fn is_hangul(c: char) -> bool {
    // Syllables, jamo and compatibility jamo
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
        || ('\u{1100}'..='\u{11FF}').contains(&c)
        || ('\u{3130}'..='\u{318F}').contains(&c)
}

fn primary(c: char) -> (u8, char) {
    let folded = c.to_lowercase().next().unwrap_or(c);
    (char_class(c), folded)
}

/// Locale-aware comparison of two display names.
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars();
    let mut cb = b.chars();
    loop {
        match (ca.next(), cb.next()) {
            (None, None) => break,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let (kx, ky) = (primary(x), primary(y));
                if kx != ky {
                    return kx.cmp(&ky);
                }
            }
        }
    }

    // Primary-equal strings differ only by case: lowercase sorts first
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return match (x.is_uppercase(), y.is_uppercase()) {
                (false, true) => Ordering::Less,
                (true, false) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hangul_dictionary_order() {
        // ㅂ initial sorts before ㅅ initial
        assert_eq!(compare("바나나", "사과"), Ordering::Less);
        assert_eq!(compare("사과", "바나나"), Ordering::Greater);
        assert_eq!(compare("사과", "사과"), Ordering::Equal);
    }

    #[test]
    fn test_class_ordering_digits_latin_hangul() {
        assert_eq!(compare("1번 창고", "apple"), Ordering::Less);
        assert_eq!(compare("apple", "가지"), Ordering::Less);
        assert_eq!(compare("1번 창고", "가지"), Ordering::Less);
    }

    #[test]
    fn test_latin_case_insensitive_primary() {
        // Byte order would put "Banana" before "apple"
        assert_eq!(compare("apple", "Banana"), Ordering::Less);
        // Equal primaries fall back to lowercase-first
        assert_eq!(compare("apple", "Apple"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare("사과", "사과주스"), Ordering::Less);
    }
}
