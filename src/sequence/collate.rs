use std::cmp::Ordering;

/// Primary weight class: whitespace, then punctuation/symbols, then digits, then letters
fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}

/// Order among punctuation and symbols: punctuation before currency signs
fn symbol_rank(c: char) -> u8 {
    match c {
        '\'' => 0,
        '%' => 1,
        '$' => 2,
        '£' => 3,
        _ => 4,
    }
}

fn primary_keys(s: &str) -> impl Iterator<Item = (u8, u8, char)> + '_ {
    s.chars().flat_map(char::to_lowercase).map(|c| {
        let class = char_class(c);
        let rank = if class == 1 { symbol_rank(c) } else { 0 };
        (class, rank, c)
    })
}

/// Compare two strings the way a dictionary would
///
/// Case is ignored at the primary level ("apple" < "Banana"). Strings that are
/// equal after folding are ordered lowercase-first at the first differing
/// character ("this" < "This"), and finally by code point so the ordering is
/// total.
///
/// # Example
/// ```
/// use ngrams::sequence::collate;
/// use std::cmp::Ordering;
///
/// assert_eq!(collate("apple", "Banana"), Ordering::Less);
/// assert_eq!(collate("this", "This"), Ordering::Less);
/// assert_eq!(collate("a b", "ab"), Ordering::Less);
/// ```
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_keys(a)
        .cmp(primary_keys(b))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Collation of the lowercased strings, used by the case-insensitive re-sort
pub fn collate_folded(a: &str, b: &str) -> Ordering {
    collate(&a.to_lowercase(), &b.to_lowercase())
}
