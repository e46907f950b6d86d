// Text normalization
// Case folding, whitespace handling and Thai-aware ordering shared by every search path

use std::cmp::Ordering;

/// Lower-case a string for case-insensitive comparison.
///
/// Thai has no case, so this mostly affects Latin brand and generic names.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Lower-case a string and drop every whitespace character.
///
/// ```
/// # use drug_search::normalize::fold_compact;
/// assert_eq!(fold_compact(" Para CETAMOL "), "paracetamol");
/// ```
pub fn fold_compact(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split text into whitespace-delimited keywords, discarding empty tokens
pub fn keywords(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// First whitespace-delimited word of `s`, or `""` when there is none
pub fn first_word(s: &str) -> &str {
    s.split_whitespace().next().unwrap_or("")
}

/// Thai leading vowels (เ แ โ ใ ไ), written before the consonant they follow in speech
fn is_leading_vowel(c: char) -> bool {
    ('\u{0E40}'..='\u{0E44}').contains(&c)
}

fn is_thai_consonant(c: char) -> bool {
    ('\u{0E01}'..='\u{0E2E}').contains(&c)
}

/// Tone marks and other signs that only matter after the base letters compare equal
fn is_thai_secondary(c: char) -> bool {
    ('\u{0E47}'..='\u{0E4E}').contains(&c)
}

/// Primary and secondary collation keys for `s`
fn collation_keys(s: &str) -> (Vec<char>, Vec<char>) {
    let chars: Vec<char> = s.chars().flat_map(char::to_lowercase).collect();
    let mut primary = Vec::with_capacity(chars.len());
    let mut secondary = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_leading_vowel(c) && chars.get(i + 1).copied().is_some_and(is_thai_consonant) {
            primary.push(chars[i + 1]);
            primary.push(c);
            i += 2;
            continue;
        }
        if is_thai_secondary(c) {
            secondary.push(c);
        } else {
            primary.push(c);
        }
        i += 1;
    }

    (primary, secondary)
}

/// Compare two strings in Thai dictionary order.
///
/// Letters compare case-insensitively with leading vowels sorted after the
/// consonant that follows them; tone marks break ties, then letter case
/// (lowercase first), then the raw text.
/// Digits sort before Latin letters, which sort before Thai.
pub fn collate(a: &str, b: &str) -> Ordering {
    let (a_primary, a_secondary) = collation_keys(a);
    let (b_primary, b_secondary) = collation_keys(b);

    a_primary
        .cmp(&b_primary)
        .then_with(|| a_secondary.cmp(&b_secondary))
        .then_with(|| case_key(a).cmp(case_key(b)))
        .then_with(|| a.cmp(b))
}

fn case_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold() {
        assert_eq!(fold("Tylenol 500"), "tylenol 500");
        assert_eq!(fold("ยาเม็ด"), "ยาเม็ด");
        assert_eq!(fold(""), "");
    }

    #[test]
    fn test_fold_compact() {
        assert_eq!(fold_compact("Voltaren  Emulgel"), "voltarenemulgel");
        assert_eq!(fold_compact("\t\n "), "");
    }

    #[test]
    fn test_keywords_discard_empty_tokens() {
        assert_eq!(keywords("  ปวด   หัว "), vec!["ปวด", "หัว"]);
        assert!(keywords("   ").is_empty());
    }

    #[test]
    fn test_first_word() {
        assert_eq!(first_word("บรรเทาอาการปวด ลดไข้"), "บรรเทาอาการปวด");
        assert_eq!(first_word("  leading space"), "leading");
        assert_eq!(first_word(""), "");
    }

    #[test]
    fn test_collate_latin_case_insensitive() {
        assert_eq!(collate("advil", "Betadine"), Ordering::Less);
        assert_eq!(collate("Zyrtec", "amoxil"), Ordering::Greater);
        assert_eq!(collate("Losec", "Losec"), Ordering::Equal);
    }

    #[test]
    fn test_collate_lowercase_before_uppercase() {
        assert_eq!(collate("advil", "Advil"), Ordering::Less);
        assert_eq!(collate("ADVIL", "Advil"), Ordering::Greater);
        assert_eq!(collate("advil", "Betadine"), Ordering::Less);
    }

    #[test]
    fn test_collate_leading_vowel() {
        // เก sorts under ก, so it comes before ข
        assert_eq!(collate("เก", "ข"), Ordering::Less);
        assert_eq!(collate("กา", "เก"), Ordering::Less);
    }

    #[test]
    fn test_collate_tone_marks_are_secondary() {
        assert_eq!(collate("ก่า", "กาข"), Ordering::Less);
        assert_eq!(collate("กา", "ก่า"), Ordering::Less);
    }

    #[test]
    fn test_collate_script_order() {
        assert_eq!(collate("1 Day", "Advil"), Ordering::Less);
        assert_eq!(collate("Zyrtec", "กาโน"), Ordering::Less);
    }
}
