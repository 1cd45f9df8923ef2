//! String predicates and presentation transforms used by the handlers.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Title-case every word and lowercase the rest.
///
/// A word is a run of cased characters (upper, lower or titlecase letters);
/// anything else ends it. Digits and punctuation therefore start a new word:
/// `"2nd"` renders as `"2Nd"`, and uncased scripts such as CJK do too.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            push_titlecase(&mut out, c);
        }
        in_word = is_cased(c);
    }
    out
}

/// True for a non-empty string made only of letters and numeric characters.
///
/// Combining marks are neither, so a consonant with a vowel sign fails.
pub fn is_alphanumeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| is_letter(c) || c.is_numeric())
}

fn is_cased(c: char) -> bool {
    c.is_lowercase()
        || c.is_uppercase()
        || get_general_category(c) == GeneralCategory::TitlecaseLetter
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Digraphs such as `ǆ` have a titlecase form distinct from their uppercase.
fn push_titlecase(out: &mut String, c: char) {
    let mapped = unicode_case_mapping::to_titlecase(c);
    let before = out.len();
    out.extend(
        mapped
            .iter()
            .take_while(|&&code| code != 0)
            .filter_map(|&code| char::from_u32(code)),
    );
    // No titlecase entry: fall back to the uppercase mapping.
    if out.len() == before {
        out.extend(c.to_uppercase());
    }
}
