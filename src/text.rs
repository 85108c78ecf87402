//! String case helpers used by the console demo.

/// Upper-cases the first letter of each whitespace-separated word and
/// lower-cases the rest. Words written entirely in upper case are kept.
pub fn to_title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();

    for ch in text.chars() {
        if ch.is_whitespace() {
            out.push_str(&title_word(&word));
            word.clear();
            out.push(ch);
        } else {
            word.push(ch);
        }
    }
    out.push_str(&title_word(&word));
    out
}

/// `"hello world"` → `"helloWorld"`.
pub fn to_camel_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (index, word) in words(text).enumerate() {
        if index == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// `"hello world"` → `"HelloWorld"`.
pub fn to_pascal_case(text: &str) -> String {
    words(text).map(capitalize).collect()
}

/// Shortens `text` to at most `max_chars` characters, ending in `"..."`
/// when anything was cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    if max_chars < 3 {
        return text.chars().take(max_chars).collect();
    }

    let mut out: String = text.chars().take(max_chars - 3).collect();
    out.push_str("...");
    out
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|word| !word.is_empty())
}

fn title_word(word: &str) -> String {
    let has_letters = word.chars().any(char::is_alphabetic);
    if has_letters && !word.chars().any(char::is_lowercase) {
        return word.to_owned();
    }
    capitalize(word)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{to_camel_case, to_pascal_case, to_title_case, truncate};

    const SAMPLE: &str = "hello world from MyLibrary";

    #[test]
    fn title_case_keeps_spacing_and_acronyms() {
        assert_eq!(to_title_case(SAMPLE), "Hello World From Mylibrary");
        assert_eq!(to_title_case("the NASA  report"), "The NASA  Report");
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn camel_and_pascal_join_words() {
        assert_eq!(to_camel_case(SAMPLE), "helloWorldFromMylibrary");
        assert_eq!(to_pascal_case(SAMPLE), "HelloWorldFromMylibrary");
        assert_eq!(to_camel_case("snake_case-and kebab"), "snakeCaseAndKebab");
        assert_eq!(to_pascal_case("   "), "");
    }

    #[test]
    fn truncate_appends_ellipsis_only_when_cut() {
        assert_eq!(truncate(SAMPLE, 20), "hello world from ...");
        assert_eq!(truncate("short", 20), "short");
        assert_eq!(truncate("abcdef", 2), "ab");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }
}
