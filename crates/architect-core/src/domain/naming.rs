//! Naming conventions shared by every generator.
//!
//! The three transforms are intentionally *not* symmetric:
//!
//! | Input               | Pascal          | camel           | kebab               |
//! |---------------------|-----------------|-----------------|---------------------|
//! | `"my cool-thing_2"` | `MyCoolThing2`  | `myCoolThing2`  | `my-cool-thing-2`   |
//! | `"MyCoolThing"`     | `Mycoolthing`   | `mycoolthing`   | `my-cool-thing`     |
//! | `"a.b"`             | `AB`            | `aB`            | `a.b`               |
//!
//! `to_pascal_case` treats every non-alphanumeric character as a word
//! separator and normalises each word to `Upper` + `lower`. `to_kebab_case`
//! only splits on lower→upper transitions, whitespace and underscores, and
//! keeps any other punctuation as-is. Generated file names depend on this
//! exact behaviour, so neither function should be "fixed" towards the other.

use serde::Serialize;

/// Convert a string to PascalCase.
///
/// Every character that is not an ASCII letter or digit separates words.
/// Empty words are dropped; each remaining word gets an uppercase first
/// character and a lowercase remainder.
pub fn to_pascal_case(input: &str) -> String {
    input
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

/// Convert a string to camelCase: PascalCase with the first character
/// lowercased.
pub fn to_camel_case(input: &str) -> String {
    let pascal = to_pascal_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(pascal.len());
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Convert a string to kebab-case.
///
/// ## Rules
///
/// 1. Insert `-` between a lowercase letter and a directly following
///    uppercase letter (`aB` → `a-B`)
/// 2. Collapse every run of whitespace or `_` into a single `-`
/// 3. Lowercase everything
///
/// Other punctuation, including existing `-`, passes through untouched.
pub fn to_kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut chars = input.chars().peekable();
    let mut in_separator_run = false;

    while let Some(c) = chars.next() {
        if c.is_whitespace() || c == '_' {
            if !in_separator_run {
                out.push('-');
                in_separator_run = true;
            }
            continue;
        }
        in_separator_run = false;

        out.push(c);
        if c.is_ascii_lowercase() && chars.peek().is_some_and(|next| next.is_ascii_uppercase()) {
            out.push('-');
        }
    }

    out.to_lowercase()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Every identifier variant derived from one user-supplied name.
///
/// Computed once per request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingSet {
    pub pascal: String,
    pub camel: String,
    pub kebab: String,
    /// Always prefixed with `use`.
    pub hook_name: String,
}

impl NamingSet {
    pub fn derive(raw_name: &str) -> Self {
        let pascal = to_pascal_case(raw_name);
        let camel = to_camel_case(raw_name);
        let kebab = to_kebab_case(raw_name);
        let hook_name = if camel.starts_with("use") {
            camel.clone()
        } else {
            format!("use{pascal}")
        };

        Self {
            pascal,
            camel,
            kebab,
            hook_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── to_pascal_case ────────────────────────────────────────────────────

    #[test]
    fn pascal_splits_on_any_non_alphanumeric() {
        assert_eq!(to_pascal_case("my cool-thing_2"), "MyCoolThing2");
        assert_eq!(to_pascal_case("hello_world-foo"), "HelloWorldFoo");
        assert_eq!(to_pascal_case("a.b/c"), "ABC");
    }

    #[test]
    fn pascal_lowercases_word_remainders() {
        assert_eq!(to_pascal_case("MyCoolThing"), "Mycoolthing");
        assert_eq!(to_pascal_case("HTTP server"), "HttpServer");
    }

    #[test]
    fn pascal_of_empty_or_separators_is_empty() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("--__  .."), "");
    }

    #[test]
    fn pascal_drops_non_ascii_letters() {
        assert_eq!(to_pascal_case("café bar"), "CafBar");
    }

    // ── to_camel_case ─────────────────────────────────────────────────────

    #[test]
    fn camel_lowercases_first_char_only() {
        assert_eq!(to_camel_case("user card"), "userCard");
        assert_eq!(to_camel_case("fetch-data"), "fetchData");
    }

    #[test]
    fn camel_of_empty_is_empty() {
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_camel_case("___"), "");
    }

    #[test]
    fn camel_is_pascal_with_lowered_head() {
        for input in ["x", "UserCard", "my cool-thing_2", "useFetchData", "9lives", "a.b"] {
            let pascal = to_pascal_case(input);
            let camel = to_camel_case(input);
            let mut chars = pascal.chars();
            let expected = match chars.next() {
                Some(c) => format!("{}{}", c.to_ascii_lowercase(), chars.as_str()),
                None => String::new(),
            };
            assert_eq!(camel, expected, "input: {input:?}");
        }
    }

    // ── to_kebab_case ─────────────────────────────────────────────────────

    #[test]
    fn kebab_splits_lower_upper_transitions() {
        assert_eq!(to_kebab_case("HelloWorldFoo"), "hello-world-foo");
        assert_eq!(to_kebab_case("MyCoolThing"), "my-cool-thing");
    }

    #[test]
    fn kebab_leaves_existing_kebab_alone() {
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
    }

    #[test]
    fn kebab_collapses_whitespace_and_underscore_runs() {
        assert_eq!(to_kebab_case("my  cool__thing"), "my-cool-thing");
        assert_eq!(to_kebab_case("a _ b"), "a-b");
    }

    #[test]
    fn kebab_keeps_other_punctuation() {
        assert_eq!(to_kebab_case("a.b"), "a.b");
        assert_eq!(to_kebab_case("a--b"), "a--b");
        assert_eq!(to_kebab_case("v2.0Beta"), "v2.0beta");
    }

    #[test]
    fn kebab_does_not_split_acronyms() {
        assert_eq!(to_kebab_case("HTTPServer"), "httpserver");
        assert_eq!(to_kebab_case("myHTTP"), "my-http");
    }

    #[test]
    fn kebab_of_empty_is_empty() {
        assert_eq!(to_kebab_case(""), "");
    }

    // ── NamingSet ─────────────────────────────────────────────────────────

    #[test]
    fn hook_name_gets_use_prefix() {
        assert_eq!(NamingSet::derive("fetch data").hook_name, "useFetchData");
        // Inner capitals are lowered by the Pascal transform.
        assert_eq!(NamingSet::derive("fetchData").hook_name, "useFetchdata");
    }

    #[test]
    fn hook_name_is_not_double_prefixed() {
        assert_eq!(NamingSet::derive("use fetch data").hook_name, "useFetchData");
        assert_eq!(NamingSet::derive("use-auth").hook_name, "useAuth");
        assert_eq!(NamingSet::derive("useFetchData").hook_name, "usefetchdata");
    }

    #[test]
    fn hook_name_prefix_check_uses_camel_form() {
        // "User" lowercases to "user", which already starts with "use".
        assert_eq!(NamingSet::derive("User").hook_name, "user");
    }

    #[test]
    fn naming_set_for_component_name() {
        let names = NamingSet::derive("UserCard");
        assert_eq!(names.pascal, "Usercard");
        assert_eq!(names.camel, "usercard");
        assert_eq!(names.kebab, "user-card");
    }
}
