/// Verb prefix of a convention-dispatched method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Set,
    IsSet,
    Unset,
}

/// A method name parsed against the `(get|set|isset|unset)<Identifier>`
/// grammar, with the identifier already resolved to its store key.
#[derive(Debug, PartialEq, Eq)]
pub struct MethodCall {
    pub verb: Verb,
    pub key: String,
}

impl MethodCall {
    /// Parse a method name. Verbs are lowercase and case-sensitive; the
    /// identifier must be one or more ASCII alphanumerics. Anything else
    /// returns `None`.
    pub fn parse(method: &str) -> Option<Self> {
        for (prefix, verb) in [
            ("get", Verb::Get),
            ("set", Verb::Set),
            ("isset", Verb::IsSet),
            ("unset", Verb::Unset),
        ] {
            if let Some(ident) = method.strip_prefix(prefix) {
                if !ident.is_empty() && ident.bytes().all(|b| b.is_ascii_alphanumeric()) {
                    return Some(MethodCall {
                        verb,
                        key: resolve_key(ident),
                    });
                }
            }
        }
        None
    }
}

/// Convert a camelCase/PascalCase identifier fragment into the snake_case
/// key it addresses: `UserName` -> `user_name`, `XMLParser` -> `xml_parser`,
/// `Age2Value` -> `age_2_value`.
pub fn resolve_key(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut key = String::with_capacity(ident.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && splits_word(chars[i - 1], c, chars.get(i + 1).copied()) {
            key.push('_');
        }
        key.push(c.to_ascii_lowercase());
    }
    key
}

/// Whether a word boundary falls immediately before `current`.
fn splits_word(prev: char, current: char, next: Option<char>) -> bool {
    if current.is_ascii_uppercase() {
        if prev.is_ascii_uppercase() {
            // Inside an acronym run, split before the capital that starts
            // the next word: XML|Parser.
            matches!(next, Some(n) if n.is_ascii_lowercase())
        } else {
            true
        }
    } else if current.is_ascii_alphabetic() {
        !prev.is_ascii_alphabetic()
    } else {
        prev.is_ascii_alphabetic()
    }
}
