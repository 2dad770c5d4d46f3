//! Identifier and string helpers for turning grammar kinds into constants.
//!
//! Grammar node kinds are arbitrary strings (`"("`, `"macro_rules!"`,
//! `"template_string"`). The helpers here turn them into identifiers that are
//! valid in every output target:
//!
//! ```
//! use enums_core::naming::{camel_case, sanitize_identifier};
//!
//! assert_eq!(camel_case(&sanitize_identifier("macro_rules!")), "MacroRulesBANG");
//! assert_eq!(camel_case(&sanitize_identifier("(")), "LPAREN");
//! ```

use crate::hash::{FxHashMap, FxHashSet};

/// Words that cannot be used as a constant in at least one output target.
const RESERVED: &[&str] = &[
    "_", "Self", "self", "super", "crate", "abstract", "as", "async", "await", "become", "box",
    "break", "case", "chan", "const", "continue", "default", "defer", "do", "dyn", "else", "enum",
    "extern", "fallthrough", "false", "final", "fn", "for", "func", "gen", "go", "goto", "if",
    "impl", "import", "in", "interface", "let", "loop", "macro", "map", "match", "mod", "move",
    "mut", "override", "package", "priv", "pub", "range", "ref", "return", "select", "static",
    "struct", "switch", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "var", "virtual", "where", "while", "yield",
];

/// Names the generated code declares or refers to at package scope, which a
/// constant would shadow or redeclare.
const GENERATED_NAMES: &[&str] = &["FromString", "int16", "iota", "panic", "st", "str", "string"];

/// Uppercases the first character of `s`.
///
/// # Examples
///
/// ```
/// use enums_core::naming::capitalize;
///
/// assert_eq!(capitalize("typescript"), "Typescript");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Converts `snake_case` to `CamelCase`.
///
/// Underscores are dropped and the character following each one is
/// uppercased, as is the first character. Other characters are kept as-is,
/// so already-uppercase runs like `LPAREN` survive.
///
/// # Examples
///
/// ```
/// use enums_core::naming::camel_case;
///
/// assert_eq!(camel_case("type_script"), "TypeScript");
/// assert_eq!(camel_case("LPAREN_RPAREN"), "LPARENRPAREN");
/// ```
#[must_use]
pub fn camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut cap = true;
    for c in name.chars() {
        if c == '_' {
            cap = true;
        } else if cap {
            result.extend(c.to_uppercase());
            cap = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Replaces every character that cannot appear in an identifier.
///
/// ASCII letters, digits and `_` are kept. Punctuation is spelled out
/// (`!` becomes `BANG`) and joined to the rest with `_`; any other character
/// is dropped.
#[must_use]
pub fn sanitize_identifier(name: &str) -> String {
    match name {
        "\u{feff}" | "\u{ef}\u{bb}\u{bf}" => return "BOM".to_owned(),
        "_" => return "UNDERSCORE".to_owned(),
        "self" => return "Zelf".to_owned(),
        "Self" => return "SELF".to_owned(),
        _ => {}
    }

    let mut result = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            result.push(c);
            continue;
        }
        let Some(word) = punctuation_word(c) else {
            continue;
        };
        if !result.is_empty() && !result.ends_with('_') {
            result.push('_');
        }
        result.push_str(word);
    }
    result
}

fn punctuation_word(c: char) -> Option<&'static str> {
    let word = match c {
        '~' => "TILDE",
        '`' => "BQUOTE",
        '!' => "BANG",
        '@' => "AT",
        '#' => "HASH",
        '$' => "DOLLAR",
        '%' => "PERCENT",
        '^' => "CARET",
        '&' => "AMP",
        '*' => "STAR",
        '(' => "LPAREN",
        ')' => "RPAREN",
        '-' => "DASH",
        '+' => "PLUS",
        '=' => "EQ",
        '{' => "LBRACE",
        '}' => "RBRACE",
        '[' => "LBRACK",
        ']' => "RBRACK",
        '\\' => "BSLASH",
        '|' => "PIPE",
        ':' => "COLON",
        ';' => "SEMI",
        '"' => "DQUOTE",
        '\'' => "SQUOTE",
        '<' => "LT",
        '>' => "GT",
        ',' => "COMMA",
        '.' => "DOT",
        '?' => "QMARK",
        '/' => "SLASH",
        '\n' => "LF",
        '\r' => "CR",
        '\t' => "TAB",
        _ => return None,
    };
    Some(word)
}

/// Escapes `s` for use inside a double-quoted string literal.
///
/// Go and Rust share the escapes needed here.
///
/// # Examples
///
/// ```
/// use enums_core::naming::escape_string;
///
/// assert_eq!(escape_string(r#"\""#), r#"\\\""#);
/// assert_eq!(escape_string("\n"), r"\n");
/// ```
#[must_use]
pub fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\t' => result.push_str("\\t"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            _ => result.push(c),
        }
    }
    result
}

/// Returns `true` if `name` can be used as a constant in every output target.
///
/// # Examples
///
/// ```
/// use enums_core::naming::is_identifier;
///
/// assert!(is_identifier("Identifier"));
/// assert!(is_identifier("_1"));
/// assert!(!is_identifier("1st"));
/// assert!(!is_identifier("Self"));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED.contains(&name)
}

/// Returns `true` if a constant called `name` would clash with the code
/// generated around it.
///
/// # Examples
///
/// ```
/// use enums_core::naming::is_generated_name;
///
/// assert!(is_generated_name("FromString"));
/// assert!(is_generated_name("string"));
/// assert!(!is_generated_name("String"));
/// ```
#[must_use]
pub fn is_generated_name(name: &str) -> bool {
    GENERATED_NAMES.contains(&name)
}

/// Assigns unique constant names to grammar kinds.
///
/// The first kind that maps to a given name keeps it; later ones get a
/// numeric suffix starting at `2`.
///
/// # Examples
///
/// ```
/// use enums_core::naming::ConstantNamer;
///
/// let mut namer = ConstantNamer::new();
/// assert_eq!(namer.assign("identifier"), "Identifier");
/// assert_eq!(namer.assign("identifier"), "Identifier2");
/// assert_eq!(namer.assign("("), "LPAREN");
/// ```
#[derive(Debug, Default)]
pub struct ConstantNamer {
    counts: FxHashMap<String, usize>,
    used: FxHashSet<String>,
}

impl ConstantNamer {
    /// Creates a namer with no names assigned.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the constant name for `kind`, unique among all names assigned so far.
    pub fn assign(&mut self, kind: &str) -> String {
        let mut base = camel_case(&sanitize_identifier(kind));
        if base.is_empty() {
            base = "Unnamed".to_owned();
        } else if base.starts_with(|c: char| c.is_ascii_digit()) {
            base.insert(0, '_');
        }

        let count = self.counts.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1
            && is_identifier(&base)
            && !is_generated_name(&base)
            && self.used.insert(base.clone())
        {
            return base;
        }
        loop {
            *count += usize::from(*count == 1);
            let candidate = format!("{base}{count}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            *count += 1;
        }
    }
}
