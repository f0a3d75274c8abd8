//! English noun inflection for route names.
//!
//! Resource routes are named after the resource: collection routes use the
//! plural (`posts`), member routes the singular (`post`). Callers may pass
//! either form, so both directions must leave a word that is already in the
//! target form alone.
//!
//! Lookup order: uncountable words, whole-word irregulars, then the suffix
//! rules below. The first rule that matches wins.

use regex::Regex;
use once_cell::sync::Lazy;

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "moose",
    "deer",
    "news",
    "jeans",
    "police",
    "traffic",
    "metadata",
];

// (singular, plural)
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("ox", "oxen"),
    ("zombie", "zombies"),
];

const PLURAL_RULES: &[(&str, &str)] = &[
    (r"(?i)(quiz)$", "${1}zes"),
    (r"(?i)([ml])ice$", "${1}ice"),
    (r"(?i)([ml])ouse$", "${1}ice"),
    (r"(?i)(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    (r"(?i)(alias|status)$", "${1}es"),
    (r"(?i)(octop|vir)(?:us|i)$", "${1}i"),
    (r"(?i)^(ax|test)is$", "${1}es"),
    (r"(?i)(bu)s$", "${1}ses"),
    (r"(?i)(x|ch|ss|sh)$", "${1}es"),
    (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
    (r"(?i)(hive)$", "${1}s"),
    (r"(?i)(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    (r"(?i)sis$", "ses"),
    (r"(?i)([ti])a$", "${1}a"),
    (r"(?i)([ti])um$", "${1}a"),
    (r"(?i)(buffal|tomat|potat|her)o$", "${1}oes"),
    (r"(?i)s$", "s"),
    (r"$", "s"),
];

const SINGULAR_RULES: &[(&str, &str)] = &[
    (r"(?i)(database)s$", "${1}"),
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(vert|ind)ices$", "${1}ex"),
    (r"(?i)(alias|status)(?:es)?$", "${1}"),
    (r"(?i)(octop|vir)(?:us|i)$", "${1}us"),
    (r"(?i)^(a)x[ie]s$", "${1}xis"),
    (r"(?i)(cris|test)(?:is|es)$", "${1}is"),
    (r"(?i)(shoe)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"(?i)(bus)(?:es)?$", "${1}"),
    (r"(?i)([ml])ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh)es$", "${1}"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)([lr])ves$", "${1}f"),
    (r"(?i)(tive)s$", "${1}"),
    (r"(?i)(hive)s$", "${1}"),
    (r"(?i)([^f])ves$", "${1}fe"),
    (r"(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(?:sis|ses)$", "${1}sis"),
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)(ss|us)$", "${1}"),
    (r"(?i)s$", ""),
];

static PLURALS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| compile(PLURAL_RULES));
static SINGULARS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| compile(SINGULAR_RULES));

fn compile(rules: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    rules
        .iter()
        .map(|(pattern, replacement)| {
            (Regex::new(pattern).expect("inflection rule is a valid regex"), *replacement)
        })
        .collect()
}

/// The plural form of `word`. Plural input is returned unchanged.
pub fn pluralize(word: &str) -> String {
    inflect(word, &PLURALS, |(singular, plural)| (*singular, *plural))
}

/// The singular form of `word`. Singular input is returned unchanged.
pub fn singularize(word: &str) -> String {
    inflect(word, &SINGULARS, |(singular, plural)| (*plural, *singular))
}

fn inflect(
    word: &str,
    rules: &[(Regex, &'static str)],
    direction: impl Fn(&(&'static str, &'static str)) -> (&'static str, &'static str),
) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();
    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    for pair in IRREGULAR {
        let (from, to) = direction(pair);
        if lower == from || lower == to {
            return match_case(word, to);
        }
    }

    // Only the last segment of a compound name is inflected: `blog_post` -> `blog_posts`.
    let (head, tail) = match word.rfind(['_', '-']) {
        Some(i) => word.split_at(i + 1),
        None => ("", word),
    };
    if head.is_empty() {
        return rules
            .iter()
            .find(|(pattern, _)| pattern.is_match(tail))
            .map(|(pattern, replacement)| pattern.replace(tail, *replacement).into_owned())
            .unwrap_or_else(|| tail.to_string());
    }

    format!("{}{}", head, inflect(tail, rules, direction))
}

fn match_case(original: &str, replacement: &str) -> String {
    let mut chars = replacement.chars();
    match (original.chars().next(), chars.next()) {
        (Some(first), Some(r)) if first.is_uppercase() => r.to_uppercase().chain(chars).collect(),
        _ => replacement.to_string(),
    }
}
