//! English inflections for generated element ids and messages
//!
//! Covers the common cases: `BlogPost` → `blog_post` → `blog_posts`.

use regex::Regex;
use std::sync::LazyLock;

static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());

/// Plural rules, most specific last
static PLURAL_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"$", "s"),
        (r"(?i)s$", "s"),
        (r"(?i)^(ax|test)is$", "${1}es"),
        (r"(?i)(octop|vir)us$", "${1}i"),
        (r"(?i)(alias|status)$", "${1}es"),
        (r"(?i)(bu)s$", "${1}ses"),
        (r"(?i)(buffal|tomat)o$", "${1}oes"),
        (r"(?i)([ti])um$", "${1}a"),
        (r"(?i)sis$", "ses"),
        (r"(?i)(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
        (r"(?i)(hive)$", "${1}s"),
        (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
        (r"(?i)(x|ch|ss|sh)$", "${1}es"),
        (r"(?i)(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
        (r"(?i)(^|_)(m|l)ouse$", "${1}${2}ice"),
        (r"(?i)(^|_)(ox)$", "${1}${2}en"),
        (r"(?i)(^|_)(quiz)$", "${1}${2}zes"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
];

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

/// `BlogPost` → `blog_post`, `HTTPRequest` → `http_request`, `Admin::User` → `admin/user`
pub fn underscore(word: &str) -> String {
    let word = word.replace("::", "/");
    let word = ACRONYM_BOUNDARY.replace_all(&word, "${1}_${2}");
    let word = WORD_BOUNDARY.replace_all(&word, "${1}_${2}");
    word.replace('-', "_").to_lowercase()
}

/// `post` → `posts`, `category` → `categories`, `person` → `people`
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let last_word = word.rsplit(['_', ' ', '/']).next().unwrap_or(word);
    let lower = last_word.to_lowercase();
    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    for (singular, plural) in IRREGULAR {
        if lower == *singular {
            let prefix = &word[..word.len() - last_word.len()];
            return format!("{prefix}{plural}");
        }
    }

    for (rule, replacement) in PLURAL_RULES.iter().rev() {
        if rule.is_match(word) {
            return rule.replace(word, *replacement).into_owned();
        }
    }
    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Post" => "post")]
    #[test_case("BlogPost" => "blog_post")]
    #[test_case("HTTPRequest" => "http_request")]
    #[test_case("Admin::User" => "admin/user")]
    #[test_case("line-item" => "line_item")]
    fn test_underscore(word: &str) -> String {
        underscore(word)
    }

    #[test_case("post" => "posts")]
    #[test_case("blog_post" => "blog_posts")]
    #[test_case("category" => "categories")]
    #[test_case("day" => "days")]
    #[test_case("box" => "boxes")]
    #[test_case("branch" => "branches")]
    #[test_case("status" => "statuses")]
    #[test_case("wife" => "wives")]
    #[test_case("half" => "halves")]
    #[test_case("analysis" => "analyses")]
    #[test_case("datum" => "data")]
    #[test_case("matrix" => "matrices")]
    #[test_case("mouse" => "mice")]
    #[test_case("person" => "people")]
    #[test_case("sales_person" => "sales_people")]
    #[test_case("sheep" => "sheep")]
    #[test_case("news" => "news")]
    #[test_case("value" => "values")]
    fn test_pluralize(word: &str) -> String {
        pluralize(word)
    }
}
