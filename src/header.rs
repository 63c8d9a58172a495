use column_stats::Kind;
use once_cell::sync::Lazy;
use regex::Regex;

static ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)").unwrap());
static NOT_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r#""|\(.*?\)"#).unwrap());

/// A column as declared by the header line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: Kind,
}

pub fn parse_header<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Vec<Column> {
    tokens.into_iter().map(parse_token).collect()
}

/// Parses one header token, eg. `"price" (number)`.
///
/// The first parenthesised group is the type annotation.  Every
/// parenthesised group and every double quote is stripped from the name.
/// An unclosed paren is kept as part of the name.
pub fn parse_token(token: &str) -> Column {
    let annotation = ANNOTATION
        .captures(token)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());
    Column {
        name: NOT_NAME.replace_all(token, "").trim().to_string(),
        kind: Kind::from_annotation(annotation),
    }
}
