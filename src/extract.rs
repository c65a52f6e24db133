//! Tolerant field extraction from parsed HTML.
//!
//! Every field is independently optional: a rule that matches nothing,
//! an attribute that is absent, or a value that fails coercion yields
//! `None` and the caller substitutes its default. A markup change to
//! one field degrades that field without aborting the row.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Selector};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Where a rule reads its raw value from.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    /// Concatenated text content of the matched element.
    Text,
    /// A named attribute of the matched element.
    Attr(&'static str),
}

/// A lookup rule for one semantic field: a CSS locator, an ordinal
/// among its matches, and the value source.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub selector: &'static str,
    pub nth: usize,
    pub source: Source,
}

impl FieldRule {
    /// Text content of the first match.
    pub const fn text(selector: &'static str) -> Self {
        Self {
            selector,
            nth: 0,
            source: Source::Text,
        }
    }

    /// Text content of the nth match (0-based).
    pub const fn nth_text(selector: &'static str, nth: usize) -> Self {
        Self {
            selector,
            nth,
            source: Source::Text,
        }
    }

    /// Named attribute of the first match.
    pub const fn attr(selector: &'static str, attr: &'static str) -> Self {
        Self {
            selector,
            nth: 0,
            source: Source::Attr(attr),
        }
    }
}

/// Extract a cleaned string field; `None` on any miss.
pub fn value(scope: ElementRef, rule: &FieldRule) -> Option<String> {
    let selector = Selector::parse(rule.selector).ok()?;
    let element = scope.select(&selector).nth(rule.nth)?;
    read(element, rule.source)
}

/// Extract every match of a repeated rule, in document order.
pub fn values(scope: ElementRef, rule: &FieldRule) -> Vec<String> {
    let Ok(selector) = Selector::parse(rule.selector) else {
        return Vec::new();
    };
    scope
        .select(&selector)
        .filter_map(|element| read(element, rule.source))
        .collect()
}

/// Extract an integer count, tolerating thousands separators and the
/// trailing minutes tick: `1.234'` parses as 1234.
pub fn count(scope: ElementRef, rule: &FieldRule) -> Option<u32> {
    value(scope, rule).and_then(|text| parse_count(&text))
}

/// Extract a decimal, tolerating a comma separator and a metre
/// suffix: `1,85 m` parses as 1.85.
pub fn decimal(scope: ElementRef, rule: &FieldRule) -> Option<f32> {
    value(scope, rule).and_then(|text| parse_decimal(&text))
}

fn read(element: ElementRef, source: Source) -> Option<String> {
    let raw = match source {
        Source::Text => element.text().collect::<String>(),
        Source::Attr(name) => element.value().attr(name)?.to_string(),
    };
    clean(&raw)
}

/// Collapse interior whitespace runs and trim; `None` when empty.
pub fn clean(raw: &str) -> Option<String> {
    let text = WHITESPACE.replace_all(raw, " ").trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Parse a count after stripping separators; any other non-digit
/// fails the parse rather than being skipped.
pub fn parse_count(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '\''))
        .collect();
    digits.parse().ok()
}

/// Parse a decimal with an optional comma separator and metre suffix.
pub fn parse_decimal(text: &str) -> Option<f32> {
    text.trim_end_matches('m')
        .trim()
        .replace(',', ".")
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const ROW: &str = r#"
        <table><tbody><tr>
            <td class="posrela">14</td>
            <td class="zentriert">2</td>
            <td class="zentriert">28</td>
            <td class="rueckennummer" title="Centre-Forward">9</td>
            <td class="rechts">1.234'</td>
        </tr></tbody></table>
    "#;

    #[test]
    fn test_text_rule() {
        let doc = Html::parse_document(ROW);
        let rule = FieldRule::text("td.posrela");
        assert_eq!(value(doc.root_element(), &rule), Some("14".to_string()));
    }

    #[test]
    fn test_attr_rule() {
        let doc = Html::parse_document(ROW);
        let rule = FieldRule::attr("td.rueckennummer", "title");
        assert_eq!(
            value(doc.root_element(), &rule),
            Some("Centre-Forward".to_string())
        );
    }

    #[test]
    fn test_nth_rule_picks_by_ordinal() {
        let doc = Html::parse_document(ROW);
        let rule = FieldRule::nth_text("td.zentriert", 1);
        assert_eq!(value(doc.root_element(), &rule), Some("28".to_string()));
    }

    #[test]
    fn test_locator_miss_returns_none() {
        let doc = Html::parse_document(ROW);
        assert_eq!(value(doc.root_element(), &FieldRule::text("td.missing")), None);
        assert_eq!(
            value(doc.root_element(), &FieldRule::attr("td.posrela", "title")),
            None
        );
        assert_eq!(
            value(doc.root_element(), &FieldRule::nth_text("td.zentriert", 5)),
            None
        );
    }

    #[test]
    fn test_count_strips_separators() {
        let doc = Html::parse_document(ROW);
        let rule = FieldRule::text("td.rechts");
        assert_eq!(count(doc.root_element(), &rule), Some(1234));
    }

    #[test]
    fn test_count_rejects_non_numeric() {
        let doc = Html::parse_document("<p><span class=\"v\">- (3)</span></p>");
        assert_eq!(count(doc.root_element(), &FieldRule::text("span.v")), None);
    }

    #[test]
    fn test_values_in_document_order() {
        let doc = Html::parse_document(
            "<dl><dd class=\"p\">Centre-Back</dd><dd class=\"p\">Right-Back</dd></dl>",
        );
        assert_eq!(
            values(doc.root_element(), &FieldRule::text("dd.p")),
            vec!["Centre-Back".to_string(), "Right-Back".to_string()]
        );
    }

    #[test]
    fn test_values_empty_when_no_match() {
        let doc = Html::parse_document("<p>nothing here</p>");
        assert!(values(doc.root_element(), &FieldRule::text("dd.p")).is_empty());
    }

    #[test]
    fn test_clean_normalizes_whitespace() {
        assert_eq!(clean("  Harry \n\t Kane  "), Some("Harry Kane".to_string()));
        assert_eq!(clean("   \n  "), None);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("90'"), Some(90));
        assert_eq!(parse_count("1.234'"), Some(1234));
        assert_eq!(parse_count("2,070"), Some(2070));
        assert_eq!(parse_count("-"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1,85 m"), Some(1.85));
        assert_eq!(parse_decimal("1.78m"), Some(1.78));
        assert_eq!(parse_decimal("tall"), None);
    }
}
