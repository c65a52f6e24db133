//! Player profile page scraping.

use lazy_static::lazy_static;
use log::warn;
use scraper::{ElementRef, Html, Selector};

use crate::extract::{self, FieldRule};
use crate::model::{Positions, ProfileAttributes};
use crate::net::PageFetcher;

const HEIGHT: FieldRule = FieldRule::text(r#"span[itemprop="height"]"#);
const BIRTHPLACE: FieldRule = FieldRule::text(r#"span[itemprop="birthPlace"]"#);
const POSITIONS: FieldRule = FieldRule::text("dd.detail-position__position");

lazy_static! {
    static ref SPAN: Selector = Selector::parse("span").unwrap();
}

/// Fetch a player's profile and extract secondary attributes.
///
/// Failures are soft: the warning is logged and the player proceeds
/// with defaults. The courtesy pause runs whether or not the fetch
/// succeeded.
pub fn fetch_profile(fetcher: &mut PageFetcher, url: &str) -> ProfileAttributes {
    let attributes = match fetcher.get(url) {
        Ok(html) => parse_profile(&html),
        Err(e) => {
            warn!("Failed to fetch player profile {url}: {e}");
            ProfileAttributes::default()
        }
    };
    fetcher.pause();
    attributes
}

/// Extract profile attributes from an already-fetched document.
pub fn parse_profile(html: &str) -> ProfileAttributes {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let mut slots = extract::values(root, &POSITIONS).into_iter();
    let positions = Positions {
        main: slots.next(),
        second: slots.next(),
        third: slots.next(),
    };

    ProfileAttributes {
        height_m: extract::decimal(root, &HEIGHT),
        foot: labelled_value(root, "Foot:"),
        birthplace: extract::value(root, &BIRTHPLACE),
        positions,
    }
}

/// Find the bold value span following a label span.
///
/// The profile info table renders label/value pairs as sibling spans;
/// the value carries the `info-table__content--bold` class.
fn labelled_value(root: ElementRef, label: &str) -> Option<String> {
    let label_span = root
        .select(&SPAN)
        .find(|el| el.text().collect::<String>().trim() == label)?;

    label_span
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| has_class(el, "info-table__content--bold"))
        .and_then(|el| extract::clean(&el.text().collect::<String>()))
}

fn has_class(el: &ElementRef, class: &str) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}
