//! Club roster page scraping.

use lazy_static::lazy_static;
use scraper::{Html, Selector};
use url::Url;

use crate::clubs::BASE_URL;
use crate::error::Result;
use crate::extract::{self, FieldRule};
use crate::model::{PlayerRecord, ProfileAttributes};
use crate::net::PageFetcher;
use crate::profile;

const CLUB_NAME: FieldRule = FieldRule::text("h2.content-box-headline");
const CANONICAL: FieldRule = FieldRule::attr(r#"link[rel="canonical"]"#, "href");
const POSITION: FieldRule = FieldRule::attr("td.rueckennummer", "title");
const AGE: FieldRule = FieldRule::nth_text("td.zentriert", 1);
const MINUTES: FieldRule = FieldRule::text("td.rechts");
const TRANSFER: FieldRule = FieldRule::attr("span.wechsel-kader-wappen a", "title");
const TRANSFER_URL: FieldRule = FieldRule::attr("span.wechsel-kader-wappen a", "href");

lazy_static! {
    static ref ROW: Selector = Selector::parse("table.items tbody tr").unwrap();
    static ref NAME_CELL: Selector = Selector::parse("td.hauptlink").unwrap();
    static ref ANCHOR: Selector = Selector::parse("a").unwrap();
    static ref BASE: Url = Url::parse(BASE_URL).unwrap();
}

/// A parsed club page: club identity plus one record per roster row.
#[derive(Debug)]
pub struct RosterPage {
    pub club: String,
    pub club_url: String,
    pub players: Vec<PlayerRecord>,
}

/// Scrape one club: fetch the roster page, then enrich each player
/// that resolved a profile URL. A fetch failure propagates so the
/// caller can skip the club and move on to the next one.
pub fn scrape_club(fetcher: &mut PageFetcher, club_url: &str) -> Result<Vec<PlayerRecord>> {
    let html = fetcher.get(club_url)?;
    let page = parse_roster(&html, club_url);

    let mut records = page.players;
    for record in &mut records {
        if let Some(url) = record.profile_url.clone() {
            record.profile = profile::fetch_profile(fetcher, &url);
        }
    }

    Ok(records)
}

/// Parse a roster page without touching the network.
///
/// Rows lacking a name cell produce no record at all; every other
/// field degrades to its default independently.
pub fn parse_roster(html: &str, page_url: &str) -> RosterPage {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let club = extract::value(root, &CLUB_NAME)
        .map(|name| name.strip_prefix("Squad ").unwrap_or(&name).to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let club_url =
        extract::value(root, &CANONICAL).unwrap_or_else(|| page_url.to_string());

    let mut players = Vec::new();
    for row in root.select(&ROW) {
        let Some(name_cell) = row.select(&NAME_CELL).next() else {
            continue; // not a player row
        };

        let (name, profile_url) = match name_cell.select(&ANCHOR).next() {
            Some(anchor) => {
                let name = extract::clean(&anchor.text().collect::<String>())
                    .unwrap_or_else(|| "Unknown".to_string());
                let url = anchor.value().attr("href").and_then(absolute);
                (name, url)
            }
            None => ("Unknown".to_string(), None),
        };

        players.push(PlayerRecord {
            name,
            position: extract::value(row, &POSITION),
            profile_url,
            age: extract::count(row, &AGE),
            minutes: extract::count(row, &MINUTES).unwrap_or(0),
            transfer: extract::value(row, &TRANSFER)
                .and_then(|title| extract::clean(title.split(';').next().unwrap_or_default())),
            transfer_url: extract::value(row, &TRANSFER_URL).and_then(|href| absolute(&href)),
            profile: ProfileAttributes::default(),
            club: club.clone(),
            club_url: club_url.clone(),
        });
    }

    RosterPage {
        club,
        club_url,
        players,
    }
}

/// Absolutize an href against the site base. Already-absolute hrefs
/// pass through unchanged.
fn absolute(href: &str) -> Option<String> {
    BASE.join(href).ok().map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><head>
            <link rel="canonical" href="https://www.transfermarkt.co.uk/afc-wimbledon/leistungsdaten/verein/3884">
        </head><body>
            <h2 class="content-box-headline">Squad AFC Wimbledon</h2>
            <table class="items"><tbody>
                <tr>
                    <td class="hauptlink"><a href="/james-tilley/profil/spieler/361584">James Tilley</a></td>
                    <td class="rueckennummer" title="Attacking Midfield">10</td>
                    <td class="zentriert">7</td>
                    <td class="zentriert">26</td>
                    <td class="rechts">1.845'</td>
                    <td><span class="wechsel-kader-wappen">
                        <a href="/spieler/transfers/361584" title="Joined AFC Wimbledon; last club: Grimsby Town">T</a>
                    </span></td>
                </tr>
                <tr>
                    <td class="zentriert">totals row without a name cell</td>
                </tr>
                <tr>
                    <td class="hauptlink">retired</td>
                    <td class="rechts">not a number</td>
                </tr>
            </tbody></table>
        </body></html>
    "#;

    #[test]
    fn test_parse_roster_full_row() {
        let page = parse_roster(PAGE, "https://example.invalid/page");
        assert_eq!(page.club, "AFC Wimbledon");
        assert_eq!(
            page.club_url,
            "https://www.transfermarkt.co.uk/afc-wimbledon/leistungsdaten/verein/3884"
        );
        assert_eq!(page.players.len(), 2);

        let player = &page.players[0];
        assert_eq!(player.name, "James Tilley");
        assert_eq!(
            player.profile_url.as_deref(),
            Some("https://www.transfermarkt.co.uk/james-tilley/profil/spieler/361584")
        );
        assert_eq!(player.position.as_deref(), Some("Attacking Midfield"));
        assert_eq!(player.age, Some(26));
        assert_eq!(player.minutes, 1845);
        assert_eq!(player.transfer.as_deref(), Some("Joined AFC Wimbledon"));
        assert_eq!(
            player.transfer_url.as_deref(),
            Some("https://www.transfermarkt.co.uk/spieler/transfers/361584")
        );
        assert_eq!(player.club, "AFC Wimbledon");
    }

    #[test]
    fn test_row_without_name_cell_is_skipped() {
        let page = parse_roster(PAGE, "https://example.invalid/page");
        // Only the two rows carrying a hauptlink cell survive.
        let names: Vec<&str> = page.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["James Tilley", "Unknown"]);
    }

    #[test]
    fn test_anchorless_name_cell_degrades() {
        let page = parse_roster(PAGE, "https://example.invalid/page");
        let player = &page.players[1];
        assert_eq!(player.name, "Unknown");
        assert_eq!(player.profile_url, None);
        assert_eq!(player.minutes, 0); // "not a number"
        assert_eq!(player.age, None);
        assert_eq!(player.transfer, None);
    }

    #[test]
    fn test_page_without_roster_table() {
        let page = parse_roster("<html><body><p>404</p></body></html>", "https://x.invalid");
        assert_eq!(page.club, "Unknown");
        assert_eq!(page.club_url, "https://x.invalid");
        assert!(page.players.is_empty());
    }

    #[test]
    fn test_absolute_url_join() {
        assert_eq!(
            absolute("/a/profil/spieler/1").as_deref(),
            Some("https://www.transfermarkt.co.uk/a/profil/spieler/1")
        );
        assert_eq!(
            absolute("https://elsewhere.example/x").as_deref(),
            Some("https://elsewhere.example/x")
        );
    }
}
