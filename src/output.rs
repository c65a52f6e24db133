//! CSV export.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::model::PlayerRecord;

/// Output schema, in column order.
pub const COLUMNS: [&str; 15] = [
    "name",
    "position",
    "player_url",
    "age",
    "minutes",
    "transfer",
    "transfer_url",
    "height",
    "foot",
    "birthplace",
    "main_pos",
    "2nd_pos",
    "3rd_pos",
    "club",
    "club_url",
];

/// One CSV row. Rendering of missing values happens here and nowhere
/// else: URLs and secondary positions render empty, identity-ish
/// fields render "Unknown".
#[derive(Serialize)]
struct Row<'a> {
    name: &'a str,
    position: &'a str,
    player_url: &'a str,
    age: Option<u32>,
    minutes: u32,
    transfer: &'a str,
    transfer_url: &'a str,
    height: Option<f32>,
    foot: &'a str,
    birthplace: &'a str,
    main_pos: &'a str,
    second_pos: &'a str,
    third_pos: &'a str,
    club: &'a str,
    club_url: &'a str,
}

impl<'a> Row<'a> {
    fn from_record(r: &'a PlayerRecord) -> Self {
        Self {
            name: &r.name,
            position: unknown(&r.position),
            player_url: empty(&r.profile_url),
            age: r.age,
            minutes: r.minutes,
            transfer: unknown(&r.transfer),
            transfer_url: empty(&r.transfer_url),
            height: r.profile.height_m,
            foot: unknown(&r.profile.foot),
            birthplace: unknown(&r.profile.birthplace),
            main_pos: unknown(&r.profile.positions.main),
            second_pos: empty(&r.profile.positions.second),
            third_pos: empty(&r.profile.positions.third),
            club: &r.club,
            club_url: &r.club_url,
        }
    }
}

fn unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("Unknown")
}

fn empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Write the deduplicated records, replacing any prior file at `path`.
///
/// The header row is written even for an empty record set.
pub fn write_csv(records: &[PlayerRecord], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(Row::from_record(record))?;
    }
    writer.flush()?;

    Ok(())
}

/// Delete `*.csv` files in `dir`, returning how many were removed.
///
/// Destructive; runs only behind the `--clean` flag.
pub fn remove_stale_exports(dir: &Path) -> Result<usize> {
    let mut removed = 0;

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }

    Ok(removed)
}
