//! Dedup fold: one canonical record per player name.

use std::collections::HashMap;

use crate::model::PlayerRecord;

/// Collapse records sharing a name, keeping the appearance with the
/// most minutes played. Replacement requires strictly greater minutes,
/// so exact ties keep the first-seen record. Output preserves
/// first-seen order, which keeps re-runs byte-identical downstream.
///
/// Single pass, O(n) over all raw records.
pub fn dedupe(records: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut kept: Vec<PlayerRecord> = Vec::new();

    for record in records {
        match slots.get(&record.name) {
            Some(&i) => {
                if kept[i].minutes < record.minutes {
                    kept[i] = record;
                }
            }
            None => {
                slots.insert(record.name.clone(), kept.len());
                kept.push(record);
            }
        }
    }

    kept
}
