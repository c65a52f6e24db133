//! Player record value types.

/// Detailed position list from a player's profile page.
///
/// Slots are filled by document order of the repeated position
/// element. The origin renders the main position first; this is an
/// ordering assumption inherited from the markup, not a guarantee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Positions {
    pub main: Option<String>,
    pub second: Option<String>,
    pub third: Option<String>,
}

/// Secondary attributes from a player's profile page.
///
/// All fields are best-effort: a failed profile fetch leaves every
/// field at its default and the player keeps its roster-page data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileAttributes {
    /// Height in metres, e.g. 1.85.
    pub height_m: Option<f32>,
    pub foot: Option<String>,
    pub birthplace: Option<String>,
    pub positions: Positions,
}

/// One player-appearance observation from a single club-page visit.
///
/// A player appearing for two clubs in the input list produces two
/// records with the same `name` but different `club` and `minutes`.
/// After the dedup fold the surviving instance is the canonical
/// record for that name; every field is carried over verbatim from
/// the winning appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    /// "Unknown" when the name cell exists but carries no link.
    pub name: String,
    pub position: Option<String>,
    pub profile_url: Option<String>,
    pub age: Option<u32>,
    /// Minutes played this season; 0 when unparsable.
    pub minutes: u32,
    pub transfer: Option<String>,
    pub transfer_url: Option<String>,
    pub profile: ProfileAttributes,
    pub club: String,
    pub club_url: String,
}
