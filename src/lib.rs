pub mod clubs;
pub mod dedupe;
pub mod error;
pub mod extract;
pub mod model;
pub mod net;
pub mod output;
pub mod profile;
pub mod roster;

pub use error::{Result, ScrapeError};
pub use model::{PlayerRecord, Positions, ProfileAttributes};
