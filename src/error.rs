//! Error types for the advisor engine.

use thiserror::Error;

use crate::models::ItemId;

/// Result type alias using [`AdvisorError`].
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Every failure the engine can surface to its caller.
///
/// All of these are synchronous and local. Nothing here is transient, so
/// callers should never retry; they translate the error into a response.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// A building, research or ship record needed for a computation is
    /// absent from the supplied snapshot.
    #[error("missing prerequisite: {item} has no record on {scope}")]
    MissingPrerequisite {
        /// The item whose record is missing.
        item: ItemId,
        /// Where it was looked up (a planet name or "account").
        scope: String,
    },

    /// A trade ratio component is zero or negative.
    #[error("degenerate trade ratio: {resource} rate must be positive")]
    DegenerateRatio {
        /// The offending component ("metal", "crystal" or "deuterium").
        resource: &'static str,
    },

    /// A growth factor that makes the geometric series singular.
    #[error("unsupported growth factor: {0}")]
    UnsupportedGrowthFactor(f64),

    /// A catalog row uses a growth-based rule without a growth value.
    #[error("catalog row for {item} needs a growth factor")]
    MissingGrowthFactor {
        /// The item defined by the row.
        item: ItemId,
    },

    /// The catalog has no definition for an item.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// A request names a planet the snapshot does not contain.
    #[error("unknown planet: {0}")]
    UnknownPlanet(String),

    /// Failed to read catalog CSV data.
    #[error("failed to read catalog data: {0}")]
    Catalog(#[from] csv::Error),

    /// Failed to read a file from disk.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or write a JSON snapshot.
    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
