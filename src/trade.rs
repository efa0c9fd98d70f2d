//! Metal-standard valuation of mixed resource vectors.
//!
//! Converts `(metal, crystal, deuterium)` into a single number of metal units
//! using the account's trade ratios, so upgrades paying in different resources
//! can be compared.

use crate::error::Result;
use crate::models::{ResourceVector, TradeRatio};

/// Values a resource vector in metal-standard equivalents (MSE).
///
/// `mse = metal + (t.metal / t.crystal) * crystal + (t.metal / t.deuterium) * deuterium`,
/// truncated toward zero. Energy is ignored.
///
/// # Errors
///
/// [`crate::error::AdvisorError::DegenerateRatio`] if a trade rate is zero.
///
/// # Example
///
/// ```
/// use oadvisor::models::{ResourceVector, TradeRatio};
/// use oadvisor::trade::to_mse;
///
/// let trade = TradeRatio::new(3.0, 2.0, 1.0).unwrap();
///
/// assert_eq!(to_mse(ResourceVector::new(100, 0, 0), &trade).unwrap(), 100);
/// assert_eq!(to_mse(ResourceVector::new(0, 100, 0), &trade).unwrap(), 150);
/// ```
pub fn to_mse(resources: ResourceVector, trade: &TradeRatio) -> Result<i64> {
    trade.validate()?;
    Ok(mse_unchecked(resources, trade))
}

/// Same as [`to_mse`] for a ratio that has already been validated.
pub(crate) fn mse_unchecked(resources: ResourceVector, trade: &TradeRatio) -> i64 {
    let mse = resources.metal as f64
        + trade.metal / trade.crystal * resources.crystal as f64
        + trade.metal / trade.deuterium * resources.deuterium as f64;
    mse as i64
}
