//! Canada Life annuity rate banding.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::tables::ANNUITY_BAND_TABLE;

const FIVE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Returns the banded annuity rate for a life override rate.
///
/// The life rate must be within `[0, 200]`. It is first rounded down to the
/// nearest multiple of 5 (the sheet bands in 5-point increments), then the
/// band table is scanned for the greatest threshold at or below the rounded
/// rate. The table's 0 entry guarantees the scan matches for any in-domain
/// rate.
///
/// # Errors
///
/// Returns [`EngineError::RateOutOfRange`] when the rate is outside
/// `[0, 200]`.
///
/// # Example
///
/// ```
/// use override_engine::banding::annuity_rate;
/// use rust_decimal::Decimal;
///
/// // 62.5 rounds down to 60, which bands to 15.00.
/// let rate = annuity_rate(Decimal::new(625, 1)).unwrap();
/// assert_eq!(rate, Decimal::new(1500, 2));
/// ```
pub fn annuity_rate(life_rate: Decimal) -> EngineResult<Decimal> {
    if life_rate < Decimal::ZERO || life_rate > Decimal::from(200u32) {
        return Err(EngineError::RateOutOfRange {
            rate: life_rate,
            min: 0,
            max: 200,
        });
    }

    // Round down to the nearest 5% band boundary.
    let rounded = (life_rate / FIVE).floor() * FIVE;
    let key = rounded.to_u32().ok_or(EngineError::RateOutOfRange {
        rate: life_rate,
        min: 0,
        max: 200,
    })?;

    ANNUITY_BAND_TABLE
        .iter()
        .rev()
        .find(|(threshold, _)| *threshold <= key)
        .map(|(_, rate)| *rate)
        .ok_or(EngineError::RateTableGap {
            table: "annuity",
            key,
        })
}
