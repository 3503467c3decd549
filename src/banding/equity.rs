//! Canada Life equity rate lookup.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::tables::EQUITY_RATE_TABLE;

/// Returns the equity rate for a money override rate.
///
/// The money rate must be within `[0, 100]`. Rates below 70 map directly to
/// `0.00` (the sheet has no entries below its minimum); otherwise the rate
/// is truncated to an integer and looked up by exact key in the dense 70-100
/// table. Truncation is a required precondition of the exact lookup: the
/// table is dense over integers, so a gap can only be hit if truncation is
/// skipped.
///
/// # Errors
///
/// Returns [`EngineError::RateOutOfRange`] when the rate is outside
/// `[0, 100]`.
///
/// # Example
///
/// ```
/// use override_engine::banding::equity_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(equity_rate(Decimal::from(80)).unwrap(), Decimal::new(1429, 2));
/// assert_eq!(equity_rate(Decimal::from(50)).unwrap(), Decimal::new(0, 2));
/// ```
pub fn equity_rate(money_rate: Decimal) -> EngineResult<Decimal> {
    if money_rate < Decimal::ZERO || money_rate > Decimal::from(100u32) {
        return Err(EngineError::RateOutOfRange {
            rate: money_rate,
            min: 0,
            max: 100,
        });
    }
    if money_rate < Decimal::from(70u32) {
        return Ok(Decimal::new(0, 2));
    }

    let key = money_rate.trunc().to_u32().ok_or(EngineError::RateOutOfRange {
        rate: money_rate,
        min: 0,
        max: 100,
    })?;

    EQUITY_RATE_TABLE
        .iter()
        .find(|(rate, _)| *rate == key)
        .map(|(_, value)| *value)
        .ok_or(EngineError::RateTableGap {
            table: "equity",
            key,
        })
}
