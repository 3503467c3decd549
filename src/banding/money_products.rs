//! IA money-product rate pair lookup.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::tables::MONEY_PRODUCT_TABLE;

/// Returns the IA money-product (personal, corporate) rate codes for a
/// money override rate.
///
/// The money rate must be within `[0, 100]`. Rates below 72 return the
/// sentinel `("00", "00")`; otherwise the rate is truncated to an integer
/// and looked up by exact key in the dense 72-100 table. As with
/// [`equity_rate`](crate::banding::equity_rate), truncation is a required
/// precondition of the exact lookup.
///
/// # Errors
///
/// Returns [`EngineError::RateOutOfRange`] when the rate is outside
/// `[0, 100]`.
pub fn money_product_rates(money_rate: Decimal) -> EngineResult<(&'static str, &'static str)> {
    if money_rate < Decimal::ZERO || money_rate > Decimal::from(100u32) {
        return Err(EngineError::RateOutOfRange {
            rate: money_rate,
            min: 0,
            max: 100,
        });
    }
    if money_rate < Decimal::from(72u32) {
        return Ok(("00", "00"));
    }

    let key = money_rate.trunc().to_u32().ok_or(EngineError::RateOutOfRange {
        rate: money_rate,
        min: 0,
        max: 100,
    })?;

    MONEY_PRODUCT_TABLE
        .iter()
        .find(|(rate, _)| *rate == key)
        .map(|(_, codes)| *codes)
        .ok_or(EngineError::RateTableGap {
            table: "money products",
            key,
        })
}
