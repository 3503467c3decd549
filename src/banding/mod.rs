//! Rate banding for carrier override rate sheets.
//!
//! Each published sheet uses one of two lookup strategies and they must not
//! be unified: the annuity sheet is banded in 5-point increments and matched
//! by "greatest threshold <= input" (floor match), while the equity and
//! money-product sheets are dense per-integer-point tables matched by exact
//! key after truncation. Truncation is a required precondition for the dense
//! tables, not an implementation detail.

mod annuity;
mod equity;
mod mga;
mod money_products;

pub use annuity::annuity_rate;
pub use equity::equity_rate;
pub use mga::{MgaCarrier, mga_code};
pub use money_products::money_product_rates;
