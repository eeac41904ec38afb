use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Quote {
    symbol: String,
    price: Decimal,
    change: Decimal,
    change_percent: Decimal,
    high: Decimal,
    low: Decimal,
    open: Decimal,
    previous_close: Decimal,
}
