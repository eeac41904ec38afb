use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Profile {
    name: Option<String>,
    description: Option<String>,
    logo: Option<String>,
    industry: Option<String>,
    market_cap: Option<Decimal>,
    website: Option<String>,
    country: Option<String>,
    exchange: Option<String>,
}
