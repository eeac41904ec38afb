use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

use super::{NewsItem, PriceBar, Profile, Quote};

#[derive(Clone, Debug, Getters, Serialize, new)]
pub struct DailyWinner {
    #[serde(flatten)]
    quote: Quote,
    #[serde(flatten)]
    profile: Profile,
    news: Vec<NewsItem>,
    history: Vec<PriceBar>,
}

impl DailyWinner {
    pub fn symbol(&self) -> &str {
        self.quote.symbol()
    }
}
