use chrono::{TimeZone, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{NewsItem, PriceBar, Profile, Quote};

#[derive(Debug, Deserialize, Getters, new)]
pub struct FinnhubQuoteDto {
    #[serde(rename = "c")]
    price: Option<Decimal>,
    #[serde(rename = "d")]
    change: Option<Decimal>,
    #[serde(rename = "dp")]
    change_percent: Option<Decimal>,
    #[serde(rename = "h")]
    high: Option<Decimal>,
    #[serde(rename = "l")]
    low: Option<Decimal>,
    #[serde(rename = "o")]
    open: Option<Decimal>,
    #[serde(rename = "pc")]
    previous_close: Option<Decimal>,
}

impl FinnhubQuoteDto {
    // A quote without a price or percent change cannot be ranked.
    pub fn to_quote(&self, symbol: &str) -> Option<Quote> {
        let price = self.price?;
        let change_percent = self.change_percent?;

        Some(Quote::new(
            symbol.to_string(),
            price,
            self.change.unwrap_or_default(),
            change_percent,
            self.high.unwrap_or_default(),
            self.low.unwrap_or_default(),
            self.open.unwrap_or_default(),
            self.previous_close.unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct FinnhubProfileDto {
    name: Option<String>,
    description: Option<String>,
    logo: Option<String>,
    #[serde(rename = "finnhubIndustry")]
    industry: Option<String>,
    #[serde(rename = "marketCapitalization")]
    market_cap: Option<Decimal>,
    #[serde(rename = "weburl")]
    website: Option<String>,
    country: Option<String>,
    exchange: Option<String>,
}

impl FinnhubProfileDto {
    pub fn to_profile(self) -> Profile {
        Profile::new(
            self.name,
            self.description,
            self.logo,
            self.industry,
            self.market_cap,
            self.website,
            self.country,
            self.exchange,
        )
    }
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct FinnhubNewsDto {
    headline: Option<String>,
    summary: Option<String>,
    url: Option<String>,
    source: Option<String>,
}

impl FinnhubNewsDto {
    pub fn to_news_item(self) -> NewsItem {
        NewsItem::new(
            self.headline.unwrap_or_default(),
            self.summary.unwrap_or_default(),
            self.url.unwrap_or_default(),
            self.source.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct FinnhubCandleDto {
    #[serde(rename = "s")]
    status: String,
    #[serde(rename = "t", default)]
    timestamps: Vec<i64>,
    #[serde(rename = "o", default)]
    opens: Vec<Decimal>,
    #[serde(rename = "h", default)]
    highs: Vec<Decimal>,
    #[serde(rename = "l", default)]
    lows: Vec<Decimal>,
    #[serde(rename = "c", default)]
    closes: Vec<Decimal>,
    #[serde(rename = "v", default)]
    volumes: Vec<i64>,
}

impl FinnhubCandleDto {
    // Status "no_data" means the window held no trading days; that is an
    // empty series, not a failure.
    pub fn to_price_bars(&self) -> Vec<PriceBar> {
        if self.status != "ok" {
            return Vec::new();
        }

        let mut bars: Vec<PriceBar> = self
            .timestamps
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let date = Utc
                    .timestamp_opt(ts, 0)
                    .single()
                    .map(|dt| dt.format("%b %d").to_string())?;

                Some(PriceBar::new(
                    date,
                    ts,
                    *self.opens.get(i)?,
                    *self.highs.get(i)?,
                    *self.lows.get(i)?,
                    *self.closes.get(i)?,
                    *self.volumes.get(i)?,
                ))
            })
            .collect();

        bars.sort_by_key(|bar| *bar.timestamp());
        bars
    }
}
