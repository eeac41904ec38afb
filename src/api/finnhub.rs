use anyhow::{Error, Result};
use reqwest::Client;

use super::{
    finnhub_dto::{FinnhubCandleDto, FinnhubNewsDto, FinnhubProfileDto, FinnhubQuoteDto},
    utils::{make_request, parse_response_array, parse_response_object},
};
use crate::config::Config;

#[derive(Clone, Debug)]
pub struct FinnhubApi {
    client: Client,
    base_url: String,
    token: String,
}

impl FinnhubApi {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url().clone(),
            token: config.api_key().clone(),
        }
    }

    pub async fn get_quote(&self, symbol: &str) -> Result<FinnhubQuoteDto> {
        let params = format!("symbol={}", symbol);
        let res = make_request(&self.client, &self.base_url, "quote", &params, &self.token).await?;

        if let Some(error) = res.get("error").and_then(|e| e.as_str()) {
            return Err(Error::msg(format!(
                "Provider error for {}: {}",
                symbol, error
            )));
        }

        parse_response_object::<FinnhubQuoteDto>(
            res,
            &format!("Failed to parse quote for {}", symbol),
        )
    }

    pub async fn get_profile(&self, symbol: &str) -> Result<FinnhubProfileDto> {
        let params = format!("symbol={}", symbol);
        let res = make_request(
            &self.client,
            &self.base_url,
            "stock/profile2",
            &params,
            &self.token,
        )
        .await?;

        parse_response_object::<FinnhubProfileDto>(
            res,
            &format!("Failed to parse profile for {}", symbol),
        )
    }

    pub async fn get_company_news(
        &self,
        symbol: &str,
        from: &str,
        to: &str,
    ) -> Result<Vec<FinnhubNewsDto>> {
        let params = format!("symbol={}&from={}&to={}", symbol, from, to);
        let res = make_request(
            &self.client,
            &self.base_url,
            "company-news",
            &params,
            &self.token,
        )
        .await?;

        parse_response_array::<FinnhubNewsDto>(res, &format!("Failed to parse news for {}", symbol))
    }

    pub async fn get_candles(
        &self,
        symbol: &str,
        from_ts: i64,
        to_ts: i64,
    ) -> Result<FinnhubCandleDto> {
        let params = format!(
            "symbol={}&resolution=D&from={}&to={}",
            symbol, from_ts, to_ts
        );
        let res = make_request(
            &self.client,
            &self.base_url,
            "stock/candle",
            &params,
            &self.token,
        )
        .await?;

        parse_response_object::<FinnhubCandleDto>(
            res,
            &format!("Failed to parse candles for {}", symbol),
        )
    }
}
