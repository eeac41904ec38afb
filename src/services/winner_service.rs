use chrono::{Duration, Utc};
use futures::future::join_all;
use tracing::{info, warn};

use crate::{
    api::FinnhubApi,
    config::Config,
    error::ResolveError,
    models::{DailyWinner, NewsItem, PriceBar, Profile, Quote},
};

pub struct WinnerService {
    api: FinnhubApi,
    config: Config,
}

impl WinnerService {
    pub fn new(config: Config) -> Self {
        Self {
            api: FinnhubApi::new(&config),
            config,
        }
    }

    pub async fn resolve(&self, symbols: &[String]) -> Result<DailyWinner, ResolveError> {
        info!("Fetching quotes for {} symbols", symbols.len());

        let outcomes = join_all(symbols.iter().map(|symbol| self.fetch_quote(symbol))).await;

        let mut quotes: Vec<Quote> = outcomes.into_iter().flatten().collect();
        if quotes.is_empty() {
            return Err(ResolveError::NoData);
        }

        // Stable sort: join_all yields outcomes in universe order, so an
        // exact percentage tie resolves to the earlier configured symbol.
        quotes.sort_by(|a, b| b.change_percent().cmp(a.change_percent()));
        let winner = quotes.remove(0);

        info!(
            symbol = %winner.symbol(),
            change_percent = %winner.change_percent(),
            "Winner resolved"
        );

        let (profile, news, history) = tokio::join!(
            self.fetch_profile(winner.symbol()),
            self.fetch_news(winner.symbol()),
            self.fetch_history(winner.symbol()),
        );

        Ok(DailyWinner::new(winner, profile, news, history))
    }

    async fn fetch_quote(&self, symbol: &str) -> Option<Quote> {
        match self.api.get_quote(symbol).await {
            Ok(dto) => {
                let quote = dto.to_quote(symbol);
                if quote.is_none() {
                    warn!(symbol, "Quote missing price or percent change, skipping");
                }
                quote
            }
            Err(err) => {
                warn!(symbol, error = %err, "Quote fetch failed, skipping");
                None
            }
        }
    }

    async fn fetch_profile(&self, symbol: &str) -> Profile {
        match self.api.get_profile(symbol).await {
            Ok(dto) => dto.to_profile(),
            Err(err) => {
                warn!(symbol, error = %err, "Profile fetch failed");
                Profile::default()
            }
        }
    }

    async fn fetch_news(&self, symbol: &str) -> Vec<NewsItem> {
        let to = Utc::now();
        let from = to - Duration::days(*self.config.news_lookback_days());

        let result = self
            .api
            .get_company_news(
                symbol,
                &from.format("%Y-%m-%d").to_string(),
                &to.format("%Y-%m-%d").to_string(),
            )
            .await;

        match result {
            Ok(items) => items
                .into_iter()
                .take(*self.config.news_cap())
                .map(|dto| dto.to_news_item())
                .collect(),
            Err(err) => {
                warn!(symbol, error = %err, "News fetch failed");
                Vec::new()
            }
        }
    }

    async fn fetch_history(&self, symbol: &str) -> Vec<PriceBar> {
        let to = Utc::now();
        let from = to - Duration::days(*self.config.history_lookback_days());

        match self
            .api
            .get_candles(symbol, from.timestamp(), to.timestamp())
            .await
        {
            Ok(dto) => dto.to_price_bars(),
            Err(err) => {
                warn!(symbol, error = %err, "History fetch failed");
                Vec::new()
            }
        }
    }
}
