use derive_getters::Getters;

const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";

const DEFAULT_NEWS_LOOKBACK_DAYS: i64 = 7;
const DEFAULT_HISTORY_LOOKBACK_DAYS: i64 = 30;
const DEFAULT_NEWS_CAP: usize = 3;

#[derive(Clone, Debug, Getters)]
pub struct Config {
    api_key: String,
    base_url: String,
    news_lookback_days: i64,
    history_lookback_days: i64,
    news_cap: usize,
}

impl Config {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            news_lookback_days: DEFAULT_NEWS_LOOKBACK_DAYS,
            history_lookback_days: DEFAULT_HISTORY_LOOKBACK_DAYS,
            news_cap: DEFAULT_NEWS_CAP,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}
