use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// Every symbol in the universe came back unavailable.
    #[error("no data available")]
    NoData,
}
