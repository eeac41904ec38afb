pub mod finnhub;
pub mod finnhub_dto;
pub mod utils;

pub use finnhub::FinnhubApi;
