pub mod winner_service;

pub use winner_service::WinnerService;
