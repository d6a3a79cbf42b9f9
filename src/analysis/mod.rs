pub mod ranking;
pub mod speed;

pub use ranking::{delivery_minutes, hero_minutes, parse_price, rank, winner};
pub use speed::SpeedBand;
