pub mod app_time;
pub mod motion;
