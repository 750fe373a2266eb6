pub mod components;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod live_feed;
pub mod number_format;
pub mod random;
