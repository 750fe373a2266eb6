pub mod domain;
pub mod enums;
pub mod feed;
