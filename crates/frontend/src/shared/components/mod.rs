pub mod charts;
pub mod page_frame;
pub mod stat_card;
pub mod tab_strip;
pub mod ui;
