//! Bounded live feed: a capped, ordered record buffer that is appended on a
//! timer tick and projected through composable filter criteria.
//!
//! The pieces are deliberately separate: [`buffer::FeedBuffer`] enforces the
//! capacity invariant, [`criteria`] turns a snapshot into a visible view
//! without touching the buffer, [`controller::Feed`] owns the run state, and
//! [`schedule`] abstracts the timer so hosts and tests can drive ticks
//! however they like.

pub mod buffer;
pub mod controller;
pub mod criteria;
pub mod schedule;
pub mod source;

pub use buffer::{FeedBuffer, FeedOrder};
pub use controller::{Feed, FeedConfig, FeedConfigError};
pub use criteria::{apply, text_match, Criteria, DimensionFilter};
pub use schedule::{ManualScheduler, TickHandle, TickScheduler};
pub use source::RecordSource;
