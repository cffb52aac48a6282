//! Gallery pages

mod mock_index;

pub use mock_index::{MockBlockTitle, MockIndex, MockLink};
