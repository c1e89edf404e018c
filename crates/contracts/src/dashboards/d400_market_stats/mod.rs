pub mod dto;

pub use dto::{CategoryCount, StatsSummary};
