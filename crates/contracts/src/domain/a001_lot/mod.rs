pub mod aggregate;
pub mod request;
pub mod response;

pub use aggregate::{Lot, LotStats, HOT_DEAL_MARGIN_PERCENT, UNCATEGORIZED};
