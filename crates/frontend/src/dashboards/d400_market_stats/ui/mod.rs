pub mod banner;

pub use banner::StatsBanner;
