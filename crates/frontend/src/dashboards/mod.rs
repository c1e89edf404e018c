pub mod d400_market_stats;
