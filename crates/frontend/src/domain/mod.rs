pub mod a001_lot;
