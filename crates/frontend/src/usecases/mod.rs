pub mod u501_amount_search;
