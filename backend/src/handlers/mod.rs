pub mod graph;
pub mod health;
pub mod sales;
pub mod save;
pub mod search;
