pub mod analytics;
pub mod cart;
pub mod menu;
pub mod order;
pub mod review;
pub mod user;
