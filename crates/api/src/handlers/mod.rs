pub mod dishes;
pub mod health;
