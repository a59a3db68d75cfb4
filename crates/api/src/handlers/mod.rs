pub mod health;
pub mod hotels;
pub mod index;
