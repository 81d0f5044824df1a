pub mod auth;
pub mod hotels;
pub mod notifications;
pub mod offers;
pub mod packages;
pub mod users;
