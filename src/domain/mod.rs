pub mod hotel;
pub mod notification;
pub mod offer;
pub mod package;
pub mod user;
