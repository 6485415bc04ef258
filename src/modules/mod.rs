pub mod applications;
pub mod auth;
pub mod discussions;
pub mod health;
pub mod research;
pub mod users;
