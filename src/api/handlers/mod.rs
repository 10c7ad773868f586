pub mod available;
pub mod file;
pub mod health;
pub mod meetup;
pub mod session;
pub mod subscription;
pub mod user;
