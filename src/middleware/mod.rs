pub mod access;
pub mod auth;

pub use auth::SessionUser;
