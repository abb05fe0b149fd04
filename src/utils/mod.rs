pub mod form;
pub mod password;
pub mod session;
