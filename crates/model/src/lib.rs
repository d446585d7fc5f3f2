pub mod decimal;
pub mod individual;
pub mod locale;
pub mod registration;
pub mod session;
pub mod statistics;
pub mod user;
