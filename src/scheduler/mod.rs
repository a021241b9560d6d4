//! Background jobs.

pub mod session_expiry;
