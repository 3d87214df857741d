//! Entity Module

pub mod account;
pub mod user;
