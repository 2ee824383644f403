//! Authentication building blocks: JWT handling and password hashing.

pub mod jwt;
pub mod password;
