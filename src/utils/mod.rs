pub mod jwt;
pub mod payload;
pub mod security;
