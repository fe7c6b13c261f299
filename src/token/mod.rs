pub mod claims;
pub mod duration;
pub mod jwt;
