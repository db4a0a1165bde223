pub mod candidate;
pub mod notice;
pub mod upload;
