// API Models

pub mod error;
pub mod response;
