// API Routes

pub mod certificates;
pub mod health;
