pub mod aggregate;
pub mod goals;
pub mod plan;
pub mod series;
pub mod streak;
pub mod tips;
