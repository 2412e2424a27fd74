mod doubling;
mod exact;
mod geometric;
mod golden;
mod linear;
mod no_growth;
mod strategy;

pub use doubling::Doubling;
pub use exact::Exact;
pub use geometric::Geometric;
pub use golden::Golden;
pub use linear::Linear;
pub use no_growth::NoGrowth;
pub use strategy::GrowthStrategy;
