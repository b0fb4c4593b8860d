pub mod budget;
pub mod candidate;
pub mod travel;
pub mod trip;
