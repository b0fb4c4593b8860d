pub mod health;
pub mod trip;
