pub mod applications;
pub mod placeholder;
