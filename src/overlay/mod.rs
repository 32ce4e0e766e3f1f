pub mod model;
pub mod style;
