pub mod builder;
pub mod effects;
pub mod model;
