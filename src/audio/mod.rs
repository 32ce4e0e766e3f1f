pub mod buffer;
pub mod concat;
pub mod resample;
pub mod wav;
