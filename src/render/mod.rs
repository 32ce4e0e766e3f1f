pub mod cleanup;
pub mod compositor;
pub mod request;
