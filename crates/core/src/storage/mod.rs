pub mod repository;
pub mod slot;
