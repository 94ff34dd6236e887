/// Employee entity and identifier
pub mod employee;

/// Repository interfaces
pub mod repository;
