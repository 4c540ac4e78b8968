// Assessment protocol domain
pub mod fitness;

// Repository traits
pub mod repositories;

// Domain-specific error types
pub mod errors;
