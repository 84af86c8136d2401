//! Service layer: business logic coordination

pub mod gateway;

pub use gateway::ChatGateway;
