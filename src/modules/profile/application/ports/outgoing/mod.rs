pub mod profile_gateway;

pub use profile_gateway::ProfileGateway;
