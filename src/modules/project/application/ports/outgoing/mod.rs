pub mod project_gateway;

pub use project_gateway::ProjectGateway;
