pub mod image_gateway;

pub use image_gateway::ImageGateway;
