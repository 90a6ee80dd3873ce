pub mod gateway;
pub mod render;

pub use gateway::HttpGateway;
