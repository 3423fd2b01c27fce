pub mod composite;
pub mod pipeline;
pub mod resize;
