mod background;
mod component;
mod render;
mod state;
mod types;

pub use component::AlgoGraphCanvas;
pub use types::Command;
