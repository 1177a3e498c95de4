// src/graph/mod.rs

pub mod function_strategy;
pub mod renderer;
pub mod viewport;
pub mod window;

pub use function_strategy::{
    find_function, function_strategies, ArctanRatio, FunctionStrategy, ScaledSine,
};
pub use renderer::{GraphRenderer, Scene, Segment};
pub use viewport::{ScreenMapping, ScreenPoint, Viewport};
pub use window::GraphWindow;

// src/graph/mod.rs
