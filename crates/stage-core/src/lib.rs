pub mod bounds;
pub mod catapult;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod flow;
pub mod frame;
pub mod geometry;
pub mod item;
pub mod mesh;
pub mod pointer;
pub mod scatter;
pub mod scheduler;
pub mod scroll;
pub mod stage;
pub mod tween;

pub use bounds::*;
pub use catapult::*;
pub use config::*;
pub use constants::*;
pub use easing::*;
pub use error::*;
pub use flow::*;
pub use frame::*;
pub use geometry::*;
pub use item::*;
pub use mesh::*;
pub use pointer::*;
pub use scheduler::*;
pub use scroll::*;
pub use stage::*;
pub use tween::*;
