pub mod codec;
pub mod constants;
pub mod controller;
pub mod error;
pub mod explorer;
pub mod frame;
pub mod gesture;
pub mod input;
pub mod messages;
pub mod palette;
pub mod persist;
pub mod state;
pub mod tween;

pub use controller::*;
pub use error::*;
pub use explorer::*;
pub use frame::*;
pub use gesture::*;
pub use input::*;
pub use messages::*;
pub use persist::*;
pub use state::*;
pub use tween::*;
