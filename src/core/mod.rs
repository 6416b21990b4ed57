// Pure simulation core: no platform types in here. The wasm frontend and the
// host-side tests both consume these modules directly.

pub mod activation;
pub mod audio;
pub mod constants;
pub mod recovery;
pub mod session;
pub mod sim;
pub mod spots;
pub mod visuals;
pub mod world;

pub use activation::*;
pub use audio::*;
pub use recovery::*;
pub use session::*;
pub use sim::*;
pub use spots::*;
pub use visuals::*;
pub use world::*;
