//! Session layer: one mutable game per local play session, with sow
//! playback and move history.

mod playback;
#[allow(clippy::module_inception)]
mod session;

pub use playback::Playback;
pub use session::GameSession;
