mod session_rng;

pub mod flappy;
pub mod snake;

pub use session_rng::SessionRng;
