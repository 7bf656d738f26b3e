pub mod round;
pub mod session;

pub use round::GameState;
pub use session::GameSession;
