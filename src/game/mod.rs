pub mod autoplay;
pub mod command;
pub mod logger;
pub mod session;
pub mod state;
pub use autoplay::{random_game, PlayedMove};
pub use command::Command;
pub use logger::GameLog;
pub use session::{ChessGame, Report};
pub use state::GameState;
