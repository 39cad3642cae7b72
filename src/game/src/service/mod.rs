pub mod game_state;
pub mod game_thread;
pub mod resolver;
