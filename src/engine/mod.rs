// Engine modules: frame timing, input

pub mod game_loop;
pub mod input;
