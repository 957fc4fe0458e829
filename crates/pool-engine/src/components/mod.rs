pub mod ball;
pub mod cue;
pub mod rack;
pub mod table;
