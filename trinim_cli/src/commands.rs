pub mod console;
pub mod play;
