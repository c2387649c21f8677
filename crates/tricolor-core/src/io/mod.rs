pub mod image_io;
pub mod loader;
pub mod sink;

pub use image_io::{load_gray, save_gray, save_rgb};
pub use loader::load_channel_set;
pub use sink::DirectorySink;
