pub mod decode;
pub mod level;
pub mod signal;
pub mod window;
