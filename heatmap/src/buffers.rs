mod vertex_buffer;

pub use self::vertex_buffer::*;
