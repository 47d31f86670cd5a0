mod color;

pub use color::{lerp_rgb, rgb_hex};
