mod garden;
mod solar;

pub use garden::create_garden_scene;
pub use solar::{create_solar_scene, solar_calendar};
