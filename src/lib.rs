pub mod animator;
pub mod body;
pub mod cli;
pub mod clock;
pub mod daynight;
pub mod math;
pub mod overlay;
pub mod scenes;

pub use animator::{Animator, SceneConfig};
pub use body::{compute_transform, Motion, OrbitingBody, TransformSample};
pub use clock::{SimClock, SpeedLimits};
pub use daynight::{DayNightConfig, DayNightCycle, DayNightState};
pub use scenes::{create_garden_scene, create_solar_scene, solar_calendar};
