use crate::animator::SceneConfig;
use crate::body::Motion::{Linear, None as Still, Sway};
use crate::body::OrbitingBody;
use crate::clock::SpeedLimits;
use crate::daynight::DayNightConfig;

/// A tree that sways in place around its own z axis
fn tree(id: &str, frequency: f32, amplitude: f32, phase: f32) -> OrbitingBody {
    OrbitingBody::fixed(id).spinning(
        Still,
        Still,
        Sway {
            frequency,
            amplitude,
            phase,
        },
    )
}

/// The garden: a static scene where everything animates in place - trees
/// and flowers sway, the pond ripples - under a running day/night cycle.
/// Time starts stopped; the controls start it and step the multiplier.
pub fn create_garden_scene() -> SceneConfig {
    let mut bodies = vec![
        tree("tree-1", 2.0, 0.05, 0.0),
        tree("tree-2", 1.5, 0.03, 1.0),
        tree("tree-3", 1.8, 0.04, 2.0),
        tree("tree-4", 1.3, 0.035, 3.0),
        tree("tree-5", 2.2, 0.045, 4.0),
        tree("tree-6", 1.7, 0.025, 5.0),
        tree("tree-7", 1.9, 0.04, 6.0),
        // Pond surface: a barely-visible ripple, no orbit
        OrbitingBody::fixed("pond-water").bobbing(0.4, 0.01).spinning(
            Still,
            Still,
            Sway {
                frequency: 0.24,
                amplitude: 0.005,
                phase: 0.0,
            },
        ),
        OrbitingBody::fixed("fountain-stream")
            .bobbing(1.0, 0.01)
            .spinning(Still, Linear(0.1), Still),
        OrbitingBody::fixed("fountain-splash").spinning(Still, Linear(0.35), Still),
    ];
    for i in 0..6 {
        bodies.push(OrbitingBody::fixed(&format!("flower-{i}")).spinning(
            Still,
            Still,
            Sway {
                frequency: 2.0,
                amplitude: 0.1,
                phase: i as f32 * 0.5,
            },
        ));
    }

    let mut config = SceneConfig::new(bodies, SpeedLimits::discrete());
    config.start_running = false;
    config.day_night = Some(DayNightConfig::garden());
    config
}
