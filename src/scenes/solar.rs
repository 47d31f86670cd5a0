use chrono::NaiveDate;

use crate::animator::SceneConfig;
use crate::body::Motion::{Linear, None as Still, Sway};
use crate::body::OrbitingBody;
use crate::clock::SpeedLimits;
use crate::overlay::Calendar;

/// The Zynthar system: five planets, two moons and a stray artifact
/// orbiting a central star. Every body is one row in the table; the
/// animator handles the rest.
pub fn create_solar_scene() -> SceneConfig {
    let bodies = vec![
        OrbitingBody::fixed("star").spinning(Still, Linear(0.1), Still),
        OrbitingBody::fixed("star-glow").spinning(Still, Linear(-0.05), Linear(0.02)),
        OrbitingBody::new("drelon", 5.0, 0.5)
            .bobbing(0.2, 0.5)
            .spinning(Linear(0.3), Linear(1.2), Still),
        OrbitingBody::new("vorka", 7.0, 0.3)
            .bobbing(0.15, 0.3)
            .spinning(Still, Linear(0.8), Linear(0.2)),
        OrbitingBody::new("minar", 1.2, 1.1)
            .around("vorka")
            .bobbing(0.55, 0.2)
            .spinning(Still, Linear(2.0), Still),
        OrbitingBody::new("klynt", 9.0, 0.25)
            .bobbing(0.1, 0.2)
            .spinning(
                Sway {
                    frequency: 0.5,
                    amplitude: 0.3,
                    phase: 0.0,
                },
                Linear(1.5),
                Still,
            ),
        OrbitingBody::new("poltu", 1.4, 1.3)
            .around("klynt")
            .bobbing(0.39, 0.3)
            .spinning(Linear(0.5), Linear(1.8), Still),
        OrbitingBody::new("xoron", 11.0, 0.4)
            .bobbing(0.08, 0.4)
            .spinning(Linear(0.8), Linear(2.0), Linear(0.4)),
        OrbitingBody::new("beldar", 13.0, 0.2)
            .bobbing(0.05, 0.1)
            .spinning(Still, Linear(0.6), Linear(0.1)),
        OrbitingBody::new("artifact", 16.0, 0.22)
            .bobbing(0.03, 1.0)
            .spinning(Linear(0.3), Linear(0.5), Linear(0.7)),
    ];

    SceneConfig::new(bodies, SpeedLimits::signed())
}

/// Date display for the solar scene: ten simulation seconds per day,
/// counted from the system's in-fiction epoch.
pub fn solar_calendar() -> Calendar {
    let epoch = NaiveDate::from_ymd_opt(4057, 4, 27).expect("valid epoch");
    Calendar::new(epoch, 10.0)
}
