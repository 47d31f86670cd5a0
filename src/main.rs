use anyhow::{bail, Context, Result};
use clap::Parser;

use scene_animator::animator::{Animator, SceneConfig};
use scene_animator::cli::Cli;
use scene_animator::overlay::speed_string;
use scene_animator::scenes::{create_garden_scene, create_solar_scene, solar_calendar};

/// Headless driver: the same per-frame loop a windowed host would run,
/// with the overlay printed instead of rendered. Useful for eyeballing a
/// scene configuration and for exercising the command surface end to end.
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config: SceneConfig = match &cli.scene_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading scene file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing scene file {}", path.display()))?
        }
        None => match cli.scene.as_str() {
            "solar" => create_solar_scene(),
            "garden" => create_garden_scene(),
            other => bail!("unknown scene '{other}', expected 'solar' or 'garden'"),
        },
    };
    log::info!(
        "scene '{}': {} bodies, day/night cycle: {}",
        cli.scene,
        config.bodies.len(),
        config.day_night.is_some()
    );

    let mut animator = Animator::new(config)?;
    if let Some(speed) = cli.speed {
        animator.set_speed(speed);
    }
    if !animator.clock().is_running() {
        // The garden scene ships stopped; the driver plays the start button
        animator.toggle_pause();
    }

    let calendar = solar_calendar();
    let delta = 1.0 / cli.fps;
    let per_second = cli.fps.round().max(1.0) as u32;

    for tick in 0..cli.ticks {
        animator.tick(delta);

        if tick % per_second == 0 {
            let t = animator.clock().elapsed();
            match animator.sky() {
                Some(sky) => println!(
                    "[{t:8.2}s] {:<9} phase {:.3}  sun {:.2}  ambient {:.2}  sky {:.2?}",
                    sky.band, sky.phase, sky.sun_intensity, sky.ambient_intensity, sky.sky_color
                ),
                None => println!(
                    "[{t:8.2}s] {}  |  {}",
                    calendar.date_string(t),
                    speed_string(animator.clock())
                ),
            }
        }
    }

    for (body, sample) in animator.bodies().iter().zip(animator.samples()) {
        log::debug!(
            "{:<16} pos {:>7.2?}  rot {:>6.2?}",
            body.id,
            sample.position,
            sample.rotation
        );
    }

    Ok(())
}
