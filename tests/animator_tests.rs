use std::f32::consts::PI;

use glam::Vec3;
use scene_animator::animator::{Animator, SceneConfig};
use scene_animator::body::{compute_transform, Motion, OrbitingBody};
use scene_animator::clock::SpeedLimits;
use scene_animator::scenes::create_solar_scene;

const TOLERANCE: f32 = 1e-3;

fn assert_close(a: Vec3, b: Vec3, context: &str) {
    assert!(
        (a - b).length() < TOLERANCE,
        "{context}: {a:?} != {b:?}"
    );
}

fn single_body_scene(body: OrbitingBody) -> SceneConfig {
    SceneConfig::new(vec![body], SpeedLimits::signed())
}

#[test]
fn transform_is_deterministic() {
    let body = OrbitingBody::new("p", 7.0, 0.3)
        .bobbing(0.15, 0.3)
        .spinning(Motion::Linear(0.8), Motion::Linear(1.2), Motion::None);

    let a = compute_transform(&body, 12.345, Vec3::new(1.0, 2.0, 3.0));
    let b = compute_transform(&body, 12.345, Vec3::new(1.0, 2.0, 3.0));

    assert_eq!(a, b, "same inputs must produce identical samples");
}

#[test]
fn orbit_positions_follow_the_parametric_circle() {
    // orbit_radius=5, orbit_speed=0.5: t=0 => (5,.,0); t=pi => (0,.,5)
    let scene = single_body_scene(OrbitingBody::new("drelon", 5.0, 0.5));
    let mut animator = Animator::new(scene).expect("valid scene");

    let at_zero = animator.sample("drelon").expect("registered body").position;
    assert!((at_zero.x - 5.0).abs() < TOLERANCE, "x at t=0, got {at_zero:?}");
    assert!(at_zero.z.abs() < TOLERANCE, "z at t=0, got {at_zero:?}");

    animator.tick(PI); // speed 1.0, so t advances to pi
    let at_pi = animator.sample("drelon").expect("registered body").position;
    assert!(at_pi.x.abs() < TOLERANCE, "x at t=pi, got {at_pi:?}");
    assert!((at_pi.z - 5.0).abs() < TOLERANCE, "z at t=pi, got {at_pi:?}");
}

#[test]
fn moon_orbits_parents_current_tick_position() {
    let planet = OrbitingBody::new("planet", 9.0, 0.25).bobbing(0.1, 0.2);
    let moon = OrbitingBody::new("moon", 1.4, 1.3)
        .around("planet")
        .bobbing(0.39, 0.3);
    // Child listed first: ordering must come from the parent relation,
    // not from declaration order
    let scene = SceneConfig::new(vec![moon.clone(), planet.clone()], SpeedLimits::signed());
    let mut animator = Animator::new(scene).expect("valid scene");

    animator.tick(2.375);
    let t = animator.clock().elapsed();

    let planet_pos = animator.sample("planet").expect("planet").position;
    let expected = compute_transform(&moon, t, planet_pos);

    assert_eq!(
        animator.sample("moon").expect("moon").position,
        expected.position,
        "moon must be evaluated against the planet's same-tick position"
    );
    assert_close(
        planet_pos,
        compute_transform(&planet, t, Vec3::ZERO).position,
        "planet evaluated at origin",
    );
}

#[test]
fn paused_animator_holds_every_sample() {
    let mut animator = Animator::new(create_solar_scene()).expect("valid scene");
    animator.tick(1.0);
    animator.toggle_pause();

    let frozen = animator.samples().to_vec();
    animator.tick(0.5);
    animator.tick(5.0);

    assert_eq!(animator.samples(), frozen.as_slice());
    assert_eq!(animator.clock().elapsed(), 1.0);
}

#[test]
fn samples_are_a_pure_function_of_time() {
    // Two animators reaching the same t along different tick paths agree
    let mut a = Animator::new(create_solar_scene()).expect("valid scene");
    let mut b = Animator::new(create_solar_scene()).expect("valid scene");

    a.tick(3.0);
    for _ in 0..300 {
        b.tick(0.01);
    }

    assert!((a.clock().elapsed() - b.clock().elapsed()).abs() < TOLERANCE);
    for (left, right) in a.samples().iter().zip(b.samples()) {
        assert_close(left.position, right.position, "positions drift-free");
        assert_close(left.rotation, right.rotation, "rotations drift-free");
    }
}

#[test]
fn reset_rewinds_to_initial_samples() {
    let mut animator = Animator::new(create_solar_scene()).expect("valid scene");
    let initial = animator.samples().to_vec();

    animator.tick(4.2);
    assert_ne!(animator.samples(), initial.as_slice());

    animator.reset();
    assert_eq!(animator.samples(), initial.as_slice());
}

#[test]
fn speed_commands_clamp_at_limits() {
    let mut animator = Animator::new(create_solar_scene()).expect("valid scene");

    for _ in 0..50 {
        animator.speed_up();
    }
    assert_eq!(animator.clock().speed(), 5.0);

    animator.set_speed(-100.0);
    assert_eq!(animator.clock().speed(), -5.0);
}

#[test]
fn visibility_flags_do_not_touch_the_math() {
    let mut animator = Animator::new(create_solar_scene()).expect("valid scene");
    animator.tick(1.0);
    let samples = animator.samples().to_vec();

    animator.toggle_labels();
    animator.toggle_trails();
    assert!(!animator.labels_visible());
    assert!(!animator.trails_visible());
    assert_eq!(animator.samples(), samples.as_slice());
}

#[test]
fn duplicate_ids_are_rejected() {
    let scene = SceneConfig::new(
        vec![
            OrbitingBody::new("twin", 1.0, 1.0),
            OrbitingBody::new("twin", 2.0, 1.0),
        ],
        SpeedLimits::signed(),
    );
    let err = Animator::new(scene).expect_err("duplicate id must fail");
    assert!(err.to_string().contains("twin"), "got: {err}");
}

#[test]
fn unknown_parent_is_rejected() {
    let scene = single_body_scene(OrbitingBody::new("moon", 1.0, 1.0).around("ghost"));
    let err = Animator::new(scene).expect_err("unknown parent must fail");
    assert!(err.to_string().contains("ghost"), "got: {err}");
}

#[test]
fn parent_cycle_is_rejected() {
    let scene = SceneConfig::new(
        vec![
            OrbitingBody::new("a", 1.0, 1.0).around("b"),
            OrbitingBody::new("b", 1.0, 1.0).around("a"),
        ],
        SpeedLimits::signed(),
    );
    let err = Animator::new(scene).expect_err("cycle must fail");
    assert!(err.to_string().contains("cycle"), "got: {err}");
}

#[test]
fn scene_config_round_trips_through_json() {
    let scene = create_solar_scene();
    let json = serde_json::to_string(&scene).expect("serialize");
    let restored: SceneConfig = serde_json::from_str(&json).expect("deserialize");

    let mut a = Animator::new(scene).expect("valid scene");
    let mut b = Animator::new(restored).expect("valid restored scene");
    a.tick(1.5);
    b.tick(1.5);
    assert_eq!(a.samples(), b.samples());
}
