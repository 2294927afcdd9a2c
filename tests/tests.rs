use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use physlab::simulation::analytic;
use physlab::{
    axis_profile, clamp_restitution, field_at, place_sources, reflect_walls, resolve_pair,
    restitution_1d, sample_grid, step_pair, summarize, summarize_query,
};
use physlab::{Arena, Body, Kinematics, ManualScheduler, NVec2, DT};
use physlab::{CircularParams, CollisionParams, FieldParams, PendulumParams, ProjectileParams, SpringParams};
use physlab::{ParameterSet, PhyslabError, Sandbox, Scenario, ScenarioConfig, ScenarioKind};
use physlab::{Session, SimState, Snapshot, Status, TickScheduler, TRACE_CAPACITY};

/// Stopped session with a manual scheduler
pub fn session(params: ParameterSet) -> Session {
    Session::new(params, Arena::default(), ManualScheduler::new())
}

/// Body at rest-mass `m` / radius `r`
pub fn body(x: [f64; 2], v: [f64; 2], m: f64, radius: f64) -> Body {
    Body {
        x: NVec2::new(x[0], x[1]),
        v: NVec2::new(v[0], v[1]),
        m,
        radius,
    }
}

pub fn collision_params(u1: f64, u2: f64, e: f64) -> CollisionParams {
    CollisionParams {
        velocity1: u1,
        velocity2: u2,
        restitution: e,
        ..CollisionParams::default()
    }
}

// ==================================================================================
// Kinematics tests
// ==================================================================================

#[test]
fn projectile_path_matches_closed_form() {
    let p = ProjectileParams::default();
    let mut s = session(ParameterSet::Projectile(p));
    s.start();

    let mut last = None;
    for _ in 0..100 {
        last = s.tick();
    }

    let Some(SimState::Projectile(_, state)) = s.state().cloned() else {
        panic!("expected projectile state");
    };
    let t = state.t;
    assert_relative_eq!(t, s.elapsed(), epsilon = 1e-12);

    match last {
        Some(Snapshot::Projectile { position, vertical_velocity, .. }) => {
            let a = 45f64.to_radians();
            assert_relative_eq!(position.x, 25.0 * a.cos() * t, epsilon = 1e-9);
            assert_relative_eq!(position.y, 25.0 * a.sin() * t - 0.5 * 9.81 * t * t, epsilon = 1e-9);
            assert_relative_eq!(vertical_velocity, 25.0 * a.sin() - 9.81 * t, epsilon = 1e-9);
        }
        other => panic!("unexpected snapshot {:?}", other),
    }
}

#[test]
fn projectile_keeps_going_below_ground() {
    let p = ProjectileParams::default();
    let mut state = p.initial_state();
    for _ in 0..400 {
        state = p.advance(state, DT);
    }
    // 6.4 s is past the 3.6 s time of flight
    assert!(p.position_at(state.t).y < 0.0);
}

#[test]
fn pendulum_uses_linear_restoring_term() {
    let p = PendulumParams::default();
    let s0 = p.initial_state();
    assert_relative_eq!(s0.angle, 20f64.to_radians(), epsilon = 1e-15);
    assert_eq!(s0.omega, 0.0);

    let s1 = p.advance(s0, DT);
    let alpha = -(p.gravity / p.length) * s0.angle;
    let omega = alpha * DT;
    assert_eq!(s1.omega, omega);
    assert_eq!(s1.angle, s0.angle + omega * DT);
}

#[test]
fn pendulum_oscillates_about_zero() {
    let p = PendulumParams::default();
    let mut s = p.initial_state();
    let mut crossed = false;
    for _ in 0..200 {
        s = p.advance(s, DT);
        if s.angle < 0.0 {
            crossed = true;
        }
        assert!(s.angle.abs() < 0.5, "amplitude grew: {}", s.angle);
    }
    assert!(crossed, "pendulum never swung through the bottom");
}

#[test]
fn spring_semi_implicit_euler_step() {
    let p = SpringParams::default();
    let s0 = p.initial_state();
    let s1 = p.advance(s0, DT);

    let a = -(50.0 / 1.5) * 1.0;
    assert_eq!(s1.v, a * DT);
    assert_eq!(s1.x, 1.0 + a * DT * DT);
}

#[test]
fn spring_energy_stays_bounded() {
    let p = SpringParams::default();
    let energy = |x: f64, v: f64| 0.5 * p.k * x * x + 0.5 * p.mass * v * v;
    let mut s = p.initial_state();
    let e0 = energy(s.x, s.v);
    for _ in 0..5000 {
        s = p.advance(s, DT);
        assert!(energy(s.x, s.v) < 1.2 * e0);
    }
}

#[test]
fn circular_trace_is_bounded_fifo() {
    let p = CircularParams::default();
    let mut s = session(ParameterSet::Circular(p));
    s.start();

    for _ in 0..200 {
        let frame = s.tick().expect("running session must tick");
        if let Snapshot::Circular { trace, .. } = frame {
            assert!(trace.len() <= TRACE_CAPACITY);
        }
    }

    let Some(SimState::Circular(_, state)) = s.state() else {
        panic!("expected circular state");
    };
    assert_eq!(state.trace.len(), 120);

    // Oldest surviving entry is the one written by tick #80 (counting from 0)
    let mut replay = p.initial_state();
    for _ in 0..81 {
        replay = p.advance(replay, DT);
    }
    assert_eq!(state.trace.oldest(), replay.trace.newest());
}

#[test]
fn circular_reset_clears_trace() {
    let mut s = session(ParameterSet::Circular(CircularParams::default()));
    s.start();
    for _ in 0..50 {
        s.tick();
    }
    match s.reset() {
        Snapshot::Circular { trace, angle, time, .. } => {
            assert!(trace.is_empty());
            assert_eq!(angle, 0.0);
            assert_eq!(time, 0.0);
        }
        other => panic!("unexpected snapshot {:?}", other),
    }
}

// ==================================================================================
// Collision tests
// ==================================================================================

#[test]
fn elastic_collision_1d() {
    let (v1, v2) = restitution_1d(2.0, 1.0, 3.0, -1.0, 1.0);
    assert_relative_eq!(v1, 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(v2, 13.0 / 3.0, epsilon = 1e-12);

    // momentum
    assert_relative_eq!(2.0 * v1 + 1.0 * v2, 5.0, epsilon = 1e-12);

    // kinetic energy
    let ke_before = 0.5 * 2.0 * 9.0 + 0.5 * 1.0 * 1.0;
    let ke_after = 0.5 * 2.0 * v1 * v1 + 0.5 * 1.0 * v2 * v2;
    assert_relative_eq!(ke_before, ke_after, epsilon = 1e-12);
}

#[test]
fn perfectly_inelastic_collision_1d() {
    let (v1, v2) = restitution_1d(2.0, 1.0, 3.0, -1.0, 0.0);
    assert_relative_eq!(v1, v2, epsilon = 1e-12);
    assert_relative_eq!(v1, (2.0 * 3.0 + 1.0 * -1.0) / 3.0, epsilon = 1e-12);
}

#[test]
fn restitution_is_clamped() {
    assert_eq!(
        restitution_1d(2.0, 1.0, 3.0, -1.0, 1.5),
        restitution_1d(2.0, 1.0, 3.0, -1.0, 1.0)
    );
    assert_eq!(
        restitution_1d(2.0, 1.0, 3.0, -1.0, -0.3),
        restitution_1d(2.0, 1.0, 3.0, -1.0, 0.0)
    );
    assert_eq!(clamp_restitution(f64::NAN), 0.0);
}

#[test]
fn walls_reflect_and_clamp() {
    let arena = Arena::default();

    let mut b = body([5.0, 200.0], [-3.0, 0.0], 1.0, 10.0);
    assert!(reflect_walls(&mut b, &arena));
    assert_eq!(b.x.x, 10.0);
    assert_eq!(b.v.x, 3.0);

    let mut b = body([400.0, 395.0], [1.0, 2.0], 1.0, 10.0);
    assert!(reflect_walls(&mut b, &arena));
    assert_eq!(b.x.y, 390.0);
    assert_eq!(b.v, NVec2::new(1.0, -2.0));

    let mut b = body([400.0, 200.0], [1.0, 2.0], 1.0, 10.0);
    assert!(!reflect_walls(&mut b, &arena));
    assert_eq!(b.v, NVec2::new(1.0, 2.0));
}

#[test]
fn separated_bodies_are_left_alone() {
    let mut a = body([100.0, 100.0], [1.0, 0.0], 1.0, 10.0);
    let mut b = body([200.0, 100.0], [-1.0, 0.0], 1.0, 10.0);
    assert!(!resolve_pair(&mut a, &mut b, 1.0));
    assert_eq!(a.v.x, 1.0);
    assert_eq!(b.v.x, -1.0);
}

#[test]
fn overlap_is_pushed_apart_and_tangent_kept() {
    let mut a = body([100.0, 100.0], [1.0, 2.0], 1.0, 30.0);
    let mut b = body([140.0, 100.0], [0.0, -1.0], 1.0, 20.0);
    assert!(resolve_pair(&mut a, &mut b, 1.0));

    // equal masses, elastic: normal components swap
    assert_relative_eq!(a.v.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(b.v.x, 1.0, epsilon = 1e-12);
    assert_eq!(a.v.y, 2.0);
    assert_eq!(b.v.y, -1.0);

    // half the 10-unit overlap each
    assert_relative_eq!(a.x.x, 95.0, epsilon = 1e-12);
    assert_relative_eq!(b.x.x, 145.0, epsilon = 1e-12);
}

#[test]
fn coincident_centres_use_fallback_normal() {
    let mut a = body([100.0, 100.0], [1.0, 0.0], 2.0, 30.0);
    let mut b = body([100.0, 100.0], [-1.0, 0.0], 1.0, 20.0);
    assert!(resolve_pair(&mut a, &mut b, 1.0));

    for v in [a.x, a.v, b.x, b.v] {
        assert!(v.x.is_finite() && v.y.is_finite());
    }
    assert_relative_eq!((b.x - a.x).norm(), 50.0, epsilon = 1e-12);
    assert!(b.x.x > a.x.x);
}

#[test]
fn depenetration_never_pushes_through_a_wall() {
    let arena = Arena::default();
    // a rests against the left wall, b runs into it from the right
    let mut bodies = [
        body([30.0, 200.0], [0.0, 0.0], 2.0, 30.0),
        body([75.0, 200.0], [-100.0, 0.0], 1.0, 20.0),
    ];
    step_pair(&mut bodies, &arena, 1.0, DT);

    for b in &bodies {
        assert!(b.x.x - b.radius >= 0.0, "left extent {}", b.x.x - b.radius);
        assert!(b.x.x + b.radius <= arena.width);
        assert!(b.x.y - b.radius >= 0.0 && b.x.y + b.radius <= arena.height);
    }
    assert_eq!(bodies[0].x.x, 30.0);

    // the contact still exchanged momentum, and the clamp left velocities alone
    let (v1, v2) = restitution_1d(2.0, 1.0, 0.0, -100.0, 1.0);
    assert_relative_eq!(bodies[0].v.x, v1, epsilon = 1e-9);
    assert_relative_eq!(bodies[1].v.x, v2, epsilon = 1e-9);
}

#[test]
fn session_collision_conserves_momentum() {
    let params = collision_params(300.0, -100.0, 1.0);
    let mut s = session(ParameterSet::Collision(params));
    s.start();

    let mut hit = None;
    for _ in 0..200 {
        if let Some(Snapshot::Collision { bodies, .. }) = s.tick() {
            if bodies[0].v.x != 300.0 {
                hit = Some(bodies);
                break;
            }
        }
    }
    let [a, b] = hit.expect("bodies never collided");

    assert_relative_eq!(a.m * a.v.x + b.m * b.v.x, 500.0, epsilon = 1e-9);
    assert_relative_eq!(a.v.x, 100.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(b.v.x, 1300.0 / 3.0, epsilon = 1e-9);
    assert_eq!(a.v.y, 0.0);
    assert!((b.x - a.x).norm() >= a.radius + b.radius - 1e-9);
}

// ==================================================================================
// Field tests
// ==================================================================================

#[test]
fn opposite_charges_field_points_along_axis_at_midpoint() {
    let arena = Arena::default();
    let sources = place_sources(&arena, 3.0, -3.0);
    assert_relative_eq!(sources[0].x.x, 0.33 * 800.0, epsilon = 1e-9);
    assert_relative_eq!(sources[1].x.x, 0.67 * 800.0, epsilon = 1e-9);

    let mid = 0.5 * (sources[0].x + sources[1].x);
    let e = field_at(&sources, mid);

    assert!(e.x > 0.0, "field should point from + to -");
    assert_eq!(e.y, 0.0);

    let r: f64 = 0.5 * (sources[1].x.x - sources[0].x.x);
    assert_relative_eq!(e.x, 2.0 * 3.0 / (r * r), epsilon = 1e-12);
}

#[test]
fn field_ignores_sources_closer_than_clip() {
    let arena = Arena::default();
    let sources = place_sources(&arena, 3.0, -3.0);

    // 3 units away from source 0 (9 < 16): only source 1 contributes
    let p = sources[0].x + NVec2::new(3.0, 0.0);
    let only_far = field_at(&sources[1..], p);
    assert_eq!(field_at(&sources, p), only_far);

    assert_eq!(field_at(&sources[..1], sources[0].x), NVec2::zeros());
}

#[test]
fn grid_covers_arena_with_unit_directions() {
    let arena = Arena::default();
    let sources = place_sources(&arena, 3.0, -3.0);
    let grid = sample_grid(&sources, &arena, 40.0);

    assert_eq!(grid.len(), 20 * 10);
    assert_eq!(grid[0].point, NVec2::new(20.0, 20.0));
    for s in &grid {
        assert!(s.magnitude > 0.0);
        assert_relative_eq!(s.direction.norm(), 1.0, epsilon = 1e-12);
    }

    assert!(sample_grid(&sources, &arena, 0.0).is_empty());
}

#[test]
fn tiny_grid_spacing_yields_empty_grid() {
    let arena = Arena::default();
    let sources = place_sources(&arena, 3.0, -3.0);
    assert!(sample_grid(&sources, &arena, 1e-300).is_empty());
    assert!(sample_grid(&sources, &arena, f64::MIN_POSITIVE).is_empty());

    // 1-unit cells (320 000) are still sampled
    assert_eq!(sample_grid(&sources, &arena, 1.0).len(), 800 * 400);
}

#[test]
fn axis_profile_sums_absolute_magnitudes() {
    let arena = Arena::default();
    let [a, b] = place_sources(&arena, 3.0, -3.0);
    let profile = axis_profile(&a, &b, 99);
    assert_eq!(profile.len(), 99);

    // midpoint: 3/r^2 + 3/r^2 even though the charges have opposite sign
    let r: f64 = 0.5 * (b.x.x - a.x.x);
    assert_relative_eq!(profile[49].0, r, epsilon = 1e-9);
    assert_relative_eq!(profile[49].1, 6.0 / (r * r), epsilon = 1e-12);

    // symmetric for equal magnitudes
    for i in 0..99 {
        assert_relative_eq!(profile[i].1, profile[98 - i].1, epsilon = 1e-9);
    }
}

// ==================================================================================
// Session lifecycle tests
// ==================================================================================

#[test]
fn stopped_and_paused_sessions_do_not_tick() {
    let mut s = session(ParameterSet::Spring(SpringParams::default()));
    assert_eq!(s.status(), Status::Stopped);
    assert!(s.tick().is_none());
    assert!(s.state().is_none());

    s.start();
    assert_eq!(s.status(), Status::Running);
    assert!(s.tick().is_some());
    let before = s.state().cloned();
    let elapsed = s.elapsed();

    s.pause();
    assert_eq!(s.status(), Status::Paused);
    assert!(s.tick().is_none());
    assert_eq!(s.state().cloned(), before);
    assert_eq!(s.elapsed(), elapsed);

    // resuming continues from the paused state
    s.start();
    s.tick();
    assert_eq!(s.ticks(), 2);
}

#[test]
fn pause_cancels_pending_tick() {
    let mut s = session(ParameterSet::Pendulum(PendulumParams::default()));
    s.start();
    assert!(s.scheduler().is_pending());
    assert!(s.run_scheduled().is_some());
    assert!(s.scheduler().is_pending());

    s.pause();
    assert!(!s.scheduler().is_pending());
    assert_eq!(s.scheduler().cancelled(), 1);
    assert!(s.run_scheduled().is_none());
}

#[test]
fn reset_is_idempotent() {
    for kind in ScenarioKind::ALL {
        let mut s = session(ParameterSet::defaults(kind));
        s.start();
        for _ in 0..30 {
            s.tick();
        }
        let first = s.reset();
        let second = s.reset();
        assert_eq!(first, second, "{kind} reset differs");
        assert_eq!(first.time(), 0.0);
        assert_eq!(s.status(), Status::Running);
        assert!(s.scheduler().is_pending());
    }
}

#[test]
fn session_exposes_parameters() {
    let params = ParameterSet::Field(FieldParams { charge1: 1.0, charge2: 2.0 });
    let s = session(params);
    assert_eq!(s.parameters(), &params);
    assert_eq!(s.kind(), ScenarioKind::Field);
}

#[test]
fn sandbox_keeps_one_active_session() {
    let mut sandbox: Sandbox = Sandbox::new(Arena::default());

    let s = sandbox.select(ParameterSet::defaults(ScenarioKind::Projectile));
    s.start();
    assert!(sandbox.tick().is_some());

    sandbox.select(ParameterSet::defaults(ScenarioKind::Collision));
    let active = sandbox.active().expect("active session");
    assert_eq!(active.kind(), ScenarioKind::Collision);
    assert_eq!(active.status(), Status::Stopped);
    assert!(sandbox.tick().is_none());

    sandbox.clear();
    assert!(sandbox.active().is_none());
}

#[test]
fn replacing_parameters_recreates_running_session() {
    let mut sandbox: Sandbox = Sandbox::new(Arena::default());
    sandbox.select(ParameterSet::defaults(ScenarioKind::Spring)).start();
    for _ in 0..10 {
        sandbox.tick();
    }

    let updated = ParameterSet::Spring(SpringParams { k: 80.0, ..SpringParams::default() });
    let s = sandbox.replace_parameters(updated);
    assert_eq!(s.status(), Status::Running);
    assert_eq!(s.ticks(), 0);
    assert_eq!(s.parameters(), &updated);
}

#[test]
fn headless_scenario_runs_its_tick_budget() {
    let mut scenario = Scenario::from_parts(
        ParameterSet::defaults(ScenarioKind::Circular),
        Arena::default(),
        42,
    );
    let mut frames = 0;
    let ran = scenario.run_headless(|_| frames += 1);
    assert_eq!(ran, 42);
    assert_eq!(frames, 42);
    assert_relative_eq!(scenario.session.elapsed(), 42.0 * DT, epsilon = 1e-12);
}

// ==================================================================================
// Analytic summary tests
// ==================================================================================

#[test]
fn projectile_summary() {
    let sum = analytic::projectile(&ProjectileParams::default());
    assert_abs_diff_eq!(sum.value("flightTime").unwrap(), 3.602, epsilon = 0.01);
    assert_abs_diff_eq!(sum.value("range").unwrap(), 63.7, epsilon = 0.02);
    assert_abs_diff_eq!(sum.value("maxHeight").unwrap(), 15.93, epsilon = 0.01);

    let vy = &sum.series[0].points;
    assert_eq!(vy.len(), 101);
    let uy = 25.0 * 45f64.to_radians().sin();
    assert_relative_eq!(vy[0].1, uy, epsilon = 1e-9);
    assert_relative_eq!(vy[100].1, -uy, epsilon = 1e-9);
}

#[test]
fn pendulum_summary() {
    let sum = analytic::pendulum(&PendulumParams::default());
    let period = sum.value("period").unwrap();
    assert_relative_eq!(period, 2.0 * PI * (1.6f64 / 9.81).sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(period, 2.54, epsilon = 0.01);

    let series = &sum.series[0].points;
    assert_abs_diff_eq!(series[25].1, 1.0, epsilon = 1e-9);
}

#[test]
fn spring_summary() {
    let sum = analytic::spring(&SpringParams::default());
    assert_abs_diff_eq!(sum.value("angularFrequency").unwrap(), 5.7735, epsilon = 1e-4);
    assert_abs_diff_eq!(sum.value("frequency").unwrap(), 0.919, epsilon = 1e-3);
    assert_eq!(sum.series[0].points[0].1, 1.0);
}

#[test]
fn circular_summary() {
    let sum = analytic::circular(&CircularParams::default());
    assert_abs_diff_eq!(sum.value("period").unwrap(), 5.236, epsilon = 1e-3);

    let x = &sum.series[0].points;
    assert_eq!(x[0].1, 100.0);
    assert_abs_diff_eq!(x[50].1, -100.0, epsilon = 1e-9);
}

#[test]
fn collision_summary_matches_resolver() {
    let sum = analytic::collision(&collision_params(3.0, -1.0, 1.0));
    assert_relative_eq!(sum.value("finalVelocity1").unwrap(), 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(sum.value("finalVelocity2").unwrap(), 13.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(
        sum.value("momentumBefore").unwrap(),
        sum.value("momentumAfter").unwrap(),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        sum.value("kineticEnergyBefore").unwrap(),
        sum.value("kineticEnergyAfter").unwrap(),
        epsilon = 1e-12
    );

    let clamped = analytic::collision(&collision_params(3.0, -1.0, -0.3));
    let inelastic = analytic::collision(&collision_params(3.0, -1.0, 0.0));
    assert_eq!(clamped.values, inelastic.values);
}

#[test]
fn field_summary_uses_axis_profile() {
    let sum = summarize(&ParameterSet::defaults(ScenarioKind::Field), &Arena::default());
    assert_eq!(sum.series[0].points.len(), 99);
    assert_relative_eq!(sum.value("separation").unwrap(), 0.34 * 800.0, epsilon = 1e-9);
}

#[test]
fn summary_from_query_string() {
    let sum = summarize_query(ScenarioKind::Projectile, "?speed=25&angle=45&gravitationalAccel=9.81");
    assert_abs_diff_eq!(sum.value("flightTime").unwrap(), 3.602, epsilon = 0.01);

    // missing and garbage values fall back to defaults
    let fallback = summarize_query(ScenarioKind::Projectile, "speed=fast&gravitationalAccel=0");
    assert_eq!(fallback.values, sum.values);

    let wide = summarize_query(ScenarioKind::Field, "charge1=3&charge2=-3&width=1000");
    assert_relative_eq!(wide.value("separation").unwrap(), 340.0, epsilon = 1e-9);
}

// ==================================================================================
// Parameter and configuration tests
// ==================================================================================

#[test]
fn parameters_default_when_missing_or_invalid() {
    let p = ParameterSet::from_query(ScenarioKind::Projectile, "speed=abc&angle=30&foo=1");
    assert_eq!(
        p,
        ParameterSet::Projectile(ProjectileParams {
            speed: 25.0,
            angle: 30.0,
            gravity: 9.81
        })
    );

    let p = ParameterSet::from_query(ScenarioKind::Pendulum, "length=-2&gravitationalAccel=NaN");
    assert_eq!(p, ParameterSet::defaults(ScenarioKind::Pendulum));
}

#[test]
fn query_handoff_round_trips() {
    let original = ParameterSet::Collision(collision_params(4.5, -2.25, 0.5));
    let query = original.to_query();
    assert!(query.starts_with("mass1=2&mass2=1&velocity1=4.5"));
    assert_eq!(ParameterSet::from_query(ScenarioKind::Collision, &query), original);
}

#[test]
fn query_values_are_url_decoded() {
    let p = ParameterSet::from_query(ScenarioKind::Collision, "?velocity1=%2D2.5&velocity2=+4&restitution=0%2E5");
    match p {
        ParameterSet::Collision(c) => {
            assert_eq!(c.velocity1, -2.5);
            assert_eq!(c.velocity2, 4.0);
            assert_eq!(c.restitution, 0.5);
        }
        other => panic!("unexpected parameters {:?}", other),
    }

    let map = physlab::parse_query("grav%69tationalAccel=1.62&speed");
    assert_eq!(map.get("gravitationalAccel").map(String::as_str), Some("1.62"));
    assert_eq!(map.get("speed").map(String::as_str), Some(""));
}

#[test]
fn scenario_kind_from_name() {
    assert_eq!("Collision".parse::<ScenarioKind>().unwrap(), ScenarioKind::Collision);
    assert!(matches!(
        "orbit".parse::<ScenarioKind>(),
        Err(PhyslabError::UnknownScenario(name)) if name == "orbit"
    ));
}

#[test]
fn scenario_config_from_yaml() {
    let yaml = r#"
engine:
  scenario: collision
  ticks: 10
parameters:
  mass1: 4
  velocity1: "fast"
  restitution: "0.5"
"#;
    let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(cfg.engine.ticks, 10);
    assert_eq!(cfg.arena(), Arena::default());

    match cfg.parameter_set() {
        ParameterSet::Collision(p) => {
            assert_eq!(p.mass1, 4.0);
            assert_eq!(p.velocity1, 3.0);
            assert_eq!(p.restitution, 0.5);
        }
        other => panic!("unexpected parameters {:?}", other),
    }

    let mut scenario = Scenario::build_scenario(&cfg);
    assert_eq!(scenario.run_headless(|_| {}), 10);
}

#[test]
fn bundled_scenario_files_load() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for kind in ScenarioKind::ALL {
        let cfg = ScenarioConfig::load(&dir.join(format!("{kind}.yaml"))).unwrap();
        assert_eq!(cfg.engine.scenario, kind);
    }
}
