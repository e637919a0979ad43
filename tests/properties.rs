use proptest::prelude::*;

use rolling_incline::sim::{
    RampPlacement, RunPhase, ShapeKind, SimulationClock, SimulationParameters, compute_pose,
};

fn any_shape() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ShapeKind::ALL.to_vec())
}

prop_compose! {
    fn valid_params()(
        shape in any_shape(),
        radius in 0.05f32..2.0,
        thickness_frac in 0.0f32..1.5,
        mass in 0.1f32..50.0,
        angle_deg in 1.0f32..89.0,
        length in 0.1f32..20.0,
    ) -> SimulationParameters {
        SimulationParameters::new(
            shape,
            radius,
            radius * thickness_frac,
            mass,
            angle_deg.to_radians(),
            length,
        )
        .unwrap()
    }
}

proptest! {
    #[test]
    fn acceleration_positive_and_time_finite(p in valid_params()) {
        prop_assert!(p.acceleration() > 0.0);
        prop_assert!(p.travel_time().is_finite());
        prop_assert!(p.travel_time() > 0.0);
        prop_assert!(p.inertia() >= 0.0);
    }

    #[test]
    fn distance_monotone_and_clamped(p in valid_params(), t1 in 0.0f32..30.0, t2 in 0.0f32..30.0) {
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let s_lo = p.distance_at(lo);
        let s_hi = p.distance_at(hi);
        prop_assert!(s_lo <= s_hi);
        prop_assert!(s_hi <= p.ramp_length());
        prop_assert!(s_lo >= 0.0);
    }

    #[test]
    fn pose_is_idempotent(p in valid_params(), t in 0.0f32..10.0) {
        let ramp = RampPlacement::for_parameters(&p);
        let a = compute_pose(&p, t, &ramp);
        let b = compute_pose(&p, t, &ramp);
        prop_assert_eq!(a.position.to_array(), b.position.to_array());
        prop_assert_eq!(a.spin.to_bits(), b.spin.to_bits());
        prop_assert!(a.distance <= p.ramp_length());
    }

    #[test]
    fn finished_means_exact_travel_time(p in valid_params(), step in 0.001f32..0.25) {
        let mut clock = SimulationClock::default();
        clock.submit(p);
        clock.start();
        let mut guard = 0;
        while clock.phase() == RunPhase::Running && guard < 200_000 {
            clock.tick(step);
            guard += 1;
        }
        prop_assert_eq!(clock.phase(), RunPhase::Finished);
        prop_assert_eq!(clock.elapsed(), p.travel_time());
    }

    #[test]
    fn elapsed_never_decreases(p in valid_params(), deltas in prop::collection::vec(-0.1f32..0.1, 1..50)) {
        let mut clock = SimulationClock::default();
        clock.submit(p);
        clock.start();
        let mut prev = clock.elapsed();
        for d in deltas {
            let (_, elapsed) = clock.tick(d);
            prop_assert!(elapsed >= prev);
            prev = elapsed;
        }
    }
}
