use drift_core::{
    integrate_fixed, DynamicalSystem, IntegrationSettings, StreamingObserver, StuartLandau,
    Trajectory, RK4,
};
use num_complex::Complex;

fn reference_run() -> (Trajectory<f64, Complex<f64>>, usize) {
    let settings = IntegrationSettings::default();
    let mut state = [Complex::new(1.0, 0.0)];
    let mut traj = Trajectory::new();
    let steps = settings
        .run(
            &mut RK4::new(1),
            StuartLandau::default(),
            &mut state,
            &mut traj,
        )
        .expect("reference scenario is valid");
    (traj, steps)
}

#[test]
fn reference_scenario_emits_101_samples() {
    let (traj, steps) = reference_run();
    assert_eq!(steps, 100);
    assert_eq!(traj.len(), 101);

    let (t0, x0) = traj.iter().next().expect("initial sample");
    assert_eq!(*t0, 0.0);
    assert_eq!(x0, &[Complex::new(1.0, 0.0)]);

    let (t_last, _) = traj.last().expect("final sample");
    assert!((*t_last - 10.0).abs() < 1e-9, "last time was {t_last}");
}

#[test]
fn reference_scenario_keeps_dimension_and_spacing() {
    let (traj, _) = reference_run();
    assert!(traj.states().iter().all(|x| x.len() == 1));
    for pair in traj.times().windows(2) {
        assert_eq!(pair[1], pair[0] + 0.1);
    }
}

#[test]
fn reference_scenario_lets_blow_up_propagate() {
    // With the + sign on the cubic term the amplitude diverges in finite time;
    // the run still completes and the tail is not finite.
    let (traj, _) = reference_run();
    let (_, x_last) = traj.last().expect("final sample");
    assert!(!x_last[0].re.is_finite() || !x_last[0].im.is_finite());
}

#[test]
fn zero_parameters_stay_on_real_axis() {
    let system = StuartLandau::new(0.0_f64, 0.0);
    let mut state = [Complex::new(1.0, 0.0)];
    let mut traj = Trajectory::new();
    integrate_fixed(
        &mut RK4::new(system.dimension()),
        system,
        &mut state,
        0.0,
        0.3,
        0.01,
        &mut traj,
    )
    .expect("valid run");

    assert_eq!(traj.len(), 31);
    for (t, x) in traj.iter() {
        assert!(x[0].re.is_finite(), "diverged at t = {t}");
        assert!(x[0].im.abs() < 1e-12, "left the real axis at t = {t}");
    }

    // Real solution of x' = x + x^3 from x(0) = 1: x(t)^2 = e^{2t} / (2 - e^{2t}).
    let (t_last, x_last) = traj.last().expect("final sample");
    let e = (2.0 * *t_last).exp();
    let exact = (e / (2.0 - e)).sqrt();
    assert!((x_last[0].re - exact).abs() / exact < 1e-4);
}

#[test]
fn streamed_reference_output_has_time_and_two_columns() {
    let system = StuartLandau::default();
    let mut state = [Complex::new(1.0, 0.0)];
    let mut observer = StreamingObserver::new(Vec::new());
    integrate_fixed(
        &mut RK4::new(1),
        system,
        &mut state,
        0.0,
        10.0,
        0.1,
        &mut observer,
    )
    .expect("valid run");

    let text = String::from_utf8(observer.finish().expect("in-memory sink")).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 101);
    assert_eq!(lines[0], "0\t1\t0");
    assert!(lines.iter().all(|line| line.split('\t').count() == 3));
}
