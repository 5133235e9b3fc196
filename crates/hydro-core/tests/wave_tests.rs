use glam::Vec3;
use hydro_core::waves::{WaveComponent, WaveField};

fn single_wave() -> WaveField {
    WaveField {
        gravity: 9.81,
        depth: 50.0,
        phase: 0.0,
        components: vec![WaveComponent {
            direction: Vec3::new(0.8, 0.0, 0.0),
            speed: 1.0,
            amplitude: 0.6,
        }],
    }
}

#[test]
fn test_flat_field_is_still() {
    let waves = WaveField::flat();
    for i in 0..20 {
        let pos = Vec3::new(i as f32 * 3.7, 0.0, i as f32 * -1.3);
        assert_eq!(waves.displacement(pos, i as f32), Vec3::ZERO);
    }
}

#[test]
fn test_zero_direction_contributes_nothing() {
    let mut waves = single_wave();
    waves.components.push(WaveComponent {
        direction: Vec3::ZERO,
        speed: 2.0,
        amplitude: 10.0,
    });
    let with_degenerate = waves.displacement(Vec3::new(1.0, 0.0, 2.0), 3.0);
    let without = single_wave().displacement(Vec3::new(1.0, 0.0, 2.0), 3.0);
    assert!(
        (with_degenerate - without).length() < 1e-6,
        "zero-length direction must not change the sum (or produce NaN)"
    );
}

#[test]
fn test_vertical_displacement_bounded_by_amplitude() {
    let waves = single_wave();
    for i in 0..200 {
        let d = waves.displacement(Vec3::new(i as f32 * 0.31, 0.0, 0.0), i as f32 * 0.13);
        assert!(
            d.y.abs() <= 0.6 + 1e-5,
            "vertical displacement {} exceeds amplitude",
            d.y
        );
        assert!(d.is_finite(), "displacement must stay finite");
    }
}

#[test]
fn test_displacement_is_periodic_in_time() {
    let waves = single_wave();
    let dir_len = 0.8_f32;
    let omega = (9.81 * dir_len * (dir_len * 50.0_f32).tanh()).sqrt();
    let period = std::f32::consts::TAU / omega;

    let pos = Vec3::new(2.0, 0.0, -1.0);
    let a = waves.displacement(pos, 1.0);
    let b = waves.displacement(pos, 1.0 + period);
    assert!(
        (a - b).length() < 1e-2,
        "one full period should reproduce the displacement: {:?} vs {:?}",
        a,
        b
    );
}

#[test]
fn test_max_horizontal_offset_single_component() {
    let waves = single_wave();
    let max = waves.max_horizontal_offset();
    let expected = 0.6 / (0.8_f32 * 50.0).tanh();
    assert!(
        (max.x - expected).abs() < 1e-5,
        "expected {} along x, got {}",
        expected,
        max.x
    );
    assert_eq!(max.z, 0.0, "wave travelling along x should not pad z");
}

#[test]
fn test_horizontal_offset_never_exceeded() {
    let waves = single_wave();
    let max = waves.max_horizontal_offset();
    for i in 0..500 {
        let d = waves.displacement(Vec3::new(i as f32 * 0.17, 0.0, 0.0), i as f32 * 0.07);
        assert!(
            d.x.abs() <= max.x + 1e-4,
            "horizontal displacement {} beyond advertised bound {}",
            d.x,
            max.x
        );
    }
}

#[test]
fn test_components_superpose() {
    let mut waves = single_wave();
    waves.components.push(WaveComponent {
        direction: Vec3::new(0.0, 0.0, 0.5),
        speed: 0.7,
        amplitude: 0.3,
    });
    assert!((waves.max_amplitude() - 0.9).abs() < 1e-6);

    let pos = Vec3::new(1.0, 0.0, 1.0);
    let sum = waves.displacement(pos, 2.0);

    let mut first = single_wave();
    let mut second = single_wave();
    second.components = waves.components[1..].to_vec();
    first.components = waves.components[..1].to_vec();
    let separate = first.displacement(pos, 2.0) + second.displacement(pos, 2.0);

    assert!(
        (sum - separate).length() < 1e-5,
        "superposition should equal the sum of parts"
    );
}
