//! Randomized checks of algebraic identities.

use tessera_linalg::*;

const TRIALS: usize = 1000;

fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(0x6a09e667f3bcc908)
}

fn random_vec3(rng: &mut fastrand::Rng, scale: f64) -> Vec3d {
    Vector::from_fn(|_| rng.f64() * scale)
}

fn random_vec4(rng: &mut fastrand::Rng) -> Vec4d {
    Vector::from_fn(|_| rng.f64() * 200.0 - 100.0)
}

#[test]
fn orthonormalize_random_triples() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let input = [
            random_vec3(&mut rng, 10000.0),
            random_vec3(&mut rng, 10000.0),
            random_vec3(&mut rng, 10000.0),
        ];
        let [a, b, c] = orthonormalize(input[0], input[1], input[2]);

        for (u, v) in [(a, b), (a, c), (b, c)] {
            assert_approx_eq!(u.dot(v), 0.0, "{input:?}").abs(5e-5);
        }
        for u in [a, b, c] {
            assert_approx_eq!(u.magnitude(), 1.0, "{input:?}").abs(5e-5);
        }
        // The first output keeps the direction of the first input.
        assert_approx_eq!(a, input[0].normalize()).abs(1e-12);
    }
}

#[test]
fn normalize_yields_unit_vectors() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let v = random_vec4(&mut rng);
        assert_approx_eq!(v.normalize().magnitude(), 1.0).abs(1e-12);
    }
    assert_eq!(Vec4d::ZERO.normalize(), Vec4d::ZERO);
    assert_eq!(Vec2f::ZERO.normalize(), Vec2f::ZERO);
}

#[test]
fn interpolation_endpoints_are_exact() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let a = random_vec4(&mut rng);
        let b = random_vec4(&mut rng);
        assert_eq!(a.interpolate_linear(b, 0.0), a);
        assert_eq!(a.interpolate_linear(b, 1.0), b);

        let mid = a.interpolate_linear(b, 0.5);
        assert_approx_eq!(mid.distance(a), mid.distance(b)).abs(1e-9);
    }
}

#[test]
fn scale_and_absolute() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let v = random_vec4(&mut rng);
        assert_eq!(v.scale(1.0), v);
        assert_eq!(v.scale(0.0), Vec4d::ZERO);

        let abs = v.absolute();
        for i in 0..4 {
            assert_eq!(abs[i], v[i].abs());
        }

        let i = vec3(rng.i64(-1000..1000), rng.i64(-1000..1000), rng.i64(-1000..1000));
        assert_eq!(i.absolute(), i.map(i64::abs));
        assert_eq!(i.scale(1), i);
        assert_eq!(i.scale(0), Vec3l::ZERO);
    }
}

#[test]
fn cross_product_is_orthogonal() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let a = random_vec3(&mut rng, 10.0);
        let b = random_vec3(&mut rng, 10.0);
        let c = a.cross(b);
        assert_approx_eq!(c.dot(a), 0.0).abs(1e-10);
        assert_approx_eq!(c.dot(b), 0.0).abs(1e-10);
        assert_eq!(b.cross(a), -c);
    }
}

#[test]
fn inverse_composes_to_identity() {
    let mut rng = rng();
    let mut inverted = 0;
    for _ in 0..TRIALS {
        let m = Mat4d::from_fn(|_, _| rng.f64() * 2.0 - 1.0);
        let Ok(inv) = m.inverse() else {
            continue;
        };
        if m.determinant().abs() < 1e-3 {
            continue;
        }
        inverted += 1;
        assert_approx_eq!(m * inv, Mat4d::IDENTITY).abs(1e-8);
        assert_approx_eq!(inv * m, Mat4d::IDENTITY).abs(1e-8);
        assert_approx_eq!(inv.determinant() * m.determinant(), 1.0).abs(1e-8);
    }
    assert!(inverted > TRIALS / 2);
}

#[test]
fn quaternion_round_trip() {
    let mut rng = rng();
    let tolerance = Tolerance::absolute(1e-9);
    for _ in 0..TRIALS {
        let q = Quat::from_vec(random_vec4(&mut rng)).normalize();
        let m = q.to_matrix3();

        let back = Quat::from_matrix3(&m);
        assert!(back.same_rotation(q, tolerance), "{back} vs {q}");
        let back = Quat::from_matrix4(&q.to_matrix4());
        assert!(back.same_rotation(q, tolerance), "{back} vs {q}");

        // Rotation matrices are orthonormal with determinant 1.
        assert_approx_eq!(m * m.transpose(), Mat3d::IDENTITY).abs(1e-12);
        assert_approx_eq!(m.determinant(), 1.0).abs(1e-12);
    }
}
