//! Cross-checks against `nalgebra`.

use ::approx::assert_relative_eq;
use nalgebra::{Matrix2, Matrix3, Matrix4, Quaternion, UnitQuaternion, Vector3};
use tessera_linalg::*;

const TRIALS: usize = 500;

fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(0xbb67ae8584caa73b)
}

fn random<const N: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, N> {
    Matrix::from_fn(|_, _| rng.f64() * 20.0 - 10.0)
}

#[test]
fn determinant_and_inverse() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let m2 = random::<2>(&mut rng);
        let m3 = random::<3>(&mut rng);
        let m4 = random::<4>(&mut rng);

        // Both libraries store matrices column-major.
        let n2 = Matrix2::from_column_slice(m2.as_flattened());
        let n3 = Matrix3::from_column_slice(m3.as_flattened());
        let n4 = Matrix4::from_column_slice(m4.as_flattened());
        assert_eq!(n3[(2, 0)], m3[(2, 0)]);

        assert_relative_eq!(
            m2.determinant(),
            n2.determinant(),
            epsilon = 1e-9,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            m3.determinant(),
            n3.determinant(),
            epsilon = 1e-9,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            m4.determinant(),
            n4.determinant(),
            epsilon = 1e-9,
            max_relative = 1e-9
        );

        if n4.determinant().abs() > 1.0 {
            let ours = m4.inverse().unwrap();
            let theirs = n4.try_inverse().unwrap();
            assert_relative_eq!(
                ours.as_flattened(),
                theirs.as_slice(),
                epsilon = 1e-6,
                max_relative = 1e-6
            );
        }
        if n3.determinant().abs() > 1.0 {
            let ours = m3.inverse().unwrap();
            let theirs = n3.try_inverse().unwrap();
            assert_relative_eq!(
                ours.as_flattened(),
                theirs.as_slice(),
                epsilon = 1e-6,
                max_relative = 1e-6
            );
        }
    }
}

#[test]
fn products() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let a = random::<4>(&mut rng);
        let b = random::<4>(&mut rng);
        let v: Vector<f64, 4> = Vector::from_fn(|_| rng.f64());

        let na = Matrix4::from_column_slice(a.as_flattened());
        let nb = Matrix4::from_column_slice(b.as_flattened());
        let nv = nalgebra::Vector4::from_column_slice(v.as_slice());

        assert_relative_eq!(
            (a * b).as_flattened(),
            (na * nb).as_slice(),
            epsilon = 1e-9
        );
        assert_relative_eq!((a * v).as_slice(), (na * nv).as_slice(), epsilon = 1e-9);
        assert_relative_eq!(
            a.transpose().as_flattened(),
            na.transpose().as_slice(),
            epsilon = 0.0
        );
    }
}

#[test]
fn quaternion_matches_unit_quaternion() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let [x, y, z, w] = [(); 4].map(|_| rng.f64() * 2.0 - 1.0);
        let ours = Quat::from_components(x, y, z, w).normalize();
        let theirs = UnitQuaternion::from_quaternion(Quaternion::new(w, x, y, z));

        let m = ours.to_matrix3();
        let n = theirs.to_rotation_matrix().into_inner();
        assert_relative_eq!(m.as_flattened(), n.as_slice(), epsilon = 1e-12);

        let v = vec3(rng.f64(), rng.f64(), rng.f64());
        let nv = theirs * Vector3::new(v.x, v.y, v.z);
        assert_relative_eq!(
            ours.rotate_vector(v).as_slice(),
            nv.as_slice(),
            epsilon = 1e-12
        );

        // Composition matches, up to sign.
        let [x, y, z, w] = [(); 4].map(|_| rng.f64() * 2.0 - 1.0);
        let ours2 = Quat::from_components(x, y, z, w).normalize();
        let theirs2 = UnitQuaternion::from_quaternion(Quaternion::new(w, x, y, z));
        let product = ours * ours2;
        let expected = (theirs * theirs2).into_inner();
        let expected = Quat::from_components(expected.i, expected.j, expected.k, expected.w);
        assert!(
            product.same_rotation(expected, Tolerance::absolute(1e-12)),
            "{product} vs {expected}"
        );
    }
}

#[test]
fn axis_angle_matches() {
    let mut rng = rng();
    for _ in 0..TRIALS {
        let axis = vec3(rng.f64() - 0.5, rng.f64() - 0.5, rng.f64() - 0.5);
        let angle = rng.f64() * 6.0 - 3.0;

        let ours = Mat3d::from_axis_angle(axis, angle);
        let theirs = nalgebra::Rotation3::from_axis_angle(
            &nalgebra::Unit::new_normalize(Vector3::new(axis.x, axis.y, axis.z)),
            angle,
        );
        assert_relative_eq!(
            ours.as_flattened(),
            theirs.matrix().as_slice(),
            epsilon = 1e-12
        );
    }
}
