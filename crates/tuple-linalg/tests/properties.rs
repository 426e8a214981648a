//! Algebraic properties checked over seeded random inputs.

use approx::{assert_relative_eq, assert_ulps_eq};
use tuple_linalg::{
    mat2,
    toolbox::{AnyMatrix, AnyVector},
    vec3, vec4, Error, Matrix, Matrix4, Vector,
};

const ROUNDS: usize = 200;

fn init() {
    env_logger::builder().is_test(true).try_init().ok();
}

fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(0x5eed_1a3b_c0ff_ee42)
}

fn random_vector<const N: usize>(rng: &mut fastrand::Rng) -> Vector<N> {
    Vector::from_fn(|_| rng.f64() * 200.0 - 100.0)
}

fn random_matrix<const N: usize>(rng: &mut fastrand::Rng) -> Matrix<N> {
    Matrix::from_fn(|_, _| rng.f64() * 20.0 - 10.0)
}

#[test]
fn add_then_subtract_restores() {
    init();
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let v = random_vector::<4>(&mut rng);
        let w = random_vector::<4>(&mut rng);
        let mut sum = v;
        sum.add(&w).subtract(&w);
        assert_relative_eq!(sum, v, epsilon = 1e-12);
    }
}

#[test]
fn dot_is_squared_magnitude() {
    init();
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let v = random_vector::<3>(&mut rng);
        assert_relative_eq!(v.dot(&v), v.magnitude().powi(2), max_relative = 1e-12);
    }
}

#[test]
fn normalized_has_unit_length() {
    init();
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let mut v = random_vector::<4>(&mut rng);
        assert_relative_eq!(v.normalize().magnitude(), 1.0, epsilon = 1e-12);
    }

    let mut zero = Vector::<2>::ZERO;
    assert!(zero.normalize().magnitude().is_nan());
}

#[test]
fn cross_product() {
    let mut x = vec3(1.0, 0.0, 0.0);
    x.cross(vec3(0.0, 1.0, 0.0));
    assert_eq!(x, vec3(0.0, 0.0, 1.0));

    let mut rng = rng();
    for _ in 0..ROUNDS {
        let a = random_vector::<3>(&mut rng);
        let b = random_vector::<3>(&mut rng);
        let mut c = a;
        c.cross(&b);
        // The cross product is orthogonal to both inputs.
        let scale = a.magnitude() * b.magnitude() * c.magnitude();
        assert!(c.dot(&a).abs() <= scale * 1e-9);
        assert!(c.dot(&b).abs() <= scale * 1e-9);
    }
}

#[test]
fn identity_transform() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let v = random_vector::<4>(&mut rng);
        assert_eq!(Matrix4::identity().multiply_vector(&v), v);
    }
}

#[test]
fn matrix_product() {
    let mut m = mat2(1.0, 2.0, 3.0, 4.0);
    m.multiply(mat2(5.0, 6.0, 7.0, 8.0));
    assert_eq!(m, mat2(19.0, 22.0, 43.0, 50.0));

    // (AB)v == A(Bv)
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let a = random_matrix::<3>(&mut rng);
        let b = random_matrix::<3>(&mut rng);
        let v = random_vector::<3>(&mut rng);
        let mut ab = a;
        ab.multiply(&b);
        assert_relative_eq!(
            ab.multiply_vector(&v),
            a.multiply_vector(b.multiply_vector(&v)),
            epsilon = 1e-9,
            max_relative = 1e-9
        );
    }
}

#[test]
fn transpose_twice_restores() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let m = random_matrix::<4>(&mut rng);
        let mut t = m;
        t.transpose();
        assert_eq!(t[(1, 3)], m[(3, 1)]);
        t.transpose();
        assert_eq!(t, m);
    }
}

#[test]
fn transform_builders() {
    assert_eq!(
        Matrix4::translate(1.0, 2.0, 3.0).multiply_vector(vec4(0.0, 0.0, 0.0, 1.0)),
        vec4(1.0, 2.0, 3.0, 1.0)
    );
    assert_eq!(
        Matrix4::scale(2.0, 3.0, 4.0).multiply_vector(vec4(1.0, 1.0, 1.0, 1.0)),
        vec4(2.0, 3.0, 4.0, 1.0)
    );

    // Rotations around a unit axis preserve length.
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let mut axis = random_vector::<3>(&mut rng);
        axis.normalize();
        let degrees = rng.f64() * 720.0 - 360.0;
        let rotation = Matrix4::rotate(degrees, axis.x, axis.y, axis.z);
        let v = random_vector::<3>(&mut rng).extend(1.0);
        let rotated = rotation.multiply_vector(&v);
        assert_relative_eq!(
            rotated.truncate().magnitude(),
            v.truncate().magnitude(),
            max_relative = 1e-12
        );
        assert_ulps_eq!(rotated.w, 1.0);
    }
}

#[test]
fn inverse_is_reciprocal() {
    let mut m = Matrix::<3>::from_fn(|_, _| 4.0);
    m.inverse();
    assert_eq!(m, Matrix::<3>::from_fn(|_, _| 0.25));
}

#[test]
fn runtime_dispatch() -> anyhow::Result<()> {
    init();

    let m = AnyMatrix::from_flat(Matrix4::translate(1.0, 2.0, 3.0).as_flat())?;
    let v = AnyVector::from_slice(&[0.0, 0.0, 0.0, 1.0])?;
    assert_eq!(m.multiply_vector(&v)?.components(), &[1.0, 2.0, 3.0, 1.0]);

    let v = AnyVector::from_slice(&[1.0, 1.0])?;
    assert_eq!(
        m.multiply_vector(&v),
        Err(Error::MatrixVectorMismatch {
            size: 4,
            dimension: 2
        })
    );
    assert_eq!(
        AnyMatrix::from_flat(&[1.0; 6]),
        Err(Error::NotSquare { len: 6 })
    );
    Ok(())
}
