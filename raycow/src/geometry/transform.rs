use super::{matrix::{Matrix, MatrixError, IDENTITY}, ray::Ray, tuple::Tuple};

pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::new4([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::new4([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_x(radians: f64) -> Matrix {
    let (sin, cos) = radians.sin_cos();
    Matrix::new4([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, -sin, 0.0],
        [0.0, sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_y(radians: f64) -> Matrix {
    let (sin, cos) = radians.sin_cos();
    Matrix::new4([
        [cos, 0.0, sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_z(radians: f64) -> Matrix {
    let (sin, cos) = radians.sin_cos();
    Matrix::new4([
        [cos, -sin, 0.0, 0.0],
        [sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Each component moves in proportion to the other two, e.g. `x_to_y` adds `y * x_to_y` to `x`.
pub fn shearing(x_to_y: f64, x_to_z: f64, y_to_x: f64, y_to_z: f64, z_to_x: f64, z_to_y: f64) -> Matrix {
    Matrix::new4([
        [1.0, x_to_y, x_to_z, 0.0],
        [y_to_x, 1.0, y_to_z, 0.0],
        [z_to_x, z_to_y, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Maps world space into the space of an eye at `from` looking at `to`.
/// `up` only has to point roughly upwards, the real up vector is re-derived.
pub fn view_transform(from: &Tuple, to: &Tuple, up: &Tuple) -> Matrix {
    let forward = (*to - *from).normalized();
    let left = forward.cross_product(&up.normalized());
    let true_up = left.cross_product(&forward);

    let orientation = Matrix::new4([
        [left.x, left.y, left.z, 0.0],
        [true_up.x, true_up.y, true_up.z, 0.0],
        [-forward.x, -forward.y, -forward.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    orientation * translation(-from.x, -from.y, -from.z)
}

/// Chaining helpers. Every call applies the new transformation after the
/// existing one (left multiplication), so chains read in application order:
/// `IDENTITY.then_scale(..).then_rotate_x(..).then_translate(..)`.
impl Matrix {

    pub fn then(&self, transformation: &Matrix) -> Matrix {
        transformation.multiply(self)
    }

    pub fn then_translate(&self, x: f64, y: f64, z: f64) -> Matrix {
        self.then(&translation(x, y, z))
    }

    pub fn then_scale(&self, x: f64, y: f64, z: f64) -> Matrix {
        self.then(&scaling(x, y, z))
    }

    pub fn then_rotate_x(&self, radians: f64) -> Matrix {
        self.then(&rotation_x(radians))
    }

    pub fn then_rotate_y(&self, radians: f64) -> Matrix {
        self.then(&rotation_y(radians))
    }

    pub fn then_rotate_z(&self, radians: f64) -> Matrix {
        self.then(&rotation_z(radians))
    }

    pub fn then_shear(&self, x_to_y: f64, x_to_z: f64, y_to_x: f64, y_to_z: f64, z_to_x: f64, z_to_y: f64) -> Matrix {
        self.then(&shearing(x_to_y, x_to_z, y_to_x, y_to_z, z_to_x, z_to_y))
    }
}

/// An object-to-world matrix together with its inverse and inverse transpose,
/// both computed once when the transform is created.
#[derive(Clone, Debug)]
pub struct Transform {

    matrix: Matrix,
    inverse: Matrix,
    inverse_transposed: Matrix,
}

impl Transform {

    pub fn new(matrix: Matrix) -> Result<Self, MatrixError> {
        let inverse = matrix.inverted()?;

        Ok(Self {
            matrix,
            inverse,
            inverse_transposed: inverse.transposed(),
        })
    }

    pub fn identity() -> Self {
        Self {
            matrix: IDENTITY,
            inverse: IDENTITY,
            inverse_transposed: IDENTITY,
        }
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn inverse(&self) -> &Matrix {
        &self.inverse
    }

    pub fn point_to_object(&self, world_point: &Tuple) -> Tuple {
        self.inverse.multiply_tuple(world_point)
    }

    pub fn ray_to_object(&self, ray: &Ray) -> Ray {
        ray.transform(&self.inverse)
    }

    pub fn normal_to_world(&self, object_normal: &Tuple) -> Tuple {
        let mut normal = self.inverse_transposed.multiply_tuple(object_normal);
        // the transpose moves translation into the w row
        normal.w = 0.0;
        normal.normalized()
    }
}

impl Default for Transform {

    fn default() -> Self {
        Self::identity()
    }
}
