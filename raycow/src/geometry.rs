pub mod matrix;
pub mod ray;
pub mod transform;
pub mod tuple;
