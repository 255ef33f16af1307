mod dmat3;

pub use dmat3::DMat3;
