mod dims;
mod orientation;

#[doc(inline)]
pub use dims::Axis;
#[doc(inline)]
pub use dims::Dims;
#[doc(inline)]
pub use orientation::Orientation;
