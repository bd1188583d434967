use crate::error::Result;

/// Saturating elementwise arithmetic, between two images or an image and a scalar.
///
/// Every method returns a new image; `self` is left untouched.
pub trait ArithmeticImage: Sized {
    fn add(&self, other: &Self) -> Result<Self>;
    fn subtract(&self, other: &Self) -> Result<Self>;
    fn multiply(&self, other: &Self) -> Result<Self>;
    fn divide(&self, other: &Self) -> Result<Self>;

    fn add_scalar(&self, scalar: f64) -> Result<Self>;
    fn subtract_scalar(&self, scalar: f64) -> Result<Self>;
    fn multiply_scalar(&self, scalar: f64) -> Result<Self>;
    fn divide_scalar(&self, scalar: f64) -> Result<Self>;
}
