pub mod mle;
pub mod multilinear_polynomial;
pub mod symbolic;
pub mod univariate;
