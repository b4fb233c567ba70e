pub mod monomial;
pub mod multivariate_expansion;
pub mod polynomial;
pub mod term;
pub mod univariate_expansion;
