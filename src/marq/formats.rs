//! Output formats.
//!
//! Each format is one [`Generator`](super::generating::Generator)
//! implementation; the traversal itself lives in the trait, a format only
//! supplies the per-node emission rules.

pub mod latex;

pub use latex::LatexGenerator;
