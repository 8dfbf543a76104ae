pub mod bn;
pub mod ceil_div;
pub mod index;
pub mod safe_math;
