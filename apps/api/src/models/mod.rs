pub mod career;
pub mod interests;
