mod build;
mod name;
mod require;

pub use build::Build;
pub use name::Name;
pub use require::Require;
