pub mod paths;

pub use paths::FolioPaths;
