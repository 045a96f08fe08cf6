pub mod csv;
pub mod example;
pub mod loader;

pub use example::Example;
pub use loader::{
    load_dataset, load_dataset_from_path, Dataset, FeatureCentering, LoadOptions, ParseMode,
};
