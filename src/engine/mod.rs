mod dataset_assembler;
mod stats;

pub use dataset_assembler::{Dataset, DatasetAssembler};
pub use stats::DatasetStats;
