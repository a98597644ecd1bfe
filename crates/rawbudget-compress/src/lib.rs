//! Dataset compression and character-budget chunking

mod chunker;
mod compress;

pub use chunker::BudgetChunker;
pub use compress::{
    compress_and_serialize, compress_dataset, serialize_compressed, CompressedRecord,
};
