//! Letter sequences: file formats and random generation

mod distribution;
pub mod records;

pub use distribution::{DEFAULT_SEQUENCE_LENGTH, GenerateError, LetterDistribution};
pub use records::{
    RecordError, SequenceRecord, load_records, load_sequence, write_curves, write_records,
};
