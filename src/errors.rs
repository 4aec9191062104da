use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ListCombinationsError {
    #[error("list at position `{0}` must not be empty")]
    EmptyList(usize),
    #[error("every combination has already been produced")]
    EndOfSequence,
}
