use thiserror::Error;

/// Why a keyed, positional or arithmetic operation left the list untouched.
///
/// Neither case is fatal: the list is unchanged and still valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("value not found")]
    NotFound,
    #[error("position {position} is out of range for a list of length {len}")]
    OutOfRange { position: usize, len: usize },
    #[error("digit sum does not fit in the element type")]
    Overflow,
}

/// A broken structural invariant. Any of these means a bug in the list itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("length is {len} but head present = {head}, tail present = {tail}")]
    EmptyMismatch { len: usize, head: bool, tail: bool },
    #[error("cached length {cached} does not match {counted} reachable nodes")]
    LengthMismatch { cached: usize, counted: usize },
    #[error("chain runs past {len} nodes without ending")]
    Unterminated { len: usize },
    #[error("tail does not point at the last reachable node")]
    TailMismatch,
    #[error("head and tail are the same node in a list of length {len}")]
    HeadTailAliasing { len: usize },
    #[error("head and tail are different nodes in a list of length 1")]
    HeadTailDistinct,
}
