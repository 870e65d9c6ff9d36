use log::{debug, info};
use rand::rngs::StdRng;
use singly_linked_list::{IntegrityError, SinglyLinkedList};
use thiserror::Error;

mod ops;
mod traits;
pub use ops::{ListOperation, ListOperationGenerator, Outcome, DEFAULT_MAX_LEN};
use traits::*;

/// how many operations before the failing one are shown by `playback`
const PLAYBACK_WINDOW: usize = 5;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub seed: u64,
    pub ops: usize,
    pub max_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub ops: usize,
    pub final_len: usize,
    pub peak_len: usize,
}

#[derive(Debug, Error)]
pub enum FailureKind {
    #[error("expected {expected:?}, got {actual:?}")]
    Result { expected: Outcome, actual: Outcome },
    #[error("contents diverged, expected {expected:?}, got {actual:?}")]
    Contents { expected: Vec<i32>, actual: Vec<i32> },
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}

#[derive(Debug, Error)]
#[error("seed {seed}: operation {op_num} ({operation:?}) failed: {kind}")]
pub struct OperationFailure {
    pub seed: u64,
    pub max_len: usize,
    pub op_num: usize,
    pub operation: ListOperation,
    pub kind: FailureKind,
    pub target: SinglyLinkedList<i32>,
    /// the reference model right after the failing operation
    pub data: Vec<i32>,
}

/// Replays `config.ops` generated operations against a fresh list and the
/// reference model, checking results, contents and structure after each one.
pub fn run(config: &RunConfig) -> Result<RunSummary, OperationFailure> {
    let mut target = SinglyLinkedList::new();
    let mut gen = ListOperationGenerator::<StdRng>::from_seed(config.seed).with_max_len(config.max_len);
    let mut peak_len = 0;

    for op_num in 0..config.ops {
        let Some((op, expected)) = gen.next() else {
            break;
        };
        let actual = op.apply(&mut target);
        debug!("#{op_num} {op:?} -> {actual:?}");

        let kind = if actual != expected {
            Some(FailureKind::Result { expected, actual })
        } else if target.to_vec() != *gen.reference() {
            Some(FailureKind::Contents {
                expected: gen.reference().clone(),
                actual: target.to_vec(),
            })
        } else {
            target.check_integrity().err().map(FailureKind::from)
        };

        if let Some(kind) = kind {
            return Err(OperationFailure {
                seed: config.seed,
                max_len: config.max_len,
                op_num,
                operation: op,
                kind,
                target,
                data: gen.data(),
            });
        }
        peak_len = peak_len.max(target.len());
    }

    Ok(RunSummary {
        ops: config.ops,
        final_len: target.len(),
        peak_len,
    })
}

impl OperationFailure {
    /// Regenerates the operations from the seed and logs the last few before
    /// the failure together with the list state after each.
    pub fn playback(&self) {
        info!("running playback");
        let mut lst = SinglyLinkedList::new();
        let gen = ListOperationGenerator::<StdRng>::from_seed(self.seed).with_max_len(self.max_len);
        let lower = self.op_num.saturating_sub(PLAYBACK_WINDOW);
        for (ind, (op, re)) in gen.take(self.op_num + 1).enumerate() {
            let r = op.apply(&mut lst);
            if ind < lower {
                continue;
            }
            info!("--------- operation {ind} ----------");
            info!("operation: {op:?}");
            info!("list_state: {lst:?}");
            info!("expected / actual : {re:?}, {r:?}");
        }
        info!("failing list: {:?}", self.target);
        info!("reference:    {:?}", self.data);
    }
}
