use super::traits::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use singly_linked_list::{ListError, SinglyLinkedList};

pub const DEFAULT_MAX_LEN: usize = 64;

/// Values stay single digits so every list is also a valid number for
/// `add_as_numbers`.
const DIGITS: std::ops::Range<i32> = 0..10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListOperation {
    InsertEnd(i32),
    DeleteFirst,
    DeleteTail,
    DeleteKey(i32),
    DeleteNth(usize),
    RemoveLastOccurrence(i32),
    Reverse,
    DeleteEvenPositions,
    InsertSorted(i32),
    SwapHeadAndTail,
    LeftRotate(usize),
    RemoveDuplicates,
    RemoveDuplicatesFromSorted,
    MoveToBack(i32),
    ArrangeOddAndEven,
    InsertAlternating(Vec<i32>),
    AddAsNumbers(Vec<i32>),
    Max,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Popped(Option<i32>),
    Removed(Result<i32, ListError>),
    /// nodes `other` still owns after a splice
    Leftover(usize),
    Sum(Result<Vec<i32>, ListError>),
    Max(i32),
}

impl Operation for ListOperation {
    type Result = Outcome;
    type Target = SinglyLinkedList<i32>;

    fn apply(&self, lst: &mut Self::Target) -> Self::Result {
        match self {
            Self::InsertEnd(v) => {
                lst.insert_end(*v);
                Outcome::Done
            }
            Self::DeleteFirst => Outcome::Popped(lst.delete_first()),
            Self::DeleteTail => Outcome::Popped(lst.delete_tail()),
            Self::DeleteKey(v) => Outcome::Removed(lst.delete_node_with_key(v)),
            Self::DeleteNth(n) => Outcome::Removed(lst.delete_nth_node(*n)),
            Self::RemoveLastOccurrence(v) => Outcome::Removed(lst.remove_last_occurrence(v)),
            Self::Reverse => {
                lst.reverse();
                Outcome::Done
            }
            Self::DeleteEvenPositions => {
                lst.delete_even_positions();
                Outcome::Done
            }
            Self::InsertSorted(v) => {
                lst.insert_sorted(*v);
                Outcome::Done
            }
            Self::SwapHeadAndTail => {
                lst.swap_head_and_tail();
                Outcome::Done
            }
            Self::LeftRotate(k) => {
                lst.left_rotate(*k);
                Outcome::Done
            }
            Self::RemoveDuplicates => {
                lst.remove_duplicates();
                Outcome::Done
            }
            Self::RemoveDuplicatesFromSorted => {
                lst.remove_duplicates_from_sorted();
                Outcome::Done
            }
            Self::MoveToBack(v) => {
                lst.move_to_back(v);
                Outcome::Done
            }
            Self::ArrangeOddAndEven => {
                lst.arrange_odd_and_even();
                Outcome::Done
            }
            Self::InsertAlternating(values) => {
                let mut other: SinglyLinkedList<i32> = values.iter().copied().collect();
                lst.insert_alternating(&mut other);
                Outcome::Leftover(other.len())
            }
            Self::AddAsNumbers(values) => {
                let other: SinglyLinkedList<i32> = values.iter().copied().collect();
                Outcome::Sum(lst.add_as_numbers(&other).map(|sum| sum.to_vec()))
            }
            Self::Max => Outcome::Max(lst.max()),
        }
    }
}

impl ListOperation {
    /// The same operation, performed on a plain vector.
    pub fn apply_to_model(&self, data: &mut Vec<i32>) -> Outcome {
        match self {
            Self::InsertEnd(v) => {
                data.push(*v);
                Outcome::Done
            }
            Self::DeleteFirst => Outcome::Popped((!data.is_empty()).then(|| data.remove(0))),
            Self::DeleteTail => Outcome::Popped(data.pop()),
            Self::DeleteKey(v) => Outcome::Removed(
                data.iter()
                    .position(|x| x == v)
                    .map(|i| data.remove(i))
                    .ok_or(ListError::NotFound),
            ),
            Self::DeleteNth(n) => Outcome::Removed(if (1..=data.len()).contains(n) {
                Ok(data.remove(n - 1))
            } else {
                Err(ListError::OutOfRange {
                    position: *n,
                    len: data.len(),
                })
            }),
            Self::RemoveLastOccurrence(v) => Outcome::Removed(
                data.iter()
                    .rposition(|x| x == v)
                    .map(|i| data.remove(i))
                    .ok_or(ListError::NotFound),
            ),
            Self::Reverse => {
                data.reverse();
                Outcome::Done
            }
            Self::DeleteEvenPositions => {
                *data = data.iter().copied().step_by(2).collect();
                Outcome::Done
            }
            Self::InsertSorted(v) => {
                let index = data.iter().position(|x| x > v).unwrap_or(data.len());
                data.insert(index, *v);
                Outcome::Done
            }
            Self::SwapHeadAndTail => {
                if data.len() > 1 {
                    let last = data.len() - 1;
                    data.swap(0, last);
                }
                Outcome::Done
            }
            Self::LeftRotate(k) => {
                if !data.is_empty() {
                    let k = k % data.len();
                    data.rotate_left(k);
                }
                Outcome::Done
            }
            Self::RemoveDuplicates => {
                let mut seen = Vec::with_capacity(data.len());
                data.retain(|x| {
                    let first = !seen.contains(x);
                    if first {
                        seen.push(*x);
                    }
                    first
                });
                Outcome::Done
            }
            Self::RemoveDuplicatesFromSorted => {
                data.dedup();
                Outcome::Done
            }
            Self::MoveToBack(v) => {
                let (mut keep, moved): (Vec<i32>, Vec<i32>) =
                    data.iter().copied().partition(|x| x != v);
                keep.extend(moved);
                *data = keep;
                Outcome::Done
            }
            Self::ArrangeOddAndEven => {
                let odds = data.iter().copied().step_by(2);
                let evens = data.iter().copied().skip(1).step_by(2);
                *data = odds.chain(evens).collect();
                Outcome::Done
            }
            Self::InsertAlternating(values) => {
                let mut merged = Vec::with_capacity(data.len() + values.len());
                let mut mine = data.iter().copied();
                let mut theirs = values.iter().copied();
                loop {
                    match (mine.next(), theirs.next()) {
                        (None, None) => break,
                        (a, b) => merged.extend(a.into_iter().chain(b)),
                    }
                }
                *data = merged;
                Outcome::Leftover(0)
            }
            Self::AddAsNumbers(values) => {
                let mut sum = Vec::new();
                let mut carry = 0;
                for i in 0..data.len().max(values.len()) {
                    let total = carry + data.get(i).unwrap_or(&0) + values.get(i).unwrap_or(&0);
                    sum.push(total % 10);
                    carry = total / 10;
                }
                if carry != 0 {
                    sum.push(carry);
                }
                Outcome::Sum(Ok(sum))
            }
            Self::Max => Outcome::Max(data.iter().copied().max().unwrap_or(i32::MIN)),
        }
    }
}

pub struct ListOperationGenerator<R = StdRng>
where
    R: Rng + SeedableRng,
{
    rng: R,
    data: Vec<i32>,
    max_len: usize,
}

impl<R: Rng + SeedableRng> ListOperationGenerator<R> {
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    fn digit(&mut self) -> i32 {
        self.rng.gen_range(DIGITS)
    }

    fn digits(&mut self, max: usize) -> Vec<i32> {
        let len = self.rng.gen_range(0..=max);
        (0..len).map(|_| self.digit()).collect()
    }

    fn gen_operation(&mut self) -> ListOperation {
        use ListOperation::*;
        let len = self.data.len();
        // shrink once the list reaches the cap
        if len >= self.max_len {
            return match self.rng.gen_range(0..4) {
                0 => DeleteFirst,
                1 => DeleteTail,
                2 => DeleteEvenPositions,
                _ => RemoveDuplicates,
            };
        }
        match self.rng.gen_range(0..21) {
            0..=3 => InsertEnd(self.digit()),
            4 => DeleteFirst,
            5 => DeleteTail,
            6 => DeleteKey(self.digit()),
            7 => DeleteNth(self.rng.gen_range(0..=len + 1)),
            8 => RemoveLastOccurrence(self.digit()),
            9 => Reverse,
            10 => DeleteEvenPositions,
            11 => InsertSorted(self.digit()),
            12 => SwapHeadAndTail,
            13 => LeftRotate(self.rng.gen_range(0..=2 * len + 1)),
            14 => RemoveDuplicates,
            15 => RemoveDuplicatesFromSorted,
            16 => MoveToBack(self.digit()),
            17 => ArrangeOddAndEven,
            18 => InsertAlternating(self.digits(6)),
            19 => AddAsNumbers(self.digits(6)),
            20 => Max,
            _ => unreachable!(),
        }
    }
}

impl<R: Rng + SeedableRng> OperationGenerator<R> for ListOperationGenerator<R> {
    type Operation = ListOperation;
    type ReferenceImpl = Vec<i32>;

    fn from_seed(seed: u64) -> Self {
        Self {
            rng: R::seed_from_u64(seed),
            data: Vec::new(),
            max_len: DEFAULT_MAX_LEN,
        }
    }

    fn reference(&self) -> &Self::ReferenceImpl {
        &self.data
    }

    fn data(self) -> Self::ReferenceImpl {
        self.data
    }
}

impl<R: Rng + SeedableRng> Iterator for ListOperationGenerator<R> {
    type Item = (ListOperation, Outcome);

    fn next(&mut self) -> Option<Self::Item> {
        let op = self.gen_operation();
        let res = op.apply_to_model(&mut self.data);
        Some((op, res))
    }
}
