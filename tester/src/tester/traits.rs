use rand::{Rng, SeedableRng};

/// deterministically applies an operation to a T returning the result
pub trait Operation {
    type Result: Sized;
    type Target;
    fn apply(&self, target: &mut Self::Target) -> Self::Result;
}

// deterministically generates a sequence of valid operations, each paired with
// the result the reference implementation produced for it
pub trait OperationGenerator<R>:
    Iterator<Item = (Self::Operation, <Self::Operation as Operation>::Result)> + Sized
where
    R: Rng + SeedableRng,
{
    type Operation: Operation;
    type ReferenceImpl;
    fn from_seed(seed: u64) -> Self;
    fn reference(&self) -> &Self::ReferenceImpl;
    fn data(self) -> Self::ReferenceImpl;
}
