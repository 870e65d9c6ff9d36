#![cfg_attr(not(test), no_std)]

//#![warn(unsafe_code)]

extern crate alloc;

pub mod prelude;

pub mod error;
pub mod linked_lists;
pub mod traits;

pub use error::{IntegrityError, ListError};
pub use linked_lists::SinglyLinkedList;
pub use traits::num::Integer;
