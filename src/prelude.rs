pub use crate::error::{IntegrityError, ListError};
pub use crate::linked_lists::SinglyLinkedList;
pub use crate::traits::num::Integer;
