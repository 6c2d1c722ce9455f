pub mod bubble;
pub mod insertion;
pub mod quick;
pub mod selection;

pub use bubble::BubbleState;
pub use insertion::InsertionState;
pub use quick::{PartitionPhase, PartitionState, QuickSortStrategy, QuickState, Range};
pub use selection::SelectionState;
