use thiserror::Error;

/// RbtError enumerates over all possible errors that this package
/// shall return.
#[derive(Debug, PartialEq, Error)]
pub enum RbtError<K> {
    /// Returned by try_insert() API when the entry carries no key.
    #[error("entry has no key")]
    AbsentKey,
    /// Returned by create() API when key is already present.
    #[error("key already present")]
    OverwriteKey,
    /// Returned by remove() API when key is not present.
    #[error("key not found")]
    KeyNotFound,
    /// Returned by remove() API when asked to remove the only entry and
    /// the instance is not configured to become empty.
    #[error("refusing to remove the last entry")]
    LastEntry,
    /// Fatal case, red node with a red child.
    #[error("consecutive red nodes")]
    ConsecutiveReds,
    /// Fatal case, black-height differs between left and right subtree.
    /// The String component of this variant can be used for debugging.
    #[error("unbalanced blacks, {0}")]
    UnbalancedBlacks(String),
    /// Fatal case, index entries are not in sort-order.
    #[error("sort error, {0:?} not before {1:?}")]
    SortError(K, K),
    /// Fatal case, root is colored red.
    #[error("root is red")]
    RedRoot,
    /// Fatal case, a sentinel is red or has children.
    #[error("invalid sentinel, {0}")]
    InvalidSentinel(String),
    /// Fatal case, parent and child links disagree.
    #[error("broken link, {0}")]
    BrokenLink(String),
    /// Fatal case, counted entries differ from the tracked length.
    #[error("entry count, expected {expected} counted {counted}")]
    EntryCount { expected: usize, counted: usize },
}
