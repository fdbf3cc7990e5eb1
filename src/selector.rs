//! Single-slot best-item accumulator.

/// How [`BestCandidate`] compares a new `(item, metric)` against the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Keep the highest metric; on a tie keep the shorter item.
    #[default]
    MaxThenShortest,
    /// Keep the lowest metric; on a tie keep the shorter item.
    MinThenShortest,
}

impl SelectionPolicy {
    /// Whether `new` should replace `old`.
    fn prefers(self, old_metric: f64, new_metric: f64, old_len: usize, new_len: usize) -> bool {
        let better = match self {
            SelectionPolicy::MaxThenShortest => new_metric > old_metric,
            SelectionPolicy::MinThenShortest => new_metric < old_metric,
        };
        better || (new_metric == old_metric && new_len < old_len)
    }
}

/// Length used to break metric ties.
///
/// For plain text this is the character count. For sequences it is the
/// character count of the **first element only**, not of the whole
/// sequence, so two spans starting with the same word tie regardless of
/// how long they are. See [`representative_len`].
pub trait Representative {
    /// Tie-break length.
    fn representative_len(&self) -> usize;
}

impl Representative for str {
    fn representative_len(&self) -> usize {
        self.chars().count()
    }
}

impl Representative for String {
    fn representative_len(&self) -> usize {
        self.as_str().representative_len()
    }
}

impl<T: AsRef<str>> Representative for [T] {
    fn representative_len(&self) -> usize {
        representative_len(self)
    }
}

impl<T: AsRef<str>> Representative for Vec<T> {
    fn representative_len(&self) -> usize {
        representative_len(self)
    }
}

/// Tie-break length of a word sequence: length of its first word, 0 if empty.
#[must_use]
pub fn representative_len<T: AsRef<str>>(words: &[T]) -> usize {
    words
        .first()
        .map(|w| w.as_ref().chars().count())
        .unwrap_or(0)
}

/// Keeps the single best `(item, metric)` seen so far under a [`SelectionPolicy`].
///
/// ```
/// use el_mention::selector::{BestCandidate, SelectionPolicy};
///
/// let mut best = BestCandidate::new(SelectionPolicy::MinThenShortest);
/// best.store("lincoln".to_string(), 0.5);
/// best.store("abe".to_string(), 0.5);   // tie, shorter wins
/// best.store("abraham".to_string(), 0.9);
/// assert_eq!(best.peek().map(String::as_str), Some("abe"));
/// ```
#[derive(Debug, Clone)]
pub struct BestCandidate<T> {
    policy: SelectionPolicy,
    slot: Option<(T, f64)>,
}

impl<T: Representative> BestCandidate<T> {
    /// Empty accumulator.
    #[must_use]
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy, slot: None }
    }

    /// The comparison policy in use.
    #[must_use]
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Offer an item. The first offer is always accepted.
    pub fn store(&mut self, item: T, metric: f64) {
        let replace = match &self.slot {
            None => true,
            Some((old, old_metric)) => self.policy.prefers(
                *old_metric,
                metric,
                old.representative_len(),
                item.representative_len(),
            ),
        };
        if replace {
            self.slot = Some((item, metric));
        }
    }

    /// Current best item, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.slot.as_ref().map(|(item, _)| item)
    }

    /// Metric of the current best item, if any.
    #[must_use]
    pub fn metric(&self) -> Option<f64> {
        self.slot.as_ref().map(|(_, m)| *m)
    }

    /// True until something has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Consume the accumulator, yielding the best item.
    #[must_use]
    pub fn into_inner(self) -> Option<T> {
        self.slot.map(|(item, _)| item)
    }
}
