//! Step sequencer: a bounded index over the form's steps.

/// Current position in an `N`-step form. The index never leaves `[0, N-1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequencer {
    index: usize,
    len: usize,
}

impl StepSequencer {
    /// Create a sequencer at step 0. `len` is clamped to at least one step.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Index of the terminal step.
    pub fn last(&self) -> usize {
        self.len - 1
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_terminal(&self) -> bool {
        self.index == self.last()
    }

    /// Move forward one step. Returns false at the terminal step.
    ///
    /// Gating on required fields is the caller's job.
    pub fn forward(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Move back one step. Returns false at step 0.
    pub fn back(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_forward_and_back() {
        let mut seq = StepSequencer::new(3);
        assert!(seq.is_first());
        assert!(seq.forward());
        assert!(seq.forward());
        assert!(seq.is_terminal());
        assert!(!seq.forward());
        assert_eq!(seq.index(), 2);

        assert!(seq.back());
        assert!(seq.back());
        assert!(!seq.back());
        assert_eq!(seq.index(), 0);
    }

    #[test]
    fn test_single_step_is_terminal() {
        let mut seq = StepSequencer::new(1);
        assert!(seq.is_first());
        assert!(seq.is_terminal());
        assert!(!seq.forward());
        assert!(!seq.back());
    }

    #[test]
    fn test_zero_len_clamped() {
        let seq = StepSequencer::new(0);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.last(), 0);
    }
}
