//! Explicit LIFO of pending ranges, standing in for recursion.

use crate::buffer::Location;
use crate::error::{AllocationSite, Result, SortError};
use std::ops::Range;

/// Number of tasks the stack can hold before its first growth.
pub const INITIAL_TASK_CAPACITY: usize = 8;

/// A contiguous range whose keys agree on every byte before `depth`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Task {
    pub start: usize,
    pub end: usize,
    pub depth: usize,
    pub location: Location,
}

impl Task {
    /// The task covering the whole input.
    pub(crate) fn root(len: usize) -> Self {
        Self {
            start: 0,
            end: len,
            depth: 0,
            location: Location::Primary,
        }
    }

    #[inline(always)]
    pub(crate) fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.end - self.start
    }
}

pub(crate) struct TaskStack {
    tasks: Vec<Task>,
}

impl TaskStack {
    pub(crate) fn new() -> Result<Self> {
        let mut tasks = Vec::new();
        tasks
            .try_reserve_exact(INITIAL_TASK_CAPACITY)
            .map_err(|_| SortError::allocation(AllocationSite::TaskStack))?;
        Ok(Self { tasks })
    }

    pub(crate) fn push(&mut self, task: Task) -> Result<()> {
        debug_assert!(task.len() > 1, "singleton ranges are never pushed");
        if self.tasks.len() == self.tasks.capacity() {
            self.grow()?;
        }
        self.tasks.push(task);
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn pop(&mut self) -> Option<Task> {
        self.tasks.pop()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.tasks.capacity()
    }

    /// Doubles the capacity.
    fn grow(&mut self) -> Result<()> {
        let capacity = self.tasks.capacity().max(1);
        let doubled_bytes = capacity
            .checked_mul(2)
            .and_then(|c| c.checked_mul(std::mem::size_of::<Task>()));
        if doubled_bytes.is_none() {
            return Err(SortError::allocation(AllocationSite::TaskStackGrowth));
        }
        self.tasks
            .try_reserve_exact(capacity)
            .map_err(|_| SortError::allocation(AllocationSite::TaskStackGrowth))?;
        log::debug!(
            "task stack grew from {capacity} to {} entries",
            self.tasks.capacity()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(start: usize, end: usize) -> Task {
        Task {
            start,
            end,
            depth: 1,
            location: Location::Scratch,
        }
    }

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = TaskStack::new().unwrap();
        stack.push(task(0, 2)).unwrap();
        stack.push(task(2, 5)).unwrap();
        assert_eq!(stack.pop(), Some(task(2, 5)));
        assert_eq!(stack.pop(), Some(task(0, 2)));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn doubles_when_full() {
        let mut stack = TaskStack::new().unwrap();
        assert!(stack.capacity() >= INITIAL_TASK_CAPACITY);
        let initial = stack.capacity();
        for i in 0..=initial {
            stack.push(task(i * 2, i * 2 + 2)).unwrap();
        }
        assert!(stack.capacity() >= initial * 2);
        for i in (0..=initial).rev() {
            assert_eq!(stack.pop(), Some(task(i * 2, i * 2 + 2)));
        }
    }

    #[test]
    fn root_spans_everything() {
        let root = Task::root(7);
        assert_eq!(root.range(), 0..7);
        assert_eq!(root.len(), 7);
        assert_eq!(root.location, Location::Primary);
    }
}
