//! Prompt navigation with a single step of undo
//!
//! The queue always holds at least one item: the front is what is on screen.
//! [`NavigationQueue::advance`] pops the front, pushes a fresh item at the back
//! and remembers what was popped. [`NavigationQueue::go_back`] puts that
//! remembered item back in front, but only if it is not already there, so going
//! back twice in a row without answering does nothing the second time.

use std::collections::VecDeque;
use std::mem;

#[derive(Debug, Clone)]
pub struct NavigationQueue<T> {
    front: T,
    rest: VecDeque<T>,
    last: T,
}

impl<T: Clone + PartialEq> NavigationQueue<T> {
    /// Queue holding only `first`; going back right away is a no-op
    pub fn new(first: T) -> Self {
        NavigationQueue {
            last: first.clone(),
            front: first,
            rest: VecDeque::new(),
        }
    }

    /// The item to show now
    pub fn peek_front(&self) -> &T {
        &self.front
    }

    /// The item most recently moved past
    pub fn last(&self) -> &T {
        &self.last
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Never true, the front always exists
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Items in display order, front first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.front).chain(self.rest.iter())
    }

    /// Drop the front, queue `next` at the back. Length is unchanged.
    pub fn advance(&mut self, next: T) {
        self.rest.push_back(next);
        if let Some(new_front) = self.rest.pop_front() {
            self.last = mem::replace(&mut self.front, new_front);
        }
    }

    /// Show the previous item again.
    ///
    /// Returns false (and leaves the queue alone) when the previous item is
    /// already in front.
    pub fn go_back(&mut self) -> bool {
        if self.front == self.last {
            return false;
        }
        let displaced = mem::replace(&mut self.front, self.last.clone());
        self.rest.push_front(displaced);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents<T: Clone + PartialEq>(queue: &NavigationQueue<T>) -> Vec<T> {
        queue.iter().cloned().collect()
    }

    #[test]
    fn test_go_back_at_start_is_noop() {
        let mut queue = NavigationQueue::new(1);
        assert!(!queue.go_back());
        assert_eq!(contents(&queue), vec![1]);
        assert_eq!(*queue.last(), 1);
    }

    #[test]
    fn test_advance_keeps_length_and_records_last() {
        let mut queue = NavigationQueue::new(1);
        queue.advance(2);
        assert_eq!(contents(&queue), vec![2]);
        assert_eq!(*queue.last(), 1);
        assert_eq!(queue.len(), 1);

        queue.advance(3);
        assert_eq!(contents(&queue), vec![3]);
        assert_eq!(*queue.last(), 2);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_go_back_restores_previous() {
        let mut queue = NavigationQueue::new(1);
        queue.advance(2);
        assert!(queue.go_back());
        assert_eq!(contents(&queue), vec![1, 2]);
        assert_eq!(*queue.peek_front(), 1);
    }

    #[test]
    fn test_second_go_back_is_noop() {
        let mut queue = NavigationQueue::new(1);
        queue.advance(2);
        assert!(queue.go_back());
        let before = contents(&queue);
        assert!(!queue.go_back());
        assert_eq!(contents(&queue), before);
    }

    #[test]
    fn test_advance_after_go_back_returns_to_displaced() {
        let mut queue = NavigationQueue::new(1);
        queue.advance(2);
        queue.go_back();
        // answering the restored item shows the one we left
        queue.advance(3);
        assert_eq!(contents(&queue), vec![2, 3]);
        assert_eq!(*queue.last(), 1);
        assert_eq!(queue.len(), 2);

        // and one more step back is allowed again
        assert!(queue.go_back());
        assert_eq!(contents(&queue), vec![1, 2, 3]);
    }
}
