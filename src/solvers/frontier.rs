use std::collections::VecDeque;

/// Discovered-but-unprocessed items of a traversal. The removal order is the
/// only thing that distinguishes one search strategy from another.
pub trait Frontier<T> {
    fn add(&mut self, item: T);

    /// Removes the next item per this frontier's discipline.
    fn remove(&mut self) -> Option<T>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Last-in-first-out frontier, giving depth-first exploration.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    fn remove(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}

/// First-in-first-out frontier, giving breadth-first exploration.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn add(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn remove(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}
