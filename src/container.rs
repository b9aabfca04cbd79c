//! An owning, growable, insertion-ordered sequence.
//!
//! `Container<T>` keeps its own capacity policy on top of a `Vec<T>`: the
//! first growth allocates [`INITIAL_CAPACITY`] slots and every later one
//! doubles. Elements are only ever moved, never cloned, so move-only element
//! types such as `Box<dyn Shape<T>>` work the same as shared `Rc` handles or
//! plain values.

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::errors::Error;
use crate::shapes::Shape;
use crate::types::{Scalar, narrow};

/// Capacity allocated by the first growth of an empty container.
pub const INITIAL_CAPACITY: usize = 4;

#[derive(Debug, Clone)]
pub struct Container<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container<T> {
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut container = Self::new();
        container.reserve(capacity);
        container
    }

    /// Append `value`, growing geometrically when full. Amortized O(1).
    pub fn push(&mut self, value: T) {
        if self.items.len() >= self.capacity {
            self.grow();
        }
        self.items.push(value);
    }

    fn grow(&mut self) {
        let next = if self.capacity == 0 {
            INITIAL_CAPACITY
        } else {
            self.capacity * 2
        };
        crate::log::debug!(from = self.capacity, to = next, "growing container");
        self.reserve(next);
    }

    /// Raise capacity to at least `capacity`. Never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity <= self.capacity {
            return;
        }
        self.items.reserve_exact(capacity - self.items.len());
        self.capacity = capacity;
    }

    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let len = self.items.len();
        self.items.get(index).ok_or(Error::OutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.items.len();
        self.items.get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Remove and return the element at `index`, shifting later elements left.
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        let len = self.items.len();
        if index >= len {
            return Err(Error::OutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Drop every element. The allocated capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Display> Container<T> {
    /// Write one `"<index>. <element>"` line per element.
    pub fn print_all(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            writeln!(out, "{i}. {item}")?;
        }
        Ok(())
    }
}

impl<E> Container<E> {
    /// Sum of the element areas in the shapes' scalar type, saturating at
    /// its bounds.
    pub fn total_area<T: Scalar>(&self) -> T
    where
        E: Shape<T>,
    {
        let mut total = T::Acc::zero();
        for item in &self.items {
            total += item.area().widen();
        }
        narrow(total)
    }

    /// Like [`print_all`](Self::print_all), with each figure's center and area
    /// appended.
    pub fn print_figures<T: Scalar>(&self, out: &mut impl fmt::Write) -> fmt::Result
    where
        E: Shape<T>,
    {
        for (i, item) in self.items.iter().enumerate() {
            write!(out, "{i}. ")?;
            item.print(&mut *out)?;
            writeln!(out, " | Центр: {} | Площадь: {}", item.center(), item.area())?;
        }
        Ok(())
    }
}

impl<T> Index<usize> for Container<T> {
    type Output = T;

    /// Panics with the out-of-range message when `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for Container<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Extend<T> for Container<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

impl<T> IntoIterator for Container<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Container<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
