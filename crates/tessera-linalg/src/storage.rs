//! Bounds-checked element addressing over owned or shared memory.
//!
//! Every stored vector and matrix is a [`Storage`]: a [`Block`] of elements plus the element offset
//! at which the value's element 0 lives. Logical index `i` resolves to physical slot `offset + i`.
//!
//! Shared memory is expressed as `&[Cell<T>]`. Several views can alias the same cells, and
//! because [`Cell`] is `!Sync` they can never be handed to different threads. Use [`shared_cells`]
//! to turn a caller-owned buffer into such a block.

use std::{cell::Cell, mem};

use crate::{
    error::{LinalgError, Result},
    traits::Element,
};

/// Backing memory of a [`Storage`].
pub trait Block {
    type Element: Element;

    /// Whether the block owns its elements (`false` for views into caller memory).
    const OWNS_MEMORY: bool;

    /// Number of slots in the block.
    fn capacity(&self) -> usize;

    /// Loads the element at `slot`.
    ///
    /// # Safety
    ///
    /// `slot` must be less than [`Block::capacity`].
    unsafe fn load_unchecked(&self, slot: usize) -> Self::Element;

    /// Stores `value` at `slot`.
    ///
    /// # Safety
    ///
    /// `slot` must be less than [`Block::capacity`].
    unsafe fn store_unchecked(&mut self, slot: usize, value: Self::Element);
}

impl<T: Element, const N: usize> Block for [T; N] {
    type Element = T;
    const OWNS_MEMORY: bool = true;

    fn capacity(&self) -> usize {
        N
    }

    unsafe fn load_unchecked(&self, slot: usize) -> T {
        *self.get_unchecked(slot)
    }

    unsafe fn store_unchecked(&mut self, slot: usize, value: T) {
        *self.get_unchecked_mut(slot) = value;
    }
}

impl<'a, T: Element> Block for &'a [Cell<T>] {
    type Element = T;
    const OWNS_MEMORY: bool = false;

    fn capacity(&self) -> usize {
        self.len()
    }

    unsafe fn load_unchecked(&self, slot: usize) -> T {
        self.get_unchecked(slot).get()
    }

    unsafe fn store_unchecked(&mut self, slot: usize, value: T) {
        self.get_unchecked(slot).set(value);
    }
}

/// Turns a mutable buffer into a block of cells that any number of views may share.
///
/// # Examples
///
/// ```
/// # use tessera_linalg::*;
/// let mut buffer = [0.0f32; 8];
/// let cells = shared_cells(&mut buffer);
/// let mut a = BufferVector::<f32, 4>::new(cells, 4);
/// let b = BufferVector::<f32, 4>::new(cells, 4);
/// a.set_x(1.0).unwrap();
/// assert_eq!(b.get(0).unwrap(), 1.0);
/// ```
pub fn shared_cells<T>(data: &mut [T]) -> &[Cell<T>] {
    Cell::from_mut(data).as_slice_of_cells()
}

/// A fixed number of elements at an offset into a [`Block`].
///
/// Construction never fails: an offset pointing past the end of the block is only reported once an
/// element is accessed.
#[derive(Debug, Clone, Copy)]
pub struct Storage<B> {
    block: B,
    offset: usize,
    element_count: usize,
}

impl<B: Block> Storage<B> {
    pub fn new(block: B, offset: usize, element_count: usize) -> Self {
        Self {
            block,
            offset,
            element_count,
        }
    }

    /// Number of logical elements.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Number of slots in the underlying block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.block.capacity()
    }

    /// Physical slot of logical element 0.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn owns_memory(&self) -> bool {
        B::OWNS_MEMORY
    }

    pub fn block(&self) -> &B {
        &self.block
    }

    /// Resolves logical `index` to its physical slot.
    pub fn resolve(&self, index: usize) -> Result<usize> {
        let capacity = self.capacity();
        let physical = self.offset.checked_add(index);
        match physical {
            Some(slot) if index < self.element_count && slot < capacity => Ok(slot),
            _ => {
                log::trace!(
                    "out-of-range access: index {index} of {} at offset {} (capacity {capacity})",
                    self.element_count,
                    self.offset,
                );
                Err(LinalgError::IndexOutOfRange {
                    index,
                    count: self.element_count,
                    physical,
                    capacity,
                })
            }
        }
    }

    /// Checks that every logical element resolves to a slot inside the block.
    pub fn check_bounds(&self) -> Result<()> {
        match self.element_count.checked_sub(1) {
            Some(last) => self.resolve(last).map(drop),
            None => Ok(()),
        }
    }

    pub fn read(&self, index: usize) -> Result<B::Element> {
        let slot = self.resolve(index)?;
        // SAFETY: `resolve` checked `slot < capacity`.
        unsafe { Ok(self.block.load_unchecked(slot)) }
    }

    /// Writes `value` to logical element `index`. Nothing is written if the index is invalid.
    pub fn write(&mut self, index: usize, value: B::Element) -> Result<()> {
        let slot = self.resolve(index)?;
        // SAFETY: `resolve` checked `slot < capacity`.
        unsafe { self.block.store_unchecked(slot, value) };
        Ok(())
    }

    /// # Safety
    ///
    /// [`Storage::resolve`] must succeed for `index`.
    #[inline]
    pub unsafe fn read_unchecked(&self, index: usize) -> B::Element {
        self.block.load_unchecked(self.offset + index)
    }

    /// # Safety
    ///
    /// [`Storage::resolve`] must succeed for `index`.
    #[inline]
    pub unsafe fn write_unchecked(&mut self, index: usize, value: B::Element) {
        self.block.store_unchecked(self.offset + index, value)
    }

    /// Serializes the elements in host-native byte order.
    pub fn native_bytes(&self) -> Result<Vec<u8>> {
        self.check_bounds()?;
        let mut bytes = Vec::with_capacity(self.element_count * mem::size_of::<B::Element>());
        for index in 0..self.element_count {
            // SAFETY: `check_bounds` validated the whole range.
            let value = unsafe { self.read_unchecked(index) };
            bytes.extend_from_slice(bytemuck::bytes_of(&value));
        }
        Ok(bytes)
    }
}

impl<'a, T: Element> Storage<&'a [Cell<T>]> {
    /// Returns the shared cells holding the elements, starting with logical element 0.
    pub fn native_view(&self) -> Result<&'a [Cell<T>]> {
        self.check_bounds()?;
        let block: &'a [Cell<T>] = self.block;
        Ok(&block[self.offset..self.offset + self.element_count])
    }
}
