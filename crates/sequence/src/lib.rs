use std::collections::{linked_list, vec_deque, LinkedList, VecDeque};
use std::iter::{Skip, Take};
use std::ops::{Range, RangeInclusive};

/// An ordered, forward-traversable run of elements.
///
/// Valid element positions run from [`start_position`](Self::start_position)
/// up to but excluding [`end_position`](Self::end_position). The end position
/// is still a valid bound for a half-open range.
///
/// The accessors are the native operations of the container. Like `Index`,
/// they panic when handed a position or range outside the container.
pub trait OrderedContainer {
    type Element;

    /// Opaque cursor into the container.
    type Position: Clone;

    /// Borrowed view over a range of elements.
    type SubSequence<'a>
    where
        Self: 'a;

    /// First valid position.
    fn start_position(&self) -> Self::Position;

    /// One past the last valid position.
    fn end_position(&self) -> Self::Position;

    /// Signed number of steps needed to advance from `from` to `to`.
    ///
    /// Negative when `to` precedes `from`. Implementations saturate instead of
    /// overflowing so the sign is always reliable.
    fn distance(&self, from: &Self::Position, to: &Self::Position) -> isize;

    /// Element at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not in `[start, end)`.
    fn element(&self, position: &Self::Position) -> &Self::Element;

    /// Elements in `[bounds.start, bounds.end)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or reaches past the end.
    fn subsequence(&self, bounds: Range<Self::Position>) -> Self::SubSequence<'_>;

    /// Elements in `[bounds.start, bounds.end]`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or its end is not a valid element
    /// position.
    fn subsequence_inclusive(
        &self,
        bounds: RangeInclusive<Self::Position>,
    ) -> Self::SubSequence<'_>;
}

/// Ordered container whose elements can be replaced in place.
pub trait MutableIndexedContainer: OrderedContainer {
    /// Whether `position` belongs to the set of valid element positions.
    fn contains_position(&self, position: &Self::Position) -> bool;

    /// # Panics
    ///
    /// Panics if `position` is not a valid element position.
    fn element_mut(&mut self, position: &Self::Position) -> &mut Self::Element;

    /// Swap the element at `position` for `element`, returning the old one.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not a valid element position.
    fn replace(&mut self, position: &Self::Position, element: Self::Element) -> Self::Element {
        std::mem::replace(self.element_mut(position), element)
    }
}

/// Signed distance between two integer offsets, saturated to `isize`.
pub fn offset_distance(from: usize, to: usize) -> isize {
    if to >= from {
        isize::try_from(to - from).unwrap_or(isize::MAX)
    } else {
        isize::try_from(from - to).map_or(isize::MIN, |steps| -steps)
    }
}

#[track_caller]
fn out_of_bounds(position: usize, len: usize) -> ! {
    panic!("position {position} out of bounds for length {len}")
}

#[track_caller]
fn check_range(start: usize, end: usize, len: usize) {
    if start > end {
        panic!("range starts at {start} but ends at {end}");
    }
    if end > len {
        panic!("range end {end} out of bounds for length {len}");
    }
}

impl<T> OrderedContainer for [T] {
    type Element = T;
    type Position = usize;
    type SubSequence<'a> = &'a [T] where Self: 'a;

    fn start_position(&self) -> usize {
        0
    }

    fn end_position(&self) -> usize {
        self.len()
    }

    fn distance(&self, from: &usize, to: &usize) -> isize {
        offset_distance(*from, *to)
    }

    fn element(&self, position: &usize) -> &T {
        &self[*position]
    }

    fn subsequence(&self, bounds: Range<usize>) -> &[T] {
        &self[bounds]
    }

    fn subsequence_inclusive(&self, bounds: RangeInclusive<usize>) -> &[T] {
        &self[bounds]
    }
}

impl<T> MutableIndexedContainer for [T] {
    fn contains_position(&self, position: &usize) -> bool {
        *position < self.len()
    }

    fn element_mut(&mut self, position: &usize) -> &mut T {
        &mut self[*position]
    }
}

impl<const N: usize, T> OrderedContainer for [T; N] {
    type Element = T;
    type Position = usize;
    type SubSequence<'a> = &'a [T] where Self: 'a;

    fn start_position(&self) -> usize {
        0
    }

    fn end_position(&self) -> usize {
        N
    }

    fn distance(&self, from: &usize, to: &usize) -> isize {
        offset_distance(*from, *to)
    }

    fn element(&self, position: &usize) -> &T {
        &self[*position]
    }

    fn subsequence(&self, bounds: Range<usize>) -> &[T] {
        &self[bounds]
    }

    fn subsequence_inclusive(&self, bounds: RangeInclusive<usize>) -> &[T] {
        &self[bounds]
    }
}

impl<const N: usize, T> MutableIndexedContainer for [T; N] {
    fn contains_position(&self, position: &usize) -> bool {
        *position < N
    }

    fn element_mut(&mut self, position: &usize) -> &mut T {
        &mut self[*position]
    }
}

impl<T> OrderedContainer for Vec<T> {
    type Element = T;
    type Position = usize;
    type SubSequence<'a> = &'a [T] where Self: 'a;

    fn start_position(&self) -> usize {
        0
    }

    fn end_position(&self) -> usize {
        self.len()
    }

    fn distance(&self, from: &usize, to: &usize) -> isize {
        offset_distance(*from, *to)
    }

    fn element(&self, position: &usize) -> &T {
        &self[*position]
    }

    fn subsequence(&self, bounds: Range<usize>) -> &[T] {
        &self[bounds]
    }

    fn subsequence_inclusive(&self, bounds: RangeInclusive<usize>) -> &[T] {
        &self[bounds]
    }
}

impl<T> MutableIndexedContainer for Vec<T> {
    fn contains_position(&self, position: &usize) -> bool {
        *position < self.len()
    }

    fn element_mut(&mut self, position: &usize) -> &mut T {
        &mut self[*position]
    }
}

impl<T> OrderedContainer for VecDeque<T> {
    type Element = T;
    type Position = usize;
    type SubSequence<'a> = vec_deque::Iter<'a, T> where Self: 'a;

    fn start_position(&self) -> usize {
        0
    }

    fn end_position(&self) -> usize {
        self.len()
    }

    fn distance(&self, from: &usize, to: &usize) -> isize {
        offset_distance(*from, *to)
    }

    fn element(&self, position: &usize) -> &T {
        &self[*position]
    }

    fn subsequence(&self, bounds: Range<usize>) -> vec_deque::Iter<'_, T> {
        self.range(bounds)
    }

    fn subsequence_inclusive(&self, bounds: RangeInclusive<usize>) -> vec_deque::Iter<'_, T> {
        self.range(bounds)
    }
}

impl<T> MutableIndexedContainer for VecDeque<T> {
    fn contains_position(&self, position: &usize) -> bool {
        *position < self.len()
    }

    fn element_mut(&mut self, position: &usize) -> &mut T {
        &mut self[*position]
    }
}

/// Positions are counted from the front. Every access walks the list, so
/// element lookup and slicing are linear in the position.
impl<T> OrderedContainer for LinkedList<T> {
    type Element = T;
    type Position = usize;
    type SubSequence<'a> = Take<Skip<linked_list::Iter<'a, T>>> where Self: 'a;

    fn start_position(&self) -> usize {
        0
    }

    fn end_position(&self) -> usize {
        self.len()
    }

    fn distance(&self, from: &usize, to: &usize) -> isize {
        offset_distance(*from, *to)
    }

    fn element(&self, position: &usize) -> &T {
        match self.iter().nth(*position) {
            Some(element) => element,
            None => out_of_bounds(*position, self.len()),
        }
    }

    fn subsequence(&self, bounds: Range<usize>) -> Self::SubSequence<'_> {
        check_range(bounds.start, bounds.end, self.len());
        self.iter()
            .skip(bounds.start)
            .take(bounds.end - bounds.start)
    }

    fn subsequence_inclusive(&self, bounds: RangeInclusive<usize>) -> Self::SubSequence<'_> {
        let (start, end) = bounds.into_inner();
        match end.checked_add(1) {
            Some(end) => self.subsequence(start..end),
            None => out_of_bounds(end, self.len()),
        }
    }
}

impl<T> MutableIndexedContainer for LinkedList<T> {
    fn contains_position(&self, position: &usize) -> bool {
        *position < self.len()
    }

    fn element_mut(&mut self, position: &usize) -> &mut T {
        let len = self.len();
        match self.iter_mut().nth(*position) {
            Some(element) => element,
            None => out_of_bounds(*position, len),
        }
    }
}
