//! Bounds-checked indexing and slicing for ordered containers.
//!
//! Every lookup returns `None` instead of panicking when the position or range
//! falls outside the container, and writes to positions outside the container
//! are dropped.
//!
//! ```
//! use safesubscripts::{SafeSubscripts, SafeSubscriptsMut};
//!
//! let mut numbers = vec![1, 2, 3];
//! assert_eq!(numbers.safe_get(2), Some(&3));
//! assert_eq!(numbers.safe_get(3), None);
//! assert_eq!(numbers.safe_range(1..3), Some(&[2, 3][..]));
//! assert_eq!(numbers.safe_range_inclusive(0..=3), None);
//!
//! numbers.safe_set(5, Some(99));
//! assert_eq!(numbers, [1, 2, 3]);
//! ```

use std::ops::{Range, RangeInclusive};

pub use sequence::{offset_distance, MutableIndexedContainer, OrderedContainer};

pub mod query;

fn steps_to<C>(container: &C, position: &C::Position) -> isize
where
    C: OrderedContainer + ?Sized,
{
    container.distance(&container.start_position(), position)
}

fn steps_from<C>(container: &C, position: &C::Position) -> isize
where
    C: OrderedContainer + ?Sized,
{
    container.distance(position, &container.end_position())
}

/// Read access that turns out-of-range positions into `None`.
///
/// Positions are taken as anything convertible into the container's position
/// type. A value that does not convert, such as `-1` for a container indexed
/// by `usize`, is out of range.
pub trait SafeSubscripts: OrderedContainer {
    /// Element at `position`, if it lies in `[start, end)`.
    fn safe_get<P>(&self, position: P) -> Option<&Self::Element>
    where
        P: TryInto<Self::Position>,
    {
        let position = position.try_into().ok()?;
        if steps_to(self, &position) >= 0 && steps_from(self, &position) > 0 {
            Some(self.element(&position))
        } else {
            None
        }
    }

    /// Elements of the half-open range `lower..upper`.
    ///
    /// Both bounds may sit on the end boundary. Inverted ranges are `None`.
    fn safe_range<P>(&self, bounds: Range<P>) -> Option<Self::SubSequence<'_>>
    where
        P: TryInto<Self::Position>,
    {
        let lower = bounds.start.try_into().ok()?;
        let upper = bounds.end.try_into().ok()?;
        if steps_to(self, &lower) >= 0
            && steps_from(self, &upper) >= 0
            && self.distance(&lower, &upper) >= 0
        {
            Some(self.subsequence(lower..upper))
        } else {
            None
        }
    }

    /// Elements of the closed range `lower..=upper`.
    ///
    /// The upper bound is the last element included, so unlike
    /// [`safe_range`](Self::safe_range) it must be strictly before the end
    /// boundary.
    fn safe_range_inclusive<P>(&self, bounds: RangeInclusive<P>) -> Option<Self::SubSequence<'_>>
    where
        P: TryInto<Self::Position>,
    {
        let (lower, upper) = bounds.into_inner();
        let lower = lower.try_into().ok()?;
        let upper = upper.try_into().ok()?;
        if steps_to(self, &lower) >= 0
            && steps_from(self, &upper) > 0
            && self.distance(&lower, &upper) >= 0
        {
            Some(self.subsequence_inclusive(lower..=upper))
        } else {
            None
        }
    }
}

impl<C: OrderedContainer + ?Sized> SafeSubscripts for C {}

/// Element access by membership in the container's valid positions.
pub trait SafeSubscriptsMut: MutableIndexedContainer {
    fn safe_element<P>(&self, position: P) -> Option<&Self::Element>
    where
        P: TryInto<Self::Position>,
    {
        let position = position.try_into().ok()?;
        self.contains_position(&position)
            .then(|| self.element(&position))
    }

    fn safe_element_mut<P>(&mut self, position: P) -> Option<&mut Self::Element>
    where
        P: TryInto<Self::Position>,
    {
        let position = position.try_into().ok()?;
        if self.contains_position(&position) {
            Some(self.element_mut(&position))
        } else {
            None
        }
    }

    /// Replace the element at `position` in place.
    ///
    /// Nothing happens when `element` is `None` or `position` is out of range.
    fn safe_set<P>(&mut self, position: P, element: Option<Self::Element>)
    where
        P: TryInto<Self::Position>,
    {
        if let Some(element) = element {
            self.safe_replace(position, element);
        }
    }

    /// Like [`safe_set`](Self::safe_set), handing back the replaced element.
    fn safe_replace<P>(&mut self, position: P, element: Self::Element) -> Option<Self::Element>
    where
        P: TryInto<Self::Position>,
    {
        let position = position.try_into().ok()?;
        if self.contains_position(&position) {
            Some(self.replace(&position, element))
        } else {
            None
        }
    }
}

impl<C: MutableIndexedContainer + ?Sized> SafeSubscriptsMut for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{LinkedList, VecDeque};
    use test_case::test_case;

    const NUMBERS: [i32; 3] = [1, 2, 3];

    #[test_case(0 => Some(1); "first")]
    #[test_case(2 => Some(3); "last")]
    #[test_case(3 => None; "end boundary")]
    #[test_case(-1 => None; "before start")]
    #[test_case(i64::MAX => None; "far past end")]
    fn element_lookup(position: i64) -> Option<i32> {
        NUMBERS.safe_get(position).copied()
    }

    #[test_case(1, 3 => Some(vec![2, 3]); "up to end boundary")]
    #[test_case(0, 0 => Some(vec![]); "empty at start")]
    #[test_case(3, 3 => Some(vec![]); "empty at end")]
    #[test_case(1, 4 => None; "past end")]
    #[test_case(-1, 2 => None; "before start")]
    #[test_case(2, 1 => None; "inverted")]
    fn half_open_range(lower: i64, upper: i64) -> Option<Vec<i32>> {
        NUMBERS.safe_range(lower..upper).map(<[i32]>::to_vec)
    }

    #[test_case(0, 2 => Some(vec![1, 2, 3]); "whole")]
    #[test_case(1, 1 => Some(vec![2]); "single")]
    #[test_case(0, 3 => None; "upper on end boundary")]
    #[test_case(-1, 1 => None; "before start")]
    #[test_case(2, 0 => None; "inverted")]
    #[test_case(3, 2 => None; "lower past last")]
    fn closed_range(lower: i64, upper: i64) -> Option<Vec<i32>> {
        NUMBERS.safe_range_inclusive(lower..=upper).map(<[i32]>::to_vec)
    }

    mod properties {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn lookups_agree_with_bounds() {
            let elements: Vec<i32> = (10..16).collect();
            let n = elements.len() as i64;
            for lower in -2..n + 2 {
                let expected = (0..n).contains(&lower).then(|| elements[lower as usize]);
                assert_eq!(elements.safe_get(lower).copied(), expected);

                for upper in -2..n + 2 {
                    let expected = (0 <= lower && lower <= upper && upper <= n)
                        .then(|| &elements[lower as usize..upper as usize]);
                    assert_eq!(elements.safe_range(lower..upper), expected);

                    let expected = (0 <= lower && lower <= upper && upper < n)
                        .then(|| &elements[lower as usize..=upper as usize]);
                    assert_eq!(elements.safe_range_inclusive(lower..=upper), expected);
                }
            }
        }

        #[test]
        fn lookup_is_repeatable() {
            let words = vec!["alpha", "beta"];
            let first = words.safe_get(1);
            assert_eq!(words.safe_get(1), first);
            assert_eq!(words.safe_range(0..2), words.safe_range(0..2));
        }

        #[test]
        fn empty_container() {
            let empty: Vec<u8> = Vec::new();
            assert_eq!(empty.safe_get(0), None);
            assert_eq!(empty.safe_range(0..0), Some(&[][..]));
            assert_eq!(empty.safe_range_inclusive(0..=0), None);
            assert_eq!(empty.safe_element(0), None);
        }

        #[test]
        fn set_in_bounds_replaces_one_element() {
            let mut numbers = NUMBERS.to_vec();
            numbers.safe_set(1, Some(99));
            assert_eq!(numbers, vec![1, 99, 3]);
        }

        #[test]
        fn set_out_of_bounds_is_ignored() {
            let mut numbers = NUMBERS.to_vec();
            numbers.safe_set(5, Some(99));
            numbers.safe_set(3, Some(99));
            numbers.safe_set(-1, Some(99));
            assert_eq!(numbers, NUMBERS);
        }

        #[test]
        fn set_absent_value_is_ignored() {
            let mut numbers = NUMBERS;
            numbers.safe_set(0, None);
            assert_eq!(numbers, NUMBERS);
        }

        #[test]
        fn replace_reports_previous_element() {
            let mut numbers = NUMBERS;
            assert_eq!(numbers.safe_replace(2, 30), Some(3));
            assert_eq!(numbers.safe_replace(3, 40), None);
            assert_eq!(numbers, [1, 2, 30]);
        }

        #[test]
        fn mutable_get() {
            let mut numbers = NUMBERS.to_vec();
            assert_eq!(numbers.safe_element(0), Some(&1));
            assert_eq!(numbers.safe_element(3), None);

            if let Some(element) = numbers.safe_element_mut(0) {
                *element += 10;
            }
            assert_eq!(numbers.safe_element_mut(-1), None);
            assert_eq!(numbers, vec![11, 2, 3]);
        }

        #[test]
        fn slice_and_deque() {
            let slice: &[char] = &['a', 'b', 'c'];
            assert_eq!(slice.safe_get(1), Some(&'b'));
            assert_eq!(slice.safe_range(2..4), None);

            let mut deque: VecDeque<_> = slice.iter().copied().collect();
            deque.rotate_left(1);
            assert_eq!(deque.safe_get(0), Some(&'b'));
            assert_eq!(
                deque.safe_range_inclusive(1..=2).map(|run| run.collect::<String>()),
                Some("ca".to_string())
            );
            deque.safe_set(2, Some('z'));
            assert_eq!(deque, ['b', 'c', 'z']);
        }

        #[test]
        fn linked_list() {
            let mut list: LinkedList<_> = NUMBERS.into_iter().collect();
            assert_eq!(list.safe_get(2), Some(&3));
            assert_eq!(list.safe_get(3), None);
            assert_eq!(
                list.safe_range(1..3).map(|run| run.copied().collect::<Vec<_>>()),
                Some(vec![2, 3])
            );
            assert!(list.safe_range_inclusive(0..=3).is_none());

            list.safe_set(1, Some(99));
            list.safe_set(5, Some(99));
            assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 99, 3]);
        }

        /// Container whose positions are signed cursors measured by walking.
        struct Tape(Vec<char>);

        #[derive(Clone, Debug, PartialEq)]
        struct Cursor(i64);

        impl Tape {
            fn offset(position: &Cursor) -> usize {
                usize::try_from(position.0).expect("cursor before start of tape")
            }
        }

        impl OrderedContainer for Tape {
            type Element = char;
            type Position = Cursor;
            type SubSequence<'a> = String;

            fn start_position(&self) -> Cursor {
                Cursor(0)
            }

            fn end_position(&self) -> Cursor {
                Cursor(self.0.len() as i64)
            }

            fn distance(&self, from: &Cursor, to: &Cursor) -> isize {
                let mut at = from.0;
                let mut steps = 0;
                while at < to.0 {
                    at += 1;
                    steps += 1;
                }
                while at > to.0 {
                    at -= 1;
                    steps -= 1;
                }
                steps
            }

            fn element(&self, position: &Cursor) -> &char {
                &self.0[Self::offset(position)]
            }

            fn subsequence(&self, bounds: Range<Cursor>) -> String {
                self.0[Self::offset(&bounds.start)..Self::offset(&bounds.end)]
                    .iter()
                    .collect()
            }

            fn subsequence_inclusive(&self, bounds: RangeInclusive<Cursor>) -> String {
                self.0[Self::offset(bounds.start())..=Self::offset(bounds.end())]
                    .iter()
                    .collect()
            }
        }

        #[test]
        fn opaque_positions() {
            let tape = Tape("tape".chars().collect());
            assert_eq!(tape.safe_get(Cursor(0)), Some(&'t'));
            assert_eq!(tape.safe_get(Cursor(-1)), None);
            assert_eq!(tape.safe_get(Cursor(4)), None);
            assert_eq!(tape.safe_range(Cursor(1)..Cursor(4)), Some("ape".to_string()));
            assert_eq!(tape.safe_range(Cursor(-2)..Cursor(1)), None);
            assert_eq!(
                tape.safe_range_inclusive(Cursor(0)..=Cursor(2)),
                Some("tap".to_string())
            );
            assert_eq!(tape.safe_range_inclusive(Cursor(1)..=Cursor(4)), None);
        }
    }
}
