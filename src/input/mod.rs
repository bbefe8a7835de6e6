// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequence views: the one abstraction both engines are written against.
//!
//! A view is an ordered, fixed-length, randomly addressable run of elements
//! that can be compared for equality. Slices, vectors, arrays and deques are
//! views as-is. Text is not: `str` indexing is by byte and scalar access is
//! O(n), so [`input`] decodes it once into a [`CharView`] of Unicode scalar
//! values.
//!
//! Nothing here normalizes or tokenizes. `"café"` in NFC and NFD are different
//! sequences, and a token list is whatever the caller split it into.

use std::collections::VecDeque;
use std::ops::Deref;

/// An immutable, zero-indexed run of comparable elements.
///
/// `at` must be O(1) and must panic for `index >= len()`. The algorithms never
/// ask for an out-of-range element.
pub trait SequenceView {
    type Elem: PartialEq;

    fn len(&self) -> usize;

    fn at(&self, index: usize) -> &Self::Elem;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elementwise equality against any view over the same element type.
    fn same_elements<R>(&self, other: &R) -> bool
    where
        R: SequenceView<Elem = Self::Elem> + ?Sized,
    {
        self.len() == other.len() && (0..self.len()).all(|i| self.at(i) == other.at(i))
    }
}

impl<E: PartialEq> SequenceView for [E] {
    type Elem = E;

    #[inline]
    fn len(&self) -> usize {
        <[E]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &E {
        &self[index]
    }
}

impl<E: PartialEq> SequenceView for Vec<E> {
    type Elem = E;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &E {
        &self[index]
    }
}

impl<E: PartialEq, const N: usize> SequenceView for [E; N] {
    type Elem = E;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> &E {
        &self[index]
    }
}

impl<E: PartialEq> SequenceView for VecDeque<E> {
    type Elem = E;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &E {
        &self[index]
    }
}

impl<T: SequenceView + ?Sized> SequenceView for &T {
    type Elem = T::Elem;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, index: usize) -> &T::Elem {
        (**self).at(index)
    }
}

/// Text decoded into Unicode scalar values for O(1) positional access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharView {
    chars: Vec<char>,
}

impl CharView {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl SequenceView for CharView {
    type Elem = char;

    #[inline]
    fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    fn at(&self, index: usize) -> &char {
        &self.chars[index]
    }
}

impl Deref for CharView {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for CharView {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for CharView {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl FromIterator<char> for CharView {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

/// Wrap text as a character view.
///
/// Counts characters, not bytes, so `"ē"` is one element.
pub fn input(text: &str) -> CharView {
    CharView::new(text)
}
