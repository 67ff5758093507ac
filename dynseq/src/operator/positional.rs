use std::collections::VecDeque;

use dynseq_comparer::{Value, ValueComparer};

use crate::callable::{test, Predicate};
use crate::error::Result;

/// The number of elements.
pub fn count(items: impl IntoIterator<Item = Value>) -> usize {
    items.into_iter().count()
}

/// The number of elements satisfying the predicate.
pub fn count_by(items: impl IntoIterator<Item = Value>, predicate: Predicate) -> usize {
    items.into_iter().filter(|item| predicate(item)).count()
}

/// The first `count` elements.
pub fn take<I>(items: I, count: usize) -> std::iter::Take<I::IntoIter>
where
    I: IntoIterator<Item = Value>,
{
    items.into_iter().take(count)
}

/// Everything after the first `count` elements.
pub fn skip<I>(items: I, count: usize) -> std::iter::Skip<I::IntoIter>
where
    I: IntoIterator<Item = Value>,
{
    items.into_iter().skip(count)
}

/// Elements up to, not including, the first one failing the predicate.
pub fn take_while<'a, I>(
    items: I,
    predicate: Option<Predicate<'a>>,
) -> impl Iterator<Item = Value> + 'a
where
    I: IntoIterator<Item = Value>,
    I::IntoIter: 'a,
{
    items
        .into_iter()
        .take_while(move |item| test(predicate, item))
}

/// Elements from the first one failing the predicate onwards.
pub fn skip_while<'a, I>(
    items: I,
    predicate: Option<Predicate<'a>>,
) -> impl Iterator<Item = Value> + 'a
where
    I: IntoIterator<Item = Value>,
    I::IntoIter: 'a,
{
    items
        .into_iter()
        .skip_while(move |item| test(predicate, item))
}

/// The elements of `items` followed by those of `other`.
pub fn concat<I, J>(items: I, other: J) -> std::iter::Chain<I::IntoIter, J::IntoIter>
where
    I: IntoIterator<Item = Value>,
    J: IntoIterator<Item = Value>,
{
    items.into_iter().chain(other)
}

/// The elements in reverse order.
///
/// Nothing is read from the source until the first element is pulled; at
/// that point the whole source is buffered.
pub fn reverse<I>(items: I) -> Reverse<I::IntoIter>
where
    I: IntoIterator<Item = Value>,
{
    Reverse::new(items.into_iter())
}

/// The position of the first element satisfying the predicate.
pub fn index_of(items: impl IntoIterator<Item = Value>, predicate: Predicate) -> Option<usize> {
    items.into_iter().position(|item| predicate(&item))
}

/// The position of the first element equal to `value`.
///
/// Elements are compared with the default comparer, so string matches
/// ignore case.
pub fn index_of_value(
    items: impl IntoIterator<Item = Value>,
    value: &Value,
) -> Result<Option<usize>> {
    let comparer = ValueComparer::default();
    for (index, item) in items.into_iter().enumerate() {
        if comparer.equals(&item, value)? {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// A lazily buffered reversal of a sequence.
#[derive(Debug, Clone)]
pub struct Reverse<I> {
    source: Option<I>,
    buffer: VecDeque<Value>,
}

impl<I> Reverse<I>
where
    I: Iterator<Item = Value>,
{
    fn new(source: I) -> Self {
        Self {
            source: Some(source),
            buffer: VecDeque::new(),
        }
    }

    fn fill(&mut self) {
        if let Some(source) = self.source.take() {
            self.buffer = source.collect();
        }
    }
}

impl<I> Iterator for Reverse<I>
where
    I: Iterator<Item = Value>,
{
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.fill();
        self.buffer.pop_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => source.size_hint(),
            None => (self.buffer.len(), Some(self.buffer.len())),
        }
    }
}

impl<I> DoubleEndedIterator for Reverse<I>
where
    I: Iterator<Item = Value>,
{
    fn next_back(&mut self) -> Option<Value> {
        self.fill();
        self.buffer.pop_front()
    }
}
