//! # valley-descent
//! Fixed-step gradient descent on the Rosenbrock valley, written as a
//! StreamingIterator so that observing a run (numbering, thinning,
//! costing, printing) is done by composing adaptors around it rather
//! than by editing the loop.
//!
//! ```
//! use ndarray::arr1;
//! use valley_descent::derivative_descent::run;
//! use valley_descent::surface::Rosenbrock;
//!
//! let surface = Rosenbrock::default();
//! let trajectory = run(surface.gradient_fn(), 0.001, 100, arr1(&[-2.0, 2.0]).view());
//! assert_eq!(trajectory.len(), 100);
//! assert_eq!(trajectory.point(0), arr1(&[-2.0, 2.0]));
//! ```
#[cfg(test)]
extern crate quickcheck;

use streaming_iterator::*;

pub mod config;
pub mod derivative_descent;
pub mod error;
pub mod output;
pub mod surface;
pub mod trajectory;
pub mod utils;

pub use error::Error;

/// Annotate the underlying items with a cost (lower is better) as
/// given by a function.
pub struct CostIterable<I, F, T>
where
    I: StreamingIterator<Item = T>,
{
    it: I,
    f: F,
    last: Option<CostResult<T>>,
}

/// An item together with its cost.
#[derive(Clone, Debug)]
pub struct CostResult<T> {
    pub result: T,
    pub cost: f64,
}

pub fn assess<I, F, T>(it: I, f: F) -> CostIterable<I, F, T>
where
    I: StreamingIterator<Item = T>,
    F: FnMut(&I::Item) -> f64,
{
    CostIterable { it, f, last: None }
}

impl<I, F, T> StreamingIterator for CostIterable<I, F, T>
where
    I: StreamingIterator<Item = T>,
    T: Sized + Clone,
    F: FnMut(&T) -> f64,
{
    type Item = CostResult<T>;

    fn advance(&mut self) {
        self.it.advance();
        self.last = match self.it.get() {
            Some(n) => {
                let cost = (self.f)(n);
                Some(CostResult {
                    cost,
                    result: n.clone(),
                })
            }
            None => None,
        }
    }

    fn get(&self) -> Option<&Self::Item> {
        self.last.as_ref()
    }
}

/// Pass the values from the streaming iterator through, running a
/// function on each for side effects.
pub struct Tee<I, F> {
    pub it: I,
    pub f: F,
}

pub fn tee<I, F, T>(it: I, f: F) -> Tee<I, F>
where
    I: Sized + StreamingIterator<Item = T>,
    F: FnMut(&T),
{
    Tee { it, f }
}

impl<I, F> StreamingIterator for Tee<I, F>
where
    I: StreamingIterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) {
        // The side effect happens exactly once for each new value
        // generated.
        self.it.advance();
        if let Some(x) = self.it.get() {
            (self.f)(x);
        }
    }

    #[inline]
    fn get(&self) -> Option<&I::Item> {
        self.it.get()
    }
}

/// An item with its position in the stream, starting at 0.
#[derive(Clone, Debug, PartialEq)]
pub struct Numbered<T> {
    pub count: usize,
    pub item: T,
}

/// Number the items of a streaming iterator. Needed before `step_by`
/// whenever the iteration index of the surviving items matters.
pub struct Enumerate<I, T> {
    it: I,
    count: usize,
    current: Option<Numbered<T>>,
}

pub fn enumerate<I, T>(it: I) -> Enumerate<I, T>
where
    I: StreamingIterator<Item = T>,
{
    Enumerate {
        it,
        count: 0,
        current: None,
    }
}

impl<I, T> StreamingIterator for Enumerate<I, T>
where
    I: StreamingIterator<Item = T>,
    T: Clone,
{
    type Item = Numbered<T>;

    fn advance(&mut self) {
        self.it.advance();
        self.current = match self.it.get() {
            Some(item) => {
                let numbered = Numbered {
                    count: self.count,
                    item: item.clone(),
                };
                self.count += 1;
                Some(numbered)
            }
            None => None,
        }
    }

    fn get(&self) -> Option<&Self::Item> {
        self.current.as_ref()
    }
}

/// The final item of a streaming iterator, if it produced any.
pub fn last<I, T>(it: I) -> Option<T>
where
    I: StreamingIterator<Item = T>,
    T: Sized + Clone,
{
    it.fold(None, |_acc, i| Some((*i).clone()))
}

/// Adapt StreamingIterator to only return values every 'step' number of times.
///
/// This is a StreamingIterator version of Iterator::step_by
///(https://doc.rust-lang.org/std/iter/trait.Iterator.html#method.step_by)
///
/// Items 0, step, 2 * step, ... are returned. A trailing partial step
/// is dropped, so the final iterate of a run may not be seen.
pub struct StepBy<I> {
    it: I,
    step: usize,
    first_take: bool,
}

pub fn step_by<I, T>(it: I, step: usize) -> StepBy<I>
where
    I: Sized + StreamingIterator<Item = T>,
{
    assert!(step != 0);
    StepBy {
        it,
        step: step - 1,
        first_take: true,
    }
}

impl<I> StreamingIterator for StepBy<I>
where
    I: StreamingIterator,
{
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) {
        if self.first_take {
            self.first_take = false;
            self.it.advance();
        } else {
            self.it.nth(self.step);
        }
    }

    #[inline]
    fn get(&self) -> Option<&I::Item> {
        self.it.get()
    }
}

/// Unit Tests Module
#[cfg(test)]
mod tests {

    use super::*;
    use quickcheck::{quickcheck, TestResult};

    quickcheck! {
        /// step_by visits exactly the multiples of the step.
        fn prop_step_by(len: u8, step: u8) -> TestResult {
            if step == 0 {
                return TestResult::discard();
            }
            let v: Vec<usize> = (0..len as usize).collect();
            let mut iter = step_by(convert(v), step as usize);
            let mut seen = Vec::new();
            while let Some(x) = iter.next() {
                seen.push(*x);
            }
            let expected: Vec<usize> = (0..len as usize).step_by(step as usize).collect();
            TestResult::from_bool(seen == expected)
        }
    }

    #[test]
    fn test_last() {
        let v = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let iter = convert(v);
        assert_eq!(last(iter), Some(9));
    }

    #[test]
    fn test_last_empty() {
        let v: Vec<u32> = vec![];
        assert_eq!(last(convert(v)), None);
    }

    #[test]
    fn step_by_test() {
        let v = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let iter = convert(v);
        let mut iter = step_by(iter, 3);
        let mut _index = 0i64;
        while let Some(element) = iter.next() {
            assert_eq!(*element, _index * 3);
            _index = _index + 1;
        }
        assert_eq!(_index, 4);
    }

    #[test]
    #[should_panic]
    fn step_by_zero_panics() {
        step_by(convert(vec![1, 2, 3]), 0);
    }

    #[test]
    fn enumerate_then_step_by_keeps_positions() {
        let v = vec![10., 11., 12., 13., 14., 15., 16.];
        let mut iter = step_by(enumerate(convert(v)), 2);
        let mut counts = Vec::new();
        while let Some(Numbered { count, item }) = iter.next() {
            assert_eq!(*item, 10. + *count as f64);
            counts.push(*count);
        }
        assert_eq!(counts, vec![0, 2, 4, 6]);
    }

    #[test]
    fn assess_annotates_every_item() {
        let v = vec![1.0, -2.0, 3.0];
        let mut iter = assess(convert(v), |x: &f64| x * x);
        let mut costs = Vec::new();
        while let Some(CostResult { result, cost }) = iter.next() {
            assert_eq!(*cost, result * result);
            costs.push(*cost);
        }
        assert_eq!(costs, vec![1.0, 4.0, 9.0]);
    }

    #[test]
    fn tee_sees_each_item_once() {
        let v = vec![1, 2, 3, 4];
        let mut seen = Vec::new();
        {
            let mut iter = tee(convert(v), |x: &i32| seen.push(*x));
            while let Some(_x) = iter.next() {}
        }
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }
}
