//! 管道契约：按需拉取的元素源[`Source`]，以及可以注入起始序列的[`Pipe`]。

mod pipeline;
mod step;

use crate::err::PipeErr;
use std::iter::Peekable;

pub use pipeline::Pipeline;
pub use step::{Filter, FlatMap, Map, Step, StepPipe, filter, flat_map, map};

pub type PipeRes<T> = Result<T, PipeErr>;

/// 管道的起始序列，任何元素源都可以作为起始序列，包括另一个管道。
pub type Starts<S> = Box<dyn Source<S>>;

/// 元素源，惰性地逐个产生元素。
pub trait Source<E> {
    /// 是否还有下一个元素。
    ///
    /// 必要时向上游拉取并缓存一个前瞻元素，连续多次调用不会继续推进。
    fn has_next(&mut self) -> bool;

    /// 取出下一个元素，没有更多元素时返回[`PipeErr::NoSuchElement`]。
    fn next(&mut self) -> PipeRes<E>;

    /// 丢弃缓存的前瞻元素及内部状态，保留起始序列。
    fn reset(&mut self);

    /// 以迭代器的形式借用此元素源，迭代到`has_next`为`false`为止。
    fn ends(&mut self) -> Ends<'_, E>
    where
        Self: Sized,
    {
        Ends { source: self }
    }
}

/// 可以注入起始序列的元素源。
pub trait Pipe<S, E>: Source<E> {
    /// 注入或替换起始序列，同时清除缓存的前瞻元素和耗尽状态。
    fn set_starts(&mut self, starts: Starts<S>);
}

impl<E, T: Source<E> + ?Sized> Source<E> for Box<T> {
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> PipeRes<E> {
        (**self).next()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<S, E, T: Pipe<S, E> + ?Sized> Pipe<S, E> for Box<T> {
    fn set_starts(&mut self, starts: Starts<S>) {
        (**self).set_starts(starts)
    }
}

/// [`Source::ends`]返回的迭代器
pub struct Ends<'a, E> {
    source: &'a mut dyn Source<E>,
}

impl<E> Iterator for Ends<'_, E> {
    type Item = PipeRes<E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source.has_next() { Some(self.source.next()) } else { None }
    }
}

/// 从迭代器构造的起始序列
pub struct IterSource<I: Iterator> {
    iter: Peekable<I>,
}

impl<I: Iterator> Source<I::Item> for IterSource<I> {
    fn has_next(&mut self) -> bool {
        self.iter.peek().is_some()
    }

    fn next(&mut self) -> PipeRes<I::Item> {
        self.iter.next().ok_or(PipeErr::NoSuchElement)
    }

    // 外部注入的序列只能单次遍历，重置不影响它
    fn reset(&mut self) {}
}

/// 从可能失败的迭代器构造的起始序列，错误原样从`next`返回。
pub struct TrySource<I: Iterator> {
    iter: Peekable<I>,
}

impl<E, I: Iterator<Item = PipeRes<E>>> Source<E> for TrySource<I> {
    fn has_next(&mut self) -> bool {
        self.iter.peek().is_some()
    }

    fn next(&mut self) -> PipeRes<E> {
        self.iter.next().unwrap_or(Err(PipeErr::NoSuchElement))
    }

    fn reset(&mut self) {}
}

/// 将任意序列包装为起始序列。
pub fn starts<S, I>(iter: I) -> Starts<S>
where
    I: IntoIterator<Item = S>,
    I::IntoIter: 'static,
{
    Box::new(IterSource { iter: iter.into_iter().peekable() })
}

/// 将可能失败的序列包装为起始序列。
pub fn try_starts<S, I>(iter: I) -> Starts<S>
where
    I: IntoIterator<Item = PipeRes<S>>,
    I::IntoIter: 'static,
{
    Box::new(TrySource { iter: iter.into_iter().peekable() })
}
