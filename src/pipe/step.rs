use crate::err::PipeErr;
use crate::pipe::{Pipe, PipeRes, Source, Starts};
use std::marker::PhantomData;
use std::mem;
use tracing::trace;

/// 单级管道的处理逻辑。
pub trait Step<S, E> {
    /// 从上游拉取所需数量的元素，计算出下一个输出元素。
    ///
    /// 上游耗尽时返回[`PipeErr::NoSuchElement`]，其他错误原样返回。
    fn process_next_start(&mut self, starts: &mut dyn Source<S>) -> PipeRes<E>;

    /// 丢弃在多次调用之间保留的部分状态，例如尚未输出完的展开结果。
    fn clear(&mut self) {}
}

/// 前瞻状态
#[derive(Debug)]
enum Lookahead<E> {
    Empty,
    Ready(E),
    Failed(PipeErr),
    Exhausted,
}

/// 基于[`Step`]的单级管道，负责前瞻缓存和耗尽状态。
pub struct StepPipe<S, E, T> {
    step: T,
    starts: Option<Starts<S>>,
    lookahead: Lookahead<E>,
}

impl<S, E, T: Step<S, E>> StepPipe<S, E, T> {
    pub fn from_step(step: T) -> StepPipe<S, E, T> {
        StepPipe { step, starts: None, lookahead: Lookahead::Empty }
    }

    /// 前瞻状态为空时计算下一个元素，最多计算一次。
    fn fill(&mut self) {
        if !matches!(self.lookahead, Lookahead::Empty) {
            return;
        }
        // 未注入起始序列时视为耗尽
        let Some(starts) = self.starts.as_mut() else {
            self.lookahead = Lookahead::Exhausted;
            return;
        };
        self.lookahead = match self.step.process_next_start(starts.as_mut()) {
            Ok(end) => Lookahead::Ready(end),
            Err(err) if err.is_exhausted() => {
                trace!(step = std::any::type_name::<T>(), "exhausted");
                Lookahead::Exhausted
            }
            Err(err) => Lookahead::Failed(err),
        };
    }
}

impl<S, E, T: Step<S, E>> Source<E> for StepPipe<S, E, T> {
    fn has_next(&mut self) -> bool {
        self.fill();
        !matches!(self.lookahead, Lookahead::Exhausted)
    }

    fn next(&mut self) -> PipeRes<E> {
        self.fill();
        match mem::replace(&mut self.lookahead, Lookahead::Empty) {
            Lookahead::Ready(end) => Ok(end),
            Lookahead::Failed(err) => Err(err),
            Lookahead::Empty | Lookahead::Exhausted => {
                self.lookahead = Lookahead::Exhausted;
                Err(PipeErr::NoSuchElement)
            }
        }
    }

    fn reset(&mut self) {
        self.lookahead = Lookahead::Empty;
        self.step.clear();
        if let Some(starts) = self.starts.as_mut() {
            starts.reset();
        }
    }
}

impl<S, E, T: Step<S, E>> Pipe<S, E> for StepPipe<S, E, T> {
    fn set_starts(&mut self, starts: Starts<S>) {
        self.starts = Some(starts);
        self.lookahead = Lookahead::Empty;
    }
}

/// 一对一转换
pub struct Map<F, S> {
    f: F,
    _start: PhantomData<fn(S)>,
}

impl<S, E, F: FnMut(S) -> E> Step<S, E> for Map<F, S> {
    fn process_next_start(&mut self, starts: &mut dyn Source<S>) -> PipeRes<E> {
        starts.next().map(&mut self.f)
    }
}

/// 过滤，持续拉取上游直到找到满足条件的元素或上游耗尽。
pub struct Filter<F> {
    f: F,
}

impl<S, F: FnMut(&S) -> bool> Step<S, S> for Filter<F> {
    fn process_next_start(&mut self, starts: &mut dyn Source<S>) -> PipeRes<S> {
        loop {
            let start = starts.next()?;
            if (self.f)(&start) {
                return Ok(start);
            }
        }
    }
}

/// 一对多展开，当前元素的展开结果输出完之后才拉取下一个上游元素。
pub struct FlatMap<F, S, I: IntoIterator> {
    f: F,
    pending: Option<I::IntoIter>,
    _start: PhantomData<fn(S)>,
}

impl<S, I: IntoIterator, F: FnMut(S) -> I> Step<S, I::Item> for FlatMap<F, S, I> {
    fn process_next_start(&mut self, starts: &mut dyn Source<S>) -> PipeRes<I::Item> {
        loop {
            if let Some(end) = self.pending.as_mut().and_then(Iterator::next) {
                return Ok(end);
            }
            self.pending = Some((self.f)(starts.next()?).into_iter());
        }
    }

    fn clear(&mut self) {
        self.pending = None;
    }
}

pub fn map<S, E, F: FnMut(S) -> E>(f: F) -> StepPipe<S, E, Map<F, S>> {
    StepPipe::from_step(Map { f, _start: PhantomData })
}

pub fn filter<S, F: FnMut(&S) -> bool>(f: F) -> StepPipe<S, S, Filter<F>> {
    StepPipe::from_step(Filter { f })
}

pub fn flat_map<S, I: IntoIterator, F: FnMut(S) -> I>(f: F) -> StepPipe<S, I::Item, FlatMap<F, S, I>> {
    StepPipe::from_step(FlatMap { f, pending: None, _start: PhantomData })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::GraphErr;
    use crate::pipe::{starts, try_starts};
    use std::cell::Cell;
    use std::rc::Rc;

    /// 记录上游被拉取的次数
    fn counted(values: Vec<i32>, pulls: Rc<Cell<usize>>) -> Starts<i32> {
        starts(values.into_iter().inspect(move |_| pulls.set(pulls.get() + 1)))
    }

    #[test]
    fn test_has_next_is_idempotent() {
        let pulls = Rc::new(Cell::new(0));
        let mut pipe = map(|i: i32| i * 10);
        pipe.set_starts(counted(vec![1, 2, 3], pulls.clone()));
        for _ in 0..5 {
            assert!(pipe.has_next());
        }
        assert_eq!(pulls.get(), 1);
        assert_eq!(pipe.next(), Ok(10));
        assert_eq!(pipe.next(), Ok(20));
        assert_eq!(pipe.next(), Ok(30));
        assert!(!pipe.has_next());
    }

    #[test]
    fn test_next_without_has_next() {
        let mut pipe = filter(|i: &i32| i % 2 == 0);
        pipe.set_starts(starts(1..=6));
        assert_eq!(pipe.next(), Ok(2));
        assert_eq!(pipe.next(), Ok(4));
        assert_eq!(pipe.next(), Ok(6));
        assert_eq!(pipe.next(), Err(PipeErr::NoSuchElement));
    }

    #[test]
    fn test_exhaustion_is_sticky() {
        let mut pipe = map(|i: i32| i + 1);
        pipe.set_starts(starts(vec![1]));
        assert_eq!(pipe.next(), Ok(2));
        for _ in 0..3 {
            assert!(!pipe.has_next());
            assert_eq!(pipe.next(), Err(PipeErr::NoSuchElement));
        }
        pipe.set_starts(starts(vec![5]));
        assert!(pipe.has_next());
        assert_eq!(pipe.next(), Ok(6));
    }

    #[test]
    fn test_without_starts() {
        let mut pipe = map(|i: i32| i);
        assert!(!pipe.has_next());
        assert_eq!(pipe.next(), Err(PipeErr::NoSuchElement));
    }

    #[test]
    fn test_flat_map_order() {
        let mut pipe = flat_map(|i: usize| vec![i; i]);
        pipe.set_starts(starts(vec![1, 0, 3, 2]));
        assert_eq!(pipe.ends().collect::<PipeRes<Vec<_>>>(), Ok(vec![1, 3, 3, 3, 2, 2]));
    }

    #[test]
    fn test_set_starts_keeps_pending_batch() {
        let mut pipe = flat_map(|i: i32| vec![i, i]);
        pipe.set_starts(starts(vec![1, 2]));
        assert_eq!(pipe.next(), Ok(1));
        pipe.set_starts(starts(vec![3]));
        assert_eq!(pipe.ends().collect::<PipeRes<Vec<_>>>(), Ok(vec![1, 3, 3]));
    }

    #[test]
    fn test_reset_drops_pending_batch() {
        let mut pipe = flat_map(|i: i32| vec![i, i]);
        pipe.set_starts(starts(vec![1, 2]));
        assert_eq!(pipe.next(), Ok(1));
        pipe.reset();
        assert_eq!(pipe.ends().collect::<PipeRes<Vec<_>>>(), Ok(vec![2, 2]));
    }

    #[test]
    fn test_upstream_error_passes_through() {
        let err = PipeErr::from(GraphErr::VertexNotFound("7".to_owned()));
        let mut pipe = map(|i: i32| i * 2);
        pipe.set_starts(try_starts(vec![Ok(1), Err(err.clone()), Ok(3)]));
        assert_eq!(pipe.next(), Ok(2));
        assert!(pipe.has_next());
        assert!(pipe.has_next());
        assert_eq!(pipe.next(), Err(err));
        assert_eq!(pipe.next(), Ok(6));
        assert!(!pipe.has_next());
    }
}
