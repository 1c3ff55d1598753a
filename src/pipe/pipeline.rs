use crate::pipe::{Pipe, PipeRes, Source, Starts};
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;
use tracing::debug;

/// 首级管道，由流水线和第二级管道共同持有。
trait Head<S> {
    fn set_starts(&mut self, starts: Starts<S>);
    fn reset(&mut self);
}

struct HeadStage<P, S, E> {
    pipe: P,
    _marker: PhantomData<fn(S) -> E>,
}

impl<S, E, P: Pipe<S, E>> Head<S> for HeadStage<P, S, E> {
    fn set_starts(&mut self, starts: Starts<S>) {
        self.pipe.set_starts(starts)
    }

    fn reset(&mut self) {
        self.pipe.reset()
    }
}

/// 第二级管道看到的首级管道
struct Linked<P, S, E>(Rc<RefCell<HeadStage<P, S, E>>>);

impl<S, E, P: Pipe<S, E>> Source<E> for Linked<P, S, E> {
    fn has_next(&mut self) -> bool {
        self.0.borrow_mut().pipe.has_next()
    }

    fn next(&mut self) -> PipeRes<E> {
        self.0.borrow_mut().pipe.next()
    }

    // 首级管道只由流水线自身重置
    fn reset(&mut self) {}
}

/// 由多级管道串联而成的流水线，本身也是一个管道。
///
/// 第`k+1`级管道的起始序列是第`k`级管道本身，注入起始序列只影响第一级。
pub struct Pipeline<S, E> {
    head: Rc<RefCell<dyn Head<S>>>,
    last: Starts<E>,
    stages: usize,
}

impl<S: 'static, E: 'static> Pipeline<S, E> {
    /// 以单个管道构造流水线，行为与该管道相同。
    pub fn new<P>(first: P) -> Pipeline<S, E>
    where
        P: Pipe<S, E> + 'static,
    {
        let head = Rc::new(RefCell::new(HeadStage { pipe: first, _marker: PhantomData }));
        Pipeline { head: head.clone(), last: Box::new(Linked(head)), stages: 1 }
    }

    /// 在末尾追加一级管道，相邻两级的元素类型由编译器保证一致。
    pub fn then<F, P>(self, mut pipe: P) -> Pipeline<S, F>
    where
        F: 'static,
        P: Pipe<E, F> + 'static,
    {
        pipe.set_starts(self.last);
        Pipeline { head: self.head, last: Box::new(pipe), stages: self.stages + 1 }
    }

    /// 管道级数
    pub fn stages(&self) -> usize {
        self.stages
    }
}

impl<T: 'static> Pipeline<T, T> {
    /// 串联同类型的一组管道，没有管道时返回`None`。
    pub fn from_pipes(pipes: Vec<Box<dyn Pipe<T, T>>>) -> Option<Pipeline<T, T>> {
        let mut pipes = pipes.into_iter();
        let first = pipes.next()?;
        Some(pipes.fold(Pipeline::new(first), |pipeline, pipe| pipeline.then(pipe)))
    }
}

impl<S, E> Source<E> for Pipeline<S, E> {
    fn has_next(&mut self) -> bool {
        self.last.has_next()
    }

    fn next(&mut self) -> PipeRes<E> {
        self.last.next()
    }

    fn reset(&mut self) {
        debug!(stages = self.stages, "reset pipeline");
        self.last.reset();
        self.head.borrow_mut().reset();
    }
}

impl<S, E> Pipe<S, E> for Pipeline<S, E> {
    fn set_starts(&mut self, starts: Starts<S>) {
        debug!(stages = self.stages, "set starts");
        self.head.borrow_mut().set_starts(starts);
        // 后续各级可能还缓存着上一次的前瞻元素
        self.last.reset();
    }
}
