//! 类型擦除的元素流：组合时校验相邻两级的元素类型，运行时统一以[`Element`]传递。

use crate::err::PipeErr;
use crate::graph::{Edge, Value, Vertex};
use crate::pipe::{PipeRes, Source, Step, StepPipe};
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

/// 元素类型
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Kind {
    Id,
    Vertex,
    Edge,
    Value,
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Kind::Id => "id",
            Kind::Vertex => "vertex",
            Kind::Edge => "edge",
            Kind::Value => "value",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Id(String),
    Vertex(Vertex),
    Edge(Edge),
    Value(Value),
}

impl Element {
    pub fn kind(&self) -> Kind {
        match self {
            Element::Id(_) => Kind::Id,
            Element::Vertex(_) => Kind::Vertex,
            Element::Edge(_) => Kind::Edge,
            Element::Value(_) => Kind::Value,
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Id(id) => write!(f, "{id}"),
            Element::Vertex(vertex) => write!(f, "{vertex}"),
            Element::Edge(edge) => write!(f, "{edge}"),
            Element::Value(value) => write!(f, "{value}"),
        }
    }
}

macro_rules! element_kind {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Element {
            fn from(value: $ty) -> Element {
                Element::$variant(value)
            }
        }

        impl TryFrom<Element> for $ty {
            type Error = PipeErr;

            fn try_from(element: Element) -> Result<$ty, PipeErr> {
                match element {
                    Element::$variant(value) => Ok(value),
                    other => Err(PipeErr::KindMismatch { expected: Kind::$variant, found: other.kind() }),
                }
            }
        }
    };
}

element_kind!(String, Id);
element_kind!(Vertex, Vertex);
element_kind!(Edge, Edge);
element_kind!(Value, Value);

/// 将类型化的[`Step`]包装为以[`Element`]为输入输出的处理逻辑。
pub struct Erased<T, S, E> {
    step: T,
    _marker: PhantomData<fn(S) -> E>,
}

/// 以类型化的视角读取元素流
struct Narrow<'a, S> {
    source: &'a mut dyn Source<Element>,
    _start: PhantomData<fn() -> S>,
}

impl<S: TryFrom<Element, Error = PipeErr>> Source<S> for Narrow<'_, S> {
    fn has_next(&mut self) -> bool {
        self.source.has_next()
    }

    fn next(&mut self) -> PipeRes<S> {
        self.source.next()?.try_into()
    }

    fn reset(&mut self) {
        self.source.reset()
    }
}

impl<S, E, T> Step<Element, Element> for Erased<T, S, E>
where
    T: Step<S, E>,
    S: TryFrom<Element, Error = PipeErr>,
    E: Into<Element>,
{
    fn process_next_start(&mut self, starts: &mut dyn Source<Element>) -> PipeRes<Element> {
        let mut narrow = Narrow { source: starts, _start: PhantomData };
        self.step.process_next_start(&mut narrow).map(Into::into)
    }

    fn clear(&mut self) {
        self.step.clear()
    }
}

pub type ErasedPipe<T, S, E> = StepPipe<Element, Element, Erased<T, S, E>>;

/// 擦除`step`的输入输出类型，输入元素类型不符时返回[`PipeErr::KindMismatch`]。
pub fn erase<S, E, T>(step: T) -> ErasedPipe<T, S, E>
where
    T: Step<S, E>,
    S: TryFrom<Element, Error = PipeErr>,
    E: Into<Element>,
{
    StepPipe::from_step(Erased { step, _marker: PhantomData })
}
