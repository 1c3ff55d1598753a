//! 基于属性图的领域管道：顶点到边、边到顶点、按标签过滤等。

mod label;

use crate::err::GraphErr;
use crate::graph::{Direction, Edge, Graph, GraphElement, Value, Vertex};
use crate::pipe::{PipeRes, Source, Step, StepPipe};
use std::vec;

pub use label::{LabelFilter, LabelFilterPipe};

/// 顶点到关联边的展开
pub struct VertexEdges {
    direction: Direction,
    pending: vec::IntoIter<Edge>,
}

impl VertexEdges {
    pub fn new(direction: Direction) -> VertexEdges {
        VertexEdges { direction, pending: Vec::new().into_iter() }
    }
}

impl Step<Vertex, Edge> for VertexEdges {
    fn process_next_start(&mut self, starts: &mut dyn Source<Vertex>) -> PipeRes<Edge> {
        loop {
            if let Some(edge) = self.pending.next() {
                return Ok(edge);
            }
            self.pending = starts.next()?.edges(self.direction).into_iter();
        }
    }

    fn clear(&mut self) {
        self.pending = Vec::new().into_iter();
    }
}

pub type VertexEdgePipe = StepPipe<Vertex, Edge, VertexEdges>;

impl VertexEdgePipe {
    pub fn new(direction: Direction) -> VertexEdgePipe {
        StepPipe::from_step(VertexEdges::new(direction))
    }
}

/// 边到端点的转换，`Out`取起点，`In`取终点，`Both`依次取起点和终点。
pub struct EdgeVertices {
    direction: Direction,
    pending: Option<Vertex>,
}

impl EdgeVertices {
    pub fn new(direction: Direction) -> EdgeVertices {
        EdgeVertices { direction, pending: None }
    }
}

impl Step<Edge, Vertex> for EdgeVertices {
    fn process_next_start(&mut self, starts: &mut dyn Source<Edge>) -> PipeRes<Vertex> {
        if let Some(vertex) = self.pending.take() {
            return Ok(vertex);
        }
        let edge = starts.next()?;
        Ok(match self.direction {
            Direction::Out => edge.out_vertex(),
            Direction::In => edge.in_vertex(),
            Direction::Both => {
                self.pending = Some(edge.in_vertex());
                edge.out_vertex()
            }
        })
    }

    fn clear(&mut self) {
        self.pending = None;
    }
}

pub type EdgeVertexPipe = StepPipe<Edge, Vertex, EdgeVertices>;

impl EdgeVertexPipe {
    pub fn new(direction: Direction) -> EdgeVertexPipe {
        StepPipe::from_step(EdgeVertices::new(direction))
    }
}

/// 按ID查找顶点，顶点不存在时返回错误。
pub struct IdVertices {
    graph: Graph,
}

impl IdVertices {
    pub fn new(graph: Graph) -> IdVertices {
        IdVertices { graph }
    }
}

impl Step<String, Vertex> for IdVertices {
    fn process_next_start(&mut self, starts: &mut dyn Source<String>) -> PipeRes<Vertex> {
        let id = starts.next()?;
        Ok(self.graph.vertex(&id).ok_or(GraphErr::VertexNotFound(id))?)
    }
}

pub type IdVertexPipe = StepPipe<String, Vertex, IdVertices>;

impl IdVertexPipe {
    pub fn new(graph: Graph) -> IdVertexPipe {
        StepPipe::from_step(IdVertices::new(graph))
    }
}

/// 按ID查找边，边不存在时返回错误。
pub struct IdEdges {
    graph: Graph,
}

impl IdEdges {
    pub fn new(graph: Graph) -> IdEdges {
        IdEdges { graph }
    }
}

impl Step<String, Edge> for IdEdges {
    fn process_next_start(&mut self, starts: &mut dyn Source<String>) -> PipeRes<Edge> {
        let id = starts.next()?;
        Ok(self.graph.edge(&id).ok_or(GraphErr::EdgeNotFound(id))?)
    }
}

pub type IdEdgePipe = StepPipe<String, Edge, IdEdges>;

impl IdEdgePipe {
    pub fn new(graph: Graph) -> IdEdgePipe {
        StepPipe::from_step(IdEdges::new(graph))
    }
}

/// 取元素的属性值，跳过没有该属性的元素。
pub struct Property {
    key: String,
}

impl Property {
    pub fn new(key: impl Into<String>) -> Property {
        Property { key: key.into() }
    }
}

impl<T: GraphElement> Step<T, Value> for Property {
    fn process_next_start(&mut self, starts: &mut dyn Source<T>) -> PipeRes<Value> {
        loop {
            if let Some(value) = starts.next()?.property(&self.key) {
                return Ok(value);
            }
        }
    }
}

pub type PropertyPipe<T> = StepPipe<T, Value, Property>;

impl<T: GraphElement> PropertyPipe<T> {
    pub fn new(key: impl Into<String>) -> PropertyPipe<T> {
        StepPipe::from_step(Property::new(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::PipeErr;
    use crate::pipe::{Pipe, starts};
    use itertools::Itertools;

    fn ids<T: GraphElement>(source: &mut impl Source<T>) -> Vec<String> {
        source.ends().map_ok(|e| e.id()).collect::<PipeRes<Vec<_>>>().unwrap()
    }

    #[test]
    fn test_vertex_edge_pipe() {
        let graph = Graph::classic();
        let mut pipe = VertexEdgePipe::new(Direction::Out);
        pipe.set_starts(starts(graph.vertex("1")));
        assert_eq!(ids(&mut pipe), vec!["7", "8", "9"]);

        let mut pipe = VertexEdgePipe::new(Direction::In);
        pipe.set_starts(starts(vec![graph.vertex("3").unwrap(), graph.vertex("1").unwrap()]));
        assert_eq!(ids(&mut pipe), vec!["9", "11", "12"]);

        let mut pipe = VertexEdgePipe::new(Direction::Both);
        pipe.set_starts(starts(graph.vertex("4")));
        assert_eq!(ids(&mut pipe), vec!["10", "11", "8"]);
    }

    #[test]
    fn test_edge_vertex_pipe() {
        let graph = Graph::classic();
        let mut pipe = EdgeVertexPipe::new(Direction::In);
        pipe.set_starts(starts(graph.edges()));
        assert_eq!(ids(&mut pipe), vec!["2", "4", "3", "5", "3", "3"]);

        let mut pipe = EdgeVertexPipe::new(Direction::Both);
        pipe.set_starts(starts(graph.edge("10")));
        assert!(pipe.has_next());
        assert_eq!(ids(&mut pipe), vec!["4", "5"]);
    }

    #[test]
    fn test_id_vertex_pipe() {
        let graph = Graph::classic();
        let mut pipe = IdVertexPipe::new(graph.clone());
        pipe.set_starts(starts(vec!["6".to_owned(), "x".to_owned(), "2".to_owned()]));
        assert_eq!(pipe.next().map(|v| v.id()), Ok("6".to_owned()));
        assert_eq!(pipe.next(), Err(PipeErr::Graph(GraphErr::VertexNotFound("x".to_owned()))));
        assert_eq!(pipe.next().map(|v| v.id()), Ok("2".to_owned()));
        assert_eq!(pipe.next(), Err(PipeErr::NoSuchElement));

        let mut pipe = IdEdgePipe::new(graph);
        pipe.set_starts(starts(vec!["7".to_owned(), "1".to_owned()]));
        assert_eq!(pipe.next().map(|e| e.label()), Ok("knows".to_owned()));
        assert_eq!(pipe.next(), Err(PipeErr::Graph(GraphErr::EdgeNotFound("1".to_owned()))));
    }

    #[test]
    fn test_property_pipe() {
        let graph = Graph::classic();
        let mut pipe = PropertyPipe::new("age");
        pipe.set_starts(starts(graph.vertices()));
        assert_eq!(
            pipe.ends().collect::<PipeRes<Vec<_>>>(),
            Ok(vec![Value::Integer(29), Value::Integer(27), Value::Integer(32), Value::Integer(35)])
        );
    }
}
