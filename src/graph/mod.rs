//! 内存属性图：顶点、边以及它们的属性，供领域管道遍历。

mod classic;

use crate::err::GraphErr;
use crate::{Float, Integer};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;

/// 属性值
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(Integer),
    Float(Float),
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{text}"),
            Value::Integer(integer) => write!(f, "{integer}"),
            Value::Float(float) => write!(f, "{float}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Value {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Value {
        Value::Text(text)
    }
}

impl From<Integer> for Value {
    fn from(integer: Integer) -> Value {
        Value::Integer(integer)
    }
}

impl From<Float> for Value {
    fn from(float: Float) -> Value {
        Value::Float(float)
    }
}

/// 边相对于顶点的方向
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Out,
    In,
    Both,
}

/// 顶点和边的公共访问接口
pub trait GraphElement {
    fn id(&self) -> String;
    fn label(&self) -> String;
    fn property(&self, key: &str) -> Option<Value>;
}

#[derive(Debug)]
struct VertexData {
    id: String,
    label: String,
    properties: Vec<(String, Value)>,
    out_edges: Vec<usize>,
    in_edges: Vec<usize>,
}

#[derive(Debug)]
struct EdgeData {
    id: String,
    label: String,
    out_vertex: usize,
    in_vertex: usize,
    properties: Vec<(String, Value)>,
}

#[derive(Debug, Default)]
struct GraphData {
    vertices: Vec<VertexData>,
    edges: Vec<EdgeData>,
    vertex_index: HashMap<String, usize>,
    edge_index: HashMap<String, usize>,
}

impl GraphData {
    fn insert_vertex(&mut self, id: String, label: String) -> usize {
        let index = self.vertices.len();
        self.vertex_index.insert(id.clone(), index);
        self.vertices.push(VertexData { id, label, properties: Vec::new(), out_edges: Vec::new(), in_edges: Vec::new() });
        index
    }

    fn insert_edge(&mut self, id: String, out_vertex: usize, in_vertex: usize, label: String) -> usize {
        let index = self.edges.len();
        self.edge_index.insert(id.clone(), index);
        self.edges.push(EdgeData { id, label, out_vertex, in_vertex, properties: Vec::new() });
        self.vertices[out_vertex].out_edges.push(index);
        self.vertices[in_vertex].in_edges.push(index);
        index
    }

    fn index_of_vertex(&self, id: &str) -> Result<usize, GraphErr> {
        self.vertex_index.get(id).copied().ok_or_else(|| GraphErr::VertexNotFound(id.to_owned()))
    }
}

fn set_property(properties: &mut Vec<(String, Value)>, key: String, value: Value) {
    match properties.iter_mut().find(|(k, _)| *k == key) {
        Some((_, old)) => *old = value,
        None => properties.push((key, value)),
    }
}

fn get_property(properties: &[(String, Value)], key: &str) -> Option<Value> {
    properties.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

/// 属性图，克隆得到的是同一张图的另一个句柄。
#[derive(Debug, Clone, Default)]
pub struct Graph {
    data: Rc<RefCell<GraphData>>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    pub fn add_vertex(&self, id: impl Into<String>, label: impl Into<String>) -> Result<Vertex, GraphErr> {
        let id = id.into();
        let mut data = self.data.borrow_mut();
        if data.vertex_index.contains_key(&id) {
            return Err(GraphErr::DuplicateVertex(id));
        }
        let index = data.insert_vertex(id, label.into());
        Ok(Vertex { graph: self.data.clone(), index })
    }

    /// 添加一条从`out_id`指向`in_id`的边。
    pub fn add_edge(
        &self, id: impl Into<String>, out_id: &str, in_id: &str, label: impl Into<String>,
    ) -> Result<Edge, GraphErr> {
        let id = id.into();
        let mut data = self.data.borrow_mut();
        if data.edge_index.contains_key(&id) {
            return Err(GraphErr::DuplicateEdge(id));
        }
        let out_vertex = data.index_of_vertex(out_id)?;
        let in_vertex = data.index_of_vertex(in_id)?;
        let index = data.insert_edge(id, out_vertex, in_vertex, label.into());
        Ok(Edge { graph: self.data.clone(), index })
    }

    pub fn vertex(&self, id: &str) -> Option<Vertex> {
        let index = *self.data.borrow().vertex_index.get(id)?;
        Some(Vertex { graph: self.data.clone(), index })
    }

    pub fn edge(&self, id: &str) -> Option<Edge> {
        let index = *self.data.borrow().edge_index.get(id)?;
        Some(Edge { graph: self.data.clone(), index })
    }

    /// 按添加顺序返回所有顶点
    pub fn vertices(&self) -> Vec<Vertex> {
        (0..self.data.borrow().vertices.len()).map(|index| Vertex { graph: self.data.clone(), index }).collect()
    }

    /// 按添加顺序返回所有边
    pub fn edges(&self) -> Vec<Edge> {
        (0..self.data.borrow().edges.len()).map(|index| Edge { graph: self.data.clone(), index }).collect()
    }
}

/// 顶点句柄
#[derive(Clone)]
pub struct Vertex {
    graph: Rc<RefCell<GraphData>>,
    index: usize,
}

impl Vertex {
    /// 按方向返回关联的边，`Both`时先出边后入边。
    pub fn edges(&self, direction: Direction) -> Vec<Edge> {
        let data = self.graph.borrow();
        let vertex = &data.vertices[self.index];
        let indexes = match direction {
            Direction::Out => vertex.out_edges.clone(),
            Direction::In => vertex.in_edges.clone(),
            Direction::Both => vertex.out_edges.iter().chain(&vertex.in_edges).copied().collect(),
        };
        indexes.into_iter().map(|index| Edge { graph: self.graph.clone(), index }).collect()
    }

    pub fn out_edges(&self) -> Vec<Edge> {
        self.edges(Direction::Out)
    }

    pub fn in_edges(&self) -> Vec<Edge> {
        self.edges(Direction::In)
    }

    pub fn set_property(&self, key: impl Into<String>, value: impl Into<Value>) {
        set_property(&mut self.graph.borrow_mut().vertices[self.index].properties, key.into(), value.into())
    }
}

impl GraphElement for Vertex {
    fn id(&self) -> String {
        self.graph.borrow().vertices[self.index].id.clone()
    }

    fn label(&self) -> String {
        self.graph.borrow().vertices[self.index].label.clone()
    }

    fn property(&self, key: &str) -> Option<Value> {
        get_property(&self.graph.borrow().vertices[self.index].properties, key)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.graph, &other.graph) && self.index == other.index
    }
}

impl Eq for Vertex {}

impl Display for Vertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "v[{}]", self.id())
    }
}

impl Debug for Vertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// 边句柄
#[derive(Clone)]
pub struct Edge {
    graph: Rc<RefCell<GraphData>>,
    index: usize,
}

impl Edge {
    /// 边的起点
    pub fn out_vertex(&self) -> Vertex {
        let index = self.graph.borrow().edges[self.index].out_vertex;
        Vertex { graph: self.graph.clone(), index }
    }

    /// 边的终点
    pub fn in_vertex(&self) -> Vertex {
        let index = self.graph.borrow().edges[self.index].in_vertex;
        Vertex { graph: self.graph.clone(), index }
    }

    pub fn set_property(&self, key: impl Into<String>, value: impl Into<Value>) {
        set_property(&mut self.graph.borrow_mut().edges[self.index].properties, key.into(), value.into())
    }
}

impl GraphElement for Edge {
    fn id(&self) -> String {
        self.graph.borrow().edges[self.index].id.clone()
    }

    fn label(&self) -> String {
        self.graph.borrow().edges[self.index].label.clone()
    }

    fn property(&self, key: &str) -> Option<Value> {
        get_property(&self.graph.borrow().edges[self.index].properties, key)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.graph, &other.graph) && self.index == other.index
    }
}

impl Eq for Edge {}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "e[{}][{}-{}->{}]", self.id(), self.out_vertex().id(), self.label(), self.in_vertex().id())
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
