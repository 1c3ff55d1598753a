use crate::config::{Config, is_nocase};
use crate::element::{Element, Kind, erase};
use crate::err::GpErr;
use crate::graph::{Direction, Edge, Value, Vertex};
use crate::pgm::{EdgeVertices, LabelFilter, Property, VertexEdges};
use crate::pipe::Pipe;

#[derive(Debug, PartialEq)]
pub(crate) enum Op {
    /// :outE|:inE|:bothE   顶点到出边、入边或全部关联边。
    VertexEdge(Direction),
    /// :outV|:inV|:bothV   边到起点、终点或两个端点。
    EdgeVertex(Direction),
    /// :label      按标签选择顶点或边。
    ///             :label [!]<label>[,<label>...][ nocase]
    Label { labels: Vec<String>, negate: bool, nocase: bool },
    /// :prop       取顶点或边的属性值，跳过没有该属性的元素。
    ///             :prop <key>
    Prop(String),
}

type Wrapped = (Box<dyn Pipe<Element, Element>>, Kind);

impl Op {
    pub(crate) fn new_label(labels: Vec<String>, negate: bool, nocase: bool) -> Op {
        Op::Label { labels, negate, nocase }
    }

    pub(crate) fn all_help() -> &'static [&'static str] {
        &[
            "    :outE|:inE|:bothE   顶点到出边、入边或全部关联边，全部关联边时先出边后入边。",
            "    :outV|:inV|:bothV   边到起点、终点或两个端点，两个端点时先起点后终点。",
            "    :label      按标签选择顶点或边。\n\
             \x20               :label [!]<label>[,<label>...][ nocase]\n\
             \x20                   !       选择标签不在列表中的元素，可选。\n\
             \x20                   nocase  忽略大小写，可选。",
            "    :prop       取顶点或边的属性值，跳过没有该属性的元素。\n\
             \x20               :prop <key>",
        ]
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Op::VertexEdge(Direction::Out) => ":outE",
            Op::VertexEdge(Direction::In) => ":inE",
            Op::VertexEdge(Direction::Both) => ":bothE",
            Op::EdgeVertex(Direction::Out) => ":outV",
            Op::EdgeVertex(Direction::In) => ":inV",
            Op::EdgeVertex(Direction::Both) => ":bothV",
            Op::Label { .. } => ":label",
            Op::Prop(_) => ":prop",
        }
    }

    fn mismatch(&self, expected: &'static str, found: Kind) -> GpErr {
        GpErr::KindMismatch { cmd: self.name(), expected, found }
    }

    /// 校验上一级输出的元素类型，构造本级管道并返回本级输出的元素类型。
    pub(crate) fn wrap(self, input: Kind, configs: &[Config]) -> Result<Wrapped, GpErr> {
        match self {
            Op::VertexEdge(direction) => match input {
                Kind::Vertex => Ok((Box::new(erase(VertexEdges::new(direction))), Kind::Edge)),
                found => Err(self.mismatch("vertex", found)),
            },
            Op::EdgeVertex(direction) => match input {
                Kind::Edge => Ok((Box::new(erase(EdgeVertices::new(direction))), Kind::Vertex)),
                found => Err(self.mismatch("edge", found)),
            },
            Op::Label { ref labels, negate, nocase } => {
                let filter = LabelFilter::new(labels.iter().cloned(), negate, is_nocase(nocase, configs));
                match input {
                    Kind::Vertex => Ok((Box::new(erase::<Vertex, Vertex, _>(filter)), Kind::Vertex)),
                    Kind::Edge => Ok((Box::new(erase::<Edge, Edge, _>(filter)), Kind::Edge)),
                    found => Err(self.mismatch("vertex or edge", found)),
                }
            }
            Op::Prop(ref key) => match input {
                Kind::Vertex => Ok((Box::new(erase::<Vertex, Value, _>(Property::new(key.as_str()))), Kind::Value)),
                Kind::Edge => Ok((Box::new(erase::<Edge, Value, _>(Property::new(key.as_str()))), Kind::Value)),
                found => Err(self.mismatch("vertex or edge", found)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_kinds() {
        let configs: Vec<Config> = vec![];
        assert_eq!(Op::VertexEdge(Direction::Out).wrap(Kind::Vertex, &configs).map(|(_, kind)| kind), Ok(Kind::Edge));
        assert_eq!(Op::EdgeVertex(Direction::In).wrap(Kind::Edge, &configs).map(|(_, kind)| kind), Ok(Kind::Vertex));
        assert_eq!(
            Op::new_label(vec!["knows".to_owned()], false, false).wrap(Kind::Edge, &configs).map(|(_, kind)| kind),
            Ok(Kind::Edge)
        );
        assert_eq!(Op::Prop("name".to_owned()).wrap(Kind::Vertex, &configs).map(|(_, kind)| kind), Ok(Kind::Value));
    }

    #[test]
    fn test_wrap_mismatch() {
        let configs: Vec<Config> = vec![];
        assert_eq!(
            Op::EdgeVertex(Direction::In).wrap(Kind::Vertex, &configs).map(|(_, kind)| kind),
            Err(GpErr::KindMismatch { cmd: ":inV", expected: "edge", found: Kind::Vertex })
        );
        assert_eq!(
            Op::Prop("name".to_owned()).wrap(Kind::Value, &configs).map(|(_, kind)| kind),
            Err(GpErr::KindMismatch { cmd: ":prop", expected: "vertex or edge", found: Kind::Value })
        );
    }
}
