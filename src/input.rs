use crate::element::{Element, Kind, erase};
use crate::graph::{Graph, GraphElement};
use crate::pgm::{IdEdges, IdVertices};
use crate::pipe::{Pipe, Starts, starts};

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Input {
    /// 顶点：`:v[ <id>...]`，未指定ID时为所有顶点
    Vertices { ids: Vec<String> },
    /// 边：`:e[ <id>...]`，未指定ID时为所有边
    Edges { ids: Vec<String> },
}

impl Input {
    pub(crate) fn new_vertices(ids: Vec<String>) -> Input {
        Input::Vertices { ids }
    }
    pub(crate) fn new_edges(ids: Vec<String>) -> Input {
        Input::Edges { ids }
    }

    pub(crate) fn all_help() -> &'static [&'static str] {
        &[
            "    :v          从顶点开始，未指定起始命令时默认从所有顶点开始。\n\
             \x20               :v[ <id>[ ...]]\n\
             \x20                   <id>    顶点ID，可选，未指定则为所有顶点。",
            "    :e          从边开始。\n\
             \x20               :e[ <id>[ ...]]\n\
             \x20                   <id>    边ID，可选，未指定则为所有边。",
        ]
    }

    /// 返回起始ID序列、按ID查找元素的第一级管道，以及该管道输出的元素类型。
    pub(crate) fn pipe(self, graph: &Graph) -> (Starts<Element>, Box<dyn Pipe<Element, Element>>, Kind) {
        match self {
            Input::Vertices { ids } => {
                let ids = if ids.is_empty() { graph.vertices().iter().map(GraphElement::id).collect() } else { ids };
                (starts(ids.into_iter().map(Element::Id)), Box::new(erase(IdVertices::new(graph.clone()))), Kind::Vertex)
            }
            Input::Edges { ids } => {
                let ids = if ids.is_empty() { graph.edges().iter().map(GraphElement::id).collect() } else { ids };
                (starts(ids.into_iter().map(Element::Id)), Box::new(erase(IdEdges::new(graph.clone()))), Kind::Edge)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::{GraphErr, PipeErr};
    use crate::pipe::{PipeRes, Source};

    fn drive(input: Input) -> PipeRes<Vec<String>> {
        let (starts, mut pipe, _) = input.pipe(&Graph::classic());
        pipe.set_starts(starts);
        pipe.ends().map(|end| end.map(|e| e.to_string())).collect()
    }

    #[test]
    fn test_input_pipe() {
        assert_eq!(drive(Input::new_vertices(vec![])).map(|ends| ends.len()), Ok(6));
        assert_eq!(drive(Input::new_vertices(vec!["4".to_owned()])), Ok(vec!["v[4]".to_owned()]));
        assert_eq!(drive(Input::new_edges(vec![])).map(|ends| ends.len()), Ok(6));
        assert_eq!(drive(Input::new_edges(vec!["9".to_owned()])), Ok(vec!["e[9][1-created->3]".to_owned()]));
        assert_eq!(
            drive(Input::new_vertices(vec!["0".to_owned()])),
            Err(PipeErr::Graph(GraphErr::VertexNotFound("0".to_owned())))
        );
    }
}
