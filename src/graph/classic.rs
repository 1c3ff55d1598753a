use crate::graph::{Graph, GraphData, Value};

impl Graph {
    /// 经典示例图：
    ///
    /// ```text
    /// 1 marko  -knows(0.5)->   2 vadas
    /// 1 marko  -knows(1.0)->   4 josh
    /// 1 marko  -created(0.4)-> 3 lop
    /// 4 josh   -created(1.0)-> 5 ripple
    /// 4 josh   -created(0.4)-> 3 lop
    /// 6 peter  -created(0.2)-> 3 lop
    /// ```
    pub fn classic() -> Graph {
        let mut data = GraphData::default();
        for (id, label, name, extra) in [
            ("1", "person", "marko", ("age", Value::Integer(29))),
            ("2", "person", "vadas", ("age", Value::Integer(27))),
            ("3", "software", "lop", ("lang", Value::from("java"))),
            ("4", "person", "josh", ("age", Value::Integer(32))),
            ("5", "software", "ripple", ("lang", Value::from("java"))),
            ("6", "person", "peter", ("age", Value::Integer(35))),
        ] {
            let index = data.insert_vertex(id.to_owned(), label.to_owned());
            let properties = &mut data.vertices[index].properties;
            properties.push(("name".to_owned(), Value::from(name)));
            properties.push((extra.0.to_owned(), extra.1));
        }
        for (id, out_vertex, label, in_vertex, weight) in [
            ("7", 0, "knows", 1, 0.5),
            ("8", 0, "knows", 3, 1.0),
            ("9", 0, "created", 2, 0.4),
            ("10", 3, "created", 4, 1.0),
            ("11", 3, "created", 2, 0.4),
            ("12", 5, "created", 2, 0.2),
        ] {
            let index = data.insert_edge(id.to_owned(), out_vertex, in_vertex, label.to_owned());
            data.edges[index].properties.push(("weight".to_owned(), Value::Float(weight)));
        }
        Graph { data: std::rc::Rc::new(std::cell::RefCell::new(data)) }
    }
}
