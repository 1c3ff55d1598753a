use crate::graph::Direction;
use crate::op::Op;
use crate::parse::token::{ParserError, arg_exclude_cmd};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, space1};
use nom::combinator::{map, opt, value, verify};
use nom::error::context;
use nom::multi::many0;
use nom::sequence::{preceded, terminated};
use nom::{IResult, Parser};

pub(in crate::parse) type OpsResult<'a> = IResult<&'a str, Vec<Op>, ParserError<'a>>;
pub(in crate::parse) type OpResult<'a> = IResult<&'a str, Op, ParserError<'a>>;

pub(in crate::parse) fn parse_ops(input: &str) -> OpsResult<'_> {
    context("Op", many0(alt((parse_vertex_edge, parse_edge_vertex, parse_label, parse_prop)))).parse(input)
}

fn parse_vertex_edge(input: &str) -> OpResult<'_> {
    context(
        "Op::VertexEdge",
        map(
            terminated(
                alt((
                    value(Direction::Out, tag_no_case(":outE")),
                    value(Direction::In, tag_no_case(":inE")),
                    value(Direction::Both, tag_no_case(":bothE")),
                )),
                context("(trailing_space1)", space1),
            ),
            Op::VertexEdge,
        ),
    )
    .parse(input)
}

fn parse_edge_vertex(input: &str) -> OpResult<'_> {
    context(
        "Op::EdgeVertex",
        map(
            terminated(
                alt((
                    value(Direction::Out, tag_no_case(":outV")),
                    value(Direction::In, tag_no_case(":inV")),
                    value(Direction::Both, tag_no_case(":bothV")),
                )),
                context("(trailing_space1)", space1),
            ),
            Op::EdgeVertex,
        ),
    )
    .parse(input)
}

fn parse_label(input: &str) -> OpResult<'_> {
    context(
        "Op::Label",
        map(
            terminated(
                preceded(
                    (tag_no_case(":label"), space1), // 丢弃：命令和空格
                    (
                        opt(char('!')),
                        context(
                            "<labels>",
                            verify(arg_exclude_cmd, |labels: &String| labels.split(',').any(|l| !l.is_empty())),
                        ),
                        opt(preceded(space1, tag_no_case("nocase"))),
                    ),
                ),
                context("(trailing_space1)", space1),
            ),
            |(not, labels, nocase): (Option<char>, String, Option<&str>)| {
                let labels = labels.split(',').filter(|l| !l.is_empty()).map(String::from).collect();
                Op::new_label(labels, not.is_some(), nocase.is_some())
            },
        ),
    )
    .parse(input)
}

fn parse_prop(input: &str) -> OpResult<'_> {
    context(
        "Op::Prop",
        map(
            terminated(
                preceded((tag_no_case(":prop"), space1), context("<key>", arg_exclude_cmd)),
                context("(trailing_space1)", space1),
            ),
            Op::Prop,
        ),
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_parse_direction_ops() {
        assert_eq!(parse_vertex_edge(":outE "), Ok(("", Op::VertexEdge(Direction::Out))));
        assert_eq!(parse_vertex_edge(":bothe "), Ok(("", Op::VertexEdge(Direction::Both))));
        assert_eq!(parse_edge_vertex(":inV :outE "), Ok((":outE ", Op::EdgeVertex(Direction::In))));
        assert!(parse_vertex_edge(":outV ").is_err());
        assert!(parse_edge_vertex(":inVx ").is_err());
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(parse_label(":label created "), Ok(("", Op::new_label(labels(&["created"]), false, false))));
        assert_eq!(
            parse_label(":label !created,knows nocase "),
            Ok(("", Op::new_label(labels(&["created", "knows"]), true, true)))
        );
        assert_eq!(
            parse_label(":label knows :inV "),
            Ok((":inV ", Op::new_label(labels(&["knows"]), false, false)))
        );
        assert!(parse_label(":label ").is_err());
        assert!(parse_label(":label , ").is_err());
        assert!(parse_label(":label :inV ").is_err());
    }

    #[test]
    fn test_parse_ops() {
        assert_eq!(
            parse_ops(":outE :label knows :inV :prop name :to out "),
            Ok((
                ":to out ",
                vec![
                    Op::VertexEdge(Direction::Out),
                    Op::new_label(labels(&["knows"]), false, false),
                    Op::EdgeVertex(Direction::In),
                    Op::Prop("name".to_owned()),
                ]
            ))
        );
        assert_eq!(parse_ops(""), Ok(("", vec![])));
    }
}
