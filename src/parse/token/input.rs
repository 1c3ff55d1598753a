use crate::input::Input;
use crate::parse::token::{ParserError, arg_exclude_cmd};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::space1;
use nom::combinator::{map, success};
use nom::error::context;
use nom::multi::many0;
use nom::sequence::{preceded, terminated};
use nom::{IResult, Parser};

pub(in crate::parse) type InputResult<'a> = IResult<&'a str, Input, ParserError<'a>>;

pub(in crate::parse) fn parse_input(input: &str) -> InputResult<'_> {
    context(
        "Input",
        alt((
            parse_vertices,
            parse_edges,
            context("Input::Vertices", map(success(()), |_| Input::new_vertices(vec![]))), // 默认从所有顶点开始
        )),
    )
    .parse(input)
}

fn parse_vertices(input: &str) -> InputResult<'_> {
    context("Input::Vertices", map(cmd_ids(":v"), Input::new_vertices)).parse(input)
}

fn parse_edges(input: &str) -> InputResult<'_> {
    context("Input::Edges", map(cmd_ids(":e"), Input::new_edges)).parse(input)
}

/// `cmd[ <id>...] `
fn cmd_ids<'a>(cmd: &'static str) -> impl Parser<&'a str, Output = Vec<String>, Error = ParserError<'a>> {
    terminated(
        preceded(tag_no_case(cmd), many0(preceded(space1, arg_exclude_cmd))), // 命令及ID
        context("(trailing_space1)", space1),                                // 丢弃：结尾空格
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input(":v "), Ok(("", Input::new_vertices(vec![]))));
        assert_eq!(parse_input(":v 1 4 :outE "), Ok((":outE ", Input::new_vertices(ids(&["1", "4"])))));
        assert_eq!(parse_input(":E 7  "), Ok(("", Input::new_edges(ids(&["7"])))));
        assert_eq!(parse_input(":e ':x' "), Ok(("", Input::new_edges(ids(&[":x"])))));
        assert_eq!(parse_input(":outE "), Ok((":outE ", Input::new_vertices(vec![]))));
        assert_eq!(parse_input(""), Ok(("", Input::new_vertices(vec![]))));
    }
}
