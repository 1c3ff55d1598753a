use crate::output::Output;
use crate::parse::token::{ParserError, arg};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::space1;
use nom::combinator::{map, opt, success};
use nom::error::context;
use nom::sequence::{preceded, terminated};
use nom::{IResult, Parser};

pub(in crate::parse) type OutputResult<'a> = IResult<&'a str, Output, ParserError<'a>>;

pub(in crate::parse) fn parse_out(input: &str) -> OutputResult<'_> {
    context(
        "Output",
        alt((
            parse_to_std_out,
            parse_to_file,
            context("Output::StdOut", map(success(()), |_| Output::new_std_out())), // 最后默认使用`Output::StdOut`
        )),
    )
    .parse(input)
}

fn parse_to_std_out(input: &str) -> OutputResult<'_> {
    context(
        "Output::StdOut",
        map((tag_no_case(":to"), space1, tag_no_case("out"), space1), |_| Output::new_std_out()),
    )
    .parse(input)
}

fn parse_to_file(input: &str) -> OutputResult<'_> {
    context(
        "Output::File",
        map(
            terminated(
                preceded(
                    (tag_no_case(":to"), space1, tag_no_case("file"), space1), // 命令
                    (
                        context("<file_name>", arg),
                        opt(preceded(space1, tag_no_case("append"))),
                        opt(preceded(space1, alt((tag_no_case("lf"), tag_no_case("crlf"))))),
                    ),
                ),
                context("(trailing_space1)", space1),
            ),
            |(file, append, ending): (String, Option<&str>, Option<&str>)| {
                Output::new_file(file, append.is_some(), ending.is_some_and(|e| e.eq_ignore_ascii_case("crlf")))
            },
        ),
    )
    .parse(input)
}
