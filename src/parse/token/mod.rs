mod input;
mod op;
mod output;

use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::parse::token::input::parse_input;
use crate::parse::token::op::parse_ops;
use crate::parse::token::output::parse_out;
use nom::branch::alt;
use nom::bytes::complete::{escaped_transform, take_while};
use nom::character::complete::{anychar, char, none_of};
use nom::combinator::{map, not, opt, recognize, verify};
use nom::error::context;
use nom::multi::fold_many1;
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};
use nom_language::error::VerboseError;

/// 解析错误的类型
pub(crate) type ParserError<'a> = VerboseError<&'a str>;

/// 从令牌文本中依次解析出`(Input, Vec<Op>, Output)`，每个命令及参数都以空白结尾。
pub(in crate::parse) fn parse_chain(token: &str) -> IResult<&str, (Input, Vec<Op>, Output), ParserError<'_>> {
    (parse_input, parse_ops, parse_out).parse(token)
}

/// 按照类PosixShell的规则解析单个参数，由以下片段首尾相连组成：
///  - 普通片段：反斜杠转义下一个字符，遇到空白或引号时结束；
///  - 单引号片段：原样保留引号内的内容；
///  - 双引号片段：反斜杠转义下一个字符。
pub(in crate::parse) fn arg(input: &str) -> IResult<&str, String, ParserError<'_>> {
    context(
        "<arg>",
        fold_many1(alt((bare_part, single_quoted_part, double_quoted_part)), String::new, |mut acc, part| {
            acc.push_str(&part);
            acc
        }),
    )
    .parse(input)
}

fn bare_part(input: &str) -> IResult<&str, String, ParserError<'_>> {
    verify(
        escaped_transform(none_of(" \t\\\"'"), '\\', recognize(anychar)),
        |part: &String| !part.is_empty(), // 空片段会让外层fold_many1无法推进
    )
    .parse(input)
}

fn single_quoted_part(input: &str) -> IResult<&str, String, ParserError<'_>> {
    map(delimited(char('\''), take_while(|c: char| c != '\''), char('\'')), String::from).parse(input)
}

fn double_quoted_part(input: &str) -> IResult<&str, String, ParserError<'_>> {
    map(
        delimited(
            char('"'),
            // `""`时内部没有内容
            opt(escaped_transform(none_of("\\\""), '\\', recognize(anychar))),
            char('"'),
        ),
        Option::unwrap_or_default,
    )
    .parse(input)
}

/// 解析不以`:`开头的参数，以`:`开头的是下一个命令。
pub(in crate::parse) fn arg_exclude_cmd(input: &str) -> IResult<&str, String, ParserError<'_>> {
    preceded(not(char(':')), arg).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg() {
        assert_eq!(arg("abc "), Ok((" ", "abc".to_owned())));
        assert_eq!(arg("'a b' "), Ok((" ", "a b".to_owned())));
        assert_eq!(arg(r#""it's" "#), Ok((" ", "it's".to_owned())));
        assert_eq!(arg("'' "), Ok((" ", "".to_owned())));
        assert_eq!(arg(r#""" "#), Ok((" ", "".to_owned())));
        assert_eq!(arg("a'b c'd "), Ok((" ", "ab cd".to_owned())));
        assert_eq!(arg(r"it\'s\ here "), Ok((" ", "it's here".to_owned())));
        assert_eq!(arg(r#""say \"hi\"" "#), Ok((" ", r#"say "hi""#.to_owned())));
        assert_eq!(arg(r"'it'\''s' "), Ok((" ", "it's".to_owned())));
        assert_eq!(arg(r"'C:\dir' "), Ok((" ", r"C:\dir".to_owned())));
        assert!(arg(" ").is_err());
        assert!(arg("").is_err());
        assert!(arg("'abc").is_err());
        assert!(arg(r#""abc "#).is_err());
    }

    #[test]
    fn test_arg_exclude_cmd() {
        assert_eq!(arg_exclude_cmd("1 "), Ok((" ", "1".to_owned())));
        assert_eq!(arg_exclude_cmd("':outE' "), Ok((" ", ":outE".to_owned())));
        assert!(arg_exclude_cmd(":outE ").is_err());
    }
}
