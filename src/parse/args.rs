use crate::config::Config;
use itertools::Itertools;
use std::iter::Peekable;

pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Vec<Config> {
    let mut configs = Vec::new();
    while let Some(config) = parse_config(args.peek()) {
        args.next();
        configs.push(config);
    }
    configs
}

fn parse_config(arg: Option<&String>) -> Option<Config> {
    match arg?.as_str() {
        "-h" | "--help" => Some(Config::Help),
        "-V" | "--version" => Some(Config::Version),
        "-v" | "--verbose" => Some(Config::Verbose),
        "-d" | "--dry-run" => Some(Config::DryRun),
        "-n" | "--nocase" => Some(Config::Nocase),
        _ => None, // 遇到未知参数，停止解析
    }
}

/// 将剩余参数拼接为令牌文本，每个参数以空格结尾。
pub(crate) fn join_args(args: impl Iterator<Item = String>) -> String {
    args.map(quote).map(|arg| arg + " ").join("")
}

/// 含空白、引号或反斜杠的参数用单引号包围，内部的单引号写作`'\''`，保证解析后仍是原来的单个参数。
fn quote(arg: String) -> String {
    if !arg.is_empty() && !arg.contains(|c: char| c.is_whitespace() || matches!(c, '\'' | '"' | '\\')) {
        arg
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Peekable<impl Iterator<Item = String>> {
        args.iter().map(|arg| arg.to_string()).collect::<Vec<_>>().into_iter().peekable()
    }

    #[test]
    fn test_parse_configs() {
        let mut iter = args(&["-v", "--nocase", ":v", "-d"]);
        assert_eq!(parse_configs(&mut iter), vec![Config::Verbose, Config::Nocase]);
        assert_eq!(iter.next(), Some(":v".to_owned()));
        assert!(parse_configs(&mut args(&[])).is_empty());
    }

    #[test]
    fn test_join_args() {
        assert_eq!(join_args(args(&[])), "");
        assert_eq!(join_args(args(&[":v", "1", ":outE"])), ":v 1 :outE ");
        assert_eq!(join_args(args(&[":to", "file", "a b.txt"])), ":to file 'a b.txt' ");
        assert_eq!(join_args(args(&["it's here"])), r"'it'\''s here' ");
        assert_eq!(join_args(args(&[""])), "'' ");
    }
}
