use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Config {
    /// -V,--version    打印版本信息。
    Version,
    /// -h,--help       打印帮助信息。
    Help,
    /// -v,--verbose    执行之前打印流水线详情，并输出调试日志。
    Verbose,
    /// -d,--dry-run    仅解析并组装流水线，不执行。
    DryRun,
    /// -n,--nocase     全局忽略大小写。
    Nocase,
}

impl Config {
    pub(crate) fn all_help() -> &'static [&'static str] {
        &[
            "    -V,--version    打印版本信息。",
            "    -h,--help       打印帮助信息。\n\
             \x20               -h|--help[ options|input|op|output|code]\n\
             \x20                   未指定则打印全部帮助信息。",
            "    -v,--verbose    执行之前打印流水线详情，并输出调试日志。",
            "    -d,--dry-run    仅解析并组装流水线，不执行。",
            "    -n,--nocase     全局忽略大小写。",
        ]
    }
}

#[inline]
pub(crate) fn is_nocase(nocase: bool, configs: &[Config]) -> bool {
    nocase || configs.contains(&Config::Nocase)
}

pub(crate) fn print_pipe_info(input: &Input, ops: &[Op], output: &Output) {
    println!("Input:");
    println!("    {:?}", input);
    println!("Op:");
    println!("{}", ops.iter().map(|op| format!("    {:?}", op)).join("\n"));
    println!("Output:");
    println!("    {:?}", output);
}

/// 初始化日志，输出到标准错误。优先使用`RUST_LOG`，否则`--verbose`时为`debug`级别，默认为`warn`级别。
pub(crate) fn init_tracing(configs: &[Config]) {
    let level = if configs.contains(&Config::Verbose) { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // 重复初始化时保留已有的订阅者
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_nocase() {
        assert!(is_nocase(true, &[]));
        assert!(!is_nocase(false, &[Config::Verbose]));
        assert!(is_nocase(false, &[Config::DryRun, Config::Nocase]));
    }
}
