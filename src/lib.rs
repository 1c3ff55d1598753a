//! 惰性、按需拉取的管道引擎，以及基于属性图的遍历管道。
//!
//! 每个管道都是一个元素源：下游拉取时才向上游拉取，[`pipe::Pipeline`]本身也是一个管道，可以继续组合。

use crate::config::Config;
use crate::err::GpErr;
use crate::graph::Graph;
use crate::pipe::{Pipe, Pipeline};
use std::iter::Peekable;
use tracing::debug;

mod config;
pub mod element;
pub mod err;
pub mod graph;
mod help;
mod input;
mod op;
mod output;
mod parse;
pub mod pgm;
pub mod pipe;
pub(crate) mod print;

/// 整数属性值类型
pub type Integer = i64;
/// 浮点属性值类型
pub type Float = f64;

pub fn run(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(), GpErr> {
    let configs = parse::args::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        help::print_help(args.next());
        return Ok(());
    } else if configs.contains(&Config::Version) {
        help::print_version();
        return Ok(());
    }
    config::init_tracing(&configs);
    let token = parse::args::join_args(args);
    debug!(token = token.as_str(), "parse token");
    let (input, ops, output) = parse::parse(&token)?;
    if configs.contains(&Config::Verbose) {
        config::print_pipe_info(&input, &ops, &output);
    }

    let graph = Graph::classic();
    let (starts, first, mut kind) = input.pipe(&graph);
    let mut pipeline = Pipeline::new(first);
    for op in ops {
        let name = op.name();
        let (pipe, produced) = op.wrap(kind, &configs)?;
        debug!(cmd = name, from = %kind, to = %produced, "wrap op");
        pipeline = pipeline.then(pipe);
        kind = produced;
    }
    pipeline.set_starts(starts);
    if configs.contains(&Config::DryRun) { Ok(()) } else { output.handle(pipeline) }
}
