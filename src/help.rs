use crate::config::Config;
use crate::err::GpErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;

/// 一个帮助主题
struct Section {
    /// 可以在`-h <topic>`中使用的名称
    names: &'static [&'static str],
    title: &'static str,
    items: Vec<String>,
}

impl Section {
    fn new(names: &'static [&'static str], title: &'static str, items: &[&str]) -> Section {
        Section { names, title, items: items.iter().map(|item| item.to_string()).collect() }
    }

    fn print(&self) {
        println!("\n{}", self.title);
        self.items.iter().for_each(|item| println!("{item}"));
    }
}

fn sections() -> Vec<Section> {
    let codes = GpErr::all_help().into_iter().map(|(code, help)| format!("    {code:<4}{help}")).collect();
    vec![
        Section::new(&["opt", "options"], "<options> 选项：", Config::all_help()),
        Section::new(&["in", "input"], "<input_cmd> 起始元素命令：", Input::all_help()),
        Section::new(&["op"], "<op_cmd> 元素操作命令：", Op::all_help()),
        Section::new(&["out", "output"], "<output_cmd> 元素输出命令：", Output::all_help()),
        Section { names: &["code"], title: "命令退出码：", items: codes },
    ]
}

/// 未指定主题时选择全部主题，主题名称不区分大小写。
fn select(topic: Option<&str>) -> Vec<Section> {
    let topic = topic.map(str::to_ascii_lowercase);
    sections()
        .into_iter()
        .filter(|section| topic.as_deref().is_none_or(|topic| section.names.contains(&topic)))
        .collect()
}

pub(crate) fn print_version() {
    println!("gp (graph pipe) - {} - {}", env!("CARGO_PKG_VERSION"), env!("BUILD_TIME"));
}

pub(crate) fn print_help(topic: Option<String>) {
    print_version();
    println!("\n{}", env!("CARGO_PKG_DESCRIPTION"));
    println!("\nUsage: gp [<options>] [<input_cmd>] [<op_cmd>[ ...]] [<output_cmd>]");
    select(topic.as_deref()).iter().for_each(Section::print);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(topic: Option<&str>) -> Vec<&'static str> {
        select(topic).iter().map(|section| section.title).collect()
    }

    #[test]
    fn test_select() {
        assert_eq!(titles(None).len(), 5);
        assert_eq!(titles(Some("OP")), vec!["<op_cmd> 元素操作命令："]);
        assert_eq!(titles(Some("in")), titles(Some("input")));
        assert!(titles(Some("fmt")).is_empty());
        assert!(select(Some("code"))[0].items.iter().any(|item| item.contains("图访问失败")));
    }
}
