use crate::element::Element;
use crate::err::GpErr;
use crate::pipe::Source;
use std::fs::OpenOptions;
use std::io::Write;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Output {
    /// 输出到标准输出，未指定输出命令时的默认输出。
    StdOut,
    /// 输出到文件，`crlf`为`true`时以'CRLF'换行。
    File { file: String, append: bool, crlf: bool },
}

impl Output {
    pub(crate) fn new_std_out() -> Self {
        Output::StdOut
    }
    pub(crate) fn new_file(file: String, append: bool, crlf: bool) -> Self {
        Output::File { file, append, crlf }
    }

    pub(crate) fn all_help() -> &'static [&'static str] {
        &[
            "    :to out     输出到标准输出。\n\
             \x20               未指定输出命令时的默认输出。",
            "    :to file    输出到文件。\n\
             \x20               :to file <file_name>[ append][ lf|crlf]\n\
             \x20                   <file_name> 文件路径，必选。\n\
             \x20                   append      追加输出而不是覆盖，可选。\n\
             \x20                   lf|crlf     换行符，可选，默认为'LF'。",
        ]
    }

    /// 拉取`pipe`直到耗尽，逐个写出元素，遇到上游错误时中止。
    pub(crate) fn handle(self, mut pipe: impl Source<Element>) -> Result<(), GpErr> {
        match self {
            Output::StdOut => {
                for end in pipe.ends() {
                    println!("{}", end?);
                }
                Ok(())
            }
            Output::File { file, append, crlf } => {
                let mut writer = OpenOptions::new()
                    .write(true)
                    .truncate(!append)
                    .append(append)
                    .create(true)
                    .open(&file)
                    .map_err(|err| GpErr::OpenFileErr { file: file.clone(), err: err.to_string() })?;
                let ending = if crlf { "\r\n" } else { "\n" };
                for end in pipe.ends() {
                    let end = end?;
                    write!(writer, "{end}{ending}").map_err(|err| GpErr::WriteToFileErr {
                        file: file.clone(),
                        item: end.to_string(),
                        err: err.to_string(),
                    })?
                }
                Ok(())
            }
        }
    }
}
