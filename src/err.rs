use crate::element::Kind;
use thiserror::Error;

/// 图模型错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphErr {
    #[error("[Graph] Vertex `{0}` already exists")]
    DuplicateVertex(String),

    #[error("[Graph] Edge `{0}` already exists")]
    DuplicateEdge(String),

    #[error("[Graph] Vertex `{0}` not found")]
    VertexNotFound(String),

    #[error("[Graph] Edge `{0}` not found")]
    EdgeNotFound(String),
}

/// 管道错误，除了`NoSuchElement`以外都是从上游原样传递的错误。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipeErr {
    #[error("[Pipe] No more elements")]
    NoSuchElement,

    #[error(transparent)]
    Graph(#[from] GraphErr),

    #[error("[Pipe] Expected {expected} but got {found}")]
    KindMismatch { expected: Kind, found: Kind },
}

impl PipeErr {
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, PipeErr::NoSuchElement)
    }
}

/// 命令行错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GpErr {
    #[error("[Token] Invalid args: {0}")]
    ParseTokenErr(String),

    #[error("[Bad Arg] Unexpected remaining value `{remaining}`")]
    UnexpectedRemaining { remaining: String },

    #[error("[Chain] Cmd `{cmd}` expects {expected} but the previous cmd produces {found}")]
    KindMismatch { cmd: &'static str, expected: &'static str, found: Kind },

    #[error("[Output] Unable to open file `{file}`, error: {err}")]
    OpenFileErr { file: String, err: String },

    #[error("[Output] Unable to write `{item}` to file `{file}`, error: {err}")]
    WriteToFileErr { file: String, item: String, err: String },

    #[error(transparent)]
    Pipe(#[from] PipeErr),
}

impl From<GraphErr> for GpErr {
    fn from(err: GraphErr) -> Self {
        GpErr::Pipe(PipeErr::Graph(err))
    }
}

impl GpErr {
    /// 命令退出码
    pub fn code(&self) -> i32 {
        match self {
            GpErr::ParseTokenErr(_) => 1,
            GpErr::UnexpectedRemaining { .. } => 2,
            GpErr::KindMismatch { .. } => 3,
            GpErr::OpenFileErr { .. } => 4,
            GpErr::WriteToFileErr { .. } => 5,
            GpErr::Pipe(PipeErr::NoSuchElement) => 6,
            GpErr::Pipe(PipeErr::Graph(_)) => 7,
            GpErr::Pipe(PipeErr::KindMismatch { .. }) => 8,
        }
    }

    pub fn termination(&self) -> ! {
        crate::println_err!("{self}");
        std::process::exit(self.code())
    }

    pub(crate) fn all_help() -> Vec<(i32, &'static str)> {
        vec![
            (1, "令牌解析失败"),
            (2, "令牌解析后存在剩余内容"),
            (3, "相邻命令的元素类型不匹配"),
            (4, "无法打开输出文件"),
            (5, "无法写入输出文件"),
            (6, "没有更多元素"),
            (7, "图访问失败，例如顶点不存在"),
            (8, "运行时元素类型不匹配"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_graph_err_passes_through() {
        let err = PipeErr::from(GraphErr::VertexNotFound("42".to_owned()));
        assert_eq!(err.to_string(), "[Graph] Vertex `42` not found");
        assert!(!err.is_exhausted());
        assert!(PipeErr::NoSuchElement.is_exhausted());
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = GpErr::all_help().into_iter().map(|(code, _)| code).collect::<Vec<_>>();
        assert!(codes.iter().all_unique());
        assert_eq!(GpErr::from(GraphErr::VertexNotFound("x".to_owned())).code(), 7);
    }
}
