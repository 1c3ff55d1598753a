use crate::graph::GraphElement;
use crate::pipe::{PipeRes, Source, Step, StepPipe};
use unicase::UniCase;

/// 按标签过滤
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFilter {
    labels: Vec<String>,
    negate: bool,
    nocase: bool,
}

#[inline]
fn with_not(res: bool, not: bool) -> bool {
    if not { !res } else { res }
}

impl LabelFilter {
    /// `negate`为`true`时保留标签不在`labels`中的元素。
    pub fn new(labels: impl IntoIterator<Item = impl Into<String>>, negate: bool, nocase: bool) -> LabelFilter {
        LabelFilter { labels: labels.into_iter().map(Into::into).collect(), negate, nocase }
    }

    pub fn test(&self, label: &str) -> bool {
        let found = if self.nocase {
            let label = UniCase::new(label);
            self.labels.iter().any(|l| UniCase::new(l.as_str()) == label)
        } else {
            self.labels.iter().any(|l| l == label)
        };
        with_not(found, self.negate)
    }
}

impl<T: GraphElement> Step<T, T> for LabelFilter {
    fn process_next_start(&mut self, starts: &mut dyn Source<T>) -> PipeRes<T> {
        loop {
            let start = starts.next()?;
            if self.test(&start.label()) {
                return Ok(start);
            }
        }
    }
}

pub type LabelFilterPipe<T> = StepPipe<T, T, LabelFilter>;

impl<T: GraphElement> LabelFilterPipe<T> {
    pub fn new(labels: impl IntoIterator<Item = impl Into<String>>, negate: bool) -> LabelFilterPipe<T> {
        StepPipe::from_step(LabelFilter::new(labels, negate, false))
    }

    /// 忽略大小写比较标签
    pub fn nocase(labels: impl IntoIterator<Item = impl Into<String>>, negate: bool) -> LabelFilterPipe<T> {
        StepPipe::from_step(LabelFilter::new(labels, negate, true))
    }
}
