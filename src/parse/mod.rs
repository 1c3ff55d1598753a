//! 命令行解析：先解析选项，再将其余参数拼接为令牌文本，用`nom`解析出`(Input, Vec<Op>, Output)`。

pub(crate) mod args;
pub(crate) mod token;

use crate::err::GpErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use nom_language::error::convert_error;

/// 解析令牌文本，解析后不允许有剩余内容。
pub(crate) fn parse(token: &str) -> Result<(Input, Vec<Op>, Output), GpErr> {
    let token = token.trim_start();
    match token::parse_chain(token) {
        Ok((remaining, res)) => {
            if remaining.trim().is_empty() {
                Ok(res)
            } else {
                Err(GpErr::UnexpectedRemaining { remaining: remaining.trim_end().to_owned() })
            }
        }
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => Err(GpErr::ParseTokenErr(convert_error(token, err))),
        Err(nom::Err::Incomplete(_)) => Err(GpErr::ParseTokenErr("incomplete token".to_owned())),
    }
}
