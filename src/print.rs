use std::fmt::Arguments;
use std::io::{IsTerminal, Write};

/// 向标准错误打印一行，终端中以红色加粗显示。
pub(crate) fn eprintln_red(args: Arguments<'_>) {
    let stderr = std::io::stderr();
    let colored = stderr.is_terminal();
    let mut stderr = stderr.lock();
    // 标准错误不可写时无处报告
    let _ = if colored { writeln!(stderr, "\x1b[1;31m{args}\x1b[0m") } else { writeln!(stderr, "{args}") };
}

#[macro_export]
macro_rules! println_err {
    ($($arg:tt)*) => {
        $crate::print::eprintln_red(format_args!($($arg)*))
    };
}
