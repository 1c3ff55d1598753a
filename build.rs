use time::OffsetDateTime;
use time::macros::format_description;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // 供`gp --version`通过`env!("BUILD_TIME")`读取
    println!("cargo:rustc-env=BUILD_TIME={}", build_time());
}

/// 构建时间，无法取得本地时区时使用UTC时间
fn build_time() -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let formatted = match OffsetDateTime::now_local() {
        Ok(local) => local.format(format),
        Err(_) => OffsetDateTime::now_utc().format(format).map(|utc| format!("{utc} (UTC)")),
    };
    formatted.unwrap_or_else(|_| "unknown-build-time".to_owned())
}
