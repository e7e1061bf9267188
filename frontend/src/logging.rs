/// 安装 panic hook 与 `console_log` 日志后端
///
/// 可重复调用，重复初始化日志后端的错误被忽略。
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
