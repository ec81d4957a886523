//! Browser console output. Native builds format the message and drop it.

#[derive(Debug, Clone, Copy)]
pub(crate) enum Level {
    Info,
    Warn,
}

#[cfg(target_family = "wasm")]
pub(crate) fn emit(level: Level, message: &str) {
    let value = wasm_bindgen::JsValue::from_str(message);
    match level {
        Level::Info => web_sys::console::info_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
    }
}

#[cfg(not(target_family = "wasm"))]
pub(crate) fn emit(_level: Level, _message: &str) {}

macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::diag::emit($crate::diag::Level::Warn, &format!($($arg)*))
    };
}

macro_rules! console_info {
    ($($arg:tt)*) => {
        $crate::diag::emit($crate::diag::Level::Info, &format!($($arg)*))
    };
}

#[allow(unused_imports)]
pub(crate) use {console_info, console_warn};
