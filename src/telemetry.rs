pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

/// Declared least to most severe; the derived order drives filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Level-gated emitter of one-line JSON events.
#[derive(Clone, Copy, Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_LEVEL)
    }
}

impl Logger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn event(&self, level: LogLevel, event: &str, fields: serde_json::Value) {
        if let Some(line) = self.render(level, event, fields) {
            emit(level, &line);
        }
    }

    fn render(&self, level: LogLevel, event: &str, fields: serde_json::Value) -> Option<String> {
        if !self.enabled(level) {
            return None;
        }

        let mut payload = serde_json::Map::new();
        payload.insert("ts".to_string(), timestamp());
        payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
        payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

        if let serde_json::Value::Object(extra) = fields {
            for (key, value) in extra {
                payload.insert(key, value);
            }
        }

        Some(serde_json::Value::Object(payload).to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn timestamp() -> serde_json::Value {
    serde_json::Number::from_f64(js_sys::Date::now())
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

#[cfg(not(target_arch = "wasm32"))]
fn timestamp() -> serde_json::Value {
    use std::time::{SystemTime, UNIX_EPOCH};

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0);
    serde_json::Value::Number(serde_json::Number::from(millis))
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}

/// Styled greeting printed to the devtools console on mount.
pub const CONSOLE_BANNER: [(&str, &str); 3] = [
    ("嗨！歡迎來到我的網站！🚀", "font-size: 24px; font-weight: bold; color: #6366f1;"),
    ("如果你對程式碼感興趣，歡迎聯繫我！", "font-size: 14px; color: #64748b;"),
    ("📧 simon@bochengsu.com", "font-size: 12px; color: #06b6d4;"),
];

#[cfg(target_arch = "wasm32")]
pub fn print_banner() {
    for (text, style) in CONSOLE_BANNER {
        web_sys::console::log_2(
            &wasm_bindgen::JsValue::from_str(&format!("%c{text}")),
            &wasm_bindgen::JsValue::from_str(style),
        );
    }
}
