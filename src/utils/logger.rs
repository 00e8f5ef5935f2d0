use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::Once;
use std::sync::OnceLock;

// 전역 로거 인스턴스를 저장할 정적 변수
static LOGGER: OnceLock<Mutex<Option<File>>> = OnceLock::new();
static INIT: Once = Once::new();

/// Console logger that mirrors every line into a per-run log file once
/// [`Logger::init`] has been called. Before that, messages only reach the
/// console.
pub struct Logger;

impl Logger {
    pub fn init(log_path: &Path) {
        INIT.call_once(|| {
            // 디렉토리가 없으면 생성
            let log_dir = log_path.parent().unwrap_or_else(|| Path::new("."));
            if !log_dir.as_os_str().is_empty() && !log_dir.exists() {
                if let Err(e) = fs::create_dir_all(log_dir) {
                    eprintln!("로그 디렉토리를 생성할 수 없습니다: {e}");
                    LOGGER.get_or_init(|| Mutex::new(None));
                    return;
                }
            }

            // 로그 파일 열기
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(log_path);

            match file {
                Ok(file) => {
                    println!("로그를 '{}'에 저장합니다.", log_path.display());
                    LOGGER.get_or_init(|| Mutex::new(Some(file)));
                }
                Err(e) => {
                    eprintln!("로그 파일을 열 수 없습니다: {e}");
                    LOGGER.get_or_init(|| Mutex::new(None));
                }
            }
        });
    }

    pub fn log(message: &str) {
        // 콘솔에 출력
        println!("{message}");
        Self::write_to_file("", message);
    }

    pub fn log_error(message: &str) {
        // 콘솔에 에러 출력
        eprintln!("{message}");
        Self::write_to_file("ERROR: ", message);
    }

    fn write_to_file(prefix: &str, message: &str) {
        if let Some(logger) = LOGGER.get() {
            if let Ok(mut file_guard) = logger.lock() {
                if let Some(file) = file_guard.as_mut() {
                    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
                    if let Err(e) = writeln!(file, "[{stamp}] {prefix}{message}") {
                        eprintln!("로그 파일 쓰기 실패: {e}");
                    }
                }
            }
        }
    }

    pub fn flush() -> std::io::Result<()> {
        if let Some(logger) = LOGGER.get() {
            if let Ok(mut file_guard) = logger.lock() {
                if let Some(file) = file_guard.as_mut() {
                    file.flush()?;
                }
            }
        }
        Ok(())
    }
}

// 매크로 정의
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::utils::Logger::log(&message);
    }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::utils::Logger::log_error(&message);
    }};
}
