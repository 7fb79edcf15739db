//! tracing 구독자 초기화.

use tracing_subscriber::{fmt, EnvFilter};

/// 로그 구독자를 설치한다. RUST_LOG가 있으면 그것을, 없으면 `default_level`을 쓴다.
///
/// 로그는 stderr로 보내 계산 결과 출력(stdout)과 섞이지 않게 한다.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// 테스트용 초기화. 여러 번 불러도 된다.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
