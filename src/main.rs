use clap::Parser;
use door_frame_toolbox::{app, cli::Cli, config, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청한 명령을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), app::AppError> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default(&cli.config)?;
    logging::init(&cfg.log_level);
    app::run(cli, &mut cfg)
}
