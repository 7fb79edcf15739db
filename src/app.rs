use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::catalog::{
    CatalogError, CatalogStore, CloserRecord, HardwareKind, HardwareRecord, JsonCatalogStore,
    LockRecord,
};
use crate::cli::{CatalogSubcommands, Cli, Commands};
use crate::config::{Config, ConfigError};
use crate::door::{self, CutListError, DoorConfiguration};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("카탈로그 오류: {0}")]
    Catalog(#[from] CatalogError),
    #[error("재단 계산 오류: {0}")]
    CutList(#[from] CutListError),
    #[error("작업 파일 파싱 오류: {0}")]
    Job(#[from] toml::de::Error),
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 명령행 인자에 따라 한 번 실행한다. 하위 명령이 없으면 대화형 메뉴를 연다.
pub fn run(cli: Cli, config: &mut Config) -> Result<(), AppError> {
    let mut store = JsonCatalogStore::open(config.catalog_dir.clone())?;
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Calc { job, json } => run_job(&job, json, &store),
        Commands::Interactive => run_interactive(config, &cli.config, &mut store),
        Commands::Catalog(catalog) => run_catalog(catalog.command, &mut store),
        Commands::Finishes => {
            ui_cli::print_finishes();
            Ok(())
        }
    }
}

/// TOML 작업 파일 하나를 계산해 출력한다.
pub fn run_job<S: CatalogStore>(job: &Path, json: bool, store: &S) -> Result<(), AppError> {
    let content = fs::read_to_string(job)?;
    let door_config: DoorConfiguration = toml::from_str(&content)?;
    let result = door::compute(&door_config, store)?;
    info!(job = %job.display(), bars = result.total_wood_bars, "작업 파일 계산");
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        ui_cli::print_cut_list(&result);
    }
    Ok(())
}

fn run_catalog<S: CatalogStore>(command: CatalogSubcommands, store: &mut S) -> Result<(), AppError> {
    match command {
        CatalogSubcommands::List { kind } => ui_cli::print_catalog(kind.into(), store),
        CatalogSubcommands::AddLock {
            kind,
            name,
            length,
            offset_bottom,
            offset_top,
        } => {
            let record = LockRecord {
                length,
                offset_bottom,
                offset_top: offset_top.unwrap_or(length - offset_bottom),
            };
            store.put(kind.into(), &name, HardwareRecord::Lock(record))?;
            println!("'{name}' 저장됨");
        }
        CatalogSubcommands::AddCloser { name, length } => {
            store.put(
                HardwareKind::ConcealedCloser,
                &name,
                HardwareRecord::Closer(CloserRecord { length }),
            )?;
            println!("'{name}' 저장됨");
        }
        CatalogSubcommands::Remove { kind, name } => match store.remove(kind.into(), &name)? {
            Some(_) => println!("'{name}' 삭제됨"),
            None => println!("'{name}' 은(는) 없습니다."),
        },
    }
    Ok(())
}

/// 대화형 메뉴의 메인 루프를 실행한다.
fn run_interactive<S: CatalogStore>(
    config: &mut Config,
    config_path: &Path,
    store: &mut S,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Calculate => ui_cli::handle_calculate(config, store)?,
            MenuChoice::ElectricLocks => ui_cli::handle_catalog(HardwareKind::ElectricLock, store)?,
            MenuChoice::BoxLocks => ui_cli::handle_catalog(HardwareKind::BoxLock, store)?,
            MenuChoice::Closers => ui_cli::handle_catalog(HardwareKind::ConcealedCloser, store)?,
            MenuChoice::Finishes => ui_cli::print_finishes(),
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
