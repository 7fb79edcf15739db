use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::catalog::HardwareKind;
use crate::config::CONFIG_FILE;

#[derive(Debug, Parser)]
#[command(name = "door_frame_toolbox")]
#[command(about = "도어 프레임 재단 목록 계산기와 하드웨어 카탈로그 관리 도구")]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// TOML 작업 파일로 재단 목록 계산
    Calc {
        /// DoorConfiguration이 담긴 TOML 파일
        job: PathBuf,
        /// 결과를 JSON으로 출력
        #[arg(long)]
        json: bool,
    },
    /// 대화형 메뉴 실행 (기본값)
    Interactive,
    /// 하드웨어 카탈로그 관리
    Catalog(CatalogCommands),
    /// 엣지 실링 마감 목록 출력
    Finishes,
}

#[derive(Debug, Args)]
pub struct CatalogCommands {
    #[command(subcommand)]
    pub command: CatalogSubcommands,
}

#[derive(Debug, Subcommand)]
pub enum CatalogSubcommands {
    /// 카탈로그 목록 출력
    List {
        #[arg(value_enum)]
        kind: KindArg,
    },
    /// 전기락/박스락 추가 또는 수정
    AddLock {
        #[arg(value_enum)]
        kind: LockKindArg,
        name: String,
        #[arg(long)]
        length: i64,
        #[arg(long)]
        offset_bottom: i64,
        /// 생략하면 length - offset_bottom
        #[arg(long)]
        offset_top: Option<i64>,
    },
    /// 도어클로저 추가 또는 수정
    AddCloser {
        name: String,
        #[arg(long)]
        length: i64,
    },
    /// 레코드 삭제
    Remove {
        #[arg(value_enum)]
        kind: KindArg,
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    ElectricLock,
    BoxLock,
    ConcealedCloser,
}

impl From<KindArg> for HardwareKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::ElectricLock => HardwareKind::ElectricLock,
            KindArg::BoxLock => HardwareKind::BoxLock,
            KindArg::ConcealedCloser => HardwareKind::ConcealedCloser,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LockKindArg {
    ElectricLock,
    BoxLock,
}

impl From<LockKindArg> for HardwareKind {
    fn from(value: LockKindArg) -> Self {
        match value {
            LockKindArg::ElectricLock => HardwareKind::ElectricLock,
            LockKindArg::BoxLock => HardwareKind::BoxLock,
        }
    }
}
