//! 재단 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod door;
pub mod logging;
pub mod ui_cli;
