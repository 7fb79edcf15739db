//! 도어 프레임 재단 계산 모듈 모음.

pub mod cut_list;
pub mod edge_sealing;
pub mod error;
pub mod form;
pub mod lock_fillers;
pub mod structure;
pub mod types;

pub use cut_list::*;
pub use edge_sealing::EdgeSealing;
pub use error::*;
pub use form::FormInput;
pub use lock_fillers::*;
pub use structure::StructureQuantities;
pub use types::*;
