//! 락/도어클로저 하드웨어 카탈로그. 계산기는 읽기 전용 조회만 사용한다.

pub mod json_store;

use std::path::PathBuf;

use indexmap::IndexMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use json_store::JsonCatalogStore;

/// 카탈로그 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HardwareKind {
    ElectricLock,
    BoxLock,
    ConcealedCloser,
}

impl HardwareKind {
    pub const ALL: [HardwareKind; 3] = [
        HardwareKind::ElectricLock,
        HardwareKind::BoxLock,
        HardwareKind::ConcealedCloser,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            HardwareKind::ElectricLock => "electric-lock",
            HardwareKind::BoxLock => "box-lock",
            HardwareKind::ConcealedCloser => "concealed-closer",
        }
    }

    /// 카탈로그 디렉터리 안의 파일 이름.
    pub fn file_name(&self) -> &'static str {
        match self {
            HardwareKind::ElectricLock => "electric_locks.json",
            HardwareKind::BoxLock => "box_locks.json",
            HardwareKind::ConcealedCloser => "concealeds.json",
        }
    }

    pub fn is_lock(&self) -> bool {
        !matches!(self, HardwareKind::ConcealedCloser)
    }
}

impl std::fmt::Display for HardwareKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HardwareKind::ElectricLock => "전기락",
            HardwareKind::BoxLock => "박스락",
            HardwareKind::ConcealedCloser => "도어클로저",
        };
        f.write_str(label)
    }
}

/// 전기락/박스락 한 건. `offset_top`은 보통 `length - offset_bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockRecord {
    pub length: i64,
    pub offset_bottom: i64,
    pub offset_top: i64,
}

impl LockRecord {
    pub fn new(length: i64, offset_bottom: i64) -> Self {
        Self {
            length,
            offset_bottom,
            offset_top: length - offset_bottom,
        }
    }
}

/// 숨김 도어클로저 한 건.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloserRecord {
    pub length: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareRecord {
    Lock(LockRecord),
    Closer(CloserRecord),
}

impl HardwareRecord {
    fn fits(&self, kind: HardwareKind) -> bool {
        match self {
            HardwareRecord::Lock(_) => kind.is_lock(),
            HardwareRecord::Closer(_) => !kind.is_lock(),
        }
    }

    pub fn length(&self) -> i64 {
        match self {
            HardwareRecord::Lock(r) => r.length,
            HardwareRecord::Closer(r) => r.length,
        }
    }
}

/// 카탈로그 조작 오류.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("카탈로그 파일 입출력 오류 ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("카탈로그 JSON 오류 ({}): {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("이름이 비어 있습니다")]
    EmptyName,
    #[error("{kind} 카탈로그에 맞지 않는 레코드입니다")]
    RecordKindMismatch { kind: HardwareKind },
    #[error("{field} 값은 0보다 커야 합니다 (입력 {value})")]
    NotPositive { field: &'static str, value: i64 },
}

/// 계산기에 주입되는 읽기 전용 조회.
pub trait HardwareCatalog {
    fn get(&self, kind: HardwareKind, name: &str) -> Option<HardwareRecord>;

    fn lock(&self, kind: HardwareKind, name: &str) -> Option<LockRecord> {
        match self.get(kind, name) {
            Some(HardwareRecord::Lock(record)) => Some(record),
            _ => None,
        }
    }

    fn closer(&self, name: &str) -> Option<CloserRecord> {
        match self.get(HardwareKind::ConcealedCloser, name) {
            Some(HardwareRecord::Closer(record)) => Some(record),
            _ => None,
        }
    }
}

/// 이름 기반 레코드 저장소. 변경은 CLI 조작으로만 일어난다.
pub trait CatalogStore: HardwareCatalog {
    /// 레코드를 추가하거나 덮어쓰고 이전 값을 돌려준다.
    fn put(
        &mut self,
        kind: HardwareKind,
        name: &str,
        record: HardwareRecord,
    ) -> Result<Option<HardwareRecord>, CatalogError>;

    fn remove(
        &mut self,
        kind: HardwareKind,
        name: &str,
    ) -> Result<Option<HardwareRecord>, CatalogError>;

    /// 이름 순으로 정렬된 목록.
    fn list(&self, kind: HardwareKind) -> Vec<(String, HardwareRecord)>;
}

/// 메모리 안의 카탈로그 세 벌. 표는 파일에 적힌 순서를 유지하고 새 이름은 끝에 붙는다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogs {
    pub electric_locks: IndexMap<String, LockRecord>,
    pub box_locks: IndexMap<String, LockRecord>,
    pub closers: IndexMap<String, CloserRecord>,
}

impl Catalogs {
    pub fn new() -> Self {
        Self::default()
    }

    fn locks(&self, kind: HardwareKind) -> Option<&IndexMap<String, LockRecord>> {
        match kind {
            HardwareKind::ElectricLock => Some(&self.electric_locks),
            HardwareKind::BoxLock => Some(&self.box_locks),
            HardwareKind::ConcealedCloser => None,
        }
    }

    fn locks_mut(&mut self, kind: HardwareKind) -> Option<&mut IndexMap<String, LockRecord>> {
        match kind {
            HardwareKind::ElectricLock => Some(&mut self.electric_locks),
            HardwareKind::BoxLock => Some(&mut self.box_locks),
            HardwareKind::ConcealedCloser => None,
        }
    }

    pub fn len(&self, kind: HardwareKind) -> usize {
        self.locks(kind).map_or(self.closers.len(), |table| table.len())
    }

    pub fn is_empty(&self, kind: HardwareKind) -> bool {
        self.len(kind) == 0
    }
}

impl HardwareCatalog for Catalogs {
    fn get(&self, kind: HardwareKind, name: &str) -> Option<HardwareRecord> {
        match self.locks(kind) {
            Some(table) => table.get(name).copied().map(HardwareRecord::Lock),
            None => self.closers.get(name).copied().map(HardwareRecord::Closer),
        }
    }
}

impl CatalogStore for Catalogs {
    fn put(
        &mut self,
        kind: HardwareKind,
        name: &str,
        record: HardwareRecord,
    ) -> Result<Option<HardwareRecord>, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if !record.fits(kind) {
            return Err(CatalogError::RecordKindMismatch { kind });
        }
        if record.length() <= 0 {
            return Err(CatalogError::NotPositive {
                field: "length",
                value: record.length(),
            });
        }
        let previous = match record {
            HardwareRecord::Lock(lock) => self
                .locks_mut(kind)
                .ok_or(CatalogError::RecordKindMismatch { kind })?
                .insert(name.to_string(), lock)
                .map(HardwareRecord::Lock),
            HardwareRecord::Closer(closer) => self
                .closers
                .insert(name.to_string(), closer)
                .map(HardwareRecord::Closer),
        };
        Ok(previous)
    }

    fn remove(
        &mut self,
        kind: HardwareKind,
        name: &str,
    ) -> Result<Option<HardwareRecord>, CatalogError> {
        let removed = match self.locks_mut(kind) {
            Some(table) => table.shift_remove(name.trim()).map(HardwareRecord::Lock),
            None => self
                .closers
                .shift_remove(name.trim())
                .map(HardwareRecord::Closer),
        };
        Ok(removed)
    }

    fn list(&self, kind: HardwareKind) -> Vec<(String, HardwareRecord)> {
        let mut entries: Vec<_> = match self.locks(kind) {
            Some(table) => table
                .iter()
                .map(|(name, r)| (name.clone(), HardwareRecord::Lock(*r)))
                .collect(),
            None => self
                .closers
                .iter()
                .map(|(name, r)| (name.clone(), HardwareRecord::Closer(*r)))
                .collect(),
        };
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
