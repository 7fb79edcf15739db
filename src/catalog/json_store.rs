//! 디렉터리 하나에 종류별 JSON 파일을 두는 카탈로그 저장소.
//!
//! 파일은 `{이름: 레코드}` 형태의 평평한 객체이고 4칸 들여쓰기로 기록한다.
//! 키 순서는 읽은 순서 그대로이므로 추가 후 삭제하면 원래 바이트로 돌아온다.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use super::{
    CatalogError, CatalogStore, Catalogs, CloserRecord, HardwareCatalog, HardwareKind,
    HardwareRecord, LockRecord,
};

#[derive(Debug)]
pub struct JsonCatalogStore {
    dir: PathBuf,
    catalogs: Catalogs,
    /// 열 때 파일이 존재했던 종류. 비워진 표의 파일을 지울지 판단한다.
    on_disk: BTreeSet<HardwareKind>,
}

impl JsonCatalogStore {
    /// 디렉터리의 세 파일을 읽는다. 없는 파일은 빈 표로 본다.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let dir = dir.into();
        let mut catalogs = Catalogs::new();
        let mut on_disk = BTreeSet::new();

        for kind in HardwareKind::ALL {
            let path = dir.join(kind.file_name());
            match kind {
                HardwareKind::ElectricLock | HardwareKind::BoxLock => {
                    if let Some(table) = read_table::<LockRecord>(&path)? {
                        on_disk.insert(kind);
                        if kind == HardwareKind::ElectricLock {
                            catalogs.electric_locks = table;
                        } else {
                            catalogs.box_locks = table;
                        }
                    }
                }
                HardwareKind::ConcealedCloser => {
                    if let Some(table) = read_table::<CloserRecord>(&path)? {
                        on_disk.insert(kind);
                        catalogs.closers = table;
                    }
                }
            }
        }

        debug!(
            dir = %dir.display(),
            electric_locks = catalogs.electric_locks.len(),
            box_locks = catalogs.box_locks.len(),
            closers = catalogs.closers.len(),
            "카탈로그 로드"
        );
        Ok(Self {
            dir,
            catalogs,
            on_disk,
        })
    }

    pub fn path(&self, kind: HardwareKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    fn persist(&self, kind: HardwareKind) -> Result<(), CatalogError> {
        let path = self.path(kind);
        if self.catalogs.is_empty(kind) && !self.on_disk.contains(&kind) {
            if path.exists() {
                fs::remove_file(&path).map_err(|source| CatalogError::Io {
                    path: path.clone(),
                    source,
                })?;
            }
            return Ok(());
        }

        let bytes = match kind {
            HardwareKind::ElectricLock => to_pretty_json(&self.catalogs.electric_locks),
            HardwareKind::BoxLock => to_pretty_json(&self.catalogs.box_locks),
            HardwareKind::ConcealedCloser => to_pretty_json(&self.catalogs.closers),
        }
        .map_err(|source| CatalogError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, bytes).map_err(|source| CatalogError::Io { path, source })
    }
}

impl HardwareCatalog for JsonCatalogStore {
    fn get(&self, kind: HardwareKind, name: &str) -> Option<HardwareRecord> {
        self.catalogs.get(kind, name)
    }
}

impl CatalogStore for JsonCatalogStore {
    fn put(
        &mut self,
        kind: HardwareKind,
        name: &str,
        record: HardwareRecord,
    ) -> Result<Option<HardwareRecord>, CatalogError> {
        let previous = self.catalogs.put(kind, name, record)?;
        self.persist(kind)?;
        info!(%kind, name = name.trim(), replaced = previous.is_some(), "카탈로그 레코드 저장");
        Ok(previous)
    }

    fn remove(
        &mut self,
        kind: HardwareKind,
        name: &str,
    ) -> Result<Option<HardwareRecord>, CatalogError> {
        let removed = self.catalogs.remove(kind, name)?;
        if removed.is_some() {
            self.persist(kind)?;
            info!(%kind, name = name.trim(), "카탈로그 레코드 삭제");
        }
        Ok(removed)
    }

    fn list(&self, kind: HardwareKind) -> Vec<(String, HardwareRecord)> {
        self.catalogs.list(kind)
    }
}

fn read_table<T: DeserializeOwned>(
    path: &Path,
) -> Result<Option<IndexMap<String, T>>, CatalogError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(Some(IndexMap::new()));
    }
    let table = serde_json::from_str(&content).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(table))
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
