use serde::Serialize;
use tracing::{debug, warn};

use super::error::{CutListError, ValidationRule};
use super::lock_fillers::{compute_lock_fillers, LockFillers};
use super::structure::{self, HandleReinforcement, StructureFrame, StructureQuantities};
use super::types::{
    DoorCategory, DoorConfiguration, DoorType, FrameMode, StructureType, GAP_WOOD_LOCK_COUNT,
    GAP_WOOD_LOCK_LENGTH, GAP_WOOD_LOCK_WIDTH, MAX_DIMENSION_MM, REINFORCE_CONCEALED_WOOD_LENGTH,
    STANDARD_BAR_LENGTH,
};
use crate::catalog::{HardwareCatalog, HardwareKind, LockRecord};

/// 분류 × 모드 × 구조 조합에서 정해지는 프레임 계산 경로.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameVariant {
    FireproofNormal,
    FireproofUb,
    NonFireproofPlain,
    Yipaiyikong,
    HoneycombBoard,
    HoneycombPaper,
}

impl FrameVariant {
    pub fn resolve(config: &DoorConfiguration) -> Result<Self, CutListError> {
        let variant = match (config.category, config.mode) {
            (DoorCategory::Fireproof, FrameMode::Normal) => FrameVariant::FireproofNormal,
            (DoorCategory::Fireproof, FrameMode::Ub) => FrameVariant::FireproofUb,
            (DoorCategory::NonFireproof, FrameMode::Ub) => {
                return Err(CutListError::Validation {
                    field: "mode",
                    rule: ValidationRule::ModeNotAllowed,
                })
            }
            (DoorCategory::NonFireproof, FrameMode::Normal) => match config.structure_type {
                StructureType::None => FrameVariant::NonFireproofPlain,
                StructureType::Yipaiyikong => FrameVariant::Yipaiyikong,
                StructureType::HoneycombBoard => FrameVariant::HoneycombBoard,
                StructureType::HoneycombPaper => FrameVariant::HoneycombPaper,
            },
        };
        Ok(variant)
    }

    pub fn is_fireproof(&self) -> bool {
        matches!(self, FrameVariant::FireproofNormal | FrameVariant::FireproofUb)
    }

    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            FrameVariant::Yipaiyikong | FrameVariant::HoneycombBoard | FrameVariant::HoneycombPaper
        )
    }
}

/// 재단 목록에 들어가는 부재 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PieceKind {
    RightVertical,
    LeftVertical,
    UpperHorizontal,
    LowerHorizontal,
    OuterUpperFiller,
    InnerUpperFiller,
    OuterBottomFiller,
    InnerBottomFiller,
    VeryUpperHorizontal,
    ReinforceConcealed,
    UbHorizontal,
    GapWoodLock,
    Slat,
}

impl PieceKind {
    pub fn label(&self) -> &'static str {
        match self {
            PieceKind::RightVertical => "우측 세로목",
            PieceKind::LeftVertical => "좌측 세로목",
            PieceKind::UpperHorizontal => "상부 가로목",
            PieceKind::LowerHorizontal => "하부 가로목",
            PieceKind::OuterUpperFiller => "락 상부 바깥 보강목",
            PieceKind::InnerUpperFiller => "락 상부 안쪽 보강목",
            PieceKind::OuterBottomFiller => "락 하부 바깥 보강목",
            PieceKind::InnerBottomFiller => "락 하부 안쪽 보강목",
            PieceKind::VeryUpperHorizontal => "최상단 가로목(도어클로저)",
            PieceKind::ReinforceConcealed => "도어클로저 보강목",
            PieceKind::UbHorizontal => "UB 가로목",
            PieceKind::GapWoodLock => "락 보강목",
            PieceKind::Slat => "살대",
        }
    }
}

/// 재단 부재 한 줄. 치수는 mm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CutPiece {
    pub kind: PieceKind,
    pub width: i64,
    pub length: i64,
    pub count_per_door: u64,
}

impl CutPiece {
    /// 도어 수량을 곱한 개수. 범위를 넘으면 `None`.
    pub fn total_count(&self, num_doors: u64) -> Option<u64> {
        self.count_per_door.checked_mul(num_doors)
    }

    pub fn total_length(&self, num_doors: u64) -> Option<i64> {
        let count = i64::try_from(self.total_count(num_doors)?).ok()?;
        self.length.checked_mul(count)
    }

    /// 이 부재만으로 필요한 표준 원목 수.
    pub fn bars(&self, num_doors: u64) -> Option<u64> {
        self.total_length(num_doors).map(bars_for)
    }
}

/// 계산 결과 전체.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutListResult {
    pub variant: FrameVariant,
    pub door_type: DoorType,
    pub num_doors: u64,
    pub edge_sealing_thickness_mm: f64,
    /// 마감 보정 후 프레임 높이
    pub frame_height: i64,
    /// 마감 보정 후 프레임 폭
    pub frame_width: i64,
    /// 마감 보정 후 락 높이 (락 도어만)
    pub lock_height: Option<i64>,
    pub lock: Option<LockRecord>,
    pub concealed_closer_length: Option<i64>,
    pub inner_width: i64,
    pub plywood_width: i64,
    pub plywood_height: i64,
    pub vertical_piece_length: i64,
    pub horizontal_pieces_length: i64,
    pub very_upper_horizontal_piece_length: Option<i64>,
    pub lock_fillers: Option<LockFillers>,
    pub structure: Option<StructureQuantities>,
    pub pieces: Vec<CutPiece>,
    pub total_wood_length: i64,
    pub total_wood_bars: u64,
    pub warnings: Vec<String>,
}

/// 총 길이를 표준 원목 수로 바꾼다. 음수는 0으로 본다.
pub fn bars_for(total_length: i64) -> u64 {
    (total_length.max(0) as u64).div_ceil(STANDARD_BAR_LENGTH as u64)
}

fn require(value: Option<i64>, field: &'static str) -> Result<i64, CutListError> {
    value.ok_or(CutListError::missing(field))
}

fn positive(value: i64, field: &'static str) -> Result<i64, CutListError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(CutListError::Validation {
            field,
            rule: ValidationRule::NotPositive(value.to_string()),
        })
    }
}

/// 양수이면서 치수 상한 이하인 값만 통과시킨다.
fn dimension(value: i64, field: &'static str) -> Result<i64, CutListError> {
    within_limit(positive(value, field)?, field)
}

fn within_limit(value: i64, field: &'static str) -> Result<i64, CutListError> {
    if value.unsigned_abs() <= MAX_DIMENSION_MM as u64 {
        Ok(value)
    } else {
        Err(CutListError::Validation {
            field,
            rule: ValidationRule::TooLarge {
                value,
                limit: MAX_DIMENSION_MM,
            },
        })
    }
}

fn checked_lock(record: LockRecord) -> Result<LockRecord, CutListError> {
    dimension(record.length, "lock_length")?;
    within_limit(record.offset_bottom, "lock_offset_bottom")?;
    within_limit(record.offset_top, "lock_offset_top")?;
    Ok(record)
}

fn lock_kind(door_type: DoorType) -> Option<HardwareKind> {
    match door_type {
        DoorType::Simple => None,
        DoorType::ElectricLock => Some(HardwareKind::ElectricLock),
        DoorType::BoxLock => Some(HardwareKind::BoxLock),
    }
}

fn selected_name(name: Option<&String>) -> Option<&str> {
    name.map(|n| n.trim()).filter(|n| !n.is_empty())
}

/// 카탈로그 이름을 먼저 찾고, 없으면 수동 치수로 대체한다.
fn resolve_lock<C: HardwareCatalog + ?Sized>(
    config: &DoorConfiguration,
    kind: HardwareKind,
    catalog: &C,
) -> Result<LockRecord, CutListError> {
    let selection = config.lock.as_ref().ok_or(CutListError::missing("lock_name"))?;
    let manual = match selection.manual {
        Some(m) => {
            dimension(m.length, "lock_length")?;
            within_limit(m.offset_bottom, "lock_offset_bottom")?;
            Some(LockRecord::new(m.length, m.offset_bottom))
        }
        None => None,
    };
    match selected_name(selection.name.as_ref()) {
        Some(name) => match catalog.lock(kind, name) {
            Some(record) => checked_lock(record),
            None => {
                let record = manual.ok_or_else(|| CutListError::Lookup {
                    kind,
                    name: name.to_string(),
                })?;
                warn!(%kind, name, "카탈로그에 없는 락이므로 수동 치수를 사용");
                Ok(record)
            }
        },
        None => manual.ok_or(CutListError::missing("lock_name")),
    }
}

fn resolve_closer<C: HardwareCatalog + ?Sized>(
    config: &DoorConfiguration,
    catalog: &C,
) -> Result<Option<i64>, CutListError> {
    let Some(selection) = config.concealed_closer.as_ref() else {
        return Ok(None);
    };
    let manual = match selection.length {
        Some(length) => Some(dimension(length, "concealed_door_closer_length")?),
        None => None,
    };
    match selected_name(selection.name.as_ref()) {
        Some(name) => match catalog.closer(name) {
            Some(record) => dimension(record.length, "concealed_door_closer_length").map(Some),
            None => {
                let length = manual.ok_or_else(|| CutListError::Lookup {
                    kind: HardwareKind::ConcealedCloser,
                    name: name.to_string(),
                })?;
                warn!(name, "카탈로그에 없는 도어클로저이므로 수동 길이를 사용");
                Ok(Some(length))
            }
        },
        None => Ok(manual),
    }
}

/// UB 모드의 높이 범위를 검사하고 프레임 높이(최대 높이)를 돌려준다.
fn ub_frame_height(config: &DoorConfiguration) -> Result<(i64, i64), CutListError> {
    let max = dimension(require(config.max_height, "max_height")?, "max_height")?;
    let min = dimension(require(config.min_height, "min_height")?, "min_height")?;
    let ub_wood = dimension(require(config.ub_wood_width, "ub_wood_width")?, "ub_wood_width")?;
    let difference = max - min;
    if difference < 0 {
        return Err(CutListError::Validation {
            field: "max_height",
            rule: ValidationRule::UbHeightOrder { max, min },
        });
    }
    if difference > ub_wood {
        return Err(CutListError::Validation {
            field: "ub_wood_width",
            rule: ValidationRule::UbHeightRange {
                difference,
                limit: ub_wood,
            },
        });
    }
    Ok((max, ub_wood))
}

/// 도어 구성과 하드웨어 카탈로그로 재단 목록을 계산한다.
///
/// 입력은 바꾸지 않으며 같은 입력에는 항상 같은 결과를 낸다. 음수 길이는
/// 오류가 아니라 `warnings`에 기록한다. 치수는 `MAX_DIMENSION_MM` 이하여야 하고,
/// 도어 수량을 곱한 총 길이가 `i64`를 넘으면 `num_doors` 검증 오류가 된다.
pub fn compute<C: HardwareCatalog + ?Sized>(
    config: &DoorConfiguration,
    catalog: &C,
) -> Result<CutListResult, CutListError> {
    let num_doors = positive(config.num_doors, "num_doors")? as u64;
    let right = dimension(config.right_vpiece_width, "right_vpiece_width")?;
    let left = dimension(config.left_vpiece_width, "left_vpiece_width")?;
    let upper = dimension(config.upper_hpiece_width, "upper_hpiece_width")?;
    let lower = dimension(config.lower_hpiece_width, "lower_hpiece_width")?;
    let raw_width = dimension(config.frame_width, "frame_width")?;

    let variant = FrameVariant::resolve(config)?;
    let mut warnings = Vec::new();

    let (raw_height, ub_wood) = match variant {
        FrameVariant::FireproofUb => {
            let (max, ub_wood) = ub_frame_height(config)?;
            (max, Some(ub_wood))
        }
        _ => (
            dimension(require(config.frame_height, "frame_height")?, "frame_height")?,
            None,
        ),
    };

    let sealing = config.edge_sealing;
    let frame_height = raw_height + sealing.frame_adjustment();
    let frame_width = raw_width + sealing.frame_adjustment();

    let door_type = config.door_type;
    let (lock, lock_height, closer_length) = match lock_kind(door_type) {
        Some(kind) => {
            let lock = resolve_lock(config, kind, catalog)?;
            let lock_height =
                within_limit(require(config.lock_height, "lock_height")?, "lock_height")?
                    + sealing.lock_height_adjustment();
            let closer = resolve_closer(config, catalog)?;
            (Some(lock), Some(lock_height), closer)
        }
        None => {
            if config.concealed_closer.is_some() {
                warn!("단순문에는 도어클로저를 적용하지 않음");
                warnings.push("단순문에는 도어클로저를 적용하지 않습니다.".to_string());
            }
            (None, None, None)
        }
    };
    let concealed_wood_width = match closer_length {
        Some(_) => Some(dimension(config.concealed_wood_width, "concealed_wood_width")?),
        None => None,
    };

    let has_lock = door_type.has_lock();
    let mut inner_width = if has_lock {
        frame_width - right - 2 * left
    } else {
        frame_width - right - left
    };
    if has_lock && variant.is_structural() {
        inner_width -= GAP_WOOD_LOCK_WIDTH;
    }
    let horizontal_pieces_length = inner_width;

    let mut plywood_height = frame_height - lower - upper;
    if let Some(cw) = concealed_wood_width {
        plywood_height -= cw;
    }
    if let Some(ub) = ub_wood {
        plywood_height -= ub;
    }

    let lock_fillers = match (lock.as_ref(), lock_height) {
        (Some(lock), Some(lock_height)) => Some(compute_lock_fillers(
            frame_height,
            lock_height,
            lock,
            door_type,
            config.lock_direction,
        )),
        _ => None,
    };

    let very_upper = closer_length.map(|closer| {
        let piece = horizontal_pieces_length - closer;
        if variant.is_fireproof() {
            piece
        } else {
            piece - REINFORCE_CONCEALED_WOOD_LENGTH
        }
    });

    let structure = if variant.is_structural() {
        let slats_width = match config.slats_width {
            Some(w) => dimension(w, "slats_width")?,
            None => lower,
        };
        let frame = StructureFrame {
            frame_height,
            plywood_height,
            inner_width,
            upper_width: upper,
            lower_width: lower,
            slats_width,
            concealed_wood_width,
        };
        Some(structure_for(variant, &frame, config, has_lock)?)
    } else {
        None
    };

    let mut pieces = Vec::new();
    let mut push = |kind: PieceKind, width: i64, length: i64, count_per_door: u64| {
        if count_per_door > 0 {
            pieces.push(CutPiece {
                kind,
                width,
                length,
                count_per_door,
            });
        }
    };

    push(PieceKind::RightVertical, right, frame_height, 1);
    match &lock_fillers {
        Some(f) if variant.is_fireproof() => {
            push(PieceKind::OuterUpperFiller, left, f.outer_upper, 1);
            push(PieceKind::InnerUpperFiller, left, f.inner_upper, 1);
            push(PieceKind::OuterBottomFiller, left, f.outer_bottom, 1);
            push(PieceKind::InnerBottomFiller, left, f.inner_bottom, 1);
        }
        Some(f) => {
            push(PieceKind::LeftVertical, left, frame_height, 1);
            push(PieceKind::OuterUpperFiller, left, f.outer_upper, 1);
            push(PieceKind::OuterBottomFiller, left, f.outer_bottom, 1);
        }
        None => push(PieceKind::LeftVertical, left, frame_height, 1),
    }
    push(PieceKind::UpperHorizontal, upper, horizontal_pieces_length, 1);
    push(PieceKind::LowerHorizontal, lower, horizontal_pieces_length, 1);
    if let (Some(length), Some(cw)) = (very_upper, concealed_wood_width) {
        push(PieceKind::VeryUpperHorizontal, cw, length, 1);
        if !variant.is_fireproof() {
            push(PieceKind::ReinforceConcealed, cw, REINFORCE_CONCEALED_WOOD_LENGTH, 1);
        }
    }
    if let Some(ub) = ub_wood {
        push(PieceKind::UbHorizontal, ub, inner_width, 1);
    }
    if let Some(q) = &structure {
        if has_lock {
            push(
                PieceKind::GapWoodLock,
                GAP_WOOD_LOCK_WIDTH,
                GAP_WOOD_LOCK_LENGTH,
                GAP_WOOD_LOCK_COUNT,
            );
        }
        push(PieceKind::Slat, q.slats_width, q.slats_length, q.slats_count);
    }

    let total_wood_length = pieces
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.total_length(num_doors)?))
        .ok_or(CutListError::Validation {
            field: "num_doors",
            rule: ValidationRule::TotalOverflow,
        })?;
    let total_wood_bars = bars_for(total_wood_length);

    let mut lengths: Vec<(&'static str, f64)> = vec![
        ("inner_width", inner_width as f64),
        ("plywood_height", plywood_height as f64),
    ];
    if let Some(v) = very_upper {
        lengths.push(("very_upper_horizontal_piece_length", v as f64));
    }
    if let Some(f) = &lock_fillers {
        lengths.extend([
            ("outer_upper", f.outer_upper as f64),
            ("inner_upper", f.inner_upper as f64),
            ("outer_bottom", f.outer_bottom as f64),
            ("inner_bottom", f.inner_bottom as f64),
        ]);
    }
    if let Some(q) = &structure {
        lengths.extend(q.named_lengths());
    }
    for (name, value) in lengths.into_iter().filter(|(_, v)| *v < 0.0) {
        warn!(name, value, "음수 길이");
        warnings.push(format!("{name} 값이 음수입니다 ({value}mm). 입력값을 확인하세요."));
    }

    debug!(
        ?variant,
        frame_height,
        frame_width,
        inner_width,
        plywood_height,
        total_wood_length,
        total_wood_bars,
        "재단 계산 완료"
    );

    Ok(CutListResult {
        variant,
        door_type,
        num_doors,
        edge_sealing_thickness_mm: sealing.thickness_mm(),
        frame_height,
        frame_width,
        lock_height,
        lock,
        concealed_closer_length: closer_length,
        inner_width,
        plywood_width: inner_width,
        plywood_height,
        vertical_piece_length: frame_height,
        horizontal_pieces_length,
        very_upper_horizontal_piece_length: very_upper,
        lock_fillers,
        structure,
        pieces,
        total_wood_length,
        total_wood_bars,
        warnings,
    })
}

fn structure_for(
    variant: FrameVariant,
    frame: &StructureFrame,
    config: &DoorConfiguration,
    has_lock: bool,
) -> Result<StructureQuantities, CutListError> {
    let handle = || -> Result<HandleReinforcement, CutListError> {
        Ok(HandleReinforcement {
            lock_height: dimension(require(config.lock_height, "lock_height")?, "lock_height")?,
            reinforce_wood: dimension(
                require(config.reinforce_wood, "reinforce_wood")?,
                "reinforce_wood",
            )?,
        })
    };
    let quantities = match variant {
        FrameVariant::Yipaiyikong => {
            let gap = dimension(require(config.gap_width, "gap_width")?, "gap_width")?;
            structure::yipaiyikong(frame, gap)
        }
        FrameVariant::HoneycombBoard if has_lock => structure::honeycomb_board_lock(frame),
        FrameVariant::HoneycombBoard => structure::honeycomb_board_simple(frame, handle()?),
        FrameVariant::HoneycombPaper if has_lock => structure::honeycomb_paper_lock(frame),
        FrameVariant::HoneycombPaper => structure::honeycomb_paper_simple(frame, handle()?),
        FrameVariant::FireproofNormal | FrameVariant::FireproofUb | FrameVariant::NonFireproofPlain => {
            return Err(CutListError::Validation {
                field: "structure_type",
                rule: ValidationRule::UnknownOption(format!("{variant:?}")),
            })
        }
    };
    Ok(quantities)
}
