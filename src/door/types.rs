use serde::{Deserialize, Serialize};

use super::edge_sealing::EdgeSealing;

/// 락 보강목(gap wood lock) 폭 [mm]. 구조형 락 도어의 내폭에서 추가로 뺀다.
pub const GAP_WOOD_LOCK_WIDTH: i64 = 70;
/// 락 보강목 한 조각의 길이 [mm]. 도어당 4개.
pub const GAP_WOOD_LOCK_LENGTH: i64 = 200;
pub const GAP_WOOD_LOCK_COUNT: u64 = 4;
/// 일반 도어의 도어클로저 보강목 길이 [mm].
pub const REINFORCE_CONCEALED_WOOD_LENGTH: i64 = 70;
/// 도어클로저를 수납하는 최상단 가로목의 기본 폭 [mm].
pub const VERY_UPPER_HORIZONTAL_PIECE_WIDTH: i64 = 100;
/// 원목 한 본의 표준 길이 [mm].
pub const STANDARD_BAR_LENGTH: i64 = 2400;
/// 치수 입력의 상한 [mm]. 중간 계산이 `i64` 범위를 넘지 않도록 막는다.
pub const MAX_DIMENSION_MM: i64 = 100_000;

/// 도어 분류(방화/일반).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoorCategory {
    Fireproof,
    NonFireproof,
}

impl DoorCategory {
    pub const ALL: [DoorCategory; 2] = [DoorCategory::Fireproof, DoorCategory::NonFireproof];

    pub fn code(&self) -> &'static str {
        match self {
            DoorCategory::Fireproof => "fireproof",
            DoorCategory::NonFireproof => "non-fireproof",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DoorCategory::Fireproof => "방화문",
            DoorCategory::NonFireproof => "일반문",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// 프레임 제작 방식. UB는 바닥 높이가 다른 현장용으로 방화문에서만 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameMode {
    #[default]
    Normal,
    Ub,
}

impl FrameMode {
    pub const ALL: [FrameMode; 2] = [FrameMode::Normal, FrameMode::Ub];

    pub fn code(&self) -> &'static str {
        match self {
            FrameMode::Normal => "normal",
            FrameMode::Ub => "ub",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// 일반문 내부 심재 구조.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureType {
    #[default]
    None,
    HoneycombPaper,
    /// 일패일공(一排一空): 살대와 빈 칸을 번갈아 채우는 구조
    Yipaiyikong,
    HoneycombBoard,
}

impl StructureType {
    pub const ALL: [StructureType; 4] = [
        StructureType::None,
        StructureType::HoneycombPaper,
        StructureType::Yipaiyikong,
        StructureType::HoneycombBoard,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            StructureType::None => "none",
            StructureType::HoneycombPaper => "honeycomb-paper",
            StructureType::Yipaiyikong => "yipaiyikong",
            StructureType::HoneycombBoard => "honeycomb-board",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StructureType::None => "구조 없음",
            StructureType::HoneycombPaper => "허니콤 페이퍼",
            StructureType::Yipaiyikong => "일패일공",
            StructureType::HoneycombBoard => "허니콤 보드",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// 도어 형식. 전기락/박스락은 락 보강(filler) 계산을 동반한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoorType {
    Simple,
    ElectricLock,
    BoxLock,
}

impl DoorType {
    pub const ALL: [DoorType; 3] = [DoorType::Simple, DoorType::ElectricLock, DoorType::BoxLock];

    pub fn code(&self) -> &'static str {
        match self {
            DoorType::Simple => "simple",
            DoorType::ElectricLock => "electric-lock",
            DoorType::BoxLock => "box-lock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DoorType::Simple => "단순문",
            DoorType::ElectricLock => "전기락",
            DoorType::BoxLock => "박스락",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code.trim()))
    }

    pub fn has_lock(&self) -> bool {
        !matches!(self, DoorType::Simple)
    }

    /// 락 위쪽 안쪽 보강목에서 빼는 값 [mm].
    pub fn inner_upper_clearance(&self) -> i64 {
        match self {
            DoorType::ElectricLock => 75,
            DoorType::BoxLock | DoorType::Simple => 30,
        }
    }
}

/// 락 오프셋을 어느 쪽에서 재는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LockDirection {
    Top,
    #[default]
    Bottom,
}

impl LockDirection {
    pub fn code(&self) -> &'static str {
        match self {
            LockDirection::Top => "top",
            LockDirection::Bottom => "bottom",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        [LockDirection::Top, LockDirection::Bottom]
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// 카탈로그에 없는 락을 쓸 때 직접 입력하는 치수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualLock {
    pub length: i64,
    pub offset_bottom: i64,
}

/// 락 선택. 이름이 카탈로그에 없으면 수동 치수로 대체한다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockSelection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub manual: Option<ManualLock>,
}

/// 도어클로저 선택. `length`는 카탈로그에 없을 때의 수동 길이.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloserSelection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub length: Option<i64>,
}

/// 재단 계산 한 건의 입력값. 모든 치수는 mm 단위 정수.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorConfiguration {
    pub category: DoorCategory,
    #[serde(default)]
    pub mode: FrameMode,
    /// 방화문에서는 무시한다.
    #[serde(default)]
    pub structure_type: StructureType,
    pub door_type: DoorType,
    pub num_doors: i64,
    pub right_vpiece_width: i64,
    pub left_vpiece_width: i64,
    pub upper_hpiece_width: i64,
    pub lower_hpiece_width: i64,
    #[serde(default)]
    pub edge_sealing: EdgeSealing,
    /// UB 모드에서는 `max_height`로 대체된다.
    #[serde(default)]
    pub frame_height: Option<i64>,
    pub frame_width: i64,
    #[serde(default)]
    pub max_height: Option<i64>,
    #[serde(default)]
    pub min_height: Option<i64>,
    #[serde(default)]
    pub ub_wood_width: Option<i64>,
    #[serde(default)]
    pub lock: Option<LockSelection>,
    #[serde(default)]
    pub lock_height: Option<i64>,
    #[serde(default)]
    pub lock_direction: LockDirection,
    #[serde(default)]
    pub concealed_closer: Option<CloserSelection>,
    #[serde(default = "default_concealed_wood_width")]
    pub concealed_wood_width: i64,
    #[serde(default)]
    pub slats_width: Option<i64>,
    #[serde(default)]
    pub gap_width: Option<i64>,
    #[serde(default)]
    pub reinforce_wood: Option<i64>,
}

fn default_concealed_wood_width() -> i64 {
    VERY_UPPER_HORIZONTAL_PIECE_WIDTH
}

impl DoorConfiguration {
    /// 필수 항목만 채운 구성. 나머지는 분기별로 필요할 때 채운다.
    pub fn new(category: DoorCategory, door_type: DoorType, frame_height: i64, frame_width: i64) -> Self {
        Self {
            category,
            mode: FrameMode::Normal,
            structure_type: StructureType::None,
            door_type,
            num_doors: 1,
            right_vpiece_width: 70,
            left_vpiece_width: 70,
            upper_hpiece_width: 100,
            lower_hpiece_width: 100,
            edge_sealing: EdgeSealing::default(),
            frame_height: Some(frame_height),
            frame_width,
            max_height: None,
            min_height: None,
            ub_wood_width: None,
            lock: None,
            lock_height: None,
            lock_direction: LockDirection::Bottom,
            concealed_closer: None,
            concealed_wood_width: VERY_UPPER_HORIZONTAL_PIECE_WIDTH,
            slats_width: None,
            gap_width: None,
            reinforce_wood: None,
        }
    }
}
