//! 도어 마감(엣지 실링) 종류와 두께, 치수 보정값 테이블을 제공한다.
//! 보정값은 공장 실측 기준이며 마감재 공급처가 바뀌면 다시 확인해야 한다.
use serde::{Deserialize, Serialize};

/// 고정 카탈로그에 등록된 마감 종류. `Custom`은 두께만 수동으로 지정한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EdgeSealing {
    #[serde(rename = "solid-wood-6mm")]
    SolidWood6mm,
    #[serde(rename = "aluminium-6mm")]
    Aluminium6mm,
    #[serde(rename = "abs-0.5mm")]
    Abs05mm,
    #[serde(rename = "iron-graphite-2mm")]
    IronGraphite2mm,
    #[serde(rename = "iron-1mm")]
    Iron1mm,
    #[serde(rename = "white-wood-4mm")]
    WhiteWood4mm,
    #[serde(rename = "melamine-0.8mm")]
    Melamine08mm,
    #[serde(rename = "non-woven-1mm")]
    NonWoven1mm,
    #[serde(rename = "aluminium-1mm")]
    Aluminium1mm,
    /// 카탈로그에 없는 마감. 프레임/락 높이 보정은 적용하지 않는다.
    #[serde(rename = "custom")]
    Custom { thickness_mm: f64 },
}

impl Default for EdgeSealing {
    fn default() -> Self {
        EdgeSealing::SolidWood6mm
    }
}

/// 카탈로그 한 줄. 현장 라벨은 작업 지시서에 적힌 표기 그대로 둔다.
#[derive(Debug)]
pub struct EdgeSealingData {
    pub sealing: EdgeSealing,
    pub code: &'static str,
    pub label: &'static str,
    pub thickness_mm: f64,
    /// 프레임 높이/폭에 더하는 값 [mm]
    pub frame_adjustment: i64,
    /// 락 높이에 더하는 값 [mm]
    pub lock_height_adjustment: i64,
}

pub fn finishes() -> &'static [EdgeSealingData] {
    FINISHES
}

/// 코드 또는 현장 라벨로 마감을 찾는다. ASCII 대소문자는 구분하지 않는다.
pub fn find_finish(code: &str) -> Option<&'static EdgeSealingData> {
    let code = code.trim();
    FINISHES
        .iter()
        .find(|f| f.code.eq_ignore_ascii_case(code) || f.label.eq_ignore_ascii_case(code))
}

impl EdgeSealing {
    fn data(&self) -> Option<&'static EdgeSealingData> {
        FINISHES.iter().find(|f| f.sealing == *self)
    }

    pub fn code(&self) -> &'static str {
        self.data().map_or("custom", |d| d.code)
    }

    pub fn thickness_mm(&self) -> f64 {
        match self {
            EdgeSealing::Custom { thickness_mm } => *thickness_mm,
            other => other.data().map_or(0.0, |d| d.thickness_mm),
        }
    }

    pub fn frame_adjustment(&self) -> i64 {
        self.data().map_or(0, |d| d.frame_adjustment)
    }

    pub fn lock_height_adjustment(&self) -> i64 {
        self.data().map_or(0, |d| d.lock_height_adjustment)
    }
}

const fn finish(
    sealing: EdgeSealing,
    code: &'static str,
    label: &'static str,
    thickness_mm: f64,
    frame_adjustment: i64,
    lock_height_adjustment: i64,
) -> EdgeSealingData {
    EdgeSealingData {
        sealing,
        code,
        label,
        thickness_mm,
        frame_adjustment,
        lock_height_adjustment,
    }
}

const FINISHES: &[EdgeSealingData] = &[
    finish(EdgeSealing::SolidWood6mm, "solid-wood-6mm", "6mm 實木", 6.0, 0, 0),
    finish(EdgeSealing::Aluminium6mm, "aluminium-6mm", "6mm 鋁封邊", 6.0, 0, 0),
    finish(EdgeSealing::Abs05mm, "abs-0.5mm", "0.5mm ABS", 0.5, 10, 4),
    finish(
        EdgeSealing::IronGraphite2mm,
        "iron-graphite-2mm",
        "1mm 鐡封邊 + 1mm 石墨片",
        2.0,
        5,
        3,
    ),
    finish(EdgeSealing::Iron1mm, "iron-1mm", "1mm 鐡封邊", 1.0, 5, 4),
    finish(EdgeSealing::WhiteWood4mm, "white-wood-4mm", "4mm 白木", 4.0, 0, 0),
    finish(EdgeSealing::Melamine08mm, "melamine-0.8mm", "0.8mm 美耐板", 0.8, 10, 4),
    finish(EdgeSealing::NonWoven1mm, "non-woven-1mm", "1mm 不織布", 1.0, 10, 4),
    finish(EdgeSealing::Aluminium1mm, "aluminium-1mm", "1mm 鋁封邊", 1.0, 3, 2),
];
