use serde::Serialize;

use super::types::StructureType;

/// 구조형 일반문의 살대/공간 수량. 단위 mm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureQuantities {
    pub structure_type: StructureType,
    pub slats_width: i64,
    pub slats_length: i64,
    pub slats_count: u64,
    /// 일패일공에서만 채운다 (살대 + 락 보강 4개).
    pub total_blocks: Option<u64>,
    pub gap_width: Option<f64>,
    pub gap_length: Option<f64>,
    pub gap_length_upper: Option<f64>,
    pub gap_length_bottom: Option<f64>,
}

impl StructureQuantities {
    fn new(structure_type: StructureType, frame: &StructureFrame, slats_count: u64) -> Self {
        Self {
            structure_type,
            slats_width: frame.slats_width,
            slats_length: frame.inner_width,
            slats_count,
            total_blocks: None,
            gap_width: None,
            gap_length: None,
            gap_length_upper: None,
            gap_length_bottom: None,
        }
    }

    /// 음수 검사용으로 이름과 길이 값을 나열한다.
    pub fn named_lengths(&self) -> Vec<(&'static str, f64)> {
        let mut out = vec![("slats_length", self.slats_length as f64)];
        let optional = [
            ("gap_width", self.gap_width),
            ("gap_length", self.gap_length),
            ("gap_length_upper", self.gap_length_upper),
            ("gap_length_bottom", self.gap_length_bottom),
        ];
        out.extend(optional.into_iter().filter_map(|(n, v)| v.map(|v| (n, v))));
        out
    }
}

/// 구조 계산에 필요한 프레임 치수.
#[derive(Debug, Clone, Copy)]
pub struct StructureFrame {
    /// 마감 보정이 반영된 프레임 높이
    pub frame_height: i64,
    pub plywood_height: i64,
    pub inner_width: i64,
    pub upper_width: i64,
    pub lower_width: i64,
    pub slats_width: i64,
    /// 도어클로저가 있으면 최상단 가로목 폭
    pub concealed_wood_width: Option<i64>,
}

/// 간단문에서 손잡이 보강 위치를 정하는 값.
#[derive(Debug, Clone, Copy)]
pub struct HandleReinforcement {
    pub lock_height: i64,
    pub reinforce_wood: i64,
}

/// 일패일공: 합판 높이를 (살대 + 간격) 단위로 나눈 몫만큼 살대를 넣는다.
pub fn yipaiyikong(frame: &StructureFrame, gap_width: i64) -> StructureQuantities {
    let pitch = frame.slats_width + gap_width;
    let slats_count = if pitch > 0 && frame.plywood_height > 0 {
        (frame.plywood_height / pitch) as u64
    } else {
        0
    };
    let mut q = StructureQuantities::new(StructureType::Yipaiyikong, frame, slats_count);
    q.total_blocks = Some(slats_count + 4);
    q.gap_width = Some(gap_width as f64);
    q
}

/// 허니콤 보드 + 락 도어. 살대 2개, 공간 길이는 올림한다.
pub fn honeycomb_board_lock(frame: &StructureFrame) -> StructureQuantities {
    let h = frame.frame_height as f64;
    let s = frame.slats_width as f64;
    let upper = frame.upper_width as f64;
    let lower = frame.lower_width as f64;
    let (gap_width, gap_length) = match frame.concealed_wood_width {
        None => (
            (h - 4.0 * s) / 3.0,
            ((h - upper - lower - 2.0 * s) / 3.0).ceil(),
        ),
        Some(cw) => {
            let cw = cw as f64;
            (
                (h - 3.0 * s - upper) / 3.0,
                ((h - 2.0 * s - upper - lower - cw) / 3.0).ceil(),
            )
        }
    };
    let mut q = StructureQuantities::new(StructureType::HoneycombBoard, frame, 2);
    q.gap_width = Some(gap_width);
    q.gap_length = Some(gap_length);
    q
}

/// 허니콤 보드 간단문. 손잡이 보강을 가운데 두고 위/아래 공간을 나눈다.
pub fn honeycomb_board_simple(
    frame: &StructureFrame,
    handle: HandleReinforcement,
) -> StructureQuantities {
    let h = frame.frame_height as f64;
    let s = frame.slats_width as f64;
    let upper = frame.upper_width as f64;
    let lower = frame.lower_width as f64;
    let middle = handle.reinforce_wood as f64 + 2.0 * s;
    let gap_bottom = handle.lock_height as f64 - middle / 2.0 - lower;
    let gap_upper = h - gap_bottom - middle - upper - lower;

    let mut q = StructureQuantities::new(StructureType::HoneycombBoard, frame, 2);
    q.gap_length_bottom = Some(gap_bottom);
    q.gap_length_upper = Some(gap_upper);
    q
}

/// 허니콤 페이퍼 + 락 도어. 살대 4개, 공간 5칸. 소수점은 그대로 둔다.
pub fn honeycomb_paper_lock(frame: &StructureFrame) -> StructureQuantities {
    let h = frame.frame_height as f64;
    let s = frame.slats_width as f64;
    let upper = frame.upper_width as f64;
    let lower = frame.lower_width as f64;
    let cw = frame.concealed_wood_width.unwrap_or(0) as f64;
    let gap_width = (h - 6.0 * s - cw) / 5.0;
    let gap_length = (h - 4.0 * s - upper - lower - cw) / 5.0;

    let mut q = StructureQuantities::new(StructureType::HoneycombPaper, frame, 4);
    q.gap_width = Some(gap_width);
    q.gap_length = Some(gap_length);
    q
}

/// 허니콤 페이퍼 간단문. 위/아래 공간을 각각 두 칸으로 나눈다.
pub fn honeycomb_paper_simple(
    frame: &StructureFrame,
    handle: HandleReinforcement,
) -> StructureQuantities {
    let h = frame.frame_height as f64;
    let s = frame.slats_width as f64;
    let upper = frame.upper_width as f64;
    let lower = frame.lower_width as f64;
    let middle = handle.reinforce_wood as f64 + 2.0 * s;
    let gap_bottom = (handle.lock_height as f64 - middle / 2.0 - lower - s) / 2.0;
    let gap_upper = (h - gap_bottom - middle - upper - lower - s) / 2.0;

    let mut q = StructureQuantities::new(StructureType::HoneycombPaper, frame, 4);
    q.gap_length_bottom = Some(gap_bottom);
    q.gap_length_upper = Some(gap_upper);
    q
}
