use serde::Serialize;

use super::types::{DoorType, LockDirection};
use crate::catalog::LockRecord;

/// 락 케이스 위아래 안쪽/바깥쪽 보강목 길이 [mm].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockFillers {
    pub outer_upper: i64,
    pub inner_upper: i64,
    pub outer_bottom: i64,
    pub inner_bottom: i64,
}

/// 아래쪽 안쪽 보강목에서 빼는 값 [mm].
pub const INNER_BOTTOM_CLEARANCE: i64 = 30;

impl LockFillers {
    pub fn sum(&self) -> i64 {
        self.outer_upper + self.inner_upper + self.outer_bottom + self.inner_bottom
    }
}

/// 락 기준 방향에 따라 보강목 네 개의 길이를 구한다.
///
/// 아래 기준이면 락 높이에서 `offset_bottom`을 빼 아래 바깥 보강목을 정하고,
/// 위 기준이면 `offset_top`을 빼 위 바깥 보강목을 정한다. 나머지는 프레임 높이에서
/// 락 길이를 뺀 나머지로 채운다. 어느 방향이든 네 값의 합은
/// `2H - 2L - 30 - k` (k: 전기락 75, 박스락 30) 로 같다.
pub fn compute_lock_fillers(
    frame_height: i64,
    lock_height: i64,
    lock: &LockRecord,
    door_type: DoorType,
    direction: LockDirection,
) -> LockFillers {
    let upper_clearance = door_type.inner_upper_clearance();
    match direction {
        LockDirection::Bottom => {
            let outer_bottom = lock_height - lock.offset_bottom;
            let outer_upper = frame_height - (outer_bottom + lock.length);
            LockFillers {
                outer_upper,
                inner_upper: outer_upper - upper_clearance,
                outer_bottom,
                inner_bottom: outer_bottom - INNER_BOTTOM_CLEARANCE,
            }
        }
        LockDirection::Top => {
            let outer_upper = lock_height - lock.offset_top;
            let outer_bottom = frame_height - (outer_upper + lock.length);
            LockFillers {
                outer_upper,
                inner_upper: outer_upper - upper_clearance,
                outer_bottom,
                inner_bottom: outer_bottom - INNER_BOTTOM_CLEARANCE,
            }
        }
    }
}
