//! 문자열 입력 폼을 `DoorConfiguration`으로 바꾼다.
//!
//! 대화형 CLI는 모든 값을 문자열로 받으므로, 숫자/선택값 검사는 여기서 한 번만 한다.
//! 분기별 필수 항목 검사는 `compute`가 맡는다.

use std::collections::BTreeMap;

use super::edge_sealing::{find_finish, EdgeSealing};
use super::error::{CutListError, ValidationRule};
use super::types::{
    CloserSelection, DoorCategory, DoorConfiguration, DoorType, FrameMode, LockDirection,
    LockSelection, ManualLock, StructureType, VERY_UPPER_HORIZONTAL_PIECE_WIDTH,
};

/// 폼 항목 이름.
pub mod fields {
    pub const CATEGORY: &str = "category";
    pub const MODE: &str = "mode";
    pub const STRUCTURE_TYPE: &str = "structure_type";
    pub const DOOR_TYPE: &str = "door_type";
    pub const NUM_DOORS: &str = "num_doors";
    pub const RIGHT_VPIECE_WIDTH: &str = "right_vpiece_width";
    pub const LEFT_VPIECE_WIDTH: &str = "left_vpiece_width";
    pub const UPPER_HPIECE_WIDTH: &str = "upper_hpiece_width";
    pub const LOWER_HPIECE_WIDTH: &str = "lower_hpiece_width";
    pub const EDGE_SEALING_TYPE: &str = "edge_sealing_type";
    pub const EDGE_SEALING_THICKNESS: &str = "edge_sealing_thickness";
    pub const FRAME_HEIGHT: &str = "frame_height";
    pub const FRAME_WIDTH: &str = "frame_width";
    pub const MAX_HEIGHT: &str = "max_height";
    pub const MIN_HEIGHT: &str = "min_height";
    pub const UB_WOOD_WIDTH: &str = "ub_wood_width";
    pub const LOCK_NAME: &str = "lock_name";
    pub const LOCK_LENGTH: &str = "lock_length";
    pub const LOCK_OFFSET_BOTTOM: &str = "lock_offset_bottom";
    pub const LOCK_HEIGHT: &str = "lock_height";
    pub const LOCK_DIRECTION: &str = "lock_direction";
    pub const CONCEALED_DOOR_CLOSER_NAME: &str = "concealed_door_closer_name";
    pub const CONCEALED_DOOR_CLOSER_LENGTH: &str = "concealed_door_closer_length";
    pub const CONCEALED_WOOD_WIDTH: &str = "concealed_wood_width";
    pub const SLATS_WIDTH: &str = "slats_width";
    pub const GAP_WIDTH: &str = "gap_width";
    pub const REINFORCE_WOOD: &str = "reinforce_wood";
}

use fields::*;

/// 항목 이름 → 입력 문자열.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    values: BTreeMap<&'static str, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &'static str, value: impl Into<String>) -> &mut Self {
        self.values.insert(field, value.into());
        self
    }

    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// 공백뿐인 값은 입력하지 않은 것으로 본다.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn int(&self, field: &'static str) -> Result<Option<i64>, CutListError> {
        match self.get(field) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| CutListError::Validation {
                    field,
                    rule: ValidationRule::NotNumeric(raw.to_string()),
                }),
        }
    }

    fn required_int(&self, field: &'static str) -> Result<i64, CutListError> {
        self.int(field)?.ok_or(CutListError::missing(field))
    }

    fn choice<T>(
        &self,
        field: &'static str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>, CutListError> {
        match self.get(field) {
            None => Ok(None),
            Some(raw) => parse(raw).map(Some).ok_or_else(|| CutListError::Validation {
                field,
                rule: ValidationRule::UnknownOption(raw.to_string()),
            }),
        }
    }

    fn edge_sealing(&self) -> Result<EdgeSealing, CutListError> {
        let thickness = match self.get(EDGE_SEALING_THICKNESS) {
            None => None,
            Some(raw) => {
                let value = raw.parse::<f64>().map_err(|_| CutListError::Validation {
                    field: EDGE_SEALING_THICKNESS,
                    rule: ValidationRule::NotNumeric(raw.to_string()),
                })?;
                if value.is_nan() || value <= 0.0 {
                    return Err(CutListError::Validation {
                        field: EDGE_SEALING_THICKNESS,
                        rule: ValidationRule::NotPositive(raw.to_string()),
                    });
                }
                Some(value)
            }
        };
        let known = self
            .get(EDGE_SEALING_TYPE)
            .filter(|raw| !raw.eq_ignore_ascii_case("custom"))
            .map(|raw| (raw, find_finish(raw)));
        match (known, thickness) {
            (Some((_, Some(finish))), _) => Ok(finish.sealing),
            (Some((raw, None)), None) => Err(CutListError::Validation {
                field: EDGE_SEALING_TYPE,
                rule: ValidationRule::UnknownOption(raw.to_string()),
            }),
            (_, Some(thickness_mm)) => Ok(EdgeSealing::Custom { thickness_mm }),
            (None, None) => match self.get(EDGE_SEALING_TYPE) {
                Some(_) => Err(CutListError::missing(EDGE_SEALING_THICKNESS)),
                None => Ok(EdgeSealing::default()),
            },
        }
    }

    fn lock(&self) -> Result<Option<LockSelection>, CutListError> {
        let name = self.get(LOCK_NAME).map(str::to_string);
        let manual = match (self.int(LOCK_LENGTH)?, self.int(LOCK_OFFSET_BOTTOM)?) {
            (Some(length), Some(offset_bottom)) => Some(ManualLock {
                length,
                offset_bottom,
            }),
            (Some(_), None) => return Err(CutListError::missing(LOCK_OFFSET_BOTTOM)),
            (None, Some(_)) => return Err(CutListError::missing(LOCK_LENGTH)),
            (None, None) => None,
        };
        if name.is_none() && manual.is_none() {
            return Ok(None);
        }
        Ok(Some(LockSelection { name, manual }))
    }

    fn closer(&self) -> Result<Option<CloserSelection>, CutListError> {
        let name = self.get(CONCEALED_DOOR_CLOSER_NAME).map(str::to_string);
        let length = self.int(CONCEALED_DOOR_CLOSER_LENGTH)?;
        if name.is_none() && length.is_none() {
            return Ok(None);
        }
        Ok(Some(CloserSelection { name, length }))
    }

    /// 폼 전체를 구성으로 바꾼다. 숫자가 아니거나 목록에 없는 값은 즉시 오류.
    pub fn to_configuration(&self) -> Result<DoorConfiguration, CutListError> {
        let category = self
            .choice(CATEGORY, DoorCategory::from_code)?
            .ok_or(CutListError::missing(CATEGORY))?;
        let door_type = self
            .choice(DOOR_TYPE, DoorType::from_code)?
            .ok_or(CutListError::missing(DOOR_TYPE))?;

        Ok(DoorConfiguration {
            category,
            mode: self.choice(MODE, FrameMode::from_code)?.unwrap_or_default(),
            structure_type: self
                .choice(STRUCTURE_TYPE, StructureType::from_code)?
                .unwrap_or_default(),
            door_type,
            num_doors: self.required_int(NUM_DOORS)?,
            right_vpiece_width: self.required_int(RIGHT_VPIECE_WIDTH)?,
            left_vpiece_width: self.required_int(LEFT_VPIECE_WIDTH)?,
            upper_hpiece_width: self.required_int(UPPER_HPIECE_WIDTH)?,
            lower_hpiece_width: self.required_int(LOWER_HPIECE_WIDTH)?,
            edge_sealing: self.edge_sealing()?,
            frame_height: self.int(FRAME_HEIGHT)?,
            frame_width: self.required_int(FRAME_WIDTH)?,
            max_height: self.int(MAX_HEIGHT)?,
            min_height: self.int(MIN_HEIGHT)?,
            ub_wood_width: self.int(UB_WOOD_WIDTH)?,
            lock: self.lock()?,
            lock_height: self.int(LOCK_HEIGHT)?,
            lock_direction: self
                .choice(LOCK_DIRECTION, LockDirection::from_code)?
                .unwrap_or_default(),
            concealed_closer: self.closer()?,
            concealed_wood_width: self
                .int(CONCEALED_WOOD_WIDTH)?
                .unwrap_or(VERY_UPPER_HORIZONTAL_PIECE_WIDTH),
            slats_width: self.int(SLATS_WIDTH)?,
            gap_width: self.int(GAP_WIDTH)?,
            reinforce_wood: self.int(REINFORCE_WOOD)?,
        })
    }
}
