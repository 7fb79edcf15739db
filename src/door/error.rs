use thiserror::Error;

use crate::catalog::HardwareKind;

/// 입력값이 어긴 규칙.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRule {
    /// 현재 분기에 필요한 값이 없음
    Missing,
    /// 숫자로 읽을 수 없음
    NotNumeric(String),
    /// 0 이하. 소수 입력은 원래 값을 문자열로 보존한다.
    NotPositive(String),
    /// 치수 상한을 넘음
    TooLarge { value: i64, limit: i64 },
    /// 수량을 곱한 총 길이가 표현 범위를 넘음
    TotalOverflow,
    /// UB 높이 차이가 UB 보강목 폭을 넘음
    UbHeightRange { difference: i64, limit: i64 },
    /// 최대 높이가 최소 높이보다 낮음
    UbHeightOrder { max: i64, min: i64 },
    /// 현재 도어 분류에서 허용되지 않는 선택
    ModeNotAllowed,
    /// 목록에 없는 선택값
    UnknownOption(String),
}

impl std::fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationRule::Missing => write!(f, "값이 필요합니다"),
            ValidationRule::NotNumeric(raw) => write!(f, "숫자가 아닙니다: '{raw}'"),
            ValidationRule::NotPositive(v) => write!(f, "0보다 커야 합니다 (입력 {v})"),
            ValidationRule::TooLarge { value, limit } => {
                write!(f, "{value}mm 는 허용 상한 {limit}mm 를 넘습니다")
            }
            ValidationRule::TotalOverflow => write!(f, "총 목재 길이가 너무 커서 계산할 수 없습니다"),
            ValidationRule::UbHeightRange { difference, limit } => write!(
                f,
                "최대/최소 높이 차이 {difference}mm 가 UB 보강목 폭 {limit}mm 를 넘습니다"
            ),
            ValidationRule::UbHeightOrder { max, min } => {
                write!(f, "최대 높이 {max}mm 가 최소 높이 {min}mm 보다 낮습니다")
            }
            ValidationRule::ModeNotAllowed => write!(f, "UB 모드는 방화문에서만 사용할 수 있습니다"),
            ValidationRule::UnknownOption(raw) => write!(f, "알 수 없는 선택값: '{raw}'"),
        }
    }
}

/// 재단 계산 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CutListError {
    #[error("입력 오류 [{field}]: {rule}")]
    Validation {
        field: &'static str,
        rule: ValidationRule,
    },
    #[error("{kind} '{name}' 을(를) 카탈로그에서 찾을 수 없고 수동 입력값도 없습니다")]
    Lookup { kind: HardwareKind, name: String },
}

impl CutListError {
    pub fn missing(field: &'static str) -> Self {
        CutListError::Validation {
            field,
            rule: ValidationRule::Missing,
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            CutListError::Validation { field, .. } => Some(field),
            CutListError::Lookup { .. } => None,
        }
    }
}
