//! 검증 실패 메시지 카탈로그
//!
//! 제약 조건 코드(`required`, `alpha`, ...)를 클라이언트에게 노출되는 메시지 템플릿으로
//! 변환합니다. 검증 엔진의 기본 메시지 대신 이 표를 사용하므로 클라이언트 계약이
//! 엔진 구현과 무관하게 고정됩니다.
//!
//! | 코드 | En |
//! |------|----|
//! | `required` | this is a required field |
//! | `alpha` | only letters allowed — {value} |
//! | `email` | this is not an email — {value}? |
//! | `max` | too much — {value} |
//! | `min` | too little — {value} |
//! | `uuid` | what is this — {value}? |
//! | 기타 | unknown error |

use std::fmt;

use serde_json::Value;

/// 필수 값 누락
pub const CODE_REQUIRED: &str = "required";
/// 영문자 이외의 문자 포함
pub const CODE_ALPHA: &str = "alpha";
/// 이메일 형식 아님
pub const CODE_EMAIL: &str = "email";
/// 상한 초과
pub const CODE_MAX: &str = "max";
/// 하한 미달
pub const CODE_MIN: &str = "min";
/// UUID 형식 아님
pub const CODE_UUID: &str = "uuid";

/// 템플릿 안에서 실제 입력값으로 치환되는 자리표시자
const VALUE_PLACEHOLDER: &str = "{value}";

/// 검증 메시지 언어
///
/// `APP_LOCALE` 환경 변수로 선택하며 기본값은 영어입니다.
/// 필드 키와 HTTP 상태 코드는 언어와 무관합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// 영어 (기본값)
    #[default]
    En,
    /// 러시아어
    Ru,
}

impl Locale {
    /// 언어 태그에서 Locale을 생성합니다. 알 수 없는 태그는 `En`으로 처리합니다.
    ///
    /// ```rust
    /// use user_service_backend::validation::Locale;
    ///
    /// assert_eq!(Locale::from_tag("ru-RU"), Locale::Ru);
    /// assert_eq!(Locale::from_tag("ko"), Locale::En);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match primary.as_str() {
            "ru" => Locale::Ru,
            _ => Locale::En,
        }
    }

    /// 제약 조건 코드에 해당하는 메시지 템플릿을 반환합니다.
    pub fn template(self, code: &str) -> &'static str {
        match self {
            Locale::En => match code {
                CODE_REQUIRED => "this is a required field",
                CODE_ALPHA => "only letters allowed — {value}",
                CODE_EMAIL => "this is not an email — {value}?",
                CODE_MAX => "too much — {value}",
                CODE_MIN => "too little — {value}",
                CODE_UUID => "what is this — {value}?",
                _ => "unknown error",
            },
            Locale::Ru => match code {
                CODE_REQUIRED => "Это обязательное поле",
                CODE_ALPHA => "Передаем только буквы - {value}",
                CODE_EMAIL => "Это не email - {value}?",
                CODE_MAX => "Многовато будет - {value}",
                CODE_MIN => "Маловато будет - {value}",
                CODE_UUID => "Это что - {value}?",
                _ => "Unknown error",
            },
        }
    }

    /// 코드와 입력값으로 최종 메시지를 만듭니다.
    ///
    /// 입력값이 없으면 자리표시자는 빈 문자열로 치환됩니다.
    pub fn render(self, code: &str, value: Option<&Value>) -> String {
        let template = self.template(code);
        if !template.contains(VALUE_PLACEHOLDER) {
            return template.to_string();
        }

        let rendered = match value {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        template.replace(VALUE_PLACEHOLDER, &rendered)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ru => write!(f, "ru"),
        }
    }
}
