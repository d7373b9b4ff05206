//! # Repository Layer
//!
//! 데이터 액세스 계층입니다. 상위 계층은 trait에만 의존하며,
//! 구현체는 `main`에서 생성되어 주입됩니다.

pub mod users;
