//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                # 클라이언트 → 서버
//! │   ├── create_user.rs      # POST /user
//! │   ├── get_user.rs         # GET /user/{id}
//! │   └── update_user.rs      # PATCH /user
//! └── response/               # 서버 → 클라이언트
//!     └── user_response.rs    # 사용자 응답
//! ```

pub mod request;
pub mod response;
