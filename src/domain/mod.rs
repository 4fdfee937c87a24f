//! 게이트웨이 도메인 타입
//!
//! 모든 엔티티는 단일 요청 범위 안에서 생성되고 소멸합니다.
//! 유일한 예외인 `Account`조차 원본은 계정 원장 서비스에 있으며
//! 게이트웨이는 일시적 복사본만 다룹니다.

pub mod account;
pub mod forms;
pub mod outcome;

pub use account::Account;
pub use forms::{
    ChangeRoleForm, RequestCodeForm, SignInForm, SignUpForm, VerifiedSignUpForm, VerifyForm,
};
pub use outcome::{AccountData, AccountListData, Outcome, SignInData, SignUpData};
