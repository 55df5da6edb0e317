//! # 그래프 모듈 테스트
//!
//! 명세, 그림 구성, 기본 목록, 렌더러 오류 경로 검증

pub mod spec_test;
pub mod catalog_test;
