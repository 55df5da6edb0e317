//! # 시리즈 모듈 테스트

pub mod store_test;
pub mod dataset_test;
