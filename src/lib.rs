//! 게임 퍼블리싱 플랫폼 관리자 백엔드
//!
//! 벤더 온보딩 문서 리뷰, 벤더 알림, 벤더 계정 관리를 위한 REST API입니다.
//!
//! ```text
//! handlers ─▶ services ─▶ repositories (trait) ─▶ MongoDB + Redis | memory
//! ```

pub mod caching;
pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
