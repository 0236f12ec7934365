//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 시 저장소 구성과 라우트 요약을 보기 좋게 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              Publisher Admin Backend             ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 하위 항목을 트리 형태로 출력합니다
///
/// ```text
///    ├─ Storage: mongodb
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 기동 요약
///
/// 선택된 저장소 백엔드, 바인딩 주소, 등록된 서비스 수를 출력합니다.
pub fn print_startup_summary(backend: &str, bind_address: &str, services: usize) {
    println!();
    print_boxed_title("🎮 PUBLISHER ADMIN BACKEND");
    print_sub_task("Storage", backend);
    print_sub_task("Listen", bind_address);
    print_sub_task("Services", &services.to_string());
    println!();
}
