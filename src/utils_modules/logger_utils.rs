use crate::common::*;

#[doc = "로그 출력 포맷"]
fn log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}

#[doc = r#"
    전역 로거를 설정해주는 함수.

    로그는 일자별로 롤링되는 파일과 stdout 에 동시에 기록되며,
    오래된 로그 파일은 일정 개수만 보관하고 정리한다.

    # Panics
    로거 초기화에 실패한 경우 애플리케이션 종료
"#]
pub fn set_global_logger() {
    Logger::try_with_str("info")
        .unwrap_or_else(|e| panic!("[Error][set_global_logger()] Invalid log spec: {:?}", e))
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(30),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format(log_format)
        .append()
        .start()
        .unwrap_or_else(|e| panic!("[Error][set_global_logger()] Failed to start logger: {:?}", e));
}
