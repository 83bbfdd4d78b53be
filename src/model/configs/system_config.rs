use crate::common::*;

#[doc = r#"
    시스템 전역 설정.

    - `email_index_name` : 이메일 문서가 색인된 Elasticsearch 인덱스명
    - `data_set_id` : 현재 추적중인 데이터셋 식별자 (차트 로그 및 전체 집계 응답 id 로 사용)
    - `timeline_interval` : date_histogram 집계 간격 ("day" / "week" / "month")
    - `default_min_timeline_bound` / `default_max_timeline_bound` : 날짜 경계 집계가
      비어있을 때 사용하는 기본 타임라인 경계 (yyyy-MM-dd)
    - `default_timeline_span` : 중앙값 기준 타임라인 창의 전체 길이 (interval 단위)
    - `ticker_sec` : 추적 사이클 주기 (초)
    - `reset_account_ordinal_yn` : 차트 최초 생성 직후 계정 순번 카운터를 0으로
      되돌리는 기존 동작을 유지할지 여부
"#]
#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub email_index_name: String,
    pub data_set_id: String,
    pub timeline_interval: String,
    pub default_min_timeline_bound: String,
    pub default_max_timeline_bound: String,
    pub default_timeline_span: i64,
    pub ticker_sec: u64,
    pub reset_account_ordinal_yn: bool,
}
