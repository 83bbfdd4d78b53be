use crate::common::*;

use crate::model::activity::activity_response::*;

#[async_trait]
pub trait QueryService: Send + Sync {
    #[doc = r#"
        데이터셋 전체의 타임라인 경계를 (최소, 최대) yyyy-MM-dd 문자열 쌍으로 반환.
        중앙값 추정치가 있으면 중앙값을 기준으로 설정된 span 만큼의 창을 돌려준다.
    "#]
    async fn get_datetime_bounds(&self) -> anyhow::Result<(String, String)>;

    #[doc = r#"
        계정 하나의 발신/수신 활동량을 date_histogram 으로 집계해서 응답으로 반환.
        `account_id` 가 None 이면 데이터셋 전체 활동량을 데이터셋 id 명의로 집계한다.
    "#]
    async fn get_email_activity(
        &self,
        account_id: Option<&str>,
        date_bounds: (&str, &str),
    ) -> anyhow::Result<ActivityResponse>;
}
