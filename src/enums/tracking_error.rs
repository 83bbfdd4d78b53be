use thiserror::Error;

#[doc = r#"
    계정 활동량 누적 과정에서 발생할 수 있는 오류 분류.

    - `MalformedResponse` : 응답 형식이 누적 가능한 최소 조건을 만족하지 못하는 경우
    - `DuplicateAccount` : 이미 시리즈로 누적된 계정이 다시 들어온 경우
    - `AccountLimitExceeded` : 차트에 올릴 수 있는 계정 시리즈 상한을 넘은 호출
    - `ChartBackend` : 차트 렌더링 백엔드에서 올라온 오류 (복구하지 않고 전파)
"#]
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("malformed activity response: {0}")]
    MalformedResponse(String),

    #[error("account '{0}' has already been accumulated")]
    DuplicateAccount(String),

    #[error("account series limit reached (max {max})")]
    AccountLimitExceeded { max: usize },

    #[error("chart backend failure: {0}")]
    ChartBackend(#[from] anyhow::Error),
}
