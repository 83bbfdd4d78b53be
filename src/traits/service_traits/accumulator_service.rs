use crate::common::*;

use crate::enums::{activity_direction::*, tracking_error::*, update_disposition::*};

use crate::model::activity::activity_response::*;

#[doc = r#"
    계정별 활동량 응답을 받아 방향별 차트 시리즈를 누적하는 컴포넌트.

    호출자는 계정 응답이 도착할 때마다 `update` 를 한 번씩 호출한다.
    누적기는 추적 사이클 하나가 소유하며, 사이클마다 새로 만들어진다.
"#]
pub trait AccumulatorService {
    #[doc = r#"
        응답 하나를 누적한다. 응답이 None 이면 슬롯만 소비한다
        (기대했지만 도착하지 않은 응답과 호출 횟수의 정렬을 유지).
    "#]
    fn update(
        &mut self,
        response: Option<ActivityResponse>,
    ) -> Result<UpdateDisposition, TrackingError>;

    #[doc = "현재 키 목록 전체를 단일 그룹으로 차트에 다시 적용"]
    fn revalidate(&mut self, direction: ActivityDirection) -> anyhow::Result<()>;

    fn account_index(&self) -> usize;

    fn is_at_capacity(&self) -> bool;

    fn series_keys(&self, direction: ActivityDirection) -> &[String];

    fn series_colors(&self, direction: ActivityDirection) -> &HashMap<String, String>;
}
