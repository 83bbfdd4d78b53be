use crate::common::*;

use crate::dto::chart_column::*;

use crate::enums::{activity_direction::*, tracking_error::*};

use crate::model::activity::activity_record::*;

#[doc = r#"
    계정 하나에 대한 활동량 조회 응답.

    `activities` 는 구간 순서가 보장된 레코드 목록이며, 응답에 활동 목록이
    아예 없는 경우에도 빈 목록으로 취급한다 (누락은 실패가 아니다).
"#]
#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ActivityResponse {
    pub account_id: String,
    pub data_set_id: String,
    #[serde(default)]
    pub activities: Vec<ActivityRecord>,
}

impl ActivityResponse {
    #[doc = r#"
        누적기에 들어가기 전 응답의 최소 형식을 검증하는 함수.

        계정 식별자가 비어있으면 시리즈 이름/색상 키로 사용할 수 없으므로
        `MalformedResponse` 로 거절한다. 활동 목록의 존재 여부는 검사하지 않는다.

        # Returns
        * `Ok(())` - 누적 가능한 응답
        * `TrackingError::MalformedResponse` - 계정 식별자가 공백인 경우
    "#]
    pub fn validate(&self) -> Result<(), TrackingError> {
        if self.account_id.trim().is_empty() {
            return Err(TrackingError::MalformedResponse(
                "account_id is blank".to_string(),
            ));
        }

        Ok(())
    }

    #[doc = "응답 하나를 해당 방향의 차트 데이터 컬럼으로 변환하는 함수"]
    pub fn series_column(&self, direction: ActivityDirection) -> ChartColumn {
        let values: Vec<i64> = self
            .activities
            .iter()
            .map(|activity| activity.count_for(direction))
            .collect();

        ChartColumn::new(self.account_id.clone(), values)
    }

    #[doc = "응답의 구간 시작 시각들을 차트 x 축 타임라인으로 변환하는 함수"]
    pub fn timeline(&self) -> Vec<String> {
        self.activities
            .iter()
            .map(|activity| activity.interval_start_datetime().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> ActivityResponse {
        ActivityResponse::new(
            "jeb@jeb.org".to_string(),
            "sample".to_string(),
            vec![
                ActivityRecord::new("2001-08-13".to_string(), 3, 5),
                ActivityRecord::new("2001-08-20".to_string(), 0, 2),
            ],
        )
    }

    #[test]
    fn series_column_follows_direction() {
        let response: ActivityResponse = sample_response();

        let inbound: ChartColumn = response.series_column(ActivityDirection::Inbound);
        let outbound: ChartColumn = response.series_column(ActivityDirection::Outbound);

        assert_eq!(inbound.name(), "jeb@jeb.org");
        assert_eq!(inbound.values(), &vec![3, 0]);
        assert_eq!(outbound.values(), &vec![5, 2]);
    }

    #[test]
    fn timeline_preserves_interval_order() {
        let response: ActivityResponse = sample_response();
        assert_eq!(
            response.timeline(),
            vec!["2001-08-13".to_string(), "2001-08-20".to_string()]
        );
    }

    #[test]
    fn missing_activities_produce_empty_tail() {
        let parsed: ActivityResponse =
            serde_json::from_value(json!({ "account_id": "a@b.org", "data_set_id": "sample" }))
                .unwrap();

        assert!(parsed.activities().is_empty());
        assert!(parsed.series_column(ActivityDirection::Inbound).values().is_empty());
    }

    #[test]
    fn blank_account_id_is_malformed() {
        let response: ActivityResponse =
            ActivityResponse::new("  ".to_string(), "sample".to_string(), vec![]);

        assert!(matches!(
            response.validate(),
            Err(TrackingError::MalformedResponse(_))
        ));
    }
}
