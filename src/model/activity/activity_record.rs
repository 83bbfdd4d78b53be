use crate::common::*;

use crate::enums::activity_direction::*;

use crate::utils_modules::traits::*;

#[doc = r#"
    한 계정의 단일 집계 구간 활동량.

    발신/수신 date_histogram 의 같은 위치 bucket 을 zip 해서 만들어지므로
    하나의 응답 안에서 수신/발신은 항상 같은 구간 순서를 공유한다.
"#]
#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ActivityRecord {
    pub interval_start_datetime: String,
    pub interval_inbound_count: i64,
    pub interval_outbound_count: i64,
}

impl ActivityRecord {
    pub fn count_for(&self, direction: ActivityDirection) -> i64 {
        match direction {
            ActivityDirection::Inbound => self.interval_inbound_count,
            ActivityDirection::Outbound => self.interval_outbound_count,
        }
    }
}

impl FromAggBucketPair for ActivityRecord {
    #[doc = r#"
        발신 bucket 의 `key_as_string` 을 구간 시작 시각으로, 수신/발신 bucket 의
        `doc_count` 를 각 방향의 활동량으로 읽어 레코드를 만든다.

        # Arguments
        * `sent_bucket` - sent_agg 의 date_histogram bucket
        * `rcvd_bucket` - rcvr_agg 의 같은 위치 date_histogram bucket

        # Returns
        * `ActivityRecord` - 변환된 구간 활동량
        * `anyhow::Error` - 필수 필드가 없거나 타입이 맞지 않는 경우
    "#]
    fn from_agg_bucket_pair(
        sent_bucket: &Value,
        rcvd_bucket: &Value,
    ) -> Result<Self, anyhow::Error> {
        let interval_start: String = sent_bucket
            .get("key_as_string")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                anyhow!("[ActivityRecord->from_agg_bucket_pair] Missing or invalid 'key_as_string'")
            })?
            .to_string();

        let outbound_cnt: i64 = sent_bucket
            .get("doc_count")
            .and_then(|v| v.as_i64())
            .ok_or_else(|| {
                anyhow!("[ActivityRecord->from_agg_bucket_pair] Missing 'doc_count' in sent bucket")
            })?;

        let inbound_cnt: i64 = rcvd_bucket
            .get("doc_count")
            .and_then(|v| v.as_i64())
            .ok_or_else(|| {
                anyhow!("[ActivityRecord->from_agg_bucket_pair] Missing 'doc_count' in rcvd bucket")
            })?;

        Ok(ActivityRecord::new(interval_start, inbound_cnt, outbound_cnt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_pair_maps_counts_per_direction() {
        let sent: Value = json!({ "key_as_string": "2001-08-13", "doc_count": 7 });
        let rcvd: Value = json!({ "key_as_string": "2001-08-13", "doc_count": 11 });

        let record: ActivityRecord = ActivityRecord::from_agg_bucket_pair(&sent, &rcvd).unwrap();

        assert_eq!(record.interval_start_datetime(), "2001-08-13");
        assert_eq!(record.count_for(ActivityDirection::Outbound), 7);
        assert_eq!(record.count_for(ActivityDirection::Inbound), 11);
    }

    #[test]
    fn bucket_without_key_is_rejected() {
        let sent: Value = json!({ "doc_count": 7 });
        let rcvd: Value = json!({ "key_as_string": "2001-08-13", "doc_count": 11 });

        assert!(ActivityRecord::from_agg_bucket_pair(&sent, &rcvd).is_err());
    }
}
