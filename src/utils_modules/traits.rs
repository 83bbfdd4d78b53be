use crate::common::*;

/* 동일 계정의 발신/수신 date_histogram bucket 쌍 → 도메인 타입 변환을 위한 공통 트레이트 */
pub trait FromAggBucketPair
where
    Self: Sized,
{
    fn from_agg_bucket_pair(sent_bucket: &Value, rcvd_bucket: &Value) -> Result<Self, anyhow::Error>;
}
