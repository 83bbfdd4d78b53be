use crate::common::*;

use crate::traits::{repository_traits::es_repository::*, service_traits::query_service::*};

use crate::repository::es_repository_impl::*;

use crate::utils_modules::{time_utils::*, traits::*};

use crate::model::activity::{activity_record::*, activity_response::*};

use crate::model::configs::total_config::*;

#[derive(Debug, new)]
pub struct QueryServiceImpl {
    es_conn: Arc<EsRepositoryImpl>,
}

impl QueryServiceImpl {
    #[doc = "발신자 주소 필터 (should 절)"]
    fn sender_addrs_filter(email_addrs: &[&str]) -> Vec<Value> {
        email_addrs
            .iter()
            .map(|addr| json!({ "term": { "sender": addr } }))
            .collect()
    }

    #[doc = "수신자 주소 필터. to/cc/bcc 중 하나라도 걸리면 수신으로 집계한다."]
    fn receiver_addrs_filter(email_addrs: &[&str]) -> Vec<Value> {
        email_addrs
            .iter()
            .flat_map(|addr| {
                vec![
                    json!({ "term": { "tos": addr } }),
                    json!({ "term": { "ccs": addr } }),
                    json!({ "term": { "bccs": addr } }),
                ]
            })
            .collect()
    }

    fn date_filter(date_bounds: (&str, &str)) -> Vec<Value> {
        vec![json!({
            "range": {
                "datetime": { "gte": date_bounds.0, "lte": date_bounds.1 }
            }
        })]
    }

    #[doc = r#"
        계정(들)의 발신/수신 활동량을 한 번에 집계하는 쿼리 본문을 만드는 함수.

        발신(sent_agg)과 수신(rcvr_agg)을 같은 date_histogram 설정으로 병렬 집계한다.
        `min_doc_count: 0` 과 `extended_bounds` 를 함께 지정하여, 활동이 없는 구간도
        bucket 으로 채워진다. 덕분에 모든 계정 응답이 같은 구간 순서를 공유한다.

        # Arguments
        * `email_addrs` - 대상 계정 주소 목록 (비어있으면 데이터셋 전체)
        * `date_bounds` - (gte, lte) 타임라인 경계
        * `interval` - date_histogram 집계 간격

        # Returns
        * `Value` - Elasticsearch 쿼리 본문
    "#]
    fn actor_histogram_query(
        email_addrs: &[&str],
        date_bounds: (&str, &str),
        interval: &str,
    ) -> Value {
        let histogram: Value = json!({
            "emails_over_time": {
                "date_histogram": {
                    "field": "datetime",
                    "interval": interval,
                    "format": "yyyy-MM-dd",
                    "min_doc_count": 0,
                    "extended_bounds": {
                        "min": date_bounds.0,
                        "max": date_bounds.1
                    }
                }
            }
        });

        json!({
            "size": 0,
            "aggs": {
                "sent_agg": {
                    "filter": {
                        "bool": {
                            "should": Self::sender_addrs_filter(email_addrs),
                            "must": Self::date_filter(date_bounds)
                        }
                    },
                    "aggs": histogram.clone()
                },
                "rcvr_agg": {
                    "filter": {
                        "bool": {
                            "should": Self::receiver_addrs_filter(email_addrs),
                            "must": Self::date_filter(date_bounds)
                        }
                    },
                    "aggs": histogram
                }
            }
        })
    }

    #[doc = "집계 응답에서 해당 방향의 date_histogram bucket 배열을 꺼내주는 함수"]
    fn extract_buckets<'a>(response_body: &'a Value, agg_name: &str) -> anyhow::Result<&'a Vec<Value>> {
        response_body["aggregations"][agg_name]["emails_over_time"]["buckets"]
            .as_array()
            .ok_or_else(|| {
                anyhow!(
                    "[QueryServiceImpl->extract_buckets] Missing '{}' buckets in search response",
                    agg_name
                )
            })
    }

    #[doc = r#"
        발신/수신 bucket 배열을 같은 위치끼리 zip 하여 활동량 레코드 목록으로 변환하는 함수.

        두 집계는 같은 date_histogram 설정을 공유하므로 bucket 순서와 개수가 일치한다.
        길이가 다르면 짧은 쪽까지만 zip 된다 (zip 의 기본 동작).
    "#]
    fn map_activity_records(
        sent_buckets: &[Value],
        rcvd_buckets: &[Value],
    ) -> anyhow::Result<Vec<ActivityRecord>> {
        sent_buckets
            .iter()
            .zip(rcvd_buckets.iter())
            .map(|(sent, rcvd)| ActivityRecord::from_agg_bucket_pair(sent, rcvd))
            .collect()
    }

    #[doc = r#"
        날짜 경계 집계 응답을 실제 타임라인 경계로 해석하는 함수.

        1. 최소/최대 날짜가 비어있으면 기본 경계로 대체
        2. 중앙값 추정치(50 percentile)가 없으면 최소/최대를
           [1970-01-01, 오늘] 범위로 잘라서 반환
        3. 중앙값이 있으면 중앙값을 기준으로 span 의 절반씩 앞뒤로 펼친 창을 반환

        # Arguments
        * `response_body` - min/max/avg/percentiles 날짜 집계 응답
        * `default_min` / `default_max` - 집계가 비어있을 때의 기본 경계
        * `interval` / `span` - 중앙값 기준 창의 단위와 전체 길이
        * `now` - 오늘 날짜 (yyyy-MM-dd)

        # Returns
        * `(String, String)` - (최소, 최대) 타임라인 경계
    "#]
    fn resolve_datetime_bounds(
        response_body: &Value,
        default_min: &str,
        default_max: &str,
        interval: &str,
        span: i64,
        now: &str,
    ) -> anyhow::Result<(String, String)> {
        let min_date: String = response_body["aggregations"]["min_date"]["value_as_string"]
            .as_str()
            .unwrap_or(default_min)
            .to_string();

        let max_date: String = response_body["aggregations"]["max_date"]["value_as_string"]
            .as_str()
            .unwrap_or(default_max)
            .to_string();

        let pct_date: Option<&str> =
            response_body["aggregations"]["pct_date"]["values"]["50.0_as_string"].as_str();

        let Some(pct_str) = pct_date else {
            /* ISO 문자열이라 사전순 비교가 날짜 비교와 일치한다 */
            let clamped_min: String = if min_date.as_str() >= "1970" {
                min_date
            } else {
                "1970-01-01".to_string()
            };
            let clamped_max: String = if max_date.as_str() <= now {
                max_date
            } else {
                now.to_string()
            };
            return Ok((clamped_min, clamped_max));
        };

        let date_part: &str = pct_str.split('T').next().unwrap_or(pct_str);
        let median: NaiveDate = parse_date_str(date_part)?;
        let delta: chrono::Duration = half_span_duration(interval, span);

        Ok((
            convert_date_to_str(median - delta),
            convert_date_to_str(median + delta),
        ))
    }
}

#[async_trait]
impl QueryService for QueryServiceImpl {
    #[doc = r#"
        이메일 인덱스 전체의 datetime 경계를 집계로 조회하는 함수.

        min/max/avg/percentiles 네 가지 날짜 집계를 한 번의 검색으로 수행한 뒤
        `resolve_datetime_bounds` 규칙으로 타임라인 경계를 결정한다.
    "#]
    async fn get_datetime_bounds(&self) -> anyhow::Result<(String, String)> {
        let system_config = get_system_config_info();

        let query: Value = json!({
            "size": 0,
            "aggregations": {
                "min_date": { "min": { "field": "datetime" } },
                "max_date": { "max": { "field": "datetime" } },
                "avg_date": { "avg": { "field": "datetime" } },
                "pct_date": { "percentiles": { "field": "datetime" } }
            }
        });

        let response_body: Value = self
            .es_conn
            .get_search_query(&query, system_config.email_index_name())
            .await?;

        Self::resolve_datetime_bounds(
            &response_body,
            system_config.default_min_timeline_bound(),
            system_config.default_max_timeline_bound(),
            system_config.timeline_interval(),
            *system_config.default_timeline_span(),
            &get_current_utc_date_str(),
        )
    }

    #[doc = r#"
        계정 하나의 발신/수신 활동량을 구간별로 집계해서 응답으로 만드는 함수.

        1. `actor_histogram_query` 로 발신/수신 병렬 집계 수행
        2. 양쪽 bucket 을 zip 하여 `ActivityRecord` 목록으로 변환
        3. 계정이 지정되지 않았으면 데이터셋 id 명의의 전체 활동량 응답을 만든다

        # Arguments
        * `account_id` - 대상 계정 (None 이면 데이터셋 전체)
        * `date_bounds` - (gte, lte) 타임라인 경계

        # Returns
        * `ActivityResponse` - 구간 순서가 보장된 계정 활동량 응답
        * `anyhow::Error` - ES 조회 실패 또는 bucket 파싱 실패 시
    "#]
    async fn get_email_activity(
        &self,
        account_id: Option<&str>,
        date_bounds: (&str, &str),
    ) -> anyhow::Result<ActivityResponse> {
        let system_config = get_system_config_info();

        let email_addrs: Vec<&str> = match account_id {
            Some(addr) => vec![addr],
            None => Vec::new(),
        };

        let query: Value = Self::actor_histogram_query(
            &email_addrs,
            date_bounds,
            system_config.timeline_interval(),
        );

        let response_body: Value = self
            .es_conn
            .get_search_query(&query, system_config.email_index_name())
            .await?;

        let sent_buckets: &Vec<Value> = Self::extract_buckets(&response_body, "sent_agg")?;
        let rcvd_buckets: &Vec<Value> = Self::extract_buckets(&response_body, "rcvr_agg")?;

        let activities: Vec<ActivityRecord> =
            Self::map_activity_records(sent_buckets, rcvd_buckets)?;

        let data_set_id: String = system_config.data_set_id().to_string();
        let response_account_id: String = account_id
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| data_set_id.clone());

        Ok(ActivityResponse::new(
            response_account_id,
            data_set_id,
            activities,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_histogram_query_builds_parallel_direction_aggs() {
        let query: Value = QueryServiceImpl::actor_histogram_query(
            &["jeb@jeb.org"],
            ("2000-01-01", "2002-01-01"),
            "week",
        );

        assert_eq!(query["size"], 0);

        let sent_hist: &Value =
            &query["aggs"]["sent_agg"]["aggs"]["emails_over_time"]["date_histogram"];
        let rcvr_hist: &Value =
            &query["aggs"]["rcvr_agg"]["aggs"]["emails_over_time"]["date_histogram"];

        assert_eq!(sent_hist["format"], "yyyy-MM-dd");
        assert_eq!(sent_hist["min_doc_count"], 0);
        assert_eq!(sent_hist["extended_bounds"]["min"], "2000-01-01");
        assert_eq!(sent_hist, rcvr_hist);

        /* 수신 필터는 to/cc/bcc 세 주소 필드를 모두 본다 */
        let rcvr_should: &Vec<Value> =
            query["aggs"]["rcvr_agg"]["filter"]["bool"]["should"].as_array().unwrap();
        assert_eq!(rcvr_should.len(), 3);
    }

    #[test]
    fn map_activity_records_zips_by_position() {
        let sent: Vec<Value> = vec![
            json!({ "key_as_string": "2001-08-13", "doc_count": 1 }),
            json!({ "key_as_string": "2001-08-20", "doc_count": 2 }),
        ];
        let rcvd: Vec<Value> = vec![
            json!({ "key_as_string": "2001-08-13", "doc_count": 3 }),
            json!({ "key_as_string": "2001-08-20", "doc_count": 4 }),
        ];

        let records: Vec<ActivityRecord> =
            QueryServiceImpl::map_activity_records(&sent, &rcvd).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(*records[0].interval_outbound_count(), 1);
        assert_eq!(*records[0].interval_inbound_count(), 3);
        assert_eq!(records[1].interval_start_datetime(), "2001-08-20");
    }

    #[test]
    fn datetime_bounds_without_percentile_clamp_to_epoch_and_today() {
        let response: Value = json!({
            "aggregations": {
                "min_date": { "value_as_string": "1969-05-01T00:00:00.000Z" },
                "max_date": { "value_as_string": "2999-01-01T00:00:00.000Z" },
                "pct_date": { "values": {} }
            }
        });

        let (min_bound, max_bound) = QueryServiceImpl::resolve_datetime_bounds(
            &response,
            "1970-01-01",
            "2020-01-01",
            "week",
            30,
            "2026-08-06",
        )
        .unwrap();

        assert_eq!(min_bound, "1970-01-01");
        assert_eq!(max_bound, "2026-08-06");
    }

    #[test]
    fn datetime_bounds_with_percentile_center_the_window_on_the_median() {
        let response: Value = json!({
            "aggregations": {
                "min_date": { "value_as_string": "2000-01-01T00:00:00.000Z" },
                "max_date": { "value_as_string": "2002-01-01T00:00:00.000Z" },
                "pct_date": { "values": { "50.0_as_string": "2001-06-01T00:00:00.000Z" } }
            }
        });

        let (min_bound, max_bound) = QueryServiceImpl::resolve_datetime_bounds(
            &response,
            "1970-01-01",
            "2020-01-01",
            "week",
            30,
            "2026-08-06",
        )
        .unwrap();

        /* 2001-06-01 기준 15주 전/후 */
        assert_eq!(min_bound, "2001-02-16");
        assert_eq!(max_bound, "2001-09-14");
    }

    #[test]
    fn datetime_bounds_fall_back_to_defaults_when_aggs_are_empty() {
        let response: Value = json!({ "aggregations": {} });

        let (min_bound, max_bound) = QueryServiceImpl::resolve_datetime_bounds(
            &response,
            "1970-01-01",
            "2020-01-01",
            "week",
            30,
            "2026-08-06",
        )
        .unwrap();

        assert_eq!(min_bound, "1970-01-01");
        assert_eq!(max_bound, "2020-01-01");
    }
}
