use crate::common::*;

#[doc = "오늘 날짜를 yyyy-MM-dd 문자열로 반환하는 함수"]
pub fn get_current_utc_date_str() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[doc = ""]
pub fn convert_date_to_str(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[doc = "yyyy-MM-dd 문자열을 NaiveDate 로 파싱해주는 함수"]
pub fn parse_date_str(date_str: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        anyhow!(
            "[Error][parse_date_str()] Failed to parse '{}' as yyyy-MM-dd: {}",
            date_str,
            e
        )
    })
}

#[doc = r#"
    타임라인 창 절반 길이를 interval 단위에 맞는 Duration 으로 환산하는 함수.

    # Arguments
    * `interval` - date_histogram 집계 간격 ("day" / "week" / "month")
    * `span` - 창 전체 길이 (interval 단위 개수)

    # Returns
    * `chrono::Duration` - span 의 절반에 해당하는 기간
"#]
pub fn half_span_duration(interval: &str, span: i64) -> chrono::Duration {
    let half: i64 = span / 2;

    match interval {
        "week" => chrono::Duration::weeks(half),
        "month" => chrono::Duration::days(half * 30),
        _ => chrono::Duration::days(half),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_str_round_trips() {
        let date: NaiveDate = parse_date_str("2001-08-13").unwrap();
        assert_eq!(convert_date_to_str(date), "2001-08-13");
    }

    #[test]
    fn parse_date_str_rejects_other_formats() {
        assert!(parse_date_str("2001/08/13").is_err());
        assert!(parse_date_str("13-08-2001").is_err());
    }

    #[test]
    fn half_span_duration_follows_interval_unit() {
        assert_eq!(half_span_duration("week", 30), chrono::Duration::weeks(15));
        assert_eq!(half_span_duration("day", 30), chrono::Duration::days(15));
        assert_eq!(half_span_duration("month", 2), chrono::Duration::days(30));
    }
}
