use crate::common::*;

#[doc = "시리즈 하나 = 공유 타임라인 위의 한 계정 데이터 컬럼"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartColumn {
    pub name: String,
    pub values: Vec<i64>,
}
