use crate::common::*;

#[doc = "Elasticsearch 접속 정보"]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ElasticServerConfig {
    pub elastic_host: Vec<String>,
    pub elastic_id: Option<String>,
    pub elastic_pw: Option<String>,
}
