use crate::common::*;

#[doc = "추적 대상 계정 하나에 대한 설정"]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct AccountConfig {
    pub account_id: String,
}
