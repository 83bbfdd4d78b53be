use crate::common::*;

use crate::model::account::account_config::*;

#[doc = "차트 시리즈로 올라갈 계정 목록. 목록 순서가 시리즈 누적 순서가 된다."]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct AccountListConfig {
    pub account: Vec<AccountConfig>,
}
