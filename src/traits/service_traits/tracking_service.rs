use crate::common::*;

use crate::model::account::account_list_config::*;

#[async_trait]
pub trait TrackingService {
    #[doc = "계정 목록 전체에 대해 활동량을 조회하고 방향별 차트를 갱신하는 사이클 1회 수행"]
    async fn run_tracking_cycle(&self, account_list: &AccountListConfig) -> anyhow::Result<()>;
}
