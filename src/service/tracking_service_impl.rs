use crate::common::*;

use crate::traits::service_traits::{
    accumulator_service::*, chart_service::*, query_service::*, tracking_service::*,
};

use crate::service::accumulator_service_impl::*;

use crate::enums::{tracking_error::*, update_disposition::*};

use crate::model::account::account_list_config::*;

use crate::model::configs::total_config::*;

#[derive(Debug, new)]
pub struct TrackingServiceImpl<Q: QueryService, C: ChartService + Clone> {
    query_service: Q,
    chart_service: C,
}

#[async_trait]
impl<Q, C> TrackingService for TrackingServiceImpl<Q, C>
where
    Q: QueryService + Sync + Send,
    C: ChartService + Clone + Sync + Send,
{
    #[doc = r#"
        추적 사이클 1회를 수행하는 함수.

        1. 데이터셋 전체의 타임라인 경계를 집계로 결정
        2. 사이클 전용 누적기를 새로 만든다 (차트 출력은 현재 데이터셋의 함수)
        3. 설정된 계정 순서대로 활동량을 조회하여 누적기에 공급
           - 조회 실패 시 해당 슬롯은 빈 응답으로 소비하여 순번 정렬을 유지
           - 상한에 도달하면 남은 계정은 건너뛴다
        4. 차트 백엔드 오류만 사이클 실패로 전파하고, 응답 단위 오류는
           로그만 남기고 다음 계정으로 진행

        # Arguments
        * `account_list` - 시리즈로 올라갈 계정 목록 (순서 고정)

        # Returns
        * `anyhow::Result<()>` - 사이클 성공 여부
    "#]
    async fn run_tracking_cycle(&self, account_list: &AccountListConfig) -> anyhow::Result<()> {
        let system_config = get_system_config_info();

        let date_bounds: (String, String) = self.query_service.get_datetime_bounds().await?;
        info!(
            "activity timeline bounds: {} ~ {}",
            date_bounds.0, date_bounds.1
        );

        let mut accumulator: AccumulatorServiceImpl<C> = AccumulatorServiceImpl::new(
            self.chart_service.clone(),
            get_chart_config_info(),
            *system_config.reset_account_ordinal_yn(),
        );

        for account_config in account_list.account() {
            let account_id: &str = account_config.account_id();

            if accumulator.is_at_capacity() {
                warn!(
                    "account series limit reached ({}), skipping remaining accounts",
                    MAX_ACCOUNT_SERIES
                );
                break;
            }

            let response = match self
                .query_service
                .get_email_activity(Some(account_id), (&date_bounds.0, &date_bounds.1))
                .await
            {
                Ok(response) => Some(response),
                Err(e) => {
                    error!(
                        "[TrackingServiceImpl->run_tracking_cycle] Failed to fetch activity for {}: {:?}",
                        account_id, e
                    );
                    /* 기대했지만 받지 못한 슬롯으로 소비한다 */
                    None
                }
            };

            match accumulator.update(response) {
                Ok(UpdateDisposition::Initialized) => {
                    info!("activity charts initialized ({})", account_id);
                }
                Ok(UpdateDisposition::Loaded) => {
                    info!("activity series loaded ({})", account_id);
                }
                Ok(UpdateDisposition::EmptySlot) => {
                    warn!("no activity response for {}, slot consumed", account_id);
                }
                Err(TrackingError::ChartBackend(e)) => {
                    /* 렌더링 실패는 복구하지 않고 사이클 실패로 전파 */
                    return Err(e);
                }
                Err(e) => {
                    warn!(
                        "[TrackingServiceImpl->run_tracking_cycle] {} skipped: {:?}",
                        account_id, e
                    );
                }
            }
        }

        Ok(())
    }
}
