use crate::common::*;

use crate::model::account::account_list_config::*;

use crate::model::configs::total_config::*;

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

use crate::traits::service_traits::tracking_service::*;

#[derive(Debug, new)]
pub struct MainController<T: TrackingService> {
    tracking_service: T,
}

impl<T: TrackingService> MainController<T> {
    #[doc = r#"
        메인 루프를 실행하는 핵심 함수로, 설정된 주기마다 계정 활동량
        차트 갱신 사이클을 반복 수행한다.

        1. 계정 목록 설정 파일(`ACCOUNT_LIST_PATH`)을 읽어와 추적 대상 계정들을 가져온다
        2. 주기마다 `run_tracking_cycle` 을 호출하여 방향별 차트를 다시 그린다
        3. 무한루프로 동작하며, 사이클 오류 발생 시 해당 사이클을 중단하고
           다음 사이클로 진행

        # Returns
        * `anyhow::Result<()>` - 정상 종료 시 Ok(()), 치명적 오류 시 Err
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        let account_list: AccountListConfig =
            read_toml_from_file::<AccountListConfig>(&ACCOUNT_LIST_PATH)?;
        let ticker_sec: u64 = *get_system_config_info().ticker_sec();

        let mut ticker: Interval = interval(Duration::from_secs(ticker_sec));

        loop {
            ticker.tick().await;

            if let Err(e) = self.tracking_service.run_tracking_cycle(&account_list).await {
                error!("[MainController->main_task] Tracking cycle failed: {:?}", e);
                continue;
            }
        }
    }
}
