use crate::common::*;

use crate::traits::service_traits::{accumulator_service::*, chart_service::*};

use crate::dto::{chart_column::*, chart_spec::*};

use crate::enums::{activity_direction::*, tracking_error::*, update_disposition::*};

use crate::model::activity::activity_response::*;

use crate::model::configs::chart_config::*;

/* 차트에 올라갈 수 있는 계정 시리즈의 상한 */
pub const MAX_ACCOUNT_SERIES: usize = 4;

#[doc = r#"
    방향 하나의 시리즈 장부.

    `keys` 는 최초 등장 순서를 유지하는 추가 전용 목록이고, `color_map` 은
    한 번 배정된 색을 다시 바꾸지 않는다. 두 장부는 계정 하나당 한 칸씩
    같이 자란다 (`keys.len() == color_map.len()`).
"#]
#[derive(Debug)]
struct SeriesState<H: ChartHandle> {
    keys: Vec<String>,
    color_map: HashMap<String, String>,
    chart: Option<H>,
}

impl<H: ChartHandle> SeriesState<H> {
    fn new() -> Self {
        SeriesState {
            keys: Vec::new(),
            color_map: HashMap::new(),
            chart: None,
        }
    }
}

fn build_chart_spec<H: ChartHandle>(
    direction: ActivityDirection,
    timeline: &[String],
    column: &ChartColumn,
    state: &SeriesState<H>,
    output_dir: &str,
) -> ChartSpec {
    ChartSpec::new(
        Path::new(output_dir).join(direction.chart_file_name()),
        direction.chart_title().to_string(),
        timeline.to_vec(),
        vec![column.clone()],
        vec![state.keys.clone()],
        state.color_map.clone(),
    )
}

#[doc = r#"
    계정별 활동량 응답을 방향별 차트 시리즈로 누적하는 컴포넌트.

    응답이 하나 들어올 때마다:
    1. 양방향 차트가 아직 없으면 응답의 구간 시각들로 타임라인을 만들어
       두 차트를 생성하고,
    2. 이미 있으면 새 시리즈 컬럼과 전체 색상 매핑을 증분 적재한 뒤,
    3. 항상 전체 키 목록을 단일 그룹으로 다시 적용한다. 증분 적재만으로는
       새 시리즈가 기존 시리즈와 한 묶음으로 렌더링되지 않기 때문이다.

    최초 차트 생성 직후 계정 순번 카운터를 0으로 되돌리는 동작은
    `reset_account_ordinal_yn` 플래그 뒤에 보존되어 있다. 이 재시작 때문에
    생성 이전에 소비된 빈 슬롯만큼 상한이 늦게 걸린다는 점에 주의.
"#]
pub struct AccumulatorServiceImpl<C: ChartService> {
    chart_service: C,
    chart_config: &'static ChartConfig,
    reset_account_ordinal_yn: bool,
    account_index: usize,
    max_accounts: usize,
    inbound: SeriesState<C::Handle>,
    outbound: SeriesState<C::Handle>,
}

impl<C: ChartService> AccumulatorServiceImpl<C> {
    pub fn new(
        chart_service: C,
        chart_config: &'static ChartConfig,
        reset_account_ordinal_yn: bool,
    ) -> Self {
        AccumulatorServiceImpl {
            chart_service,
            chart_config,
            reset_account_ordinal_yn,
            account_index: 0,
            max_accounts: MAX_ACCOUNT_SERIES,
            inbound: SeriesState::new(),
            outbound: SeriesState::new(),
        }
    }

    fn series_state(&self, direction: ActivityDirection) -> &SeriesState<C::Handle> {
        match direction {
            ActivityDirection::Inbound => &self.inbound,
            ActivityDirection::Outbound => &self.outbound,
        }
    }

    fn series_state_mut(&mut self, direction: ActivityDirection) -> &mut SeriesState<C::Handle> {
        match direction {
            ActivityDirection::Inbound => &mut self.inbound,
            ActivityDirection::Outbound => &mut self.outbound,
        }
    }

    #[doc = "계정을 양방향 장부에 올리는 함수. 색은 한 번 배정되면 바뀌지 않는다."]
    fn register_account(&mut self, account_id: &str, account_color: &str) {
        for direction in ActivityDirection::ALL {
            let state: &mut SeriesState<C::Handle> = self.series_state_mut(direction);
            state.keys.push(account_id.to_string());
            state
                .color_map
                .entry(account_id.to_string())
                .or_insert_with(|| account_color.to_string());
        }
    }
}

impl<C: ChartService> AccumulatorService for AccumulatorServiceImpl<C> {
    #[doc = r#"
        응답 하나를 누적하는 함수.

        # Arguments
        * `response` - 계정 활동량 응답. None 이면 기대했지만 도착하지 않은
          슬롯으로 취급하여 카운터만 증가시킨다.

        # Returns
        * `UpdateDisposition` - 이번 호출이 수행한 작업 종류
        * `TrackingError` - 상한 초과 / 형식 불량 / 중복 계정 / 차트 백엔드 오류.
          오류 반환 시 장부와 차트 상태는 변하지 않는다 (백엔드 오류 제외).
    "#]
    fn update(
        &mut self,
        response: Option<ActivityResponse>,
    ) -> Result<UpdateDisposition, TrackingError> {
        if self.account_index >= self.max_accounts {
            return Err(TrackingError::AccountLimitExceeded {
                max: self.max_accounts,
            });
        }

        let Some(response) = response else {
            self.account_index += 1;
            return Ok(UpdateDisposition::EmptySlot);
        };

        response.validate()?;

        if self.inbound.keys.iter().any(|key| key == response.account_id()) {
            return Err(TrackingError::DuplicateAccount(response.account_id().clone()));
        }

        info!(
            "account activity update: {} ({})",
            response.account_id(),
            response.data_set_id()
        );

        let account_id: String = response.account_id().clone();
        let account_color: String = self
            .chart_config
            .series_color(self.account_index)
            .to_string();

        let inbound_column: ChartColumn = response.series_column(ActivityDirection::Inbound);
        let outbound_column: ChartColumn = response.series_column(ActivityDirection::Outbound);

        self.register_account(&account_id, &account_color);

        let disposition: UpdateDisposition =
            if self.inbound.chart.is_none() || self.outbound.chart.is_none() {
                let timeline: Vec<String> = response.timeline();

                let inbound_spec: ChartSpec = build_chart_spec(
                    ActivityDirection::Inbound,
                    &timeline,
                    &inbound_column,
                    &self.inbound,
                    self.chart_config.output_dir(),
                );
                let outbound_spec: ChartSpec = build_chart_spec(
                    ActivityDirection::Outbound,
                    &timeline,
                    &outbound_column,
                    &self.outbound,
                    self.chart_config.output_dir(),
                );

                self.inbound.chart = Some(self.chart_service.generate(&inbound_spec)?);
                self.outbound.chart = Some(self.chart_service.generate(&outbound_spec)?);

                if self.reset_account_ordinal_yn {
                    self.account_index = 0;
                }

                UpdateDisposition::Initialized
            } else {
                if let Some(chart) = self.inbound.chart.as_mut() {
                    chart.load(std::slice::from_ref(&inbound_column), &self.inbound.color_map)?;
                }
                if let Some(chart) = self.outbound.chart.as_mut() {
                    chart.load(
                        std::slice::from_ref(&outbound_column),
                        &self.outbound.color_map,
                    )?;
                }

                UpdateDisposition::Loaded
            };

        self.revalidate(ActivityDirection::Inbound)?;
        self.revalidate(ActivityDirection::Outbound)?;

        self.account_index += 1;

        Ok(disposition)
    }

    #[doc = r#"
        현재 키 목록 전체를 단일 그룹으로 해당 방향 차트에 다시 적용하는 함수.
        차트가 아직 없으면 아무 일도 하지 않는다. 키 목록이 그대로면
        몇 번을 불러도 같은 그룹 구성이 된다.
    "#]
    fn revalidate(&mut self, direction: ActivityDirection) -> anyhow::Result<()> {
        let state: &mut SeriesState<C::Handle> = self.series_state_mut(direction);

        let groups: Vec<Vec<String>> = vec![state.keys.clone()];

        if let Some(chart) = state.chart.as_mut() {
            chart.groups(&groups)?;
        }

        Ok(())
    }

    fn account_index(&self) -> usize {
        self.account_index
    }

    fn is_at_capacity(&self) -> bool {
        self.account_index >= self.max_accounts
    }

    fn series_keys(&self, direction: ActivityDirection) -> &[String] {
        &self.series_state(direction).keys
    }

    fn series_colors(&self, direction: ActivityDirection) -> &HashMap<String, String> {
        &self.series_state(direction).color_map
    }
}
