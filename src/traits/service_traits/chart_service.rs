use crate::common::*;

use crate::dto::{chart_column::*, chart_spec::*};

#[doc = r#"
    렌더링된 차트 하나에 대한 핸들.

    증분 적재(`load`)와 그룹 재지정(`groups`)은 의도적으로 분리된 연산이다.
    `load` 로 추가된 시리즈는 `groups` 가 전체 키 목록으로 다시 호출되기
    전까지는 기존 시리즈와 한 묶음으로 렌더링되지 않는다.
"#]
pub trait ChartHandle: Send {
    #[doc = "이름 기준 컬럼 추가/교체 + 색상 매핑 갱신 후 다시 렌더링"]
    fn load(
        &mut self,
        columns: &[ChartColumn],
        colors: &HashMap<String, String>,
    ) -> anyhow::Result<()>;

    #[doc = "그룹 구성원 전체 교체 후 다시 렌더링"]
    fn groups(&mut self, groups: &[Vec<String>]) -> anyhow::Result<()>;
}

#[doc = "차트 렌더링 백엔드. 명세로부터 차트를 생성하고 핸들을 돌려준다."]
pub trait ChartService: Send + Sync {
    type Handle: ChartHandle;

    fn generate(&self, spec: &ChartSpec) -> anyhow::Result<Self::Handle>;
}
