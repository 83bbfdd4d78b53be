use crate::common::*;

use crate::dto::chart_column::*;

#[doc = r#"
    차트 최초 생성에 필요한 전체 명세.

    - `bind_to` : 차트가 바인딩되는 출력 대상 (렌더링 구현에서는 파일 경로)
    - `timeline` : x 축 타임라인 (yyyy-MM-dd 문자열, 구간 순서 고정)
    - `columns` : 생성 시점에 알려진 데이터 컬럼들
    - `groups` : 하나의 묶음(stack)으로 렌더링할 컬럼 이름 그룹들
    - `colors` : 컬럼 이름 → hex 색상 매핑
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ChartSpec {
    pub bind_to: PathBuf,
    pub title: String,
    pub timeline: Vec<String>,
    pub columns: Vec<ChartColumn>,
    pub groups: Vec<Vec<String>>,
    pub colors: HashMap<String, String>,
}
