use crate::common::*;

use crate::dto::{chart_column::*, chart_spec::*};

#[doc = r#"
    렌더링된 차트가 유지하는 데이터 상태.

    증분 적재(`load`)와 그룹 재지정(`set_groups`)은 서로 다른 연산이다.
    `load` 는 이름 기준으로 컬럼을 추가/교체하고 색상 매핑을 갱신할 뿐,
    그룹 구성원은 바꾸지 않는다. 새로 적재된 컬럼이 기존 컬럼과 묶여
    렌더링되려면 전체 키 목록으로 `set_groups` 를 다시 호출해야 한다.
"#]
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct ChartModel {
    pub timeline: Vec<String>,
    pub columns: Vec<ChartColumn>,
    pub groups: Vec<Vec<String>>,
    pub colors: HashMap<String, String>,
}

impl ChartModel {
    pub fn from_spec(spec: &ChartSpec) -> Self {
        ChartModel {
            timeline: spec.timeline().clone(),
            columns: spec.columns().clone(),
            groups: spec.groups().clone(),
            colors: spec.colors().clone(),
        }
    }

    #[doc = r#"
        이름이 겹치는 컬럼은 값을 교체하고, 새로운 이름은 뒤에 추가한다.
        색상 매핑은 전달된 전체 매핑으로 갱신된다.
    "#]
    pub fn load(&mut self, columns: &[ChartColumn], colors: &HashMap<String, String>) {
        for column in columns {
            match self
                .columns
                .iter_mut()
                .find(|existing| existing.name() == column.name())
            {
                Some(existing) => {
                    existing.values = column.values().clone();
                }
                None => {
                    self.columns.push(column.clone());
                }
            }
        }

        for (name, color) in colors {
            self.colors.insert(name.clone(), color.clone());
        }
    }

    #[doc = "그룹 구성원을 통째로 교체한다."]
    pub fn set_groups(&mut self, groups: &[Vec<String>]) {
        self.groups = groups.to_vec();
    }

    #[doc = "첫 번째 그룹에 속한 컬럼들을 그룹 내 순서대로 반환 (stack 순서)"]
    pub fn grouped_columns(&self) -> Vec<&ChartColumn> {
        let Some(group) = self.groups.first() else {
            return Vec::new();
        };

        group
            .iter()
            .filter_map(|key| self.columns.iter().find(|column| column.name() == key))
            .collect()
    }

    #[doc = "어느 그룹에도 속하지 않은 컬럼들 (개별 막대로 렌더링)"]
    pub fn ungrouped_columns(&self) -> Vec<&ChartColumn> {
        self.columns
            .iter()
            .filter(|column| {
                !self
                    .groups
                    .iter()
                    .any(|group| group.iter().any(|key| key == column.name()))
            })
            .collect()
    }

    #[doc = r#"
        y 축 상한 계산용 최대값. 묶인 컬럼은 구간별 합, 개별 컬럼은 단일 값
        기준으로 가장 큰 값을 찾는다.
    "#]
    pub fn max_rendered_value(&self) -> i64 {
        let mut max_val: i64 = 0;

        let grouped: Vec<&ChartColumn> = self.grouped_columns();
        for idx in 0..self.timeline.len() {
            let stacked: i64 = grouped
                .iter()
                .map(|column| column.values().get(idx).copied().unwrap_or(0))
                .sum();
            max_val = max_val.max(stacked);
        }

        for column in self.ungrouped_columns() {
            for value in column.values() {
                max_val = max_val.max(*value);
            }
        }

        max_val
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_model() -> ChartModel {
        let spec: ChartSpec = ChartSpec::new(
            PathBuf::from("charts/inbound_activities.png"),
            "Inbound Email Activities".to_string(),
            vec!["2001-08-13".to_string(), "2001-08-20".to_string()],
            vec![ChartColumn::new("A".to_string(), vec![1, 2])],
            vec![vec!["A".to_string()]],
            HashMap::from([("A".to_string(), "#1f77b4".to_string())]),
        );
        ChartModel::from_spec(&spec)
    }

    #[test]
    fn load_appends_new_columns_and_keeps_order() {
        let mut model: ChartModel = base_model();

        model.load(
            &[ChartColumn::new("B".to_string(), vec![4, 0])],
            &HashMap::from([
                ("A".to_string(), "#1f77b4".to_string()),
                ("B".to_string(), "#ff7f0e".to_string()),
            ]),
        );

        let names: Vec<&str> = model.columns().iter().map(|c| c.name().as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(model.colors().len(), 2);
    }

    #[test]
    fn load_replaces_values_for_existing_name() {
        let mut model: ChartModel = base_model();

        model.load(
            &[ChartColumn::new("A".to_string(), vec![9, 9])],
            &HashMap::new(),
        );

        assert_eq!(model.columns().len(), 1);
        assert_eq!(model.columns()[0].values(), &vec![9, 9]);
    }

    #[test]
    fn load_does_not_touch_group_membership() {
        let mut model: ChartModel = base_model();

        model.load(
            &[ChartColumn::new("B".to_string(), vec![4, 0])],
            &HashMap::new(),
        );

        assert_eq!(model.groups(), &vec![vec!["A".to_string()]]);
        assert_eq!(model.ungrouped_columns().len(), 1);

        model.set_groups(&[vec!["A".to_string(), "B".to_string()]]);
        assert!(model.ungrouped_columns().is_empty());
        assert_eq!(model.grouped_columns().len(), 2);
    }

    #[test]
    fn set_groups_is_idempotent_for_same_keys() {
        let mut model: ChartModel = base_model();
        let groups: Vec<Vec<String>> = vec![vec!["A".to_string()]];

        model.set_groups(&groups);
        let first: Vec<Vec<String>> = model.groups().clone();
        model.set_groups(&groups);

        assert_eq!(model.groups(), &first);
    }

    #[test]
    fn max_rendered_value_uses_stacked_sum_for_grouped_columns() {
        let mut model: ChartModel = base_model();
        model.load(
            &[ChartColumn::new("B".to_string(), vec![4, 0])],
            &HashMap::new(),
        );
        model.set_groups(&[vec!["A".to_string(), "B".to_string()]]);

        /* 구간 0: 1 + 4 = 5, 구간 1: 2 + 0 = 2 */
        assert_eq!(model.max_rendered_value(), 5);
    }
}
