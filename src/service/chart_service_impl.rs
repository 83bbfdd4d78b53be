use crate::common::*;

use crate::traits::service_traits::chart_service::*;

use crate::dto::{chart_column::*, chart_model::*, chart_spec::*};

use crate::model::configs::total_config::*;

use plotters::prelude::*;

#[doc = "hex 색상 문자열(#rrggbb)을 plotters 색상으로 변환하는 함수"]
fn parse_hex_color(hex: &str) -> anyhow::Result<RGBColor> {
    let trimmed: &str = hex.trim_start_matches('#');

    if trimmed.len() != 6 {
        return Err(anyhow!(
            "[Error][parse_hex_color()] '{}' is not a #rrggbb color",
            hex
        ));
    }

    let r: u8 = u8::from_str_radix(&trimmed[0..2], 16)?;
    let g: u8 = u8::from_str_radix(&trimmed[2..4], 16)?;
    let b: u8 = u8::from_str_radix(&trimmed[4..6], 16)?;

    Ok(RGBColor(r, g, b))
}

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = "Helper function to determine Y-axis range with padding"]
    fn calculate_y_range(max_val: i64) -> (i64, i64) {
        let padding: i64 = ((max_val as f64) * 0.1).max(1.0) as i64;

        (0, max_val + padding)
    }
}

#[doc = r#"
    바인딩된 출력 대상(PNG 파일)에 그려진 막대 차트 핸들.

    차트 상태(`ChartModel`)를 유지하다가 `load`/`groups` 변이가 올 때마다
    같은 출력 대상에 전체를 다시 렌더링한다.
"#]
#[derive(Debug)]
pub struct PlottersChartHandle {
    bind_to: PathBuf,
    title: String,
    width: u32,
    height: u32,
    model: ChartModel,
}

impl PlottersChartHandle {
    fn column_color(&self, column_name: &str) -> RGBColor {
        self.model
            .colors()
            .get(column_name)
            .and_then(|hex| parse_hex_color(hex).ok())
            .unwrap_or(RGBColor(127, 127, 127))
    }

    #[doc = r#"
        현재 차트 상태 전체를 출력 대상에 렌더링하는 함수.

        - x 축 : 타임라인 구간 (yyyy-MM-dd 라벨)
        - y 축 : 활동량 (0 기준선 포함)
        - 그룹에 속한 컬럼들은 한 막대 위에 쌓아서, 그룹 밖 컬럼들은
          같은 구간 안에서 나란히 그린다
    "#]
    fn render(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.bind_to.parent() {
            fs::create_dir_all(parent)?;
        }

        let output_path: String = self.bind_to.to_string_lossy().to_string();
        let timeline: &Vec<String> = self.model.timeline();
        let x_len: usize = timeline.len().max(1);
        let (y_min, y_max) = ChartServiceImpl::calculate_y_range(self.model.max_rendered_value());

        let root = BitMapBackend::new(&output_path, (self.width, self.height)).into_drawing_area();
        root.fill(&RGBColor(20, 20, 20))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                &self.title,
                ("sans-serif", 40)
                    .into_font()
                    .color(&RGBColor(240, 240, 240)),
            )
            .margin(30)
            .x_label_area_size(70)
            .y_label_area_size(90)
            .build_cartesian_2d(0f64..x_len as f64, y_min..y_max)?;

        let grid_color: RGBColor = RGBColor(60, 60, 60);
        let text_color: RGBColor = RGBColor(200, 200, 200);

        chart
            .configure_mesh()
            .x_desc("Interval Start")
            .y_desc("Email Count")
            .x_labels(timeline.len().min(10))
            .y_labels(10)
            .axis_style(ShapeStyle::from(&RGBColor(120, 120, 120)).stroke_width(2))
            .light_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
            .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(2))
            .x_label_style(("sans-serif", 18).into_font().color(&text_color))
            .y_label_style(("sans-serif", 30).into_font().color(&text_color))
            .x_label_formatter(&|x| {
                let idx: usize = *x as usize;
                if (*x - idx as f64).abs() < f64::EPSILON && idx < timeline.len() {
                    timeline[idx].clone()
                } else {
                    String::new()
                }
            })
            .y_label_formatter(&|y| {
                let s: String = y.to_string();
                let mut result: String = String::new();
                let mut count: i32 = 0;
                for c in s.chars().rev() {
                    if count == 3 {
                        result.push(',');
                        count = 0;
                    }
                    result.push(c);
                    count += 1;
                }
                result.chars().rev().collect()
            })
            .draw()?;

        /* y = 0 기준선 */
        chart.draw_series(LineSeries::new(
            vec![(0.0, 0i64), (x_len as f64, 0i64)],
            ShapeStyle::from(&text_color).stroke_width(2),
        ))?;

        let grouped: Vec<ChartColumn> = self.model.grouped_columns().into_iter().cloned().collect();
        let ungrouped: Vec<ChartColumn> =
            self.model.ungrouped_columns().into_iter().cloned().collect();

        let slot_cnt: usize = usize::from(!grouped.is_empty()) + ungrouped.len();
        if slot_cnt == 0 {
            root.present()?;
            return Ok(());
        }
        let slot_width: f64 = 0.7 / slot_cnt as f64;

        /* 그룹 컬럼: 구간별 누적 막대 */
        let mut stack_bases: Vec<i64> = vec![0; timeline.len()];
        for column in &grouped {
            let color: RGBColor = self.column_color(column.name());

            let bars: Vec<Rectangle<(f64, i64)>> = (0..timeline.len())
                .map(|idx| {
                    let value: i64 = column.values().get(idx).copied().unwrap_or(0);
                    let x0: f64 = idx as f64 + 0.15;
                    let bar: Rectangle<(f64, i64)> = Rectangle::new(
                        [
                            (x0, stack_bases[idx]),
                            (x0 + slot_width, stack_bases[idx] + value),
                        ],
                        color.filled(),
                    );
                    stack_bases[idx] += value;
                    bar
                })
                .collect();

            chart.draw_series(bars)?;
        }

        /* 그룹 밖 컬럼: 같은 구간 안에서 나란히 */
        let mut slot: usize = usize::from(!grouped.is_empty());
        for column in &ungrouped {
            let color: RGBColor = self.column_color(column.name());

            let bars: Vec<Rectangle<(f64, i64)>> = (0..timeline.len())
                .map(|idx| {
                    let value: i64 = column.values().get(idx).copied().unwrap_or(0);
                    let x0: f64 = idx as f64 + 0.15 + slot_width * slot as f64;
                    Rectangle::new([(x0, 0), (x0 + slot_width, value)], color.filled())
                })
                .collect();

            chart.draw_series(bars)?;
            slot += 1;
        }

        root.present()?;

        info!("Activity chart rendered: {:?}", self.bind_to);

        Ok(())
    }
}

impl ChartHandle for PlottersChartHandle {
    fn load(
        &mut self,
        columns: &[ChartColumn],
        colors: &HashMap<String, String>,
    ) -> anyhow::Result<()> {
        self.model.load(columns, colors);
        self.render()
    }

    fn groups(&mut self, groups: &[Vec<String>]) -> anyhow::Result<()> {
        self.model.set_groups(groups);
        self.render()
    }
}

impl ChartService for ChartServiceImpl {
    type Handle = PlottersChartHandle;

    #[doc = r#"
        명세로부터 차트를 새로 렌더링하고 이후 증분 갱신에 쓸 핸들을 돌려주는 함수.

        # Arguments
        * `spec` - 바인딩 대상, 타임라인, 초기 컬럼/그룹/색상 명세

        # Returns
        * `PlottersChartHandle` - 상태를 유지하는 차트 핸들
        * `anyhow::Error` - 최초 렌더링 실패 시
    "#]
    fn generate(&self, spec: &ChartSpec) -> anyhow::Result<Self::Handle> {
        let chart_config = get_chart_config_info();

        let handle: PlottersChartHandle = PlottersChartHandle {
            bind_to: spec.bind_to().clone(),
            title: spec.title().clone(),
            width: *chart_config.chart_width(),
            height: *chart_config.chart_height(),
            model: ChartModel::from_spec(spec),
        };

        handle.render()?;

        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse_to_rgb() {
        assert_eq!(parse_hex_color("#1f77b4").unwrap(), RGBColor(31, 119, 180));
        assert_eq!(parse_hex_color("ff7f0e").unwrap(), RGBColor(255, 127, 14));
    }

    #[test]
    fn malformed_hex_colors_are_rejected() {
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
    }

    #[test]
    fn y_range_keeps_zero_floor_with_padding() {
        let (y_min, y_max) = ChartServiceImpl::calculate_y_range(100);
        assert_eq!(y_min, 0);
        assert_eq!(y_max, 110);

        /* 데이터가 없어도 축은 그릴 수 있어야 한다 */
        let (empty_min, empty_max) = ChartServiceImpl::calculate_y_range(0);
        assert_eq!(empty_min, 0);
        assert_eq!(empty_max, 1);
    }
}
