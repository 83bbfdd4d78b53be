use crate::common::*;

/* 설정에 팔레트가 비어있을 때 사용하는 기본 시리즈 색상 (ordinal 순서 고정) */
const DEFAULT_SERIES_PALETTE: [&str; 8] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
];

#[doc = "차트 출력 설정"]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ChartConfig {
    pub output_dir: String,
    pub chart_width: u32,
    pub chart_height: u32,
    #[serde(default)]
    pub series_palette: Vec<String>,
}

impl ChartConfig {
    #[doc = r##"
        계정 순번(ordinal)에 대한 시리즈 색상을 결정적으로 반환하는 함수.

        같은 순번에는 항상 같은 색상이 배정되며, 팔레트 길이를 넘는 순번은
        팔레트를 순환한다. 설정 파일에 팔레트가 없으면 기본 팔레트를 사용한다.

        # Arguments
        * `ordinal` - 계정이 누적된 순번 (0부터 시작)

        # Returns
        * `&str` - hex 색상 문자열 (예: "#1f77b4")
    "##]
    pub fn series_color(&self, ordinal: usize) -> &str {
        if self.series_palette.is_empty() {
            DEFAULT_SERIES_PALETTE[ordinal % DEFAULT_SERIES_PALETTE.len()]
        } else {
            &self.series_palette[ordinal % self.series_palette.len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_palette(palette: Vec<String>) -> ChartConfig {
        ChartConfig {
            output_dir: "charts".to_string(),
            chart_width: 1400,
            chart_height: 700,
            series_palette: palette,
        }
    }

    #[test]
    fn series_color_is_deterministic() {
        let config: ChartConfig = config_with_palette(vec![]);
        assert_eq!(config.series_color(0), config.series_color(0));
        assert_eq!(config.series_color(3), config.series_color(3));
    }

    #[test]
    fn series_color_cycles_past_palette_length() {
        let config: ChartConfig =
            config_with_palette(vec!["#111111".to_string(), "#222222".to_string()]);
        assert_eq!(config.series_color(0), "#111111");
        assert_eq!(config.series_color(1), "#222222");
        assert_eq!(config.series_color(2), "#111111");
    }

    #[test]
    fn empty_palette_falls_back_to_default() {
        let config: ChartConfig = config_with_palette(vec![]);
        assert_eq!(config.series_color(0), "#1f77b4");
    }
}
