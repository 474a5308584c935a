// Chart colors. One series color per business line, cycling when there are
// more lines than palette entries.

#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub plot_background: String,
    pub grid: String,
    pub text: String,
    pub series: Vec<String>,
}

impl ChartTheme {
    pub fn default_light() -> Self {
        Self {
            plot_background: "#e5ecf6".to_string(),
            grid: "#ffffff".to_string(),
            text: "#2a3f5f".to_string(),
            series: [
                "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692",
                "#b6e880", "#ff97ff", "#fecb52",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }

    pub fn series_color(&self, index: usize) -> &str {
        &self.series[index % self.series.len()]
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::default_light()
    }
}
