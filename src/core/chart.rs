use crate::config::settings::CategorySpec;
use crate::domain::model::CategoryVolume;
use crate::domain::ports::StatsSource;

pub const CHART_TITLE: &str = "Order Volume by Product Type";
pub const X_AXIS_LABEL: &str = "Product Type";
pub const Y_AXIS_LABEL: &str = "Number of Orders";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderVolumeChart {
    bars: Vec<CategoryVolume>,
}

impl OrderVolumeChart {
    pub fn new(bars: Vec<CategoryVolume>) -> Self {
        Self { bars }
    }

    /// 每個類別抽一個模擬的訂單量
    pub fn generate<R: StatsSource + ?Sized>(categories: &[CategorySpec], stats: &mut R) -> Self {
        let bars = categories
            .iter()
            .map(|spec| CategoryVolume {
                category: spec.name.clone(),
                orders: stats.order_volume(),
                color: spec.color.clone(),
            })
            .collect();
        Self { bars }
    }

    pub fn bars(&self) -> &[CategoryVolume] {
        &self.bars
    }

    pub fn into_bars(self) -> Vec<CategoryVolume> {
        self.bars
    }

    pub fn total(&self) -> u64 {
        self.bars
            .iter()
            .fold(0u64, |total, bar| total.saturating_add(bar.orders))
    }

    /// Share of bar `index` in percent, rounded to one decimal. 0.0 when the chart is empty.
    pub fn percentage(&self, index: usize) -> Option<f64> {
        let bar = self.bars.get(index)?;
        let total = self.total();
        if total == 0 {
            return Some(0.0);
        }
        let share = bar.orders as f64 / total as f64 * 100.0;
        Some((share * 10.0).round() / 10.0)
    }

    pub fn tooltip(&self, index: usize) -> Option<(String, String)> {
        let bar = self.bars.get(index)?;
        let percentage = self.percentage(index)?;
        Some((
            format!("Orders: {}", bar.orders),
            format!("Percentage: {:.1}%", percentage),
        ))
    }

    /// Horizontal bar chart scaled so the largest bar spans `width` cells.
    pub fn render_text(&self, width: usize) -> String {
        let mut out = format!("{}\n", CHART_TITLE);
        if self.bars.is_empty() {
            out.push_str("  (no data)\n");
            return out;
        }

        let label_width = self
            .bars
            .iter()
            .map(|bar| bar.category.chars().count())
            .max()
            .unwrap_or(0)
            .max(X_AXIS_LABEL.len());
        let max_orders = self.bars.iter().map(|bar| bar.orders).max().unwrap_or(0);

        out.push_str(&format!("  {:<label_width$}  {}\n", X_AXIS_LABEL, Y_AXIS_LABEL));
        for (index, bar) in self.bars.iter().enumerate() {
            let cells = if max_orders == 0 {
                0
            } else {
                ((bar.orders as f64 / max_orders as f64) * width as f64).round() as usize
            };
            let percentage = self.percentage(index).unwrap_or(0.0);
            out.push_str(&format!(
                "  {:<label_width$}  {} {} ({:.1}%)\n",
                bar.category,
                "█".repeat(cells),
                bar.orders,
                percentage,
            ));
        }
        out
    }
}
