// src/bin/symbol_entry.rs

use eframe::egui;
use egui::{Color32, RichText, Stroke};
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints};
use chrono::{Duration, Utc};
use stock_helper::analytics::{MomentumScore, high_momentum, score_universe, summarize};
use stock_helper::config::{
    DRAWDOWN_WINDOW, DROP_15_FRACTION, DROP_30_FRACTION, DROP_50_FRACTION,
    HIGH_MOMENTUM_THRESHOLD, MOMENTUM_HISTORY_YEARS, MOMENTUM_PERIODS, TRADING_DAYS_PER_YEAR,
};
use stock_helper::{DrawdownReport, GBMSimulator, SymbolEntry, WidgetConfig, stocks, watchlist};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

struct SymbolEntryApp {
    entry: SymbolEntry,
    // One report and one score per record, same order.
    reports: Vec<Option<DrawdownReport>>,
    momentum: Vec<MomentumScore>,
}

impl SymbolEntryApp {
    fn new(config: WidgetConfig) -> Self {
        Self {
            entry: SymbolEntry::new(config),
            reports: Vec::new(),
            momentum: Vec::new(),
        }
    }

    /// Computes reports for records added since the last frame. Returns
    /// whether anything new was added.
    fn sync_reports(&mut self) -> bool {
        let records = self.entry.records();
        let before = self.reports.len();
        for record in records.iter().skip(before) {
            let symbol = record.symbol();
            let mut sim = GBMSimulator::for_symbol(symbol);
            let report =
                match watchlist::report(symbol, &mut sim, TRADING_DAYS_PER_YEAR, DRAWDOWN_WINDOW) {
                    Ok(r) => Some(r),
                    Err(err) => {
                        warn!(symbol, %err, "no drawdown report");
                        None
                    }
                };
            if let Some(alert) = report.as_ref().and_then(DrawdownReport::alert) {
                info!(subject = %alert.subject(), body = %alert.body(), "drawdown alert");
            }
            self.reports.push(report);
            self.momentum.push(Self::score(symbol));
        }
        self.reports.len() > before
    }

    /// Momentum over a simulated multi-year history ending today.
    fn score(symbol: &str) -> MomentumScore {
        let days = MOMENTUM_HISTORY_YEARS * TRADING_DAYS_PER_YEAR;
        let start = Utc::now().date_naive() - Duration::days((MOMENTUM_HISTORY_YEARS * 365) as i64);
        let bars = watchlist::simulated_bars(&mut GBMSimulator::for_symbol(symbol), start, days);
        score_universe([(symbol, bars.as_slice())], &MOMENTUM_PERIODS)
            .pop()
            .unwrap_or(MomentumScore {
                symbol: symbol.to_string(),
                momentum: None,
            })
    }

    fn status_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Watchlist status");
        ui.separator();
        let leaders = high_momentum(&self.momentum, HIGH_MOMENTUM_THRESHOLD);
        egui::Grid::new("status_grid")
            .num_columns(5)
            .striped(true)
            .show(ui, |ui| {
                ui.label(RichText::new("Symbol").underline());
                ui.label(RichText::new("Sector").underline());
                ui.label(RichText::new("Last").underline());
                ui.label(RichText::new("Band").underline());
                ui.label(RichText::new("Momentum").underline());
                ui.end_row();
                for (report, score) in self.reports.iter().zip(&self.momentum) {
                    let Some(report) = report else { continue };
                    let sector = stocks::lookup(&report.symbol)
                        .map(|s| s.sector_or_na())
                        .unwrap_or("N/A");
                    ui.label(report.symbol.as_str());
                    ui.label(sector);
                    ui.label(format!("{:.2}", report.current));
                    match report.level {
                        Some(level) => {
                            ui.label(RichText::new(level.to_string()).color(Color32::RED).strong())
                        }
                        None => ui.label(RichText::new("ok").color(Color32::GREEN)),
                    };
                    match score.momentum {
                        Some(m) if leaders.contains(&score.symbol.as_str()) => {
                            ui.label(RichText::new(format!("{m:.2}")).color(Color32::GOLD).strong())
                        }
                        Some(m) => ui.label(format!("{m:.2}")),
                        None => ui.label("n/a"),
                    };
                    ui.end_row();
                }
            });
        if let Some(summary) = summarize(&self.momentum) {
            ui.label(format!(
                "momentum mean {:.2}, min {:.2}, max {:.2} over {}",
                summary.mean, summary.min, summary.max, summary.count
            ));
        }
    }

    fn price_plot(&self, ui: &mut egui::Ui) {
        let Some(report) = self.reports.iter().rev().flatten().next() else {
            return;
        };
        ui.label(format!("{} (simulated year)", report.symbol));
        Plot::new("price_plot")
            .height(ui.available_height())
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_ys_f64(&report.history))
                        .stroke(Stroke::new(2.0, Color32::LIGHT_BLUE))
                        .name("Price"),
                );
                for (fraction, name) in [
                    (DROP_15_FRACTION, "-15%"),
                    (DROP_30_FRACTION, "-30%"),
                    (DROP_50_FRACTION, "-50%"),
                ] {
                    plot_ui.hline(HLine::new(report.high * fraction).name(name));
                }
            });
    }

    fn show(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Stock Symbols");
                ui.separator();
                ui.label(format!("{} watched", self.entry.len()));
                if ui.button("Copy JSON").clicked() {
                    match self.entry.to_json() {
                        Ok(json) => ctx.output_mut(|o| o.copied_text = json),
                        Err(err) => warn!(%err, "could not serialize watchlist"),
                    }
                }
            });
        });

        egui::SidePanel::right("status_panel")
            .resizable(true)
            .min_width(280.0)
            .show(ctx, |ui| {
                self.status_panel(ui);
                ui.separator();
                self.price_plot(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.entry.ui(ui);
            });
        });

        // A record added this frame gets its status row on the next one.
        if self.sync_reports() {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for SymbolEntryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<(), eframe::Error> {
    init_tracing();

    let app_state = SymbolEntryApp::new(WidgetConfig::default());
    info!(universe = stocks::default_stock_universe().len(), "starting symbol entry");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("Stock Symbol Entry"),
        ..Default::default()
    };

    eframe::run_native(
        "Stock Symbol Entry",
        native_options,
        Box::new(|_cc| Box::new(app_state)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_reports_flags_new_records_once() {
        let mut app = SymbolEntryApp::new(WidgetConfig::default());
        assert!(!app.sync_reports());

        app.entry.update_token("AAPL");
        app.entry.confirm();
        assert!(app.sync_reports());
        assert_eq!(app.reports.len(), 1);
        assert_eq!(app.momentum.len(), 1);
        assert_eq!(app.momentum[0].symbol, "AAPL");
        assert!(app.momentum[0].momentum.is_some());

        assert!(!app.sync_reports());
    }

    #[test]
    fn frame_syncs_pending_records() {
        let mut app = SymbolEntryApp::new(WidgetConfig::default());
        app.entry.update_token("KO");
        app.entry.confirm();

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            app.show(ctx);
        });
        assert_eq!(app.reports.len(), 1);
    }
}
