// src/widget/card.rs

use crate::config::CARD_WIDTH;
use crate::types::Record;
use eframe::egui;
use egui::{Frame, RichText};

/// Display-only card showing one record's symbol and description verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolCard<'a> {
    pub symbol: &'a str,
    pub description: &'a str,
}

impl<'a> SymbolCard<'a> {
    pub fn new(symbol: &'a str, description: &'a str) -> Self {
        Self {
            symbol,
            description,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(10.0, 8.0))
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical(|ui| {
                    ui.label(RichText::new(self.symbol).heading().strong());
                    ui.label(self.description);
                });
            })
            .response
    }
}

impl<'a> From<&'a Record> for SymbolCard<'a> {
    fn from(record: &'a Record) -> Self {
        Self::new(record.symbol(), record.description())
    }
}
