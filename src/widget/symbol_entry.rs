// src/widget/symbol_entry.rs

use super::card::SymbolCard;
use super::record_list::RecordList;
use crate::config::{ADD_BUTTON_LABEL, EmptyTokenPolicy, INPUT_PLACEHOLDER, WidgetConfig};
use crate::types::Record;
use eframe::egui;
use tracing::{debug, trace};

/// Text field plus "Add" button that accumulates a watchlist of records.
///
/// The field is controlled: what it displays is always `token()`. Typing goes
/// through [`SymbolEntry::update_token`], the button through
/// [`SymbolEntry::confirm`].
#[derive(Debug, Clone, Default)]
pub struct SymbolEntry {
    current_token: String,
    records: RecordList,
    config: WidgetConfig,
}

impl SymbolEntry {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replaces the pending token with whatever the field reported.
    pub fn update_token(&mut self, raw: impl Into<String>) {
        self.current_token = raw.into();
        trace!(token = %self.current_token, "token updated");
    }

    /// Turns the pending token into a record at the end of the list and
    /// clears the field. Returns `false` if the empty-token policy refused it.
    pub fn confirm(&mut self) -> bool {
        if self.current_token.is_empty() && self.config.empty_token_policy == EmptyTokenPolicy::Ignore
        {
            debug!("empty token ignored");
            return false;
        }

        let symbol = std::mem::take(&mut self.current_token);
        self.records = self.records.appended(Record::new(symbol));
        debug!(
            symbol = self.records.last().map(Record::symbol).unwrap_or_default(),
            count = self.records.len(),
            "record appended"
        );
        true
    }

    pub fn token(&self) -> &str {
        &self.current_token
    }

    /// Snapshot of the list; later appends do not show up in it.
    pub fn records(&self) -> RecordList {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn config(&self) -> WidgetConfig {
        self.config
    }

    /// One card per record, in insertion order.
    pub fn cards(&self) -> Vec<SymbolCard<'_>> {
        self.records.iter().map(SymbolCard::from).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Edit a copy so every change still goes through update_token.
            let mut buffer = self.current_token.clone();
            let field = ui.add(
                egui::TextEdit::singleline(&mut buffer)
                    .hint_text(INPUT_PLACEHOLDER)
                    .desired_width(220.0),
            );
            if field.changed() {
                self.update_token(buffer);
            }
            if ui.button(ADD_BUTTON_LABEL).clicked() {
                self.confirm();
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for card in self.cards() {
                card.show(ui);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry() -> SymbolEntry {
        SymbolEntry::new(WidgetConfig::default())
    }

    fn strict_entry() -> SymbolEntry {
        SymbolEntry::new(WidgetConfig {
            empty_token_policy: EmptyTokenPolicy::Ignore,
        })
    }

    #[test]
    fn starts_with_empty_token_and_list() {
        let w = entry();
        assert_eq!(w.token(), "");
        assert!(w.is_empty());
        assert!(w.cards().is_empty());
    }

    #[test]
    fn confirm_aapl_appends_one_record_and_clears() {
        let mut w = entry();
        w.update_token("AAPL");
        assert!(w.confirm());

        assert_eq!(w.token(), "");
        assert_eq!(w.len(), 1);
        let r = w.records().get(0).cloned().unwrap();
        assert_eq!(r, Record::new("AAPL"));
        assert_eq!(r.description(), "This is a stock AAPL");
    }

    #[test]
    fn empty_token_is_accepted_by_default() {
        let mut w = entry();
        assert!(w.confirm());
        assert_eq!(w.len(), 1);
        let r = w.records().get(0).cloned().unwrap();
        assert_eq!(r.symbol(), "");
        assert_eq!(r.description(), "This is a stock ");
    }

    #[test]
    fn empty_token_is_a_no_op_when_ignored() {
        let mut w = strict_entry();
        assert!(!w.confirm());
        assert!(w.is_empty());

        w.update_token("GOOG");
        assert!(w.confirm());
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn whitespace_token_is_not_empty() {
        let mut w = strict_entry();
        w.update_token(" ");
        assert!(w.confirm());
        assert_eq!(w.records().get(0).unwrap().symbol(), " ");
    }

    #[test]
    fn update_replaces_rather_than_appends() {
        let mut w = entry();
        w.update_token("AA");
        w.update_token("B");
        assert_eq!(w.token(), "B");
    }

    #[test]
    fn earlier_snapshot_survives_later_confirms() {
        let mut w = entry();
        w.update_token("AAPL");
        w.confirm();
        let snapshot = w.records();

        w.update_token("MSFT");
        w.confirm();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get(0).unwrap().symbol(), "AAPL");
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn cards_mirror_records() {
        let mut w = entry();
        for t in ["AAPL", "MSFT", "AMZN"] {
            w.update_token(t);
            w.confirm();
        }
        let cards = w.cards();
        assert_eq!(cards.len(), 3);
        for (card, record) in cards.iter().zip(w.records().iter()) {
            assert_eq!(card.symbol, record.symbol());
            assert_eq!(card.description, record.description());
        }
    }

    #[test]
    fn json_export_lists_records_in_order() {
        let mut w = entry();
        w.update_token("A");
        w.confirm();
        w.update_token("B");
        w.confirm();
        let parsed: serde_json::Value = serde_json::from_str(&w.to_json().unwrap()).unwrap();
        assert_eq!(parsed[0]["symbol"], "A");
        assert_eq!(parsed[1]["description"], "This is a stock B");
    }

    #[test]
    fn renders_headless_without_panicking() {
        let mut w = entry();
        w.update_token("AAPL");
        w.confirm();
        w.update_token("MS");

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| w.ui(ui));
        });

        // no input events, so nothing changed
        assert_eq!(w.token(), "MS");
        assert_eq!(w.len(), 1);
    }

    /// Runs one frame of the widget against `events`.
    fn frame(ctx: &egui::Context, w: &mut SymbolEntry, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| w.ui(ui));
        });
    }

    fn click(ctx: &egui::Context, w: &mut SymbolEntry, pos: egui::Pos2) {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        };
        frame(ctx, w, vec![egui::Event::PointerMoved(pos)]);
        frame(ctx, w, vec![button(true)]);
        frame(ctx, w, vec![button(false)]);
    }

    // Field spans x 8..228 on the first row, the button sits right after it.
    const FIELD_POS: egui::Pos2 = egui::pos2(50.0, 18.0);
    const ADD_POS: egui::Pos2 = egui::pos2(245.0, 18.0);

    #[test]
    fn typing_and_add_go_through_the_ui() {
        let mut w = entry();
        let ctx = egui::Context::default();
        frame(&ctx, &mut w, Vec::new());

        click(&ctx, &mut w, FIELD_POS);
        let mut typed = String::new();
        for key in ["A", "A", "P", "L"] {
            frame(&ctx, &mut w, vec![egui::Event::Text(key.to_string())]);
            typed.push_str(key);
            assert_eq!(w.token(), typed);
        }
        assert!(w.is_empty());

        click(&ctx, &mut w, ADD_POS);
        assert_eq!(w.token(), "");
        assert_eq!(w.len(), 1);
        assert_eq!(w.records().get(0).cloned().unwrap(), Record::new("AAPL"));
        assert_eq!(w.cards().len(), 1);
    }

    #[test]
    fn add_click_with_empty_field_follows_policy() {
        let ctx = egui::Context::default();

        let mut w = entry();
        frame(&ctx, &mut w, Vec::new());
        click(&ctx, &mut w, ADD_POS);
        assert_eq!(w.len(), 1);
        assert_eq!(w.records().get(0).unwrap().symbol(), "");

        let ctx = egui::Context::default();
        let mut w = strict_entry();
        frame(&ctx, &mut w, Vec::new());
        click(&ctx, &mut w, ADD_POS);
        assert!(w.is_empty());
    }

    proptest! {
        #[test]
        fn field_tracks_every_keystroke(typed in "\\PC{0,24}") {
            let mut w = entry();
            let mut so_far = String::new();
            for ch in typed.chars() {
                so_far.push(ch);
                w.update_token(so_far.clone());
                prop_assert_eq!(w.token(), so_far.as_str());
            }
            prop_assert!(w.is_empty());
        }

        #[test]
        fn n_confirms_give_n_records_in_order(tokens in prop::collection::vec("[A-Z]{0,5}", 0..20)) {
            let mut w = entry();
            for t in &tokens {
                w.update_token(t.clone());
                w.confirm();
                prop_assert_eq!(w.token(), "");
            }
            let records = w.records();
            prop_assert_eq!(records.len(), tokens.len());
            for (r, t) in records.iter().zip(&tokens) {
                prop_assert_eq!(r.symbol(), t.as_str());
                prop_assert_eq!(r.description().to_string(), format!("This is a stock {t}"));
            }
        }

        #[test]
        fn list_only_grows_by_append(tokens in prop::collection::vec("[A-Z]{1,4}", 1..12)) {
            let mut w = entry();
            let mut previous = w.records();
            for t in tokens {
                w.update_token(t);
                w.confirm();
                let current = w.records();
                prop_assert_eq!(current.len(), previous.len() + 1);
                prop_assert_eq!(&current.as_slice()[..previous.len()], previous.as_slice());
                previous = current;
            }
        }
    }
}
