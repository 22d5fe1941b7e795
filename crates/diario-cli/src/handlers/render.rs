use super::print_json;
use crate::input::load_records;
use crate::style;
use crate::types::{OutputFormat, RenderView};
use anyhow::Result;
use diario_engine::Card;
use diario_runtime::session::NO_RESULTS;
use diario_runtime::{Config, Session};

pub fn handle(input: &str, view: RenderView, config: &Config, format: OutputFormat) -> Result<()> {
    let mut session = Session::with_options(config.render_options());
    session.replace(load_records(input)?);
    print_view(&session, view, format)
}

/// Print the current result set in the chosen view
pub(crate) fn print_view(session: &Session, view: RenderView, format: OutputFormat) -> Result<()> {
    match (view, format) {
        (RenderView::Text, OutputFormat::Json) => print_json(&session.rendered()),
        (RenderView::Cards, OutputFormat::Json) => print_json(&session.cards()),
        (RenderView::Text, OutputFormat::Plain) => {
            print!("{}", session.document());
            Ok(())
        }
        (RenderView::Cards, OutputFormat::Plain) => {
            print_cards(&session.cards());
            Ok(())
        }
    }
}

fn print_cards(cards: &[Card]) {
    if cards.is_empty() {
        println!("{}", NO_RESULTS);
        return;
    }

    let color = style::color_enabled();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {} {}",
            style::badge(&card.badge, card.visual_category, color),
            card.date,
            style::dim(&format!("({})", card.icon_tag), color)
        );
        println!("Processo: {}", card.process_number);
        if !card.summary.is_empty() {
            println!("{}", card.summary);
        }
        if let Some(pdf) = &card.link_pdf {
            println!("PDF: {}", pdf);
        }
        if let Some(html) = &card.link_html {
            println!("Web: {}", html);
        }
    }
}
