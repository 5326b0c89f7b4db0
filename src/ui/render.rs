//! Rendering of view descriptions into ratatui frames.
//!
//! This module is the thin adapter of the system: it never computes view
//! content itself, it only draws the cached view-description values the
//! controller rebuilt. Which is why every function here takes `&App` and
//! returns nothing.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use atelier_core::view::{self, ProjectList, TagView, VisualPane};

use super::app::{App, FocusRegion};
use super::theme::Theme;

/// Shown in the visual/detail panes while a swap is pending, the terminal
/// stand-in for the faded-out phase.
const SWAP_VEIL: &str = "· · ·";

pub(super) fn draw(frame: &mut Frame, app: &App) {
    let [header_area, main_area, certs_area, status_area] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Min(12),
        Constraint::Length(5),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, app, header_area);

    let [rail_area, center_area, strip_area] = Layout::horizontal([
        Constraint::Length(28),
        Constraint::Min(40),
        Constraint::Length(40),
    ])
    .areas(main_area);

    let [visual_area, detail_area] =
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(center_area);

    draw_collection_rail(frame, app, rail_area);
    draw_visual_pane(frame, app, visual_area);
    draw_detail_pane(frame, app, detail_area);
    draw_project_strip(frame, app, strip_area);
    draw_certifications(frame, app, certs_area);
    draw_status_bar(frame, app, status_area);

    if let Some(index) = app.selection().lightbox() {
        draw_lightbox(frame, app, index);
    }

    if app.help_visible() {
        draw_help(frame, app);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let [copy_area, metrics_area] =
        Layout::horizontal([Constraint::Min(40), Constraint::Length(52)]).areas(area);

    let header = app.header();
    let copy = Paragraph::new(vec![
        Line::styled(header.title.clone(), theme.style_title()),
        Line::styled(header.headline.clone(), theme.style_headline()),
        Line::raw(""),
        Line::raw(header.description.clone()),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Collection ")
            .border_style(theme.style_border()),
    );
    frame.render_widget(copy, copy_area);

    let rows: Vec<Line> = app
        .metrics()
        .iter()
        .map(|metric| {
            Line::from(vec![
                Span::styled(format!("{}: ", metric.label), theme.style_accent()),
                Span::raw(metric.value.clone()),
            ])
        })
        .collect();
    let metrics = Paragraph::new(rows)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Metrics ")
                .border_style(theme.style_border()),
        );
    frame.render_widget(metrics, metrics_area);
}

fn draw_collection_rail(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused_region = app.focus() == FocusRegion::Collections;

    let lines: Vec<Line> = app
        .catalogue()
        .collections()
        .iter()
        .enumerate()
        .map(|(index, collection)| {
            let selected = collection.id == app.selection().collection_id();
            // Pressed/selected state is derived from the one Selection, so
            // the rail and the digit shortcuts can never disagree.
            let marker = if selected { "● " } else { "○ " };
            let mut style = if selected {
                theme.style_selected()
            } else {
                theme.style_normal()
            };
            if focused_region && index == app.focused_collection() {
                style = style.patch(theme.style_cursor());
            }
            Line::styled(
                format!("{marker}{} · {}", index + 1, collection.title),
                style,
            )
        })
        .collect();

    let border = if focused_region {
        theme.style_border_focused()
    } else {
        theme.style_border()
    };
    let rail = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Collections ")
            .border_style(border),
    );
    frame.render_widget(rail, area);
}

fn draw_visual_pane(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Visuals ")
        .border_style(theme.style_border());

    if app.swap_pending() {
        frame.render_widget(veil(theme).block(block), area);
        return;
    }

    let lines = match &app.detail().visuals {
        VisualPane::Figures(figures) => {
            let mut lines = Vec::new();
            for figure in figures {
                lines.push(Line::styled(
                    format!("▣ {}", figure.alt),
                    theme.style_title(),
                ));
                if let Some(caption) = &figure.caption {
                    lines.push(Line::styled(format!("  {caption}"), theme.style_normal()));
                }
                lines.push(Line::styled(format!("  {}", figure.src), theme.style_muted()));
                lines.push(Line::raw(""));
            }
            lines
        }
        VisualPane::Workflow(steps) => {
            let mut lines = Vec::new();
            for step in steps {
                lines.push(Line::styled(step.heading.clone(), theme.style_selected()));
                lines.push(Line::raw(format!("  {}", step.detail)));
                lines.push(Line::raw(""));
            }
            lines
        }
        VisualPane::Placeholder(text) => {
            vec![Line::styled(*text, theme.style_muted())]
        }
    };

    let pane = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(pane, area);
}

fn draw_detail_pane(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Project ")
        .border_style(theme.style_border());

    if app.swap_pending() {
        frame.render_widget(veil(theme).block(block), area);
        return;
    }

    let detail = app.detail();

    // The snippet renders in its own unwrapped block so the literal text
    // keeps its line structure.
    let (body_area, snippet_area) = match &detail.snippet {
        Some(snippet) => {
            let wanted = snippet.lines().count() as u16 + 2;
            let [body, snip] =
                Layout::vertical([Constraint::Min(4), Constraint::Length(wanted.min(8))])
                    .areas(area);
            (body, Some((snip, snippet)))
        }
        None => (area, None),
    };

    let mut lines = vec![Line::styled(detail.title.clone(), theme.style_title())];
    if let Some(summary) = &detail.summary {
        lines.push(Line::raw(""));
        lines.push(Line::raw(summary.clone()));
    }
    if !detail.tags.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(tag_spans(&detail.tags, theme)));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(body, body_area);

    if let Some((snip_area, snippet)) = snippet_area {
        let code: Vec<Line> = snippet
            .lines()
            .map(|line| Line::styled(line.to_owned(), theme.style_code()))
            .collect();
        let snippet_block = Block::default()
            .borders(Borders::ALL)
            .title(" Snippet ")
            .border_style(theme.style_border());
        frame.render_widget(Paragraph::new(code).block(snippet_block), snip_area);
    }
}

fn draw_project_strip(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused_region = app.focus() == FocusRegion::Projects;
    let border = if focused_region {
        theme.style_border_focused()
    } else {
        theme.style_border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Projects ")
        .border_style(border);

    let lines = match app.cards() {
        ProjectList::Empty(notice) => vec![Line::styled(*notice, theme.style_muted())],
        ProjectList::Cards(cards) => {
            let mut lines = Vec::new();
            // Cards past the reveal cursor have not entered yet.
            for (index, card) in cards.iter().take(app.revealed_cards()).enumerate() {
                let selected = app.selection().project_id() == Some(card.id.as_str());
                let marker = if selected { "▶ " } else { "  " };
                let mut title_style = if selected {
                    theme.style_selected()
                } else {
                    theme.style_title()
                };
                if focused_region && index == app.cursor_project() {
                    title_style = title_style.patch(theme.style_cursor());
                }
                lines.push(Line::styled(format!("{marker}{}", card.title), title_style));
                if let Some(thumbnail) = &card.thumbnail {
                    lines.push(Line::styled(format!("  ⌑ {thumbnail}"), theme.style_muted()));
                }
                lines.push(Line::styled(format!("  {}", card.summary), theme.style_muted()));
                if !card.tags.is_empty() {
                    let mut spans = vec![Span::raw("  ")];
                    spans.extend(tag_spans(&card.tags, theme));
                    lines.push(Line::from(spans));
                }
                for link in &card.links {
                    lines.push(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(format!("{} ↗ ", link.label), theme.style_link()),
                        Span::styled(link.url.clone(), theme.style_muted()),
                    ]));
                }
                lines.push(Line::raw(""));
            }
            lines
        }
    };

    let strip = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(strip, area);
}

fn draw_certifications(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused_region = app.focus() == FocusRegion::Certifications;
    let border = if focused_region {
        theme.style_border_focused()
    } else {
        theme.style_border()
    };

    let lines: Vec<Line> = app
        .certifications()
        .iter()
        .enumerate()
        .map(|(index, cert)| {
            let mut style = theme.style_normal();
            if focused_region && index == app.focused_cert() {
                style = style.patch(theme.style_cursor());
            }
            Line::styled(format!("▣ {}", cert.caption), style)
        })
        .collect();

    let strip = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Certifications ")
            .border_style(border),
    );
    frame.render_widget(strip, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    // The live region: assistive narration of the last settled change.
    let status = Line::from(vec![
        Span::raw(app.live_region().to_owned()),
        Span::styled(
            "   Tab focus · 1-9 collections · ? help · q quit",
            theme.style_muted(),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

fn draw_lightbox(frame: &mut Frame, app: &App, index: usize) {
    let theme = &app.theme;
    let Some(lightbox) = view::lightbox(app.catalogue().certifications(), index) else {
        return;
    };

    let area = popup_area(frame.area(), 60, 60);
    frame.render_widget(Clear, area);

    let body = Paragraph::new(vec![
        Line::styled(format!("▣ {}", lightbox.alt), theme.style_title()),
        Line::raw(""),
        Line::styled(lightbox.caption.clone(), theme.style_accent()),
        Line::raw(""),
        Line::styled(lightbox.src.clone(), theme.style_muted()),
        Line::raw(""),
        Line::styled("← → navigate · Esc close", theme.style_muted()),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Certification {} ", lightbox.position))
            .border_style(theme.style_border_focused()),
    );
    frame.render_widget(body, area);
}

fn draw_help(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = popup_area(frame.area(), 50, 60);
    frame.render_widget(Clear, area);

    let help_text = r#"
  Collections rail:
    Left/Right    Move focus (no selection)
    Enter/Space   Select focused collection
    1-9           Select collection directly

  Project strip:
    Up/Down       Move between cards
    Enter/Space   Open card details
    Esc           Back to collection view

  Certifications:
    Left/Right    Move between cards
    Enter/Space   Open lightbox

  General:
    Tab           Cycle region focus
    ?             Toggle help
    q             Quit
"#;

    let help = Paragraph::new(help_text).style(theme.style_normal()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(theme.style_border_focused()),
    );
    frame.render_widget(help, area);
}

/// Centered overlay rectangle sized as a percentage of the frame.
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(vertical);
    center
}

fn veil(theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(SWAP_VEIL)
        .style(theme.style_muted())
        .alignment(Alignment::Center)
}

fn tag_spans<'a>(tags: &'a [TagView], theme: &Theme) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    for tag in tags {
        match tag {
            TagView::Text(label) => {
                spans.push(Span::styled(format!("[{label}]"), theme.style_tag()));
            }
            TagView::Link { label, url } => {
                spans.push(Span::styled(format!("{label} ↗"), theme.style_link()));
                spans.push(Span::styled(format!(" ({url})"), theme.style_muted()));
            }
        }
        spans.push(Span::raw(" "));
    }
    spans
}
