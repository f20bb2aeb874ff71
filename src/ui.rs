use crate::app::{App, FormFocus, InputMode, NoticeKind};
use crate::carousel::SlidePosition;
use crate::form::Field;
use crate::section::Section;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const ACCENT: Color = Color::Rgb(240, 140, 90);

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Section
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_section(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);

    if app.nav_open {
        render_nav_overlay(app, frame);
    }
    if let Some(notice) = &app.notification {
        render_notification(notice.kind, &notice.message, frame);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .style(Style::default().fg(Color::White));

    let mut spans = vec![Span::styled(
        format!(" {} ", app.practice.name),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];

    if app.is_desktop() {
        for section in Section::ALL {
            let style = if section == app.active_section() {
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {} ", section.label()), style));
        }
    } else {
        spans.push(Span::styled(" [m] Menu ", Style::default().fg(Color::Gray)));
    }

    let cta_style = if app.is_cta_active() {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cta = " Book a home visit [h] ";

    let used: usize = spans.iter().map(Span::width).sum();
    let spacer = (area.width as usize).saturating_sub(used + cta.len());
    spans.push(Span::raw(" ".repeat(spacer)));
    spans.push(Span::styled(cta, cta_style));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_section(app: &App, frame: &mut Frame, area: Rect) {
    match app.active_section() {
        Section::Home => render_home(app, frame, area),
        Section::Works => render_works(app, frame, area),
        Section::About => render_about(app, frame, area),
        Section::Contact => render_contact(app, frame, area),
        Section::Hire => render_hire(app, frame, area),
    }
}

fn render_home(app: &App, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::styled(
            app.practice.name.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(app.practice.tagline.clone(), Style::default().fg(Color::White)),
        Line::raw(""),
        Line::styled(
            "Scroll, swipe or press ↓ to explore",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .scroll((app.scroll_offset, 0));
    frame.render_widget(paragraph, area);
}

fn render_works(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let heading = Paragraph::new(Line::from(vec![
        Span::styled("What I do", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("   [←/→] browse", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);

    for (slide, column) in app.carousel.visible_window().zip(columns.iter()) {
        let (border, title_style) = match slide.position {
            SlidePosition::Center => (
                Style::default().fg(ACCENT),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            SlidePosition::Left | SlidePosition::Right => (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Gray),
            ),
        };

        let lines = vec![
            Line::styled(slide.item.title.clone(), title_style),
            Line::raw(""),
            Line::raw(slide.item.description.clone()),
            Line::raw(""),
            Line::styled(slide.item.image.clone(), Style::default().fg(Color::DarkGray)),
        ];

        let card = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .wrap(Wrap { trim: true })
            .scroll((app.scroll_offset, 0));
        frame.render_widget(card, *column);
    }
}

fn render_about(app: &App, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::styled("About me", Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::raw(app.practice.about.clone()),
    ])
    .wrap(Wrap { trim: true })
    .scroll((app.scroll_offset, 0));
    frame.render_widget(paragraph, inset(area));
}

fn render_contact(app: &App, frame: &mut Frame, area: Rect) {
    let label = Style::default().fg(ACCENT);
    let paragraph = Paragraph::new(vec![
        Line::styled("Get in touch", Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Email   ", label),
            Span::raw(app.practice.email.clone()),
        ]),
        Line::from(vec![
            Span::styled("Phone   ", label),
            Span::raw(app.practice.phone.clone()),
        ]),
        Line::from(vec![
            Span::styled("Area    ", label),
            Span::raw(app.practice.area.clone()),
        ]),
    ])
    .wrap(Wrap { trim: true })
    .scroll((app.scroll_offset, 0));
    frame.render_widget(paragraph, inset(area));
}

fn render_hire(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let focused = |target: FormFocus| editing && app.focus == target;

    let mut lines = vec![
        Line::styled(
            "Request a home visit",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];

    for field in [Field::Name, Field::Email] {
        let state = app.form.field_state(field);
        let label_style = if state.focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else if state.has_value {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let cursor = if focused(FormFocus::Field(field)) { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", field.label()), label_style),
            Span::raw(app.form.value(field).to_string()),
            Span::styled(cursor, Style::default().fg(ACCENT)),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Services",
        Style::default().fg(Color::Gray),
    ));
    for (i, service) in app.services.iter().enumerate() {
        let mark = if app.form.is_selected(service) { "[x]" } else { "[ ]" };
        let style = if focused(FormFocus::Service(i)) {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::styled(format!("  {mark} {service}"), style));
    }

    lines.push(Line::raw(""));
    let submit_style = if focused(FormFocus::Submit) {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };
    lines.push(Line::styled(" Send request ", submit_style));

    let title = if editing {
        " Intake form (editing) "
    } else {
        " Intake form [Enter] to fill in "
    };
    let border = if editing { ACCENT } else { Color::DarkGray };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset, 0));
    frame.render_widget(paragraph, inset(area));
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let dots: Vec<Span> = Section::ALL
        .iter()
        .map(|s| {
            if *s == app.active_section() {
                Span::styled("● ", Style::default().fg(ACCENT))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let help = if app.input_mode == InputMode::Editing {
        "[Tab] Next | [Space] Toggle | [Enter] Send | [Esc] Done"
    } else {
        "[↑/↓] Section | [1-5] Jump | [m] Menu | [h] Hire | [q] Quit"
    };

    let mut spans = dots;
    spans.push(Span::styled(
        format!("  {help}"),
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}

fn render_nav_overlay(app: &App, frame: &mut Frame) {
    let area = centered(frame.area(), 30, Section::ALL.len() as u16 + 2);
    let items: Vec<ListItem> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let prefix = if i == app.nav_cursor { "> " } else { "  " };
            let style = if *section == app.active_section() {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::Yellow)),
                Span::styled(section.label(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Menu "));
    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}

fn render_notification(kind: NoticeKind, message: &str, frame: &mut Frame) {
    let area = centered(frame.area(), 60, 7);
    let (title, color) = match kind {
        NoticeKind::Error => (" Please check the form ", Color::Red),
        NoticeKind::Confirmation => (" Request sent ", Color::Green),
    };

    let paragraph = Paragraph::new(vec![
        Line::raw(message.to_string()),
        Line::raw(""),
        Line::styled("Press any key", Style::default().fg(Color::DarkGray)),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(color)),
    )
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn inset(area: Rect) -> Rect {
    let [inner] = Layout::horizontal([Constraint::Max(90)])
        .flex(Flex::Center)
        .areas(area);
    inner
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
