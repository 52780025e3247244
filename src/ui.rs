//! Terminal drawing - turns a [`RenderState`] into ratatui widgets

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::render::{RenderState, RepoListView};
use crate::messages::ui_events::Panel;
use crate::app::dice::DiceRoll;
use crate::models::{DiceKind, Profile};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub const EMPTY_MESSAGE: &str = "No repositories found";

/// Draw the whole screen. `tick` drives the loading spinner.
pub fn draw(f: &mut Frame, state: &RenderState, tick: usize) {
    let area = f.area();
    let header = header_lines(&state.profile);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height(&header, area.width)), // Profile
            Constraint::Length(1),                                  // Panel switcher
            Constraint::Min(3),                                     // Active panel
            Constraint::Length(1),                                  // Status bar
        ])
        .split(area);

    draw_header(f, header, chunks[0]);
    draw_switcher(f, state, chunks[1]);

    // Both panels are carried in the state; only the visible one is drawn
    if !state.repositories.hidden {
        draw_repositories(f, &state.repositories.content, chunks[2], tick);
    } else if !state.dice.hidden {
        draw_dice(f, &state.dice.content, chunks[2]);
    }

    draw_status_bar(f, state, chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn header_lines(profile: &Profile) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(profile.name.as_str(), Style::default().fg(Color::Cyan).bold())),
        Line::from(vec![
            Span::raw(profile.headline.as_str()),
            Span::styled(format!("  {}", profile.location), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let mut links = Vec::new();
    for (i, link) in profile.links.iter().enumerate() {
        if i > 0 {
            links.push(Span::raw("  "));
        }
        links.push(Span::styled(format!("{}: ", link.label), Style::default().fg(Color::Gray)));
        links.push(Span::styled(link.url.as_str(), Style::default().fg(Color::Blue).underlined()));
    }
    lines.push(Line::from(links));

    for paragraph in &profile.bio {
        lines.push(Line::from(paragraph.as_str()));
    }
    lines
}

/// Rows the header needs at `width` columns, borders included
fn header_height(lines: &[Line], width: u16) -> u16 {
    let inner = width.saturating_sub(2) as usize;
    let rows: usize = lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            wrapped_rows(&text, inner)
        })
        .sum();
    (rows + 2).min(u16::MAX as usize) as u16
}

/// Rows `text` occupies when word-wrapped to `width` columns
fn wrapped_rows(text: &str, width: usize) -> usize {
    if width == 0 {
        return 1;
    }
    let mut rows = 1;
    let mut col = 0;
    for word in text.split_whitespace() {
        let w = Span::raw(word).width();
        if col == 0 {
            col = w;
        } else if col + 1 + w <= width {
            col += 1 + w;
        } else {
            rows += 1;
            col = w;
        }
        // words wider than a row are broken across rows
        while col > width {
            rows += 1;
            col -= width;
        }
    }
    rows
}

fn draw_header(f: &mut Frame, lines: Vec<Line>, area: Rect) {
    let header = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" About Me "))
        .wrap(Wrap { trim: true });
    f.render_widget(header, area);
}

fn draw_switcher(f: &mut Frame, state: &RenderState, area: Rect) {
    let tab = |panel: Panel, key: char, color: Color| {
        Span::styled(
            format!(" {}:{} ", key, panel.title()),
            if state.active_panel == panel {
                Style::default().fg(Color::Black).bg(color).bold()
            } else {
                Style::default().fg(Color::Gray)
            },
        )
    };

    let tabs = vec![
        tab(Panel::Repositories, '1', Color::Cyan),
        Span::raw(" "),
        tab(Panel::DiceRoller, '2', Color::Magenta),
    ];
    f.render_widget(Paragraph::new(Line::from(tabs)), area);
}

fn draw_repositories(f: &mut Frame, view: &RepoListView, area: Rect, tick: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Repositories ");

    match view {
        RepoListView::Loading => {
            let spinner = SPINNER[tick % SPINNER.len()];
            let loading = Paragraph::new(format!("{} Loading repositories...", spinner))
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(loading, area);
        }
        RepoListView::Empty => {
            let empty = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
        }
        RepoListView::Error(message) => {
            let error = Paragraph::new(format!("Error loading repositories: {}", message))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: false })
                .block(block.border_style(Style::default().fg(Color::Red)));
            f.render_widget(error, area);
        }
        RepoListView::Rows { records, selected } => {
            let rows: Vec<Row> = records
                .iter()
                .map(|repo| {
                    Row::new(vec![
                        Cell::from(repo.name.as_str())
                            .style(Style::default().fg(Color::Blue).underlined()),
                        Cell::from(repo.description_text()),
                    ])
                })
                .collect();

            let table = Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
                .header(
                    Row::new(vec!["Name", "Description"])
                        .style(Style::default().fg(Color::Gray).bold()),
                )
                .block(block.title_bottom(Line::from(format!(" {} ", records.len())).right_aligned()))
                .row_highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("> ");

            let mut table_state = TableState::default();
            table_state.select(Some(*selected));
            f.render_stateful_widget(table, area, &mut table_state);
        }
    }
}

fn draw_dice(f: &mut Frame, rolls: &[DiceRoll], area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let mut buttons = Vec::new();
    for kind in DiceKind::ALL {
        buttons.push(Span::styled(
            format!(" [{}] Roll {} ", kind.key(), kind.as_str()),
            Style::default().fg(Color::Magenta),
        ));
    }
    let controls = Paragraph::new(Line::from(buttons)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Dice Roller "),
    );
    f.render_widget(controls, chunks[0]);

    let items: Vec<ListItem> = if rolls.is_empty() {
        vec![ListItem::new("No rolls yet.").style(Style::default().fg(Color::DarkGray))]
    } else {
        rolls
            .iter()
            .enumerate()
            .map(|(i, roll)| {
                let style = if i == 0 {
                    Style::default().fg(Color::Yellow).bold()
                } else {
                    Style::default()
                };
                ListItem::new(format!("{:>4}  {}", roll.kind.as_str(), roll.value)).style(style)
            })
            .collect()
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Rolls "));
    f.render_widget(list, chunks[1]);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading {
        format!(" Loading {} ", state.address)
    } else if let (Panel::Repositories, Some(url)) = (state.active_panel, &state.selected_url) {
        let timing = state.last_fetch_ms.map(|ms| format!(" ({}ms)", ms)).unwrap_or_default();
        format!(" {}{} | r:reload ?:help q:quit ", url, timing)
    } else {
        String::from(" 1/2/Tab:switch panel | ?:help | q:quit ")
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = format!(
        r#"
 {} {} - Keyboard Shortcuts

 PANELS
   1 / 2              Repositories / Dice Roller
   Tab                Switch panel

 REPOSITORIES
   ↑ / ↓  (k / j)     Move selection
   r                  Reload list

 DICE ROLLER
   3 4 8              Roll D3 / D4 / D8
   c 0 h              Roll D12 / D20 / D100

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#,
        APP_NAME, APP_VERSION
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::render::PanelView;
    use crate::models::RepositoryRecord;
    use ratatui::backend::TestBackend;

    fn render(state: &RenderState) -> Vec<String> {
        render_at(state, 100, 30)
    }

    fn render_at(state: &RenderState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, state, 0)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn screen_contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }

    fn with_repositories(view: RepoListView) -> RenderState {
        RenderState {
            repositories: PanelView {
                hidden: false,
                content: view,
            },
            is_loading: false,
            ..RenderState::default()
        }
    }

    fn records(n: usize) -> Vec<RepositoryRecord> {
        (0..n)
            .map(|i| {
                RepositoryRecord::new(format!("project-{}", i), format!("https://github.com/o/project-{}", i))
                    .with_description(format!("about project {}", i))
            })
            .collect()
    }

    #[test]
    fn test_loading_shows_indicator() {
        let lines = render(&RenderState::default());
        assert!(screen_contains(&lines, "Loading repositories..."));
        assert!(!screen_contains(&lines, EMPTY_MESSAGE));
    }

    #[test]
    fn test_empty_shows_message_not_loader() {
        let lines = render(&with_repositories(RepoListView::Empty));
        assert!(screen_contains(&lines, EMPTY_MESSAGE));
        assert!(!screen_contains(&lines, "Loading repositories..."));
        assert!(!screen_contains(&lines, "Error"));
    }

    #[test]
    fn test_error_is_visible() {
        let lines = render(&with_repositories(RepoListView::Error(String::from("HTTP 404: Not Found"))));
        assert!(screen_contains(&lines, "Error loading repositories: HTTP 404: Not Found"));
    }

    #[test]
    fn test_one_row_per_record() {
        let lines = render(&with_repositories(RepoListView::Rows {
            records: records(4),
            selected: 0,
        }));
        let rows = lines.iter().filter(|l| l.contains("project-")).count();
        assert_eq!(rows, 4);
        assert!(screen_contains(&lines, "about project 3"));
    }

    #[test]
    fn test_null_description_is_blank() {
        let lines = render(&with_repositories(RepoListView::Rows {
            records: vec![RepositoryRecord::new("bare", "https://github.com/o/bare")],
            selected: 0,
        }));
        let row = lines.iter().find(|l| l.contains("bare")).unwrap();
        assert!(!row.contains("None"));
        assert!(!row.contains("null"));
    }

    #[test]
    fn test_hidden_panel_is_not_drawn() {
        let mut state = with_repositories(RepoListView::Rows {
            records: records(2),
            selected: 0,
        });
        state.active_panel = Panel::DiceRoller;
        state.repositories.hidden = true;
        state.dice.hidden = false;

        let lines = render(&state);
        assert!(screen_contains(&lines, "Roll D20"));
        assert!(!screen_contains(&lines, "project-0"));
    }

    #[test]
    fn test_bio_wraps_without_clipping_at_80_columns() {
        let lines = render_at(&RenderState::default(), 80, 24);
        assert!(screen_contains(&lines, "software."));
        assert!(screen_contains(&lines, "Loading repositories..."));
    }

    #[test]
    fn test_wrapped_rows() {
        assert_eq!(wrapped_rows("", 10), 1);
        assert_eq!(wrapped_rows("one two", 10), 1);
        assert_eq!(wrapped_rows("one two three", 10), 2);
        assert_eq!(wrapped_rows("abcdefghijklmnopqrstuvwxy", 10), 3);
    }
}
