use crate::ui::app::App;
use crate::ui::directory::{
    DirectoryRow, DirectoryState, PageControl, SortConfig, SortKey, GENDER_CHOICES,
};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

const COLUMN_WIDTHS: [Constraint; 6] = [
    Constraint::Length(5),
    Constraint::Min(16),
    Constraint::Length(22),
    Constraint::Length(17),
    Constraint::Length(26),
    Constraint::Min(20),
];

/// Page controls drawn at once; the rest are elided around the current page.
const MAX_VISIBLE_PAGES: u32 = 15;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.directory();
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(state), regions.header);
    frame.render_widget(filter_bar(state), regions.filters);
    frame.render_widget(table(state), regions.table);
    frame.render_widget(pagination(state), regions.pagination);
    frame.render_widget(Footer::new().widget(regions.footer, state), regions.footer);
}

fn bordered(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn choice_span(label: String, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            format!("[{}]", label),
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {} ", label), Style::default().fg(HEADER_TEXT))
    }
}

/// `Gender: [All] male female │ Country: [All] ...`
pub fn filter_line(state: &DirectoryState) -> Line<'static> {
    let filters = state.filters();
    let label_style = Style::default().fg(HEADER_SEPARATOR);

    let mut spans = vec![
        Span::styled(" Gender: ", label_style),
        choice_span("All".to_string(), filters.gender.is_none()),
    ];
    for gender in GENDER_CHOICES {
        spans.push(choice_span(
            gender.to_string(),
            filters.gender.as_deref() == Some(gender),
        ));
    }

    spans.push(Span::styled("  │  Country: ", label_style));
    spans.push(choice_span("All".to_string(), filters.country.is_none()));
    for country in state.country_choices() {
        let selected = filters.country.as_deref() == Some(country);
        spans.push(choice_span(country.to_string(), selected));
    }

    Line::from(spans)
}

fn filter_bar(state: &DirectoryState) -> Paragraph<'static> {
    Paragraph::new(filter_line(state)).block(bordered("Filters"))
}

fn table_row(row: DirectoryRow) -> Row<'static> {
    Row::new(vec![
        Cell::from(row.id.to_string()),
        Cell::from(row.image),
        Cell::from(row.full_name),
        Cell::from(row.demography),
        Cell::from(row.title),
        Cell::from(row.location),
    ])
}

/// Column title with its sort hotkey, plus the direction arrow when `key`
/// is the active sort.
pub fn sort_header_label(title: &str, key: SortKey, hotkey: char, sort: SortConfig) -> String {
    if sort.key == key {
        format!("{} {} ({})", title, sort.direction.arrow(), hotkey)
    } else {
        format!("{} ({})", title, hotkey)
    }
}

fn table(state: &DirectoryState) -> Table<'static> {
    let sort = state.sort();
    let header_cell = |title: &str, key: SortKey, hotkey: char| {
        Cell::from(sort_header_label(title, key, hotkey, sort))
    };

    // Age sorts through the Demography column ("M/34").
    let header = Row::new(vec![
        header_cell("ID", SortKey::Id, 'i'),
        Cell::from("Image"),
        header_cell("Full Name", SortKey::FirstName, 'n'),
        header_cell("Demography", SortKey::Age, 'a'),
        Cell::from("Title"),
        Cell::from("Location"),
    ])
    .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row<'static>> = state.rows().into_iter().map(table_row).collect();

    Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .column_spacing(1)
        .style(Style::default().fg(HEADER_TEXT))
        .block(bordered("Directory"))
}

/// One span per page control; the current page is highlighted. An ellipsis
/// marks pages of `page_count` left out on either side.
pub fn pagination_line(controls: &[PageControl], page_count: u32) -> Line<'static> {
    let elided = Style::default().fg(HEADER_SEPARATOR);
    let mut spans = vec![Span::raw(" ")];
    if controls.first().is_some_and(|c| c.number > 1) {
        spans.push(Span::styled("… ", elided));
    }
    for control in controls {
        let style = if control.active {
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        spans.push(Span::styled(format!(" {} ", control.number), style));
        spans.push(Span::raw(" "));
    }
    if controls.last().is_some_and(|c| c.number < page_count) {
        spans.push(Span::styled("…", elided));
    }
    Line::from(spans)
}

fn pagination(state: &DirectoryState) -> Paragraph<'static> {
    let controls = state.page_window(MAX_VISIBLE_PAGES);
    Paragraph::new(pagination_line(&controls, state.page_count()))
        .wrap(Wrap { trim: false })
        .block(bordered("Pages"))
}
