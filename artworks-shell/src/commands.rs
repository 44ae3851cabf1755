//! Typed shell commands and their translation into view events.

use std::num::ParseIntError;

use artworks_lib::view::TableEvent;
use artworks_lib::view::TableProps;
use artworks_lib::view::ViewEvent;

/// Errors for a line that cannot be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'h' for help")]
    Unknown(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("'{value}' is not a number: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("There is no row {0} on this page")]
    NoSuchRow(usize),
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Goto(u32),
    PageSize(u32),
    /// Flip the selection of rows, by 1-based position on the page.
    Toggle(Vec<usize>),
    SelectPage,
    DeselectPage,
    Clear,
    Retry,
    TogglePanel,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  n, next            next page
  p, prev            previous page
  g, goto <page>     jump to a page
  size <n>           rows per page (1-1000)
  t <row> [row...]   toggle rows on this page
  a, all             select every row on this page
  none               deselect every row on this page
  c, clear           clear the whole selection
  v                  show or hide the selected artworks
  r, retry           reload after a failed page
  h, help            this help
  q, quit            exit";

/// Parses one line. Blank lines parse to `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "n" | "next" => Command::Next,
        "p" | "prev" | "previous" => Command::Previous,
        "g" | "goto" => Command::Goto(number(words.next(), "goto", "a page number")?),
        "size" => Command::PageSize(number(words.next(), "size", "a page size")?),
        "t" | "toggle" => {
            let rows = words
                .map(|word| number::<usize>(Some(word), "toggle", "row numbers"))
                .collect::<Result<Vec<_>, _>>()?;
            if rows.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "toggle",
                    what: "row numbers",
                });
            }
            Command::Toggle(rows)
        }
        "a" | "all" => Command::SelectPage,
        "none" => Command::DeselectPage,
        "c" | "clear" => Command::Clear,
        "r" | "retry" => Command::Retry,
        "v" | "view" => Command::TogglePanel,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn number<T>(word: Option<&str>, command: &'static str, what: &'static str) -> Result<T, CommandError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    let word = word.ok_or(CommandError::MissingArgument { command, what })?;
    word.parse().map_err(|source| CommandError::InvalidNumber {
        value: word.to_string(),
        source,
    })
}

impl Command {
    /// Translates the command into a view event against what is on screen.
    ///
    /// Row toggles are reported the way a table reports them: as the full
    /// selection of the visible page after the change.
    pub fn to_event(&self, props: &TableProps<'_>) -> Result<Option<ViewEvent>, CommandError> {
        let event = match self {
            Command::Next => ViewEvent::NextPage,
            Command::Previous => ViewEvent::PreviousPage,
            Command::Goto(index) => TableEvent::PageChange {
                new_page_index: *index,
            }
            .into(),
            Command::PageSize(size) => ViewEvent::PageSize(*size),
            Command::Toggle(rows) => {
                let mut selected = props.selected.clone();
                for row in rows {
                    let record = row
                        .checked_sub(1)
                        .and_then(|position| props.row(position))
                        .ok_or(CommandError::NoSuchRow(*row))?;
                    if !selected.remove(&record.id) {
                        selected.insert(record.id);
                    }
                }
                TableEvent::SelectionChange {
                    selected_ids_on_current_page: selected,
                }
                .into()
            }
            Command::SelectPage => ViewEvent::TogglePage { selected: true },
            Command::DeselectPage => ViewEvent::TogglePage { selected: false },
            Command::Clear => ViewEvent::ClearSelection,
            Command::Retry => ViewEvent::Retry,
            Command::TogglePanel => ViewEvent::ToggleSummaryPanel,
            Command::Help | Command::Quit => return Ok(None),
        };
        Ok(Some(event))
    }
}
