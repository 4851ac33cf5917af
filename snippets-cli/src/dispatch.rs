// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Maps a parsed command onto one store operation and renders its result.

use std::io::Write;

use log::{debug, info};
use snippets_db::{Listing, SnippetDb};

use crate::cli::Command;
use crate::error::{CliError, IoContext};

/// Run `command` against `db` and write the rendered result to `out`.
///
/// Not-found and empty results are ordinary output, not errors.
pub fn run<W: Write>(db: &mut SnippetDb, command: &Command, out: &mut W) -> Result<(), CliError> {
    debug!("Dispatching {command:?}");
    let rendered = match command {
        Command::Put { name, snippet } => {
            let stored = db.put(name, snippet)?;
            format!("Stored {:?} as {:?}\n", stored.message, stored.keyword)
        }
        Command::Get { name } => match db.get(name)? {
            Some(message) => format!("Retrieved snippet: {message:?}\n"),
            None => format!("No snippet found for {name:?}\n"),
        },
        Command::Catalog => match db.catalog()? {
            Listing::Entries(keywords) => {
                let quoted: Vec<String> = keywords.iter().map(|k| format!("{k:?}")).collect();
                format!("Keywords: {}\n", quoted.join(", "))
            }
            Listing::Empty => "No snippets stored\n".to_string(),
        },
        Command::Search { string } => render_matches(string, &db.search(string)?),
    };

    out.write_all(rendered.as_bytes())
        .io_context(|| "Failed to write command output".to_string())?;
    info!("Command finished");
    Ok(())
}

fn render_matches(needle: &str, listing: &Listing) -> String {
    match listing {
        Listing::Entries(messages) => {
            let mut rendered = format!(
                "Found {} snippet(s) matching {needle:?}:\n",
                messages.len()
            );
            for message in messages {
                rendered.push_str(&format!("  {message:?}\n"));
            }
            rendered
        }
        Listing::Empty => format!("No snippets matching {needle:?}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn db() -> SnippetDb {
        let mut db = SnippetDb::open_memory().unwrap();
        for (name, snippet) in [
            ("greeting", "hello world"),
            ("blank", ""),
            ("b, c", "two\nlines"),
            ("y", "world"),
        ] {
            db.put(name, snippet).unwrap();
        }
        db
    }

    fn dispatch(db: &mut SnippetDb, command: Command) -> String {
        let mut out = Vec::new();
        run(db, &command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn get(name: &str) -> Command {
        Command::Get { name: name.into() }
    }

    fn search(string: &str) -> Command {
        Command::Search {
            string: string.into(),
        }
    }

    #[rstest]
    #[case::put(
        Command::Put { name: "new".into(), snippet: "text".into() },
        "Stored \"text\" as \"new\"\n"
    )]
    #[case::get(get("greeting"), "Retrieved snippet: \"hello world\"\n")]
    #[case::get_empty_message(get("blank"), "Retrieved snippet: \"\"\n")]
    #[case::get_missing(get("missing"), "No snippet found for \"missing\"\n")]
    #[case::catalog(
        Command::Catalog,
        "Keywords: \"b, c\", \"blank\", \"greeting\", \"y\"\n"
    )]
    #[case::search(
        search("world"),
        "Found 2 snippet(s) matching \"world\":\n  \"hello world\"\n  \"world\"\n"
    )]
    #[case::search_multiline(
        search("lines"),
        "Found 1 snippet(s) matching \"lines\":\n  \"two\\nlines\"\n"
    )]
    #[case::search_no_match(search("zzz"), "No snippets matching \"zzz\"\n")]
    fn test_rendering(mut db: SnippetDb, #[case] command: Command, #[case] expected: &str) {
        assert_eq!(dispatch(&mut db, command), expected);
    }

    #[test]
    fn test_empty_catalog() {
        let mut db = SnippetDb::open_memory().unwrap();
        assert_eq!(dispatch(&mut db, Command::Catalog), "No snippets stored\n");
    }

    #[rstest]
    fn test_put_then_get(mut db: SnippetDb) {
        dispatch(
            &mut db,
            Command::Put {
                name: "greeting".into(),
                snippet: "replaced".into(),
            },
        );
        assert_eq!(
            dispatch(&mut db, get("greeting")),
            "Retrieved snippet: \"replaced\"\n"
        );
    }

    #[rstest]
    fn test_store_errors_propagate(mut db: SnippetDb) {
        let mut out = Vec::new();
        let command = Command::Put {
            name: String::new(),
            snippet: "text".into(),
        };

        let err = run(&mut db, &command, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Db(snippets_db::Error::EmptyKeyword)));
        assert!(out.is_empty());
    }
}
