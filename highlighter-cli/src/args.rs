//! Command-line arguments

use anyhow::{bail, Result};

pub const USAGE: &str = "\
usage: highlighter <text-file> [highlights.json] [--class NAME]
       highlighter --segments <text-file> [highlights.json]";

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive highlighter
    Interactive {
        text_path: Option<String>,
        highlights_path: Option<String>,
        class: Option<String>,
    },
    /// Print the segment table as JSON and exit
    Segments {
        text_path: String,
        highlights_path: Option<String>,
    },
    Help,
}

/// Parse arguments (without the program name)
pub fn parse<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut positional = Vec::new();
    let mut class = None;
    let mut segments = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--segments" => segments = true,
            "--class" => match args.next() {
                Some(name) => class = Some(name),
                None => bail!("--class needs a value\n{USAGE}"),
            },
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            _ => positional.push(arg),
        }
    }

    if positional.len() > 2 {
        bail!("too many arguments\n{USAGE}");
    }
    let mut positional = positional.into_iter();
    let text_path = positional.next();
    let highlights_path = positional.next();

    if segments {
        let Some(text_path) = text_path else {
            bail!("--segments needs a text file\n{USAGE}");
        };
        return Ok(Command::Segments {
            text_path,
            highlights_path,
        });
    }

    Ok(Command::Interactive {
        text_path,
        highlights_path,
        class,
    })
}
