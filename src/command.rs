use serde::{Deserialize, Serialize};

use crate::error::{FSError, Result};
use crate::virtual_file_sys::{EntryKind, SeekBase, ROOT_NAME};

pub const USAGE: &str = "\
CREATE <D|U> <path>
DELETE <path>
READ <path>
WRITE <path> <data...>
OPEN <path> <mode>
SEEK <path> <base> <offset>   (base: -1=start, 0=current, 1=end)
CLOSE <path>
LS [path]
TREE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Create { kind: EntryKind, path: String },
    Delete { path: String },
    Read { path: String },
    Write { path: String, data: String },
    Open { path: String, mode: String },
    Seek { path: String, base: SeekBase, offset: i64 },
    Close { path: String },
    List { path: String },
    Tree,
}

/// Splits a command line on whitespace. A double-quoted run is part of one
/// token with the quotes removed, so `"hello world"` is a single token and
/// `""` an empty one. An unterminated quote runs to the end of the line.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;
    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }
    tokens
}

fn usage(verb: &str) -> FSError {
    let line = USAGE
        .lines()
        .find(|l| l.starts_with(verb))
        .unwrap_or(verb);
    FSError::CmdArgError(format!("Usage: {line}"))
}

fn joined_path(verb: &str, args: &[String]) -> Result<String> {
    if args.is_empty() {
        return Err(usage(verb));
    }
    Ok(args.join(" "))
}

fn parse_int(verb: &str, what: &str, token: &str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|_| FSError::CmdArgError(format!("{verb}: {what} must be an integer, got {token:?}")))
}

pub fn parse_from_string(buf: &str) -> Result<Command> {
    let tokens = tokenize(buf);
    let (verb, args) = match tokens.split_first() {
        Some((verb, args)) => (verb.to_ascii_uppercase(), args),
        None => return Err(FSError::CmdArgError("No command entered".to_owned())),
    };
    let cmd = match verb.as_str() {
        "CREATE" => {
            if args.len() < 2 {
                return Err(usage("CREATE"));
            }
            let kind = EntryKind::from_tag(&args[0]).ok_or_else(|| {
                FSError::CmdArgError(format!("CREATE: type must be D or U, got {:?}", args[0]))
            })?;
            Command::Create { kind, path: args[1..].join(" ") }
        }
        "DELETE" => Command::Delete { path: joined_path("DELETE", args)? },
        "READ" => Command::Read { path: joined_path("READ", args)? },
        "CLOSE" => Command::Close { path: joined_path("CLOSE", args)? },
        "WRITE" => {
            if args.len() < 2 {
                return Err(usage("WRITE"));
            }
            Command::Write { path: args[0].clone(), data: args[1..].join(" ") }
        }
        "OPEN" => match args {
            [path, mode] => Command::Open { path: path.clone(), mode: mode.clone() },
            _ => return Err(usage("OPEN")),
        },
        "SEEK" => match args {
            [path, base, offset] => {
                let code = parse_int("SEEK", "base", base)?;
                let base = SeekBase::from_code(code).ok_or_else(|| {
                    FSError::CmdArgError(format!("SEEK: base must be -1, 0 or 1, got {code}"))
                })?;
                let offset = parse_int("SEEK", "offset", offset)?;
                Command::Seek { path: path.clone(), base, offset }
            }
            _ => return Err(usage("SEEK")),
        },
        "LS" => {
            let path = if args.is_empty() { ROOT_NAME.to_owned() } else { args.join(" ") };
            Command::List { path }
        }
        "TREE" => Command::Tree,
        _ => return Err(FSError::UnknownCmdError(tokens[0].clone())),
    };
    Ok(cmd)
}
