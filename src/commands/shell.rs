// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Line-oriented stand-in for the interactive act page. Every state change
//! re-renders the act; unchanged state is served from the cache.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::commands::{ensure_known, print};
use crate::config::Config;
use crate::engine::ActCache;
use crate::render::{PartyHeader, live, statement};
use crate::selection::Selection;
use crate::snapshot::Snapshot;

const HELP: &str = "\
commands:
  client <id>       select a client (clears the partner)
  partner <number>  select a partner (clears the client)
  from <date>       start day, YYYY-MM-DD (empty clears)
  to <date>         end day, YYYY-MM-DD (empty clears)
  clear             drop the selection and range
  show              render the act again
  print [file]      write the printable act
  quit              leave";

pub fn handle(snapshot: &Snapshot, cfg: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(snapshot, cfg, stdin.lock(), stdout.lock())
}

pub fn run<R: BufRead, W: Write>(
    snapshot: &Snapshot,
    cfg: &Config,
    input: R,
    mut output: W,
) -> Result<()> {
    let offset = cfg.offset()?;
    let mut sel = Selection::new(offset);
    let mut cache = ActCache::new();
    writeln!(output, "{}", HELP)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };
        let rerender = match cmd {
            "" => false,
            "quit" | "exit" => break,
            "help" => {
                writeln!(output, "{}", HELP)?;
                false
            }
            "client" => {
                sel.select_client(arg);
                true
            }
            "partner" => {
                sel.select_partner(arg);
                true
            }
            "from" | "to" => {
                let res = if cmd == "from" { sel.set_start(arg) } else { sel.set_end(arg) };
                match res {
                    Ok(()) => true,
                    Err(e) => {
                        writeln!(output, "error: {}", e)?;
                        false
                    }
                }
            }
            "clear" => {
                sel.clear();
                true
            }
            "show" => true,
            "print" => {
                match sel.counterparty() {
                    None => writeln!(output, "error: select a client or partner first")?,
                    Some(cp) => {
                        let rec = cache.get(snapshot, &sel.query());
                        let header = PartyHeader::lookup(snapshot, &cp);
                        let html = statement::render(&rec, Some(&header), offset)?;
                        let path = if arg.is_empty() {
                            print::default_path(cfg, &cp)
                        } else {
                            PathBuf::from(arg)
                        };
                        match print::write_statement(&path, &html) {
                            Ok(()) => writeln!(output, "Wrote act to {}", path.display())?,
                            Err(e) => writeln!(output, "error: {:#}", e)?,
                        }
                    }
                }
                false
            }
            other => {
                writeln!(output, "unknown command '{}' (try help)", other)?;
                false
            }
        };
        if !rerender {
            continue;
        }

        let header = match sel.counterparty() {
            Some(cp) => match ensure_known(snapshot, &cp) {
                Ok(()) => Some(PartyHeader::lookup(snapshot, &cp)),
                Err(e) => {
                    writeln!(output, "warning: {}", e)?;
                    Some(PartyHeader::lookup(snapshot, &cp))
                }
            },
            None => None,
        };
        let rec = cache.get(snapshot, &sel.query());
        write!(output, "{}", live::render(&rec, header.as_ref(), offset))?;
    }
    Ok(())
}
