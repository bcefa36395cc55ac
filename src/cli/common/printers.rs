// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Pretty printers for reporting information.
use std::{borrow::Cow, sync::Mutex};

use log::Level;

const VERTICAL: char = '│';
const UP_AND_RIGHT: char = '└';
const VERTICAL_AND_RIGHT: char = '├';

type Block = Vec<Cow<'static, str>>;

lazy_static::lazy_static! {
    static ref WARNINGS: Mutex<Vec<Block>> = Mutex::new(vec![]);
}

/// Draw `blocks` as a tree hanging off a title line. The first line of each
/// block gets a branch; the last block's single line closes the tree.
fn tree_lines(blocks: &[Block]) -> Vec<String> {
    let num_blocks = blocks.len();
    blocks
        .iter()
        .enumerate()
        .flat_map(|(i_block, block)| {
            let last_block = i_block + 1 == num_blocks;
            let num_lines = block.len();
            block.iter().enumerate().map(move |(i_line, line)| {
                let symbol = match (i_line, i_line + 1 == num_lines, last_block) {
                    (0, true, true) => UP_AND_RIGHT,
                    (0, _, _) => VERTICAL_AND_RIGHT,
                    _ => VERTICAL,
                };
                format!("{symbol} {line}")
            })
        })
        .collect()
}

fn log_tree(level: Level, title: &str, blocks: &[Block]) {
    log::log!(level, "{}", console::style(title).bold());
    for line in tree_lines(blocks) {
        log::log!(level, "{line}");
    }
    log::log!(level, "");
}

pub(crate) struct InfoPrinter {
    title: Cow<'static, str>,
    blocks: Vec<Block>,
}

impl InfoPrinter {
    pub(crate) fn new(title: Cow<'static, str>) -> Self {
        Self {
            title,
            blocks: vec![],
        }
    }

    pub(crate) fn push_line(&mut self, line: Cow<'static, str>) {
        self.blocks.push(vec![line]);
    }

    pub(crate) fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub(crate) fn display(self) {
        log_tree(Level::Info, &self.title, &self.blocks);
    }
}

/// Collect a warning for the user. Collected warnings are shown together by
/// [`display_warnings`].
pub(crate) trait Warn {
    fn warn(self);
}

impl Warn for String {
    fn warn(self) {
        match WARNINGS.lock() {
            Ok(mut w) => w.push(vec![self.into()]),
            // Don't lose the message if another thread panicked.
            Err(_) => log::warn!("{self}"),
        }
    }
}

/// Print out any warnings that have been collected, then forget them.
pub(crate) fn display_warnings() {
    log::debug!("Displaying warnings");
    if let Ok(mut w) = WARNINGS.lock() {
        if !w.is_empty() {
            log_tree(Level::Warn, "Warnings", &w);
            w.clear();
        }
    }
}
