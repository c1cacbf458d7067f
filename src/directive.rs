/*
 * vMailhost mail proxy configuration renderer
 * Copyright (C) 2026 Team vMailhost
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License along with
 * this program. If not, see https://www.gnu.org/licenses/.
 *
*/
use std::fmt::Write;

/// Value of a free-form proxy directive injected around the generated block.
///
/// Keys render sorted (the maps are [`std::collections::BTreeMap`]), which
/// keeps the output stable run over run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum DirectiveValue {
    /// renders as `key value;`
    Value(String),
    /// renders one `key value;` line per element
    Values(Vec<String>),
    /// renders as `key { ... }`, one nesting level at most
    Block(std::collections::BTreeMap<String, BlockEntry>),
}

/// Entry inside a nested directive block.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum BlockEntry {
    /// renders as `key value;`
    Value(String),
    /// renders one `key value;` line per element
    Values(Vec<String>),
}

fn put(out: &mut String, indent: usize, key: &str, value: &str) {
    let _ = if value.is_empty() {
        writeln!(out, "{:indent$}{key};", "")
    } else {
        writeln!(out, "{:indent$}{key} {value};", "")
    };
}

pub(crate) fn render_map(
    out: &mut String,
    indent: usize,
    map: &std::collections::BTreeMap<String, DirectiveValue>,
) {
    for (key, value) in map {
        match value {
            DirectiveValue::Value(v) => put(out, indent, key, v),
            DirectiveValue::Values(vs) => {
                for v in vs {
                    put(out, indent, key, v);
                }
            }
            DirectiveValue::Block(entries) => {
                let _ = writeln!(out, "{:indent$}{key} {{", "");
                for (entry_key, entry) in entries {
                    match entry {
                        BlockEntry::Value(v) => put(out, indent + 2, entry_key, v),
                        BlockEntry::Values(vs) => {
                            for v in vs {
                                put(out, indent + 2, entry_key, v);
                            }
                        }
                    }
                }
                let _ = writeln!(out, "{:indent$}}}", "");
            }
        }
    }
}
